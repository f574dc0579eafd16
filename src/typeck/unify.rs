//! Structural unification with numeric promotion.
//!
//! Robinson's algorithm over the type sum, with one deliberate departure
//! from a strict unifier: two numeric types always widen to the canonical
//! `float` (if either side floats) or `int` type. That widening is the
//! only non-structural rule in the system.

use super::checker::TypeChecker;
use super::diagnostics::{codes, error};
use super::helpers::{is_floating, is_numeric};
use crate::diagnostics::CompilerError;
use crate::syntax::{ArrayTy, FnTy, GenericTy, Ty};

impl TypeChecker {
    /// Unify two types, producing their common type or an error.
    pub fn unify_types(&self, t1: &Ty, t2: &Ty) -> Result<Ty, CompilerError> {
        if t1 == t2 {
            return Ok(t1.clone());
        }

        // Bind type variables, refusing infinite types.
        if let Ty::Var(var) = t1 {
            return if occurs_in(&var.name, t2) {
                Err(error(codes::OCCURS_CHECK, "Circular type dependency"))
            } else {
                Ok(t2.clone())
            };
        }
        if let Ty::Var(var) = t2 {
            return if occurs_in(&var.name, t1) {
                Err(error(codes::OCCURS_CHECK, "Circular type dependency"))
            } else {
                Ok(t1.clone())
            };
        }

        if is_numeric(t1) && is_numeric(t2) {
            return Ok(if is_floating(t1) || is_floating(t2) {
                self.registry.float_ty()
            } else {
                self.registry.int_ty()
            });
        }

        if let (Ty::Fn(f1), Ty::Fn(f2)) = (t1, t2) {
            if f1.params.len() != f2.params.len() {
                return Err(error(
                    codes::FUNCTION_ARITY_MISMATCH,
                    "Function arity mismatch",
                ));
            }
            let mut params = Vec::with_capacity(f1.params.len());
            for (p1, p2) in f1.params.iter().zip(&f2.params) {
                params.push(self.unify_types(p1, p2)?);
            }
            let ret = self.unify_types(&f1.ret, &f2.ret)?;
            return Ok(Ty::Fn(FnTy::new(params, ret)));
        }

        if let (Ty::Array(a1), Ty::Array(a2)) = (t1, t2) {
            let element = self.unify_types(&a1.element, &a2.element)?;
            // Equal sizes survive; disagreeing sizes collapse to dynamic.
            let size = if a1.size == a2.size { a1.size } else { 0 };
            return Ok(Ty::Array(ArrayTy {
                element: Box::new(element),
                size,
            }));
        }

        if let (Ty::Generic(g1), Ty::Generic(g2)) = (t1, t2) {
            if g1.name != g2.name || g1.args.len() != g2.args.len() {
                return Err(error(codes::GENERIC_MISMATCH, "Generic types don't match"));
            }
            let mut args = Vec::with_capacity(g1.args.len());
            for (arg1, arg2) in g1.args.iter().zip(&g2.args) {
                args.push(self.unify_types(arg1, arg2)?);
            }
            return Ok(Ty::Generic(GenericTy {
                name: g1.name.clone(),
                args,
            }));
        }

        // Last resort: one side may subsume the other.
        if self.is_subtype(t1, t2).unwrap_or(false) {
            return Ok(t2.clone());
        }
        if self.is_subtype(t2, t1).unwrap_or(false) {
            return Ok(t1.clone());
        }

        Err(error(
            codes::TYPE_INCOMPATIBLE,
            "Cannot unify incompatible types",
        ))
    }
}

/// Occurs check: does `var_name` appear anywhere in `ty`?
#[must_use]
pub(super) fn occurs_in(var_name: &str, ty: &Ty) -> bool {
    match ty {
        Ty::Var(var) => var.name == var_name,
        Ty::Basic(basic) => basic.name == var_name,
        Ty::Pointer(ptr) => occurs_in(var_name, &ptr.pointee),
        Ty::Ref(re) => occurs_in(var_name, &re.referent),
        Ty::Array(arr) => occurs_in(var_name, &arr.element),
        Ty::Fn(fn_ty) => {
            occurs_in(var_name, &fn_ty.ret)
                || fn_ty.params.iter().any(|param| occurs_in(var_name, param))
        }
        Ty::Generic(generic) => {
            generic.name == var_name
                || generic.args.iter().any(|arg| occurs_in(var_name, arg))
        }
        Ty::Class(_) | Ty::Trait(_) => false,
    }
}
