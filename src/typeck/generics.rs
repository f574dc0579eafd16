//! Generic instantiation: arity validation, constraint checking, and
//! parameter substitution.

use std::collections::HashMap;

use super::checker::TypeChecker;
use super::diagnostics::{codes, error};
use crate::diagnostics::CompilerError;
use crate::syntax::{ArrayTy, FnTy, GenericTy, PointerTy, RefTy, Ty};

impl TypeChecker {
    /// Check that `generic` can be instantiated with `args`: it must be a
    /// generic term, its constructor must have registered parameters, the
    /// arity must match, and every argument must satisfy its parameter's
    /// trait bounds.
    pub fn validate_generic_instantiation(
        &self,
        generic: &Ty,
        args: &[Ty],
    ) -> Result<(), CompilerError> {
        let Ty::Generic(term) = generic else {
            return Err(error(codes::TYPE_NOT_GENERIC, "Not a generic type"));
        };

        let Some(params) = self.registry.type_parameters(&term.name) else {
            return Err(error(
                codes::MISSING_TYPE_PARAMETERS,
                format!("Type parameters not found for: {}", term.name),
            ));
        };

        if params.len() != args.len() {
            return Err(error(
                codes::GENERIC_ARGUMENT_MISMATCH,
                "Wrong number of type arguments",
            ));
        }

        for (param, arg) in params.iter().zip(args) {
            self.check_trait_constraints(arg, &param.constraints)?;
        }

        Ok(())
    }

    /// Instantiate a generic term: validate, then replace every
    /// occurrence of each parameter name with its argument.
    pub fn instantiate_generic_type(
        &self,
        generic: &Ty,
        args: &[Ty],
    ) -> Result<Ty, CompilerError> {
        self.validate_generic_instantiation(generic, args)?;

        let Ty::Generic(term) = generic else {
            return Err(error(codes::TYPE_NOT_GENERIC, "Not a generic type"));
        };

        let mut substitutions = HashMap::new();
        if let Some(params) = self.registry.type_parameters(&term.name) {
            for (param, arg) in params.iter().zip(args) {
                substitutions.insert(param.name.clone(), arg.clone());
            }
        }

        Ok(substitute(generic, &substitutions))
    }
}

/// Apply a substitution map to a type term, building a fresh term. Type
/// variables and basic names are looked up in the map (a basic name that
/// matches a parameter is substituted); structural variants substitute
/// their children; nominal variants pass through.
#[must_use]
pub fn substitute(ty: &Ty, substitutions: &HashMap<String, Ty>) -> Ty {
    match ty {
        Ty::Var(var) => substitutions
            .get(&var.name)
            .cloned()
            .unwrap_or_else(|| ty.clone()),
        Ty::Basic(basic) => substitutions
            .get(&basic.name)
            .cloned()
            .unwrap_or_else(|| ty.clone()),
        Ty::Pointer(ptr) => Ty::Pointer(PointerTy {
            pointee: Box::new(substitute(&ptr.pointee, substitutions)),
            unique: ptr.unique,
        }),
        Ty::Ref(re) => Ty::Ref(RefTy {
            referent: Box::new(substitute(&re.referent, substitutions)),
            mutable: re.mutable,
        }),
        Ty::Array(arr) => Ty::Array(ArrayTy {
            element: Box::new(substitute(&arr.element, substitutions)),
            size: arr.size,
        }),
        Ty::Fn(fn_ty) => {
            let params = fn_ty
                .params
                .iter()
                .map(|param| substitute(param, substitutions))
                .collect();
            Ty::Fn(FnTy::new(params, substitute(&fn_ty.ret, substitutions)))
        }
        Ty::Generic(generic) => Ty::Generic(GenericTy {
            name: generic.name.clone(),
            args: generic
                .args
                .iter()
                .map(|arg| substitute(arg, substitutions))
                .collect(),
        }),
        Ty::Class(_) | Ty::Trait(_) => ty.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::FnTy;
    use crate::typeck::{Trait, TraitImpl, TypeParameter};

    fn checker_with_box() -> TypeChecker {
        let mut checker = TypeChecker::new();
        checker
            .register_trait(Trait::new("Printable").with_method(
                "print",
                FnTy::new(vec![Ty::basic("int")], Ty::basic("string")),
            ))
            .unwrap();
        checker
            .register_trait_impl(TraitImpl::new("Printable", Ty::basic("int")).with_method(
                "print",
                FnTy::new(vec![Ty::basic("int")], Ty::basic("string")),
            ))
            .unwrap();
        checker.registry_mut().register_generic_type(
            "Box",
            vec![TypeParameter::new("T").with_constraint("Printable")],
            Ty::generic("Box", vec![Ty::var("T")]),
        );
        checker
    }

    #[test]
    fn instantiation_replaces_every_parameter_occurrence() {
        let checker = checker_with_box();
        let boxed = checker
            .instantiate_generic_type(
                &Ty::generic("Box", vec![Ty::var("T")]),
                &[Ty::basic("int")],
            )
            .unwrap();
        assert_eq!(boxed, Ty::generic("Box", vec![Ty::basic("int")]));
    }

    #[test]
    fn constraint_violations_are_reported() {
        let checker = checker_with_box();
        let err = checker
            .instantiate_generic_type(
                &Ty::generic("Box", vec![Ty::var("T")]),
                &[Ty::basic("bool")],
            )
            .unwrap_err();
        assert_eq!(
            err.message(),
            "Type does not satisfy trait constraint: Printable"
        );
    }

    #[test]
    fn arity_and_shape_are_validated() {
        let checker = checker_with_box();
        let err = checker
            .validate_generic_instantiation(&Ty::basic("int"), &[])
            .unwrap_err();
        assert_eq!(err.message(), "Not a generic type");

        let err = checker
            .validate_generic_instantiation(
                &Ty::generic("Box", vec![Ty::var("T")]),
                &[Ty::basic("int"), Ty::basic("int")],
            )
            .unwrap_err();
        assert_eq!(err.message(), "Wrong number of type arguments");

        let err = checker
            .validate_generic_instantiation(
                &Ty::generic("Crate", vec![Ty::var("T")]),
                &[Ty::basic("int")],
            )
            .unwrap_err();
        assert_eq!(err.message(), "Type parameters not found for: Crate");
    }

    #[test]
    fn substitution_reaches_nested_positions() {
        let mut map = HashMap::new();
        map.insert("T".to_string(), Ty::basic("int"));

        let nested = Ty::function(
            vec![Ty::pointer(Ty::var("T")), Ty::array(Ty::basic("T"), 4)],
            Ty::generic("Option", vec![Ty::mut_reference(Ty::var("T"))]),
        );
        assert_eq!(
            substitute(&nested, &map),
            Ty::function(
                vec![
                    Ty::pointer(Ty::basic("int")),
                    Ty::array(Ty::basic("int"), 4)
                ],
                Ty::generic("Option", vec![Ty::mut_reference(Ty::basic("int"))]),
            )
        );
    }

    #[test]
    fn substitution_preserves_unmatched_terms_and_kinds() {
        let mut map = HashMap::new();
        map.insert("T".to_string(), Ty::basic("int"));

        assert_eq!(substitute(&Ty::var("U"), &map), Ty::var("U"));
        assert_eq!(substitute(&Ty::class("T"), &map), Ty::class("T"));
        assert_eq!(substitute(&Ty::trait_ty("T"), &map), Ty::trait_ty("T"));
        // The constructor name itself is never substituted.
        assert_eq!(
            substitute(&Ty::generic("T", vec![Ty::var("T")]), &map),
            Ty::generic("T", vec![Ty::basic("int")])
        );
        // A unique pointer keeps its flag through substitution.
        assert_eq!(
            substitute(&Ty::unique_pointer(Ty::var("T")), &map),
            Ty::unique_pointer(Ty::basic("int"))
        );
    }
}
