//! Subtyping and assignability.

use super::checker::TypeChecker;
use crate::diagnostics::CompilerError;
use crate::syntax::Ty;

impl TypeChecker {
    /// Whether `from` may flow where `to` is expected: structural
    /// equality first, subtyping otherwise.
    pub fn check_type_compatibility(&self, from: &Ty, to: &Ty) -> Result<bool, CompilerError> {
        if from == to {
            return Ok(true);
        }
        self.is_subtype(from, to)
    }

    /// Subtype relation. Errors surface only from trait lookup; every
    /// other mismatch is simply `false`.
    pub fn is_subtype(&self, sub: &Ty, sup: &Ty) -> Result<bool, CompilerError> {
        // The null sentinel flows into any pointer. Only the canonical
        // basic spelling qualifies; a class named "null" does not.
        if sub.basic_name() == Some("null") && sup.is_pointer() {
            return Ok(true);
        }

        // Reflexivity.
        if sub == sup {
            return Ok(true);
        }

        // Nominal classes: walk the superclass chain.
        if let (Ty::Class(sub_class), Ty::Class(sup_class)) = (sub, sup) {
            let mut current = self.registry.class_info(&sub_class.name);
            while let Some(info) = current {
                if info.superclass == sup_class.name {
                    return Ok(true);
                }
                if info.superclass.is_empty() {
                    break;
                }
                current = self.registry.class_info(&info.superclass);
            }
        }

        // Trait targets: membership in the impl table.
        if let Ty::Trait(sup_trait) = sup {
            return self.does_type_implement_trait(sub, &sup_trait.name);
        }

        // Generics are invariant: same constructor, same arity, equal
        // arguments.
        if let (Ty::Generic(sub_gen), Ty::Generic(sup_gen)) = (sub, sup) {
            if sub_gen.name == sup_gen.name && sub_gen.args.len() == sup_gen.args.len() {
                return Ok(sub_gen
                    .args
                    .iter()
                    .zip(&sup_gen.args)
                    .all(|(a, b)| a == b));
            }
        }

        // Functions: contravariant parameters, covariant return.
        if let (Ty::Fn(sub_fn), Ty::Fn(sup_fn)) = (sub, sup) {
            if sub_fn.params.len() != sup_fn.params.len() {
                return Ok(false);
            }
            for (sub_param, sup_param) in sub_fn.params.iter().zip(&sup_fn.params) {
                if !self.is_subtype(sup_param, sub_param).unwrap_or(false) {
                    return Ok(false);
                }
            }
            return self.is_subtype(&sub_fn.ret, &sup_fn.ret);
        }

        Ok(false)
    }
}
