//! Trait declarations, implementations, and constraint satisfaction.
//!
//! Traits are write-once: re-registering a name is refused. Additional
//! implementations for the same (trait, target) pair are allowed; lookup
//! scans in registration order, so the first wins.

use std::collections::BTreeMap;

use tracing::debug;

use super::checker::TypeChecker;
use super::diagnostics::{codes, error};
use crate::diagnostics::CompilerError;
use crate::syntax::{FnTy, Ty};

/// A named set of method signatures a type may claim to implement. The
/// first parameter of each signature is the receiver.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Trait {
    pub name: String,
    pub methods: BTreeMap<String, FnTy>,
}

impl Trait {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            methods: BTreeMap::new(),
        }
    }

    #[must_use]
    pub fn with_method(mut self, name: impl Into<String>, signature: FnTy) -> Self {
        self.methods.insert(name.into(), signature);
        self
    }
}

/// An implementation of a trait for a target type.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TraitImpl {
    pub trait_name: String,
    pub target_type: Ty,
    pub methods: BTreeMap<String, FnTy>,
}

impl TraitImpl {
    #[must_use]
    pub fn new(trait_name: impl Into<String>, target_type: Ty) -> Self {
        Self {
            trait_name: trait_name.into(),
            target_type,
            methods: BTreeMap::new(),
        }
    }

    #[must_use]
    pub fn with_method(mut self, name: impl Into<String>, signature: FnTy) -> Self {
        self.methods.insert(name.into(), signature);
        self
    }
}

/// A trait bound attached to a generic type parameter.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TypeConstraint {
    pub trait_name: String,
}

impl TypeConstraint {
    #[must_use]
    pub fn new(trait_name: impl Into<String>) -> Self {
        Self {
            trait_name: trait_name.into(),
        }
    }
}

/// Variance of a generic parameter. Subtyping and unification treat all
/// parameters as invariant today; the tag exists so they can consult it
/// once variance annotations land.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Variance {
    #[default]
    Invariant,
    Covariant,
    Contravariant,
}

/// A declared generic parameter with its trait bounds.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TypeParameter {
    pub name: String,
    pub constraints: Vec<TypeConstraint>,
    pub variance: Variance,
}

impl TypeParameter {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            constraints: Vec::new(),
            variance: Variance::default(),
        }
    }

    #[must_use]
    pub fn with_constraint(mut self, trait_name: impl Into<String>) -> Self {
        self.constraints.push(TypeConstraint::new(trait_name));
        self
    }
}

impl TypeChecker {
    /// Declare a trait. Fails if the name is already taken; the failed
    /// registration leaves the table untouched.
    pub fn register_trait(&mut self, declaration: Trait) -> Result<(), CompilerError> {
        if self.traits.contains_key(&declaration.name) {
            return Err(error(
                codes::TRAIT_REDEFINED,
                format!("Trait already registered: {}", declaration.name),
            ));
        }
        debug!(name = %declaration.name, methods = declaration.methods.len(), "registering trait");
        self.traits.insert(declaration.name.clone(), declaration);
        Ok(())
    }

    /// Register an implementation. The trait must exist, every declared
    /// method must be provided, and each provided signature must
    /// structurally equal the declaration.
    pub fn register_trait_impl(&mut self, implementation: TraitImpl) -> Result<(), CompilerError> {
        let Some(declaration) = self.traits.get(&implementation.trait_name) else {
            return Err(error(
                codes::UNKNOWN_TRAIT,
                format!("Unknown trait: {}", implementation.trait_name),
            ));
        };

        for (method_name, declared) in &declaration.methods {
            let Some(provided) = implementation.methods.get(method_name) else {
                return Err(error(
                    codes::MISSING_TRAIT_METHOD,
                    format!("Missing method implementation: {method_name}"),
                ));
            };
            validate_method_signature(method_name, provided, declared)?;
        }

        self.impls.push(implementation);
        Ok(())
    }

    #[must_use]
    pub fn trait_def(&self, name: &str) -> Option<&Trait> {
        self.traits.get(name)
    }

    /// First registered implementation of `trait_name` whose target
    /// structurally equals `target`.
    #[must_use]
    pub fn trait_impl(&self, trait_name: &str, target: &Ty) -> Option<&TraitImpl> {
        self.impls
            .iter()
            .find(|imp| imp.trait_name == trait_name && imp.target_type == *target)
    }

    /// Whether `ty` is the target of an implementation of `trait_name`.
    /// Unknown traits are an error, not `false`.
    pub fn does_type_implement_trait(
        &self,
        ty: &Ty,
        trait_name: &str,
    ) -> Result<bool, CompilerError> {
        if !self.traits.contains_key(trait_name) {
            return Err(error(
                codes::UNKNOWN_TRAIT,
                format!("Unknown trait: {trait_name}"),
            ));
        }
        Ok(self
            .impls
            .iter()
            .any(|imp| imp.trait_name == trait_name && imp.target_type == *ty))
    }

    /// Check that `ty` satisfies every bound in `constraints`. Any
    /// failure — including an unknown trait — reads as an unsatisfied
    /// constraint.
    pub fn check_trait_constraints(
        &self,
        ty: &Ty,
        constraints: &[TypeConstraint],
    ) -> Result<(), CompilerError> {
        for constraint in constraints {
            let satisfied = self
                .does_type_implement_trait(ty, &constraint.trait_name)
                .unwrap_or(false);
            if !satisfied {
                return Err(error(
                    codes::CONSTRAINT_UNSATISFIED,
                    format!(
                        "Type does not satisfy trait constraint: {}",
                        constraint.trait_name
                    ),
                ));
            }
        }
        Ok(())
    }
}

fn validate_method_signature(
    method_name: &str,
    provided: &FnTy,
    declared: &FnTy,
) -> Result<(), CompilerError> {
    if provided.params.len() != declared.params.len() {
        return Err(error(
            codes::TRAIT_SIGNATURE_MISMATCH,
            format!("Method parameter count mismatch for: {method_name}"),
        ));
    }
    for (index, (have, want)) in provided.params.iter().zip(&declared.params).enumerate() {
        if have != want {
            return Err(error(
                codes::TRAIT_SIGNATURE_MISMATCH,
                format!("Method parameter type mismatch at position {index} for: {method_name}"),
            ));
        }
    }
    if provided.ret != declared.ret {
        return Err(error(
            codes::TRAIT_SIGNATURE_MISMATCH,
            format!("Method return type mismatch for: {method_name}"),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn printable() -> Trait {
        Trait::new("Printable").with_method(
            "print",
            FnTy::new(vec![Ty::basic("int")], Ty::basic("string")),
        )
    }

    #[test]
    fn trait_registration_is_write_once() {
        let mut checker = TypeChecker::new();
        checker.register_trait(printable()).unwrap();
        let err = checker.register_trait(printable()).unwrap_err();
        assert_eq!(err.message(), "Trait already registered: Printable");
        assert!(checker.trait_def("Printable").is_some());
    }

    #[test]
    fn impl_requires_known_trait() {
        let mut checker = TypeChecker::new();
        let err = checker
            .register_trait_impl(TraitImpl::new("Printable", Ty::basic("int")))
            .unwrap_err();
        assert_eq!(err.message(), "Unknown trait: Printable");
    }

    #[test]
    fn impl_requires_every_declared_method() {
        let mut checker = TypeChecker::new();
        checker.register_trait(printable()).unwrap();
        let err = checker
            .register_trait_impl(TraitImpl::new("Printable", Ty::basic("int")))
            .unwrap_err();
        assert_eq!(err.message(), "Missing method implementation: print");
    }

    #[test]
    fn impl_signatures_must_match_declaration() {
        let mut checker = TypeChecker::new();
        checker.register_trait(printable()).unwrap();

        let arity = checker
            .register_trait_impl(TraitImpl::new("Printable", Ty::basic("int")).with_method(
                "print",
                FnTy::new(
                    vec![Ty::basic("int"), Ty::basic("int")],
                    Ty::basic("string"),
                ),
            ))
            .unwrap_err();
        assert_eq!(arity.message(), "Method parameter count mismatch for: print");

        let param = checker
            .register_trait_impl(TraitImpl::new("Printable", Ty::basic("int")).with_method(
                "print",
                FnTy::new(vec![Ty::basic("bool")], Ty::basic("string")),
            ))
            .unwrap_err();
        assert_eq!(
            param.message(),
            "Method parameter type mismatch at position 0 for: print"
        );

        let ret = checker
            .register_trait_impl(TraitImpl::new("Printable", Ty::basic("int")).with_method(
                "print",
                FnTy::new(vec![Ty::basic("int")], Ty::basic("bool")),
            ))
            .unwrap_err();
        assert_eq!(ret.message(), "Method return type mismatch for: print");

        // A failed registration must not corrupt the table.
        assert!(!checker
            .does_type_implement_trait(&Ty::basic("int"), "Printable")
            .unwrap());
    }

    #[test]
    fn conforming_impl_registers_and_first_wins_on_lookup() {
        let mut checker = TypeChecker::new();
        checker.register_trait(printable()).unwrap();

        let first = TraitImpl::new("Printable", Ty::basic("int")).with_method(
            "print",
            FnTy::new(vec![Ty::basic("int")], Ty::basic("string")),
        );
        checker.register_trait_impl(first.clone()).unwrap();
        checker.register_trait_impl(first.clone()).unwrap();

        assert!(checker
            .does_type_implement_trait(&Ty::basic("int"), "Printable")
            .unwrap());
        assert_eq!(
            checker.trait_impl("Printable", &Ty::basic("int")),
            Some(&first)
        );
        assert!(checker.trait_impl("Printable", &Ty::basic("bool")).is_none());
    }

    #[test]
    fn unknown_trait_queries_error() {
        let checker = TypeChecker::new();
        let err = checker
            .does_type_implement_trait(&Ty::basic("int"), "Compare")
            .unwrap_err();
        assert_eq!(err.message(), "Unknown trait: Compare");
    }

    #[test]
    fn constraint_failures_name_the_missing_trait() {
        let mut checker = TypeChecker::new();
        checker.register_trait(printable()).unwrap();

        let constraints = [TypeConstraint::new("Printable")];
        let err = checker
            .check_trait_constraints(&Ty::basic("bool"), &constraints)
            .unwrap_err();
        assert_eq!(
            err.message(),
            "Type does not satisfy trait constraint: Printable"
        );

        // Unknown traits also read as unsatisfied constraints.
        let unknown = [TypeConstraint::new("Compare")];
        let err = checker
            .check_trait_constraints(&Ty::basic("int"), &unknown)
            .unwrap_err();
        assert_eq!(
            err.message(),
            "Type does not satisfy trait constraint: Compare"
        );

        checker
            .register_trait_impl(TraitImpl::new("Printable", Ty::basic("bool")).with_method(
                "print",
                FnTy::new(vec![Ty::basic("int")], Ty::basic("string")),
            ))
            .unwrap();
        checker
            .check_trait_constraints(&Ty::basic("bool"), &constraints)
            .unwrap();
    }
}
