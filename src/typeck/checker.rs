//! The checker facade: owns the registry and the trait tables; the rest
//! of the subsystem is written as `impl TypeChecker` blocks in focused
//! sibling modules.

use std::collections::HashMap;

use super::diagnostics::{codes, error};
use super::registry::TypeRegistry;
use super::traits::{Trait, TraitImpl};
use crate::diagnostics::CompilerError;
use crate::syntax::Ty;

/// Type checker for one compilation session.
///
/// Mutation (type/trait registration) belongs to the build phase; once
/// the driver switches to queries the checker is read-only and can be
/// shared freely. No internal locking — callers serialize writes.
#[derive(Default)]
pub struct TypeChecker {
    pub(super) registry: TypeRegistry,
    pub(super) traits: HashMap<String, Trait>,
    pub(super) impls: Vec<TraitImpl>,
}

impl TypeChecker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn registry(&self) -> &TypeRegistry {
        &self.registry
    }

    pub fn registry_mut(&mut self) -> &mut TypeRegistry {
        &mut self.registry
    }

    /// Structural equality. Nominal variants compare by name; structural
    /// variants recursively. Callers must not substitute pointer identity
    /// for this check.
    #[must_use]
    pub fn types_equal(&self, t1: &Ty, t2: &Ty) -> bool {
        t1 == t2
    }

    /// Validate that a type is well-formed: free of non-pointer cycles,
    /// its basic names known to the registry, and its generic
    /// instantiations satisfying arity and constraints.
    pub fn validate_type(&self, ty: &Ty) -> Result<(), CompilerError> {
        self.check_circular_dependency(ty)?;

        match ty {
            Ty::Basic(basic) => {
                if self.registry.lookup_type(&basic.name).is_none() {
                    return Err(error(
                        codes::UNKNOWN_TYPE,
                        format!("Unknown type: {}", basic.name),
                    ));
                }
                Ok(())
            }
            Ty::Generic(generic) => {
                for arg in &generic.args {
                    self.validate_type(arg)?;
                }
                self.validate_generic_instantiation(ty, &generic.args)
            }
            _ => Ok(()),
        }
    }
}
