//! Circular-dependency detection.
//!
//! Depth-first walk with a set of currently-entered nominal names.
//! Pointers and references terminate the recursion — they are the cycle
//! breakers that make self-referential data types representable. Any
//! other path back to an entered name is an error.

use std::collections::HashSet;

use super::checker::TypeChecker;
use super::diagnostics::{codes, error};
use crate::diagnostics::CompilerError;
use crate::syntax::Ty;

impl TypeChecker {
    /// Verify the type graph reachable from `ty` has no cycle outside
    /// pointer/reference indirection.
    pub fn check_circular_dependency(&self, ty: &Ty) -> Result<(), CompilerError> {
        let mut entered = HashSet::new();
        self.check_cycle(ty, &mut entered)
    }

    fn check_cycle(
        &self,
        ty: &Ty,
        entered: &mut HashSet<String>,
    ) -> Result<(), CompilerError> {
        match ty {
            Ty::Basic(basic) => {
                if entered.contains(&basic.name) {
                    return Err(error(
                        codes::CIRCULAR_DEPENDENCY,
                        format!("Circular type dependency detected: {}", basic.name),
                    ));
                }
                entered.insert(basic.name.clone());
                let result = match self.registry.type_definition(&basic.name) {
                    Some(definition) => self.check_cycle(definition, entered),
                    None => Ok(()),
                };
                entered.remove(&basic.name);
                result
            }
            Ty::Class(class) => {
                if entered.contains(&class.name) {
                    return Err(error(
                        codes::CIRCULAR_DEPENDENCY,
                        format!("Circular type dependency in class: {}", class.name),
                    ));
                }
                entered.insert(class.name.clone());
                let result = self.check_class_members(&class.name, entered);
                entered.remove(&class.name);
                result
            }
            Ty::Array(arr) => self.check_cycle(&arr.element, entered),
            Ty::Generic(generic) => {
                for arg in &generic.args {
                    self.check_cycle(arg, entered)?;
                }
                Ok(())
            }
            // Indirection breaks cycles; functions are pointer-sized too.
            Ty::Pointer(_) | Ty::Ref(_) | Ty::Fn(_) => Ok(()),
            Ty::Trait(_) | Ty::Var(_) => Ok(()),
        }
    }

    fn check_class_members(
        &self,
        name: &str,
        entered: &mut HashSet<String>,
    ) -> Result<(), CompilerError> {
        let Some(info) = self.registry.class_info(name) else {
            return Ok(());
        };
        for (_, field_ty) in &info.fields {
            self.check_cycle(field_ty, entered)?;
        }
        if !info.superclass.is_empty() {
            self.check_cycle(&Ty::class(info.superclass.clone()), entered)?;
        }
        Ok(())
    }
}
