//! Type checking: registry, trait tables, inference, unification,
//! subtyping, generic instantiation, cycle detection, and layout.

mod checker;
mod coercions;
mod cycles;
mod diagnostics;
mod generics;
pub mod helpers;
mod infer;
mod layout;
mod registry;
mod traits;
mod unify;

pub use checker::TypeChecker;
pub use generics::substitute;
pub use registry::{ClassInfo, TypeRegistry};
pub use traits::{Trait, TraitImpl, TypeConstraint, TypeParameter, Variance};
