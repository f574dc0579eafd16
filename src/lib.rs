#![deny(clippy::all, clippy::perf, clippy::suspicious)]
#![deny(clippy::unwrap_used, clippy::expect_used)]

//! Core library for the Resin compiler's type checking front-end.
//!
//! The crate exposes a single [`TypeChecker`] facade over the type
//! registry, the trait tables, the inference/unification engine, the
//! subtype and constraint checkers, layout computation, and linkage-name
//! mangling. Consumers (the driver, the IR lowering) feed it syntax
//! nodes and receive resolved types or structured [`CompilerError`]s.

pub mod abi;
pub mod diagnostics;
pub mod syntax;
pub mod typeck;

pub use diagnostics::{CompilerError, Diagnostic, DiagnosticCode, Severity, Span};
pub use typeck::TypeChecker;
