use crate::diagnostics::{CompilerError, DiagnosticCode};

pub mod codes {
    pub const TYPE_REDEFINED: &str = "TCK001";
    pub const UNKNOWN_TYPE: &str = "TCK002";
    pub const UNKNOWN_VARIABLE: &str = "TCK003";

    pub const TRAIT_REDEFINED: &str = "TCK010";
    pub const UNKNOWN_TRAIT: &str = "TCK011";
    pub const MISSING_TRAIT_METHOD: &str = "TCK012";
    pub const TRAIT_SIGNATURE_MISMATCH: &str = "TCK013";

    pub const TYPE_NOT_GENERIC: &str = "TCK020";
    pub const GENERIC_ARGUMENT_MISMATCH: &str = "TCK021";
    pub const MISSING_TYPE_PARAMETERS: &str = "TCK022";
    pub const CONSTRAINT_UNSATISFIED: &str = "TCK023";

    pub const NOT_CALLABLE: &str = "TCK030";
    pub const EMPTY_ARRAY_LITERAL: &str = "TCK031";

    pub const FUNCTION_ARITY_MISMATCH: &str = "TCK040";
    pub const GENERIC_MISMATCH: &str = "TCK041";
    pub const TYPE_INCOMPATIBLE: &str = "TCK042";

    pub const OCCURS_CHECK: &str = "TCK050";
    pub const CIRCULAR_DEPENDENCY: &str = "TCK051";
}

#[must_use]
pub fn error(code: &'static str, message: impl Into<String>) -> CompilerError {
    CompilerError::new(DiagnosticCode::new(code, Some("typeck".into())), message)
}
