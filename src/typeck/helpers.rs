//! Primitive-name classification shared across the checker.

use crate::syntax::Ty;

/// Names the checker treats as integral primitives.
const INTEGRAL_NAMES: &[&str] = &[
    "int", "int32", "int64", "uint32", "uint64", "i8", "i16", "i32", "i64", "u8", "u16", "u32",
    "u64",
];

/// Names the checker treats as floating-point primitives.
const FLOATING_NAMES: &[&str] = &["float", "float32", "float64", "double", "f32", "f64"];

#[must_use]
pub fn is_integral(ty: &Ty) -> bool {
    ty.basic_name()
        .is_some_and(|name| INTEGRAL_NAMES.contains(&name))
}

#[must_use]
pub fn is_floating(ty: &Ty) -> bool {
    ty.basic_name()
        .is_some_and(|name| FLOATING_NAMES.contains(&name))
}

#[must_use]
pub fn is_numeric(ty: &Ty) -> bool {
    is_integral(ty) || is_floating(ty)
}

/// Unsigned spellings are the `u`-prefixed widths; every other numeric
/// name is signed.
#[must_use]
pub fn is_signed(ty: &Ty) -> bool {
    ty.basic_name().is_some_and(|name| {
        is_numeric(ty) && !name.starts_with('u')
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_classification_covers_both_spellings() {
        assert!(is_integral(&Ty::basic("i8")));
        assert!(is_integral(&Ty::basic("uint64")));
        assert!(is_floating(&Ty::basic("double")));
        assert!(is_floating(&Ty::basic("f32")));
        assert!(is_numeric(&Ty::basic("int")));
        assert!(!is_numeric(&Ty::basic("bool")));
        assert!(!is_numeric(&Ty::class("int")));
    }

    #[test]
    fn signedness() {
        assert!(is_signed(&Ty::basic("i16")));
        assert!(is_signed(&Ty::basic("float")));
        assert!(!is_signed(&Ty::basic("u32")));
        assert!(!is_signed(&Ty::basic("string")));
    }
}
