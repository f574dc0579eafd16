//! Name mangling for linker symbols, on the Itanium C++ ABI subset.
//!
//! Encodings: primitive letters for the scalar spellings, `P`/`R` for
//! pointers and references, `A<n>_` fixed and `PA` dynamic arrays,
//! `F<ret><params…>E` functions, `<len><name>` nominals, and
//! `<len><name>I<args…>E` generic instantiations. Structurally distinct
//! types encode distinctly wherever an encoding is defined; anything
//! without one falls back to length-prefixing the canonical printed form.

use crate::syntax::Ty;

/// Deterministic mangled name of a type.
#[must_use]
pub fn mangled_name(ty: &Ty) -> String {
    match ty {
        Ty::Basic(basic) => match basic.name.as_str() {
            "void" => "v".into(),
            "bool" => "b".into(),
            "char" => "c".into(),
            "int" | "int32" => "i".into(),
            "int64" => "l".into(),
            "uint32" => "j".into(),
            "uint64" => "m".into(),
            "float" | "float32" => "f".into(),
            "float64" | "double" => "d".into(),
            "string" => "Ss".into(),
            name => length_prefixed(name),
        },
        Ty::Pointer(ptr) => format!("P{}", mangled_name(&ptr.pointee)),
        Ty::Ref(re) => format!("R{}", mangled_name(&re.referent)),
        Ty::Array(arr) => {
            if arr.size > 0 {
                format!("A{}_{}", arr.size, mangled_name(&arr.element))
            } else {
                format!("PA{}", mangled_name(&arr.element))
            }
        }
        Ty::Fn(fn_ty) => {
            let mut out = String::from("F");
            out.push_str(&mangled_name(&fn_ty.ret));
            for param in &fn_ty.params {
                out.push_str(&mangled_name(param));
            }
            out.push('E');
            out
        }
        Ty::Generic(generic) => {
            let mut out = length_prefixed(&generic.name);
            if !generic.args.is_empty() {
                out.push('I');
                for arg in &generic.args {
                    out.push_str(&mangled_name(arg));
                }
                out.push('E');
            }
            out
        }
        Ty::Class(class) => length_prefixed(&class.name),
        Ty::Trait(tr) => length_prefixed(&tr.name),
        Ty::Var(_) => length_prefixed(&ty.canonical_name()),
    }
}

fn length_prefixed(name: &str) -> String {
    format!("{}{}", name.len(), name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use expect_test::expect;

    #[test]
    fn primitive_letters() {
        assert_eq!(mangled_name(&Ty::basic("void")), "v");
        assert_eq!(mangled_name(&Ty::basic("bool")), "b");
        assert_eq!(mangled_name(&Ty::basic("int")), "i");
        assert_eq!(mangled_name(&Ty::basic("int32")), "i");
        assert_eq!(mangled_name(&Ty::basic("int64")), "l");
        assert_eq!(mangled_name(&Ty::basic("uint32")), "j");
        assert_eq!(mangled_name(&Ty::basic("uint64")), "m");
        assert_eq!(mangled_name(&Ty::basic("float")), "f");
        assert_eq!(mangled_name(&Ty::basic("double")), "d");
        assert_eq!(mangled_name(&Ty::basic("string")), "Ss");
    }

    #[test]
    fn user_nominals_are_length_prefixed() {
        assert_eq!(mangled_name(&Ty::basic("Temperature")), "11Temperature");
        assert_eq!(mangled_name(&Ty::class("Dog")), "3Dog");
        assert_eq!(mangled_name(&Ty::trait_ty("Printable")), "9Printable");
    }

    #[test]
    fn composite_encodings() {
        expect!["Pi"].assert_eq(&mangled_name(&Ty::pointer(Ty::basic("int"))));
        expect!["Rd"].assert_eq(&mangled_name(&Ty::reference(Ty::basic("double"))));
        expect!["A8_b"].assert_eq(&mangled_name(&Ty::array(Ty::basic("bool"), 8)));
        expect!["PASs"].assert_eq(&mangled_name(&Ty::dynamic_array(Ty::basic("string"))));
        expect!["FbiiE"].assert_eq(&mangled_name(&Ty::function(
            vec![Ty::basic("int"), Ty::basic("int")],
            Ty::basic("bool"),
        )));
        expect!["6ResultIi3DogE"].assert_eq(&mangled_name(&Ty::generic(
            "Result",
            vec![Ty::basic("int"), Ty::class("Dog")],
        )));
        expect!["5Tasks"].assert_eq(&mangled_name(&Ty::generic("Tasks", vec![])));
    }

    #[test]
    fn distinct_types_encode_distinctly() {
        let types = [
            Ty::basic("int"),
            Ty::basic("int64"),
            Ty::pointer(Ty::basic("int")),
            Ty::reference(Ty::basic("int")),
            Ty::array(Ty::basic("int"), 2),
            Ty::array(Ty::basic("int"), 3),
            Ty::dynamic_array(Ty::basic("int")),
            Ty::function(vec![Ty::basic("int")], Ty::basic("void")),
            Ty::function(vec![], Ty::basic("int")),
            Ty::class("Dog"),
            Ty::generic("Option", vec![Ty::basic("int")]),
            Ty::generic("Option", vec![Ty::basic("bool")]),
        ];
        let mut seen = std::collections::HashSet::new();
        for ty in &types {
            assert!(
                seen.insert(mangled_name(ty)),
                "duplicate mangling for {ty}"
            );
        }
    }
}
