//! Nominal type registry: built-in bootstrap, user registrations,
//! aliases, generic signatures, class metadata, and the variable
//! environment consulted during inference.

use std::collections::HashMap;

use tracing::debug;

use super::diagnostics::{codes, error};
use super::traits::TypeParameter;
use crate::diagnostics::CompilerError;
use crate::syntax::Ty;

/// Inheritance and field metadata for a registered class.
///
/// Fields are ordered; layout and diagnostics depend on declaration order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClassInfo {
    /// Name of the superclass; empty when the class is a root.
    pub superclass: String,
    pub fields: Vec<(String, Ty)>,
    pub move_only: bool,
}

impl ClassInfo {
    #[must_use]
    pub fn new(superclass: impl Into<String>, fields: Vec<(String, Ty)>) -> Self {
        Self {
            superclass: superclass.into(),
            fields,
            move_only: false,
        }
    }

    #[must_use]
    pub fn move_only(mut self) -> Self {
        self.move_only = true;
        self
    }
}

/// Name-keyed tables owning every nominal definition for the compilation
/// session. Writes happen in the build phase; the query surface is
/// read-only and freely shareable afterwards.
#[derive(Clone, Debug)]
pub struct TypeRegistry {
    types: HashMap<String, Ty>,
    aliases: HashMap<String, Ty>,
    definitions: HashMap<String, Ty>,
    generic_params: HashMap<String, Vec<TypeParameter>>,
    classes: HashMap<String, ClassInfo>,
    variables: HashMap<String, Ty>,
}

const BUILTIN_NAMES: &[&str] = &[
    "i8", "i16", "i32", "i64", "u8", "u16", "u32", "u64", "f32", "f64", "int", "float", "double",
    "bool", "string", "void", "null",
];

const BUILTIN_ALIASES: &[(&str, &str)] = &[
    ("int", "i32"),
    ("int32", "i32"),
    ("int64", "i64"),
    ("float", "f32"),
    ("float32", "f32"),
    ("float64", "f64"),
    ("double", "f64"),
];

impl Default for TypeRegistry {
    fn default() -> Self {
        let mut registry = Self {
            types: HashMap::new(),
            aliases: HashMap::new(),
            definitions: HashMap::new(),
            generic_params: HashMap::new(),
            classes: HashMap::new(),
            variables: HashMap::new(),
        };
        for name in BUILTIN_NAMES {
            registry.types.insert((*name).into(), Ty::basic(*name));
        }
        for (alias, target) in BUILTIN_ALIASES {
            registry.aliases.insert((*alias).into(), Ty::basic(*target));
        }
        registry
    }
}

impl TypeRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a nominal type. Built-in shadowing and duplicate
    /// registration are refused.
    pub fn register_type(
        &mut self,
        name: impl Into<String>,
        ty: Ty,
    ) -> Result<(), CompilerError> {
        let name = name.into();
        if self.types.contains_key(&name) {
            return Err(error(
                codes::TYPE_REDEFINED,
                format!("Type already registered: {name}"),
            ));
        }
        debug!(name = %name, "registering type");
        self.types.insert(name, ty);
        Ok(())
    }

    /// Register or replace an alias; last write wins.
    pub fn register_alias(&mut self, name: impl Into<String>, ty: Ty) {
        self.aliases.insert(name.into(), ty);
    }

    /// Register a generic constructor: its parameter list (with trait
    /// constraints) and its body type. Re-registration replaces both.
    pub fn register_generic_type(
        &mut self,
        name: impl Into<String>,
        params: Vec<TypeParameter>,
        definition: Ty,
    ) {
        let name = name.into();
        debug!(name = %name, params = params.len(), "registering generic type");
        self.generic_params.insert(name.clone(), params);
        self.types.insert(name.clone(), definition.clone());
        self.definitions.insert(name, definition);
    }

    /// Register class inheritance and field metadata.
    pub fn register_class(&mut self, name: impl Into<String>, info: ClassInfo) {
        self.classes.insert(name.into(), info);
    }

    #[must_use]
    pub fn lookup_type(&self, name: &str) -> Option<&Ty> {
        self.types.get(name)
    }

    #[must_use]
    pub fn resolve_alias(&self, name: &str) -> Option<&Ty> {
        self.aliases.get(name)
    }

    /// Body a nominal name was defined as, if it has one. Plain built-ins
    /// have no definition; only generic registrations record one.
    #[must_use]
    pub fn type_definition(&self, name: &str) -> Option<&Ty> {
        self.definitions.get(name)
    }

    #[must_use]
    pub fn type_parameters(&self, name: &str) -> Option<&[TypeParameter]> {
        self.generic_params.get(name).map(Vec::as_slice)
    }

    #[must_use]
    pub fn class_info(&self, name: &str) -> Option<&ClassInfo> {
        self.classes.get(name)
    }

    /// Bind a variable in the inference environment. The driver owns the
    /// environment's lifecycle and clears it between batches.
    pub fn define_variable(&mut self, name: impl Into<String>, ty: Ty) {
        self.variables.insert(name.into(), ty);
    }

    #[must_use]
    pub fn lookup_variable(&self, name: &str) -> Option<&Ty> {
        self.variables.get(name)
    }

    pub fn clear_variables(&mut self) {
        self.variables.clear();
    }

    fn builtin(&self, name: &str) -> Ty {
        self.types
            .get(name)
            .cloned()
            .unwrap_or_else(|| Ty::basic(name))
    }

    #[must_use]
    pub fn int_ty(&self) -> Ty {
        self.builtin("int")
    }

    #[must_use]
    pub fn int64_ty(&self) -> Ty {
        self.builtin("i64")
    }

    #[must_use]
    pub fn float_ty(&self) -> Ty {
        self.builtin("float")
    }

    #[must_use]
    pub fn float64_ty(&self) -> Ty {
        self.builtin("f64")
    }

    #[must_use]
    pub fn bool_ty(&self) -> Ty {
        self.builtin("bool")
    }

    #[must_use]
    pub fn string_ty(&self) -> Ty {
        self.builtin("string")
    }

    #[must_use]
    pub fn void_ty(&self) -> Ty {
        self.builtin("void")
    }

    /// The canonical `null` sentinel honored by the `null <: *T` rule.
    #[must_use]
    pub fn null_ty(&self) -> Ty {
        self.builtin("null")
    }

    #[must_use]
    pub fn array_of(element: Ty) -> Ty {
        Ty::generic("Array", vec![element])
    }

    #[must_use]
    pub fn option_of(inner: Ty) -> Ty {
        Ty::generic("Option", vec![inner])
    }

    #[must_use]
    pub fn result_of(ok: Ty, err: Ty) -> Ty {
        Ty::generic("Result", vec![ok, err])
    }

    #[must_use]
    pub fn pointer_to(pointee: Ty) -> Ty {
        Ty::pointer(pointee)
    }

    #[must_use]
    pub fn reference_to(referent: Ty) -> Ty {
        Ty::reference(referent)
    }
}
