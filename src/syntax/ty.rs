//! Type representation used throughout the checker.
//!
//! One tagged sum with nine constructors; every variant carries enough
//! structural data to be compared, substituted, and printed. Values are
//! immutable once constructed — substitution and unification always build
//! fresh instances. Derived equality is the structural-equality contract:
//! nominal variants compare by name, structural variants recursively, and
//! pointer/reference flags and array sizes participate.

use std::fmt;

/// Type term.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Ty {
    Basic(BasicTy),
    Pointer(PointerTy),
    Ref(RefTy),
    Array(ArrayTy),
    Fn(FnTy),
    Class(ClassTy),
    Trait(TraitTy),
    Generic(GenericTy),
    Var(TypeVar),
}

/// Built-in or user-defined simple type, identified by canonical name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BasicTy {
    pub name: String,
}

/// Pointer to a pointee; `unique` pointers own exclusively and are not
/// copyable.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PointerTy {
    pub pointee: Box<Ty>,
    pub unique: bool,
}

/// Reference to a referent, optionally mutable.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RefTy {
    pub referent: Box<Ty>,
    pub mutable: bool,
}

/// Fixed-size array; `size == 0` means dynamically sized.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ArrayTy {
    pub element: Box<Ty>,
    pub size: usize,
}

/// Function type: ordered parameters plus return type. For trait methods
/// the first parameter is the receiver.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FnTy {
    pub params: Vec<Ty>,
    pub ret: Box<Ty>,
}

impl FnTy {
    #[must_use]
    pub fn new(params: Vec<Ty>, ret: Ty) -> Self {
        Self {
            params,
            ret: Box::new(ret),
        }
    }
}

/// Nominal class type; fields and superclass resolve through the registry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClassTy {
    pub name: String,
}

/// Nominal trait type; the method set resolves through the trait table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TraitTy {
    pub name: String,
}

/// Generic instantiation: constructor name plus ordered type arguments.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GenericTy {
    pub name: String,
    pub args: Vec<Ty>,
}

/// Unification unknown.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TypeVar {
    pub name: String,
}

impl Ty {
    #[must_use]
    pub fn basic(name: impl Into<String>) -> Self {
        Ty::Basic(BasicTy { name: name.into() })
    }

    #[must_use]
    pub fn pointer(pointee: Ty) -> Self {
        Ty::Pointer(PointerTy {
            pointee: Box::new(pointee),
            unique: false,
        })
    }

    #[must_use]
    pub fn unique_pointer(pointee: Ty) -> Self {
        Ty::Pointer(PointerTy {
            pointee: Box::new(pointee),
            unique: true,
        })
    }

    #[must_use]
    pub fn reference(referent: Ty) -> Self {
        Ty::Ref(RefTy {
            referent: Box::new(referent),
            mutable: false,
        })
    }

    #[must_use]
    pub fn mut_reference(referent: Ty) -> Self {
        Ty::Ref(RefTy {
            referent: Box::new(referent),
            mutable: true,
        })
    }

    #[must_use]
    pub fn array(element: Ty, size: usize) -> Self {
        Ty::Array(ArrayTy {
            element: Box::new(element),
            size,
        })
    }

    #[must_use]
    pub fn dynamic_array(element: Ty) -> Self {
        Self::array(element, 0)
    }

    #[must_use]
    pub fn function(params: Vec<Ty>, ret: Ty) -> Self {
        Ty::Fn(FnTy::new(params, ret))
    }

    #[must_use]
    pub fn class(name: impl Into<String>) -> Self {
        Ty::Class(ClassTy { name: name.into() })
    }

    #[must_use]
    pub fn trait_ty(name: impl Into<String>) -> Self {
        Ty::Trait(TraitTy { name: name.into() })
    }

    #[must_use]
    pub fn generic(name: impl Into<String>, args: Vec<Ty>) -> Self {
        Ty::Generic(GenericTy {
            name: name.into(),
            args,
        })
    }

    #[must_use]
    pub fn var(name: impl Into<String>) -> Self {
        Ty::Var(TypeVar { name: name.into() })
    }

    /// Nominal name of a basic type, if this is one.
    #[must_use]
    pub fn basic_name(&self) -> Option<&str> {
        match self {
            Ty::Basic(basic) => Some(basic.name.as_str()),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_fn(&self) -> Option<&FnTy> {
        match self {
            Ty::Fn(fn_ty) => Some(fn_ty),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_pointer(&self) -> bool {
        matches!(self, Ty::Pointer(_))
    }

    #[must_use]
    pub fn is_reference(&self) -> bool {
        matches!(self, Ty::Ref(_))
    }

    #[must_use]
    pub fn is_array(&self) -> bool {
        matches!(self, Ty::Array(_))
    }

    #[must_use]
    pub fn is_function(&self) -> bool {
        matches!(self, Ty::Fn(_))
    }

    #[must_use]
    pub fn is_generic(&self) -> bool {
        matches!(self, Ty::Generic(_))
    }

    #[must_use]
    pub fn is_void(&self) -> bool {
        self.basic_name() == Some("void")
    }

    /// Canonical printed form; stable across runs and unique per
    /// structurally distinct type.
    #[must_use]
    pub fn canonical_name(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Ty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Ty::Basic(basic) => write!(f, "{}", basic.name),
            Ty::Pointer(ptr) => {
                if ptr.unique {
                    write!(f, "*unique {}", ptr.pointee)
                } else {
                    write!(f, "*{}", ptr.pointee)
                }
            }
            Ty::Ref(re) => {
                if re.mutable {
                    write!(f, "&mut {}", re.referent)
                } else {
                    write!(f, "&{}", re.referent)
                }
            }
            Ty::Array(arr) => {
                if arr.size > 0 {
                    write!(f, "[{}; {}]", arr.element, arr.size)
                } else {
                    write!(f, "[{}]", arr.element)
                }
            }
            Ty::Fn(fn_ty) => {
                write!(f, "fn(")?;
                for (index, param) in fn_ty.params.iter().enumerate() {
                    if index > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{param}")?;
                }
                write!(f, ") -> {}", fn_ty.ret)
            }
            Ty::Class(class) => write!(f, "{}", class.name),
            Ty::Trait(tr) => write!(f, "{}", tr.name),
            Ty::Generic(generic) => {
                write!(f, "{}<", generic.name)?;
                for (index, arg) in generic.args.iter().enumerate() {
                    if index > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{arg}")?;
                }
                write!(f, ">")
            }
            Ty::Var(var) => write!(f, "{}", var.name),
        }
    }
}
