//! Physical layout (size and alignment) for a 64-bit target, plus the
//! copy/move/nullable classification consumed by ownership checks.

use std::collections::{HashMap, HashSet};

use once_cell::sync::Lazy;

use super::checker::TypeChecker;
use crate::syntax::Ty;

pub(crate) const MIN_ALIGN: usize = 1;

const POINTER_SIZE: usize = 8;
const MAX_SCALAR_ALIGN: usize = 8;

/// Nominal names that wrap operating-system resources; handles to them
/// move but never copy.
const RESOURCE_NAMES: &[&str] = &["File", "Socket", "Mutex", "Thread"];

static SCALAR_SIZES: Lazy<HashMap<&'static str, usize>> = Lazy::new(|| {
    HashMap::from([
        ("bool", 1),
        ("i8", 1),
        ("u8", 1),
        ("i16", 2),
        ("u16", 2),
        ("i32", 4),
        ("u32", 4),
        ("f32", 4),
        ("int", 4),
        ("float", 4),
        ("i64", 8),
        ("u64", 8),
        ("f64", 8),
        ("double", 8),
        ("void", 0),
    ])
});

pub(crate) fn align_to(value: usize, align: usize) -> usize {
    if align <= 1 {
        value
    } else {
        value.div_ceil(align) * align
    }
}

impl TypeChecker {
    /// Size of a type in bytes, if it has a defined layout.
    #[must_use]
    pub fn type_size(&self, ty: &Ty) -> Option<usize> {
        self.size_of(ty, &mut HashSet::new())
    }

    /// Alignment of a type in bytes. Classes align to their widest
    /// field; scalars align to their size capped at the word size.
    #[must_use]
    pub fn type_alignment(&self, ty: &Ty) -> Option<usize> {
        self.align_of(ty, &mut HashSet::new())
    }

    // `visiting` guards against class graphs that reach themselves
    // without indirection; a revisited class has no defined layout.
    fn size_of(&self, ty: &Ty, visiting: &mut HashSet<String>) -> Option<usize> {
        match ty {
            Ty::Basic(basic) => SCALAR_SIZES.get(basic.name.as_str()).copied(),
            Ty::Pointer(_) | Ty::Ref(_) | Ty::Fn(_) => Some(POINTER_SIZE),
            Ty::Array(arr) => {
                if arr.size > 0 {
                    self.size_of(&arr.element, visiting)
                        .map(|size| size * arr.size)
                } else {
                    // Dynamic arrays are a pointer-sized handle.
                    Some(POINTER_SIZE)
                }
            }
            Ty::Class(class) => {
                let info = self.registry.class_info(&class.name)?;
                if !visiting.insert(class.name.clone()) {
                    return None;
                }
                let mut offset = 0;
                let mut max_align = MIN_ALIGN;
                for (_, field_ty) in &info.fields {
                    let (Some(size), Some(align)) = (
                        self.size_of(field_ty, visiting),
                        self.align_of(field_ty, visiting),
                    ) else {
                        continue;
                    };
                    max_align = max_align.max(align);
                    offset = align_to(offset, align);
                    offset += size;
                }
                visiting.remove(&class.name);
                Some(align_to(offset, max_align))
            }
            Ty::Trait(_) | Ty::Generic(_) | Ty::Var(_) => None,
        }
    }

    fn align_of(&self, ty: &Ty, visiting: &mut HashSet<String>) -> Option<usize> {
        if let Ty::Class(class) = ty {
            if let Some(info) = self.registry.class_info(&class.name) {
                if !visiting.insert(class.name.clone()) {
                    return None;
                }
                let align = info
                    .fields
                    .iter()
                    .filter_map(|(_, field_ty)| self.align_of(field_ty, visiting))
                    .max()
                    .unwrap_or(MIN_ALIGN);
                visiting.remove(&class.name);
                return Some(align);
            }
        }
        match self.size_of(ty, visiting) {
            Some(0) => Some(MIN_ALIGN),
            Some(size) if size <= MAX_SCALAR_ALIGN => Some(size),
            Some(_) => Some(MAX_SCALAR_ALIGN),
            None => Some(MIN_ALIGN),
        }
    }

    /// Only pointers admit `null`.
    #[must_use]
    pub fn is_nullable(&self, ty: &Ty) -> bool {
        ty.is_pointer()
    }

    /// A type is copyable unless it is a move-only class, a unique
    /// pointer, or a resource handle.
    #[must_use]
    pub fn is_copyable(&self, ty: &Ty) -> bool {
        match ty {
            Ty::Class(class) => self
                .registry
                .class_info(&class.name)
                .is_none_or(|info| !info.move_only),
            Ty::Pointer(ptr) => !ptr.unique,
            Ty::Basic(basic) => !RESOURCE_NAMES.contains(&basic.name.as_str()),
            _ => true,
        }
    }

    /// Every type may be moved.
    #[must_use]
    pub fn is_movable(&self, _ty: &Ty) -> bool {
        true
    }
}
