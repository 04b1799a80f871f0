use alloc::boxed::Box;
use core::any::{Any, TypeId};
use core::fmt;

use crate::MarshalText;
use crate::impls::NonGenericTypeInfoCell;
use crate::info::{DynamicTypePath, DynamicTyped, TypePath, Typed};
use crate::info::{OpaqueInfo, ReflectKind, TypeInfo};
use crate::ops::ReflectRef;

// -----------------------------------------------------------------------------
// Reflect

/// Object-safe, read-only view of a value of any reflected type.
///
/// A converter only ever holds `&dyn Reflect`. It asks for the value's
/// [`TypeInfo`] through [`DynamicTyped`] and for its shape through
/// [`reflect_ref`](Reflect::reflect_ref), which splits every type into one
/// of a closed set of kinds.
///
/// # Implementation
///
/// Use [the derive macro](crate::derive::Reflect). Named structs become
/// [`Struct`](crate::ops::Struct) kinds, everything else is opaque.
///
/// ```rust
/// use plist_reflect::{Reflect, derive::Reflect, ops::ReflectRef};
///
/// #[derive(Reflect)]
/// struct Point {
///     x: i32,
///     y: i32,
/// }
///
/// let p = Point { x: 1, y: 2 };
/// let ReflectRef::Struct(s) = p.reflect_ref() else { unreachable!() };
/// assert_eq!(s.name_at(1), Some("y"));
/// assert_eq!(s.field_at(1).unwrap().downcast_ref::<i32>(), Some(&2));
/// ```
///
/// ## Type Identification
///
/// `Box<dyn Reflect>` is itself a reflected pointer, so methods called on
/// the box describe the box. Dereference it to reach the value:
///
/// ```rust
/// # use plist_reflect::Reflect;
/// # use core::any::TypeId;
/// let x: Box<dyn Reflect> = 32_i32.into_boxed_reflect();
/// assert_eq!(x.ty_id(), TypeId::of::<Box<dyn Reflect>>());
/// assert_eq!((*x).ty_id(), TypeId::of::<i32>());
/// ```
pub trait Reflect: DynamicTypePath + DynamicTyped + Send + Sync + Any {
    /// Casts this type to a reflected value.
    #[inline(always)]
    fn as_reflect(&self) -> &dyn Reflect
    where
        Self: Sized,
    {
        self
    }

    /// Boxes this value as a `Box<dyn Reflect>`.
    #[inline(always)]
    fn into_boxed_reflect(self) -> Box<dyn Reflect>
    where
        Self: Sized,
    {
        Box::new(self)
    }

    /// Returns the [`TypeId`] of the underlying value.
    #[inline]
    fn ty_id(&self) -> TypeId {
        TypeId::of::<Self>()
    }

    /// Returns the kind of this value.
    fn reflect_kind(&self) -> ReflectKind;

    /// Returns a kind-specific view of this value.
    fn reflect_ref(&self) -> ReflectRef<'_>;

    /// Returns the value's own text rendering, if it has one.
    ///
    /// Types marked `#[reflect(marshal_text)]` return `Some(self)`.
    #[inline]
    fn reflect_text(&self) -> Option<&dyn MarshalText> {
        None
    }

    /// Debug formatter driven by the reflected shape.
    fn reflect_debug(&self, f: &mut fmt::Formatter) -> fmt::Result {
        use crate::impls;
        match self.reflect_ref() {
            ReflectRef::Scalar(data) => fmt::Debug::fmt(&data, f),
            ReflectRef::Struct(data) => impls::struct_debug(data, f),
            ReflectRef::List(data) => impls::list_debug(data, f),
            ReflectRef::Map(data) => impls::map_debug(data, f),
            ReflectRef::Pointer(data) => impls::pointer_debug(data, f),
            ReflectRef::Opaque(_) => write!(f, "Opaque({})", self.reflect_type_path()),
        }
    }
}

impl dyn Reflect {
    /// Returns `true` if the underlying value is of type `T`.
    #[inline(always)]
    pub fn is<T: Any>(&self) -> bool {
        self.ty_id() == TypeId::of::<T>()
    }

    /// Downcasts the value to a reference of type `T`.
    #[inline]
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        <dyn Any>::downcast_ref(self)
    }
}

impl fmt::Debug for dyn Reflect {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.reflect_debug(f)
    }
}

impl TypePath for dyn Reflect {
    #[inline]
    fn type_path() -> &'static str {
        "dyn plist_reflect::Reflect"
    }
    #[inline]
    fn type_name() -> &'static str {
        "dyn Reflect"
    }
}

impl Typed for dyn Reflect {
    fn type_info() -> &'static TypeInfo {
        static CELL: NonGenericTypeInfoCell = NonGenericTypeInfoCell::new();
        CELL.get_or_init(|| TypeInfo::Opaque(OpaqueInfo::new::<Self>()))
    }
}

// -----------------------------------------------------------------------------
// Auxiliary macro

macro_rules! impl_reflect_cast_fn {
    ($kind:ident) => {
        #[inline]
        fn reflect_kind(&self) -> $crate::info::ReflectKind {
            $crate::info::ReflectKind::$kind
        }

        #[inline]
        fn reflect_ref(&self) -> $crate::ops::ReflectRef<'_> {
            $crate::ops::ReflectRef::$kind(self)
        }
    };
}

pub(crate) use impl_reflect_cast_fn;

#[cfg(test)]
mod tests {
    use alloc::boxed::Box;
    use alloc::string::String;
    use alloc::vec;
    use core::any::TypeId;

    use crate::Reflect;
    use crate::info::ReflectKind;

    #[test]
    fn boxed_value_reports_inner_type() {
        let boxed: Box<dyn Reflect> = String::from("x").into_boxed_reflect();
        assert!(boxed.is::<String>());
        assert_eq!((*boxed).ty_id(), TypeId::of::<String>());
        assert_eq!(boxed.downcast_ref::<String>().map(String::as_str), Some("x"));
        assert!(boxed.downcast_ref::<u8>().is_none());
    }

    #[test]
    fn kinds_of_builtin_values() {
        assert_eq!(1_u8.reflect_kind(), ReflectKind::Scalar);
        assert_eq!(vec![1_u8].reflect_kind(), ReflectKind::List);
        assert_eq!(Some(1_u8).reflect_kind(), ReflectKind::Pointer);
        assert_eq!(().reflect_kind(), ReflectKind::Opaque);
    }

    #[test]
    fn debug_follows_shape() {
        let v = vec![Some(1_i32), None];
        let text = alloc::format!("{:?}", v.as_reflect());
        assert_eq!(text, "[Some(Signed(1)), None]");
    }
}
