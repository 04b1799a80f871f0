use crate::info::{TypeInfo, TypePath};

// -----------------------------------------------------------------------------
// Typed

/// Static access to a type's [`TypeInfo`].
///
/// The info is built on first access and never changes afterwards. Use the
/// cells in [`impls`](crate::impls) to store it:
///
/// ```
/// use plist_reflect::impls::NonGenericTypeInfoCell;
/// use plist_reflect::info::{OpaqueInfo, TypeInfo, TypePath, Typed};
/// # use plist_reflect::{Reflect, info::ReflectKind, ops::ReflectRef};
///
/// struct Handle;
/// # impl Reflect for Handle {
/// #     fn reflect_kind(&self) -> ReflectKind { ReflectKind::Opaque }
/// #     fn reflect_ref(&self) -> ReflectRef<'_> { ReflectRef::Opaque(self) }
/// # }
///
/// impl TypePath for Handle {
///     fn type_path() -> &'static str { "demo::Handle" }
///     fn type_name() -> &'static str { "Handle" }
/// }
///
/// impl Typed for Handle {
///     fn type_info() -> &'static TypeInfo {
///         static CELL: NonGenericTypeInfoCell = NonGenericTypeInfoCell::new();
///         CELL.get_or_init(|| TypeInfo::Opaque(OpaqueInfo::new::<Self>()))
///     }
/// }
///
/// assert!(core::ptr::eq(Handle::type_info(), Handle::type_info()));
/// ```
pub trait Typed: TypePath {
    /// Returns the compile-time info for this type.
    fn type_info() -> &'static TypeInfo;
}

// -----------------------------------------------------------------------------
// DynamicTyped

/// Dynamic dispatch for [`Typed`].
pub trait DynamicTyped {
    /// See [`Typed::type_info`].
    fn reflect_type_info(&self) -> &'static TypeInfo;
}

impl<T: Typed> DynamicTyped for T {
    #[inline]
    fn reflect_type_info(&self) -> &'static TypeInfo {
        Self::type_info()
    }
}
