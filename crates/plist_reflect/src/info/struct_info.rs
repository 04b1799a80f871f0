use alloc::boxed::Box;

use crate::info::{NamedField, Type, TypePath, impl_type_fn};
use crate::ops::Struct;

/// Type info of a record with named fields.
///
/// Fields are kept in declaration order, which is also the order of
/// [`Struct::field_at`].
///
/// # Examples
///
/// ```
/// use plist_reflect::{derive::Reflect, info::Typed};
///
/// #[derive(Reflect)]
/// struct Entry {
///     #[reflect(rename = "Name")]
///     name: String,
///     #[reflect(skip)]
///     cache: u64,
///     #[reflect(omit_empty)]
///     size: u64,
/// }
///
/// let info = Entry::type_info().as_struct().unwrap();
/// assert_eq!(info.field_len(), 2);
///
/// let name = info.field_at(0).unwrap();
/// assert_eq!((name.name(), name.export_name()), ("name", "Name"));
///
/// let size = info.field_at(1).unwrap();
/// assert_eq!(size.export_name(), "size");
/// assert!(size.omit_empty() && size.type_is::<u64>());
/// assert!(info.field_at(2).is_none());
/// ```
///
/// Export names are unique within a record:
///
/// ```compile_fail
/// use plist_reflect::derive::Reflect;
///
/// #[derive(Reflect)]
/// struct Entry {
///     #[reflect(rename = "size")]
///     len: u64,
///     size: u64,
/// }
/// ```
///
/// A skipped field takes no other attribute:
///
/// ```compile_fail
/// use plist_reflect::derive::Reflect;
///
/// #[derive(Reflect)]
/// struct Entry {
///     #[reflect(skip, rename = "Cache")]
///     cache: u64,
/// }
/// ```
///
/// ```compile_fail
/// use plist_reflect::derive::Reflect;
///
/// #[derive(Reflect)]
/// struct Entry {
///     #[reflect(skip)]
///     #[reflect(omit_empty)]
///     cache: u64,
/// }
/// ```
#[derive(Clone, Debug)]
pub struct StructInfo {
    ty: Type,
    fields: Box<[NamedField]>,
}

impl StructInfo {
    impl_type_fn!(ty);

    pub fn new<T: Struct + TypePath>(fields: &[NamedField]) -> Self {
        Self {
            ty: Type::of::<T>(),
            fields: fields.into(),
        }
    }

    /// Returns the field at `index` in declaration order.
    #[inline]
    pub fn field_at(&self, index: usize) -> Option<&NamedField> {
        self.fields.get(index)
    }

    /// Iterates over the fields in declaration order.
    #[inline]
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &NamedField> {
        self.fields.iter()
    }

    #[inline]
    pub fn field_len(&self) -> usize {
        self.fields.len()
    }
}
