use core::any::{Any, TypeId};

use crate::info::{TypeInfo, Typed};

// -----------------------------------------------------------------------------
// NamedField

/// Descriptor of one visible field of a record.
///
/// Besides the Rust name it carries the key the field is exported under
/// and whether an empty value is left out.
///
/// # Examples
///
/// ```
/// use plist_reflect::info::NamedField;
///
/// let field = NamedField::new::<String>("bundle_id")
///     .with_export_name("CFBundleIdentifier")
///     .with_omit_empty(true);
///
/// assert_eq!(field.name(), "bundle_id");
/// assert_eq!(field.export_name(), "CFBundleIdentifier");
/// assert!(field.omit_empty());
/// assert!(field.type_is::<String>());
/// ```
#[derive(Clone, Debug)]
pub struct NamedField {
    ty_id: TypeId,
    name: &'static str,
    export_name: &'static str,
    omit_empty: bool,
    // delayed, `TypeInfo` is only built on first access.
    type_info: fn() -> &'static TypeInfo,
}

impl NamedField {
    /// Creates a field exported under its own name.
    #[inline]
    pub const fn new<T: Typed>(name: &'static str) -> Self {
        Self {
            name,
            export_name: name,
            omit_empty: false,
            type_info: T::type_info,
            ty_id: TypeId::of::<T>(),
        }
    }

    /// Sets the key the field is exported under.
    #[inline]
    pub const fn with_export_name(mut self, export_name: &'static str) -> Self {
        self.export_name = export_name;
        self
    }

    /// Sets whether empty values are left out.
    #[inline]
    pub const fn with_omit_empty(mut self, omit_empty: bool) -> Self {
        self.omit_empty = omit_empty;
        self
    }

    #[inline]
    pub const fn ty_id(&self) -> TypeId {
        self.ty_id
    }

    #[inline]
    pub fn type_is<T: Any>(&self) -> bool {
        self.ty_id == TypeId::of::<T>()
    }

    /// The field's name in Rust.
    #[inline]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// The key used in the converted dictionary.
    #[inline]
    pub const fn export_name(&self) -> &'static str {
        self.export_name
    }

    #[inline]
    pub const fn omit_empty(&self) -> bool {
        self.omit_empty
    }

    #[inline]
    pub fn type_info(&self) -> &'static TypeInfo {
        (self.type_info)()
    }
}
