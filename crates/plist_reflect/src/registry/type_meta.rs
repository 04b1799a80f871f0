use alloc::boxed::Box;
use core::any::TypeId;
use core::ops::Deref;

use plist_utils::TypeIdMap;

use crate::info::{Type, TypeInfo, Typed};
use crate::registry::{TypeRegistry, TypeTrait};

// -----------------------------------------------------------------------------
// TypeMeta

/// Runtime metadata of one type, stored in a [`TypeRegistry`].
///
/// Holds the type's [`TypeInfo`] and a table of [`TypeTrait`]s.
///
/// # Examples
///
/// ```
/// use core::net::Ipv4Addr;
/// use plist_reflect::registry::{FromType, TypeMeta, TypeTraitMarshalText};
///
/// let mut meta = TypeMeta::of::<Ipv4Addr>();
/// meta.insert_trait::<TypeTraitMarshalText>(FromType::<Ipv4Addr>::from_type());
///
/// let renderer = meta.get_trait::<TypeTraitMarshalText>().unwrap();
/// let text = renderer.marshal_text(&Ipv4Addr::LOCALHOST).unwrap();
/// assert_eq!(text.unwrap(), "127.0.0.1");
/// ```
pub struct TypeMeta {
    ty: &'static Type,
    type_info: &'static TypeInfo,
    trait_table: TypeIdMap<Box<dyn TypeTrait>>,
}

impl TypeMeta {
    /// Creates a `TypeMeta` without any [`TypeTrait`].
    ///
    /// # Examples
    ///
    /// ```
    /// use plist_reflect::registry::TypeMeta;
    ///
    /// let meta = TypeMeta::of::<String>();
    /// assert_eq!(meta.type_path(), "alloc::string::String");
    /// assert_eq!(meta.trait_len(), 0);
    /// ```
    #[inline]
    pub fn of<T: Typed>() -> Self {
        let type_info = T::type_info();
        Self {
            ty: type_info.ty(),
            type_info,
            trait_table: TypeIdMap::new(),
        }
    }

    /// Like [`TypeMeta::of`], with room for `capacity` traits.
    #[inline]
    pub fn with_capacity<T: Typed>(capacity: usize) -> Self {
        let type_info = T::type_info();
        Self {
            ty: type_info.ty(),
            type_info,
            trait_table: TypeIdMap::with_capacity(capacity),
        }
    }

    #[inline(always)]
    pub const fn type_info(&self) -> &'static TypeInfo {
        self.type_info
    }

    #[inline(always)]
    pub const fn ty(&self) -> &'static Type {
        self.ty
    }

    crate::info::impl_type_fn!();

    /// Inserts a capability, replacing one of the same type.
    #[inline(always)]
    pub fn insert_trait<T: TypeTrait>(&mut self, data: T) {
        self.insert_trait_by_id(TypeId::of::<T>(), Box::new(data));
    }

    #[inline(never)]
    fn insert_trait_by_id(&mut self, id: TypeId, val: Box<dyn TypeTrait>) {
        self.trait_table.insert(id, val);
    }

    #[inline]
    pub fn get_trait<T: TypeTrait>(&self) -> Option<&T> {
        self.get_trait_by_id(TypeId::of::<T>())
            .and_then(<dyn TypeTrait>::downcast_ref)
    }

    pub fn get_trait_by_id(&self, type_id: TypeId) -> Option<&dyn TypeTrait> {
        self.trait_table.get(&type_id).map(Deref::deref)
    }

    #[inline]
    pub fn has_trait<T: TypeTrait>(&self) -> bool {
        self.trait_table.contains(&TypeId::of::<T>())
    }

    #[inline]
    pub fn trait_len(&self) -> usize {
        self.trait_table.len()
    }
}

impl Clone for TypeMeta {
    fn clone(&self) -> Self {
        let mut trait_table = TypeIdMap::with_capacity(self.trait_len());
        for (id, type_trait) in self.trait_table.iter() {
            trait_table.insert(*id, (**type_trait).clone_type_trait());
        }

        Self {
            ty: self.ty,
            type_info: self.type_info,
            trait_table,
        }
    }
}

impl core::fmt::Debug for TypeMeta {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("TypeMeta")
            .field("type_info", &self.type_info)
            .field("trait_table", &self.trait_table)
            .finish()
    }
}

// -----------------------------------------------------------------------------
// GetTypeMeta

/// Provides the default [`TypeMeta`] of a type.
///
/// Implemented by `#[derive(Reflect)]` and for the built-in types.
#[diagnostic::on_unimplemented(
    message = "`{Self}` does not implement `GetTypeMeta` so cannot provide type registration information",
    note = "consider annotating `{Self}` with `#[derive(Reflect)]`"
)]
pub trait GetTypeMeta: Typed {
    /// Returns the default [`TypeMeta`] of this type.
    fn get_type_meta() -> TypeMeta;

    /// Registers the types this type is built from, e.g. the item type of a list.
    fn register_dependencies(_registry: &mut TypeRegistry) {}
}

#[cfg(test)]
mod tests {
    use core::net::Ipv6Addr;

    use crate::registry::{GetTypeMeta, TypeMeta, TypeTraitMarshalText};

    #[test]
    fn clone_keeps_traits() {
        let meta = <Ipv6Addr as GetTypeMeta>::get_type_meta();
        assert!(meta.has_trait::<TypeTraitMarshalText>());

        let cloned = meta.clone();
        assert_eq!(cloned.trait_len(), meta.trait_len());
        assert_eq!(cloned.ty(), meta.ty());
        assert!(cloned.get_trait::<TypeTraitMarshalText>().is_some());
    }

    #[test]
    fn scalar_meta_has_no_traits() {
        let meta = TypeMeta::of::<u32>();
        assert!(!meta.has_trait::<TypeTraitMarshalText>());
        assert!(meta.type_is::<u32>());
    }
}
