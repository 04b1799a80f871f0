use alloc::borrow::Cow;
use alloc::string::String;
use core::any::TypeId;

use plist_utils::TypeIdMap;
use plist_utils::hash::{FixedHashState, HashMap};

use crate::info::{TypeInfo, Typed};
use crate::registry::{FromType, GetTypeMeta, TypeMeta, TypeTrait};

// -----------------------------------------------------------------------------
// TypeRegistry

/// A collection of [`TypeMeta`], keyed by `TypeId` and by type path.
///
/// Converters look up per-type capabilities here, such as
/// [`TypeTraitMarshalText`](crate::registry::TypeTraitMarshalText).
///
/// # Examples
///
/// ```
/// use core::any::TypeId;
/// use plist_reflect::registry::TypeRegistry;
///
/// let mut registry = TypeRegistry::empty();
/// registry.register::<Vec<u8>>();
///
/// // Item types are registered as dependencies.
/// assert!(registry.contains(TypeId::of::<u8>()));
/// let meta = registry.get_with_type_path("alloc::vec::Vec<u8>").unwrap();
/// assert!(meta.type_is::<Vec<u8>>());
/// ```
pub struct TypeRegistry {
    type_meta_table: TypeIdMap<TypeMeta>,
    type_path_to_id: HashMap<&'static str, TypeId>,
}

impl Default for TypeRegistry {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl TypeRegistry {
    /// Creates a registry without any type.
    #[inline]
    pub const fn empty() -> Self {
        Self {
            type_meta_table: TypeIdMap::new(),
            type_path_to_id: HashMap::with_hasher(FixedHashState),
        }
    }

    /// Creates a registry with the scalar types, the opaque primitives
    /// and the network address types.
    pub fn new() -> Self {
        use core::net::{IpAddr, Ipv4Addr, Ipv6Addr};
        use core::net::{SocketAddr, SocketAddrV4, SocketAddrV6};

        let mut registry = Self::empty();
        registry.register::<()>();
        registry.register::<bool>();
        registry.register::<char>();
        registry.register::<u8>();
        registry.register::<u16>();
        registry.register::<u32>();
        registry.register::<u64>();
        registry.register::<u128>();
        registry.register::<usize>();
        registry.register::<i8>();
        registry.register::<i16>();
        registry.register::<i32>();
        registry.register::<i64>();
        registry.register::<i128>();
        registry.register::<isize>();
        registry.register::<f32>();
        registry.register::<f64>();
        registry.register::<String>();
        registry.register::<&'static str>();
        registry.register::<Cow<'static, str>>();
        registry.register::<IpAddr>();
        registry.register::<Ipv4Addr>();
        registry.register::<Ipv6Addr>();
        registry.register::<SocketAddr>();
        registry.register::<SocketAddrV4>();
        registry.register::<SocketAddrV6>();
        registry
    }

    // Returns `false` and does nothing if the type already exists.
    fn register_internal(
        &mut self,
        type_id: TypeId,
        get_type_meta: impl FnOnce() -> TypeMeta,
    ) -> bool {
        let type_path_to_id = &mut self.type_path_to_id;
        self.type_meta_table.try_insert(type_id, || {
            let meta = get_type_meta();
            type_path_to_id.insert(meta.type_path(), type_id);
            meta
        })
    }

    /// Registers `T` and its dependencies.
    ///
    /// Registering a type twice keeps the first [`TypeMeta`].
    pub fn register<T: GetTypeMeta>(&mut self) {
        if self.register_internal(TypeId::of::<T>(), T::get_type_meta) {
            T::register_dependencies(self);
        }
    }

    /// Registers every type marked `#[reflect(auto_register)]`.
    ///
    /// Returns `false` if automatic registration is disabled or not
    /// supported on this platform.
    #[cfg_attr(not(feature = "auto_register"), inline(always))]
    pub fn auto_register(&mut self) -> bool {
        #[cfg(feature = "auto_register")]
        {
            use crate::__macro_exports::auto_register;
            if self.contains(TypeId::of::<auto_register::__AvailFlag>()) {
                return true;
            }
            auto_register::__register_types(self);
            self.contains(TypeId::of::<auto_register::__AvailFlag>())
        }
        #[cfg(not(feature = "auto_register"))]
        {
            false
        }
    }

    /// Inserts the capability `D`, built for `T`, into the `TypeMeta` of `T`.
    ///
    /// # Panics
    ///
    /// Panics if `T` is not registered.
    pub fn register_type_trait<T: Typed, D: TypeTrait + FromType<T>>(&mut self) {
        match self.type_meta_table.get_mut(&TypeId::of::<T>()) {
            Some(type_meta) => type_meta.insert_trait(D::from_type()),
            None => panic!(
                "Called `TypeRegistry::register_type_trait`, but the type `{}` of type_trait `{}` without registering",
                T::type_path(),
                core::any::type_name::<D>(),
            ),
        }
    }

    /// Inserts `data` into the `TypeMeta` of `T`, registering `T` first
    /// if needed.
    pub fn insert_type_trait<T: GetTypeMeta, D: TypeTrait>(&mut self, data: D) {
        self.register::<T>();
        if let Some(type_meta) = self.type_meta_table.get_mut(&TypeId::of::<T>()) {
            type_meta.insert_trait(data);
        }
    }

    #[inline]
    pub fn contains(&self, type_id: TypeId) -> bool {
        self.type_meta_table.contains(&type_id)
    }

    #[inline]
    pub fn get(&self, type_id: TypeId) -> Option<&TypeMeta> {
        self.type_meta_table.get(&type_id)
    }

    #[inline]
    pub fn get_mut(&mut self, type_id: TypeId) -> Option<&mut TypeMeta> {
        self.type_meta_table.get_mut(&type_id)
    }

    pub fn get_with_type_path(&self, type_path: &str) -> Option<&TypeMeta> {
        match self.type_path_to_id.get(type_path) {
            Some(id) => self.get(*id),
            None => None,
        }
    }

    pub fn get_type_trait<T: TypeTrait>(&self, type_id: TypeId) -> Option<&T> {
        match self.get(type_id) {
            Some(type_meta) => type_meta.get_trait::<T>(),
            None => None,
        }
    }

    pub fn get_type_info(&self, type_id: TypeId) -> Option<&'static TypeInfo> {
        self.get(type_id).map(TypeMeta::type_info)
    }

    pub fn len(&self) -> usize {
        self.type_meta_table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.type_meta_table.is_empty()
    }

    pub fn iter(&self) -> impl ExactSizeIterator<Item = &TypeMeta> {
        self.type_meta_table.values()
    }
}

impl core::fmt::Debug for TypeRegistry {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_set().entries(self.type_path_to_id.keys()).finish()
    }
}

// -----------------------------------------------------------------------------
// TypeRegistryArc

use alloc::sync::Arc;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// A shared [`TypeRegistry`] behind a read-write lock.
#[derive(Clone, Default)]
pub struct TypeRegistryArc {
    pub internal: Arc<RwLock<TypeRegistry>>,
}

impl TypeRegistryArc {
    /// Takes a read lock, ignoring poisoning.
    pub fn read(&self) -> RwLockReadGuard<'_, TypeRegistry> {
        self.internal.read().unwrap_or_else(PoisonError::into_inner)
    }

    /// Takes a write lock, ignoring poisoning.
    pub fn write(&self) -> RwLockWriteGuard<'_, TypeRegistry> {
        self.internal
            .write()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

impl core::fmt::Debug for TypeRegistryArc {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        self.read().fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use alloc::collections::BTreeMap;
    use alloc::string::String;
    use alloc::vec::Vec;
    use core::any::TypeId;
    use core::net::Ipv4Addr;
    use core::time::Duration;

    use crate::registry::{TypeRegistry, TypeRegistryArc, TypeTraitMarshalText};

    #[test]
    fn new_registers_builtins() {
        let registry = TypeRegistry::new();
        assert!(registry.contains(TypeId::of::<String>()));
        assert!(registry.contains(TypeId::of::<i128>()));
        assert!(registry.get_with_type_path("f64").is_some());
        assert!(
            registry
                .get_type_trait::<TypeTraitMarshalText>(TypeId::of::<Ipv4Addr>())
                .is_some()
        );
    }

    #[test]
    fn register_adds_dependencies_once() {
        let mut registry = TypeRegistry::empty();
        assert!(registry.is_empty());

        registry.register::<BTreeMap<String, Vec<u16>>>();
        assert!(registry.contains(TypeId::of::<String>()));
        assert!(registry.contains(TypeId::of::<Vec<u16>>()));
        assert!(registry.contains(TypeId::of::<u16>()));

        let len = registry.len();
        registry.register::<Vec<u16>>();
        assert_eq!(registry.len(), len);
    }

    #[test]
    fn insert_type_trait_registers_missing_type() {
        let mut registry = TypeRegistry::empty();
        registry.insert_type_trait::<Duration, _>(TypeTraitMarshalText::from_fn(
            |d: &Duration| Ok(alloc::format!("{}s", d.as_secs())),
        ));

        let meta = registry.get(TypeId::of::<Duration>()).unwrap();
        let text = meta
            .get_trait::<TypeTraitMarshalText>()
            .and_then(|t| t.marshal_text(&Duration::from_secs(3)));
        assert_eq!(text.unwrap().unwrap(), "3s");
    }

    #[test]
    #[should_panic(expected = "without registering")]
    fn register_type_trait_requires_type() {
        let mut registry = TypeRegistry::empty();
        registry.register_type_trait::<Ipv4Addr, TypeTraitMarshalText>();
    }

    #[test]
    fn shared_registry() {
        let shared = TypeRegistryArc::default();
        shared.write().register::<u8>();
        assert!(shared.read().contains(TypeId::of::<u8>()));
    }
}
