use core::any::{Any, TypeId};

use crate::Reflect;
use crate::info::{Type, TypeInfo, TypePath, Typed, impl_type_fn};
use crate::ops::Map;

/// Type info of a map type such as `HashMap<K, V>` or `BTreeMap<K, V>`.
#[derive(Clone, Debug)]
pub struct MapInfo {
    ty: Type,
    key_id: TypeId,
    value_id: TypeId,
    key_info: fn() -> &'static TypeInfo,
    value_info: fn() -> &'static TypeInfo,
}

impl MapInfo {
    impl_type_fn!(ty);

    #[inline]
    pub const fn new<TMap: Map + TypePath, TKey: Reflect + Typed, TValue: Reflect + Typed>() -> Self
    {
        Self {
            ty: Type::of::<TMap>(),
            key_id: TypeId::of::<TKey>(),
            value_id: TypeId::of::<TValue>(),
            key_info: TKey::type_info,
            value_info: TValue::type_info,
        }
    }

    #[inline]
    pub const fn key_id(&self) -> TypeId {
        self.key_id
    }

    #[inline]
    pub fn key_is<T: Any>(&self) -> bool {
        self.key_id == TypeId::of::<T>()
    }

    #[inline]
    pub const fn value_id(&self) -> TypeId {
        self.value_id
    }

    #[inline]
    pub fn value_is<T: Any>(&self) -> bool {
        self.value_id == TypeId::of::<T>()
    }

    #[inline]
    pub fn key_info(&self) -> &'static TypeInfo {
        (self.key_info)()
    }

    #[inline]
    pub fn value_info(&self) -> &'static TypeInfo {
        (self.value_info)()
    }

    /// Returns `true` if the keys are text scalars.
    ///
    /// ```
    /// use std::collections::{BTreeMap, HashMap};
    /// use plist_reflect::info::Typed;
    ///
    /// let by_name = <HashMap<String, i32> as Typed>::type_info().as_map().unwrap();
    /// let by_id = <BTreeMap<u32, i32> as Typed>::type_info().as_map().unwrap();
    /// assert!(by_name.has_text_keys());
    /// assert!(!by_id.has_text_keys());
    /// ```
    pub fn has_text_keys(&self) -> bool {
        self.key_info()
            .as_scalar()
            .is_ok_and(crate::info::ScalarInfo::is_text)
    }
}
