use alloc::boxed::Box;
use alloc::collections::BTreeMap;

use crate::Reflect;
use crate::derive::impl_type_path;
use crate::impls::GenericTypeInfoCell;
use crate::info::{MapInfo, TypeInfo, TypePath, Typed};
use crate::ops::{Map, MapIter};
use crate::registry::{GetTypeMeta, TypeMeta, TypeRegistry};

// -----------------------------------------------------------------------------
// TypePath

impl_type_path!(::alloc::collections::BTreeMap<K, V>);
impl_type_path!(::std::collections::HashMap<K, V, S>);
impl_type_path!(::std::hash::RandomState);

impl_type_path!(::plist_utils::hash::hashbrown::HashMap<K, V, S>);

impl_type_path!(::plist_utils::hash::FixedHashState);

// -----------------------------------------------------------------------------
// Reflect

macro_rules! impl_reflect_for_map {
    ($ty:ty $(, $hasher:ident)?) => {
        impl<K, V $(, $hasher)?> Typed for $ty
        where
            K: Reflect + Typed,
            V: Reflect + Typed,
            $($hasher: TypePath + Send + Sync,)?
        {
            fn type_info() -> &'static TypeInfo {
                static CELL: GenericTypeInfoCell = GenericTypeInfoCell::new();
                CELL.get_or_insert::<Self>(|| TypeInfo::Map(MapInfo::new::<Self, K, V>()))
            }
        }

        impl<K, V $(, $hasher)?> Reflect for $ty
        where
            K: Reflect + Typed,
            V: Reflect + Typed,
            $($hasher: TypePath + Send + Sync,)?
        {
            crate::reflection::impl_reflect_cast_fn!(Map);
        }

        impl<K, V $(, $hasher)?> Map for $ty
        where
            K: Reflect + Typed,
            V: Reflect + Typed,
            $($hasher: TypePath + Send + Sync,)?
        {
            #[inline]
            fn len(&self) -> usize {
                Self::len(self)
            }

            fn iter(&self) -> MapIter<'_> {
                Box::new(
                    Self::iter(self)
                        .map(|(key, value)| (key as &dyn Reflect, value as &dyn Reflect)),
                )
            }
        }

        impl<K, V $(, $hasher)?> GetTypeMeta for $ty
        where
            K: Reflect + Typed + GetTypeMeta,
            V: Reflect + Typed + GetTypeMeta,
            $($hasher: TypePath + Send + Sync,)?
        {
            #[inline]
            fn get_type_meta() -> TypeMeta {
                TypeMeta::of::<Self>()
            }

            fn register_dependencies(registry: &mut TypeRegistry) {
                registry.register::<K>();
                registry.register::<V>();
            }
        }
    };
}

impl_reflect_for_map!(BTreeMap<K, V>);
impl_reflect_for_map!(::std::collections::HashMap<K, V, S>, S);
impl_reflect_for_map!(::plist_utils::hash::hashbrown::HashMap<K, V, S>, S);

#[cfg(test)]
mod tests {
    use alloc::collections::BTreeMap;
    use alloc::string::String;

    use plist_utils::hash::HashMap;

    use crate::Reflect;
    use crate::info::{TypePath, Typed};
    use crate::ops::ReflectRef;

    #[test]
    fn btree_map_iterates_in_key_order() {
        let map = BTreeMap::from([(2_u8, "b"), (1_u8, "a")]);
        let ReflectRef::Map(dyn_map) = map.reflect_ref() else {
            panic!("not a map");
        };
        let keys: alloc::vec::Vec<u8> = dyn_map
            .iter()
            .filter_map(|(key, _)| key.downcast_ref::<u8>().copied())
            .collect();
        assert_eq!(keys, [1, 2]);
    }

    #[test]
    fn hash_map_paths_and_keys() {
        let info = <HashMap<String, bool> as Typed>::type_info();
        assert_eq!(
            info.type_path(),
            "plist_utils::hash::hashbrown::HashMap<alloc::string::String, bool, plist_utils::hash::FixedHashState>"
        );
        assert!(info.as_map().unwrap().has_text_keys());

        assert_eq!(
            <std::collections::HashMap<u8, u8> as TypePath>::type_name(),
            "HashMap<u8, u8, RandomState>"
        );
        assert!(
            !<std::collections::HashMap<u8, u8> as Typed>::type_info()
                .as_map()
                .unwrap()
                .has_text_keys()
        );
    }

    #[test]
    fn empty_map_len() {
        let map: HashMap<String, i32> = HashMap::default();
        let ReflectRef::Map(dyn_map) = map.reflect_ref() else {
            panic!("not a map");
        };
        assert!(dyn_map.is_empty());
    }
}
