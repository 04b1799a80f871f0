use alloc::boxed::Box;
use alloc::collections::VecDeque;
use alloc::string::ToString;
use alloc::vec::Vec;

use crate::derive::impl_type_path;
use crate::impls::{GenericTypeInfoCell, GenericTypePathCell};
use crate::info::{ListInfo, TypeInfo, TypePath, Typed};
use crate::ops::{List, ListItemIter};
use crate::registry::{GetTypeMeta, TypeMeta, TypeRegistry};
use crate::Reflect;

// -----------------------------------------------------------------------------
// TypePath

impl_type_path!(::alloc::vec::Vec<T>);
impl_type_path!(::alloc::collections::VecDeque<T>);

impl<T: TypePath> TypePath for [T] {
    fn type_path() -> &'static str {
        static CELL: GenericTypePathCell = GenericTypePathCell::new();
        CELL.get_or_insert::<Self>(|| crate::impls::concat(&["[", T::type_path(), "]"]))
    }

    fn type_name() -> &'static str {
        static CELL: GenericTypePathCell = GenericTypePathCell::new();
        CELL.get_or_insert::<Self>(|| crate::impls::concat(&["[", T::type_name(), "]"]))
    }
}

impl<T: TypePath, const N: usize> TypePath for [T; N] {
    fn type_path() -> &'static str {
        static CELL: GenericTypePathCell = GenericTypePathCell::new();
        CELL.get_or_insert::<Self>(|| {
            crate::impls::concat(&["[", T::type_path(), "; ", &N.to_string(), "]"])
        })
    }

    fn type_name() -> &'static str {
        static CELL: GenericTypePathCell = GenericTypePathCell::new();
        CELL.get_or_insert::<Self>(|| {
            crate::impls::concat(&["[", T::type_name(), "; ", &N.to_string(), "]"])
        })
    }
}

// -----------------------------------------------------------------------------
// Vec, VecDeque, Box<[T]>

macro_rules! impl_reflect_for_list {
    ($ty:ty, $storage:ty) => {
        impl<T: Reflect + Typed> Typed for $ty {
            fn type_info() -> &'static TypeInfo {
                static CELL: GenericTypeInfoCell = GenericTypeInfoCell::new();
                CELL.get_or_insert::<Self>(|| TypeInfo::List(ListInfo::new::<Self, T>()))
            }
        }

        impl<T: Reflect + Typed> Reflect for $ty {
            crate::reflection::impl_reflect_cast_fn!(List);
        }

        impl<T: Reflect + Typed> List for $ty {
            #[inline]
            fn get(&self, index: usize) -> Option<&dyn Reflect> {
                <$storage>::get(self, index).map(Reflect::as_reflect)
            }

            #[inline]
            fn len(&self) -> usize {
                <$storage>::len(self)
            }

            #[inline]
            fn iter(&self) -> ListItemIter<'_> {
                ListItemIter::new(self)
            }
        }

        impl<T: Reflect + Typed + GetTypeMeta> GetTypeMeta for $ty {
            #[inline]
            fn get_type_meta() -> TypeMeta {
                TypeMeta::of::<Self>()
            }

            fn register_dependencies(registry: &mut TypeRegistry) {
                registry.register::<T>();
            }
        }
    };
}

impl_reflect_for_list!(Vec<T>, [T]);
impl_reflect_for_list!(Box<[T]>, [T]);
impl_reflect_for_list!(VecDeque<T>, VecDeque<T>);

// -----------------------------------------------------------------------------
// [T; N]

impl<T: Reflect + Typed, const N: usize> Typed for [T; N] {
    fn type_info() -> &'static TypeInfo {
        static CELL: GenericTypeInfoCell = GenericTypeInfoCell::new();
        CELL.get_or_insert::<Self>(|| TypeInfo::List(ListInfo::new::<Self, T>()))
    }
}

impl<T: Reflect + Typed, const N: usize> Reflect for [T; N] {
    crate::reflection::impl_reflect_cast_fn!(List);
}

impl<T: Reflect + Typed, const N: usize> List for [T; N] {
    #[inline]
    fn get(&self, index: usize) -> Option<&dyn Reflect> {
        <[T]>::get(self, index).map(Reflect::as_reflect)
    }

    #[inline]
    fn len(&self) -> usize {
        N
    }

    #[inline]
    fn iter(&self) -> ListItemIter<'_> {
        ListItemIter::new(self)
    }
}

impl<T: Reflect + Typed + GetTypeMeta, const N: usize> GetTypeMeta for [T; N] {
    #[inline]
    fn get_type_meta() -> TypeMeta {
        TypeMeta::of::<Self>()
    }

    fn register_dependencies(registry: &mut TypeRegistry) {
        registry.register::<T>();
    }
}

#[cfg(test)]
mod tests {
    use alloc::boxed::Box;
    use alloc::collections::VecDeque;
    use alloc::string::String;
    use alloc::vec;
    use alloc::vec::Vec;

    use crate::Reflect;
    use crate::info::{TypePath, Typed};
    use crate::ops::ReflectRef;

    #[test]
    fn list_access() {
        let deque: VecDeque<i32> = VecDeque::from([1, 2, 3]);
        let ReflectRef::List(list) = deque.reflect_ref() else {
            panic!("not a list");
        };
        assert_eq!(list.len(), 3);
        assert_eq!(list.get(1).unwrap().downcast_ref::<i32>(), Some(&2));
        assert!(list.get(3).is_none());

        let items: Vec<i32> = list
            .iter()
            .filter_map(|item| item.downcast_ref::<i32>().copied())
            .collect();
        assert_eq!(items, vec![1, 2, 3]);
    }

    #[test]
    fn item_info_for_byte_lists() {
        assert!(<[u8; 4] as Typed>::type_info().as_list().unwrap().item_is::<u8>());
        assert!(<Box<[u8]> as Typed>::type_info().as_list().unwrap().item_is::<u8>());
        assert!(!<Vec<String> as Typed>::type_info().as_list().unwrap().item_is::<u8>());
    }

    #[test]
    fn list_paths() {
        assert_eq!(<[u8; 4] as TypePath>::type_path(), "[u8; 4]");
        assert_eq!(<Box<[u8]> as TypePath>::type_path(), "alloc::boxed::Box<[u8]>");
        assert_eq!(
            <VecDeque<bool> as TypePath>::type_name(),
            "VecDeque<bool>"
        );
    }

    #[test]
    fn boxed_slice_is_list() {
        let data: Box<[u8]> = Box::from([1_u8, 2]);
        let ReflectRef::List(list) = data.reflect_ref() else {
            panic!("not a list");
        };
        assert_eq!(list.len(), 2);
    }
}
