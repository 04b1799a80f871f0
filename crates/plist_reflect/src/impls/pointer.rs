use alloc::boxed::Box;
use alloc::sync::Arc;

use crate::Reflect;
use crate::derive::impl_type_path;
use crate::impls::{GenericTypeInfoCell, GenericTypePathCell, NonGenericTypeInfoCell};
use crate::info::{PointerInfo, TypeInfo, TypePath, Typed};
use crate::ops::Pointer;
use crate::registry::{GetTypeMeta, TypeMeta, TypeRegistry};

// -----------------------------------------------------------------------------
// TypePath

impl_type_path!(::core::option::Option<T>);
impl_type_path!(::alloc::boxed::Box<T: ?Sized>);
impl_type_path!(::alloc::sync::Arc<T: ?Sized>);

impl<T: TypePath + ?Sized> TypePath for &'static T {
    fn type_path() -> &'static str {
        static CELL: GenericTypePathCell = GenericTypePathCell::new();
        CELL.get_or_insert::<Self>(|| crate::impls::concat(&["&", T::type_path()]))
    }

    fn type_name() -> &'static str {
        static CELL: GenericTypePathCell = GenericTypePathCell::new();
        CELL.get_or_insert::<Self>(|| crate::impls::concat(&["&", T::type_name()]))
    }
}

// -----------------------------------------------------------------------------
// Option<T>

impl<T: Reflect + Typed> Typed for Option<T> {
    fn type_info() -> &'static TypeInfo {
        static CELL: GenericTypeInfoCell = GenericTypeInfoCell::new();
        CELL.get_or_insert::<Self>(|| TypeInfo::Pointer(PointerInfo::new::<Self, T>(true)))
    }
}

impl<T: Reflect + Typed> Reflect for Option<T> {
    crate::reflection::impl_reflect_cast_fn!(Pointer);
}

impl<T: Reflect + Typed> Pointer for Option<T> {
    #[inline]
    fn target(&self) -> Option<&dyn Reflect> {
        self.as_ref().map(Reflect::as_reflect)
    }
}

impl<T: Reflect + Typed + GetTypeMeta> GetTypeMeta for Option<T> {
    #[inline]
    fn get_type_meta() -> TypeMeta {
        TypeMeta::of::<Self>()
    }

    fn register_dependencies(registry: &mut TypeRegistry) {
        registry.register::<T>();
    }
}

// -----------------------------------------------------------------------------
// Box<T>, Arc<T>, &'static T

macro_rules! impl_reflect_for_pointer {
    ($ty:ty) => {
        impl<T: Reflect + Typed> Typed for $ty {
            fn type_info() -> &'static TypeInfo {
                static CELL: GenericTypeInfoCell = GenericTypeInfoCell::new();
                CELL.get_or_insert::<Self>(|| {
                    TypeInfo::Pointer(PointerInfo::new::<Self, T>(false))
                })
            }
        }

        impl<T: Reflect + Typed> Reflect for $ty {
            crate::reflection::impl_reflect_cast_fn!(Pointer);
        }

        impl<T: Reflect + Typed> Pointer for $ty {
            #[inline]
            fn target(&self) -> Option<&dyn Reflect> {
                Some(T::as_reflect(self))
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

impl_reflect_for_pointer!(Box<T>);
impl_reflect_for_pointer!(Arc<T>);
impl_reflect_for_pointer!(&'static T);

// -----------------------------------------------------------------------------
// Box<dyn Reflect>

impl Typed for Box<dyn Reflect> {
    fn type_info() -> &'static TypeInfo {
        static CELL: NonGenericTypeInfoCell = NonGenericTypeInfoCell::new();
        CELL.get_or_init(|| TypeInfo::Pointer(PointerInfo::new::<Self, dyn Reflect>(false)))
    }
}

impl Reflect for Box<dyn Reflect> {
    crate::reflection::impl_reflect_cast_fn!(Pointer);
}

impl Pointer for Box<dyn Reflect> {
    #[inline]
    fn target(&self) -> Option<&dyn Reflect> {
        Some(&**self)
    }
}

impl GetTypeMeta for Box<dyn Reflect> {
    #[inline]
    fn get_type_meta() -> TypeMeta {
        TypeMeta::of::<Self>()
    }
}

#[cfg(test)]
mod tests {
    use alloc::boxed::Box;
    use alloc::string::String;
    use alloc::sync::Arc;

    use crate::Reflect;
    use crate::info::{TypePath, Typed};
    use crate::ops::ReflectRef;

    #[test]
    fn option_is_nullable() {
        let info = <Option<u8> as Typed>::type_info().as_pointer().unwrap();
        assert!(info.nullable());
        assert!(info.target_is::<u8>());

        let none: Option<u8> = None;
        let ReflectRef::Pointer(ptr) = none.reflect_ref() else {
            panic!("not a pointer");
        };
        assert!(ptr.is_null());
    }

    #[test]
    fn owned_pointers_expose_target() {
        let boxed = Box::new(3_u16);
        let shared = Arc::new(String::from("s"));
        let fixed: &'static i8 = &-1;

        let values: [&dyn Reflect; 3] = [&boxed, &shared, &fixed];
        for value in values {
            let ReflectRef::Pointer(ptr) = value.reflect_ref() else {
                panic!("not a pointer");
            };
            assert!(!ptr.is_null());
            assert!(ptr.target().is_some());
        }
        assert_eq!(<&'static i8 as TypePath>::type_path(), "&i8");
    }

    #[test]
    fn boxed_dyn_reflect_unwraps_to_value() {
        let boxed: Box<dyn Reflect> = Box::new(7_i64);
        let ReflectRef::Pointer(ptr) = boxed.reflect_ref() else {
            panic!("not a pointer");
        };
        assert_eq!(ptr.target().unwrap().downcast_ref::<i64>(), Some(&7));
        assert_eq!(
            <Box<dyn Reflect> as TypePath>::type_path(),
            "alloc::boxed::Box<dyn plist_reflect::Reflect>"
        );
    }
}
