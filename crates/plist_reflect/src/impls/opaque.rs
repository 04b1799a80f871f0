use crate::Reflect;
use crate::derive::impl_reflect_opaque;
use crate::impls::{GenericTypeInfoCell, GenericTypePathCell, NonGenericTypeInfoCell};
use crate::info::{OpaqueInfo, TypeInfo, TypePath, Typed};
use crate::registry::{GetTypeMeta, TypeMeta};

impl_reflect_opaque!(i128);
impl_reflect_opaque!(u128);
impl_reflect_opaque!(::core::time::Duration);

// -----------------------------------------------------------------------------
// ()

impl TypePath for () {
    #[inline]
    fn type_path() -> &'static str {
        "()"
    }

    #[inline]
    fn type_name() -> &'static str {
        "()"
    }
}

impl Typed for () {
    fn type_info() -> &'static TypeInfo {
        static CELL: NonGenericTypeInfoCell = NonGenericTypeInfoCell::new();
        CELL.get_or_init(|| TypeInfo::Opaque(OpaqueInfo::new::<Self>()))
    }
}

impl Reflect for () {
    crate::reflection::impl_reflect_cast_fn!(Opaque);
}

impl GetTypeMeta for () {
    #[inline]
    fn get_type_meta() -> TypeMeta {
        TypeMeta::of::<Self>()
    }
}

// -----------------------------------------------------------------------------
// Function pointers

macro_rules! impl_reflect_for_fn {
    ($($arg:ident),*) => {
        impl<$($arg: TypePath,)* R: TypePath> TypePath for fn($($arg),*) -> R {
            fn type_path() -> &'static str {
                static CELL: GenericTypePathCell = GenericTypePathCell::new();
                CELL.get_or_insert::<Self>(|| {
                    crate::impls::concat(&[
                        "fn(",
                        &<[&str]>::join(&[$($arg::type_path()),*], ", "),
                        ") -> ",
                        R::type_path(),
                    ])
                })
            }

            fn type_name() -> &'static str {
                static CELL: GenericTypePathCell = GenericTypePathCell::new();
                CELL.get_or_insert::<Self>(|| {
                    crate::impls::concat(&[
                        "fn(",
                        &<[&str]>::join(&[$($arg::type_name()),*], ", "),
                        ") -> ",
                        R::type_name(),
                    ])
                })
            }
        }

        impl<$($arg: TypePath,)* R: TypePath> Typed for fn($($arg),*) -> R {
            fn type_info() -> &'static TypeInfo {
                static CELL: GenericTypeInfoCell = GenericTypeInfoCell::new();
                CELL.get_or_insert::<Self>(|| TypeInfo::Opaque(OpaqueInfo::new::<Self>()))
            }
        }

        impl<$($arg: TypePath,)* R: TypePath> Reflect for fn($($arg),*) -> R {
            crate::reflection::impl_reflect_cast_fn!(Opaque);
        }

        impl<$($arg: TypePath,)* R: TypePath> GetTypeMeta for fn($($arg),*) -> R {
            #[inline]
            fn get_type_meta() -> TypeMeta {
                TypeMeta::of::<Self>()
            }
        }
    };
}

impl_reflect_for_fn!();
impl_reflect_for_fn!(A);
impl_reflect_for_fn!(A, B);

#[cfg(test)]
mod tests {
    use core::time::Duration;

    use crate::Reflect;
    use crate::info::{ReflectKind, TypePath, Typed};

    fn answer() -> u8 {
        42
    }

    fn double(x: i32) -> i32 {
        x * 2
    }

    #[test]
    fn opaque_values() {
        assert_eq!(Duration::from_secs(1).reflect_kind(), ReflectKind::Opaque);
        assert_eq!(7_i128.reflect_kind(), ReflectKind::Opaque);
        assert_eq!(<u128 as Typed>::type_info().kind(), ReflectKind::Opaque);
        assert_eq!(<Duration as TypePath>::type_path(), "core::time::Duration");
    }

    #[test]
    fn function_pointers() {
        let f: fn() -> u8 = answer;
        let g: fn(i32) -> i32 = double;
        assert_eq!(f.reflect_kind(), ReflectKind::Opaque);
        assert_eq!(g.reflect_kind(), ReflectKind::Opaque);
        assert_eq!(<fn() -> u8 as TypePath>::type_path(), "fn() -> u8");
        assert_eq!(<fn(i32) -> i32 as TypePath>::type_name(), "fn(i32) -> i32");
        assert_eq!(<fn(i32, bool) -> () as TypePath>::type_path(), "fn(i32, bool) -> ()");
    }
}
