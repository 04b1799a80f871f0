use alloc::borrow::{Cow, ToOwned};
use alloc::string::String;

use crate::derive::impl_type_path;
use crate::ops::ScalarRef;

// -----------------------------------------------------------------------------
// TypePath

impl_type_path!(bool);
impl_type_path!(char);
impl_type_path!(i8);
impl_type_path!(i16);
impl_type_path!(i32);
impl_type_path!(i64);
impl_type_path!(isize);
impl_type_path!(u8);
impl_type_path!(u16);
impl_type_path!(u32);
impl_type_path!(u64);
impl_type_path!(usize);
impl_type_path!(f32);
impl_type_path!(f64);
impl_type_path!(str);
impl_type_path!(::alloc::string::String);
impl_type_path!(::alloc::borrow::Cow<'a: 'static, T: ToOwned + ?Sized>);

// -----------------------------------------------------------------------------
// Reflect

macro_rules! impl_reflect_scalar {
    ($ty:ty => $kind:ident, |$this:ident| $view:expr) => {
        impl $crate::info::Typed for $ty {
            fn type_info() -> &'static $crate::info::TypeInfo {
                static CELL: $crate::impls::NonGenericTypeInfoCell =
                    $crate::impls::NonGenericTypeInfoCell::new();
                CELL.get_or_init(|| {
                    $crate::info::TypeInfo::Scalar($crate::info::ScalarInfo::new::<Self>(
                        $crate::info::ScalarKind::$kind,
                    ))
                })
            }
        }

        impl $crate::Reflect for $ty {
            #[inline]
            fn reflect_kind(&self) -> $crate::info::ReflectKind {
                $crate::info::ReflectKind::Scalar
            }

            #[inline]
            fn reflect_ref(&self) -> $crate::ops::ReflectRef<'_> {
                let $this = self;
                $crate::ops::ReflectRef::Scalar($view)
            }
        }

        impl $crate::registry::GetTypeMeta for $ty {
            #[inline]
            fn get_type_meta() -> $crate::registry::TypeMeta {
                $crate::registry::TypeMeta::of::<Self>()
            }
        }
    };
}

impl_reflect_scalar!(bool => Bool, |v| ScalarRef::Bool(*v));

impl_reflect_scalar!(i8 => Signed, |v| ScalarRef::Signed(i64::from(*v)));
impl_reflect_scalar!(i16 => Signed, |v| ScalarRef::Signed(i64::from(*v)));
impl_reflect_scalar!(i32 => Signed, |v| ScalarRef::Signed(i64::from(*v)));
impl_reflect_scalar!(i64 => Signed, |v| ScalarRef::Signed(*v));
impl_reflect_scalar!(isize => Signed, |v| ScalarRef::Signed(*v as i64));

impl_reflect_scalar!(u8 => Unsigned, |v| ScalarRef::Unsigned(u64::from(*v)));
impl_reflect_scalar!(u16 => Unsigned, |v| ScalarRef::Unsigned(u64::from(*v)));
impl_reflect_scalar!(u32 => Unsigned, |v| ScalarRef::Unsigned(u64::from(*v)));
impl_reflect_scalar!(u64 => Unsigned, |v| ScalarRef::Unsigned(*v));
impl_reflect_scalar!(usize => Unsigned, |v| ScalarRef::Unsigned(*v as u64));

impl_reflect_scalar!(f32 => Float, |v| ScalarRef::Float(f64::from(*v)));
impl_reflect_scalar!(f64 => Float, |v| ScalarRef::Float(*v));

impl_reflect_scalar!(char => Text, |v| ScalarRef::Char(*v));
impl_reflect_scalar!(String => Text, |v| ScalarRef::Text(v.as_str()));
impl_reflect_scalar!(&'static str => Text, |v| ScalarRef::Text(v));
impl_reflect_scalar!(Cow<'static, str> => Text, |v| ScalarRef::Text(&**v));

#[cfg(test)]
mod tests {
    use alloc::borrow::Cow;
    use alloc::string::String;

    use crate::Reflect;
    use crate::info::{ScalarKind, TypePath, Typed};
    use crate::ops::{ReflectRef, ScalarRef};

    fn scalar(value: &dyn Reflect) -> ScalarRef<'_> {
        match value.reflect_ref() {
            ReflectRef::Scalar(scalar) => scalar,
            _ => panic!("not a scalar"),
        }
    }

    #[test]
    fn integers_keep_signedness() {
        assert_eq!(scalar(&-5_i8), ScalarRef::Signed(-5));
        assert_eq!(scalar(&u64::MAX), ScalarRef::Unsigned(u64::MAX));
        assert_eq!(scalar(&7_usize), ScalarRef::Unsigned(7));
        assert_eq!(scalar(&1.5_f32), ScalarRef::Float(1.5));
    }

    #[test]
    fn text_types() {
        let owned = String::from("a");
        let cow: Cow<'static, str> = Cow::Borrowed("b");
        let borrowed: &'static str = "c";
        assert_eq!(scalar(&owned), ScalarRef::Text("a"));
        assert_eq!(scalar(&cow), ScalarRef::Text("b"));
        assert_eq!(scalar(&borrowed), ScalarRef::Text("c"));
        assert_eq!(scalar(&'d'), ScalarRef::Char('d'));

        let info = <Cow<'static, str> as Typed>::type_info();
        assert!(info.as_scalar().unwrap().is_text());
        assert_eq!(info.type_path(), "alloc::borrow::Cow<str>");
    }

    #[test]
    fn primitive_paths() {
        assert_eq!(<i64 as TypePath>::type_path(), "i64");
        assert_eq!(<i64 as TypePath>::type_name(), "i64");
        assert_eq!(<&'static str as TypePath>::type_path(), "&str");
        assert_eq!(
            <bool as Typed>::type_info().as_scalar().unwrap().scalar_kind(),
            ScalarKind::Bool
        );
    }
}
