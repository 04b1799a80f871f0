use crate::Reflect;
use crate::info::{ReflectKind, ReflectKindError};
use crate::ops::{List, Map, Pointer, ScalarRef, Struct};

/// A kind-specific, borrowed view of a reflected value.
///
/// # Examples
///
/// ```
/// use plist_reflect::{Reflect, ops::{ReflectRef, ScalarRef}};
///
/// let value: &dyn Reflect = &-3_i16;
/// match value.reflect_ref() {
///     ReflectRef::Scalar(ScalarRef::Signed(v)) => assert_eq!(v, -3),
///     _ => unreachable!(),
/// }
/// ```
#[derive(Clone, Copy)]
pub enum ReflectRef<'a> {
    Scalar(ScalarRef<'a>),
    List(&'a dyn List),
    Map(&'a dyn Map),
    Struct(&'a dyn Struct),
    Pointer(&'a dyn Pointer),
    Opaque(&'a dyn Reflect),
}

macro_rules! impl_cast_method {
    ($name:ident : $kind:ident => $ty:ty) => {
        #[inline]
        pub fn $name(self) -> Result<$ty, ReflectKindError> {
            match self {
                Self::$kind(value) => Ok(value),
                _ => Err(ReflectKindError {
                    expected: ReflectKind::$kind,
                    received: self.kind(),
                }),
            }
        }
    };
}

impl<'a> ReflectRef<'a> {
    /// Returns the kind of the view.
    pub const fn kind(&self) -> ReflectKind {
        match self {
            Self::Scalar(_) => ReflectKind::Scalar,
            Self::List(_) => ReflectKind::List,
            Self::Map(_) => ReflectKind::Map,
            Self::Struct(_) => ReflectKind::Struct,
            Self::Pointer(_) => ReflectKind::Pointer,
            Self::Opaque(_) => ReflectKind::Opaque,
        }
    }

    impl_cast_method!(as_scalar: Scalar => ScalarRef<'a>);
    impl_cast_method!(as_list: List => &'a dyn List);
    impl_cast_method!(as_map: Map => &'a dyn Map);
    impl_cast_method!(as_struct: Struct => &'a dyn Struct);
    impl_cast_method!(as_pointer: Pointer => &'a dyn Pointer);
    impl_cast_method!(as_opaque: Opaque => &'a dyn Reflect);
}
