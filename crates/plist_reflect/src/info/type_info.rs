use core::{error, fmt};

use crate::info::{ListInfo, MapInfo, OpaqueInfo};
use crate::info::{PointerInfo, ScalarInfo, StructInfo, Type};

// -----------------------------------------------------------------------------
// ReflectKind

/// The kind of a reflected type.
///
/// Shared by [`TypeInfo`] and [`ReflectRef`](crate::ops::ReflectRef).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReflectKind {
    /// Text, integers, floats and booleans.
    Scalar,
    /// Ordered sequences: `Vec`, `VecDeque`, arrays, boxed slices.
    List,
    /// Key-value collections.
    Map,
    /// Named-field records.
    Struct,
    /// One level of indirection, possibly null.
    Pointer,
    /// Types whose content is not visible.
    Opaque,
}

impl fmt::Display for ReflectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Scalar => f.pad("Scalar"),
            Self::List => f.pad("List"),
            Self::Map => f.pad("Map"),
            Self::Struct => f.pad("Struct"),
            Self::Pointer => f.pad("Pointer"),
            Self::Opaque => f.pad("Opaque"),
        }
    }
}

/// Returned by the `as_*` casts when the kind does not match.
#[derive(Debug)]
pub struct ReflectKindError {
    pub expected: ReflectKind,
    pub received: ReflectKind,
}

impl fmt::Display for ReflectKindError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "reflect kind mismatch: expected {}, received {}",
            self.expected, self.received
        )
    }
}

impl error::Error for ReflectKindError {}

// -----------------------------------------------------------------------------
// TypeInfo

/// Compile-time information about a reflected type.
///
/// # Examples
///
/// ```
/// use plist_reflect::info::{ReflectKind, ScalarKind, Typed};
///
/// let info = <u16 as Typed>::type_info();
/// assert_eq!(info.kind(), ReflectKind::Scalar);
/// assert_eq!(info.as_scalar().unwrap().scalar_kind(), ScalarKind::Unsigned);
/// assert!(info.as_struct().is_err());
/// ```
#[derive(Debug, Clone)]
pub enum TypeInfo {
    Scalar(ScalarInfo),
    List(ListInfo),
    Map(MapInfo),
    Struct(StructInfo),
    Pointer(PointerInfo),
    Opaque(OpaqueInfo),
}

macro_rules! impl_cast_method {
    ($name:ident : $kind:ident => $info:ident) => {
        #[doc = concat!("Returns the [`", stringify!($info), "`], or an error for other kinds.")]
        pub const fn $name(&self) -> Result<&$info, ReflectKindError> {
            match self {
                Self::$kind(info) => Ok(info),
                _ => Err(ReflectKindError {
                    expected: ReflectKind::$kind,
                    received: self.kind(),
                }),
            }
        }
    };
}

impl TypeInfo {
    impl_cast_method!(as_scalar: Scalar => ScalarInfo);
    impl_cast_method!(as_list: List => ListInfo);
    impl_cast_method!(as_map: Map => MapInfo);
    impl_cast_method!(as_struct: Struct => StructInfo);
    impl_cast_method!(as_pointer: Pointer => PointerInfo);
    impl_cast_method!(as_opaque: Opaque => OpaqueInfo);

    /// Returns the described [`Type`].
    pub const fn ty(&self) -> &Type {
        match self {
            Self::Scalar(info) => info.ty(),
            Self::List(info) => info.ty(),
            Self::Map(info) => info.ty(),
            Self::Struct(info) => info.ty(),
            Self::Pointer(info) => info.ty(),
            Self::Opaque(info) => info.ty(),
        }
    }

    crate::info::impl_type_fn!();

    /// Returns the kind of the described type.
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
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;
    use alloc::vec::Vec;

    use crate::info::{ReflectKind, Typed};

    #[test]
    fn cast_error_reports_both_kinds() {
        let info = <Vec<bool> as Typed>::type_info();
        let err = info.as_map().unwrap_err();
        assert_eq!(err.expected, ReflectKind::Map);
        assert_eq!(err.received, ReflectKind::List);
        assert_eq!(
            err.to_string(),
            "reflect kind mismatch: expected Map, received List"
        );
    }

    #[test]
    fn type_fns_forward_to_type() {
        let info = <Option<u8> as Typed>::type_info();
        assert!(info.type_is::<Option<u8>>());
        assert_eq!(info.type_path(), "core::option::Option<u8>");
        assert_eq!(info.type_name(), "Option<u8>");
    }
}
