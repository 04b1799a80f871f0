use core::fmt;

use crate::Reflect;
use crate::info::{Type, TypePath, impl_type_fn};

// -----------------------------------------------------------------------------
// ScalarKind

/// The category of a scalar type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScalarKind {
    /// `String`, `&'static str`, `Cow<'static, str>`, `char`.
    Text,
    /// `i8` to `i64` and `isize`.
    Signed,
    /// `u8` to `u64` and `usize`.
    Unsigned,
    /// `f32` and `f64`.
    Float,
    /// `bool`.
    Bool,
}

impl fmt::Display for ScalarKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text => f.pad("Text"),
            Self::Signed => f.pad("Signed"),
            Self::Unsigned => f.pad("Unsigned"),
            Self::Float => f.pad("Float"),
            Self::Bool => f.pad("Bool"),
        }
    }
}

// -----------------------------------------------------------------------------
// ScalarInfo

/// Type info of a scalar type.
#[derive(Clone, Debug)]
pub struct ScalarInfo {
    ty: Type,
    scalar_kind: ScalarKind,
}

impl ScalarInfo {
    impl_type_fn!(ty);

    /// Creates the info of scalar `T`.
    #[inline]
    pub const fn new<T: Reflect + TypePath>(scalar_kind: ScalarKind) -> Self {
        Self {
            ty: Type::of::<T>(),
            scalar_kind,
        }
    }

    #[inline]
    pub const fn scalar_kind(&self) -> ScalarKind {
        self.scalar_kind
    }

    /// Returns `true` for [`ScalarKind::Text`].
    #[inline]
    pub const fn is_text(&self) -> bool {
        matches!(self.scalar_kind, ScalarKind::Text)
    }
}
