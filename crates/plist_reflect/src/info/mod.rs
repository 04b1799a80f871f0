//! Compile-time type information.
//!
//! - [`TypePath`]: stable names of a type; [`DynamicTypePath`] is its
//!   object-safe counterpart.
//! - [`Type`]: a `TypeId` together with the names of the type.
//! - [`Typed`]: access to the [`TypeInfo`] of a type; [`DynamicTyped`] is
//!   its object-safe counterpart.
//! - [`TypeInfo`]: one of
//!     - [`ScalarInfo`]: text, integers, floats and booleans, see [`ScalarKind`].
//!     - [`ListInfo`]: ordered sequences, including the item type.
//!     - [`MapInfo`]: key-value collections, including key and value types.
//!     - [`StructInfo`]: records, holding one [`NamedField`] per visible field.
//!     - [`PointerInfo`]: one level of indirection, possibly null.
//!     - [`OpaqueInfo`]: everything whose content is not visible.
//! - [`ReflectKind`]: the kind of a `TypeInfo` or a reflected value.

// -----------------------------------------------------------------------------
// Modules

mod field_info;
mod list_info;
mod map_info;
mod opaque_info;
mod pointer_info;
mod scalar_info;
mod struct_info;
mod type_info;
mod type_path;
mod typed;

// -----------------------------------------------------------------------------
// Internal API

pub(crate) use type_path::impl_type_fn;

// -----------------------------------------------------------------------------
// Exports

pub use field_info::NamedField;
pub use list_info::ListInfo;
pub use map_info::MapInfo;
pub use opaque_info::OpaqueInfo;
pub use pointer_info::PointerInfo;
pub use scalar_info::{ScalarInfo, ScalarKind};
pub use struct_info::StructInfo;
pub use type_info::{ReflectKind, ReflectKindError, TypeInfo};
pub use type_path::{DynamicTypePath, Type, TypePath};
pub use typed::{DynamicTyped, Typed};
