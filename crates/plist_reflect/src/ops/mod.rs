//! Kind-specific access to reflected values.
//!
//! [`Reflect::reflect_ref`](crate::Reflect::reflect_ref) returns a
//! [`ReflectRef`], one variant per [`ReflectKind`](crate::info::ReflectKind):
//!
//! - [`ScalarRef`]: the scalar value itself, widened to 64 bits.
//! - [`List`]: indexed access to the items of a sequence.
//! - [`Map`]: iteration over key-value pairs.
//! - [`Struct`]: access to fields by declaration index.
//! - [`Pointer`]: the target of one level of indirection.

// -----------------------------------------------------------------------------
// Modules

mod kind;
mod list_ops;
mod map_ops;
mod pointer_ops;
mod scalar_ops;
mod struct_ops;

// -----------------------------------------------------------------------------
// Exports

pub use kind::ReflectRef;
pub use list_ops::{List, ListItemIter};
pub use map_ops::{Map, MapIter};
pub use pointer_ops::Pointer;
pub use scalar_ops::ScalarRef;
pub use struct_ops::Struct;
