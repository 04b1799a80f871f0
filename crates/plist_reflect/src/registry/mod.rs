//! Per-type capabilities, collected in a [`TypeRegistry`].
//!
//! - [`TypeTrait`]: a capability stored in a [`TypeMeta`], looked up by its type.
//! - [`FromType`]: builds a capability for a concrete type.
//! - [`GetTypeMeta`]: the default [`TypeMeta`] of a type, implemented by the derive.
//! - [`TypeTraitMarshalText`]: renders values of one type as text, also
//!   for types that do not implement [`MarshalText`](crate::MarshalText).

// -----------------------------------------------------------------------------
// Modules

mod from_type;
mod traits;
mod type_meta;
mod type_registry;
mod type_trait;

// -----------------------------------------------------------------------------
// Exports

pub use from_type::FromType;
pub use traits::TypeTraitMarshalText;
pub use type_meta::{GetTypeMeta, TypeMeta};
pub use type_registry::{TypeRegistry, TypeRegistryArc};
pub use type_trait::TypeTrait;
