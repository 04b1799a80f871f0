//! Static type information and kind classification for plist conversion.
//!
//! - [`Reflect`]: object-safe access to a value, classified through
//!   [`ReflectRef`](ops::ReflectRef).
//! - [`info`]: lazily built, immutable [`TypeInfo`](info::TypeInfo) per type.
//! - [`registry`]: per-type capabilities such as
//!   [`TypeTraitMarshalText`](registry::TypeTraitMarshalText).
//! - [`derive`]: `#[derive(Reflect)]` and `impl_type_path!`.
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

// -----------------------------------------------------------------------------
// Extern Self

// Generated code refers to `::plist_reflect`, which must also resolve
// inside this crate.
extern crate self as plist_reflect;

// -----------------------------------------------------------------------------
// no_std support

extern crate alloc;
extern crate std;

// -----------------------------------------------------------------------------
// Modules

mod reflection;

pub mod impls;
pub mod info;
pub mod ops;
pub mod registry;

// -----------------------------------------------------------------------------
// Top-Level exports

#[doc(hidden)]
pub mod __macro_exports;

pub use plist_reflect_derive as derive;
pub use reflection::{MarshalText, MarshalTextError, Reflect};
