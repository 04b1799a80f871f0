//! The plist value tree and the conversion from reflected values.
//!
//! - [`PlistValue`]: tagged union consumed by plist encoders.
//! - [`to_plist_value`] and [`Converter`]: walk any
//!   [`Reflect`](plist_reflect::Reflect) value into a [`PlistValue`].
//! - [`is_empty_value`]: the emptiness test behind `#[reflect(omit_empty)]`.
//! - [`render_text`]: the text capability probe.
//!
//! # Examples
//!
//! ```
//! use plist_reflect::derive::Reflect;
//! use plist_value::{Integer, PlistValue, to_plist_value};
//!
//! #[derive(Reflect)]
//! struct Info {
//!     #[reflect(rename = "CFBundleName", omit_empty)]
//!     name: String,
//!     #[reflect(rename = "CFBundleVersion")]
//!     version: u32,
//! }
//!
//! let info = Info { name: String::new(), version: 0 };
//! let value = to_plist_value(&info).unwrap().unwrap();
//!
//! let dict = value.as_dictionary().unwrap();
//! assert_eq!(dict.len(), 1);
//! assert_eq!(dict["CFBundleVersion"], PlistValue::Integer(Integer::Unsigned(0)));
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

// -----------------------------------------------------------------------------
// no_std support

extern crate alloc;

#[cfg(test)]
extern crate std;

// -----------------------------------------------------------------------------
// Modules

mod convert;
mod empty;
mod error;
mod serialize;
mod text;
mod value;

// -----------------------------------------------------------------------------
// Exports

pub use convert::{Converter, to_plist_value};
pub use empty::is_empty_value;
pub use error::{ConvertError, UnsupportedType};
pub use text::render_text;
pub use value::{Dictionary, Integer, PlistKind, PlistValue};
