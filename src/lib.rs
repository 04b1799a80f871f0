#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

pub use plist_reflect as reflect;
pub use plist_utils as utils;
pub use plist_value as value;

pub use plist_value::{ConvertError, Converter, PlistValue, to_plist_value};
