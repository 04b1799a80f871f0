//! Provide some tools for parsing token stream.

// -----------------------------------------------------------------------------
// Modules

mod attributes;
mod define_parser;
mod reflect_derive;
mod reflect_meta;
mod reflect_struct;
mod type_naming;

// -----------------------------------------------------------------------------
// Internal API

pub(crate) use attributes::{FieldAttributes, TypeAttributes};

pub(crate) use define_parser::ForeignType;
pub(crate) use type_naming::TypeNaming;

pub(crate) use reflect_derive::ReflectDerive;
pub(crate) use reflect_meta::{ImplBounds, ReflectMeta};
pub(crate) use reflect_struct::{ReflectStruct, StructField};
