// -----------------------------------------------------------------------------
// Modules

mod marshal_text;
mod reflect;

// -----------------------------------------------------------------------------
// Internal API

pub(crate) use reflect::impl_reflect_cast_fn;

// -----------------------------------------------------------------------------
// Exports

pub use marshal_text::{MarshalText, MarshalTextError};
pub use reflect::Reflect;
