use plist_reflect::MarshalTextError;
use thiserror::Error;

// -----------------------------------------------------------------------------
// Error

/// A value whose type has no plist representation.
///
/// Raised for opaque types (function pointers, `()`, `i128`, ...) and for
/// maps whose keys are not text.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("unknown type {type_path}")]
pub struct UnsupportedType {
    /// The [`TypePath`](plist_reflect::info::TypePath) of the offending type.
    pub type_path: &'static str,
}

/// The error of a failed conversion.
///
/// The first error aborts the whole conversion, nothing partial is kept.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConvertError {
    #[error(transparent)]
    UnsupportedType(#[from] UnsupportedType),

    /// Returned by a text rendering, passed on unchanged.
    #[error(transparent)]
    MarshalText(MarshalTextError),
}

#[cfg(test)]
mod tests {
    use alloc::boxed::Box;
    use alloc::string::ToString;

    use super::{ConvertError, UnsupportedType};

    #[test]
    fn messages() {
        let err = ConvertError::from(UnsupportedType { type_path: "fn() -> u8" });
        assert_eq!(err.to_string(), "unknown type fn() -> u8");

        let err = ConvertError::MarshalText(Box::from("bad version"));
        assert_eq!(err.to_string(), "bad version");
    }
}
