use alloc::boxed::Box;
use alloc::string::String;

/// Error returned by [`MarshalText::marshal_text`].
///
/// Any error type can be boxed into it; converters pass it on untouched.
pub type MarshalTextError = Box<dyn core::error::Error + Send + Sync + 'static>;

/// A value that renders itself as a single piece of text.
///
/// A type exposing this capability is converted to a plist string
/// regardless of its shape, records included. Expose it through
/// `#[reflect(marshal_text)]` on a derived type, or register a
/// [`TypeTraitMarshalText`](crate::registry::TypeTraitMarshalText)
/// for types that cannot implement the trait.
///
/// # Examples
///
/// ```
/// use plist_reflect::{MarshalText, MarshalTextError, derive::Reflect};
///
/// #[derive(Reflect)]
/// #[reflect(marshal_text)]
/// struct Version {
///     major: u32,
///     minor: u32,
/// }
///
/// impl MarshalText for Version {
///     fn marshal_text(&self) -> Result<String, MarshalTextError> {
///         Ok(format!("{}.{}", self.major, self.minor))
///     }
/// }
///
/// let v = Version { major: 1, minor: 4 };
/// assert_eq!(v.marshal_text().unwrap(), "1.4");
/// ```
pub trait MarshalText {
    /// Render the value as text.
    fn marshal_text(&self) -> Result<String, MarshalTextError>;
}
