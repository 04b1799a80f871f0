use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use plist_utils::hash::HashMap;

/// The entries of a [`PlistValue::Dictionary`].
///
/// Keys are unique, their order carries no meaning.
pub type Dictionary = HashMap<String, PlistValue>;

// -----------------------------------------------------------------------------
// PlistKind

/// The kind of a [`PlistValue`].
///
/// [`Invalid`](PlistKind::Invalid) is the default and never describes a
/// converted value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PlistKind {
    #[default]
    Invalid,
    Dictionary,
    Array,
    String,
    Integer,
    Real,
    Boolean,
    Data,
}

impl fmt::Display for PlistKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Invalid => f.pad("Invalid"),
            Self::Dictionary => f.pad("Dictionary"),
            Self::Array => f.pad("Array"),
            Self::String => f.pad("String"),
            Self::Integer => f.pad("Integer"),
            Self::Real => f.pad("Real"),
            Self::Boolean => f.pad("Boolean"),
            Self::Data => f.pad("Data"),
        }
    }
}

// -----------------------------------------------------------------------------
// Integer

/// A plist integer that remembers the signedness of its source.
///
/// Encoders need the distinction: `u64::MAX` is not `-1`.
///
/// # Examples
///
/// ```
/// use plist_value::Integer;
///
/// let big = Integer::from(u64::MAX);
/// assert!(!big.is_signed());
/// assert_eq!(big.as_unsigned(), Some(u64::MAX));
/// assert_eq!(big.as_signed(), None);
///
/// let neg = Integer::from(-3_i64);
/// assert_eq!(neg.as_signed(), Some(-3));
/// assert_eq!(neg.as_unsigned(), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Integer {
    Signed(i64),
    Unsigned(u64),
}

impl Integer {
    #[inline]
    pub const fn is_signed(&self) -> bool {
        matches!(self, Self::Signed(_))
    }

    /// The value as `i64`, if it fits.
    #[inline]
    pub fn as_signed(&self) -> Option<i64> {
        match *self {
            Self::Signed(v) => Some(v),
            Self::Unsigned(v) => i64::try_from(v).ok(),
        }
    }

    /// The value as `u64`, if it is not negative.
    #[inline]
    pub fn as_unsigned(&self) -> Option<u64> {
        match *self {
            Self::Signed(v) => u64::try_from(v).ok(),
            Self::Unsigned(v) => Some(v),
        }
    }
}

impl From<i64> for Integer {
    #[inline]
    fn from(value: i64) -> Self {
        Self::Signed(value)
    }
}

impl From<u64> for Integer {
    #[inline]
    fn from(value: u64) -> Self {
        Self::Unsigned(value)
    }
}

impl fmt::Display for Integer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Signed(v) => fmt::Display::fmt(v, f),
            Self::Unsigned(v) => fmt::Display::fmt(v, f),
        }
    }
}

// -----------------------------------------------------------------------------
// PlistValue

/// A node of the plist value tree.
///
/// The tree owns all of its data and does not borrow from the value it
/// was converted from.
///
/// # Examples
///
/// ```
/// use plist_value::{PlistKind, PlistValue};
///
/// let value = PlistValue::from(vec![PlistValue::from("a"), PlistValue::from(true)]);
/// assert_eq!(value.kind(), PlistKind::Array);
///
/// let items = value.as_array().unwrap();
/// assert_eq!(items[0].as_str(), Some("a"));
/// assert_eq!(items[1].as_boolean(), Some(true));
/// assert!(items[1].as_str().is_none());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum PlistValue {
    Dictionary(Dictionary),
    Array(Vec<PlistValue>),
    String(String),
    Integer(Integer),
    Real(f64),
    Boolean(bool),
    Data(Vec<u8>),
}

impl PlistValue {
    /// Returns the kind of this node, never [`PlistKind::Invalid`].
    pub const fn kind(&self) -> PlistKind {
        match self {
            Self::Dictionary(_) => PlistKind::Dictionary,
            Self::Array(_) => PlistKind::Array,
            Self::String(_) => PlistKind::String,
            Self::Integer(_) => PlistKind::Integer,
            Self::Real(_) => PlistKind::Real,
            Self::Boolean(_) => PlistKind::Boolean,
            Self::Data(_) => PlistKind::Data,
        }
    }

    #[inline]
    pub const fn as_dictionary(&self) -> Option<&Dictionary> {
        match self {
            Self::Dictionary(dict) => Some(dict),
            _ => None,
        }
    }

    #[inline]
    pub fn as_array(&self) -> Option<&[PlistValue]> {
        match self {
            Self::Array(items) => Some(items),
            _ => None,
        }
    }

    #[inline]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(text) => Some(text),
            _ => None,
        }
    }

    #[inline]
    pub const fn as_integer(&self) -> Option<Integer> {
        match self {
            Self::Integer(v) => Some(*v),
            _ => None,
        }
    }

    #[inline]
    pub const fn as_real(&self) -> Option<f64> {
        match self {
            Self::Real(v) => Some(*v),
            _ => None,
        }
    }

    #[inline]
    pub const fn as_boolean(&self) -> Option<bool> {
        match self {
            Self::Boolean(v) => Some(*v),
            _ => None,
        }
    }

    #[inline]
    pub fn as_data(&self) -> Option<&[u8]> {
        match self {
            Self::Data(bytes) => Some(bytes),
            _ => None,
        }
    }
}

macro_rules! impl_from_payload {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$ty> for PlistValue {
                #[inline]
                fn from(value: $ty) -> Self {
                    Self::$variant(value)
                }
            }
        )*
    };
}

impl_from_payload! {
    Dictionary => Dictionary,
    Vec<PlistValue> => Array,
    String => String,
    Integer => Integer,
    f64 => Real,
    bool => Boolean,
    Vec<u8> => Data,
}

impl From<&str> for PlistValue {
    #[inline]
    fn from(value: &str) -> Self {
        Self::String(String::from(value))
    }
}

impl From<i64> for PlistValue {
    #[inline]
    fn from(value: i64) -> Self {
        Self::Integer(Integer::Signed(value))
    }
}

impl From<u64> for PlistValue {
    #[inline]
    fn from(value: u64) -> Self {
        Self::Integer(Integer::Unsigned(value))
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::{String, ToString};
    use alloc::vec;

    use super::{Dictionary, Integer, PlistKind, PlistValue};

    #[test]
    fn default_kind_is_invalid() {
        assert_eq!(PlistKind::default(), PlistKind::Invalid);
        assert_eq!(PlistKind::Dictionary.to_string(), "Dictionary");
    }

    #[test]
    fn integer_conversions() {
        assert_eq!(Integer::Unsigned(7).as_signed(), Some(7));
        assert_eq!(Integer::Unsigned(u64::MAX).as_signed(), None);
        assert_eq!(Integer::Signed(-1).as_unsigned(), None);
        assert_eq!(Integer::Signed(-1).to_string(), "-1");
        assert_eq!(Integer::Unsigned(u64::MAX).to_string(), "18446744073709551615");
    }

    #[test]
    fn kinds_and_accessors() {
        let mut dict = Dictionary::default();
        dict.insert(String::from("k"), PlistValue::from(1.5));

        let value = PlistValue::from(dict);
        assert_eq!(value.kind(), PlistKind::Dictionary);
        assert_eq!(value.as_dictionary().unwrap()["k"].as_real(), Some(1.5));
        assert!(value.as_array().is_none());

        let data = PlistValue::from(vec![0_u8, 255]);
        assert_eq!(data.kind(), PlistKind::Data);
        assert_eq!(data.as_data(), Some(&[0_u8, 255][..]));

        let int = PlistValue::from(-2_i64);
        assert_eq!(int.as_integer(), Some(Integer::Signed(-2)));
        assert_eq!(PlistValue::from(2_u64).kind(), PlistKind::Integer);
    }
}
