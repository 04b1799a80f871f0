/// The value of a scalar, widened to 64 bits.
///
/// Integers keep their signedness: a `u64` above `i64::MAX` stays an
/// [`Unsigned`](ScalarRef::Unsigned) value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScalarRef<'a> {
    Text(&'a str),
    Char(char),
    Signed(i64),
    Unsigned(u64),
    Float(f64),
    Bool(bool),
}

impl ScalarRef<'_> {
    /// Returns `true` for the zero value of the scalar's category.
    ///
    /// Text is empty when it has no characters, `char` when it is `'\0'`.
    ///
    /// ```
    /// use plist_reflect::ops::ScalarRef;
    ///
    /// assert!(ScalarRef::Text("").is_zero());
    /// assert!(ScalarRef::Float(-0.0).is_zero());
    /// assert!(!ScalarRef::Bool(true).is_zero());
    /// assert!(!ScalarRef::Unsigned(u64::MAX).is_zero());
    /// ```
    pub fn is_zero(&self) -> bool {
        match *self {
            Self::Text(text) => text.is_empty(),
            Self::Char(c) => c == '\0',
            Self::Signed(v) => v == 0,
            Self::Unsigned(v) => v == 0,
            Self::Float(v) => v == 0.0,
            Self::Bool(v) => !v,
        }
    }
}
