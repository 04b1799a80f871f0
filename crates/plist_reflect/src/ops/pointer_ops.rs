use crate::Reflect;

/// One level of indirection to another reflected value.
///
/// # Examples
///
/// ```
/// use plist_reflect::ops::Pointer;
///
/// let some = Some(5_i8);
/// let none: Option<i8> = None;
/// assert_eq!(some.target().unwrap().downcast_ref::<i8>(), Some(&5));
/// assert!(none.is_null());
/// ```
pub trait Pointer: Reflect {
    /// Returns the pointee, or `None` for a null pointer.
    fn target(&self) -> Option<&dyn Reflect>;

    #[inline]
    fn is_null(&self) -> bool {
        self.target().is_none()
    }
}
