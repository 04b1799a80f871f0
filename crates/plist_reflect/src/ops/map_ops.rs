use alloc::boxed::Box;

use crate::Reflect;

/// Iterator over the entries of a [`Map`].
pub type MapIter<'a> = Box<dyn Iterator<Item = (&'a dyn Reflect, &'a dyn Reflect)> + 'a>;

/// A collection of reflected key-value pairs.
///
/// Entry order follows the underlying collection.
///
/// # Examples
///
/// ```
/// use std::collections::BTreeMap;
/// use plist_reflect::ops::Map;
///
/// let map = BTreeMap::from([("a".to_string(), 1_u8), ("b".to_string(), 2)]);
/// let keys: Vec<_> = Map::iter(&map)
///     .map(|(k, _)| k.downcast_ref::<String>().unwrap().clone())
///     .collect();
/// assert_eq!(keys, ["a", "b"]);
/// ```
pub trait Map: Reflect {
    /// Returns the number of entries.
    fn len(&self) -> usize;

    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterates over all entries.
    fn iter(&self) -> MapIter<'_>;
}
