use crate::Reflect;

/// An ordered sequence of reflected items.
///
/// # Examples
///
/// ```
/// use plist_reflect::ops::List;
///
/// let list = vec![1_u16, 2, 3];
/// assert_eq!(List::len(&list), 3);
/// assert_eq!(list.iter().count(), 3);
/// assert_eq!(List::get(&list, 1).unwrap().downcast_ref::<u16>(), Some(&2));
/// ```
pub trait List: Reflect {
    /// Returns the item at `index`.
    fn get(&self, index: usize) -> Option<&dyn Reflect>;

    /// Returns the number of items.
    fn len(&self) -> usize;

    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterates over the items in order.
    fn iter(&self) -> ListItemIter<'_>;
}

/// Iterator over the items of a [`List`].
pub struct ListItemIter<'a> {
    list: &'a dyn List,
    index: usize,
}

impl ListItemIter<'_> {
    #[inline(always)]
    pub const fn new(list: &dyn List) -> ListItemIter<'_> {
        ListItemIter { list, index: 0 }
    }
}

impl<'a> Iterator for ListItemIter<'a> {
    type Item = &'a dyn Reflect;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let value = self.list.get(self.index);
        self.index += usize::from(value.is_some());
        value
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let size = self.list.len() - self.index;
        (size, Some(size))
    }
}

impl ExactSizeIterator for ListItemIter<'_> {}
