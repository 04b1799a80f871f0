use crate::Reflect;

/// A record with named fields.
///
/// Indices follow declaration order, skipping `#[reflect(skip)]` fields,
/// and match [`StructInfo::field_at`](crate::info::StructInfo::field_at).
///
/// # Examples
///
/// ```
/// use plist_reflect::{derive::Reflect, ops::Struct};
///
/// #[derive(Reflect)]
/// struct Size {
///     width: u32,
///     #[reflect(skip)]
///     depth: u32,
///     height: u32,
/// }
///
/// let size = Size { width: 4, depth: 0, height: 3 };
/// assert_eq!(size.field_len(), 2);
/// assert_eq!(size.name_at(1), Some("height"));
/// assert_eq!(size.field_at(1).unwrap().downcast_ref::<u32>(), Some(&3));
/// assert!(size.field_at(2).is_none());
/// # let _ = size.depth;
/// ```
pub trait Struct: Reflect {
    /// Returns the field at `index`.
    fn field_at(&self, index: usize) -> Option<&dyn Reflect>;

    /// Returns the Rust name of the field at `index`.
    fn name_at(&self, index: usize) -> Option<&str>;

    /// Returns the number of visible fields.
    fn field_len(&self) -> usize;
}

#[cfg(test)]
mod tests {
    use alloc::string::String;
    use alloc::vec::Vec;

    use super::Struct;
    use crate::derive::Reflect;
    use crate::info::{TypePath, Typed};

    #[derive(Reflect)]
    struct Pair<T> {
        first: T,
        #[reflect(rename = "Second", omit_empty)]
        second: Option<T>,
    }

    #[derive(Reflect)]
    #[reflect(type_path = "bundle::Empty")]
    struct Empty;

    #[test]
    fn generic_fields_by_index() {
        let pair = Pair {
            first: String::from("a"),
            second: None,
        };
        assert_eq!(pair.field_len(), 2);
        assert_eq!(pair.name_at(0), Some("first"));
        assert_eq!(pair.name_at(1), Some("second"));
        assert_eq!(pair.name_at(2), None);
        assert_eq!(
            pair.field_at(0).unwrap().downcast_ref::<String>().map(String::as_str),
            Some("a")
        );
        assert!(pair.field_at(1).unwrap().is::<Option<String>>());
        assert!(pair.field_at(2).is_none());

        let info = Pair::<String>::type_info().as_struct().unwrap();
        assert_eq!(info.field_at(1).unwrap().export_name(), "Second");
    }

    #[test]
    fn derived_names() {
        assert_eq!(
            <Pair<u8> as TypePath>::type_path(),
            "plist_reflect::ops::struct_ops::tests::Pair<u8>"
        );
        assert_eq!(<Pair<Vec<u8>> as TypePath>::type_name(), "Pair<Vec<u8>>");
        assert_eq!(<Empty as TypePath>::type_path(), "bundle::Empty");
        assert_eq!(<Empty as TypePath>::type_name(), "Empty");
        assert_eq!(Empty.field_len(), 0);
        assert!(Empty.field_at(0).is_none());
    }
}
