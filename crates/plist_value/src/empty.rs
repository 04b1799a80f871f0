use plist_reflect::Reflect;
use plist_reflect::ops::ReflectRef;

/// Returns `true` if `value` counts as empty for `#[reflect(omit_empty)]`.
///
/// - lists, maps and text: no elements;
/// - `bool`: `false`;
/// - numbers: zero;
/// - nullable pointers: null.
///
/// Records, owned pointers and opaque values are never empty.
///
/// # Examples
///
/// ```
/// use plist_value::is_empty_value;
///
/// assert!(is_empty_value(&0_u8));
/// assert!(is_empty_value(&String::new()));
/// assert!(is_empty_value(&None::<u8>));
/// assert!(!is_empty_value(&Some(0_u8)));
/// assert!(!is_empty_value(&Box::new(0_u8)));
/// ```
pub fn is_empty_value(value: &dyn Reflect) -> bool {
    match value.reflect_ref() {
        ReflectRef::Scalar(scalar) => scalar.is_zero(),
        ReflectRef::List(list) => list.is_empty(),
        ReflectRef::Map(map) => map.is_empty(),
        ReflectRef::Pointer(pointer) => pointer.is_null(),
        ReflectRef::Struct(_) | ReflectRef::Opaque(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use alloc::collections::BTreeMap;
    use alloc::string::String;
    use alloc::vec::Vec;
    use core::time::Duration;

    use plist_reflect::derive::Reflect;

    use super::is_empty_value;

    #[derive(Reflect)]
    struct Blank {
        text: String,
    }

    #[test]
    fn zero_values_are_empty() {
        assert!(is_empty_value(&false));
        assert!(is_empty_value(&0_i32));
        assert!(is_empty_value(&0.0_f64));
        assert!(is_empty_value(&""));
        assert!(is_empty_value(&Vec::<u8>::new()));
        assert!(is_empty_value(&BTreeMap::<String, u8>::new()));
        assert!(is_empty_value(&[0_u8; 0]));
    }

    #[test]
    fn non_zero_values_are_not_empty() {
        assert!(!is_empty_value(&true));
        assert!(!is_empty_value(&-1_i64));
        assert!(!is_empty_value(&u64::MAX));
        assert!(!is_empty_value(&"x"));
        assert!(!is_empty_value(&[0_u8; 1]));
    }

    #[test]
    fn other_kinds_are_never_empty() {
        let blank = Blank {
            text: String::new(),
        };
        assert!(blank.text.is_empty());
        assert!(!is_empty_value(&blank));
        assert!(!is_empty_value(&Duration::ZERO));
        assert!(!is_empty_value(&()));
    }
}
