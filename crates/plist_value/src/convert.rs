use alloc::string::String;
use alloc::vec::Vec;

use plist_reflect::Reflect;
use plist_reflect::ops::{List, Map, Pointer, ReflectRef, ScalarRef, Struct};
use plist_reflect::registry::TypeRegistry;

use crate::{ConvertError, Dictionary, Integer, PlistValue, UnsupportedType};
use crate::{is_empty_value, render_text};

// -----------------------------------------------------------------------------
// Converter

/// Walks reflected values into [`PlistValue`] trees.
///
/// A converter is a cheap, copyable handle. Without a registry only the
/// values' own [`MarshalText`](plist_reflect::MarshalText) impls are used
/// for text rendering; [`with_registry`](Converter::with_registry) also
/// consults registered [`TypeTraitMarshalText`] capabilities.
///
/// [`TypeTraitMarshalText`]: plist_reflect::registry::TypeTraitMarshalText
///
/// # Examples
///
/// ```
/// use core::time::Duration;
/// use plist_reflect::registry::{TypeRegistry, TypeTraitMarshalText};
/// use plist_value::{Converter, PlistValue};
///
/// let mut registry = TypeRegistry::new();
/// registry.insert_type_trait::<Duration, _>(TypeTraitMarshalText::from_fn(
///     |d: &Duration| Ok(format!("{}s", d.as_secs())),
/// ));
///
/// let value = Converter::with_registry(&registry)
///     .convert(&vec![Duration::from_secs(3)])
///     .unwrap()
///     .unwrap();
/// assert_eq!(value, PlistValue::Array(vec![PlistValue::from("3s")]));
///
/// // Without the registry a `Duration` has no plist form.
/// assert!(Converter::new().convert(&Duration::ZERO).is_err());
/// ```
#[derive(Clone, Copy, Default)]
pub struct Converter<'r> {
    registry: Option<&'r TypeRegistry>,
}

impl<'r> Converter<'r> {
    /// Creates a converter without a registry.
    #[inline]
    pub const fn new() -> Self {
        Self { registry: None }
    }

    /// Creates a converter that looks up text capabilities in `registry`.
    #[inline]
    pub const fn with_registry(registry: &'r TypeRegistry) -> Self {
        Self {
            registry: Some(registry),
        }
    }

    /// The registry consulted for text rendering, if any.
    #[inline]
    pub const fn registry(&self) -> Option<&'r TypeRegistry> {
        self.registry
    }

    /// Converts `value` into a plist value.
    ///
    /// Returns `Ok(None)` when `value` is absent, i.e. a null pointer.
    /// Absent array elements, dictionary entries and record fields are
    /// left out of their container.
    ///
    /// Conversion stops at the first error, no partial tree is returned.
    ///
    /// # Errors
    ///
    /// - [`ConvertError::UnsupportedType`] for opaque values without text
    ///   rendering, and for maps whose keys are not text.
    /// - [`ConvertError::MarshalText`] when a text rendering fails.
    pub fn convert(&self, value: &dyn Reflect) -> Result<Option<PlistValue>, ConvertError> {
        if let ReflectRef::Pointer(pointer) = value.reflect_ref()
            && pointer.is_null()
        {
            return Ok(None);
        }

        if let Some(text) = render_text(value, self.registry) {
            return text.map(Some);
        }

        match value.reflect_ref() {
            ReflectRef::Pointer(pointer) => self.convert_pointer(pointer),
            ReflectRef::Struct(record) => self.convert_struct(record).map(Some),
            ReflectRef::Scalar(scalar) => Ok(Some(convert_scalar(scalar))),
            ReflectRef::List(list) => self.convert_list(list).map(Some),
            ReflectRef::Map(map) => self.convert_map(map).map(Some),
            ReflectRef::Opaque(opaque) => Err(unsupported(opaque.reflect_type_path())),
        }
    }

    fn convert_pointer(&self, pointer: &dyn Pointer) -> Result<Option<PlistValue>, ConvertError> {
        match pointer.target() {
            Some(target) => {
                log::trace!(
                    "unwrap `{}` to `{}`",
                    pointer.reflect_type_path(),
                    target.reflect_type_path()
                );
                self.convert(target)
            }
            None => Ok(None),
        }
    }

    fn convert_struct(&self, record: &dyn Struct) -> Result<PlistValue, ConvertError> {
        let info = record
            .reflect_type_info()
            .as_struct()
            .map_err(|_| unsupported(record.reflect_type_path()))?;

        let mut dict = Dictionary::with_capacity_and_hasher(info.field_len(), Default::default());

        for (index, field) in info.iter().enumerate() {
            let Some(field_value) = record.field_at(index) else {
                continue;
            };

            if field.omit_empty() && is_empty_value(field_value) {
                log::trace!("omit empty field `{}`", field.name());
                continue;
            }

            match self.convert(field_value)? {
                Some(item) => {
                    dict.insert(String::from(field.export_name()), item);
                }
                None => log::trace!("skip absent field `{}`", field.name()),
            }
        }

        Ok(PlistValue::Dictionary(dict))
    }

    fn convert_list(&self, list: &dyn List) -> Result<PlistValue, ConvertError> {
        let is_bytes = list
            .reflect_type_info()
            .as_list()
            .is_ok_and(|info| info.item_is::<u8>());

        if is_bytes {
            let bytes: Vec<u8> = list
                .iter()
                .filter_map(|item| item.downcast_ref::<u8>().copied())
                .collect();
            return Ok(PlistValue::Data(bytes));
        }

        let mut items = Vec::with_capacity(list.len());
        for (index, item) in list.iter().enumerate() {
            match self.convert(item)? {
                Some(value) => items.push(value),
                None => log::trace!("skip absent element {index}"),
            }
        }

        Ok(PlistValue::Array(items))
    }

    fn convert_map(&self, map: &dyn Map) -> Result<PlistValue, ConvertError> {
        let has_text_keys = map
            .reflect_type_info()
            .as_map()
            .is_ok_and(|info| info.has_text_keys());

        if !has_text_keys {
            return Err(unsupported(map.reflect_type_path()));
        }

        let mut dict = Dictionary::with_capacity_and_hasher(map.len(), Default::default());

        for (key, value) in map.iter() {
            let key = match key.reflect_ref() {
                ReflectRef::Scalar(ScalarRef::Text(text)) => String::from(text),
                ReflectRef::Scalar(ScalarRef::Char(c)) => String::from(c),
                _ => return Err(unsupported(key.reflect_type_path())),
            };

            match self.convert(value)? {
                Some(item) => {
                    dict.insert(key, item);
                }
                None => log::trace!("skip absent entry `{key}`"),
            }
        }

        Ok(PlistValue::Dictionary(dict))
    }
}

fn convert_scalar(scalar: ScalarRef<'_>) -> PlistValue {
    match scalar {
        ScalarRef::Text(text) => PlistValue::String(String::from(text)),
        ScalarRef::Char(c) => PlistValue::String(String::from(c)),
        ScalarRef::Signed(v) => PlistValue::Integer(Integer::Signed(v)),
        ScalarRef::Unsigned(v) => PlistValue::Integer(Integer::Unsigned(v)),
        ScalarRef::Float(v) => PlistValue::Real(v),
        ScalarRef::Bool(v) => PlistValue::Boolean(v),
    }
}

#[cold]
fn unsupported(type_path: &'static str) -> ConvertError {
    log::debug!("no plist form for `{type_path}`");
    ConvertError::UnsupportedType(UnsupportedType { type_path })
}

// -----------------------------------------------------------------------------
// to_plist_value

/// Converts `value` with a [`Converter`] that has no registry.
///
/// # Examples
///
/// ```
/// use std::collections::BTreeMap;
/// use plist_value::{PlistValue, to_plist_value};
///
/// let map = BTreeMap::from([("a", 1_i32), ("b", 2)]);
/// let value = to_plist_value(&map).unwrap().unwrap();
///
/// let dict = value.as_dictionary().unwrap();
/// assert_eq!(dict["a"], PlistValue::from(1_i64));
/// assert_eq!(dict["b"], PlistValue::from(2_i64));
///
/// assert_eq!(to_plist_value(&None::<u8>).unwrap(), None);
/// ```
#[inline]
pub fn to_plist_value(value: &dyn Reflect) -> Result<Option<PlistValue>, ConvertError> {
    Converter::new().convert(value)
}

#[cfg(test)]
mod tests {
    use alloc::boxed::Box;
    use alloc::collections::BTreeMap;
    use alloc::format;
    use alloc::string::{String, ToString};
    use alloc::sync::Arc;
    use alloc::vec;
    use alloc::vec::Vec;
    use core::net::{IpAddr, Ipv4Addr};
    use core::time::Duration;

    use plist_reflect::derive::Reflect;
    use plist_reflect::registry::{TypeRegistry, TypeTraitMarshalText};
    use plist_reflect::{MarshalText, MarshalTextError, Reflect};

    use super::{Converter, to_plist_value};
    use crate::{ConvertError, Integer, PlistKind, PlistValue};

    fn convert(value: &dyn Reflect) -> PlistValue {
        to_plist_value(value).unwrap().unwrap()
    }

    fn unsupported_path(value: &dyn Reflect) -> &'static str {
        match to_plist_value(value) {
            Err(ConvertError::UnsupportedType(err)) => err.type_path,
            other => panic!("expected unsupported type, got {other:?}"),
        }
    }

    #[derive(Reflect)]
    struct Item {
        #[reflect(rename = "Name", omit_empty)]
        name: String,
        #[reflect(rename = "Count")]
        count: i32,
    }

    #[derive(Reflect)]
    struct Sparse {
        tag: Option<String>,
        #[reflect(omit_empty)]
        extra: Option<u8>,
        #[reflect(skip)]
        #[expect(dead_code, reason = "hidden from reflection")]
        cache: Vec<u8>,
    }

    #[derive(Reflect)]
    #[reflect(marshal_text)]
    struct Version {
        major: u32,
        minor: u32,
    }

    impl MarshalText for Version {
        fn marshal_text(&self) -> Result<String, MarshalTextError> {
            Ok(format!("{}.{}", self.major, self.minor))
        }
    }

    #[derive(Reflect)]
    #[reflect(Opaque, marshal_text)]
    struct Broken;

    impl MarshalText for Broken {
        fn marshal_text(&self) -> Result<String, MarshalTextError> {
            Err("broken".into())
        }
    }

    #[derive(Reflect)]
    struct Holder {
        first: u8,
        payload: Vec<()>,
    }

    #[derive(Reflect)]
    struct Marker;

    #[test]
    fn scalars() {
        assert_eq!(convert(&"hi"), PlistValue::from("hi"));
        assert_eq!(convert(&String::from("hi")), PlistValue::from("hi"));
        assert_eq!(convert(&'x'), PlistValue::from("x"));
        assert_eq!(convert(&-5_i8), PlistValue::Integer(Integer::Signed(-5)));
        assert_eq!(convert(&7_usize), PlistValue::Integer(Integer::Unsigned(7)));
        assert_eq!(
            convert(&u64::MAX),
            PlistValue::Integer(Integer::Unsigned(u64::MAX))
        );
        assert_eq!(convert(&1.5_f32), PlistValue::Real(1.5));
        assert_eq!(convert(&true), PlistValue::Boolean(true));
    }

    #[test]
    fn byte_lists_become_data() {
        assert_eq!(convert(&vec![1_u8, 2]), PlistValue::Data(vec![1, 2]));
        assert_eq!(
            convert(&[0x00_u8, 0xFF, 0x10]),
            PlistValue::Data(vec![0x00, 0xFF, 0x10])
        );

        let boxed: Box<[u8]> = Box::from([9_u8]);
        assert_eq!(convert(&boxed), PlistValue::Data(vec![9]));
        assert_eq!(convert(&Vec::<u8>::new()), PlistValue::Data(Vec::new()));

        // `i8` is not a byte.
        assert_eq!(convert(&vec![1_i8]).kind(), PlistKind::Array);
    }

    #[test]
    fn arrays_keep_order_and_skip_absent() {
        let value = convert(&vec![Some(3_i32), None, Some(1)]);
        assert_eq!(
            value,
            PlistValue::Array(vec![PlistValue::from(3_i64), PlistValue::from(1_i64)])
        );

        let nested = convert(&vec![vec!["a"], vec![]]);
        assert_eq!(
            nested,
            PlistValue::Array(vec![
                PlistValue::Array(vec![PlistValue::from("a")]),
                PlistValue::Array(Vec::new()),
            ])
        );
    }

    #[test]
    fn maps_with_text_keys() {
        let map = BTreeMap::from([(String::from("a"), 1_i32), (String::from("b"), 2)]);
        let value = convert(&map);
        let dict = value.as_dictionary().unwrap();
        assert_eq!(dict.len(), 2);
        assert_eq!(dict["a"], PlistValue::from(1_i64));
        assert_eq!(dict["b"], PlistValue::from(2_i64));

        let chars = BTreeMap::from([('k', None), ('v', Some(true))]);
        let value = convert(&chars);
        let dict = value.as_dictionary().unwrap();
        assert_eq!(dict.len(), 1);
        assert_eq!(dict["v"], PlistValue::Boolean(true));
    }

    #[test]
    fn maps_without_text_keys_fail() {
        let empty = BTreeMap::<u32, i32>::new();
        assert_eq!(
            unsupported_path(&empty),
            "alloc::collections::BTreeMap<u32, i32>"
        );
    }

    #[test]
    fn records_use_export_names() {
        let value = convert(&Item {
            name: String::new(),
            count: 0,
        });
        let dict = value.as_dictionary().unwrap();
        assert_eq!(dict.len(), 1);
        assert_eq!(dict["Count"], PlistValue::Integer(Integer::Signed(0)));

        let value = convert(&Item {
            name: String::from("n"),
            count: 4,
        });
        let dict = value.as_dictionary().unwrap();
        assert_eq!(dict["Name"], PlistValue::from("n"));
        assert_eq!(dict["Count"], PlistValue::from(4_i64));
    }

    #[test]
    fn records_skip_absent_and_hidden_fields() {
        let sparse = Sparse {
            tag: None,
            extra: None,
            cache: vec![1],
        };
        let value = convert(&sparse);
        assert!(value.as_dictionary().unwrap().is_empty());

        let sparse = Sparse {
            tag: Some(String::from("t")),
            extra: Some(0),
            cache: Vec::new(),
        };
        let value = convert(&sparse);
        let dict = value.as_dictionary().unwrap();
        assert_eq!(dict.len(), 2);
        assert_eq!(dict["tag"], PlistValue::from("t"));
        assert_eq!(dict["extra"], PlistValue::Integer(Integer::Unsigned(0)));

        assert!(convert(&Marker).as_dictionary().unwrap().is_empty());
    }

    #[test]
    fn text_rendering_wins() {
        let version = Version { major: 1, minor: 4 };
        assert_eq!(convert(&version), PlistValue::from("1.4"));
        assert_eq!(convert(&Some(Box::new(version))), PlistValue::from("1.4"));

        let addr = IpAddr::V4(Ipv4Addr::LOCALHOST);
        assert_eq!(convert(&addr), PlistValue::from("127.0.0.1"));
    }

    #[test]
    fn text_errors_propagate() {
        let err = to_plist_value(&vec![Broken]).unwrap_err();
        assert!(matches!(err, ConvertError::MarshalText(_)));
        assert_eq!(err.to_string(), "broken");
    }

    #[test]
    fn registry_text_rendering() {
        let mut registry = TypeRegistry::new();
        registry.insert_type_trait::<Duration, _>(TypeTraitMarshalText::from_fn(
            |d: &Duration| Ok(format!("{}ms", d.as_millis())),
        ));
        let converter = Converter::with_registry(&registry);
        assert!(converter.registry().is_some());

        let value = converter.convert(&Some(Duration::from_millis(250))).unwrap();
        assert_eq!(value, Some(PlistValue::from("250ms")));

        assert_eq!(unsupported_path(&Duration::ZERO), "core::time::Duration");
    }

    #[test]
    fn pointers_unwrap() {
        assert_eq!(to_plist_value(&None::<String>).unwrap(), None);
        assert_eq!(convert(&Some(2_u8)), PlistValue::from(2_u64));
        assert_eq!(convert(&Box::new(false)), PlistValue::Boolean(false));
        assert_eq!(convert(&Arc::new("s")), PlistValue::from("s"));
        assert_eq!(convert(&Some(Some(-1_i16))), PlistValue::from(-1_i64));
        assert_eq!(to_plist_value(&Some(None::<i16>)).unwrap(), None);

        let dynamic: Box<dyn Reflect> = Box::new(Item {
            name: String::from("d"),
            count: 1,
        });
        let value = convert(&dynamic);
        assert_eq!(value.as_dictionary().unwrap()["Name"], PlistValue::from("d"));
    }

    #[test]
    fn unsupported_values_fail_fast() {
        assert_eq!(unsupported_path(&()), "()");
        assert_eq!(unsupported_path(&7_u128), "u128");
        assert_eq!(unsupported_path(&vec![(), ()]), "()");

        let holder = Holder {
            first: 1,
            payload: vec![()],
        };
        assert_eq!(unsupported_path(&holder), "()");

        let map = BTreeMap::from([("ok", None), ("bad", Some(()))]);
        assert_eq!(unsupported_path(&map), "()");
    }

    #[test]
    fn unsupported_message() {
        let err = to_plist_value(&Duration::ZERO).unwrap_err();
        assert_eq!(err.to_string(), "unknown type core::time::Duration");
    }
}
