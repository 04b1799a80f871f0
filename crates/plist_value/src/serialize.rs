use serde_core::ser::{Serialize, SerializeMap, Serializer};

use crate::{Integer, PlistValue};

impl Serialize for Integer {
    #[inline]
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match *self {
            Self::Signed(v) => serializer.serialize_i64(v),
            Self::Unsigned(v) => serializer.serialize_u64(v),
        }
    }
}

/// Serializes the tree with serde's data model.
///
/// Dictionaries become maps, arrays sequences and data byte arrays.
impl Serialize for PlistValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Dictionary(dict) => {
                let mut map = serializer.serialize_map(Some(dict.len()))?;
                for (key, value) in dict {
                    map.serialize_entry(key, value)?;
                }
                map.end()
            }
            Self::Array(items) => serializer.collect_seq(items),
            Self::String(text) => serializer.serialize_str(text),
            Self::Integer(v) => v.serialize(serializer),
            Self::Real(v) => serializer.serialize_f64(*v),
            Self::Boolean(v) => serializer.serialize_bool(*v),
            Self::Data(bytes) => serializer.serialize_bytes(bytes),
        }
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::String;
    use alloc::vec;

    use serde_json::json;

    use crate::{Dictionary, Integer, PlistValue};

    #[test]
    fn serialize_to_json() {
        let mut dict = Dictionary::default();
        dict.insert(String::from("Name"), PlistValue::from("app"));
        dict.insert(
            String::from("Tags"),
            PlistValue::from(vec![PlistValue::from(true), PlistValue::from(0.5)]),
        );
        dict.insert(String::from("Icon"), PlistValue::Data(vec![1, 255]));

        let json = serde_json::to_value(PlistValue::from(dict)).unwrap();
        assert_eq!(
            json,
            json!({ "Name": "app", "Tags": [true, 0.5], "Icon": [1, 255] })
        );
    }

    #[test]
    fn integers_keep_range() {
        let big = serde_json::to_value(Integer::Unsigned(u64::MAX)).unwrap();
        assert_eq!(big, json!(u64::MAX));

        let neg = serde_json::to_value(PlistValue::from(-7_i64)).unwrap();
        assert_eq!(neg, json!(-7));
    }
}
