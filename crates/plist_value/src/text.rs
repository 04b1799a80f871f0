use alloc::string::String;

use plist_reflect::registry::{TypeRegistry, TypeTraitMarshalText};
use plist_reflect::{MarshalTextError, Reflect};

use crate::{ConvertError, PlistValue};

/// Renders `value` as a plist string, if it has a text capability.
///
/// The value's own [`reflect_text`](Reflect::reflect_text) is tried first,
/// then a [`TypeTraitMarshalText`] registered for its type. Returns `None`
/// when neither exists. A rendering error is passed on unchanged.
///
/// # Examples
///
/// ```
/// use std::net::Ipv4Addr;
/// use plist_value::{PlistValue, render_text};
///
/// let addr = Ipv4Addr::new(192, 168, 0, 1);
/// let value = render_text(&addr, None).unwrap().unwrap();
/// assert_eq!(value, PlistValue::String("192.168.0.1".into()));
///
/// assert!(render_text(&5_u8, None).is_none());
/// ```
pub fn render_text(
    value: &dyn Reflect,
    registry: Option<&TypeRegistry>,
) -> Option<Result<PlistValue, ConvertError>> {
    if let Some(text) = value.reflect_text() {
        return Some(into_plist_string(text.marshal_text()));
    }

    let renderer = registry?.get_type_trait::<TypeTraitMarshalText>(value.ty_id())?;
    renderer.marshal_text(value).map(into_plist_string)
}

#[inline]
fn into_plist_string(text: Result<String, MarshalTextError>) -> Result<PlistValue, ConvertError> {
    text.map(PlistValue::String)
        .map_err(ConvertError::MarshalText)
}

#[cfg(test)]
mod tests {
    use alloc::format;
    use alloc::string::{String, ToString};
    use core::net::SocketAddr;
    use core::time::Duration;

    use plist_reflect::derive::Reflect;
    use plist_reflect::registry::{TypeRegistry, TypeTraitMarshalText};
    use plist_reflect::{MarshalText, MarshalTextError};

    use super::render_text;
    use crate::{ConvertError, PlistValue};

    #[derive(Reflect)]
    #[reflect(Opaque, marshal_text)]
    struct Rejected;

    impl MarshalText for Rejected {
        fn marshal_text(&self) -> Result<String, MarshalTextError> {
            Err("rejected".into())
        }
    }

    fn millis_registry() -> TypeRegistry {
        let mut registry = TypeRegistry::new();
        registry.insert_type_trait::<Duration, _>(TypeTraitMarshalText::from_fn(
            |d: &Duration| Ok(format!("{}ms", d.as_millis())),
        ));
        registry
    }

    #[test]
    fn value_capability() {
        let addr: SocketAddr = "[::1]:80".parse().unwrap();
        let value = render_text(&addr, None).unwrap().unwrap();
        assert_eq!(value, PlistValue::String(String::from("[::1]:80")));
    }

    #[test]
    fn registry_capability() {
        let registry = millis_registry();
        let value = render_text(&Duration::from_millis(1500), Some(&registry));
        assert_eq!(
            value.unwrap().unwrap(),
            PlistValue::String(String::from("1500ms"))
        );

        assert!(render_text(&Duration::ZERO, None).is_none());
        assert!(render_text(&7_u32, Some(&registry)).is_none());
    }

    #[test]
    fn errors_pass_through() {
        let err = render_text(&Rejected, None).unwrap().unwrap_err();
        assert!(matches!(err, ConvertError::MarshalText(_)));
        assert_eq!(err.to_string(), "rejected");
    }
}
