use alloc::string::String;
use alloc::sync::Arc;

use crate::info::Typed;
use crate::registry::FromType;
use crate::{MarshalText, MarshalTextError, Reflect};

type MarshalTextFn = dyn Fn(&dyn Reflect) -> Option<Result<String, MarshalTextError>> + Send + Sync;

/// Renders values of one type as text.
///
/// Registered capabilities are consulted after
/// [`Reflect::reflect_text`], which lets foreign types that cannot
/// implement [`MarshalText`] still render as text.
///
/// # Examples
///
/// ```
/// use core::any::TypeId;
/// use core::time::Duration;
/// use plist_reflect::registry::{TypeRegistry, TypeTraitMarshalText};
///
/// let mut registry = TypeRegistry::new();
/// registry.insert_type_trait::<Duration, _>(TypeTraitMarshalText::from_fn(
///     |d: &Duration| Ok(format!("{}ms", d.as_millis())),
/// ));
///
/// let renderer = registry
///     .get_type_trait::<TypeTraitMarshalText>(TypeId::of::<Duration>())
///     .unwrap();
/// let text = renderer.marshal_text(&Duration::from_secs(2)).unwrap();
/// assert_eq!(text.unwrap(), "2000ms");
/// ```
#[derive(Clone)]
pub struct TypeTraitMarshalText {
    func: Arc<MarshalTextFn>,
}

impl TypeTraitMarshalText {
    /// Creates the capability from a rendering function for `T`.
    pub fn from_fn<T: Reflect>(
        func: impl Fn(&T) -> Result<String, MarshalTextError> + Send + Sync + 'static,
    ) -> Self {
        Self {
            func: Arc::new(move |value: &dyn Reflect| value.downcast_ref::<T>().map(&func)),
        }
    }

    /// Renders `value`.
    ///
    /// Returns `None` if `value` is not of the type this capability was
    /// created for.
    #[inline]
    pub fn marshal_text(&self, value: &dyn Reflect) -> Option<Result<String, MarshalTextError>> {
        (self.func)(value)
    }
}

impl<T: MarshalText + Reflect + Typed> FromType<T> for TypeTraitMarshalText {
    fn from_type() -> Self {
        Self::from_fn(<T as MarshalText>::marshal_text)
    }
}

crate::derive::impl_type_path!(::plist_reflect::registry::TypeTraitMarshalText);
