use crate::info::Typed;

/// Creates a value, usually a [`TypeTrait`](crate::registry::TypeTrait),
/// for the type `T`.
pub trait FromType<T: Typed> {
    fn from_type() -> Self;
}
