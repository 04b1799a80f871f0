//! Static storage for type information.
//!
//! Used to implement [`Typed`](crate::info::Typed) and, for generic types,
//! [`TypePath`](crate::info::TypePath).
//!
//! - [`NonGenericTypeInfoCell`]: a [`OnceLock`] holding the [`TypeInfo`]
//!   of one type.
//! - [`GenericTypeInfoCell`] and [`GenericTypePathCell`]: a `static` inside
//!   a generic function is shared by every instantiation, so these cells
//!   key their values by [`TypeId`].

use alloc::boxed::Box;
use alloc::string::String;
use core::any::{Any, TypeId};
use std::sync::{OnceLock, PoisonError, RwLock};

use plist_utils::TypeIdMap;

use crate::info::TypeInfo;

mod sealed {
    use super::TypeInfo;
    use alloc::string::String;

    pub trait TypedProperty: 'static {}

    impl TypedProperty for String {}
    impl TypedProperty for TypeInfo {}
}

use sealed::TypedProperty;

// -----------------------------------------------------------------------------
// NonGenericTypeCell

/// Storage for a value computed once for a non-generic type.
///
/// # Examples
///
/// ```
/// use plist_reflect::impls::NonGenericTypeInfoCell;
/// use plist_reflect::info::{OpaqueInfo, TypeInfo, TypePath, Typed};
/// # use plist_reflect::{Reflect, info::ReflectKind, ops::ReflectRef};
///
/// struct Token;
/// # impl Reflect for Token {
/// #     fn reflect_kind(&self) -> ReflectKind { ReflectKind::Opaque }
/// #     fn reflect_ref(&self) -> ReflectRef<'_> { ReflectRef::Opaque(self) }
/// # }
///
/// impl TypePath for Token {
///     fn type_path() -> &'static str { "demo::Token" }
///     fn type_name() -> &'static str { "Token" }
/// }
///
/// impl Typed for Token {
///     fn type_info() -> &'static TypeInfo {
///         static CELL: NonGenericTypeInfoCell = NonGenericTypeInfoCell::new();
///         CELL.get_or_init(|| TypeInfo::Opaque(OpaqueInfo::new::<Self>()))
///     }
/// }
///
/// assert_eq!(Token::type_info().type_path(), "demo::Token");
/// ```
pub struct NonGenericTypeCell<T: TypedProperty>(OnceLock<T>);

/// A [`NonGenericTypeCell`] holding [`TypeInfo`].
pub type NonGenericTypeInfoCell = NonGenericTypeCell<TypeInfo>;

impl<T: TypedProperty> NonGenericTypeCell<T> {
    #[inline]
    pub const fn new() -> Self {
        Self(OnceLock::new())
    }

    /// Returns the stored value, computing it with `f` on first access.
    #[inline]
    pub fn get_or_init<F>(&self, f: F) -> &T
    where
        F: FnOnce() -> T,
    {
        self.0.get_or_init(f)
    }
}

// -----------------------------------------------------------------------------
// GenericTypeCell

/// Storage for values computed once per instantiation of a generic type.
///
/// Values are leaked on insertion and live for the rest of the program.
///
/// # Examples
///
/// ```
/// use plist_reflect::impls::GenericTypeInfoCell;
/// use plist_reflect::info::{ListInfo, TypeInfo, TypePath, Typed};
/// # use plist_reflect::{Reflect, info::ReflectKind, ops::{List, ListItemIter, ReflectRef}};
///
/// struct Ring<T>(Vec<T>);
/// # impl<T: Reflect + Typed> Reflect for Ring<T> {
/// #     fn reflect_kind(&self) -> ReflectKind { ReflectKind::List }
/// #     fn reflect_ref(&self) -> ReflectRef<'_> { ReflectRef::List(self) }
/// # }
/// # impl<T: Reflect + Typed> List for Ring<T> {
/// #     fn get(&self, index: usize) -> Option<&dyn Reflect> { self.0.get(index).map(|v| v as &dyn Reflect) }
/// #     fn len(&self) -> usize { self.0.len() }
/// #     fn iter(&self) -> ListItemIter<'_> { ListItemIter::new(self) }
/// # }
/// # impl<T: TypePath> TypePath for Ring<T> {
/// #     fn type_path() -> &'static str { "demo::Ring" }
/// #     fn type_name() -> &'static str { "Ring" }
/// # }
///
/// impl<T: Reflect + Typed> Typed for Ring<T> {
///     fn type_info() -> &'static TypeInfo {
///         static CELL: GenericTypeInfoCell = GenericTypeInfoCell::new();
///         CELL.get_or_insert::<Self>(|| TypeInfo::List(ListInfo::new::<Self, T>()))
///     }
/// }
///
/// assert!(Ring::<u8>::type_info().as_list().unwrap().item_is::<u8>());
/// assert!(Ring::<i8>::type_info().as_list().unwrap().item_is::<i8>());
/// ```
pub struct GenericTypeCell<T: TypedProperty>(RwLock<TypeIdMap<&'static T>>);

/// A [`GenericTypeCell`] holding [`TypeInfo`].
pub type GenericTypeInfoCell = GenericTypeCell<TypeInfo>;

/// A [`GenericTypeCell`] holding a type path [`String`].
pub type GenericTypePathCell = GenericTypeCell<String>;

impl<T: TypedProperty> GenericTypeCell<T> {
    #[inline]
    pub const fn new() -> Self {
        Self(RwLock::new(TypeIdMap::new()))
    }

    /// Returns the value stored for `G`, computing it with `f` on first access.
    #[inline(always)]
    pub fn get_or_insert<G: Any + ?Sized>(&self, f: impl FnOnce() -> T) -> &T {
        self.get_or_insert_by_type_id(TypeId::of::<G>(), f)
    }

    // Kept out of line so each instantiation stays small.
    #[inline(never)]
    fn get_or_insert_by_type_id(&self, type_id: TypeId, f: impl FnOnce() -> T) -> &T {
        match self.get_by_type_id(type_id) {
            Some(value) => value,
            None => self.insert_by_type_id(type_id, f()),
        }
    }

    #[inline(never)]
    fn get_by_type_id(&self, type_id: TypeId) -> Option<&'static T> {
        self.0
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&type_id)
            .copied()
    }

    #[inline(never)]
    fn insert_by_type_id(&self, type_id: TypeId, value: T) -> &'static T {
        let mut map = self.0.write().unwrap_or_else(PoisonError::into_inner);
        *map.get_or_insert(type_id, || Box::leak(Box::new(value)))
    }
}
