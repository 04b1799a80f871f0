//! Utilities for implementing the reflection traits, and the built-in
//! implementations.
//!
//! - [`concat`]: string concatenation used by generated `TypePath` impls.
//! - [`NonGenericTypeInfoCell`]: implements [`Typed`] for non-generic types.
//! - [`GenericTypePathCell`]: implements [`TypePath`] for generic types.
//! - [`GenericTypeInfoCell`]: implements [`Typed`] for generic types.
//! - `xxx_debug`: implements [`Reflect::reflect_debug`] (e.g. [`list_debug`]).
//!
//! ## Implemented Menu
//!
//! - scalar: `i8`-`i64`, `isize`, `u8`-`u64`, `usize`, `f32`, `f64`, `bool`,
//!   `char`, `String`, `&'static str`, `Cow<'static, str>`
//! - list: `Vec<T>`, `VecDeque<T>`, `[T; N]`, `Box<[T]>`
//! - map: `BTreeMap<K, V>`, std `HashMap<K, V, S>`, hashbrown `HashMap<K, V, S>`
//! - pointer: `Option<T>`, `Box<T>`, `Box<dyn Reflect>`, `Arc<T>`, `&'static T`
//! - opaque: `()`, `i128`, `u128`, `Duration`, `fn() -> R`, `fn(A) -> R`
//! - text rendering: `IpAddr`, `Ipv4Addr`, `Ipv6Addr`, `SocketAddr`,
//!   `SocketAddrV4`, `SocketAddrV6`
//!
//! [`TypePath`]: crate::info::TypePath
//! [`Typed`]: crate::info::Typed
//! [`Reflect::reflect_debug`]: crate::Reflect::reflect_debug

// -----------------------------------------------------------------------------
// Modules

mod cell;
mod debug;

mod list;
mod map;
mod net;
mod opaque;
mod pointer;
mod scalar;

// -----------------------------------------------------------------------------
// Exports

pub use cell::{GenericTypeInfoCell, GenericTypePathCell, NonGenericTypeInfoCell};
pub use debug::{list_debug, map_debug, pointer_debug, struct_debug};

/// Concatenates string slices into a new `String` with exact capacity.
///
/// # Examples
///
/// ```
/// use plist_reflect::impls;
///
/// let s = impls::concat(&["alloc::vec", "::", "Vec", "<", "u8", ">"]);
/// assert_eq!(s, "alloc::vec::Vec<u8>");
/// assert_eq!(s.capacity(), 19);
/// ```
#[inline(never)]
pub fn concat(arr: &[&str]) -> ::alloc::string::String {
    let len = arr.iter().map(|item| item.len()).sum();
    let mut res = ::alloc::string::String::with_capacity(len);
    for &item in arr {
        res.push_str(item);
    }
    res
}
