//! Paths used by generated code, kept in one place so that moving an item
//! in `plist_reflect` only touches this module.
//!
//! The only special case is the path of `plist_reflect` itself, see
//! [`plist_reflect`].

use proc_macro2::TokenStream;
use quote::quote;

// -----------------------------------------------------------------------------
// Crate Path

/// The access path of the `plist_reflect` crate, as seen from the crate
/// invoking the macro.
///
/// 1. For crates that depend on `plist_reflect`, `::plist_reflect`.
/// 2. For crates that depend on `plist_core`, `::plist_core::reflect`.
/// 3. Otherwise `::plist_reflect`, which may be wrong.
///
/// This reads the caller's Cargo.toml, so it is called once per macro
/// invocation and the path is passed around afterwards.
pub(crate) fn plist_reflect() -> syn::Path {
    plist_macro_utils::Manifest::shared(|manifest| manifest.get_crate_path("plist_reflect"))
}

// -----------------------------------------------------------------------------
// Modules

mod cell;
mod info;
mod ops;
mod registry;

pub(crate) mod fp;

// -----------------------------------------------------------------------------
// Internal API

pub(crate) use cell::*;
pub(crate) use info::*;
pub(crate) use ops::*;
pub(crate) use registry::*;

#[inline(always)]
pub(crate) fn macro_utils_(plist_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #plist_reflect_path::__macro_exports::macro_utils
    }
}

#[cfg(feature = "auto_register")]
#[inline(always)]
pub(crate) fn auto_register_(plist_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #plist_reflect_path::__macro_exports::auto_register
    }
}

#[inline(always)]
pub(crate) fn reflect_(plist_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #plist_reflect_path::Reflect
    }
}

#[inline(always)]
pub(crate) fn marshal_text_(plist_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #plist_reflect_path::MarshalText
    }
}
