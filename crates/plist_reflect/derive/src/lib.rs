//! See following macros:
//!
//! - [`Reflect`]
//! - [`impl_reflect_opaque`]
//! - [`impl_type_path`]
//! - [`impl_auto_register`]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![allow(clippy::std_instead_of_core, reason = "proc-macro lib")]
#![allow(clippy::std_instead_of_alloc, reason = "proc-macro lib")]

use proc_macro::TokenStream;
use quote::quote;
use syn::{DeriveInput, parse_macro_input};

static REFLECT_ATTRIBUTE_NAME: &str = "reflect";

// -----------------------------------------------------------------------------
// Modules

mod derive_data;
mod impls;
mod path;
mod utils;

// -----------------------------------------------------------------------------
// Macros

/// # Reflection Derivation
///
/// `#[derive(Reflect)]` implements the following traits:
///
/// - `TypePath`
/// - `Typed`
/// - `Reflect`
/// - `GetTypeMeta`
/// - `Struct` (for `struct T { ... }` and `struct T;`)
///
/// Tuple structs and enums are treated as `Opaque`: the converter cannot
/// see inside them and reports them as unsupported unless they render
/// themselves as text.
///
/// ## Field Attributes
///
/// ### Export Name
///
/// A field is exported under its Rust name unless renamed:
///
/// ```rust, ignore
/// #[derive(Reflect)]
/// struct Info {
///     #[reflect(rename = "CFBundleIdentifier")]
///     bundle_id: String,
/// }
/// ```
///
/// An empty name (`rename = ""`) falls back to the Rust name. Two visible
/// fields with the same export name are rejected at compile time.
///
/// ### Omit Empty
///
/// `omit_empty` leaves the entry out when the value is empty (zero,
/// `false`, empty text or collection, or a null pointer).
///
/// ```rust, ignore
/// #[derive(Reflect)]
/// struct Info {
///     #[reflect(rename = "LSMinimumSystemVersion", omit_empty)]
///     min_version: String,
/// }
/// ```
///
/// Attributes can be combined in one list or spread over several.
///
/// ### Skip
///
/// `skip` hides a field from reflection entirely. It is not part of the
/// type info and cannot be accessed through `Struct`.
///
/// ## Type Attributes
///
/// ### Custom Type Path
///
/// ```rust, ignore
/// #[derive(Reflect)]
/// #[reflect(type_path = "bundle::plist::Info")]
/// struct Info { /* ... */ }
/// ```
///
/// A single segment only renames the type and keeps the module of the
/// definition. Generics are appended automatically.
///
/// ### Opaque Types
///
/// `Opaque` forces a type to be treated as opaque instead of `Struct`.
///
/// ### Text Rendering
///
/// `marshal_text` declares that the type implements `MarshalText`. The
/// converter then renders it as a plist string whatever its shape.
///
/// ```rust, ignore
/// #[derive(Reflect)]
/// #[reflect(marshal_text)]
/// struct Version { major: u32, minor: u32 }
///
/// impl MarshalText for Version { /* ... */ }
/// ```
///
/// The capability is also inserted into the type's `TypeMeta` as a
/// `TypeTraitMarshalText`.
///
/// ### Auto Registration
///
/// `auto_register` adds the type to `TypeRegistry::auto_register`. It has
/// no effect on generic types and is a no-op without the `auto_register`
/// feature.
#[proc_macro_derive(Reflect, attributes(reflect))]
pub fn derive_reflect(input: TokenStream) -> TokenStream {
    let ast = parse_macro_input!(input as DeriveInput);

    impls::match_reflect_impls(ast)
}

/// Implements reflection for `Opaque` types.
///
/// Syntax: `::full::path::Name<generics> (attrs)`, or a primitive name.
///
/// ## Example
///
/// ```rust, ignore
/// impl_reflect_opaque!(u128);
/// impl_reflect_opaque!(::core::time::Duration);
/// impl_reflect_opaque!(::core::net::Ipv4Addr(marshal_text));
/// ```
///
/// See available attributes in [`derive Reflect`](derive_reflect).
/// `type_path` is not accepted, the path is always the one written.
#[proc_macro]
pub fn impl_reflect_opaque(input: TokenStream) -> TokenStream {
    use crate::derive_data::{ForeignType, ReflectMeta, TypeNaming};

    let ForeignType {
        attrs,
        path,
        generics,
    } = parse_macro_input!(input with ForeignType::parse_opaque);

    let naming = match TypeNaming::foreign(&path, &generics) {
        Ok(naming) => naming,
        Err(err) => return err.into_compile_error().into(),
    };
    let meta = ReflectMeta::new(attrs, naming);

    let reflect_impls = impls::impl_opaque(&meta);

    quote! {
        const _: () = {
            #reflect_impls
        };
    }
    .into()
}

/// Implements `TypePath` for a foreign type.
///
/// Syntax: `::full::path::Name<generics> where ...`, or a primitive name.
///
/// The leading `::` is required for anything but primitives and is removed
/// from the output. The path must resolve to the target type from the
/// invoking crate.
///
/// ## Example
///
/// ```ignore
/// // `u64`
/// impl_type_path!(u64);
///
/// // `alloc::string::String`
/// impl_type_path!(::alloc::string::String);
///
/// // `alloc::vec::Vec<u8>` for `Vec<u8>`.
/// impl_type_path!(::alloc::vec::Vec<T>);
/// ```
#[proc_macro]
pub fn impl_type_path(input: TokenStream) -> TokenStream {
    use crate::derive_data::{ForeignType, ReflectMeta, TypeNaming};

    let ForeignType {
        attrs,
        path,
        generics,
    } = parse_macro_input!(input with ForeignType::parse_type_path);

    let naming = match TypeNaming::foreign(&path, &generics) {
        Ok(naming) => naming,
        Err(err) => return err.into_compile_error().into(),
    };
    let meta = ReflectMeta::new(attrs, naming);

    let type_path_impls = impls::impl_trait_type_path(&meta);

    quote! {
        const _: () = {
            #type_path_impls
        };
    }
    .into()
}

/// Adds a type to the automatic registry.
///
/// Does nothing when the feature is disabled. The type must be concrete.
///
/// ## Example
///
/// ```ignore
/// impl_auto_register!(foo::Foo);
/// impl_auto_register!(Vec<u32>); // Ok
/// impl_auto_register!(Vec<T: Clone>); // Error
/// ```
#[proc_macro]
pub fn impl_auto_register(_input: TokenStream) -> TokenStream {
    #[cfg(not(feature = "auto_register"))]
    return utils::empty().into();

    #[cfg(feature = "auto_register")]
    {
        let type_path = syn::parse_macro_input!(_input as syn::Type);

        let plist_reflect_path = path::plist_reflect();
        let auto_register_ = path::auto_register_(&plist_reflect_path);

        TokenStream::from(quote! {
            const _: () = {
                #auto_register_::inventory::submit!{
                    #auto_register_::__AutoRegisterFunc(
                        <#type_path as #auto_register_::__RegisterType>::__register
                    )
                }
            };
        })
    }
}
