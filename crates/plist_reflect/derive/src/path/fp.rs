//! Fully qualified paths of `core` items, immune to shadowing at the
//! call site.

use proc_macro2::TokenStream;
use quote::{ToTokens, quote};

macro_rules! define_full_path {
    ($($name:ident => ($($path:tt)+);)*) => {
        $(
            pub(crate) struct $name;

            impl ToTokens for $name {
                #[inline]
                fn to_tokens(&self, tokens: &mut TokenStream) {
                    tokens.extend(quote!($($path)+));
                }
            }
        )*
    };
}

define_full_path! {
    OptionFP => (::core::option::Option);
    AnyFP => (::core::any::Any);
    SendFP => (::core::marker::Send);
    SyncFP => (::core::marker::Sync);
}
