use proc_macro2::{Span, TokenStream};
use quote::quote;
use syn::Ident;

use super::{get_auto_register_impl, impl_trait_get_type_meta};
use super::{impl_trait_reflect, impl_trait_type_path, impl_trait_typed};

use crate::derive_data::ReflectMeta;

/// Implement reflection for an opaque type.
pub(crate) fn impl_opaque(meta: &ReflectMeta) -> TokenStream {
    let type_path_trait_tokens = impl_trait_type_path(meta);

    let typed_trait_tokens = impl_trait_typed(meta, meta.to_info_tokens());

    let reflect_trait_tokens = impl_trait_reflect(meta, Ident::new("Opaque", Span::call_site()));

    let get_type_meta_tokens = impl_trait_get_type_meta(meta, crate::utils::empty());

    let auto_register_tokens = get_auto_register_impl(meta);

    quote! {
        #auto_register_tokens

        #type_path_trait_tokens

        #typed_trait_tokens

        #reflect_trait_tokens

        #get_type_meta_tokens
    }
}
