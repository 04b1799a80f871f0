use proc_macro2::{Span, TokenStream};
use quote::{quote, quote_spanned};
use syn::Ident;

use crate::derive_data::{ImplBounds, ReflectMeta};

/// Generate implementation code for `GetTypeMeta` trait.
///
/// `register_deps_tokens` registers the field types, if any.
pub(crate) fn impl_trait_get_type_meta(
    meta: &ReflectMeta,
    register_deps_tokens: TokenStream,
) -> TokenStream {
    let plist_reflect_path = meta.plist_reflect_path();
    let get_type_meta_ = crate::path::get_type_meta_(plist_reflect_path);
    let type_meta_ = crate::path::type_meta_(plist_reflect_path);
    let from_type_ = crate::path::from_type_(plist_reflect_path);

    let outer_ = Ident::new("__outer", Span::call_site());

    let mut trait_counter = 0usize;

    let insert_marshal_text = match meta.attrs().marshal_text {
        Some(span) => {
            trait_counter += 1;
            let type_trait_marshal_text_ = crate::path::type_trait_marshal_text_(plist_reflect_path);
            quote_spanned! { span =>
                #type_meta_::insert_trait::<#type_trait_marshal_text_>(&mut #outer_, #from_type_::<Self>::from_type());
            }
        }
        None => crate::utils::empty(),
    };

    let real_ident = meta.real_ident();
    let (impl_generics, ty_generics, where_clause) = meta.split_generics(ImplBounds::Registry);

    quote! {
        impl #impl_generics #get_type_meta_ for #real_ident #ty_generics #where_clause {
            fn get_type_meta() -> #type_meta_ {
                let mut #outer_ = #type_meta_::with_capacity::<Self>(#trait_counter);
                #insert_marshal_text
                #outer_
            }

            #register_deps_tokens
        }
    }
}
