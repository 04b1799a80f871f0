use proc_macro2::TokenStream;
use quote::quote;

use crate::derive_data::{ImplBounds, ReflectMeta};

/// Generate implementation code for `TypePath`.
///
/// Names of generic types are built once per instantiation and cached.
pub(crate) fn impl_trait_type_path(meta: &ReflectMeta) -> TokenStream {
    let plist_reflect_path = meta.plist_reflect_path();
    let type_path_ = crate::path::type_path_(plist_reflect_path);
    let naming = meta.naming();

    let mut type_path = naming.to_name_tokens(plist_reflect_path, true);
    let mut type_name = naming.to_name_tokens(plist_reflect_path, false);

    if naming.is_generic() {
        let path_cell_ = crate::path::generic_type_path_cell_(plist_reflect_path);
        for name in [&mut type_path, &mut type_name] {
            *name = quote! {
                static CELL: #path_cell_ = #path_cell_::new();
                CELL.get_or_insert::<Self>(|| #name)
            };
        }
    }

    let real_ident = meta.real_ident();
    let (impl_generics, ty_generics, where_clause) = meta.split_generics(ImplBounds::TypePath);

    quote! {
        impl #impl_generics #type_path_ for #real_ident #ty_generics #where_clause {
            fn type_path() -> &'static str {
                #type_path
            }

            fn type_name() -> &'static str {
                #type_name
            }
        }
    }
}
