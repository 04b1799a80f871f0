use proc_macro2::{Span, TokenStream};
use quote::quote;
use syn::Ident;

use super::{get_auto_register_impl, impl_trait_get_type_meta};
use super::{impl_trait_reflect, impl_trait_type_path, impl_trait_typed};

use crate::derive_data::{ImplBounds, ReflectStruct, StructField};
use crate::path::fp::OptionFP;

/// Implement reflection for a named-field or unit struct.
pub(crate) fn impl_struct(info: &ReflectStruct) -> TokenStream {
    let meta = info.meta();

    let type_path_trait_tokens = impl_trait_type_path(meta);

    let typed_trait_tokens = impl_trait_typed(meta, info.to_info_tokens());

    let struct_trait_tokens = impl_trait_struct(info);

    let reflect_trait_tokens = impl_trait_reflect(meta, Ident::new("Struct", Span::call_site()));

    let get_type_meta_tokens = impl_trait_get_type_meta(meta, get_registry_dependencies(info));

    let auto_register_tokens = get_auto_register_impl(meta);

    quote! {
        #auto_register_tokens

        #type_path_trait_tokens

        #typed_trait_tokens

        #struct_trait_tokens

        #reflect_trait_tokens

        #get_type_meta_tokens
    }
}

fn impl_trait_struct(info: &ReflectStruct) -> TokenStream {
    let meta = info.meta();
    let plist_reflect_path = meta.plist_reflect_path();
    let reflect_ = crate::path::reflect_(plist_reflect_path);
    let struct_ = crate::path::struct_(plist_reflect_path);

    // `quote` binds every `#var` inside a repetition, so the paths used
    // in the match arms are built here.
    let some_ = quote!(#OptionFP::Some);
    let none_ = quote!(#OptionFP::None);

    let fields: Vec<&StructField> = info.active_fields().collect();
    let field_len = fields.len();
    let field_indices = 0..field_len;
    let name_indices = 0..field_len;
    let field_names = fields.iter().map(|field| field.name.as_str());
    let field_members = fields.iter().map(|field| field.member());

    let real_ident = meta.real_ident();
    let (impl_generics, ty_generics, where_clause) = meta.split_generics(ImplBounds::Reflect);

    quote! {
        impl #impl_generics #struct_ for #real_ident #ty_generics #where_clause {
            fn field_at(&self, __index__: usize) -> #OptionFP<&dyn #reflect_> {
                match __index__ {
                    #(#field_indices => #some_(&self.#field_members),)*
                    _ => #none_,
                }
            }

            fn name_at(&self, __index__: usize) -> #OptionFP<&str> {
                match __index__ {
                    #(#name_indices => #some_(#field_names),)*
                    _ => #none_,
                }
            }

            #[inline]
            fn field_len(&self) -> usize {
                #field_len
            }
        }
    }
}

/// `register_dependencies` for the visible field types.
fn get_registry_dependencies(info: &ReflectStruct) -> TokenStream {
    let plist_reflect_path = info.meta().plist_reflect_path();
    let type_registry_ = crate::path::type_registry_(plist_reflect_path);

    let field_types = info.active_fields().map(|field| &field.data.ty);

    quote! {
        fn register_dependencies(__registry: &mut #type_registry_) {
            #( #type_registry_::register::<#field_types>(__registry); )*
        }
    }
}
