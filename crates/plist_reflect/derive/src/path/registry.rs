use proc_macro2::TokenStream;
use quote::quote;

#[inline(always)]
pub(crate) fn type_meta_(plist_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #plist_reflect_path::registry::TypeMeta
    }
}

#[inline(always)]
pub(crate) fn get_type_meta_(plist_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #plist_reflect_path::registry::GetTypeMeta
    }
}

#[inline(always)]
pub(crate) fn from_type_(plist_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #plist_reflect_path::registry::FromType
    }
}

#[inline(always)]
pub(crate) fn type_registry_(plist_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #plist_reflect_path::registry::TypeRegistry
    }
}

#[inline(always)]
pub(crate) fn type_trait_marshal_text_(plist_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #plist_reflect_path::registry::TypeTraitMarshalText
    }
}
