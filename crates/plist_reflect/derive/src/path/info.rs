use proc_macro2::TokenStream;
use quote::quote;

#[inline(always)]
pub(crate) fn type_path_(plist_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #plist_reflect_path::info::TypePath
    }
}

#[inline(always)]
pub(crate) fn typed_(plist_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #plist_reflect_path::info::Typed
    }
}

#[inline(always)]
pub(crate) fn type_info_(plist_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #plist_reflect_path::info::TypeInfo
    }
}

#[inline(always)]
pub(crate) fn reflect_kind_(plist_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #plist_reflect_path::info::ReflectKind
    }
}

#[inline(always)]
pub(crate) fn named_field_(plist_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #plist_reflect_path::info::NamedField
    }
}

#[inline(always)]
pub(crate) fn struct_info_(plist_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #plist_reflect_path::info::StructInfo
    }
}

#[inline(always)]
pub(crate) fn opaque_info_(plist_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #plist_reflect_path::info::OpaqueInfo
    }
}
