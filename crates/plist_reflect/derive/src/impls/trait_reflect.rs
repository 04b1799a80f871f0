use proc_macro2::{Ident, TokenStream};
use quote::{quote, quote_spanned};

use crate::derive_data::{ImplBounds, ReflectMeta};
use crate::path::fp::OptionFP;

/// Generate implementation code for `Reflect`.
///
/// `kind` is the variant shared by `ReflectKind` and `ReflectRef`.
pub(crate) fn impl_trait_reflect(meta: &ReflectMeta, kind: Ident) -> TokenStream {
    let plist_reflect_path = meta.plist_reflect_path();
    let reflect_ = crate::path::reflect_(plist_reflect_path);
    let reflect_kind_ = crate::path::reflect_kind_(plist_reflect_path);
    let reflect_ref_ = crate::path::reflect_ref_(plist_reflect_path);

    let reflect_text_tokens = match meta.attrs().marshal_text {
        Some(span) => {
            let marshal_text_ = crate::path::marshal_text_(plist_reflect_path);
            quote_spanned! { span =>
                #[inline]
                fn reflect_text(&self) -> #OptionFP<&dyn #marshal_text_> {
                    #OptionFP::Some(self)
                }
            }
        }
        None => crate::utils::empty(),
    };

    let real_ident = meta.real_ident();
    let (impl_generics, ty_generics, where_clause) = meta.split_generics(ImplBounds::Reflect);

    quote! {
        impl #impl_generics #reflect_ for #real_ident #ty_generics #where_clause {
            #[inline]
            fn reflect_kind(&self) -> #reflect_kind_ {
                #reflect_kind_::#kind
            }

            #[inline]
            fn reflect_ref(&self) -> #reflect_ref_<'_> {
                #reflect_ref_::#kind(self)
            }

            #reflect_text_tokens
        }
    }
}
