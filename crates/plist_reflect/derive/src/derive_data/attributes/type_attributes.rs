use proc_macro2::Span;
use syn::{Attribute, Meta, Path, Token};
use syn::{parse::ParseStream, punctuated::Punctuated, spanned::Spanned};

use super::{expect_lit_str, set_flag};
use crate::REFLECT_ATTRIBUTE_NAME;

/// Type-level `#[reflect(...)]` attributes.
///
/// Format: `#[reflect(Opaque, marshal_text, auto_register, type_path = "a::b::Foo")]`,
/// in any order and split over any number of attributes.
#[derive(Default, Debug)]
pub(crate) struct TypeAttributes {
    /// `Opaque`, always set by `impl_reflect_opaque!`.
    pub is_opaque: Option<Span>,
    /// `marshal_text`, the type implements `MarshalText`.
    pub marshal_text: Option<Span>,
    /// `auto_register`
    pub auto_register: Option<Span>,
    /// `type_path = "..."`, without generics.
    pub type_path: Option<Path>,
}

impl TypeAttributes {
    /// Collects all `#[reflect(...)]` attributes, ignoring the others.
    pub fn parse_attrs(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut this = Self::default();
        for attr in attrs {
            if attr.path().is_ident(REFLECT_ATTRIBUTE_NAME) {
                attr.parse_args_with(|input: ParseStream| this.parse_stream(input))?;
            }
        }
        Ok(this)
    }

    /// Parses the content of one `reflect(...)` list.
    pub fn parse_stream(&mut self, input: ParseStream) -> syn::Result<()> {
        let metas = Punctuated::<Meta, Token![,]>::parse_terminated(input)?;
        for meta in metas {
            self.parse_meta(&meta)?;
        }
        Ok(())
    }

    fn parse_meta(&mut self, meta: &Meta) -> syn::Result<()> {
        match meta {
            Meta::Path(path) if path.is_ident("Opaque") => {
                set_flag(&mut self.is_opaque, path.span(), "Opaque")
            }
            Meta::Path(path) if path.is_ident("marshal_text") => {
                set_flag(&mut self.marshal_text, path.span(), "marshal_text")
            }
            Meta::Path(path) if path.is_ident("auto_register") => {
                set_flag(&mut self.auto_register, path.span(), "auto_register")
            }
            Meta::NameValue(pair) if pair.path.is_ident("type_path") => {
                if self.type_path.is_some() {
                    return Err(syn::Error::new(
                        pair.path.span(),
                        "duplicate `type_path` attribute",
                    ));
                }
                let lit = expect_lit_str(&pair.value)?;
                let path = lit.parse_with(Path::parse_mod_style)?;
                if path.leading_colon.is_some() {
                    return Err(syn::Error::new(
                        lit.span(),
                        "did not expect a leading double colon (`::`)",
                    ));
                }
                self.type_path = Some(path);
                Ok(())
            }
            _ => Err(syn::Error::new(
                meta.span(),
                "unknown attribute, expected one of: \
                 `Opaque`, `marshal_text`, `auto_register`, `type_path = \"...\"`",
            )),
        }
    }
}
