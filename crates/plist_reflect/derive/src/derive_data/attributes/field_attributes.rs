use proc_macro2::Span;
use syn::{Attribute, LitStr, Meta, Token};
use syn::{parse::ParseStream, punctuated::Punctuated, spanned::Spanned};

use super::{expect_lit_str, set_flag};
use crate::REFLECT_ATTRIBUTE_NAME;

/// Field-level `#[reflect(...)]` attributes.
///
/// Format: `#[reflect(rename = "Key", omit_empty)]` or `#[reflect(skip)]`.
#[derive(Default, Debug)]
pub(crate) struct FieldAttributes {
    /// `rename = "..."`, the key the field is exported under.
    pub rename: Option<LitStr>,
    /// `omit_empty`
    pub omit_empty: Option<Span>,
    /// `skip`, the field is invisible to reflection.
    pub skip: Option<Span>,
}

impl FieldAttributes {
    pub fn parse_attrs(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut this = Self::default();
        for attr in attrs {
            if attr.path().is_ident(REFLECT_ATTRIBUTE_NAME) {
                attr.parse_args_with(|input: ParseStream| this.parse_stream(input))?;
            }
        }
        this.validity()?;
        Ok(this)
    }

    fn parse_stream(&mut self, input: ParseStream) -> syn::Result<()> {
        let metas = Punctuated::<Meta, Token![,]>::parse_terminated(input)?;
        for meta in metas {
            self.parse_meta(&meta)?;
        }
        Ok(())
    }

    fn parse_meta(&mut self, meta: &Meta) -> syn::Result<()> {
        match meta {
            Meta::Path(path) if path.is_ident("omit_empty") => {
                set_flag(&mut self.omit_empty, path.span(), "omit_empty")
            }
            Meta::Path(path) if path.is_ident("skip") => {
                set_flag(&mut self.skip, path.span(), "skip")
            }
            Meta::NameValue(pair) if pair.path.is_ident("rename") => {
                if self.rename.is_some() {
                    return Err(syn::Error::new(
                        pair.path.span(),
                        "duplicate `rename` attribute",
                    ));
                }
                self.rename = Some(expect_lit_str(&pair.value)?.clone());
                Ok(())
            }
            _ => Err(syn::Error::new(
                meta.span(),
                "unknown attribute, expected one of: `rename = \"...\"`, `omit_empty`, `skip`",
            )),
        }
    }

    fn validity(&self) -> syn::Result<()> {
        if let Some(span) = self.skip
            && (self.rename.is_some() || self.omit_empty.is_some())
        {
            return Err(syn::Error::new(
                span,
                "`skip` cannot be combined with `rename` or `omit_empty`",
            ));
        }
        Ok(())
    }

    /// The explicit export name, `None` when absent or empty.
    pub fn export_name(&self) -> Option<String> {
        self.rename
            .as_ref()
            .map(LitStr::value)
            .filter(|name| !name.is_empty())
    }
}
