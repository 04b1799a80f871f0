use syn::{Attribute, Generics, Path, parenthesized, parse::ParseStream, token::Paren};

use super::TypeAttributes;

/// Input of `impl_type_path!` and `impl_reflect_opaque!`.
///
/// Format: `::full::path::Name<generics> where ...` or a primitive name.
/// `impl_reflect_opaque!` also takes outer attributes and a trailing
/// `(attrs)` list.
pub(crate) struct ForeignType {
    pub attrs: TypeAttributes,
    pub path: Path,
    pub generics: Generics,
}

impl ForeignType {
    pub fn parse_type_path(input: ParseStream) -> syn::Result<Self> {
        let path = Path::parse_mod_style(input)?;
        let mut generics: Generics = input.parse()?;
        generics.where_clause = input.parse()?;

        Ok(Self {
            attrs: TypeAttributes::default(),
            path,
            generics,
        })
    }

    pub fn parse_opaque(input: ParseStream) -> syn::Result<Self> {
        let span = input.span();
        let outer = input.call(Attribute::parse_outer)?;
        let mut attrs = TypeAttributes::parse_attrs(&outer)?;

        let mut this = Self::parse_type_path(input)?;

        if input.peek(Paren) {
            let content;
            parenthesized!(content in input);
            attrs.parse_stream(&content)?;
        }

        if attrs.type_path.is_some() {
            return Err(syn::Error::new(
                span,
                "`type_path` is only available on `#[derive(Reflect)]`",
            ));
        }
        attrs.is_opaque = Some(span);
        this.attrs = attrs;

        Ok(this)
    }
}
