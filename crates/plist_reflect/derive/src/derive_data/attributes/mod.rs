//! Parsing of `#[reflect(...)]` attributes on types and fields.

use proc_macro2::Span;
use syn::{Expr, ExprLit, Lit, LitStr, spanned::Spanned};

// -----------------------------------------------------------------------------
// Modules

mod field_attributes;
mod type_attributes;

// -----------------------------------------------------------------------------
// Internal API

pub(crate) use field_attributes::FieldAttributes;
pub(crate) use type_attributes::TypeAttributes;

/// Sets a flag, rejecting repeats.
fn set_flag(flag: &mut Option<Span>, span: Span, name: &str) -> syn::Result<()> {
    if flag.is_some() {
        return Err(syn::Error::new(
            span,
            format!("duplicate `{name}` attribute"),
        ));
    }
    *flag = Some(span);
    Ok(())
}

/// The right side of `name = "..."`.
fn expect_lit_str(expr: &Expr) -> syn::Result<&LitStr> {
    match expr {
        Expr::Lit(ExprLit {
            lit: Lit::Str(lit), ..
        }) => Ok(lit),
        _ => Err(syn::Error::new(expr.span(), "expected a string literal")),
    }
}
