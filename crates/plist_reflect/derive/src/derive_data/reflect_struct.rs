use std::collections::BTreeSet;

use proc_macro2::TokenStream;
use quote::quote;
use syn::{Field, Member};
use syn::{ext::IdentExt, spanned::Spanned};

use super::{FieldAttributes, ReflectMeta};

/// One declared field with its parsed attributes.
pub(crate) struct StructField<'a> {
    pub data: &'a Field,
    pub attrs: FieldAttributes,
    /// Rust name, raw prefix removed.
    pub name: String,
    /// Key the field is exported under.
    pub export_name: String,
}

impl<'a> StructField<'a> {
    pub fn new(data: &'a Field) -> syn::Result<Self> {
        let attrs = FieldAttributes::parse_attrs(&data.attrs)?;

        let name = match &data.ident {
            Some(ident) => ident.unraw().to_string(),
            None => return Err(syn::Error::new(data.span(), "expected a named field")),
        };
        let export_name = attrs.export_name().unwrap_or_else(|| name.clone());

        Ok(Self {
            data,
            attrs,
            name,
            export_name,
        })
    }

    /// `self.#member` access.
    pub fn member(&self) -> Member {
        match &self.data.ident {
            Some(ident) => Member::Named(ident.clone()),
            None => unreachable!("checked in `StructField::new`"),
        }
    }
}

/// A named-field (or unit) struct.
pub(crate) struct ReflectStruct<'a> {
    meta: ReflectMeta<'a>,
    fields: Vec<StructField<'a>>,
}

impl<'a> ReflectStruct<'a> {
    /// Rejects visible fields sharing an export name.
    pub fn new(mut meta: ReflectMeta<'a>, fields: Vec<StructField<'a>>) -> syn::Result<Self> {
        let mut export_names = BTreeSet::new();
        for field in fields.iter().filter(|field| field.attrs.skip.is_none()) {
            if !export_names.insert(field.export_name.as_str()) {
                let span = match &field.attrs.rename {
                    Some(lit) => lit.span(),
                    None => field.data.span(),
                };
                return Err(syn::Error::new(
                    span,
                    format!("duplicate export name `{}`", field.export_name),
                ));
            }
        }

        meta.add_field_types(
            fields
                .iter()
                .filter(|field| field.attrs.skip.is_none())
                .map(|field| &field.data.ty),
        );

        Ok(Self { meta, fields })
    }

    #[inline]
    pub fn meta(&self) -> &ReflectMeta<'a> {
        &self.meta
    }

    /// Fields visible to reflection, in declaration order.
    pub fn active_fields(&self) -> impl Iterator<Item = &StructField<'a>> {
        self.fields.iter().filter(|field| field.attrs.skip.is_none())
    }

    /// Generates `TypeInfo::Struct(...)` for `Typed`.
    pub fn to_info_tokens(&self) -> TokenStream {
        let plist_reflect_path = self.meta.plist_reflect_path();
        let type_info_ = crate::path::type_info_(plist_reflect_path);
        let struct_info_ = crate::path::struct_info_(plist_reflect_path);
        let named_field_ = crate::path::named_field_(plist_reflect_path);

        let field_infos = self.active_fields().map(|field| {
            let ty = &field.data.ty;
            let name = &field.name;

            let with_export_name = if field.export_name != field.name {
                let export_name = &field.export_name;
                quote!(.with_export_name(#export_name))
            } else {
                crate::utils::empty()
            };

            let with_omit_empty = if field.attrs.omit_empty.is_some() {
                quote!(.with_omit_empty(true))
            } else {
                crate::utils::empty()
            };

            quote! {
                #named_field_::new::<#ty>(#name)
                    #with_export_name
                    #with_omit_empty
            }
        });

        quote! {
            #type_info_::Struct(
                #struct_info_::new::<Self>(&[
                    #(#field_infos),*
                ])
            )
        }
    }
}
