use proc_macro2::{TokenStream, TokenTree};
use quote::{ToTokens, quote};
use syn::{Ident, ImplGenerics, Path, Type, TypeGenerics};

use super::{TypeAttributes, TypeNaming};

/// Bounds added to the `where` clause of a generated impl.
#[derive(Clone, Copy, PartialEq, Eq)]
pub(crate) enum ImplBounds {
    /// `TypePath` on every type parameter.
    TypePath,
    /// Also `Reflect + Typed` on field types that mention a type parameter.
    Reflect,
    /// Same as `Reflect`, plus `GetTypeMeta` on those field types.
    Registry,
}

/// Everything about the implemented type except its fields.
pub(crate) struct ReflectMeta<'a> {
    plist_reflect_path: Path,
    attrs: TypeAttributes,
    naming: TypeNaming<'a>,
    /// Types of the visible fields, without duplicates.
    field_types: Vec<Type>,
}

impl<'a> ReflectMeta<'a> {
    #[inline]
    pub fn new(attrs: TypeAttributes, naming: TypeNaming<'a>) -> Self {
        Self {
            plist_reflect_path: crate::path::plist_reflect(),
            attrs,
            naming,
            field_types: Vec::new(),
        }
    }

    /// Called by [`ReflectStruct`](crate::derive_data::ReflectStruct).
    pub(super) fn add_field_types<'t>(&mut self, types: impl IntoIterator<Item = &'t Type>) {
        for ty in types {
            if !self.field_types.contains(ty) {
                self.field_types.push(ty.clone());
            }
        }
    }

    #[inline]
    pub fn plist_reflect_path(&self) -> &Path {
        &self.plist_reflect_path
    }

    #[inline]
    pub fn attrs(&self) -> &TypeAttributes {
        &self.attrs
    }

    #[inline]
    pub fn naming(&self) -> &TypeNaming<'a> {
        &self.naming
    }

    #[inline]
    pub fn is_generic(&self) -> bool {
        self.naming.is_generic()
    }

    #[inline]
    pub fn real_ident(&self) -> &TokenStream {
        self.naming.real()
    }

    /// Returns `impl_generics`, `ty_generics` and the `where` clause.
    ///
    /// ```ignore
    /// let real_ident = meta.real_ident();
    /// let (impl_generics, ty_generics, where_clause) = meta.split_generics(ImplBounds::Reflect);
    ///
    /// quote! {
    ///     impl #impl_generics TraitName for #real_ident #ty_generics #where_clause {}
    /// }
    /// ```
    ///
    /// Types with type parameters are also bounded by `Any + Send + Sync`,
    /// types with only lifetimes by `'static`.
    pub fn split_generics(
        &self,
        bounds: ImplBounds,
    ) -> (ImplGenerics<'a>, TypeGenerics<'a>, TokenStream) {
        use crate::path::fp::{AnyFP, SendFP, SyncFP};

        let generics = self.naming.generics();
        let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

        let mut predicates: Vec<TokenStream> = match where_clause {
            Some(clause) => clause.predicates.iter().map(ToTokens::to_token_stream).collect(),
            None => Vec::new(),
        };

        if generics.type_params().next().is_some() {
            predicates.push(quote!(Self: #AnyFP + #SendFP + #SyncFP));
        } else if generics.lifetimes().next().is_some() {
            predicates.push(quote!(Self: 'static));
        }

        let type_path_ = crate::path::type_path_(&self.plist_reflect_path);
        predicates.extend(generics.type_params().map(|param| {
            let ident = &param.ident;
            quote!(#ident: #type_path_)
        }));

        if bounds != ImplBounds::TypePath {
            predicates.extend(self.field_type_predicates(bounds));
        }

        (impl_generics, ty_generics, quote!(where #(#predicates),*))
    }

    fn field_type_predicates(&self, bounds: ImplBounds) -> Vec<TokenStream> {
        let params: Vec<&Ident> = self
            .naming
            .generics()
            .type_params()
            .map(|param| &param.ident)
            .collect();
        if params.is_empty() {
            return Vec::new();
        }

        let reflect_ = crate::path::reflect_(&self.plist_reflect_path);
        let typed_ = crate::path::typed_(&self.plist_reflect_path);
        let get_type_meta = match bounds {
            ImplBounds::Registry => {
                let get_type_meta_ = crate::path::get_type_meta_(&self.plist_reflect_path);
                quote!(+ #get_type_meta_)
            }
            _ => crate::utils::empty(),
        };

        self.field_types
            .iter()
            .filter(|ty| mentions_any(ty.to_token_stream(), &params))
            .map(|ty| quote!(#ty: #reflect_ + #typed_ #get_type_meta))
            .collect()
    }

    /// `TypeInfo` of an opaque type.
    pub fn to_info_tokens(&self) -> TokenStream {
        let opaque_info_ = crate::path::opaque_info_(&self.plist_reflect_path);
        let type_info_ = crate::path::type_info_(&self.plist_reflect_path);

        quote! {
            #type_info_::Opaque(#opaque_info_::new::<Self>())
        }
    }
}

fn mentions_any(tokens: TokenStream, idents: &[&Ident]) -> bool {
    tokens.into_iter().any(|tree| match tree {
        TokenTree::Ident(ident) => idents.contains(&&ident),
        TokenTree::Group(group) => mentions_any(group.stream(), idents),
        _ => false,
    })
}
