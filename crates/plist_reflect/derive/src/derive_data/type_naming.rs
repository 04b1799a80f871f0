use proc_macro2::TokenStream;
use quote::{ToTokens, quote};
use syn::{GenericParam, Generics, Ident, Path, ext::IdentExt, spanned::Spanned};

/// Where the module part of a `type_path` comes from.
enum Module {
    /// `module_path!()` at the definition site.
    Caller,
    /// Written out by the caller, e.g. `alloc::vec`.
    Fixed(String),
    /// Primitives.
    Absent,
}

/// How the implemented type is named, in code and in `TypePath`.
pub(crate) struct TypeNaming<'a> {
    /// The type in `impl ... for #real`, without generics.
    real: TokenStream,
    /// Last path segment, raw prefix removed.
    ident: String,
    module: Module,
    generics: &'a Generics,
}

impl<'a> TypeNaming<'a> {
    /// A type defined next to its `#[derive(Reflect)]`.
    ///
    /// `custom` is the `type_path` attribute. A single segment only renames
    /// the type, longer paths also replace the module.
    pub fn local(ident: &Ident, custom: Option<&Path>, generics: &'a Generics) -> Self {
        let (module, name) = match custom {
            Some(path) => match split_last(path) {
                (module, name) if module.is_empty() => (Module::Caller, name),
                (module, name) => (Module::Fixed(module), name),
            },
            None => (Module::Caller, ident.unraw().to_string()),
        };

        Self {
            real: ident.to_token_stream(),
            ident: name,
            module,
            generics,
        }
    }

    /// A type named by `impl_type_path!` or `impl_reflect_opaque!`.
    ///
    /// Full paths start with `::`, which is not part of the output. A single
    /// segment without it names a primitive.
    pub fn foreign(path: &Path, generics: &'a Generics) -> syn::Result<Self> {
        let (module, name) = split_last(path);
        let module = match (path.leading_colon.is_some(), path.segments.len()) {
            (true, _) if !module.is_empty() => Module::Fixed(module),
            (_, 1) => Module::Absent,
            _ => {
                return Err(syn::Error::new(
                    path.span(),
                    "expected a primitive or a full path starting with `::`",
                ));
            }
        };

        Ok(Self {
            real: path.to_token_stream(),
            ident: name,
            module,
            generics,
        })
    }

    #[inline]
    pub fn real(&self) -> &TokenStream {
        &self.real
    }

    #[inline]
    pub fn generics(&self) -> &'a Generics {
        self.generics
    }

    /// Type or const parameters make the names depend on the instantiation.
    pub fn is_generic(&self) -> bool {
        self.generics
            .params
            .iter()
            .any(|param| !matches!(param, GenericParam::Lifetime(_)))
    }

    /// Expression for `TypePath::type_path` (`full`) or `TypePath::type_name`.
    ///
    /// A `&'static str` for non-generic types, a `String` otherwise.
    pub fn to_name_tokens(&self, plist_reflect_path: &Path, full: bool) -> TokenStream {
        let ident = &self.ident;
        let head = match &self.module {
            Module::Caller if full => {
                let tail = format!("::{ident}");
                quote!(::core::concat!(::core::module_path!(), #tail))
            }
            Module::Fixed(module) if full => {
                let path = format!("{module}::{ident}");
                quote!(#path)
            }
            _ => quote!(#ident),
        };

        if !self.is_generic() {
            return head;
        }

        let type_path_ = crate::path::type_path_(plist_reflect_path);
        let macro_utils_ = crate::path::macro_utils_(plist_reflect_path);
        let name_fn = if full {
            quote!(type_path)
        } else {
            quote!(type_name)
        };

        let args = self
            .generics
            .params
            .iter()
            .filter_map(|param| match param {
                GenericParam::Type(param) => {
                    let ident = &param.ident;
                    Some(quote!(<#ident as #type_path_>::#name_fn()))
                }
                GenericParam::Const(param) => {
                    let ident = &param.ident;
                    Some(quote!(#macro_utils_::ToString::to_string(&#ident).as_str()))
                }
                GenericParam::Lifetime(_) => None,
            })
            .enumerate()
            .map(|(index, arg)| match index {
                0 => arg,
                _ => quote!(", ", #arg),
            });

        quote! {
            #macro_utils_::__concat(&[#head, "<", #(#args,)* ">"])
        }
    }
}

/// Splits `a::b::C` into `("a::b", "C")`.
fn split_last(path: &Path) -> (String, String) {
    let mut idents: Vec<String> = path
        .segments
        .iter()
        .map(|segment| segment.ident.unraw().to_string())
        .collect();
    let last = idents.pop().unwrap_or_default();
    (idents.join("::"), last)
}
