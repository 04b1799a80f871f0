use syn::{Data, DeriveInput, Fields, spanned::Spanned};

use super::{ReflectMeta, ReflectStruct, StructField, TypeAttributes, TypeNaming};

/// The shape a derived type is reflected as.
pub(crate) enum ReflectDerive<'a> {
    /// Named-field and unit structs.
    Struct(ReflectStruct<'a>),
    /// Tuple structs, enums and `#[reflect(Opaque)]` types.
    Opaque(ReflectMeta<'a>),
}

impl<'a> ReflectDerive<'a> {
    pub fn from_input(input: &'a DeriveInput) -> syn::Result<Self> {
        let type_attributes = TypeAttributes::parse_attrs(&input.attrs)?;

        let naming = TypeNaming::local(
            &input.ident,
            type_attributes.type_path.as_ref(),
            &input.generics,
        );

        let meta = ReflectMeta::new(type_attributes, naming);

        if meta.attrs().is_opaque.is_some() {
            return Ok(Self::Opaque(meta));
        }

        match &input.data {
            Data::Struct(data) => match &data.fields {
                Fields::Named(fields) => {
                    let fields = fields
                        .named
                        .iter()
                        .map(StructField::new)
                        .collect::<syn::Result<Vec<_>>>()?;
                    Ok(Self::Struct(ReflectStruct::new(meta, fields)?))
                }
                Fields::Unit => Ok(Self::Struct(ReflectStruct::new(meta, Vec::new())?)),
                Fields::Unnamed(_) => Ok(Self::Opaque(meta)),
            },
            Data::Enum(_) => Ok(Self::Opaque(meta)),
            Data::Union(_) => Err(syn::Error::new(
                input.span(),
                "reflection on unions is not supported",
            )),
        }
    }
}
