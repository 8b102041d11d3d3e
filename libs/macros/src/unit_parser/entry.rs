//! Functions for generating entry reading and writing expressions.
use crate::unit_parser::{attribute::EntryAttributes, type_transform::to_kebab_case};
use proc_macro2::TokenStream;
use quote::quote;
use syn::{ext::IdentExt, Data, DeriveInput, Error, Field, Fields, Ident, LitStr, Result};

/// A field of a section, with its attributes parsed.
pub(crate) struct EntryField<'a> {
    name: &'a Ident,
    field: &'a Field,
    key: LitStr,
    attributes: EntryAttributes,
}

impl<'a> EntryField<'a> {
    pub(crate) fn new(field: &'a Field) -> Result<Self> {
        let name = field
            .ident
            .as_ref()
            .ok_or_else(|| Error::new_spanned(field, "Tuple structs are not supported."))?;
        let mut attributes = EntryAttributes::parse_attributes(field)?;
        let key = attributes
            .key
            .take()
            .unwrap_or_else(|| LitStr::new(&name.unraw().to_string(), name.span()));
        Ok(EntryField {
            name,
            field,
            key,
            attributes,
        })
    }

    /// Generate the expression telling whether a key belongs to this field.
    /// example:
    /// ```ignore
    /// __key == "Field1"
    /// ```
    pub(crate) fn gen_recognize(&self) -> TokenStream {
        let ty = &self.field.ty;
        let key = &self.key;
        if self.attributes.flatten {
            quote! { <#ty as unit_parser::internal::UnitSection>::recognizes(__key) }
        } else {
            quote! { __key == #key }
        }
    }

    /// Generate statements reading the field out of `__section` into `__res`.
    /// example:
    /// ```ignore
    /// if let Some(__value) = __section.get("Field1") {
    ///     __res.Field1 = match unit_parser::internal::UnitEntry::from_value(__value) {
    ///         Some(__inner) => __inner,
    ///         None => return Err(...),
    ///     };
    /// }
    /// ```
    pub(crate) fn gen_read(&self) -> TokenStream {
        let name = self.name;
        let ty = &self.field.ty;
        let key = &self.key;
        if self.attributes.flatten {
            return quote! {
                __res.#name = <#ty as unit_parser::internal::UnitSection>::read_section(__section, __name)?;
            };
        }
        let missing = if self.attributes.must {
            quote! {
                return Err(unit_parser::internal::missing_error(__name, #key));
            }
        } else {
            quote! {}
        };
        let convert = self.gen_convert();
        quote! {
            match __section.get(#key) {
                Some(__value) => {
                    __res.#name = #convert;
                }
                None => {
                    #missing
                }
            }
        }
    }

    /// Generate statements writing the field into `__out`, leaving unset values out.
    pub(crate) fn gen_write(&self) -> TokenStream {
        let name = self.name;
        let key = &self.key;
        if self.attributes.flatten {
            return quote! {
                unit_parser::internal::UnitSection::write_section(&self.#name, __out);
            };
        }
        quote! {
            if let Some(__value) = unit_parser::internal::UnitEntry::to_value(&self.#name) {
                __out.insert(#key, __value);
            }
        }
    }

    /// Generate the `match __key` arm setting the field, or the statement trying the
    /// embedded section for flattened fields.
    pub(crate) fn gen_set(&self) -> TokenStream {
        let name = self.name;
        let key = &self.key;
        if self.attributes.flatten {
            return quote! {
                if unit_parser::internal::UnitSection::set_value(&mut self.#name, __name, __key, __value)? {
                    return Ok(true);
                }
            };
        }
        let convert = self.gen_convert();
        quote! {
            #key => {
                self.#name = match __value {
                    None => ::std::default::Default::default(),
                    Some(__value) => #convert,
                };
                return Ok(true);
            }
        }
    }

    pub(crate) fn is_flatten(&self) -> bool {
        self.attributes.flatten
    }

    /// Converts `__value`, returning a shape error from the function if it does not fit.
    fn gen_convert(&self) -> TokenStream {
        let ty = &self.field.ty;
        let key = &self.key;
        quote! {
            match <#ty as unit_parser::internal::UnitEntry>::from_value(__value) {
                Some(__inner) => __inner,
                None => return Err(unit_parser::internal::shape_error(
                    __name,
                    #key,
                    <#ty as unit_parser::internal::UnitEntry>::SHAPE,
                    __value,
                )),
            }
        }
    }
}

/// Generate implementation statements for custom enums.
/// Each variant is written in kebab-case, unless `#[entry(key = "...")]` says otherwise.
pub(crate) fn gen_entry_derives(input: DeriveInput) -> Result<TokenStream> {
    let inner = match &input.data {
        Data::Enum(inner) => inner,
        _ => {
            return Err(Error::new_spanned(
                &input,
                "UnitEntry can only be derived on enum definitions.",
            ))
        }
    };
    if inner.variants.is_empty() {
        return Err(Error::new_spanned(
            &input,
            "UnitEntry cannot be derived on an enum without variants.",
        ));
    }

    let mut variants = Vec::new();
    let mut values = Vec::new();
    for variant in inner.variants.iter() {
        if !matches!(variant.fields, Fields::Unit) {
            return Err(Error::new_spanned(
                variant,
                "UnitEntry variants cannot carry data.",
            ));
        }
        let value = EntryAttributes::parse_variant(variant)?
            .map(|key| key.value())
            .unwrap_or_else(|| to_kebab_case(&variant.ident.unraw().to_string()));
        variants.push(&variant.ident);
        values.push(value);
    }
    let shape = format!("one of {}", values.join(", "));

    let ident = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    Ok(quote! {
        impl #impl_generics unit_parser::internal::UnitEntry for #ident #ty_generics #where_clause {
            const SHAPE: &'static str = #shape;

            fn from_value(__value: &unit_parser::internal::Value) -> ::std::option::Option<Self> {
                let __text = unit_parser::internal::scalar_text(__value)?;
                match &*__text {
                    #( #values => Some(Self::#variants), )*
                    _ => None,
                }
            }

            fn to_value(&self) -> ::std::option::Option<unit_parser::internal::Value> {
                let __text = match self {
                    #( Self::#variants => #values, )*
                };
                Some(unit_parser::internal::value_of(__text))
            }
        }
    })
}
