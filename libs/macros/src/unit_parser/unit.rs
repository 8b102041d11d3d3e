//! Functions for generating unit reading and writing expressions.
use crate::unit_parser::{
    attribute::{SectionAttributes, UnitAttributes},
    type_transform::get_option_inner_type,
};
use proc_macro2::TokenStream;
use quote::{quote, ToTokens};
use syn::{ext::IdentExt, Data, DeriveInput, Error, Field, LitStr};

/// The pieces generated for one section of a unit.
struct SectionParts {
    key: LitStr,
    read: TokenStream,
    write: TokenStream,
    set: TokenStream,
}

/// Generate the pieces for one section field. `Option` fields are optional sections.
/// example:
/// ```ignore
/// Section1: match __doc.section("Section1") {
///     Some(__section) => Some(unit_parser::internal::UnitSection::from_section(__section, "Section1")?),
///     None => None,
/// }
/// ```
fn gen_section(field: &Field) -> syn::Result<SectionParts> {
    let name = field
        .ident
        .as_ref()
        .ok_or_else(|| Error::new_spanned(field, "Tuple structs are not supported."))?;
    let attributes = SectionAttributes::parse_attributes(field)?;
    let key = attributes
        .key
        .unwrap_or_else(|| LitStr::new(&name.unraw().to_string(), name.span()));

    let parts = match get_option_inner_type(&field.ty) {
        Some(inner) => SectionParts {
            read: quote! {
                #name: match __doc.section(#key) {
                    Some(__section) => Some(
                        <#inner as unit_parser::internal::UnitSection>::from_section(__section, #key)?,
                    ),
                    None => None,
                }
            },
            write: quote! {
                if let Some(__section) = &self.#name {
                    __doc.insert_section(#key, unit_parser::internal::UnitSection::to_section(__section));
                }
            },
            set: quote! {
                #key => {
                    if !<#inner as unit_parser::internal::UnitSection>::recognizes(__key) {
                        return Err(unit_parser::internal::Error::UnknownEntryError {
                            key: __key.to_string(),
                            section: __section.to_string(),
                        });
                    }
                    let __target = self.#name.get_or_insert_with(::std::default::Default::default);
                    unit_parser::internal::UnitSection::set_property(__target, #key, __key, __value)
                }
            },
            key,
        },
        None => {
            let ty = &field.ty;
            SectionParts {
                read: quote! {
                    #name: match __doc.section(#key) {
                        Some(__section) => {
                            <#ty as unit_parser::internal::UnitSection>::from_section(__section, #key)?
                        }
                        None => {
                            return Err(unit_parser::internal::Error::SectionMissingError {
                                key: #key.to_string(),
                            })
                        }
                    }
                },
                write: quote! {
                    __doc.insert_section(#key, unit_parser::internal::UnitSection::to_section(&self.#name));
                },
                set: quote! {
                    #key => unit_parser::internal::UnitSection::set_property(&mut self.#name, #key, __key, __value),
                },
                key,
            }
        }
    };
    Ok(parts)
}

/// Generate [UnitConfig] implementations when using `#[derive(UnitConfig)]`
pub fn gen_unit_derives(input: DeriveInput) -> syn::Result<TokenStream> {
    let attributes = UnitAttributes::parse_vec(&input.attrs)?;
    let mut keys = Vec::new();
    let mut reads = Vec::new();
    let mut writes = Vec::new();
    let mut sets = Vec::new();

    if let Data::Struct(data_struct) = &input.data {
        for field in &data_struct.fields {
            let parts = gen_section(field)?;
            keys.push(parts.key);
            reads.push(parts.read);
            writes.push(parts.write);
            sets.push(parts.set);
        }
    } else {
        return Err(Error::new_spanned(
            &input,
            "A UnitConfig cannot be an enum or an union.",
        ));
    }

    let ident = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let suffix = attributes
        .suffix
        .map_or(quote! {""}, |x| x.to_token_stream());

    let result = quote! {
        impl #impl_generics unit_parser::internal::UnitConfig for #ident #ty_generics #where_clause {
            const SUFFIX: &'static str = #suffix;

            fn from_document(
                __doc: &unit_parser::internal::Document,
            ) -> unit_parser::internal::Result<Self> {
                for (__name, _) in __doc.sections() {
                    if !(false #( || __name == #keys )*) {
                        return Err(unit_parser::internal::Error::UnknownSectionError {
                            key: __name.to_string(),
                        });
                    }
                }
                Ok(Self {
                    #( #reads ),*
                })
            }

            fn to_document(&self) -> unit_parser::internal::Document {
                let mut __doc = unit_parser::internal::Document::new();
                #( #writes )*
                __doc
            }

            fn set_property(
                &mut self,
                __section: &str,
                __key: &str,
                __value: &str,
            ) -> unit_parser::internal::Result<()> {
                match __section {
                    #( #sets )*
                    _ => Err(unit_parser::internal::Error::UnknownSectionError {
                        key: __section.to_string(),
                    }),
                }
            }
        }
    };

    Ok(result)
}
