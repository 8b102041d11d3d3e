//! Functions for generating section reading and writing expressions.
use crate::unit_parser::entry::EntryField;
use proc_macro2::TokenStream;
use quote::quote;
use syn::{Data, DeriveInput, Error, Result};

/// Generate [UnitSection] implementations when using `#[derive(UnitSection)]`
pub fn gen_section_derives(input: DeriveInput) -> Result<TokenStream> {
    let mut recognizes = Vec::new();
    let mut reads = Vec::new();
    let mut writes = Vec::new();
    let mut set_arms = Vec::new();
    let mut set_flattens = Vec::new();

    if let Data::Struct(data_struct) = &input.data {
        for field in &data_struct.fields {
            let entry = EntryField::new(field)?;
            recognizes.push(entry.gen_recognize());
            reads.push(entry.gen_read());
            writes.push(entry.gen_write());
            if entry.is_flatten() {
                set_flattens.push(entry.gen_set());
            } else {
                set_arms.push(entry.gen_set());
            }
        }
    } else {
        return Err(Error::new_spanned(
            input,
            "A UnitSection cannot be an enum or an union.",
        ));
    }

    let ident = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let result = quote! {
        impl #impl_generics unit_parser::internal::UnitSection for #ident #ty_generics #where_clause {
            fn recognizes(__key: &str) -> bool {
                false #( || #recognizes )*
            }

            fn read_section(
                __section: &unit_parser::internal::Section,
                __name: &str,
            ) -> unit_parser::internal::Result<Self> {
                #[allow(unused_mut)]
                let mut __res = <Self as ::std::default::Default>::default();
                #( #reads )*
                Ok(__res)
            }

            fn write_section(&self, __out: &mut unit_parser::internal::Section) {
                #( #writes )*
            }

            fn set_value(
                &mut self,
                __name: &str,
                __key: &str,
                __value: ::std::option::Option<&unit_parser::internal::Value>,
            ) -> unit_parser::internal::Result<bool> {
                match __key {
                    #( #set_arms )*
                    _ => {}
                }
                #( #set_flattens )*
                Ok(false)
            }
        }
    };

    Ok(result)
}
