//! Interfaces and functions for dealing with macro-related attributes.
use crate::unit_parser::type_transform::is_option;
use syn::{Attribute, Error, Field, LitStr, Token, Variant};

/// Attributes valid for [UnitEntry]s.
#[derive(Default)]
pub(crate) struct EntryAttributes {
    /// Whether alternative key is specified
    pub(crate) key: Option<LitStr>,
    /// Whether the entry must be present
    pub(crate) must: bool,
    /// Whether the field is a whole section embedded into this one
    pub(crate) flatten: bool,
}

impl EntryAttributes {
    /// Parses [EntryAttributes] from [syn] tokens.
    pub(crate) fn parse_attributes(input: &Field) -> syn::Result<Self> {
        let mut result = EntryAttributes::default();
        for attribute in input.attrs.iter() {
            if !attribute.path().is_ident("entry") {
                continue;
            }
            attribute.parse_nested_meta(|nested| {
                if nested.path.is_ident("key") {
                    nested.input.parse::<Token![=]>()?;
                    let value: LitStr = nested.input.parse()?;
                    result.key = Some(value);
                    Ok(())
                } else if nested.path.is_ident("must") {
                    result.must = true;
                    Ok(())
                } else if nested.path.is_ident("flatten") {
                    result.flatten = true;
                    Ok(())
                } else {
                    Err(Error::new_spanned(
                        attribute,
                        "Not a valid entry attribute.",
                    ))
                }
            })?;
        }
        if result.flatten && (result.must || result.key.is_some()) {
            return Err(Error::new_spanned(
                input,
                "`flatten` cannot co-exist with `key` or `must`.",
            ));
        }
        if result.must && is_option(&input.ty) {
            return Err(Error::new_spanned(
                input,
                "`must` attributed fields cannot be `Option`s.",
            ));
        }
        Ok(result)
    }

    /// Parses the `key` of an enum variant, the only attribute variants take.
    pub(crate) fn parse_variant(input: &Variant) -> syn::Result<Option<LitStr>> {
        let mut key = None;
        for attribute in input.attrs.iter() {
            if !attribute.path().is_ident("entry") {
                continue;
            }
            attribute.parse_nested_meta(|nested| {
                if nested.path.is_ident("key") {
                    nested.input.parse::<Token![=]>()?;
                    key = Some(nested.input.parse::<LitStr>()?);
                    Ok(())
                } else {
                    Err(Error::new_spanned(
                        attribute,
                        "Not a valid entry attribute.",
                    ))
                }
            })?;
        }
        Ok(key)
    }
}

/// Attributes valid for [UnitSection]s in a unit.
#[derive(Default)]
pub(crate) struct SectionAttributes {
    /// Whether alternative section name is specified
    pub(crate) key: Option<LitStr>,
}

impl SectionAttributes {
    /// Parses [SectionAttributes] from [syn] tokens.
    pub(crate) fn parse_attributes(input: &Field) -> syn::Result<Self> {
        let mut result = SectionAttributes::default();
        for attribute in input.attrs.iter() {
            if !attribute.path().is_ident("section") {
                continue;
            }
            attribute.parse_nested_meta(|nested| {
                if nested.path.is_ident("key") {
                    nested.input.parse::<Token![=]>()?;
                    let value: LitStr = nested.input.parse()?;
                    result.key = Some(value);
                    Ok(())
                } else {
                    Err(Error::new_spanned(
                        attribute,
                        "section, Not a valid attribute.",
                    ))
                }
            })?;
        }
        Ok(result)
    }
}

#[derive(Default)]
pub(crate) struct UnitAttributes {
    /// The suffix of a type of unit
    pub(crate) suffix: Option<LitStr>,
}

impl UnitAttributes {
    /// Parses [UnitAttributes] from [syn] tokens.
    pub(crate) fn parse_vec(input: &[Attribute]) -> syn::Result<Self> {
        let mut result = UnitAttributes::default();
        for attribute in input.iter() {
            if attribute.path().is_ident("unit") {
                attribute.parse_nested_meta(|nested| {
                    if nested.path.is_ident("suffix") {
                        nested.input.parse::<Token![=]>()?;
                        let value: LitStr = nested.input.parse()?;
                        result.suffix = Some(value);
                        Ok(())
                    } else {
                        Err(Error::new_spanned(
                            attribute,
                            "unit, Not a valid attribute.",
                        ))
                    }
                })?;
            }
        }
        Ok(result)
    }
}
