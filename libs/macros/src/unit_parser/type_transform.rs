//! Functions for transforming or confirming types.
use syn::{GenericArgument, PathArguments, Type};

/// Determines if a [syn::Type] is a [Option].
pub(crate) fn is_option(ty: &Type) -> bool {
    get_option_inner_type(ty).is_some()
}

/// Gets `T` from a [syn::Type] written as `Option<T>`.
pub(crate) fn get_option_inner_type(ty: &Type) -> Option<&Type> {
    let typepath = match ty {
        Type::Path(typepath) if typepath.qself.is_none() => typepath,
        _ => return None,
    };
    let idents_of_path = typepath
        .path
        .segments
        .iter()
        .fold(String::new(), |mut acc, v| {
            acc.push_str(&v.ident.to_string());
            acc.push(':');
            acc
        });
    if !["Option:", "std:option:Option:", "core:option:Option:"].contains(&idents_of_path.as_str())
    {
        return None;
    }
    let segment = typepath.path.segments.last()?;
    match &segment.arguments {
        PathArguments::AngleBracketed(args) if args.args.len() == 1 => match args.args.first() {
            Some(GenericArgument::Type(inner)) => Some(inner),
            _ => None,
        },
        _ => None,
    }
}

/// Spells a variant name the way systemd writes values: `OnFailure` becomes `on-failure`.
pub(crate) fn to_kebab_case(name: &str) -> String {
    let mut result = String::with_capacity(name.len() + 4);
    for (i, c) in name.chars().enumerate() {
        if c.is_ascii_uppercase() {
            if i > 0 {
                result.push('-');
            }
            result.push(c.to_ascii_lowercase());
        } else {
            result.push(c);
        }
    }
    result
}
