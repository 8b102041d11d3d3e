// Copyright (c) 2022 Huawei Technologies Co.,Ltd. All rights reserved.
//
// sysMaster is licensed under Mulan PSL v2.
// You can use this software according to the terms and conditions of the Mulan
// PSL v2.
// You may obtain a copy of Mulan PSL v2 at:
//         http://license.coscl.org.cn/MulanPSL2
// THIS SOFTWARE IS PROVIDED ON AN "AS IS" BASIS, WITHOUT WARRANTIES OF ANY
// KIND, EITHER EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO
// NON-INFRINGEMENT, MERCHANTABILITY OR FIT FOR A PARTICULAR PURPOSE.
// See the Mulan PSL v2 for more details.

//! This crate provides the derive macros of `unit_parser`.
//! ```ignore
//! use unit_parser::prelude::*;
//!
//! #[derive(UnitConfig, Default)]
//! #[unit(suffix = "service")]
//! struct MyUnit {
//!     Unit: Option<SectionUnit>,
//!     Service: SectionService,
//! }
//!
//! #[derive(UnitSection, Default)]
//! struct SectionService {
//!     #[entry(must)]
//!     ExecStart: Vec<String>,
//!     Type: Option<ServiceType>,
//!     #[entry(flatten)]
//!     Kill: SectionKill,
//! }
//!
//! #[derive(UnitEntry)]
//! enum ServiceType {
//!     Simple,
//!     Oneshot,
//! }
//! ```

mod unit_parser;

use proc_macro::TokenStream;
use syn::{parse_macro_input, DeriveInput};

/// proc-macro UnitConfig, each field of the struct is a section of the unit.
/// `Option` fields are optional sections, others are mandatory.
#[proc_macro_derive(UnitConfig, attributes(unit, section))]
pub fn unit_config_derive(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    unit_parser::gen_unit_derives(input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

/// proc-macro UnitSection, each field of the struct is an entry of the section,
/// or a whole embedded section with `#[entry(flatten)]`.
#[proc_macro_derive(UnitSection, attributes(entry))]
pub fn unit_section_derive(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    unit_parser::gen_section_derives(input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

/// proc-macro UnitEntry, for enums of unit variants written in kebab-case.
#[proc_macro_derive(UnitEntry, attributes(entry))]
pub fn unit_entry_derive(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    unit_parser::gen_entry_derives(input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}
