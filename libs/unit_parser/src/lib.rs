//! Crate for parsing and writing systemd-style unit files.
//! This crate provides the [Document] model of a unit file, the codec between it and
//! unit file text, and a serde-like macro system for defining structs that represent
//! units on top of it.
//!
//! [Document]: document::Document

// lets the derive macros be used inside this crate's tests
extern crate self as unit_parser;

pub mod config;
pub mod document;
pub mod error;
pub mod literal;
pub mod options;
pub mod parser;
pub mod serialize;
pub mod value;

/// All public interfaces for normal usage.
/// Use `use unit_parser::prelude::*;` to include.
pub mod prelude;

/// Internal interfaces, should only be used in macro generated code.
#[doc(hidden)]
pub mod internal;
