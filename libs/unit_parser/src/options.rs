//! Options changing how strict the parser is, loaded from TOML and the environment.
#![allow(non_snake_case)]
use crate::{config::Result, error::OptionsSnafu};
use confique::Config;
use snafu::ResultExt;
use std::path::Path;

/// Default location of the options file.
pub const PARSER_CONFIG: &str = "/etc/sysunit/parser.toml";

#[derive(Config, Default, Debug, Clone)]
pub struct ParserOptions {
    #[config(nested)]
    pub Parser: SectionParser,
}

#[derive(Config, Debug, Clone)]
pub struct SectionParser {
    /// Keys under a repeated `[Section]` header are added to the first one.
    /// When disabled, a repeated header is an error.
    #[config(env = "SYSUNIT_ALLOW_REOPENED_SECTIONS", default = true)]
    pub AllowReopenedSections: bool,
    /// Report `0` and `1` read as booleans.
    #[config(env = "SYSUNIT_WARN_AMBIGUOUS_BOOLEANS", default = true)]
    pub WarnAmbiguousBooleans: bool,
}

impl Default for SectionParser {
    fn default() -> Self {
        SectionParser {
            AllowReopenedSections: true,
            WarnAmbiguousBooleans: true,
        }
    }
}

impl ParserOptions {
    /// Loads options from the environment, then from `file` (or [PARSER_CONFIG]).
    /// Falls back to the defaults when nothing can be loaded.
    pub fn new(file: Option<&str>) -> ParserOptions {
        let builder = ParserOptions::builder().env();
        let path = file.unwrap_or(PARSER_CONFIG);
        match builder.file(path).load() {
            Ok(options) => options,
            Err(e) => {
                log::debug!("Failed to load parser options from {}: {}, using defaults.", path, e);
                ParserOptions::default()
            }
        }
    }

    /// Loads options from `path` only, reporting any failure.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<ParserOptions> {
        ParserOptions::builder()
            .file(path.as_ref())
            .load()
            .context(OptionsSnafu)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = ParserOptions::default();
        assert!(options.Parser.AllowReopenedSections);
        assert!(options.Parser.WarnAmbiguousBooleans);

        let options = ParserOptions::new(Some("/nonexistent/sysunit/parser.toml"));
        assert!(options.Parser.AllowReopenedSections);
    }

    #[test]
    fn test_load_file() {
        let file = concat!(env!("CARGO_MANIFEST_DIR"), "/config/parser.toml");
        let options = ParserOptions::load(file).unwrap();
        assert!(!options.Parser.AllowReopenedSections);
        assert!(options.Parser.WarnAmbiguousBooleans);
    }

    #[test]
    fn test_load_invalid_file() {
        let file = concat!(env!("CARGO_MANIFEST_DIR"), "/config/invalid.toml");
        assert!(ParserOptions::load(file).is_err());
    }
}
