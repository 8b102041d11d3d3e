//! Definitions for all possible errors used in this crate.
use snafu::Snafu;

/// Errors used in crate.
#[derive(Debug, Snafu)]
#[allow(missing_docs)]
#[snafu(visibility(pub))]
pub enum Error {
    #[snafu(display("Unit file is empty."))]
    EmptyInputError,

    #[snafu(display("Malformed line {}: {:?}.", line, content))]
    MalformedLineError { line: usize, content: String },

    #[snafu(display("Entry {} on line {} appears before any section header.", key, line))]
    NoSectionError { line: usize, key: String },

    #[snafu(display(
        "Entry {} in section {} is repeated, but only string values may repeat.",
        key,
        section
    ))]
    RepeatedNonStringKeyError { key: String, section: String },

    #[snafu(display("Section {} is opened again on line {}.", section, line))]
    ReopenedSectionError { section: String, line: usize },

    #[snafu(display("Missing section with key {}, which is required.", key))]
    SectionMissingError { key: String },

    #[snafu(display("{} is not a valid section.", key))]
    UnknownSectionError { key: String },

    #[snafu(display("Missing entry with key {} in section {}, which is required.", key, section))]
    EntryMissingError { key: String, section: String },

    #[snafu(display("{} is not a valid key in section {}.", key, section))]
    UnknownEntryError { key: String, section: String },

    #[snafu(display(
        "Entry {} in section {} should be {}, found {}.",
        key,
        section,
        expected,
        value
    ))]
    ValueShapeError {
        key: String,
        section: String,
        expected: &'static str,
        value: String,
    },

    #[snafu(display("Failed to load parser options: {}.", source))]
    OptionsError { source: confique::Error },
}
