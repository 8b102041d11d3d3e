//! Interfaces for use in macro-generated code.
pub use crate::config::{
    missing_error, scalar_text, shape_error, value_of, Result, UnitConfig, UnitEntry, UnitSection,
};
pub use crate::document::{Document, Section};
pub use crate::error::Error;
pub use crate::literal::{Literal, TimeSpan};
pub use crate::value::{coerce, Value};
