pub use crate::config::{Result, UnitConfig, UnitEntry, UnitSection};
pub use crate::document::{Document, Section};
pub use crate::error::Error;
pub use crate::literal::{Literal, TimeSpan};
pub use crate::options::{ParserOptions, SectionParser};
pub use crate::parser::{parse, Diagnostic, UnitParser};
pub use crate::serialize::serialize;
pub use crate::value::{coerce, Number, Value};
pub use macros::{UnitConfig, UnitEntry, UnitSection};
