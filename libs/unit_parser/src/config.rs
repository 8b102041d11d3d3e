//! Definitions for the traits a typed unit implements on top of [Document].
use crate::{
    document::{Document, Section},
    error::{EntryMissingSnafu, Error, UnknownEntrySnafu, ValueShapeSnafu},
    parser::UnitParser,
    serialize::serialize,
    value::{coerce, coerce_token, Number, Value},
};
use std::borrow::Cow;

/// Result of a [UnitParser].
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// The trait that needs to be implemented on the most-outer struct,
/// representing a type of unit. Each field is a section.
pub trait UnitConfig: Sized {
    /// The suffix of a type of unit, parsed from an attribute.
    const SUFFIX: &'static str;

    /// Builds the unit from a parsed document. Unknown sections and missing
    /// mandatory sections are errors.
    fn from_document(doc: &Document) -> Result<Self>;

    /// Renders the unit as a document, leaving out unset sections and entries.
    fn to_document(&self) -> Document;

    /// Sets one entry from its textual value, as if `key=value` was written in
    /// `section`. An empty value resets the entry.
    fn set_property(&mut self, section: &str, key: &str, value: &str) -> Result<()>;

    /// Parses unit file text into the unit.
    fn parse_unit(text: &str) -> Result<Self> {
        let doc = UnitParser::default().parse(text)?;
        Self::from_document(&doc)
    }

    /// Serializes the unit into unit file text.
    fn to_unit_string(&self) -> String {
        serialize(&self.to_document())
    }
}

/// The trait that needs to be implemented on each section of the unit.
pub trait UnitSection: Sized + Default {
    /// Whether `key` belongs to this section, embedded sections included.
    fn recognizes(key: &str) -> bool;

    /// Reads the known entries of `section`, ignoring others.
    /// `name` is the name of the section in the file, used in errors.
    fn read_section(section: &Section, name: &str) -> Result<Self>;

    /// Writes every set entry into `out`.
    fn write_section(&self, out: &mut Section);

    /// Sets the entry `key` from a value, [None] resetting it to its default.
    /// Returns `Ok(false)` when the key does not belong to this section.
    fn set_value(&mut self, name: &str, key: &str, value: Option<&Value>) -> Result<bool>;

    /// Reads `section`, rejecting keys this section does not know.
    fn from_section(section: &Section, name: &str) -> Result<Self> {
        if let Some(key) = section.keys().find(|key| !Self::recognizes(key)) {
            return UnknownEntrySnafu {
                key: key.as_str(),
                section: name,
            }
            .fail();
        }
        Self::read_section(section, name)
    }

    /// Renders this section.
    fn to_section(&self) -> Section {
        let mut out = Section::new();
        self.write_section(&mut out);
        out
    }

    /// Sets one entry from its textual value. An empty value resets the entry.
    fn set_property(&mut self, name: &str, key: &str, value: &str) -> Result<()> {
        let value = value.trim();
        let value = if value.is_empty() {
            None
        } else {
            Some(coerce(value))
        };
        if self.set_value(name, key, value.as_ref())? {
            Ok(())
        } else {
            UnknownEntrySnafu { key, section: name }.fail()
        }
    }
}

/// The trait that needs to be implemented on each entry of the unit.
/// To add support for a custom type, implement both conversions;
/// returning [None] from [UnitEntry::to_value] leaves the key out.
pub trait UnitEntry: Sized {
    /// What the entry expects, used in errors.
    const SHAPE: &'static str;

    /// Converts a stored value, [None] if it has the wrong shape.
    fn from_value(value: &Value) -> Option<Self>;

    /// Converts into a value to store, [None] to omit the key.
    fn to_value(&self) -> Option<Value>;
}

/// Text of a single value as it would be written. Lists have none.
pub fn scalar_text(value: &Value) -> Option<Cow<'_, str>> {
    match value {
        Value::Bool(true) => Some(Cow::Borrowed("yes")),
        Value::Bool(false) => Some(Cow::Borrowed("no")),
        Value::Number(n) => Some(Cow::Borrowed(n.as_str())),
        Value::String(s) => Some(Cow::Borrowed(s)),
        Value::StringList(_) => None,
    }
}

/// The value a token reads as, without reporting ambiguous booleans.
pub fn value_of(token: &str) -> Value {
    coerce_token(token).0
}

/// The error for a value of `key` that `expected` something else.
pub fn shape_error(section: &str, key: &str, expected: &'static str, value: &Value) -> Error {
    let value = match value {
        Value::StringList(list) => format!("[{}]", list.join(", ")),
        other => scalar_text(other).map(Cow::into_owned).unwrap_or_default(),
    };
    ValueShapeSnafu {
        key,
        section,
        expected,
        value,
    }
    .build()
}

/// The error for a mandatory `key` absent from `section`.
pub fn missing_error(section: &str, key: &str) -> Error {
    EntryMissingSnafu { key, section }.build()
}

/// Strings take any single value in its written form. An empty string is unset.
impl UnitEntry for String {
    const SHAPE: &'static str = "a single value";

    fn from_value(value: &Value) -> Option<Self> {
        scalar_text(value).map(Cow::into_owned)
    }

    fn to_value(&self) -> Option<Value> {
        if self.is_empty() {
            None
        } else {
            Some(Value::String(self.clone()))
        }
    }
}

/// Booleans according to systemd spellings.
impl UnitEntry for bool {
    const SHAPE: &'static str = "a boolean";

    fn from_value(value: &Value) -> Option<Self> {
        value.as_bool()
    }

    fn to_value(&self) -> Option<Value> {
        Some(Value::Bool(*self))
    }
}

/// A key that may be written once or several times.
impl UnitEntry for Vec<String> {
    const SHAPE: &'static str = "a string or a list of strings";

    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::StringList(list) => Some(list.clone()),
            other => scalar_text(other).map(|s| vec![s.into_owned()]),
        }
    }

    fn to_value(&self) -> Option<Value> {
        match self.len() {
            0 => None,
            1 => Some(Value::String(self[0].clone())),
            _ => Some(Value::StringList(self.clone())),
        }
    }
}

/// Unset entries are left out.
impl<T: UnitEntry> UnitEntry for Option<T> {
    const SHAPE: &'static str = T::SHAPE;

    fn from_value(value: &Value) -> Option<Self> {
        T::from_value(value).map(Some)
    }

    fn to_value(&self) -> Option<Value> {
        self.as_ref().and_then(T::to_value)
    }
}

impl UnitEntry for f64 {
    const SHAPE: &'static str = "a number";

    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Number(n) => Some(n.value()),
            // `0` and `1` read as booleans
            Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
            _ => None,
        }
    }

    fn to_value(&self) -> Option<Value> {
        Number::from_f64(*self).map(Value::Number)
    }
}

/// Implement [UnitEntry] for integer types.
macro_rules! impl_for_integers {
    ($($typ:ty),+) => {
        $(
            impl UnitEntry for $typ {
                const SHAPE: &'static str = "an integer";

                fn from_value(value: &Value) -> Option<Self> {
                    match value {
                        Value::Number(n) => n.as_str().trim_start_matches('+').parse::<$typ>().ok(),
                        // `0` and `1` read as booleans
                        Value::Bool(b) => Some(*b as $typ),
                        _ => None,
                    }
                }

                fn to_value(&self) -> Option<Value> {
                    Some(Value::Number(Number::from(*self)))
                }
            }
        )+
    };
}

impl_for_integers!(i8, i16, i32, i64, u8, u16, u32, u64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string_entry() {
        assert_eq!(String::from_value(&value_of("abc")), Some("abc".to_string()));
        assert_eq!(String::from_value(&value_of("on")), Some("yes".to_string()));
        assert_eq!(String::from_value(&value_of("0022")), Some("0022".to_string()));
        assert_eq!(
            String::from_value(&Value::StringList(vec!["a".into(), "b".into()])),
            None
        );
        assert_eq!(String::new().to_value(), None);
    }

    #[test]
    fn test_bool_entry() {
        assert_eq!(bool::from_value(&value_of("off")), Some(false));
        assert_eq!(bool::from_value(&value_of("1")), Some(true));
        assert_eq!(bool::from_value(&value_of("maybe")), None);
        assert_eq!(true.to_value(), Some(Value::Bool(true)));
    }

    #[test]
    fn test_integer_entry() {
        assert_eq!(u32::from_value(&value_of("90")), Some(90));
        assert_eq!(u32::from_value(&value_of("+90")), Some(90));
        assert_eq!(i32::from_value(&value_of("-5")), Some(-5));
        assert_eq!(u32::from_value(&value_of("-5")), None);
        assert_eq!(u32::from_value(&value_of("1.5")), None);
        assert_eq!(u32::from_value(&value_of("1")), Some(1));
        assert_eq!(u8::from_value(&value_of("300")), None);
        assert_eq!(u64::from_value(&value_of("90s")), None);
        assert_eq!(7u32.to_value(), Some(Value::from(7u32)));
    }

    #[test]
    fn test_float_entry() {
        assert_eq!(f64::from_value(&value_of("2.5")), Some(2.5));
        assert_eq!(f64::NAN.to_value(), None);
    }

    #[test]
    fn test_list_entry() {
        let list = Value::StringList(vec!["a".into(), "b".into()]);
        assert_eq!(
            Vec::<String>::from_value(&list),
            Some(vec!["a".to_string(), "b".to_string()])
        );
        assert_eq!(
            Vec::<String>::from_value(&value_of("8080")),
            Some(vec!["8080".to_string()])
        );
        assert_eq!(Vec::<String>::new().to_value(), None);
        assert_eq!(vec!["a".to_string()].to_value(), Some(Value::from("a")));
        assert_eq!(
            vec!["a".to_string(), "b".to_string()].to_value(),
            Some(list)
        );
    }

    #[test]
    fn test_option_entry() {
        assert_eq!(Option::<bool>::from_value(&value_of("yes")), Some(Some(true)));
        assert_eq!(Option::<bool>::from_value(&value_of("x")), None);
        assert_eq!(Option::<String>::None.to_value(), None);
        assert_eq!(Option::<bool>::SHAPE, "a boolean");
    }
}
