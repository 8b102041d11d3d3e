//! Entries kept as written: systemd-style time spans, limits and user ids.
use crate::{
    config::UnitEntry,
    value::{Number, Value},
};
use std::{fmt, ops::Deref};

/// Text of a scalar where the numeric tokens `0` and `1` read back as digits.
fn literal_text(value: &Value) -> Option<String> {
    match value {
        Value::Bool(false) => Some("0".to_string()),
        Value::Bool(true) => Some("1".to_string()),
        Value::Number(n) => Some(n.as_str().to_string()),
        Value::String(s) => Some(s.clone()),
        Value::StringList(_) => None,
    }
}

/// Implement a text newtype and its [UnitEntry] conversions.
macro_rules! literal_entry {
    ($(#[$doc:meta])* $name:ident, $shape:literal) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
        pub struct $name(String);

        impl $name {
            /// The text as written.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl UnitEntry for $name {
            const SHAPE: &'static str = $shape;

            fn from_value(value: &Value) -> Option<Self> {
                literal_text(value).map($name)
            }

            fn to_value(&self) -> Option<Value> {
                if self.0.is_empty() {
                    return None;
                }
                Some(match Number::parse(&self.0) {
                    Some(n) => Value::Number(n),
                    None => Value::String(self.0.clone()),
                })
            }
        }

        impl Deref for $name {
            type Target = str;

            fn deref(&self) -> &str {
                &self.0
            }
        }

        impl From<&str> for $name {
            fn from(text: &str) -> Self {
                $name(text.to_string())
            }
        }

        impl From<String> for $name {
            fn from(text: String) -> Self {
                $name(text)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

literal_entry!(
    /// A systemd time span such as `90`, `5min 20s` or `infinity`, kept as written.
    /// A bare `0` or `1` stays a number of seconds.
    TimeSpan,
    "a time span"
);

literal_entry!(
    /// A token that may be numeric, such as a user id, a limit or a file mode.
    /// `0` and `1` are kept as digits.
    Literal,
    "a single value"
);
