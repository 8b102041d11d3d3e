//! Entry values and the coercion of raw tokens into them.
use nom::{
    branch::alt,
    character::complete::{char, digit0, digit1, one_of},
    combinator::{all_consuming, opt, recognize},
    sequence::{pair, tuple},
    IResult,
};
use std::fmt;

/// A finite decimal number.
///
/// The text the number was read from is kept, so that `2.50` is written back as `2.50`
/// and `1.0` is not turned into `1`, which would read back as a boolean.
/// Two numbers are equal when their values are equal.
#[derive(Debug, Clone)]
pub struct Number {
    value: f64,
    text: String,
}

impl Number {
    /// Parses a decimal token: an optional sign, then digits with an optional fraction,
    /// or a dot followed by digits. Exponents, `inf` and `nan` are not numbers here.
    pub fn parse(token: &str) -> Option<Number> {
        if all_consuming(decimal)(token).is_err() {
            return None;
        }
        let value = token.parse::<f64>().ok()?;
        if !value.is_finite() {
            return None;
        }
        Some(Number {
            value,
            text: token.to_string(),
        })
    }

    /// Builds a number from a float, [None] if it is not finite.
    pub fn from_f64(value: f64) -> Option<Number> {
        if !value.is_finite() {
            return None;
        }
        Some(Number {
            value,
            text: value.to_string(),
        })
    }

    /// The numeric value.
    pub fn value(&self) -> f64 {
        self.value
    }

    /// The decimal text written for this number.
    pub fn as_str(&self) -> &str {
        &self.text
    }
}

impl PartialEq for Number {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

macro_rules! impl_number_from {
    ($($typ:ty),+) => {
        $(
            impl From<$typ> for Number {
                fn from(v: $typ) -> Self {
                    Number {
                        value: v as f64,
                        text: v.to_string(),
                    }
                }
            }
        )+
    };
}

impl_number_from!(i8, i16, i32, i64, u8, u16, u32, u64);

fn decimal(i: &str) -> IResult<&str, &str> {
    recognize(tuple((
        opt(one_of("+-")),
        alt((
            recognize(pair(digit1, opt(pair(char('.'), digit0)))),
            recognize(pair(char('.'), digit1)),
        )),
    )))(i)
}

/// The value of an entry.
///
/// A key that is written several times in one section holds a [Value::StringList],
/// one element per line, in file order.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// `yes`/`true`/`on`/`1` or `no`/`false`/`off`/`0`.
    Bool(bool),
    /// A finite decimal number.
    Number(Number),
    /// Any other token.
    String(String),
    /// A string key that appeared more than once. Expected to be non-empty: an empty
    /// list writes no lines at all.
    StringList(Vec<String>),
}

impl Value {
    /// Whether the value is a string or a list of strings.
    pub fn is_string(&self) -> bool {
        matches!(self, Value::String(_) | Value::StringList(_))
    }

    /// The boolean, if this is one.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// The number, if this is one.
    pub fn as_number(&self) -> Option<&Number> {
        match self {
            Value::Number(n) => Some(n),
            _ => None,
        }
    }

    /// The string, if this holds exactly one.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// All strings held, a single string counting as a list of one.
    pub fn as_strings(&self) -> Option<Vec<&str>> {
        match self {
            Value::String(s) => Some(vec![s.as_str()]),
            Value::StringList(list) => Some(list.iter().map(String::as_str).collect()),
            Value::Bool(_) | Value::Number(_) => None,
        }
    }

    /// Human readable name of the variant, used in error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Bool(_) => "a boolean",
            Value::Number(_) => "a number",
            Value::String(_) => "a string",
            Value::StringList(_) => "a list of strings",
        }
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<Number> for Value {
    fn from(v: Number) -> Self {
        Value::Number(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::String(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::String(v)
    }
}

impl From<Vec<String>> for Value {
    fn from(v: Vec<String>) -> Self {
        Value::StringList(v)
    }
}

macro_rules! impl_value_from_int {
    ($($typ:ty),+) => {
        $(
            impl From<$typ> for Value {
                fn from(v: $typ) -> Self {
                    Value::Number(Number::from(v))
                }
            }
        )+
    };
}

impl_value_from_int!(i32, i64, u32, u64);

/// Result of coercing one token: the value, and whether the token was an
/// ambiguous `0`/`1` boolean.
pub(crate) fn coerce_token(token: &str) -> (Value, bool) {
    match token {
        "true" | "yes" | "on" => (Value::Bool(true), false),
        "1" => (Value::Bool(true), true),
        "false" | "no" | "off" => (Value::Bool(false), false),
        "0" => (Value::Bool(false), true),
        _ => match Number::parse(token) {
            Some(n) => (Value::Number(n), false),
            None => (Value::String(token.to_string()), false),
        },
    }
}

/// Suggested spelling for an ambiguous boolean token.
pub(crate) fn ambiguous_hint(token: &str) -> &'static str {
    if token == "1" {
        "\"yes\" or \"true\""
    } else {
        "\"no\" or \"false\""
    }
}

/// Converts a trimmed, non-empty token into a [Value].
///
/// Boolean spellings are case-sensitive. `1` and `0` are read as booleans, with a
/// warning suggesting the explicit spelling.
pub fn coerce(token: &str) -> Value {
    let (value, ambiguous) = coerce_token(token);
    if ambiguous {
        log::warn!(
            "Ambiguous boolean value {:?}, use {} instead.",
            token,
            ambiguous_hint(token)
        );
    }
    value
}
