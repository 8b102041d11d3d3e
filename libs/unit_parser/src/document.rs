//! In-memory model of a unit file: ordered sections holding ordered entries.
use crate::{
    config::Result,
    error::RepeatedNonStringKeySnafu,
    parser::UnitParser,
    serialize::serialize,
    value::Value,
};
use linked_hash_map::{Iter, Keys, LinkedHashMap};
use std::{fmt, str::FromStr};

/// The entries of one `[Section]`, in insertion order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Section {
    entries: LinkedHashMap<String, Value>,
}

impl Section {
    /// Creates an empty section.
    pub fn new() -> Self {
        Section::default()
    }

    /// The value stored under `key`.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    /// Mutable access to the value stored under `key`.
    pub fn get_mut(&mut self, key: &str) -> Option<&mut Value> {
        self.entries.get_mut(key)
    }

    /// Whether `key` is present.
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Stores `value` under `key`, replacing any previous value.
    /// A replaced key keeps its position.
    pub fn insert<K: Into<String>, V: Into<Value>>(&mut self, key: K, value: V) -> Option<Value> {
        let key = key.into();
        let value = value.into();
        match self.entries.get_mut(&key) {
            Some(slot) => Some(std::mem::replace(slot, value)),
            None => self.entries.insert(key, value),
        }
    }

    /// Adds `value` under `key` the way a repeated line in a unit file does:
    /// a new key is stored as is, a repeated string turns the entry into a list,
    /// and a string is appended to an existing list.
    ///
    /// `name` is the name of this section, used in the error raised when a boolean
    /// or a number is repeated.
    pub fn append<K: Into<String>, V: Into<Value>>(
        &mut self,
        name: &str,
        key: K,
        value: V,
    ) -> Result<()> {
        let key = key.into();
        let value = value.into();

        if !self.entries.contains_key(&key) {
            self.entries.insert(key, value);
            return Ok(());
        }

        let new = match value {
            Value::String(new) => new,
            _ => return RepeatedNonStringKeySnafu { key, section: name }.fail(),
        };
        let existing = match self.entries.get_mut(&key) {
            Some(existing) => existing,
            None => return RepeatedNonStringKeySnafu { key, section: name }.fail(),
        };
        match existing {
            Value::StringList(list) => list.push(new),
            Value::String(first) => {
                let first = std::mem::take(first);
                *existing = Value::StringList(vec![first, new]);
            }
            Value::Bool(_) | Value::Number(_) => {
                return RepeatedNonStringKeySnafu { key, section: name }.fail()
            }
        }
        Ok(())
    }

    /// Removes `key`, returning its value.
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.entries.remove(key)
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> Iter<'_, String, Value> {
        self.entries.iter()
    }

    /// Keys in insertion order.
    pub fn keys(&self) -> Keys<'_, String, Value> {
        self.entries.keys()
    }

    /// Number of keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the section has no keys.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a Section {
    type Item = (&'a String, &'a Value);
    type IntoIter = Iter<'a, String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// A whole unit file: sections in the order they were first seen.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    sections: LinkedHashMap<String, Section>,
}

impl Document {
    /// Creates an empty document.
    pub fn new() -> Self {
        Document::default()
    }

    /// The section called `name`.
    pub fn section(&self, name: &str) -> Option<&Section> {
        self.sections.get(name)
    }

    /// Mutable access to the section called `name`.
    pub fn section_mut(&mut self, name: &str) -> Option<&mut Section> {
        self.sections.get_mut(name)
    }

    /// Returns the section called `name`, creating it at the end if absent.
    /// An existing section keeps its content and position.
    pub fn add_section<S: Into<String>>(&mut self, name: S) -> &mut Section {
        self.sections.entry(name.into()).or_insert_with(Section::new)
    }

    /// Replaces the section called `name`, keeping its position if it already exists.
    pub fn insert_section<S: Into<String>>(&mut self, name: S, section: Section) -> Option<Section> {
        let name = name.into();
        match self.sections.get_mut(&name) {
            Some(slot) => Some(std::mem::replace(slot, section)),
            None => self.sections.insert(name, section),
        }
    }

    /// Removes the section called `name`.
    pub fn remove_section(&mut self, name: &str) -> Option<Section> {
        self.sections.remove(name)
    }

    /// Whether a section called `name` exists.
    pub fn contains_section(&self, name: &str) -> bool {
        self.sections.contains_key(name)
    }

    /// Sections in document order.
    pub fn sections(&self) -> Iter<'_, String, Section> {
        self.sections.iter()
    }

    /// The value of `key` in `section`.
    pub fn get(&self, section: &str, key: &str) -> Option<&Value> {
        self.section(section).and_then(|s| s.get(key))
    }

    /// Stores `value` under `key` in `section`, creating the section if needed.
    pub fn set<S, K, V>(&mut self, section: S, key: K, value: V) -> Option<Value>
    where
        S: Into<String>,
        K: Into<String>,
        V: Into<Value>,
    {
        self.add_section(section).insert(key, value)
    }

    /// Number of sections.
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    /// Whether the document has no sections.
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}

impl FromStr for Document {
    type Err = crate::error::Error;

    fn from_str(s: &str) -> Result<Self> {
        UnitParser::default().parse(s)
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&serialize(self))
    }
}
