//! Parser struct definitions.
use crate::{
    config::Result,
    document::Document,
    error::{EmptyInputSnafu, MalformedLineSnafu, NoSectionSnafu, ReopenedSectionSnafu},
    options::ParserOptions,
    value::{ambiguous_hint, coerce_token},
};
use nom::{
    bytes::complete::{take_till, take_till1},
    character::complete::{char, one_of},
    combinator::{all_consuming, rest},
    sequence::{delimited, separated_pair},
    IResult,
};
use snafu::ensure;
use std::fmt;

/// A non-fatal finding of a parse: a `0` or `1` read as a boolean.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// Line the entry starts on, counting from 1.
    pub line: usize,
    /// Section holding the entry.
    pub section: String,
    /// Key of the entry.
    pub key: String,
    /// The token as written.
    pub token: String,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "line {}: [{}] {}={} is an ambiguous boolean, use {} instead",
            self.line,
            self.section,
            self.key,
            self.token,
            ambiguous_hint(&self.token)
        )
    }
}

/// Turns unit file text into a [Document].
///
/// Diagnostics of the last [UnitParser::parse] call are kept on the parser.
#[derive(Debug, Default)]
pub struct UnitParser {
    options: ParserOptions,
    diagnostics: Vec<Diagnostic>,
}

impl UnitParser {
    pub fn new(options: ParserOptions) -> Self {
        UnitParser {
            options,
            diagnostics: Vec::new(),
        }
    }

    pub fn options(&self) -> &ParserOptions {
        &self.options
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn take_diagnostics(&mut self) -> Vec<Diagnostic> {
        std::mem::take(&mut self.diagnostics)
    }

    /// Parses a whole unit file.
    ///
    /// Lines ending in a backslash are joined with the next one first. Blank lines and
    /// lines starting with `#` or `;` are skipped. Every other line is either a
    /// `[Section]` header or a `Key=Value` entry of the last opened section.
    pub fn parse(&mut self, text: &str) -> Result<Document> {
        self.diagnostics.clear();
        ensure!(!text.trim().is_empty(), EmptyInputSnafu);

        let mut doc = Document::new();
        let mut current: Option<String> = None;

        for (line, raw) in logical_lines(text) {
            let content = raw.trim();
            if content.is_empty() || comment(content).is_ok() {
                continue;
            }

            if let Ok((_, name)) = section_header(content) {
                if doc.contains_section(name) {
                    ensure!(
                        self.options.Parser.AllowReopenedSections,
                        ReopenedSectionSnafu {
                            section: name,
                            line
                        }
                    );
                    log::debug!("Reopening section {} on line {}.", name, line);
                } else {
                    log::debug!("Opening section {} on line {}.", name, line);
                }
                doc.add_section(name);
                current = Some(name.to_string());
                continue;
            }

            let (key, token) = match entry(content) {
                Ok((_, (key, token))) => (key.trim(), token.trim()),
                Err(_) => return MalformedLineSnafu { line, content }.fail(),
            };
            let section = match &current {
                Some(section) => section,
                None => return NoSectionSnafu { line, key }.fail(),
            };
            ensure!(
                !key.is_empty() && !token.is_empty(),
                MalformedLineSnafu { line, content }
            );

            let (value, ambiguous) = coerce_token(token);
            if ambiguous && self.options.Parser.WarnAmbiguousBooleans {
                let diagnostic = Diagnostic {
                    line,
                    section: section.clone(),
                    key: key.to_string(),
                    token: token.to_string(),
                };
                log::warn!("{}", diagnostic);
                self.diagnostics.push(diagnostic);
            }

            doc.add_section(section.as_str())
                .append(section, key, value)?;
        }

        Ok(doc)
    }
}

/// Parses unit file text with the default options.
pub fn parse(text: &str) -> Result<Document> {
    UnitParser::default().parse(text)
}

/// Splits text into logical lines, joining a line that ends in a backslash with the
/// next one. The backslash and the newline (and a carriage return before it) are
/// dropped, nothing is inserted in their place. A backslash ending the text is dropped too.
/// Each line comes with the number of the physical line it starts on.
fn logical_lines(text: &str) -> Vec<(usize, String)> {
    let mut lines = Vec::new();
    let mut pending = String::new();
    let mut start = None;
    let mut physical = text.split('\n').enumerate().peekable();

    while let Some((n, raw)) = physical.next() {
        let first = *start.get_or_insert(n + 1);
        let continued = raw.strip_suffix("\\\r").or_else(|| raw.strip_suffix('\\'));
        match continued {
            Some(head) if physical.peek().is_some() => {
                pending.push_str(head);
                continue;
            }
            // a continuation at the end of the text joins nothing
            Some(head) => pending.push_str(head),
            None => pending.push_str(raw),
        }
        lines.push((first, std::mem::take(&mut pending)));
        start = None;
    }

    lines
}

fn comment(i: &str) -> IResult<&str, char> {
    one_of("#;")(i)
}

fn section_header(i: &str) -> IResult<&str, &str> {
    all_consuming(delimited(
        char('['),
        take_till1(|c| c == ']'),
        char(']'),
    ))(i)
}

// returns (key, value), both untrimmed
fn entry(i: &str) -> IResult<&str, (&str, &str)> {
    separated_pair(take_till(|c| c == '='), char('='), rest)(i)
}
