//! Line predicates used to recognise section headers and labeled fields.

use regex::Regex;

use crate::error::{Result, VerificationError};

/// Decides whether a single output line is of interest.
pub trait LineMatcher {
    /// Whether `line` matches.
    fn is_match(&self, line: &str) -> bool;

    /// Human readable form, used in logs and error messages.
    fn describe(&self) -> String;

    /// Part of a matching `line` that holds its value. The whole line
    /// unless the matcher knows better.
    fn value_text<'a>(&self, line: &'a str) -> &'a str {
        line
    }
}

/// Regular expressions match anywhere in the line unless anchored with `^`.
/// The first capture group, when the pattern has one, is the value text.
impl LineMatcher for Regex {
    fn is_match(&self, line: &str) -> bool {
        Regex::is_match(self, line)
    }

    fn describe(&self) -> String {
        self.as_str().to_string()
    }

    fn value_text<'a>(&self, line: &'a str) -> &'a str {
        self.captures(line)
            .and_then(|caps| caps.get(1))
            .map_or(line, |amount| amount.as_str())
    }
}

/// A literal matches lines that start with it.
impl LineMatcher for str {
    fn is_match(&self, line: &str) -> bool {
        line.starts_with(self)
    }

    fn describe(&self) -> String {
        self.to_string()
    }
}

impl LineMatcher for String {
    fn is_match(&self, line: &str) -> bool {
        self.as_str().is_match(line)
    }

    fn describe(&self) -> String {
        self.clone()
    }
}

impl<M: LineMatcher + ?Sized> LineMatcher for &M {
    fn is_match(&self, line: &str) -> bool {
        (**self).is_match(line)
    }

    fn describe(&self) -> String {
        (**self).describe()
    }

    fn value_text<'a>(&self, line: &'a str) -> &'a str {
        (**self).value_text(line)
    }
}

/// Adapts a closure into a [`LineMatcher`].
pub struct MatchFn<F> {
    name: String,
    predicate: F,
}

impl<F> MatchFn<F>
where
    F: Fn(&str) -> bool,
{
    /// Wrap `predicate`, reported as `name`.
    pub fn new(name: impl Into<String>, predicate: F) -> Self {
        Self {
            name: name.into(),
            predicate,
        }
    }
}

impl<F> LineMatcher for MatchFn<F>
where
    F: Fn(&str) -> bool,
{
    fn is_match(&self, line: &str) -> bool {
        (self.predicate)(line)
    }

    fn describe(&self) -> String {
        self.name.clone()
    }
}

/// Compile `pattern`, reporting failures as [`VerificationError::InvalidPattern`].
pub fn compile(pattern: &str) -> Result<Regex> {
    Regex::new(pattern).map_err(|source| VerificationError::InvalidPattern {
        pattern: pattern.to_string(),
        source,
    })
}

/// Matcher for a `<label>: <amount> CYBER` line, capturing the amount.
pub fn field_matcher(label: &str) -> Result<Regex> {
    compile(&format!(
        r"^\s*{}:\s*([0-9.]+)\s*CYBER",
        regex::escape(label)
    ))
}
