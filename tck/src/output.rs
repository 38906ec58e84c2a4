//! Captured command-line output.

use std::fmt;

/// Ordered lines captured from one CLI invocation.
///
/// Lines are stored without their terminators. The value is never mutated
/// by the checkers, which only borrow it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliOutput {
    lines: Vec<String>,
}

impl CliOutput {
    /// Build from already split lines.
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }

    /// Split raw captured text on line terminators (`\n` or `\r\n`).
    pub fn parse(text: &str) -> Self {
        Self::from_lines(text.lines())
    }

    /// The captured lines in order.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Lines joined with `\n`, without a trailing terminator.
    ///
    /// JSON documents printed over several lines parse the same way once
    /// joined, which is how ABI output is read back. Text never matches
    /// across a line break.
    pub fn joined(&self) -> String {
        self.lines.join("\n")
    }
}

impl From<&str> for CliOutput {
    fn from(text: &str) -> Self {
        Self::parse(text)
    }
}

impl From<String> for CliOutput {
    fn from(text: String) -> Self {
        Self::parse(&text)
    }
}

impl From<Vec<String>> for CliOutput {
    fn from(lines: Vec<String>) -> Self {
        Self { lines }
    }
}

impl fmt::Display for CliOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in &self.lines {
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_splits_crlf_and_lf() {
        let output = CliOutput::parse("first\r\nsecond\nthird");
        assert_eq!(output.lines(), ["first", "second", "third"]);
    }

    #[test]
    fn test_joined_keeps_line_breaks() {
        let output = CliOutput::from_lines(["{\"version\":", "\"eosio::abi/1.1\"}"]);
        assert_eq!(output.joined(), "{\"version\":\n\"eosio::abi/1.1\"}");
    }

    #[test]
    fn test_empty_output() {
        let output = CliOutput::parse("");
        assert!(output.lines().is_empty());
        assert_eq!(output.joined(), "");
    }
}
