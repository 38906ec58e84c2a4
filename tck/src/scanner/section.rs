//! Section-anchored field scanning.
//!
//! `cleos get account` prints several blocks that reuse the same labels
//! (`staked:` shows up under the balance summary and under every resource).
//! A value is therefore looked up by first waiting for the header of the
//! block it belongs to, then taking the first matching label after it:
//!
//! ```text
//!   Searching --anchor line--> InSection --field line--> value
//! ```
//!
//! The scanner never leaves `InSection` once entered; a label is found
//! anywhere after the anchor, not only before the next header.

use super::matcher::{field_matcher, LineMatcher};
use super::value::balance_value;
use crate::error::Result;

/// Scanner position relative to the anchored section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanState {
    /// The anchor has not been seen yet; fields are ignored
    Searching,
    /// The anchor was seen; the next matching field is the result
    InSection,
}

impl ScanState {
    /// Advance over one line. `InSection` is absorbing.
    pub fn advance(self, anchor_matched: bool) -> Self {
        match self {
            ScanState::Searching if anchor_matched => ScanState::InSection,
            state => state,
        }
    }
}

/// Finds the first labeled value after a section header.
pub struct SectionScanner<A, F> {
    anchor: A,
    field: F,
}

impl<A: LineMatcher> SectionScanner<A, regex::Regex> {
    /// Scanner for `<label>: <amount> CYBER` lines after `anchor`.
    pub fn for_label(anchor: A, label: &str) -> Result<Self> {
        Ok(Self::new(anchor, field_matcher(label)?))
    }
}

impl<A: LineMatcher, F: LineMatcher> SectionScanner<A, F> {
    /// Scanner with explicit anchor and field matchers.
    pub fn new(anchor: A, field: F) -> Self {
        Self { anchor, field }
    }

    /// Scan `lines` in order and return the first field value after the anchor.
    ///
    /// The anchor line itself is also tested as a field line. Returns
    /// `Ok(None)` when the anchor never occurs or no field follows it.
    pub fn scan<S: AsRef<str>>(&self, lines: &[S]) -> Result<Option<u64>> {
        let mut state = ScanState::Searching;

        for (index, line) in lines.iter().enumerate() {
            let line = line.as_ref();

            if state == ScanState::Searching {
                state = state.advance(self.anchor.is_match(line));
                if state == ScanState::InSection && log::log_enabled!(log::Level::Trace) {
                    log::trace!(
                        "Section `{}` entered at line {}",
                        self.anchor.describe(),
                        index
                    );
                }
            }

            if state == ScanState::InSection && self.field.is_match(line) {
                let value = balance_value(self.field.value_text(line))?;
                if log::log_enabled!(log::Level::Debug) {
                    log::debug!(
                        "Field `{}` in section `{}` = {} (line {})",
                        self.field.describe(),
                        self.anchor.describe(),
                        value,
                        index
                    );
                }
                return Ok(Some(value));
            }
        }

        if log::log_enabled!(log::Level::Debug) {
            log::debug!(
                "Field `{}` not found (final state {:?}, anchor `{}`)",
                self.field.describe(),
                state,
                self.anchor.describe()
            );
        }
        Ok(None)
    }
}
