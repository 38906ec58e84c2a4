//! Line-oriented value extraction.
//!
//! - [`value`]: turn a `<label>: 1.2345 CYBER` line into a scaled integer
//! - [`matcher`]: line predicates for section headers and labeled fields
//! - [`section`]: the anchored scanner built on both

pub mod matcher;
pub mod section;
pub mod value;

pub use matcher::{compile, field_matcher, LineMatcher, MatchFn};
pub use section::{ScanState, SectionScanner};
pub use value::balance_value;
