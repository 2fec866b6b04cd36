//! Core data types shared by the traversal and reporting code
//!
//! - [`ComparisonOutcome`] classifies one source file.
//! - [`RunTally`] counts outcomes over a whole run and renders the final
//!   summary through its `Display` implementation.
//!
//! ## Examples
//!
//! ```rust
//! use treecmp::types::{ComparisonOutcome, RunTally};
//!
//! let mut tally = RunTally::default();
//! tally.record(&ComparisonOutcome::Match);
//! tally.record(&ComparisonOutcome::Missing);
//!
//! assert_eq!(tally.examined, 2);
//! assert!(tally.is_consistent());
//! assert!(tally.to_string().starts_with("Finished with 0 errors\n"));
//! ```

use std::fmt;

/// Classification of a single file found under the source root
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ComparisonOutcome {
    /// No file exists at the corresponding target path
    Missing,
    /// The target file exists but its content differs
    Mismatch,
    /// Both files are byte-identical
    Match,
    /// Processing this entry failed; carries the error message
    Error(String),
}

impl ComparisonOutcome {
    /// Short lowercase label used in diagnostics
    pub fn label(&self) -> &'static str {
        match self {
            ComparisonOutcome::Missing => "missing",
            ComparisonOutcome::Mismatch => "mismatch",
            ComparisonOutcome::Match => "match",
            ComparisonOutcome::Error(_) => "error",
        }
    }
}

/// Counters accumulated over one comparison run
///
/// Every examined file lands in exactly one bucket, so
/// `examined == missing + matches + mismatches + errors` holds after each
/// call to [`RunTally::record`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunTally {
    /// Files visited under the source root
    pub examined: u64,
    /// Files with no counterpart in the target root
    pub missing: u64,
    /// Files with a byte-identical counterpart
    pub matches: u64,
    /// Files whose counterpart differs
    pub mismatches: u64,
    /// Files that could not be processed
    pub errors: u64,
}

impl RunTally {
    /// Count one examined file under its outcome's bucket
    pub fn record(&mut self, outcome: &ComparisonOutcome) {
        self.examined += 1;
        match outcome {
            ComparisonOutcome::Missing => self.missing += 1,
            ComparisonOutcome::Mismatch => self.mismatches += 1,
            ComparisonOutcome::Match => self.matches += 1,
            ComparisonOutcome::Error(_) => self.errors += 1,
        }
    }

    /// Whether every examined file is accounted for in exactly one bucket
    pub fn is_consistent(&self) -> bool {
        self.examined == self.missing + self.matches + self.mismatches + self.errors
    }

    /// Whether every examined file matched
    pub fn all_matched(&self) -> bool {
        self.matches == self.examined
    }
}

/// Plural suffix, omitted only when `count` is exactly one
fn plural(count: u64, suffix: &'static str) -> &'static str {
    if count == 1 {
        ""
    } else {
        suffix
    }
}

impl fmt::Display for RunTally {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Finished with {} error{}", self.errors, plural(self.errors, "s"))?;
        writeln!(f, "Examined {} file{}:", self.examined, plural(self.examined, "s"))?;
        writeln!(f, "  {} missing", self.missing)?;
        writeln!(f, "  {} match{}", self.matches, plural(self.matches, "es"))?;
        writeln!(f, "  {} mismatch{}", self.mismatches, plural(self.mismatches, "es"))
    }
}
