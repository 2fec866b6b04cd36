//! # treecmp - Verify one directory tree against another
//!
//! For every file under a source directory, treecmp checks whether a file
//! exists at the same relative path under a target directory and whether
//! the two are byte-for-byte identical. It is meant for spot-checking that
//! a copy, sync or backup is complete and correct.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use treecmp::{ReportSink, TreeComparison};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let comparison = TreeComparison::new("./project", "/mnt/backup/project");
//! let mut sink = ReportSink::stdout(None, true);
//!
//! let tally = comparison.run(&mut sink)?;
//! assert!(tally.is_consistent());
//! # Ok(())
//! # }
//! ```
//!
//! ## Outcomes
//!
//! Each source file lands in exactly one bucket of the [`RunTally`]:
//!
//! - **Match**: the target file has identical bytes
//! - **Mismatch**: the target file exists but differs
//! - **Missing**: there is no target file
//! - **Error**: the file could not be compared (for example the target
//!   cannot be opened); the run carries on with the next file
//!
//! Only regular files are compared. Directories are walked but not counted,
//! and there is no content-aware diffing: a difference is just a difference.
//!
//! ## Module Organization
//!
//! - [`resolver`]: source path to target path mapping
//! - [`comparator`]: byte-exact file comparison
//! - [`traversal`]: the recursive walk and classification
//! - [`report`]: console/log output and the progress spinner
//! - [`prompt`]: interactive path prompts used by the CLI
//! - [`types`]: outcomes and tallies
//! - [`error`]: error types and handling

pub mod comparator;
pub mod error;
pub mod prompt;
pub mod report;
pub mod resolver;
pub mod traversal;
pub mod types;

// Re-export main types for convenience
pub use error::{Result, TreecmpError};
pub use report::{ReportSink, Spinner};
pub use traversal::{TreeComparison, TreeComparisonBuilder};
pub use types::{ComparisonOutcome, RunTally};
