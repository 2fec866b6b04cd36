//! Recursive comparison of a source tree against a target tree
//!
//! [`TreeComparison`] walks every file under the source root, looks up the
//! file at the same relative path under the target root, and classifies it:
//!
//! 1. Directories are skipped.
//! 2. No file at the target path: [`ComparisonOutcome::Missing`]. The
//!    comparator is never called. A target path running through a regular
//!    file counts as absent too.
//! 3. Contents differ, or a file opens but cannot be read:
//!    [`ComparisonOutcome::Mismatch`].
//! 4. Contents are byte-identical: [`ComparisonOutcome::Match`].
//! 5. Either file cannot be opened, or the existence check itself fails:
//!    [`ComparisonOutcome::Error`]. The run continues with the next entry.
//!
//! Errors from the walk itself (for example the source root disappearing)
//! end the run without a summary.
//!
//! ## Example
//!
//! ```rust,no_run
//! use treecmp::{ReportSink, TreeComparisonBuilder};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let comparison = TreeComparisonBuilder::new()
//!     .show_progress(false)
//!     .build("./photos", "/mnt/backup/photos");
//!
//! let mut sink = ReportSink::stdout(None, comparison.shows_progress());
//! let tally = comparison.run(&mut sink)?;
//! println!("{} of {} files matched", tally.matches, tally.examined);
//! # Ok(())
//! # }
//! ```

use crate::comparator::is_exact_match;
use crate::error::{Result, TreecmpError};
use crate::report::{self, ReportSink};
use crate::resolver::corresponding_path;
use crate::types::{ComparisonOutcome, RunTally};
use humantime::format_duration;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{debug, info, warn};
use walkdir::WalkDir;

/// Builder for [`TreeComparison`]
#[derive(Debug, Clone)]
pub struct TreeComparisonBuilder {
    show_progress: bool,
}

impl TreeComparisonBuilder {
    /// Create a builder with the progress spinner enabled
    pub fn new() -> Self {
        Self {
            show_progress: true,
        }
    }

    /// Set whether a spinner is drawn while walking
    pub fn show_progress(mut self, show: bool) -> Self {
        self.show_progress = show;
        self
    }

    /// Build a comparison of `source_root` against `target_root`
    pub fn build(
        self,
        source_root: impl Into<PathBuf>,
        target_root: impl Into<PathBuf>,
    ) -> TreeComparison {
        TreeComparison {
            source_root: source_root.into(),
            target_root: target_root.into(),
            show_progress: self.show_progress,
        }
    }
}

impl Default for TreeComparisonBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// One source-versus-target comparison run
#[derive(Debug, Clone)]
pub struct TreeComparison {
    source_root: PathBuf,
    target_root: PathBuf,
    show_progress: bool,
}

impl TreeComparison {
    /// Compare `source_root` against `target_root` with default settings
    pub fn new(source_root: impl Into<PathBuf>, target_root: impl Into<PathBuf>) -> Self {
        TreeComparisonBuilder::new().build(source_root, target_root)
    }

    /// Root whose files are checked for
    pub fn source_root(&self) -> &Path {
        &self.source_root
    }

    /// Root searched for counterparts
    pub fn target_root(&self) -> &Path {
        &self.target_root
    }

    /// Whether the run should draw a spinner
    pub fn shows_progress(&self) -> bool {
        self.show_progress
    }

    /// Walk the source tree, report each difference and the final summary
    ///
    /// # Errors
    ///
    /// Errors writing to the sink or walking the source tree end the run.
    /// Per-file failures never do; they are counted in
    /// [`RunTally::errors`].
    pub fn run<C: Write>(&self, sink: &mut ReportSink<C>) -> Result<RunTally> {
        let started = Instant::now();
        info!(
            "Comparing {} against {}",
            self.source_root.display(),
            self.target_root.display()
        );

        if sink.has_log() {
            debug!("Mirroring report to log file");
        }

        sink.emit(&report::search_message(&self.source_root, &self.target_root))?;
        sink.emit_console("\n")?;

        let mut tally = RunTally::default();
        for entry in WalkDir::new(&self.source_root).sort_by_file_name() {
            let entry = entry?;
            sink.tick();

            let path = entry.path();
            if path.is_dir() {
                continue;
            }

            let (outcome, target) = self.classify(path);
            tally.record(&outcome);
            debug!("{}: {}", outcome.label(), path.display());

            match &outcome {
                ComparisonOutcome::Missing => sink.emit(&report::missing_message(&target))?,
                ComparisonOutcome::Mismatch => {
                    sink.emit(&report::mismatch_message(path, &target))?
                }
                ComparisonOutcome::Match => {}
                ComparisonOutcome::Error(message) => {
                    warn!("Error comparing {}: {}", path.display(), message);
                    sink.emit(&report::error_message(message))?
                }
            }
        }

        sink.emit_console("\n")?;
        sink.emit(&report::summary_message(&tally))?;
        sink.finish()?;

        let elapsed = format_duration(started.elapsed());
        if tally.all_matched() {
            info!("All {} files matched in {}", tally.examined, elapsed);
        } else {
            info!(
                "Examined {} files in {}, {} did not match",
                tally.examined,
                elapsed,
                tally.examined - tally.matches
            );
        }
        Ok(tally)
    }

    /// Classify one file found under the source root
    ///
    /// Returns the outcome together with the target path it was checked
    /// against.
    pub fn classify(&self, file: &Path) -> (ComparisonOutcome, PathBuf) {
        let target = corresponding_path(file, &self.source_root, &self.target_root);
        let outcome = match compare_file(file, &target) {
            Ok(outcome) => outcome,
            Err(e) => ComparisonOutcome::Error(e.to_string()),
        };
        (outcome, target)
    }
}

/// Whether anything exists at `path`
///
/// A missing path component and a component that is a regular file both
/// mean the path does not exist.
fn target_exists(path: &Path) -> Result<bool> {
    match path.try_exists() {
        Ok(exists) => Ok(exists),
        Err(e) if matches!(e.kind(), ErrorKind::NotFound | ErrorKind::NotADirectory) => {
            Ok(false)
        }
        Err(e) => Err(TreecmpError::Io(e)),
    }
}

fn compare_file(file: &Path, target: &Path) -> Result<ComparisonOutcome> {
    if !target_exists(target)? {
        return Ok(ComparisonOutcome::Missing);
    }
    if is_exact_match(file, target)? {
        Ok(ComparisonOutcome::Match)
    } else {
        Ok(ComparisonOutcome::Mismatch)
    }
}
