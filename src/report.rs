//! Human-readable reporting to the console and an optional log file
//!
//! [`ReportSink`] writes every message to the console and mirrors it to a
//! log file when one was configured. A small spinner shows that the walk is
//! still moving. It only ever draws on the console, never in the log, and
//! hides itself when the console is not a terminal.
//!
//! The message builders in this module produce the exact text of each
//! report line.

use crate::error::Result;
use crate::types::RunTally;
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::fs::File;
use std::io::{self, BufWriter, Stdout, Write};
use std::path::Path;
use std::time::{Duration, Instant};

/// Minimum time between spinner frame changes
pub const SPINNER_INTERVAL: Duration = Duration::from_millis(250);

/// Frames cycled by the spinner
pub const SPINNER_FRAMES: [char; 4] = ['-', '\\', '|', '/'];

/// Rotating progress indicator state
///
/// The frame advances at most once per [`SPINNER_INTERVAL`], no matter how
/// often [`Spinner::tick`] is called.
#[derive(Debug, Clone)]
pub struct Spinner {
    last_update: Instant,
    frame: usize,
}

impl Spinner {
    /// Create a spinner showing the first frame, starting its interval now
    pub fn new() -> Self {
        Self::starting_at(Instant::now())
    }

    /// Create a spinner whose first interval starts at `now`
    pub fn starting_at(now: Instant) -> Self {
        Self {
            last_update: now,
            frame: 0,
        }
    }

    /// Current frame character
    pub fn frame(&self) -> char {
        SPINNER_FRAMES[self.frame]
    }

    /// Advance if enough time has passed since the last advance
    ///
    /// Returns `true` when the frame changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        if now.saturating_duration_since(self.last_update) < SPINNER_INTERVAL {
            return false;
        }
        self.frame = (self.frame + 1) % SPINNER_FRAMES.len();
        self.last_update = now;
        true
    }
}

impl Default for Spinner {
    fn default() -> Self {
        Self::new()
    }
}

/// Destination for report text
///
/// The console is always written. The log, when present, receives the same
/// text except for console-only spacing and the spinner.
pub struct ReportSink<C: Write = Stdout> {
    console: C,
    log: Option<BufWriter<File>>,
    progress: ProgressBar,
    spinner: Spinner,
}

impl ReportSink<Stdout> {
    /// Report to standard output, with a spinner when it is a terminal
    pub fn stdout(log: Option<File>, show_progress: bool) -> Self {
        let progress = if show_progress {
            let bar = ProgressBar::with_draw_target(None, ProgressDrawTarget::stdout());
            if let Ok(style) = ProgressStyle::with_template("{msg}") {
                bar.set_style(style);
            }
            bar
        } else {
            ProgressBar::hidden()
        };
        Self::with_progress(io::stdout(), log, progress)
    }
}

impl<C: Write> ReportSink<C> {
    /// Report to `console` with no visible spinner
    pub fn new(console: C, log: Option<File>) -> Self {
        Self::with_progress(console, log, ProgressBar::hidden())
    }

    fn with_progress(console: C, log: Option<File>, progress: ProgressBar) -> Self {
        let spinner = Spinner::new();
        progress.set_message(spinner.frame().to_string());
        Self {
            console,
            log: log.map(BufWriter::new),
            progress,
            spinner,
        }
    }

    /// Write `msg` to the console and, if configured, the log file
    pub fn emit(&mut self, msg: &str) -> Result<()> {
        self.emit_console(msg)?;
        if let Some(log) = self.log.as_mut() {
            log.write_all(msg.as_bytes())?;
        }
        Ok(())
    }

    /// Write `msg` to the console only
    pub fn emit_console(&mut self, msg: &str) -> Result<()> {
        let console = &mut self.console;
        self.progress.suspend(|| {
            console.write_all(msg.as_bytes())?;
            console.flush()
        })?;
        Ok(())
    }

    /// Advance the spinner if its interval has elapsed
    pub fn tick(&mut self) {
        if self.spinner.tick(Instant::now()) {
            self.progress.set_message(self.spinner.frame().to_string());
        }
    }

    /// Whether a log file is attached
    pub fn has_log(&self) -> bool {
        self.log.is_some()
    }

    /// Clear the spinner and flush both destinations
    pub fn finish(&mut self) -> Result<()> {
        self.progress.finish_and_clear();
        self.console.flush()?;
        if let Some(log) = self.log.as_mut() {
            log.flush()?;
        }
        Ok(())
    }

    /// Borrow the console writer
    pub fn console(&self) -> &C {
        &self.console
    }
}

/// Message announcing which two directories are compared
pub fn search_message(first: &Path, second: &Path) -> String {
    format!(
        "Searching for differences between:\n  \"{}\"\n  \"{}\"\n",
        first.display(),
        second.display()
    )
}

/// Message for a source file with no counterpart
pub fn missing_message(path: &Path) -> String {
    format!("\"{}\" does not exist.\n", path.display())
}

/// Message for a pair of files whose contents differ
pub fn mismatch_message(first: &Path, second: &Path) -> String {
    format!(
        "Not a match:\n  \"{}\"\n  \"{}\"\n",
        first.display(),
        second.display()
    )
}

/// Message for an entry that could not be processed
pub fn error_message(err: &impl std::fmt::Display) -> String {
    format!("{err}\n")
}

/// Final summary of a run
pub fn summary_message(tally: &RunTally) -> String {
    tally.to_string()
}
