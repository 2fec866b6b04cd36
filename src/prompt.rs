//! Interactive path prompts
//!
//! [`Prompter`] asks for the two directories and the optional output file,
//! one line of input per answer. Invalid answers are explained and asked
//! again; they never fail the run. Only the end of input does.

use crate::error::{Result, TreecmpError};
use std::fs::File;
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Check that `path` exists and is a directory
pub fn validate_directory(path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(TreecmpError::DirectoryNotFound(path.to_path_buf()));
    }
    if !path.is_dir() {
        return Err(TreecmpError::NotADirectory(path.to_path_buf()));
    }
    Ok(())
}

/// Create (or truncate) the output log at `path`
pub fn open_output(path: &Path) -> Result<File> {
    File::create(path).map_err(|source| TreecmpError::OutputUnavailable {
        path: path.to_path_buf(),
        source,
    })
}

/// Line-oriented prompts over any reader/writer pair
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    /// Prompt on `output`, reading answers from `input`
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Ask for an existing directory, repeating until one is given
    ///
    /// `ordinal` names which directory is asked for ("first", "second").
    pub fn directory(&mut self, ordinal: &str) -> Result<PathBuf> {
        writeln!(self.output, "Enter the {ordinal} directory to examine: ")?;
        loop {
            let path = self.read_path()?;
            match validate_directory(&path) {
                Ok(()) => break self.accept(path),
                Err(e) if e.is_validation() => {
                    debug!("Rejected directory: {}", e);
                    writeln!(self.output, "{e}. Try again : ")?;
                }
                Err(e) => return Err(e),
            }
        }
    }

    /// Ask for an optional output file, repeating until it can be created
    ///
    /// An empty answer means no output file.
    pub fn output_file(&mut self) -> Result<Option<(PathBuf, File)>> {
        writeln!(self.output, "Enter the path to an output file, or enter to skip:")?;
        loop {
            let path = self.read_path()?;
            if path.as_os_str().is_empty() {
                return self.accept(None);
            }
            match open_output(&path) {
                Ok(file) => return self.accept(Some((path, file))),
                Err(e) => {
                    debug!("Rejected output file: {}", e);
                    writeln!(
                        self.output,
                        "{e}. Enter a valid path where you have write access:"
                    )?;
                }
            }
        }
    }

    /// Give back the reader and writer
    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }

    fn accept<T>(&mut self, value: T) -> Result<T> {
        writeln!(self.output)?;
        self.output.flush()?;
        Ok(value)
    }

    fn read_path(&mut self) -> Result<PathBuf> {
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(TreecmpError::InputClosed);
        }
        let answer = line.strip_suffix('\n').unwrap_or(&line);
        let answer = answer.strip_suffix('\r').unwrap_or(answer);
        Ok(PathBuf::from(answer))
    }
}
