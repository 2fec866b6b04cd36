//! Byte-exact file comparison
//!
//! Two files match when they have the same length and the same bytes in the
//! same order. No normalisation is applied (line endings, encodings and
//! trailing whitespace all count). A difference yields `false` without any
//! detail about where the files diverge. Files that open but cannot be
//! read to the end do not match either.

use crate::error::{Result, TreecmpError};
use std::fs::File;
use std::io::{self, BufReader, ErrorKind, Read};
use std::path::Path;
use tracing::debug;

/// Size of the chunks read from each file
const CHUNK_SIZE: usize = 64 * 1024;

/// Check whether the files at `first` and `second` are byte-identical
///
/// A read failure after both files opened counts as a difference.
///
/// # Errors
///
/// [`TreecmpError::Open`] naming whichever path could not be opened
/// (`first` is opened before `second`).
pub fn is_exact_match(first: &Path, second: &Path) -> Result<bool> {
    let file1 = File::open(first).map_err(|e| TreecmpError::open(first, e))?;
    let file2 = File::open(second).map_err(|e| TreecmpError::open(second, e))?;

    match contents_equal(BufReader::new(file1), BufReader::new(file2)) {
        Ok(equal) => Ok(equal),
        Err(e) => {
            debug!(
                "Read failed comparing {} with {}: {}",
                first.display(),
                second.display(),
                e
            );
            Ok(false)
        }
    }
}

/// Compare two byte streams to the end
///
/// Reading stops at the first differing chunk.
pub fn contents_equal<A: Read, B: Read>(mut a: A, mut b: B) -> io::Result<bool> {
    let mut buf_a = vec![0u8; CHUNK_SIZE];
    let mut buf_b = vec![0u8; CHUNK_SIZE];

    loop {
        let n_a = fill(&mut a, &mut buf_a)?;
        let n_b = fill(&mut b, &mut buf_b)?;

        if n_a != n_b || buf_a[..n_a] != buf_b[..n_b] {
            return Ok(false);
        }
        if n_a == 0 {
            return Ok(true);
        }
    }
}

/// Read until `buf` is full or the stream ends, returning the byte count
fn fill<R: Read>(reader: &mut R, buf: &mut [u8]) -> io::Result<usize> {
    let mut filled = 0;
    while filled < buf.len() {
        match reader.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }
    Ok(filled)
}
