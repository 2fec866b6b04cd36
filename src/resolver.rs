//! Relative addressing between the source and target trees
//!
//! A file found at `source_root/some/dir/file` corresponds to
//! `target_root/some/dir/file`. When the file is not actually under the
//! source root the file name alone is used, so the target path is always
//! something the caller can check for existence.
//!
//! ```rust
//! use treecmp::resolver::corresponding_path;
//! use std::path::Path;
//!
//! let target = corresponding_path(
//!     Path::new("/data/photos/2024/a.jpg"),
//!     Path::new("/data/photos"),
//!     Path::new("/mnt/backup/photos"),
//! );
//! assert_eq!(target, Path::new("/mnt/backup/photos/2024/a.jpg"));
//! ```

use std::path::{Path, PathBuf};
use tracing::trace;

/// Map a file under `source_root` to the path it should have under `target_root`
pub fn corresponding_path(file: &Path, source_root: &Path, target_root: &Path) -> PathBuf {
    target_root.join(relative_suffix(file, source_root))
}

/// Path of `file` relative to `root`, or the file name when it is not under `root`
///
/// A lexical prefix strip is tried first so symlinked roots keep their
/// spelling. Only when that fails are both paths canonicalised.
pub fn relative_suffix(file: &Path, root: &Path) -> PathBuf {
    if let Some(relative) = strip_root(file, root) {
        return relative;
    }

    trace!(
        "{} is not under {}, using file name",
        file.display(),
        root.display()
    );
    file.file_name().map(PathBuf::from).unwrap_or_default()
}

fn strip_root(file: &Path, root: &Path) -> Option<PathBuf> {
    let non_empty = |p: &Path| (!p.as_os_str().is_empty()).then(|| p.to_path_buf());

    if let Ok(relative) = file.strip_prefix(root) {
        return non_empty(relative);
    }

    let file_canon = file.canonicalize().ok()?;
    let root_canon = root.canonicalize().ok()?;
    file_canon
        .strip_prefix(&root_canon)
        .ok()
        .and_then(non_empty)
}
