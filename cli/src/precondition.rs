//! Target directory precondition.
//!
//! A scaffold only runs in an empty directory; this is checked before any
//! prompt is shown or file written.

use crate::error::{Result, ScaffoldError};
use camino::Utf8Path;
use log::debug;

/// Whether the target directory has entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirectoryState {
    /// No entries.
    Empty,
    /// The number of entries found.
    NonEmpty(usize),
}

/// Inspect the target directory.
///
/// Hidden entries count; a directory holding only `.git` is not empty.
///
/// # Errors
///
/// Returns [`ScaffoldError::TargetUnreadable`] if the directory is missing or
/// cannot be listed.
pub fn check_directory(path: &Utf8Path) -> Result<DirectoryState> {
    let unreadable = |source: std::io::Error| ScaffoldError::TargetUnreadable {
        path: path.to_owned(),
        source,
    };
    let mut count = 0_usize;
    for entry in std::fs::read_dir(path).map_err(unreadable)? {
        entry.map_err(unreadable)?;
        count += 1;
    }
    let state = if count == 0 {
        DirectoryState::Empty
    } else {
        DirectoryState::NonEmpty(count)
    };
    debug!("target directory {path} is {state:?}");
    Ok(state)
}

/// Fail unless the target directory is empty.
///
/// # Errors
///
/// Returns [`ScaffoldError::PreconditionFailed`] for a non-empty directory and
/// [`ScaffoldError::TargetUnreadable`] if it cannot be listed.
pub fn ensure_empty(path: &Utf8Path) -> Result<()> {
    match check_directory(path)? {
        DirectoryState::Empty => Ok(()),
        DirectoryState::NonEmpty(entries) => Err(ScaffoldError::PreconditionFailed {
            path: path.to_owned(),
            entries,
        }),
    }
}
