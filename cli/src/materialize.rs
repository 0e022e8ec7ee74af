//! Writing a file plan to disk.
//!
//! The plan is checked for order before anything is written. Files are
//! created with create-new semantics so an existing path is an error rather
//! than an overwrite. The first failure aborts the rest of the plan; what was
//! already written stays.

use crate::error::{Result, ScaffoldError};
use camino::Utf8Path;
use log::{debug, trace};
use std::fs::{self, OpenOptions};
use std::io::Write;
use tslib_scaffold::{FilePlan, PlanEntry};

/// Write every entry of `plan` beneath `root`, in order.
///
/// Returns the number of entries written.
///
/// # Errors
///
/// Returns [`ScaffoldError::Plan`] if a file precedes its directory, and
/// [`ScaffoldError::WriteFailed`] naming the first artifact that could not be
/// written.
pub fn materialize(root: &Utf8Path, plan: &FilePlan) -> Result<usize> {
    plan.verify_order()?;
    for entry in plan {
        write_entry(root, entry)?;
    }
    debug!("materialised {} entries under {root}", plan.len());
    Ok(plan.len())
}

fn write_entry(root: &Utf8Path, entry: &PlanEntry) -> Result<()> {
    let path = root.join(&entry.path);
    let failed = |source: std::io::Error| ScaffoldError::WriteFailed {
        path: path.clone(),
        source,
    };

    if entry.is_directory() {
        fs::create_dir_all(&path).map_err(failed)?;
    } else {
        let mut file = OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&path)
            .map_err(failed)?;
        file.write_all(entry.contents.as_bytes()).map_err(failed)?;
    }
    trace!("wrote {} {path}", entry.kind);
    Ok(())
}
