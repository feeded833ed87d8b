// crates/update_tasklist/src/io.rs

use anyhow::{Context, Result};
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

/// Atomically replace the file at `path` with `data` using a tempfile in the
/// same directory.
///
/// `path` must exist. Symlinks are resolved first so the file they point at
/// is the one replaced. The target must be openable for writing by this
/// process; the rename alone only needs a writable directory. The existing
/// file's permissions are carried over.
pub fn atomic_write(path: &Path, data: &[u8]) -> Result<()> {
    let target = fs::canonicalize(path)
        .with_context(|| format!("Error resolving {}", path.display()))?;

    let permissions = OpenOptions::new()
        .write(true)
        .open(&target)
        .and_then(|file| file.metadata())
        .map(|meta| meta.permissions())
        .with_context(|| format!("{} is not writable", target.display()))?;

    let dir = target.parent().unwrap_or_else(|| Path::new("."));
    let mut tmp = NamedTempFile::new_in(dir)
        .with_context(|| format!("Error creating temporary file in {}", dir.display()))?;
    tmp.write_all(data)
        .with_context(|| format!("Error writing temporary file {}", tmp.path().display()))?;
    fs::set_permissions(tmp.path(), permissions)
        .with_context(|| format!("Error copying permissions of {}", target.display()))?;
    tmp.persist(&target)
        .map_err(|e| e.error)
        .with_context(|| format!("Error replacing {}", target.display()))?;
    Ok(())
}
