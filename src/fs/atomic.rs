//! Atomic file writes for generated artifacts.
//!
//! Content lands in a temporary sibling file which is synced and then
//! renamed over the target, so an interrupted run never leaves a
//! half-written exam on disk. Parent directories are created on demand.

use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Atomically write `content` to `path`, creating parent directories.
pub fn atomic_write<P: AsRef<Path>>(path: P, content: &[u8]) -> io::Result<()> {
    let path = path.as_ref();

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let temp = temp_path(path)?;
    if let Err(err) = write_and_sync(&temp, content) {
        let _ = fs::remove_file(&temp);
        return Err(err);
    }
    if let Err(err) = replace(&temp, path) {
        let _ = fs::remove_file(&temp);
        return Err(err);
    }
    Ok(())
}

/// Temporary sibling path: `.{filename}.tmp` in the target directory.
fn temp_path(target: &Path) -> io::Result<PathBuf> {
    let parent = target.parent().unwrap_or(Path::new("."));
    let name = target
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "invalid artifact path"))?;
    Ok(parent.join(format!(".{name}.tmp")))
}

fn write_and_sync(path: &Path, content: &[u8]) -> io::Result<()> {
    let mut file = File::create(path)?;
    file.write_all(content)?;
    file.sync_all()
}

/// Rename over the target; where rename cannot replace an existing file,
/// remove the target first and retry.
fn replace(source: &Path, target: &Path) -> io::Result<()> {
    match fs::rename(source, target) {
        Ok(()) => Ok(()),
        Err(err) if err.kind() == io::ErrorKind::AlreadyExists => {
            fs::remove_file(target)?;
            fs::rename(source, target)
        }
        Err(err) => Err(err),
    }
}
