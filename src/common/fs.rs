//! Common file system operations with unified error handling
//!
//! Symlink handling lives here so the builder and the linker agree on what
//! "replace" means: links are removed, empty directories are removed, and
//! anything holding data is left alone.

use std::fs;
use std::io;
use std::path::Path;

use crate::error::{self, Result};

/// What [`safe_clear`] found (and removed) at the target path
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cleared {
    /// Nothing was there
    Absent,
    /// A symlink was removed; its target was not touched
    Link,
    /// An empty directory was removed
    EmptyDir,
}

/// Make `target` free for a new symlink without destroying data
///
/// Fails with `DestinationNotEmpty` if `target` is a directory with entries
/// or any other non-link object. Nothing is removed in that case.
pub fn safe_clear(target: &Path) -> Result<Cleared> {
    let metadata = match fs::symlink_metadata(target) {
        Ok(metadata) => metadata,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Cleared::Absent),
        Err(e) => return Err(error::fs::remove_failed(target.display().to_string(), e)),
    };

    if metadata.file_type().is_symlink() {
        remove_symlink(target)
            .map_err(|e| error::fs::remove_failed(target.display().to_string(), e))?;
        log::debug!("Removed existing symlink {}", target.display());
        return Ok(Cleared::Link);
    }

    if metadata.is_dir() {
        let mut entries = fs::read_dir(target)
            .map_err(|e| error::fs::remove_failed(target.display().to_string(), e))?;
        if entries.next().is_none() {
            fs::remove_dir(target)
                .map_err(|e| error::fs::remove_failed(target.display().to_string(), e))?;
            log::debug!("Removed empty directory {}", target.display());
            return Ok(Cleared::EmptyDir);
        }
    }

    Err(error::fs::destination_not_empty(
        target.display().to_string(),
    ))
}

/// Remove a regular file or symlink at `path`
///
/// Returns `false` if nothing was there. Directories are refused.
pub fn remove_file_or_link(path: &Path) -> Result<bool> {
    let metadata = match fs::symlink_metadata(path) {
        Ok(metadata) => metadata,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(false),
        Err(e) => return Err(error::fs::remove_failed(path.display().to_string(), e)),
    };

    if metadata.file_type().is_symlink() {
        remove_symlink(path).map_err(|e| error::fs::remove_failed(path.display().to_string(), e))?;
    } else if metadata.is_dir() {
        return Err(error::fs::remove_failed(
            path.display().to_string(),
            "is a directory",
        ));
    } else {
        fs::remove_file(path).map_err(|e| error::fs::remove_failed(path.display().to_string(), e))?;
    }

    Ok(true)
}

/// Remove `path` only if it is a symlink
///
/// Returns `true` if a link was removed.
pub fn remove_link_if_present(path: &Path) -> Result<bool> {
    match fs::symlink_metadata(path) {
        Ok(metadata) if metadata.file_type().is_symlink() => {
            remove_symlink(path)
                .map_err(|e| error::fs::remove_failed(path.display().to_string(), e))?;
            Ok(true)
        }
        Ok(_) => Ok(false),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
        Err(e) => Err(error::fs::remove_failed(path.display().to_string(), e)),
    }
}

/// Create a symlink at `link` pointing to `source`
pub fn create_symlink(source: &Path, link: &Path) -> Result<()> {
    let result = if source.is_dir() {
        symlink_dir(source, link)
    } else {
        symlink_file(source, link)
    };

    result.map_err(|e| {
        error::fs::symlink_failed(
            link.display().to_string(),
            source.display().to_string(),
            e,
        )
    })?;

    log::debug!("Linked {} -> {}", link.display(), source.display());
    Ok(())
}

/// Makes a symbolic link to a directory.
#[cfg(unix)]
fn symlink_dir(src: &Path, dst: &Path) -> io::Result<()> {
    std::os::unix::fs::symlink(src, dst)
}

/// Makes a symbolic link to a directory.
#[cfg(windows)]
fn symlink_dir(src: &Path, dst: &Path) -> io::Result<()> {
    std::os::windows::fs::symlink_dir(src, dst)
}

/// Makes a symbolic link to a file.
#[cfg(unix)]
fn symlink_file(src: &Path, dst: &Path) -> io::Result<()> {
    std::os::unix::fs::symlink(src, dst)
}

/// Makes a symbolic link to a file.
#[cfg(windows)]
fn symlink_file(src: &Path, dst: &Path) -> io::Result<()> {
    std::os::windows::fs::symlink_file(src, dst)
}

// Directory symlinks on Windows are removed with remove_dir
#[cfg(windows)]
fn remove_symlink(path: &Path) -> io::Result<()> {
    fs::remove_file(path).or_else(|_| fs::remove_dir(path))
}

#[cfg(not(windows))]
fn remove_symlink(path: &Path) -> io::Result<()> {
    fs::remove_file(path)
}
