use crate::document::renumber;
use crate::numbering::NumberingOptions;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Read a markdown file and return its content
pub fn read_file(path: &Path) -> Result<String, IoError> {
    if !path.exists() {
        return Err(IoError::NotFound(path.to_path_buf()));
    }
    fs::read_to_string(path).map_err(|source| IoError::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// Replace the contents of `path` with `content`.
///
/// The new text goes to a temporary file in the same directory which is then
/// renamed over the target, so a failed write leaves the original intact.
/// Symlinks are followed so the link survives. Files with more than one hard
/// link are written through directly instead, since a rename would detach
/// this name from the others.
pub fn write_file_atomic(path: &Path, content: &str) -> Result<(), IoError> {
    let write_error = |source: std::io::Error| IoError::Write {
        path: path.to_path_buf(),
        source,
    };

    let target = resolve_target(path).map_err(write_error)?;
    let existing = fs::metadata(&target).ok();
    if existing.as_ref().is_some_and(has_other_links) {
        log::debug!("{} has other hard links, writing in place", target.display());
        return fs::write(&target, content).map_err(write_error);
    }

    let dir = match target.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut temp = NamedTempFile::new_in(dir).map_err(write_error)?;
    temp.write_all(content.as_bytes()).map_err(write_error)?;
    temp.as_file().sync_all().map_err(write_error)?;

    if let Some(metadata) = existing {
        fs::set_permissions(temp.path(), metadata.permissions()).map_err(write_error)?;
    }

    temp.persist(&target).map_err(|e| write_error(e.error))?;
    Ok(())
}

/// The file a write to `path` should replace: the link target for symlinks,
/// otherwise `path` itself.
fn resolve_target(path: &Path) -> std::io::Result<PathBuf> {
    match fs::symlink_metadata(path) {
        Ok(metadata) if metadata.file_type().is_symlink() => fs::canonicalize(path),
        _ => Ok(path.to_path_buf()),
    }
}

#[cfg(unix)]
fn has_other_links(metadata: &fs::Metadata) -> bool {
    use std::os::unix::fs::MetadataExt;
    metadata.nlink() > 1
}

#[cfg(not(unix))]
fn has_other_links(_metadata: &fs::Metadata) -> bool {
    false
}

/// Renumber the file at `path` and return the rewritten text.
pub fn process_file(path: &Path, options: &NumberingOptions) -> Result<String, IoError> {
    log::debug!("processing {}", path.display());
    let content = read_file(path)?;
    Ok(renumber(&content, options))
}

/// Renumber the file at `path` in place. Returns `false` when the file was
/// already up to date and nothing was written.
pub fn update_in_place(path: &Path, options: &NumberingOptions) -> Result<bool, IoError> {
    log::debug!("updating {} in place", path.display());
    let content = read_file(path)?;
    let updated = renumber(&content, options);
    if updated == content {
        log::info!("{} is already up to date", path.display());
        return Ok(false);
    }
    write_file_atomic(path, &updated)?;
    log::info!("updated {}", path.display());
    Ok(true)
}
