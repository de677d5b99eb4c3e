//! Atomic file writes.
//!
//! All writes follow the same pattern:
//! 1. Write content to a temporary file in the same directory
//! 2. Sync the file to disk (fsync)
//! 3. Rename it over the target
//!
//! `std::fs::rename` replaces an existing destination on every supported
//! platform, so no platform-specific replace path is needed. Source and
//! destination share a directory and therefore a filesystem.
//!
//! On crash, a temporary file may remain (named `.{filename}.tmp`).

use crate::error::{AppError, Result};
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Atomically write bytes to a file, creating parent directories as needed.
///
/// # Example
///
/// ```no_run
/// use fmtconv::fs::atomic_write;
/// use std::path::Path;
///
/// atomic_write(Path::new("out.yaml"), b"key: value\n")?;
/// # Ok::<(), fmtconv::error::AppError>(())
/// ```
pub fn atomic_write<P: AsRef<Path>>(path: P, content: &[u8]) -> Result<()> {
    let path = path.as_ref();

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        fs::create_dir_all(parent).map_err(|e| {
            AppError::FileSystem(format!(
                "failed to create parent directory '{}': {}",
                parent.display(),
                e
            ))
        })?;
    }

    let temp_path = generate_temp_path(path)?;
    write_and_sync(&temp_path, content)?;
    replace(&temp_path, path)?;

    log::trace!("wrote {} bytes to {}", content.len(), path.display());
    Ok(())
}

/// Atomically write a string to a file.
pub fn atomic_write_file<P: AsRef<Path>>(path: P, content: &str) -> Result<()> {
    atomic_write(path, content.as_bytes())
}

fn generate_temp_path(target: &Path) -> Result<PathBuf> {
    let parent = target.parent().unwrap_or(Path::new("."));
    let filename = target
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| {
            AppError::FileSystem(format!("invalid file path '{}'", target.display()))
        })?;

    Ok(parent.join(format!(".{}.tmp", filename)))
}

fn write_and_sync(path: &Path, content: &[u8]) -> Result<()> {
    let mut file = File::create(path).map_err(|e| {
        AppError::FileSystem(format!(
            "failed to create temporary file '{}': {}",
            path.display(),
            e
        ))
    })?;

    file.write_all(content).map_err(|e| {
        let _ = fs::remove_file(path);
        AppError::FileSystem(format!("failed to write to temporary file: {}", e))
    })?;

    file.sync_all().map_err(|e| {
        let _ = fs::remove_file(path);
        AppError::FileSystem(format!("failed to sync temporary file to disk: {}", e))
    })?;

    Ok(())
}

fn replace(source: &Path, target: &Path) -> Result<()> {
    fs::rename(source, target).map_err(|e| {
        let _ = fs::remove_file(source);
        AppError::FileSystem(format!("failed to replace '{}': {}", target.display(), e))
    })?;

    sync_parent(target);
    Ok(())
}

/// Persist the directory entry as well.
#[cfg(unix)]
fn sync_parent(target: &Path) {
    if let Some(parent) = target.parent()
        && let Ok(dir) = File::open(parent)
    {
        let _ = dir.sync_all();
    }
}

#[cfg(not(unix))]
fn sync_parent(_target: &Path) {}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_atomic_write_new_file() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("out.json");

        atomic_write(&file_path, b"{}\n").unwrap();

        assert_eq!(fs::read_to_string(&file_path).unwrap(), "{}\n");
    }

    #[test]
    fn test_atomic_write_replace_existing() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("out.yaml");
        fs::write(&file_path, "old: true\n").unwrap();

        atomic_write_file(&file_path, "new: true\n").unwrap();

        assert_eq!(fs::read_to_string(&file_path).unwrap(), "new: true\n");
    }

    #[test]
    fn test_atomic_write_creates_parent_dirs() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("nested").join("dirs").join("out.xml");

        atomic_write_file(&file_path, "<root/>\n").unwrap();

        assert_eq!(fs::read_to_string(&file_path).unwrap(), "<root/>\n");
    }

    #[test]
    fn test_no_temp_file_remains() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("out.json");

        atomic_write(&file_path, b"[]").unwrap();

        let entries: Vec<_> = fs::read_dir(temp_dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        assert_eq!(entries, vec!["out.json".to_string()]);
    }

    #[test]
    fn test_atomic_write_into_missing_target_dir_path_fails_cleanly() {
        let temp_dir = TempDir::new().unwrap();
        let blocker = temp_dir.path().join("file");
        fs::write(&blocker, "x").unwrap();

        let result = atomic_write(blocker.join("out.json"), b"{}");

        assert!(matches!(result, Err(AppError::FileSystem(_))));
    }
}
