//! # assetpack Filesystem I/O Operations
//!
//! File: cli/src/common/fs/io.rs
//!
//! ## Overview
//!
//! Small wrappers around `std::fs` shared by the pack and unpack commands:
//! - **`ensure_dir_exists`**: Creates a directory (and parents) if missing and
//!   checks that an existing path really is a directory.
//! - **`create_file`**: Opens an output file for writing, creating its parent
//!   directory first.
//! - **`write_bytes_to_file`**: Writes a byte slice to a path, creating parents.
//! - **`resolve_cwd_relative`**: Anchors a user-supplied output path under the
//!   working directory.
//!
//! All errors carry the offending path as `anyhow` context.
//!
use crate::core::error::{PackError, Result};
use anyhow::Context;
use std::fs::{self, File};
use std::path::{Component, Path, PathBuf};
use tracing::{debug, info};

/// Ensures that a directory exists at the specified path.
///
/// If the path does not exist it is created recursively (like `mkdir -p`).
///
/// # Errors
///
/// Returns an `Err` if:
/// - The path exists but is not a directory.
/// - Creating the directory fails (e.g., due to permissions).
pub fn ensure_dir_exists(path: &Path) -> Result<()> {
    if path.as_os_str().is_empty() {
        return Ok(());
    }
    if !path.exists() {
        fs::create_dir_all(path)
            .with_context(|| format!("Failed to create directory {}", path.display()))?;
        info!("Created directory: {}", path.display());
    } else if !path.is_dir() {
        anyhow::bail!(PackError::FileSystem(format!(
            "Path exists but is not a directory: {}",
            path.display()
        )));
    } else {
        debug!("Directory already exists: {}", path.display());
    }
    Ok(())
}

/// Creates (or truncates) the file at `path`, creating its parent directory.
pub fn create_file(path: &Path) -> Result<File> {
    if let Some(parent) = path.parent() {
        ensure_dir_exists(parent)?;
    }
    File::create(path).with_context(|| format!("Failed to create file {}", path.display()))
}

/// Writes `content` to `path`, overwriting it and creating parent directories.
pub fn write_bytes_to_file(path: &Path, content: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        ensure_dir_exists(parent)?;
    }
    fs::write(path, content)
        .with_context(|| format!("Failed to write to file {}", path.display()))?;
    debug!("Wrote {} bytes to {}", content.len(), path.display());
    Ok(())
}

/// Joins `path` onto `cwd`, dropping any root or drive prefix.
///
/// `/tmp/out.pak` under `/work` becomes `/work/tmp/out.pak`. `..` components
/// are kept as given.
pub fn resolve_cwd_relative(cwd: &Path, path: &Path) -> PathBuf {
    let relative: PathBuf = path
        .components()
        .filter(|c| !matches!(c, Component::Prefix(_) | Component::RootDir))
        .collect();
    cwd.join(relative)
}
