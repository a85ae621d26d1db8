//! # assetpack Asset Collector
//!
//! File: cli/src/common/fs/collect.rs
//!
//! ## Overview
//!
//! Walks an asset root and reads every regular file whose extension is in
//! the allowlist into an [`AssetMap`], keyed by its `/`-separated path
//! relative to the root.
//!
//! ## Architecture
//!
//! - Traversal uses `walkdir`, sorted by file name, without following links.
//! - Directories and anything that is not a regular file are skipped.
//! - Every matching file is read fully into memory. The first walk or read
//!   failure aborts the collection; no partial map is returned.
//! - With `strip_extensions`, the matched extension is cut from the key. Two
//!   files landing on the same key is an error, and so is a dotfile such as
//!   `sub/.png`, whose name would strip down to nothing.
//!
use crate::common::archive::AssetMap;
use crate::core::error::{PackError, Result};
use crate::core::extensions::ExtensionSet;
use anyhow::Context;
use std::collections::HashMap;
use std::fs;
use std::path::{Component, Path};
use tracing::{debug, info};
use walkdir::WalkDir;

/// Options that change how collected files are keyed.
#[derive(Debug, Clone, Copy, Default)]
pub struct CollectOptions {
    /// Drop the matched extension from each key (`icon.png` becomes `icon`).
    pub strip_extensions: bool,
}

/// Collects all files under `root` whose extension is in `extensions`.
///
/// # Errors
///
/// Returns an `Err` if:
/// - `root` is not a directory or any directory under it cannot be read.
/// - A matching file cannot be opened or read.
/// - A matching file's relative path is not valid UTF-8.
/// - Two files map to the same key (`PackError::DuplicateKey`).
/// - Stripping leaves a file with an empty name (`sub/.png` becomes `sub/`).
pub fn collect_assets(
    root: &Path,
    extensions: &ExtensionSet,
    options: CollectOptions,
) -> Result<AssetMap> {
    if !root.is_dir() {
        anyhow::bail!(PackError::FileSystem(format!(
            "Asset root is not a readable directory: {}",
            root.display()
        )));
    }
    info!(
        "Collecting [{}] files from '{}'",
        extensions,
        root.display()
    );

    let mut assets = AssetMap::new();
    // key -> relative source path, for duplicate reporting
    let mut sources: HashMap<String, String> = HashMap::new();
    let mut total_bytes = 0usize;

    for entry_result in WalkDir::new(root).follow_links(false).sort_by_file_name() {
        let entry = match entry_result {
            Ok(e) => e,
            Err(err) => {
                let failed = err.path().unwrap_or(root).display().to_string();
                return Err(anyhow::Error::new(err)
                    .context(format!("Failed to walk directory entry {failed}")));
            }
        };
        let file_type = entry.file_type();
        if file_type.is_dir() {
            continue;
        }
        if !file_type.is_file() {
            debug!("Skipping non-regular entry: {}", entry.path().display());
            continue;
        }

        let file_name = entry.file_name().to_string_lossy();
        let Some(ext) = extensions.match_file_name(&file_name) else {
            debug!("Skipping unlisted extension: {}", entry.path().display());
            continue;
        };
        let ext_len = ext.len();

        let relative = relative_key(root, entry.path())?;
        let bytes = fs::read(entry.path())
            .with_context(|| format!("Failed to read file {}", entry.path().display()))?;

        let key = if options.strip_extensions {
            relative[..relative.len() - ext_len].to_string()
        } else {
            relative.clone()
        };
        if key.is_empty() || key.ends_with('/') {
            anyhow::bail!(PackError::FileSystem(format!(
                "Stripping the extension from '{relative}' leaves an empty file name"
            )));
        }

        if let Some(first) = sources.insert(key.clone(), relative.clone()) {
            anyhow::bail!(PackError::DuplicateKey {
                key,
                first,
                second: relative,
            });
        }
        debug!("Collected {} ({} bytes)", key, bytes.len());
        total_bytes += bytes.len();
        assets.insert(key, bytes);
    }

    info!(
        "Collected {} assets ({} bytes) from '{}'",
        assets.len(),
        total_bytes,
        root.display()
    );
    Ok(assets)
}

/// Joins the components of `path` below `root` with `/`.
fn relative_key(root: &Path, path: &Path) -> Result<String> {
    let relative = path.strip_prefix(root).with_context(|| {
        format!(
            "Could not determine relative path for '{}' based on '{}'",
            path.display(),
            root.display()
        )
    })?;
    let mut parts = Vec::new();
    for component in relative.components() {
        if let Component::Normal(part) = component {
            let part = part.to_str().ok_or_else(|| {
                PackError::FileSystem(format!(
                    "Path is not valid UTF-8: {}",
                    path.display()
                ))
            })?;
            parts.push(part);
        }
    }
    Ok(parts.join("/"))
}
