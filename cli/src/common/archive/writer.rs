//! # assetpack Archive Writer (`common::archive::writer`)
//!
//! File: cli/src/common/archive/writer.rs
//!
//! ## Overview
//!
//! Serializes an [`AssetMap`] into the length-prefixed format described in
//! [`super::format`]. The map is ordered by key, so the same map always
//! produces the same bytes.
//!
//! Writing is all-or-nothing from the caller's point of view: the first
//! failed write aborts. A file that was partly written is left on disk.
//!
use super::format::{MAGIC, VERSION};
use super::AssetMap;
use crate::common::fs::io::create_file;
use crate::core::error::{FormatError, PackError, Result};
use anyhow::Context;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use tracing::{debug, info};

/// Writes `assets` to `out` in archive format.
///
/// # Errors
///
/// Returns an `Err` if a key or the entry count does not fit its length
/// field, or if any write to `out` fails.
pub fn write_archive<W: Write>(assets: &AssetMap, mut out: W) -> Result<()> {
    let count = u32::try_from(assets.len()).map_err(|_| {
        PackError::from(FormatError::TooLarge {
            what: "entry count",
            len: assets.len() as u64,
        })
    })?;

    write_header(&mut out, count).context("Failed to write archive header")?;

    for (key, value) in assets {
        let key_len = u32::try_from(key.len()).map_err(|_| {
            PackError::from(FormatError::TooLarge {
                what: "key",
                len: key.len() as u64,
            })
        })?;
        write_entry(&mut out, key_len, key, value)
            .with_context(|| format!("Failed to write archive entry '{key}'"))?;
        debug!("Encoded {} ({} bytes)", key, value.len());
    }

    out.flush().context("Failed to flush archive")?;
    Ok(())
}

fn write_header<W: Write>(out: &mut W, count: u32) -> io::Result<()> {
    out.write_all(&MAGIC)?;
    out.write_all(&VERSION.to_le_bytes())?;
    out.write_all(&count.to_le_bytes())
}

fn write_entry<W: Write>(out: &mut W, key_len: u32, key: &str, value: &[u8]) -> io::Result<()> {
    out.write_all(&key_len.to_le_bytes())?;
    out.write_all(key.as_bytes())?;
    out.write_all(&(value.len() as u64).to_le_bytes())?;
    out.write_all(value)
}

/// Creates `path` (and its parent directory) and writes `assets` into it.
pub fn write_archive_file(path: &Path, assets: &AssetMap) -> Result<()> {
    let file = create_file(path)?;
    write_archive(assets, BufWriter::new(file))
        .with_context(|| format!("Failed to write archive {}", path.display()))?;
    info!("Wrote {} assets to '{}'", assets.len(), path.display());
    Ok(())
}
