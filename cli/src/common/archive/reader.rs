//! # assetpack Archive Reader (`common::archive::reader`)
//!
//! File: cli/src/common/archive/reader.rs
//!
//! ## Overview
//!
//! Decodes a stream written by [`super::writer`] back into an [`AssetMap`].
//! Every length prefix is checked against the data actually available, and
//! buffers only grow with bytes that were read, so a corrupt length field
//! fails with `FormatError::Truncated` instead of a huge allocation.
//!
use super::format::{MAGIC, VERSION};
use super::AssetMap;
use crate::core::error::{FormatError, PackError, Result};
use anyhow::Context;
use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::Path;
use tracing::{debug, info};

/// Reads a complete archive from `input`.
///
/// # Errors
///
/// Returns `PackError::Format` for a bad magic, unknown version, truncated
/// stream, non-UTF-8 or repeated key, or bytes after the last entry. I/O
/// failures other than end-of-file are returned with context.
pub fn read_archive<R: Read>(mut input: R) -> Result<AssetMap> {
    let magic: [u8; 4] = read_array(&mut input, "magic")?;
    if magic != MAGIC {
        anyhow::bail!(PackError::from(FormatError::BadMagic {
            found: magic,
            expected: MAGIC,
        }));
    }
    let version = u16::from_le_bytes(read_array(&mut input, "version")?);
    if version != VERSION {
        anyhow::bail!(PackError::from(FormatError::UnsupportedVersion(version)));
    }
    let count = u32::from_le_bytes(read_array(&mut input, "entry count")?);
    debug!("Archive header: version {}, {} entries", version, count);

    let mut assets = AssetMap::new();
    for _ in 0..count {
        let key_len = u32::from_le_bytes(read_array(&mut input, "key length")?);
        let key_bytes = read_vec(&mut input, u64::from(key_len), "key")?;
        let key = String::from_utf8(key_bytes)
            .map_err(|_| PackError::from(FormatError::InvalidKey))?;

        let value_len = u64::from_le_bytes(read_array(&mut input, "value length")?);
        let value = read_vec(&mut input, value_len, "value")?;

        if assets.contains_key(&key) {
            anyhow::bail!(PackError::from(FormatError::DuplicateKey(key)));
        }
        assets.insert(key, value);
    }

    let mut rest = Vec::new();
    input
        .take(1)
        .read_to_end(&mut rest)
        .context("Failed to read archive")?;
    if !rest.is_empty() {
        anyhow::bail!(PackError::from(FormatError::TrailingData));
    }
    Ok(assets)
}

/// Opens `path` and reads the archive it holds.
pub fn read_archive_file(path: &Path) -> Result<AssetMap> {
    let file =
        File::open(path).with_context(|| format!("Failed to open archive {}", path.display()))?;
    let assets = read_archive(BufReader::new(file))
        .with_context(|| format!("Failed to read archive {}", path.display()))?;
    info!("Read {} assets from '{}'", assets.len(), path.display());
    Ok(assets)
}

fn read_array<R: Read, const N: usize>(input: &mut R, what: &'static str) -> Result<[u8; N]> {
    let mut buf = [0u8; N];
    match input.read_exact(&mut buf) {
        Ok(()) => Ok(buf),
        Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => {
            Err(PackError::from(FormatError::Truncated(what)).into())
        }
        Err(e) => Err(anyhow::Error::new(e).context(format!("Failed to read archive {what}"))),
    }
}

fn read_vec<R: Read>(input: &mut R, len: u64, what: &'static str) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    input
        .by_ref()
        .take(len)
        .read_to_end(&mut buf)
        .with_context(|| format!("Failed to read archive {what}"))?;
    if buf.len() as u64 != len {
        anyhow::bail!(PackError::from(FormatError::Truncated(what)));
    }
    Ok(buf)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::archive::writer::write_archive;

    fn encode_archive(assets: &AssetMap) -> Result<Vec<u8>> {
        let mut bytes = Vec::new();
        write_archive(assets, &mut bytes)?;
        Ok(bytes)
    }

    fn decode_archive(bytes: &[u8]) -> Result<AssetMap> {
        read_archive(bytes)
    }

    fn format_error(err: &anyhow::Error) -> Option<&FormatError> {
        match err.downcast_ref::<PackError>() {
            Some(PackError::Format { source }) => Some(source),
            _ => None,
        }
    }

    fn example_assets() -> AssetMap {
        [
            ("a.png".to_string(), vec![1, 2, 3]),
            ("sub/c.jpg".to_string(), vec![0xff, 0xd8]),
            ("empty.png".to_string(), vec![]),
            ("ünïcode/名前.png".to_string(), b"\x00\xff\x00".to_vec()),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_round_trip() -> Result<()> {
        let assets = example_assets();
        let decoded = decode_archive(&encode_archive(&assets)?)?;
        assert_eq!(decoded, assets);
        Ok(())
    }

    #[test]
    fn test_empty_archive_round_trip() -> Result<()> {
        let decoded = decode_archive(&encode_archive(&AssetMap::new())?)?;
        assert!(decoded.is_empty());
        Ok(())
    }

    #[test]
    fn test_bad_magic() {
        let err = decode_archive(b"PKZ\x03\x01\x00\x00\x00\x00\x00").unwrap_err();
        assert!(matches!(format_error(&err), Some(FormatError::BadMagic { .. })));
    }

    #[test]
    fn test_unsupported_version() {
        let err = decode_archive(b"APAK\x02\x00\x00\x00\x00\x00").unwrap_err();
        assert_eq!(format_error(&err), Some(&FormatError::UnsupportedVersion(2)));
    }

    #[test]
    fn test_truncated_header_and_value() -> Result<()> {
        let err = decode_archive(b"APAK\x01").unwrap_err();
        assert_eq!(format_error(&err), Some(&FormatError::Truncated("version")));

        let bytes = encode_archive(&example_assets())?;
        let err = decode_archive(&bytes[..bytes.len() - 1]).unwrap_err();
        assert_eq!(format_error(&err), Some(&FormatError::Truncated("value")));
        Ok(())
    }

    #[test]
    fn test_huge_length_prefix_is_truncation() {
        let mut bytes = b"APAK\x01\x00\x01\x00\x00\x00".to_vec();
        bytes.extend_from_slice(&1u32.to_le_bytes());
        bytes.push(b'k');
        bytes.extend_from_slice(&u64::MAX.to_le_bytes());
        bytes.extend_from_slice(b"short");

        let err = decode_archive(&bytes).unwrap_err();
        assert_eq!(format_error(&err), Some(&FormatError::Truncated("value")));
    }

    #[test]
    fn test_trailing_data() -> Result<()> {
        let mut bytes = encode_archive(&example_assets())?;
        bytes.push(0);
        let err = decode_archive(&bytes).unwrap_err();
        assert_eq!(format_error(&err), Some(&FormatError::TrailingData));
        Ok(())
    }

    #[test]
    fn test_invalid_utf8_key() {
        let mut bytes = b"APAK\x01\x00\x01\x00\x00\x00".to_vec();
        bytes.extend_from_slice(&2u32.to_le_bytes());
        bytes.extend_from_slice(&[0xc3, 0x28]);
        bytes.extend_from_slice(&0u64.to_le_bytes());

        let err = decode_archive(&bytes).unwrap_err();
        assert_eq!(format_error(&err), Some(&FormatError::InvalidKey));
    }

    #[test]
    fn test_duplicate_key() {
        let mut bytes = b"APAK\x01\x00\x02\x00\x00\x00".to_vec();
        for _ in 0..2 {
            bytes.extend_from_slice(&1u32.to_le_bytes());
            bytes.push(b'k');
            bytes.extend_from_slice(&0u64.to_le_bytes());
        }

        let err = decode_archive(&bytes).unwrap_err();
        assert_eq!(
            format_error(&err),
            Some(&FormatError::DuplicateKey("k".to_string()))
        );
    }
}
