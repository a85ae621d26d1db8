//! # assetpack Error Types
//!
//! File: cli/src/core/error.rs
//!
//! ## Overview
//!
//! This module defines the error types used throughout assetpack. Every
//! failure in a pack, list or unpack run is fatal, so the types exist to give
//! the user a precise message and to let tests tell failure classes apart.
//!
//! ## Architecture
//!
//! The error system consists of three parts:
//! - `PackError`: The top-level failure classes (configuration, filesystem,
//!   duplicate keys, archive format).
//! - `FormatError`: The ways an archive stream can fail to decode or encode.
//! - `Result<T>`: A type alias for `anyhow::Result<T>` so path context can be
//!   attached with `anyhow::Context` at each call site.
//!
//! ## Examples
//!
//! ```rust
//! // Return a specific error type
//! if !root.is_dir() {
//!     anyhow::bail!(PackError::Config(format!("Not a directory: {}", root.display())));
//! }
//!
//! // Add context to errors using anyhow
//! let bytes = fs::read(&path)
//!     .with_context(|| format!("Failed to read file {}", path.display()))?;
//!
//! // Pattern matching on error types
//! if let Some(PackError::Format(FormatError::BadMagic { .. })) = err.downcast_ref() {
//!     println!("Not an assetpack archive");
//! }
//! ```
//!
use thiserror::Error;

/// Custom error type for assetpack.
#[derive(Error, Debug)]
pub enum PackError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Filesystem error: {0}")]
    FileSystem(String),

    #[error("Duplicate archive key '{key}' (from '{first}' and '{second}')")]
    DuplicateKey {
        key: String,
        first: String,
        second: String,
    },

    #[error("Archive format error: {source}")]
    Format {
        #[from]
        source: FormatError,
    },
}

/// Failures while encoding or decoding the archive wire format.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum FormatError {
    #[error("bad magic bytes {found:?}, expected {expected:?}")]
    BadMagic { found: [u8; 4], expected: [u8; 4] },

    #[error("unsupported archive version {0}")]
    UnsupportedVersion(u16),

    #[error("archive truncated while reading {0}")]
    Truncated(&'static str),

    #[error("entry key is not valid UTF-8")]
    InvalidKey,

    #[error("entry key '{0}' appears more than once")]
    DuplicateKey(String),

    #[error("unexpected data after the last entry")]
    TrailingData,

    #[error("{what} length {len} exceeds the format limit")]
    TooLarge { what: &'static str, len: u64 },
}

/// Type alias for Result using anyhow::Error for broad compatibility.
pub type Result<T> = anyhow::Result<T>;

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let config_err = PackError::Config("extension list is empty".to_string());
        assert_eq!(
            config_err.to_string(),
            "Configuration error: extension list is empty"
        );

        let dup = PackError::DuplicateKey {
            key: "icon".into(),
            first: "icon.jpg".into(),
            second: "icon.png".into(),
        };
        assert_eq!(
            dup.to_string(),
            "Duplicate archive key 'icon' (from 'icon.jpg' and 'icon.png')"
        );

        let format: PackError = FormatError::UnsupportedVersion(9).into();
        assert_eq!(
            format.to_string(),
            "Archive format error: unsupported archive version 9"
        );
    }

    #[test]
    fn test_downcast_from_anyhow() {
        let err: anyhow::Error = PackError::from(FormatError::TrailingData).into();
        let err = err.context("Failed to read archive");
        assert!(matches!(
            err.downcast_ref::<PackError>(),
            Some(PackError::Format {
                source: FormatError::TrailingData
            })
        ));
    }
}
