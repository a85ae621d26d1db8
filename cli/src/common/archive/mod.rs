//! # assetpack Archive Module (`common::archive`)
//!
//! File: cli/src/common/archive/mod.rs
//!
//! ## Overview
//!
//! Everything that touches the archive byte format:
//!
//! - **`format`**: Magic, version and layout of the wire format.
//! - **`writer`**: Serializes an `AssetMap` to any `Write` sink or file.
//! - **`reader`**: Decodes an archive back into an `AssetMap`.
//!
//! ## Usage
//!
//! ```rust
//! use crate::common::archive::{self, AssetMap};
//!
//! let mut assets = AssetMap::new();
//! assets.insert("sprites/hero.png".to_string(), vec![0x89, b'P', b'N', b'G']);
//!
//! let mut bytes = Vec::new();
//! archive::writer::write_archive(&assets, &mut bytes)?;
//! assert_eq!(archive::reader::read_archive(bytes.as_slice())?, assets);
//! ```
//!
use std::collections::BTreeMap;

pub mod format;
pub mod reader;
pub mod writer;

/// Relative `/`-separated path to raw file content, ordered by key.
pub type AssetMap = BTreeMap<String, Vec<u8>>;
