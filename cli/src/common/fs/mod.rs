//! # assetpack Filesystem Utilities (`common::fs`)
//!
//! File: cli/src/common/fs/mod.rs
//!
//! ## Overview
//!
//! Filesystem-facing code for assetpack:
//!
//! - **`collect`**: Walks an asset root and builds the in-memory `AssetMap`.
//! - **`io`**: Directory creation, output file creation, byte writes, and
//!   working-directory path resolution.
//!
//! Import from the submodule directly, e.g. `crate::common::fs::io::create_file`.
//!

/// Builds an `AssetMap` from a directory tree (`collect_assets`).
pub mod collect;
/// Basic file I/O helpers (`ensure_dir_exists`, `create_file`, `write_bytes_to_file`).
pub mod io;
