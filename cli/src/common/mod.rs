//! # assetpack Common Utilities (`common`)
//!
//! File: cli/src/common/mod.rs
//!
//! ## Overview
//!
//! Shared building blocks used by the command handlers:
//!
//! - **`archive`**: The archive wire format, writer and reader, plus the
//!   `AssetMap` type they exchange.
//! - **`fs`**: Collecting an asset tree from disk and small I/O helpers.
//!
//! Command handlers (`commands::`) orchestrate these; configuration and error
//! types live in `core::`.
//!

/// Archive format, encoding and decoding.
pub mod archive;
/// Filesystem collection and I/O helpers.
pub mod fs;
