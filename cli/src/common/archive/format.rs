//! # assetpack Archive Wire Format (`common::archive::format`)
//!
//! File: cli/src/common/archive/format.rs
//!
//! ## Layout (version 1)
//!
//! All integers are little-endian.
//!
//! ```text
//! magic        4 bytes   "APAK"
//! version      u16       1
//! entry count  u32
//! entries      repeated `entry count` times, ascending key order:
//!   key len    u32
//!   key        key len bytes, UTF-8
//!   value len  u64
//!   value      value len bytes, opaque
//! ```
//!
//! An empty archive is exactly the 10-byte header with a zero count.
//!

/// Archive header magic.
pub const MAGIC: [u8; 4] = *b"APAK";

/// Current (and only) wire format version.
pub const VERSION: u16 = 1;
