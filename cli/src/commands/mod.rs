//! # assetpack Command Modules
//!
//! File: cli/src/commands/mod.rs
//!
//! ## Overview
//!
//! One module per action of the `assetpack` binary:
//!
//! - **`pack`**: The default action. Collects an asset tree into an archive.
//! - **`list`**: Prints the entries of an archive.
//! - **`unpack`**: Extracts an archive into a directory.
//!
//! Each module exposes a `clap` argument struct and a `handle_*` function
//! returning `core::error::Result<()>`. `main.rs` routes to them.
//!
pub mod list;
pub mod pack;
pub mod unpack;
