//! # assetpack Core Infrastructure
//!
//! File: cli/src/core/mod.rs
//!
//! ## Overview
//!
//! This module aggregates the infrastructure shared by every command:
//! - `config`: Configuration loading, merging, and resolution into `PackSettings`
//! - `error`: Error types and the crate-wide `Result` alias
//! - `extensions`: The `ExtensionSet` allowlist used by the collector
//!
//! ## Usage
//!
//! ```rust
//! use crate::core::config; // For loading configuration
//! use crate::core::error::{PackError, Result}; // For error handling
//! use crate::core::extensions::ExtensionSet; // For the allowlist
//! ```
//!
pub mod config;
pub mod error;
pub mod extensions;
