//! # assetpack Pack Command
//!
//! File: cli/src/commands/pack.rs
//!
//! ## Overview
//!
//! The default action of `assetpack`: collect the allowed files under the
//! asset root and write them to a single archive.
//!
//! ## Workflow
//!
//! 1. Load and merge configuration files (`core::config::load_config`).
//! 2. Apply the command-line flags and validate the root
//!    (`core::config::resolve_settings`).
//! 3. Collect the asset tree into memory (`common::fs::collect`).
//! 4. Write the archive (`common::archive::writer`).
//! 5. Print `<N> assets packaged.`
//!
//! ```bash
//! assetpack -p ./assets -e png,jpg,ogg -o build/assets.pak -x
//! ```
//!
use crate::{
    common::{
        archive::writer,
        fs::collect::{collect_assets, CollectOptions},
    },
    core::{
        config::{self, Overrides},
        error::Result,
    },
};
use anyhow::Context;
use clap::Args;
use std::path::PathBuf;
use tracing::info;

/// Flags for packing. These sit at the top level of the `assetpack` command.
#[derive(Args, Debug, Default)]
pub struct PackArgs {
    /// Comma-delimited list of allowed file extensions [default: png,jpg]
    #[arg(short = 'e', long = "extensions", value_name = "LIST")]
    pub extensions: Option<String>,

    /// Output archive, resolved under the current directory [default: out.pak]
    #[arg(short = 'o', long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Directory containing the files to pack [default: ./assets]
    #[arg(short = 'p', long = "path", value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// Strip file extensions from archive keys
    #[arg(short = 'x', long = "strip-extensions")]
    pub strip_extensions: bool,

    /// Configuration file to use instead of a discovered .assetpack.toml
    #[arg(short = 'c', long = "config", env = "ASSETPACK_CONFIG", value_name = "FILE")]
    pub config: Option<PathBuf>,
}

/// Runs a pack with the given flags.
///
/// With `verbose`, each archive key is printed to stdout before writing.
pub fn handle_pack(args: PackArgs, verbose: bool) -> Result<()> {
    let cfg = config::load_config(args.config.as_deref())?;
    let cwd = std::env::current_dir().context("Failed to get current directory")?;
    let settings = config::resolve_settings(
        &cfg.pack,
        Overrides {
            extensions: args.extensions,
            output: args.output,
            root: args.root,
            strip_extensions: args.strip_extensions,
            verbose,
        },
        &cwd,
    )?;
    info!(
        "Packing '{}' into '{}' (extensions: {}, strip: {})",
        settings.root.display(),
        settings.output.display(),
        settings.extensions,
        settings.strip_extensions
    );

    let assets = collect_assets(
        &settings.root,
        &settings.extensions,
        CollectOptions {
            strip_extensions: settings.strip_extensions,
        },
    )
    .with_context(|| format!("Failed to collect assets from {}", settings.root.display()))?;

    if settings.verbose {
        for key in assets.keys() {
            println!("writing {key}...");
        }
    }

    writer::write_archive_file(&settings.output, &assets)?;
    println!("{} assets packaged.", assets.len());
    Ok(())
}
