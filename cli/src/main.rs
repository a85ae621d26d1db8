//! # assetpack Main Entry Point
//!
//! File: cli/src/main.rs
//!
//! ## Overview
//!
//! Entry point of the `assetpack` binary. It:
//! - Parses command-line arguments using Clap
//! - Sets up logging based on the verbosity flag (or `RUST_LOG`)
//! - Routes to the pack handler, or to `list` / `unpack` when named
//!
//! ## Examples
//!
//! ```bash
//! # Pack ./assets (png and jpg) into ./out.pak
//! assetpack
//!
//! # Pack sounds with per-file output, keys without extensions
//! assetpack -v -p ./sounds -e ogg,wav -o sounds.pak -x
//!
//! # Inspect and extract
//! assetpack list sounds.pak
//! assetpack unpack sounds.pak -d ./extracted
//! ```
//!
//! Pack flags cannot be combined with a subcommand; `-v` goes after the
//! subcommand name (`assetpack list sounds.pak -v`).
//!
//! Any error is printed to stderr and the process exits with status 1.
//!
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

mod commands; // Handlers for pack, list and unpack
mod common; // Archive format and filesystem collection
mod core; // Errors, configuration and the extension allowlist

/// Defines the top-level command-line arguments structure using Clap's derive macros.
#[derive(Parser, Debug)]
#[command(
    name = "assetpack",
    about = "Pack a directory of assets into a single binary archive",
    long_about = "Walks a directory, keeps files whose extension is allowed, and writes their\n\
                  contents into one length-prefixed archive keyed by relative path.\n\
                  Without a subcommand, packs using the flags below.",
    propagate_version = true,
    args_conflicts_with_subcommands = true,
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
    #[command(flatten)]
    pack: commands::pack::PackArgs,
    /// Print each file as it is handled; repeat for more detailed logs
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

/// Subcommands that operate on an existing archive.
#[derive(Subcommand, Debug)]
enum Commands {
    #[command(alias = "ls")]
    List(commands::list::ListArgs),
    Unpack(commands::unpack::UnpackArgs),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    fmt::Subscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();

    tracing::debug!("Parsed CLI arguments: {:?}", cli);

    let verbose = cli.verbose > 0;
    let command_result = match cli.command {
        None => commands::pack::handle_pack(cli.pack, verbose),
        Some(Commands::List(args)) => commands::list::handle_list(args),
        Some(Commands::Unpack(args)) => commands::unpack::handle_unpack(args, verbose),
    };

    if let Err(e) = command_result {
        tracing::error!("Command execution failed: {:?}", e);
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }

    Ok(())
}
