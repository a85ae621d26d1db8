//! # assetpack Unpack Command
//!
//! File: cli/src/commands/unpack.rs
//!
//! ## Overview
//!
//! `assetpack unpack <ARCHIVE> [-d DIR]` writes every archive entry to
//! `DIR/<key>`, creating parent directories as needed. Keys are only ever
//! placed below `DIR`: absolute keys and keys with `.` or `..` segments are
//! refused before anything is written, as are archives where one key is a
//! directory of another (`a` next to `a/b`, which `pack -x` can produce).
//!
use crate::{
    common::{archive::reader, fs::io},
    core::error::{PackError, Result},
};
use clap::Parser;
use std::collections::HashSet;
use std::path::{Component, Path, PathBuf};
use tracing::info;

/// Arguments for `assetpack unpack`.
#[derive(Parser, Debug)]
#[command(about = "Extract the entries of an archive into a directory")]
pub struct UnpackArgs {
    /// Archive file to extract.
    #[arg(required = true)]
    archive: PathBuf,

    /// Destination directory.
    #[arg(short = 'd', long = "dest", default_value = ".")]
    dest: PathBuf,
}

pub fn handle_unpack(args: UnpackArgs, verbose: bool) -> Result<()> {
    let assets = reader::read_archive_file(&args.archive)?;

    // Validate every key up front so a bad archive writes nothing.
    let targets = assets
        .keys()
        .map(|key| entry_path(&args.dest, key))
        .collect::<Result<Vec<_>>>()?;
    if let Some((file, nested)) = find_nested_key(assets.keys().map(String::as_str)) {
        anyhow::bail!(PackError::FileSystem(format!(
            "Cannot unpack both '{file}' and '{nested}': '{file}' would have to be a file and a directory"
        )));
    }

    io::ensure_dir_exists(&args.dest)?;
    for ((key, value), target) in assets.iter().zip(&targets) {
        if verbose {
            println!("extracting {key}...");
        }
        io::write_bytes_to_file(target, value)?;
    }
    info!(
        "Unpacked {} assets into '{}'",
        assets.len(),
        args.dest.display()
    );
    println!("{} assets unpacked.", assets.len());
    Ok(())
}

/// Maps an archive key to a path below `dest`.
fn entry_path(dest: &Path, key: &str) -> Result<PathBuf> {
    let mut path = dest.to_path_buf();
    for part in key.split('/') {
        let is_plain = !part.is_empty()
            && !part.contains('\\')
            && Path::new(part)
                .components()
                .all(|c| matches!(c, Component::Normal(_)))
            && part != "."
            && part != "..";
        if !is_plain {
            anyhow::bail!(PackError::FileSystem(format!(
                "Refusing to unpack unsafe archive key '{key}'"
            )));
        }
        path.push(part);
    }
    Ok(path)
}

/// Finds a key that is a `/`-separated parent of another key.
fn find_nested_key<'a>(keys: impl Iterator<Item = &'a str> + Clone) -> Option<(&'a str, &'a str)> {
    let all: HashSet<&str> = keys.clone().collect();
    keys.into_iter().find_map(|key| {
        key.match_indices('/')
            .map(|(idx, _)| &key[..idx])
            .find(|parent| all.contains(parent))
            .map(|parent| (parent, key))
    })
}
