//! # assetpack List Command
//!
//! File: cli/src/commands/list.rs
//!
//! ## Overview
//!
//! `assetpack list <ARCHIVE>` decodes an archive and prints one line per
//! entry (size in bytes, then key) followed by the entry count.
//!
use crate::{common::archive::reader, core::error::Result};
use clap::Parser;
use std::path::PathBuf;

/// Arguments for `assetpack list`.
#[derive(Parser, Debug)]
#[command(about = "List the entries of an archive")]
pub struct ListArgs {
    /// Archive file to inspect.
    #[arg(required = true)]
    archive: PathBuf,
}

pub fn handle_list(args: ListArgs) -> Result<()> {
    let assets = reader::read_archive_file(&args.archive)?;
    for (key, value) in &assets {
        println!("{:>10}  {}", value.len(), key);
    }
    println!("{} assets in archive.", assets.len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_args_requires_archive() {
        assert!(ListArgs::try_parse_from(["list"]).is_err());
        let args = ListArgs::try_parse_from(["list", "out.pak"]).unwrap();
        assert_eq!(args.archive, PathBuf::from("out.pak"));
    }
}
