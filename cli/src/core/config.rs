//! # assetpack Configuration System
//!
//! File: cli/src/core/config.rs
//!
//! ## Overview
//!
//! This module loads, merges and validates the settings for a pack run and
//! resolves them, together with the command-line flags, into a single
//! explicit [`PackSettings`] value. Nothing downstream reads ambient state:
//! the collector and writer only see what `PackSettings` hands them.
//!
//! ## Architecture
//!
//! Configuration sources (in increasing order of precedence):
//! 1. Default values defined in the code (`png,jpg`, `./assets`, `out.pak`)
//! 2. User-specific `config.toml` in the platform config directory
//! 3. Project-specific `.assetpack.toml` in the current directory or ancestors
//!    (or an explicit file given with `--config`)
//! 4. Command-line flags
//!
//! ## Examples
//!
//! ```toml
//! [pack]
//! extensions = ["png", "jpg", "ogg"]
//! root = "~/game/assets"
//! output = "build/assets.pak"
//! strip_extensions = true
//! ```
//!
use crate::common::fs::io::resolve_cwd_relative;
use crate::core::error::{PackError, Result};
use crate::core::extensions::ExtensionSet;
use anyhow::{anyhow, Context};
use directories::ProjectDirs;
use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
};
use tracing::{debug, info, warn};

/// Represents the main configuration structure, loaded from TOML files.
#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub pack: PackConfig,
}

/// Settings for packing an asset tree, as written in one config file.
///
/// Every field is optional so that a file only overrides what it names.
/// Built-in defaults are applied last, in [`resolve_settings`].
#[derive(Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct PackConfig {
    /// Allowed extensions, with or without the leading `.`.
    pub extensions: Option<Vec<String>>,
    /// Directory to scan (can use ~).
    pub root: Option<String>,
    /// Archive file to write, always resolved under the working directory.
    pub output: Option<String>,
    /// Store keys without their file extension.
    pub strip_extensions: Option<bool>,
}

const DEFAULT_EXTENSIONS: [&str; 2] = ["png", "jpg"];
const DEFAULT_ROOT: &str = "./assets";
const DEFAULT_OUTPUT: &str = "out.pak";

/// Values given on the command line. `None` means "not given".
#[derive(Debug, Default, Clone)]
pub struct Overrides {
    pub extensions: Option<String>,
    pub output: Option<PathBuf>,
    pub root: Option<PathBuf>,
    pub strip_extensions: bool,
    pub verbose: bool,
}

/// Fully resolved settings for one pack run.
#[derive(Debug, Clone)]
pub struct PackSettings {
    pub root: PathBuf,
    pub output: PathBuf,
    pub extensions: ExtensionSet,
    pub strip_extensions: bool,
    pub verbose: bool,
}

const PROJECT_CONFIG_FILENAME: &str = ".assetpack.toml";

/// Loads the user config and the project (or explicit) config and merges them.
pub fn load_config(explicit: Option<&Path>) -> Result<Config> {
    let user_config = load_user_config()?;
    let project_config = match explicit {
        Some(path) => {
            info!("Loading configuration from: {}", path.display());
            Some(load_config_from_path(path)?)
        }
        None => load_project_config()?,
    };
    let mut merged_config = merge_configs(user_config.unwrap_or_default(), project_config);
    expand_config_paths(&mut merged_config);
    validate_config(&merged_config).context("Configuration validation failed")?;
    debug!("Final loaded configuration: {:?}", merged_config);
    Ok(merged_config)
}

fn load_user_config() -> Result<Option<Config>> {
    if let Some(proj_dirs) = ProjectDirs::from("", "", "assetpack") {
        let config_path = proj_dirs.config_dir().join("config.toml");
        if config_path.exists() {
            info!("Loading user configuration from: {}", config_path.display());
            load_config_from_path(&config_path).map(Some)
        } else {
            debug!(
                "User configuration file not found at {}",
                config_path.display()
            );
            Ok(None)
        }
    } else {
        warn!("Could not determine user config directory.");
        Ok(None)
    }
}

fn load_project_config() -> Result<Option<Config>> {
    let current_dir = std::env::current_dir().context("Failed to get current directory")?;
    if let Some(project_config_path) = find_project_config_path(&current_dir) {
        info!(
            "Loading project configuration from: {}",
            project_config_path.display()
        );
        load_config_from_path(&project_config_path).map(Some)
    } else {
        debug!("No {} found in current directory or ancestors.", PROJECT_CONFIG_FILENAME);
        Ok(None)
    }
}

/// Walks up from `start` looking for `.assetpack.toml`, stopping at a `.git` directory.
fn find_project_config_path(start: &Path) -> Option<PathBuf> {
    let mut path = start;
    loop {
        let project_config = path.join(PROJECT_CONFIG_FILENAME);
        if project_config.is_file() {
            return Some(project_config);
        }
        if path.join(".git").is_dir() {
            debug!(
                "Found .git directory at {}, stopping project config search.",
                path.display()
            );
            return None;
        }
        path = path.parent()?;
    }
}

fn load_config_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read configuration file: {}", path.display()))?;
    toml::from_str(&content)
        .with_context(|| format!("Failed to parse TOML from file: {}", path.display()))
}

/// Any value set in the project config wins over the user config.
fn merge_configs(user: Config, project: Option<Config>) -> Config {
    let Some(project) = project else {
        return user;
    };
    let (user, project) = (user.pack, project.pack);
    Config {
        pack: PackConfig {
            extensions: project.extensions.or(user.extensions),
            root: project.root.or(user.root),
            output: project.output.or(user.output),
            strip_extensions: project.strip_extensions.or(user.strip_extensions),
        },
    }
}

/// Expands `~` in the root. The output is never expanded: it always lands
/// under the working directory.
fn expand_config_paths(config: &mut Config) {
    if let Some(root) = config.pack.root.as_mut() {
        *root = shellexpand::tilde(root).into_owned();
        debug!("Expanded root path: {}", root);
    }
}

/// Checks the file-level values. The extension list is validated in
/// [`resolve_settings`], after `-e` had its chance to replace it.
fn validate_config(config: &Config) -> Result<()> {
    if config.pack.root.as_deref() == Some("") {
        return Err(anyhow!(PackError::Config(
            "root path cannot be empty".to_string()
        )));
    }
    match config.pack.output.as_deref() {
        Some("") => Err(anyhow!(PackError::Config(
            "output path cannot be empty".to_string()
        ))),
        Some(output) if output.starts_with('~') => Err(anyhow!(PackError::Config(format!(
            "output path '{output}' is resolved under the working directory; '~' is not supported"
        )))),
        _ => Ok(()),
    }
}

/// Applies command-line overrides on top of `config` and validates the result.
///
/// The output path is joined onto `cwd` whatever form it was given in. The
/// root must already exist as a directory.
///
/// # Errors
///
/// Returns `PackError::Config` for an invalid extension list (from `-e`, or
/// from config when `-e` is absent) or a root that is missing or not a
/// directory.
pub fn resolve_settings(config: &PackConfig, overrides: Overrides, cwd: &Path) -> Result<PackSettings> {
    let extensions = match (&overrides.extensions, &config.extensions) {
        (Some(list), _) => ExtensionSet::parse_list(list),
        (None, Some(tokens)) => ExtensionSet::from_tokens(tokens),
        (None, None) => ExtensionSet::from_tokens(DEFAULT_EXTENSIONS),
    }
    .context("Invalid extension list")?;

    let root = overrides
        .root
        .or_else(|| config.root.as_ref().map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_ROOT));
    if !root.exists() {
        anyhow::bail!(PackError::Config(format!(
            "Root path does not exist: {}",
            root.display()
        )));
    }
    if !root.is_dir() {
        anyhow::bail!(PackError::Config(format!(
            "Root path is not a directory: {}",
            root.display()
        )));
    }

    let output = overrides
        .output
        .or_else(|| config.output.as_ref().map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT));
    let output = resolve_cwd_relative(cwd, &output);

    Ok(PackSettings {
        root,
        output,
        extensions,
        strip_extensions: overrides.strip_extensions || config.strip_extensions.unwrap_or(false),
        verbose: overrides.verbose,
    })
}
