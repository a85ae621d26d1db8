//! # assetpack Extension Allowlist
//!
//! File: cli/src/core/extensions.rs
//!
//! ## Overview
//!
//! `ExtensionSet` is the allowlist that decides which files the collector
//! packs. It is built once from configuration and then only read. Members are
//! normalized to carry a leading `.`, so the tokens `png` and `.png` are the
//! same member.
//!
//! Matching is case-sensitive and uses the suffix of the file name starting
//! at its last `.` (see [`extension_of`]).
//!
use crate::core::error::{PackError, Result};
use std::collections::BTreeSet;
use std::fmt;

/// Normalized, immutable set of file extensions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtensionSet {
    members: BTreeSet<String>,
}

impl ExtensionSet {
    /// Builds a set from raw tokens such as `["png", ".jpg"]`.
    ///
    /// Tokens are trimmed and prefixed with `.` when it is missing.
    ///
    /// # Errors
    ///
    /// Returns `PackError::Config` if no tokens are given or a token is empty.
    pub fn from_tokens<I, S>(tokens: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut members = BTreeSet::new();
        for token in tokens {
            let token = token.as_ref().trim();
            if token.is_empty() || token == "." {
                anyhow::bail!(PackError::Config(
                    "extension list contains an empty entry".to_string()
                ));
            }
            let normalized = if token.starts_with('.') {
                token.to_string()
            } else {
                format!(".{token}")
            };
            members.insert(normalized);
        }
        if members.is_empty() {
            anyhow::bail!(PackError::Config("extension list is empty".to_string()));
        }
        Ok(Self { members })
    }

    /// Parses a comma-delimited list as accepted by `-e`.
    pub fn parse_list(list: &str) -> Result<Self> {
        Self::from_tokens(list.split(','))
    }

    /// Returns true if `ext` (with leading `.`) is a member.
    pub fn contains(&self, ext: &str) -> bool {
        self.members.contains(ext)
    }

    /// Returns the extension of `file_name` if it is in the set.
    pub fn match_file_name<'a>(&self, file_name: &'a str) -> Option<&'a str> {
        extension_of(file_name).filter(|ext| self.contains(ext))
    }

    /// Iterates over the members in sorted order, each with its leading `.`.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.members.iter().map(String::as_str)
    }
}

impl fmt::Display for ExtensionSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let joined: Vec<&str> = self.iter().collect();
        write!(f, "{}", joined.join(","))
    }
}

/// Suffix of `file_name` starting at its last `.`, or `None` without one.
pub fn extension_of(file_name: &str) -> Option<&str> {
    file_name.rfind('.').map(|idx| &file_name[idx..])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dot_prefix_is_optional() {
        let bare = ExtensionSet::parse_list("png").unwrap();
        let dotted = ExtensionSet::parse_list(".png").unwrap();
        assert_eq!(bare, dotted);
        assert!(bare.contains(".png"));
        assert!(!bare.contains("png"));
    }

    #[test]
    fn test_parse_list_trims_and_dedups() {
        let set = ExtensionSet::parse_list(" png, .jpg ,png").unwrap();
        assert_eq!(set.iter().collect::<Vec<_>>(), vec![".jpg", ".png"]);
        assert_eq!(set.to_string(), ".jpg,.png");
    }

    #[test]
    fn test_empty_tokens_rejected() {
        for list in ["", "png,", ",jpg", "png,.,jpg"] {
            let err = ExtensionSet::parse_list(list).unwrap_err();
            assert!(
                matches!(err.downcast_ref::<PackError>(), Some(PackError::Config(_))),
                "expected config error for {list:?}"
            );
        }
        assert!(ExtensionSet::from_tokens(Vec::<String>::new()).is_err());
    }

    #[test]
    fn test_extension_of_uses_last_dot() {
        assert_eq!(extension_of("icon.png"), Some(".png"));
        assert_eq!(extension_of("archive.tar.gz"), Some(".gz"));
        assert_eq!(extension_of(".hidden"), Some(".hidden"));
        assert_eq!(extension_of("README"), None);
    }

    #[test]
    fn test_match_file_name_is_case_sensitive() {
        let set = ExtensionSet::parse_list("png,jpg").unwrap();
        assert_eq!(set.match_file_name("a.png"), Some(".png"));
        assert_eq!(set.match_file_name("a.PNG"), None);
        assert_eq!(set.match_file_name("b.txt"), None);
        assert_eq!(set.match_file_name("png"), None);
    }
}
