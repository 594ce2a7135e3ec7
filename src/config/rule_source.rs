#![forbid(unsafe_code)]

//! Loading rule sets from files, inline input, or the default rules file

use crate::error::ConfigError;
use crate::rules::{RuleInput, RuleSet};
use serde_json::Value;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Rules file looked up when no source is given
pub const DEFAULT_RULES_FILE: &str = ".patternlintrc";

/// Where the rule set comes from
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum RuleSource {
    /// JSON file holding a rule object or an array of them
    File(PathBuf),
    /// Rules passed directly
    Inline(RuleInput),
    /// `.patternlintrc` in the base directory
    #[default]
    Default,
}

impl RuleSource {
    /// Resolves the source relative to the current directory
    ///
    /// # Errors
    ///
    /// Same as [`RuleSource::load_in`] with the current directory as base.
    pub fn load(self) -> Result<RuleSet, ConfigError> {
        self.load_in(Path::new("."))
    }

    /// Resolves the source, reading relative paths from `base`
    ///
    /// # Errors
    ///
    /// - `ConfigError::NoRuleSource` if the default rules file is missing
    /// - `ConfigError::Io` if a rules file cannot be read
    /// - `ConfigError::InvalidJson` if a rules file is not valid JSON
    /// - `ConfigError::InvalidShape` if the JSON is not a rule object or array
    pub fn load_in(self, base: &Path) -> Result<RuleSet, ConfigError> {
        match self {
            RuleSource::Inline(input) => Ok(input.normalize()),
            RuleSource::File(path) => load_rules_file(&base.join(path)),
            RuleSource::Default => {
                let path = base.join(DEFAULT_RULES_FILE);
                match load_rules_file(&path) {
                    Err(ConfigError::Io { source, .. }) if source.kind() == ErrorKind::NotFound => {
                        Err(ConfigError::NoRuleSource { path })
                    }
                    other => other,
                }
            }
        }
    }
}

impl From<RuleInput> for RuleSource {
    fn from(input: RuleInput) -> Self {
        RuleSource::Inline(input)
    }
}

impl From<PathBuf> for RuleSource {
    fn from(path: PathBuf) -> Self {
        RuleSource::File(path)
    }
}

impl From<Option<PathBuf>> for RuleSource {
    fn from(path: Option<PathBuf>) -> Self {
        path.map_or(RuleSource::Default, RuleSource::File)
    }
}

/// Reads and normalizes a JSON rules file
///
/// # Errors
///
/// Returns `ConfigError::Io`, `ConfigError::InvalidJson` or
/// `ConfigError::InvalidShape`, each naming what failed.
pub fn load_rules_file(path: &Path) -> Result<RuleSet, ConfigError> {
    let content = fs::read(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let value: Value = serde_json::from_slice(&content).map_err(|source| ConfigError::InvalidJson {
        path: path.to_path_buf(),
        source,
    })?;

    let rules = RuleInput::from_json_value(value)?.normalize();
    tracing::debug!(path = %path.display(), rules = rules.len(), "loaded rules");
    Ok(rules)
}
