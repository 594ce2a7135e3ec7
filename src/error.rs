//! Error types for patternlint
//!
//! Errors follow a hierarchical structure: configuration problems and rule
//! compilation problems each get their own enum, and `LintError` wraps them
//! together with file-system errors and the failure-gate signal.

use std::path::PathBuf;

/// Configuration-related errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// No rule source was given and the default rules file does not exist
    #[error(
        "No rules found at {path}. Please provide either a JSON file of rules or a rules object."
    )]
    NoRuleSource { path: PathBuf },

    /// Rules file could not be read
    #[error("Failed to read rules file {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Rules file is not syntactically valid JSON
    #[error("Error in rules JSON {path}: {source}")]
    InvalidJson {
        path: PathBuf,
        source: serde_json::Error,
    },

    /// Rule input is neither a single descriptor nor a sequence of descriptors
    #[error("Invalid rule input: {0}")]
    InvalidShape(String),
}

/// Rule compilation errors
#[derive(Debug, thiserror::Error)]
pub enum RuleError {
    /// Pattern source is not a valid regular expression
    #[error("Invalid regex pattern in rule #{index} '{pattern}': {message}")]
    InvalidRegex {
        index: usize,
        pattern: String,
        message: String,
    },

    /// Modifier character has no regex equivalent
    #[error("Unsupported flag '{flag}' in rule #{index}")]
    UnsupportedFlag { index: usize, flag: char },
}

impl RuleError {
    /// Index of the offending rule in the normalized rule set
    pub fn rule_index(&self) -> usize {
        match self {
            RuleError::InvalidRegex { index, .. } | RuleError::UnsupportedFlag { index, .. } => {
                *index
            }
        }
    }
}

/// Top-level error type for patternlint
#[derive(Debug, thiserror::Error)]
pub enum LintError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Rule error
    #[error("Rule error: {0}")]
    Rule(#[from] RuleError),

    /// A document produced an unsuccessful report
    #[error("Pattern lint failed for {path}")]
    LintFailed { path: PathBuf },

    /// File discovery error
    #[error("File walker error: {0}")]
    FileWalker(#[from] crate::engine::file_walker::FileWalkerError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
