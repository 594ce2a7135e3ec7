#![forbid(unsafe_code)]

//! Rule descriptors, normalization and compilation

mod regex_rule;
mod rule;
mod rule_set;

// Re-export core types
pub use regex_rule::{CompiledRule, normalize_flags};
pub use rule::{PatternSource, Rule};
pub use rule_set::{RuleInput, RuleSet};
