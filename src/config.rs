//! Rule configuration loading

pub mod rule_source;

pub use rule_source::{DEFAULT_RULES_FILE, RuleSource, load_rules_file};
