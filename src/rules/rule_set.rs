#![forbid(unsafe_code)]

//! Rule set normalization
//!
//! Rule configuration may hold a single rule object or an array of them.
//! `RuleInput` captures both shapes once at the boundary and `normalize`
//! turns either into the canonical ordered `RuleSet`.

use crate::error::ConfigError;
use crate::rules::Rule;
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;

/// Rule input as supplied by the caller
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuleInput {
    /// A lone rule descriptor
    Single(Rule),
    /// An ordered sequence of rule descriptors
    Many(Vec<Rule>),
}

impl RuleInput {
    /// Classifies raw JSON into a rule input
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidShape` if the value is neither an object
    /// nor an array, or if a descriptor has fields of the wrong type.
    pub fn from_json_value(value: Value) -> Result<Self, ConfigError> {
        match value {
            Value::Object(_) => serde_json::from_value(value)
                .map(RuleInput::Single)
                .map_err(|e| ConfigError::InvalidShape(format!("malformed rule descriptor: {}", e))),
            Value::Array(_) => serde_json::from_value(value)
                .map(RuleInput::Many)
                .map_err(|e| ConfigError::InvalidShape(format!("malformed rule descriptor: {}", e))),
            other => Err(ConfigError::InvalidShape(format!(
                "expected a rule object or an array of rule objects, got {}",
                json_kind(&other)
            ))),
        }
    }

    /// Converts the input into the canonical ordered rule set
    pub fn normalize(self) -> RuleSet {
        match self {
            RuleInput::Single(rule) => RuleSet::new(vec![rule]),
            RuleInput::Many(rules) => RuleSet::new(rules),
        }
    }
}

impl From<Rule> for RuleInput {
    fn from(rule: Rule) -> Self {
        RuleInput::Single(rule)
    }
}

impl From<Vec<Rule>> for RuleInput {
    fn from(rules: Vec<Rule>) -> Self {
        RuleInput::Many(rules)
    }
}

impl From<RuleSet> for RuleInput {
    fn from(set: RuleSet) -> Self {
        RuleInput::Many(set.to_rules())
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Canonical ordered sequence of rules
///
/// Cloning is cheap; the rules are shared with every report built from them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct RuleSet(Arc<[Arc<Rule>]>);

impl RuleSet {
    /// Creates a rule set preserving the given order
    pub fn new(rules: Vec<Rule>) -> Self {
        RuleSet(rules.into_iter().map(Arc::new).collect())
    }

    /// Number of rules
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if the set holds no rules
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Rule at `index`
    pub fn get(&self, index: usize) -> Option<&Arc<Rule>> {
        self.0.get(index)
    }

    /// Iterates rules in order
    pub fn iter(&self) -> impl Iterator<Item = &Arc<Rule>> {
        self.0.iter()
    }

    /// Copies the rules out as owned descriptors
    pub fn to_rules(&self) -> Vec<Rule> {
        self.0.iter().map(|rule| rule.as_ref().clone()).collect()
    }
}

impl Default for RuleSet {
    fn default() -> Self {
        RuleSet::new(Vec::new())
    }
}

impl From<RuleInput> for RuleSet {
    fn from(input: RuleInput) -> Self {
        input.normalize()
    }
}
