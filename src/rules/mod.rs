use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

static DEFAULT_RULES: Lazy<RuleSet> =
    Lazy::new(|| toml::from_str(include_str!("defaults.toml")).unwrap());

/// Configuration for a single rule: a plain on/off flag, or an options
/// table interpreted by the fixer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RuleValue {
    Flag(bool),
    Options(toml::Table),
}

impl RuleValue {
    /// A rule configured with options counts as enabled.
    pub fn is_enabled(&self) -> bool {
        match self {
            RuleValue::Flag(enabled) => *enabled,
            RuleValue::Options(_) => true,
        }
    }
}

impl From<bool> for RuleValue {
    fn from(enabled: bool) -> Self {
        RuleValue::Flag(enabled)
    }
}

impl From<toml::Table> for RuleValue {
    fn from(options: toml::Table) -> Self {
        RuleValue::Options(options)
    }
}

/// Mapping from rule identifier to rule configuration. Consumed by key
/// lookup; serialized deterministically.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RuleSet {
    rules: BTreeMap<String, RuleValue>,
}

impl RuleSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// The rule set shipped with this crate.
    pub fn defaults() -> Self {
        DEFAULT_RULES.clone()
    }

    pub fn insert(&mut self, id: impl Into<String>, value: impl Into<RuleValue>) {
        self.rules.insert(id.into(), value.into());
    }

    pub fn get(&self, id: &str) -> Option<&RuleValue> {
        self.rules.get(id)
    }

    pub fn is_enabled(&self, id: &str) -> bool {
        self.rules.get(id).map(RuleValue::is_enabled).unwrap_or(false)
    }

    /// Overlay `overrides` onto this set. An override entry replaces the
    /// entry with the same identifier or is added if absent; everything
    /// else is kept. Identifiers and option shapes are not validated.
    pub fn merge(&mut self, overrides: RuleSet) {
        self.rules.extend(overrides.rules);
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &RuleValue)> {
        self.rules.iter()
    }
}
