use serde::{Deserialize, Serialize};

use crate::finder::Finder;
use crate::rules::RuleSet;

/// The configuration object handed to the fixer's command-line entry
/// point. Scalar fields stay ahead of the tables for TOML emission.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FixerConfig {
    pub allow_risky: bool,
    pub finder: Finder,
    pub rules: RuleSet,
}

impl FixerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_finder(mut self, finder: Finder) -> Self {
        self.finder = finder;
        self
    }

    pub fn with_risky_allowed(mut self, allow: bool) -> Self {
        self.allow_risky = allow;
        self
    }

    pub fn with_rules(mut self, rules: RuleSet) -> Self {
        self.rules = rules;
        self
    }
}
