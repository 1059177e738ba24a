use crate::config::FixerConfig;
use crate::finder::Finder;
use crate::rules::RuleSet;

/// Assemble the fixer configuration for a project: the shared defaults
/// overlaid with `overrides`, selecting files through `finder`. Risky
/// fixes are always allowed; disable individual risky rules through an
/// override instead.
pub fn styles(finder: Finder, overrides: RuleSet) -> FixerConfig {
    let mut rules = RuleSet::defaults();
    rules.merge(overrides);

    FixerConfig::new()
        .with_finder(finder)
        .with_risky_allowed(true)
        .with_rules(rules)
}
