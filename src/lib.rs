pub mod config;
pub mod finder;
pub mod preset;
pub mod rules;

pub use config::FixerConfig;
pub use finder::{Finder, FinderError};
pub use preset::styles;
pub use rules::{RuleSet, RuleValue};
