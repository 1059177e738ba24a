mod types;

pub use types::FixerConfig;

use std::path::Path;

use crate::rules::RuleSet;

/// Load a caller override mapping from `path`, or from the nearest
/// `styleset.toml` found walking up from the current directory. No file
/// means no overrides.
pub fn load_overrides(path: Option<&Path>) -> Result<RuleSet, String> {
    if let Some(p) = path {
        let content = std::fs::read_to_string(p)
            .map_err(|e| format!("Failed to read overrides file: {}", e))?;
        toml::from_str(&content).map_err(|e| format!("Failed to parse overrides: {}", e))
    } else if let Some(found) = find_overrides_file() {
        let content = std::fs::read_to_string(&found)
            .map_err(|e| format!("Failed to read overrides file: {}", e))?;
        toml::from_str(&content).map_err(|e| format!("Failed to parse overrides: {}", e))
    } else {
        Ok(RuleSet::new())
    }
}

fn find_overrides_file() -> Option<std::path::PathBuf> {
    let mut current = std::env::current_dir().ok()?;

    loop {
        let overrides_path = current.join("styleset.toml");
        if overrides_path.exists() {
            return Some(overrides_path);
        }

        if !current.pop() {
            break;
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_overrides_from_explicit_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("styleset.toml");
        std::fs::write(&path, "single-quotes = false\n").unwrap();

        let overrides = load_overrides(Some(&path)).unwrap();
        assert!(!overrides.is_enabled("single-quotes"));
        assert_eq!(overrides.len(), 1);
    }

    #[test]
    fn test_load_overrides_reports_missing_explicit_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");

        assert!(load_overrides(Some(&path)).is_err());
    }

    #[test]
    fn test_load_overrides_reports_parse_errors() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("styleset.toml");
        std::fs::write(&path, "single-quotes = {\n").unwrap();

        assert!(load_overrides(Some(&path)).is_err());
    }
}
