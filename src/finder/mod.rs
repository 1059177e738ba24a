use std::path::{Path, PathBuf};

use globset::{Glob, GlobSet, GlobSetBuilder};
use ignore::WalkBuilder;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FinderError {
    #[error("Invalid name pattern: {0}")]
    Pattern(#[from] globset::Error),
    #[error("Failed to walk search root: {0}")]
    Walk(#[from] ignore::Error),
}

/// Selects the files the fixer operates on. The selection is part of the
/// assembled configuration, so the whole description serializes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Finder {
    paths: Vec<PathBuf>,
    exclude: Vec<String>,
    names: Vec<String>,
    not_names: Vec<String>,
}

impl Finder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a directory to search.
    pub fn in_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.paths.push(path.into());
        self
    }

    /// Skip files whose path contains `fragment`.
    pub fn not_path(mut self, fragment: impl Into<String>) -> Self {
        self.exclude.push(fragment.into());
        self
    }

    /// Restrict the selection to file names matching `pattern`. No name
    /// patterns means every file name is eligible.
    pub fn name(mut self, pattern: impl Into<String>) -> Self {
        self.names.push(pattern.into());
        self
    }

    /// Drop files whose name matches `pattern`.
    pub fn not_name(mut self, pattern: impl Into<String>) -> Self {
        self.not_names.push(pattern.into());
        self
    }

    /// Walk the search roots and return the selected files, sorted.
    /// Hidden files and gitignored files are never selected.
    pub fn files(&self) -> Result<Vec<PathBuf>, FinderError> {
        let names = build_globset(&self.names)?;
        let not_names = build_globset(&self.not_names)?;

        let mut selected = Vec::new();

        for root in &self.paths {
            let walker = WalkBuilder::new(root).standard_filters(true).build();

            for entry in walker {
                let entry = entry?;

                if !entry.file_type().map(|t| t.is_file()).unwrap_or(false) {
                    continue;
                }

                let path = entry.path();
                if self.is_excluded(path) {
                    continue;
                }

                let file_name = match path.file_name() {
                    Some(name) => name,
                    None => continue,
                };

                if !self.names.is_empty() && !names.is_match(file_name) {
                    continue;
                }
                if not_names.is_match(file_name) {
                    continue;
                }

                selected.push(path.to_path_buf());
            }
        }

        selected.sort();
        Ok(selected)
    }

    fn is_excluded(&self, path: &Path) -> bool {
        let path_str = path.to_string_lossy();
        self.exclude
            .iter()
            .any(|fragment| path_str.contains(fragment.trim_matches('*')))
    }
}

fn build_globset(patterns: &[String]) -> Result<GlobSet, globset::Error> {
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        builder.add(Glob::new(pattern)?);
    }
    builder.build()
}
