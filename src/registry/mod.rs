//! Fixed mapping from scraper names to their scripts.

use std::path::{Path, PathBuf};

/// Built-in scrapers in declared order. `all` runs them in this order.
pub const SCRAPERS: &[(&str, &str)] = &[
    ("accessories", "puppet_scrapper_accessories.js"),
    ("bags", "puppet_scrapper_bags.js"),
    ("women", "puppet_scrapper_women.js"),
    ("men", "puppet_scrapper_men.js"),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScraperEntry {
    pub name: String,
    pub target: PathBuf,
}

#[derive(Debug, Clone)]
pub struct Registry {
    entries: Vec<ScraperEntry>,
}

impl Registry {
    /// The built-in scrapers, with scripts resolved against `scripts_dir`.
    pub fn builtin(scripts_dir: &Path) -> Self {
        Self::from_pairs(scripts_dir, SCRAPERS)
    }

    /// Later duplicates of a name are dropped so names stay unique.
    pub fn from_pairs(scripts_dir: &Path, pairs: &[(&str, &str)]) -> Self {
        let mut entries: Vec<ScraperEntry> = Vec::with_capacity(pairs.len());
        for (name, script) in pairs {
            if entries.iter().any(|e| e.name == *name) {
                continue;
            }
            entries.push(ScraperEntry {
                name: (*name).to_string(),
                target: scripts_dir.join(script),
            });
        }
        Self { entries }
    }

    pub fn resolve(&self, name: &str) -> Option<&Path> {
        self.entries
            .iter()
            .find(|e| e.name == name)
            .map(|e| e.target.as_path())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.resolve(name).is_some()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.name.as_str())
    }
}
