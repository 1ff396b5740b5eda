//! Seed data configuration.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SeedConfig {
    /// JSON fixture to seed the in-memory store from. Empty uses the built-in fixture.
    #[serde(default)]
    pub fixture_path: String,
}

impl SeedConfig {
    #[must_use]
    pub fn fixture(&self) -> Option<PathBuf> {
        let trimmed = self.fixture_path.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(PathBuf::from(trimmed))
        }
    }
}
