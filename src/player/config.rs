//! Player configuration

use super::picker::RandomPicker;
use crate::catalog;
use crate::model::VideoLibrary;
use anyhow::Result;
use std::path::PathBuf;

/// Prompt printed before each command
pub const DEFAULT_PROMPT: &str = "YT> ";

/// Configuration for a player session
#[derive(Debug, Clone)]
pub struct PlayerConfig {
    /// Catalogue file to load (None = bundled catalogue)
    pub catalog_path: Option<PathBuf>,

    /// Seed for random play (None = seeded from entropy)
    pub seed: Option<u64>,

    /// Interactive prompt
    pub prompt: String,
}

impl PlayerConfig {
    /// Create a configuration using the bundled catalogue
    pub fn new() -> Self {
        Self {
            catalog_path: None,
            seed: None,
            prompt: DEFAULT_PROMPT.to_string(),
        }
    }

    /// Load videos from a catalogue file
    pub fn with_catalog(mut self, path: PathBuf) -> Self {
        self.catalog_path = Some(path);
        self
    }

    /// Make random play reproducible
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the interactive prompt
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    /// Load the configured catalogue
    pub fn load_library(&self) -> Result<VideoLibrary> {
        match &self.catalog_path {
            Some(path) => catalog::load_catalog(path),
            None => catalog::bundled_catalog(),
        }
    }

    /// Random picker honouring the configured seed
    pub fn picker(&self) -> RandomPicker {
        match self.seed {
            Some(seed) => RandomPicker::seeded(seed),
            None => RandomPicker::new(),
        }
    }
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self::new()
    }
}
