// ⚙️ Export Config - settings shared by `export` and `show`
//
// Precedence (lowest to highest):
// 1. Compiled defaults
// 2. TOML file passed with `--config`
// 3. CLI flags (`show --window`, `export --keep-duplicates`)

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{NetworkError, Result};

pub const DEFAULT_NEIGHBORHOOD_WINDOW: usize = 50;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ExportConfig {
    /// Characters of story text kept on each side of a mention
    pub neighborhood_window: usize,
    /// Drop exact duplicate rows from the export
    pub drop_duplicates: bool,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            neighborhood_window: DEFAULT_NEIGHBORHOOD_WINDOW,
            drop_duplicates: true,
        }
    }
}

impl ExportConfig {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| NetworkError::Config(e.to_string()))
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| NetworkError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Load `path` when given, otherwise the defaults
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    /// Apply CLI overrides; `None` keeps the current value.
    pub fn with_overrides(mut self, window: Option<usize>, keep_duplicates: bool) -> Self {
        if let Some(window) = window {
            self.neighborhood_window = window;
        }
        if keep_duplicates {
            self.drop_duplicates = false;
        }
        self
    }
}
