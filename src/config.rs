use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_FILE: &str = "restyle.toml";

/// Run configuration, loaded from an optional `restyle.toml` at the
/// project root. Every field has a default matching the conventional
/// pages layout.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Pages directory, relative to the project root.
    pub pages_dir: PathBuf,
    /// Nested subdirectory under `pages_dir`, also scanned. May be absent
    /// on disk.
    pub nested_dir: String,
    /// File extensions considered candidates.
    pub extensions: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            pages_dir: PathBuf::from("src/pages"),
            nested_dir: "mobile".to_string(),
            extensions: vec!["tsx".to_string()],
        }
    }
}

impl Config {
    pub fn load_or_default(project_root: impl AsRef<Path>) -> Result<Self> {
        let config_path = project_root.as_ref().join(CONFIG_FILE);

        if config_path.exists() {
            let content = fs::read_to_string(&config_path)
                .context("Failed to read config file")?;
            toml::from_str(&content).context("Failed to parse config file")
        } else {
            Ok(Self::default())
        }
    }

    /// Absolute pages directory for a given project root.
    pub fn pages_root(&self, project_root: &Path) -> PathBuf {
        project_root.join(&self.pages_dir)
    }
}
