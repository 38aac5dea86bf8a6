//! Renderer configuration loaded from `~/.config/sphinx-wiki/renderer.toml`.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

/// Configuration for the external renderer process.
///
/// Immutable once constructed; the bridge reads it, never writes it.
#[derive(Debug, Clone, Deserialize)]
pub struct RendererConfig {
    /// Renderer executable: an absolute path, or a bare name resolved
    /// through `PATH` at spawn time.
    pub command: PathBuf,
    /// Working directory the renderer runs in. Defaults to the system
    /// temp directory.
    #[serde(default = "default_scratch_dir")]
    pub scratch_dir: PathBuf,
}

/// Top-level renderer configuration file.
#[derive(Debug, Clone, Deserialize)]
struct ConfigFile {
    renderer: RendererConfig,
}

impl RendererConfig {
    /// Create a configuration for `command` with the default scratch directory.
    #[must_use]
    pub fn new(command: impl Into<PathBuf>) -> Self {
        Self {
            command: command.into(),
            scratch_dir: default_scratch_dir(),
        }
    }

    /// Replace the scratch directory the renderer runs in.
    #[must_use]
    pub fn with_scratch_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.scratch_dir = dir.into();
        self
    }

    /// Load the configuration from a TOML file:
    ///
    /// ```toml
    /// [renderer]
    /// command = "/var/www/w/extensions/sphinx-wiki/sphinx-wiki.py"
    /// scratch_dir = "/tmp"
    /// ```
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;

        let file: ConfigFile = toml::from_str(&content)
            .with_context(|| format!("invalid TOML in {}", path.display()))?;

        Ok(file.renderer)
    }
}

/// Return the default path to the renderer config file.
#[must_use]
pub fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("sphinx-wiki")
        .join("renderer.toml")
}

fn default_scratch_dir() -> PathBuf {
    std::env::temp_dir()
}
