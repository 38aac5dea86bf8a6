//! CLI subcommands and their shared renderer-resolution plumbing.

pub mod check;
pub mod render;

use std::fmt;
use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::Args;

use sphinx_wiki::{default_config_path, RendererConfig};

/// Where the renderer comes from; shared by every subcommand.
#[derive(Args, Debug)]
pub struct RendererArgs {
    /// Renderer executable (overrides any config file)
    #[arg(long, value_name = "PATH")]
    renderer: Option<PathBuf>,

    /// Working directory for the renderer (defaults to the system temp dir)
    #[arg(long, value_name = "DIR", requires = "renderer")]
    scratch_dir: Option<PathBuf>,

    /// Config file (defaults to <config dir>/sphinx-wiki/renderer.toml)
    #[arg(long, value_name = "FILE", conflicts_with = "renderer")]
    config: Option<PathBuf>,
}

/// Which source produced the resolved configuration.
pub enum ConfigSource {
    Flags,
    File(PathBuf),
}

impl fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Flags => write!(f, "command line"),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}

impl RendererArgs {
    /// Resolve the renderer configuration from flags or a config file.
    ///
    /// Relative multi-component commands are pinned to the CLI's own
    /// working directory here; bare names are left for PATH lookup at
    /// spawn time.
    pub fn resolve(&self) -> Result<(RendererConfig, ConfigSource)> {
        let (mut config, source) = if let Some(command) = &self.renderer {
            let mut config = RendererConfig::new(command);
            if let Some(dir) = &self.scratch_dir {
                config = config.with_scratch_dir(dir);
            }
            (config, ConfigSource::Flags)
        } else {
            let path = self.config.clone().unwrap_or_else(default_config_path);
            if !path.exists() {
                bail!(
                    "no renderer configured: pass --renderer PATH or create {}",
                    path.display()
                );
            }
            (RendererConfig::load_from(&path)?, ConfigSource::File(path))
        };

        // Spawn runs the renderer with its cwd moved to the scratch
        // directory, which makes a relative program path like
        // ./renderer.sh platform ambiguous: on Linux it would be looked
        // up in the scratch directory, not where the user ran us.
        // Canonicalize such paths now so check and render agree on what
        // runs. A path that does not exist here stays as given and fails
        // downstream.
        if config.command.is_relative() && config.command.components().count() > 1 {
            if let Ok(absolute) = config.command.canonicalize() {
                config.command = absolute;
            }
        }

        Ok((config, source))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(renderer: &str) -> RendererArgs {
        RendererArgs {
            renderer: Some(PathBuf::from(renderer)),
            scratch_dir: None,
            config: None,
        }
    }

    #[test]
    fn resolve_pins_a_relative_command_to_the_cwd() {
        // Tests run from the crate root, so ./src exists relative to us.
        let (config, _) = args("./src").resolve().unwrap();

        assert!(config.command.is_absolute());
        assert!(config.command.ends_with("src"));
    }

    #[test]
    fn resolve_leaves_bare_names_for_path_lookup() {
        let (config, _) = args("cat").resolve().unwrap();
        assert_eq!(config.command, PathBuf::from("cat"));
    }

    #[test]
    fn resolve_leaves_missing_relative_paths_alone() {
        let (config, _) = args("./does-not-exist/renderer").resolve().unwrap();
        assert_eq!(config.command, PathBuf::from("./does-not-exist/renderer"));
    }
}
