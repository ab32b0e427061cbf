//! Settings resolution and registry construction shared by all commands.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use uix_plugin::{DiscoveryConfig, PluginDiscovery, register_all};
use uix_registry::{Plugin, RegistryConfig, UiExports, Validation};

use crate::cli::Cli;
use crate::error::{CliError, Result};

/// Default config file looked up in the working directory.
pub const CONFIG_FILENAME: &str = "uix.toml";

/// Contents of `uix.toml`.
///
/// ```toml
/// [registry]
/// url_base_path = "/abc"
/// validation = "strict"
///
/// [plugins]
/// scan_dirs = ["plugins"]
/// paths = []
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub registry: RegistryConfig,
    pub plugins: DiscoveryConfig,
}

impl Settings {
    /// Load a config file; relative plugin paths resolve against its directory.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let settings: Self = toml::from_str(&content).map_err(|source| CliError::Config {
            path: path.to_path_buf(),
            source,
        })?;
        let base = path.parent().unwrap_or_else(|| Path::new("."));
        Ok(Self {
            plugins: settings.plugins.resolve_against(base),
            ..settings
        })
    }

    /// Settings for this invocation: the config file, then CLI overrides.
    pub fn resolve(cli: &Cli, cwd: &Path) -> Result<Self> {
        let mut settings = match config_path(cli.config.as_deref(), cwd)? {
            Some(path) => {
                tracing::debug!(path = %path.display(), "Loading config");
                Self::load(&path)?
            }
            None => Self::default(),
        };

        settings
            .plugins
            .scan_dirs
            .extend(cli.plugin_dirs.iter().map(|dir| cwd.join(dir)));
        if let Some(base_path) = &cli.base_path {
            settings.registry.url_base_path = base_path.clone();
        }
        if cli.lenient {
            settings.registry.validation = Validation::Lenient;
        }
        Ok(settings)
    }
}

fn config_path(explicit: Option<&Path>, cwd: &Path) -> Result<Option<PathBuf>> {
    match explicit {
        Some(path) => {
            let path = cwd.join(path);
            if !path.is_file() {
                return Err(CliError::user(format!(
                    "config file not found: {}",
                    path.display()
                )));
            }
            Ok(Some(path))
        }
        None => {
            let default = cwd.join(CONFIG_FILENAME);
            Ok(default.is_file().then_some(default))
        }
    }
}

/// A registry with every discovered plugin consumed.
pub struct Context {
    pub registry: UiExports,
    pub plugins: Vec<Plugin>,
}

impl Context {
    pub fn build(settings: Settings) -> Result<Self> {
        let discovered = PluginDiscovery::new(settings.plugins).discover()?;
        let mut registry = UiExports::new(settings.registry);
        let plugins = register_all(&mut registry, &discovered)?;
        tracing::debug!(plugins = plugins.len(), "Registry built");
        Ok(Self { registry, plugins })
    }
}
