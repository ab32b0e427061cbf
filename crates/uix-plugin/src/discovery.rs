//! Plugin discovery from scan directories and explicit plugin paths.
//!
//! ```text
//! plugins/            <- scan dir
//!   kibana/
//!     uix_plugin.toml
//!   timelion/
//!     uix_plugin.toml
//!   notes.txt         <- ignored
//! ```
//!
//! Scan dirs are visited in configuration order and their plugin
//! directories in file-name order, followed by explicit paths. The result
//! is the discovery order the registry consumes plugins in.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use uix_registry::{Plugin, UiExports};

use crate::MANIFEST_FILENAME;
use crate::error::{Error, Result};
use crate::manifest::{DiscoveredPlugin, PluginManifest};

/// Where to look for plugins, usually the `[plugins]` table of `uix.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct DiscoveryConfig {
    /// Directories whose immediate subdirectories are plugins.
    pub scan_dirs: Vec<PathBuf>,
    /// Individual plugin directories.
    pub paths: Vec<PathBuf>,
}

impl DiscoveryConfig {
    /// Resolve relative entries against `base`.
    pub fn resolve_against(mut self, base: &Path) -> Self {
        for path in self.scan_dirs.iter_mut().chain(self.paths.iter_mut()) {
            if path.is_relative() {
                *path = base.join(&*path);
            }
        }
        self
    }
}

/// Finds plugin manifests on disk.
#[derive(Debug, Clone)]
pub struct PluginDiscovery {
    config: DiscoveryConfig,
}

impl PluginDiscovery {
    pub fn new(config: DiscoveryConfig) -> Self {
        Self { config }
    }

    /// Discover every plugin, in discovery order.
    ///
    /// Missing scan dirs are skipped. An explicit path without a manifest,
    /// an invalid manifest or a repeated plugin id is an error.
    pub fn discover(&self) -> Result<Vec<DiscoveredPlugin>> {
        let mut found = Vec::new();

        for scan_dir in &self.config.scan_dirs {
            if !scan_dir.is_dir() {
                tracing::warn!(path = %scan_dir.display(), "Plugin scan dir does not exist, skipping");
                continue;
            }
            for plugin_dir in plugin_dirs(scan_dir)? {
                found.push(load(&plugin_dir)?);
            }
        }

        for path in &self.config.paths {
            found.push(load(path)?);
        }

        let mut seen: HashMap<String, PathBuf> = HashMap::new();
        for plugin in &found {
            if let Some(first) = seen.insert(plugin.id().to_string(), plugin.path.clone()) {
                return Err(Error::DuplicatePluginId {
                    id: plugin.id().to_string(),
                    first,
                    second: plugin.path.clone(),
                });
            }
        }

        tracing::debug!(count = found.len(), "Discovered plugins");
        Ok(found)
    }
}

/// Subdirectories of `scan_dir` holding a manifest, sorted by name
fn plugin_dirs(scan_dir: &Path) -> Result<Vec<PathBuf>> {
    let io_err = |source| Error::Io {
        path: scan_dir.to_path_buf(),
        source,
    };

    let mut dirs = Vec::new();
    for entry in std::fs::read_dir(scan_dir).map_err(io_err)? {
        let path = entry.map_err(io_err)?.path();
        if path.is_dir() && path.join(MANIFEST_FILENAME).is_file() {
            dirs.push(path);
        } else if path.is_dir() {
            tracing::debug!(path = %path.display(), "No plugin manifest, skipping");
        }
    }
    dirs.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(dirs)
}

fn load(plugin_dir: &Path) -> Result<DiscoveredPlugin> {
    let manifest = PluginManifest::from_path(&plugin_dir.join(MANIFEST_FILENAME))?;
    tracing::debug!(id = %manifest.plugin.id, path = %plugin_dir.display(), "Loaded plugin manifest");
    Ok(DiscoveredPlugin {
        path: plugin_dir.to_path_buf(),
        manifest,
    })
}

/// Convert discovered plugins and feed them to `registry` in order.
///
/// Returns the consumed plugins, each with its owned apps attached. Stops
/// at the first plugin the registry rejects.
pub fn register_all(registry: &mut UiExports, discovered: &[DiscoveredPlugin]) -> Result<Vec<Plugin>> {
    let mut plugins = Vec::with_capacity(discovered.len());
    for found in discovered {
        let mut plugin = found.manifest.to_plugin()?;
        registry.consume_plugin(&mut plugin)?;
        plugins.push(plugin);
    }
    Ok(plugins)
}
