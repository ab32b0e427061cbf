//! Plugin manifest parsing for `uix_plugin.toml` files.
//!
//! A manifest names the plugin and declares its UI exports. Keys under
//! `[ui_exports]` are export type names and keep the order they are written
//! in, which is the order the registry handles them.
//!
//! # Example TOML
//!
//! ```toml
//! [plugin]
//! id = "kibana"
//! version = "1.0.0"
//! description = "Core visualization app"
//!
//! [ui_exports]
//! app = { title = "Kibana", main = "plugins/kibana/kibana" }
//! visTypes = ["plugins/kbn_vislib_vis_types/kbn_vislib_vis_types"]
//! bundle = "plugins/kibana/bundle"
//!
//! [ui_exports.aliases]
//! hacks = ["plugins/kibana/hacks"]
//! ```

use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use uix_registry::Plugin;

use crate::error::{Error, Result};

/// Complete plugin manifest loaded from `uix_plugin.toml`.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PluginManifest {
    /// Core plugin metadata.
    pub plugin: PluginMeta,
    /// Export type name to spec.
    #[serde(default)]
    pub ui_exports: toml::Table,
}

/// Basic metadata about a plugin.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct PluginMeta {
    /// Plugin id (e.g., "kibana").
    pub id: String,
    /// Semver version string.
    pub version: String,
    /// Human-readable description.
    #[serde(default)]
    pub description: Option<String>,
}

impl PluginManifest {
    /// Parse a plugin manifest from a TOML string.
    ///
    /// `origin` only labels parse errors.
    pub fn from_toml(content: &str, origin: &Path) -> Result<Self> {
        let manifest: Self = toml::from_str(content).map_err(|source| Error::ManifestParse {
            path: origin.to_path_buf(),
            source,
        })?;
        manifest.validate()?;
        Ok(manifest)
    }

    /// Read and parse a plugin manifest from a file path.
    pub fn from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(Error::ManifestNotFound(path.to_path_buf()));
        }
        let content = std::fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&content, path)
    }

    fn validate(&self) -> Result<()> {
        let id = &self.plugin.id;
        if id.is_empty() {
            return Err(Error::InvalidId {
                id: id.clone(),
                reason: "plugin id must not be empty".to_string(),
            });
        }
        if !id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        {
            return Err(Error::InvalidId {
                id: id.clone(),
                reason: "plugin id must contain only alphanumeric characters, hyphens, or underscores".to_string(),
            });
        }

        semver::Version::parse(&self.plugin.version).map_err(|source| Error::InvalidVersion {
            id: id.clone(),
            version: self.plugin.version.clone(),
            source,
        })?;

        Ok(())
    }

    /// Convert into a registry [`Plugin`], keeping export order.
    pub fn to_plugin(&self) -> Result<Plugin> {
        let mut specs = IndexMap::with_capacity(self.ui_exports.len());
        for (export_type, spec) in &self.ui_exports {
            let value = serde_json::to_value(spec).map_err(|source| Error::ExportConversion {
                id: self.plugin.id.clone(),
                source,
            })?;
            specs.insert(export_type.clone(), value);
        }

        let mut plugin = Plugin::new(self.plugin.id.clone());
        plugin.ui_exports_specs = specs;
        Ok(plugin)
    }
}

/// A manifest together with the directory it was found in.
#[derive(Debug, Clone)]
pub struct DiscoveredPlugin {
    /// Plugin directory (holds the manifest).
    pub path: PathBuf,
    pub manifest: PluginManifest,
}

impl DiscoveredPlugin {
    pub fn id(&self) -> &str {
        &self.manifest.plugin.id
    }
}
