//! Plugin manifests and discovery for the UI exports registry.
//!
//! This crate reads `uix_plugin.toml` manifests, finds plugin directories
//! on disk and feeds the resulting plugins to a
//! [`UiExports`](uix_registry::UiExports) registry in discovery order.

pub mod discovery;
pub mod error;
pub mod manifest;

/// The canonical filename for plugin manifest files.
pub const MANIFEST_FILENAME: &str = "uix_plugin.toml";

pub use discovery::{DiscoveryConfig, PluginDiscovery, register_all};
pub use error::{Error, Result};
pub use manifest::{DiscoveredPlugin, PluginManifest, PluginMeta};
