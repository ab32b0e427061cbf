use std::path::PathBuf;

/// Errors that can occur while loading plugins.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Failed to parse plugin manifest TOML.
    #[error("failed to parse plugin manifest {path}: {source}")]
    ManifestParse {
        path: PathBuf,
        source: toml::de::Error,
    },

    /// Plugin manifest file not found at the expected path.
    #[error("plugin manifest not found: {0}")]
    ManifestNotFound(PathBuf),

    /// Invalid plugin id.
    #[error("invalid plugin id '{id}': {reason}")]
    InvalidId { id: String, reason: String },

    /// Invalid semver version string.
    #[error("invalid version '{version}' for plugin '{id}': {source}")]
    InvalidVersion {
        id: String,
        version: String,
        source: semver::Error,
    },

    /// Two plugins declared the same id.
    #[error("duplicate plugin id '{id}' at {first} and {second}")]
    DuplicatePluginId {
        id: String,
        first: PathBuf,
        second: PathBuf,
    },

    /// Export specs could not be converted to JSON values.
    #[error("failed to convert exports of plugin '{id}': {source}")]
    ExportConversion {
        id: String,
        source: serde_json::Error,
    },

    /// I/O error reading plugin directories.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Registry rejected a plugin.
    #[error(transparent)]
    Registry(#[from] uix_registry::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
