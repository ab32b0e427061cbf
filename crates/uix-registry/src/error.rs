//! Error types for uix-registry

/// Result type for registry operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while registering plugins
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The plugin declared export types nothing knows how to handle
    #[error("unknown export types {} in plugin {plugin}", types.join(", "))]
    UnknownExportTypes { plugin: String, types: Vec<String> },

    /// Two applications claimed the same id
    #[error("Unable to create two apps with the id {id}.")]
    DuplicateApp { id: String },

    /// An export spec did not have the shape its type requires
    #[error("invalid '{export_type}' export in plugin {plugin}: {reason}")]
    InvalidSpec {
        plugin: String,
        export_type: String,
        reason: String,
    },

    /// A consumer-supplied handler or hook failed
    #[error("consumer failed on '{export_type}' export of plugin {plugin}: {message}")]
    Consumer {
        plugin: String,
        export_type: String,
        message: String,
    },

    /// Registry configuration could not be parsed
    #[error("failed to parse registry config: {0}")]
    ConfigParse(#[from] toml::de::Error),
}

impl Error {
    /// Build an [`Error::InvalidSpec`] from anything displayable
    pub fn invalid_spec(
        plugin: impl Into<String>,
        export_type: impl Into<String>,
        reason: impl std::fmt::Display,
    ) -> Self {
        Self::InvalidSpec {
            plugin: plugin.into(),
            export_type: export_type.into(),
            reason: reason.to_string(),
        }
    }
}
