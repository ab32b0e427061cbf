//! External consumers that get first refusal on export types.

use std::sync::Arc;

use serde_json::Value;

use crate::error::Result;
use crate::plugin::Plugin;

/// Handler invoked with a plugin and the spec it declared for one type.
pub type ExportHandler = Arc<dyn Fn(&Plugin, &Value) -> Result<()> + Send + Sync>;

/// An external collaborator registered with
/// [`UiExports::add_consumer`](crate::UiExports::add_consumer).
///
/// Both capabilities are optional. Consumers keep their own state, so
/// methods take `&self`; use interior mutability to record anything.
pub trait ExportConsumer: Send + Sync {
    /// Claim an export type by returning a handler for it.
    ///
    /// The registry asks at most once per type name for its whole lifetime
    /// and caches the answer, including "no handler".
    fn export_handler(&self, _export_type: &str) -> Option<ExportHandler> {
        None
    }

    /// Called with every plugin before any of its exports are handled.
    fn consume_plugin(&self, _plugin: &Plugin) -> Result<()> {
        Ok(())
    }
}

/// Wrap a closure as an [`ExportHandler`].
pub fn handler<F>(f: F) -> ExportHandler
where
    F: Fn(&Plugin, &Value) -> Result<()> + Send + Sync + 'static,
{
    Arc::new(f)
}
