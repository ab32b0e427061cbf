//! Aggregation registry for plugin-contributed UI exports.
//!
//! Plugins declare exports by type name (`app`, `links`, `visTypes`,
//! `aliases`, `bundle`, ...). [`UiExports`] routes each export to a handler
//! and aggregates the results:
//!
//! - **Applications**: visible and hidden, indexed by id
//! - **Navigation links**: from `link` exports and from listed apps
//! - **Alias table**: category name to de-duplicated specs, queried by glob
//! - **Bundle providers**: opaque bundle specs in registration order
//!
//! [`ExportConsumer`]s registered up front may claim export types before the
//! built-in handlers apply.
//!
//! # Example
//!
//! ```
//! use serde_json::json;
//! use uix_registry::{Plugin, RegistryConfig, UiExports};
//!
//! let mut registry = UiExports::new(RegistryConfig::new("/base"));
//! let mut plugin = Plugin::new("kibana")
//!     .with_export("app", json!({ "title": "Kibana" }))
//!     .with_export("visTypes", json!(["plugins/kibana/vis"]));
//!
//! registry.consume_plugin(&mut plugin)?;
//!
//! assert_eq!(registry.app("kibana").unwrap().url, "/app/kibana");
//! assert_eq!(registry.find(["vis*"]), vec![&json!("plugins/kibana/vis")]);
//! # Ok::<(), uix_registry::Error>(())
//! ```

pub mod alias;
pub mod app;
pub mod collection;
pub mod config;
pub mod consumer;
pub mod error;
pub mod export_type;
pub mod nav_link;
pub mod plugin;
pub mod registry;

pub use alias::AliasTable;
pub use app::{AppCollection, UiApp};
pub use collection::{IdCollection, Identified};
pub use config::{RegistryConfig, Validation};
pub use consumer::{ExportConsumer, ExportHandler, handler};
pub use error::{Error, Result};
pub use export_type::{ALIAS_CATEGORIES, ExportType};
pub use nav_link::{NavLinkCollection, UiNavLink};
pub use plugin::Plugin;
pub use registry::UiExports;
