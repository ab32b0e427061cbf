//! The UI exports registry.
//!
//! Plugins are fed in discovery order through [`UiExports::consume_plugin`].
//! Each declared export type is resolved to a handler, either one offered by
//! a registered [`ExportConsumer`] or a built-in one, and the handler folds
//! the spec into the registry's collections. Once registration is done the
//! registry is queried with [`UiExports::find`] and the app accessors.
//!
//! Registration and querying may interleave; a query made mid-registration
//! sees whatever has been aggregated so far.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use serde_json::Value;
use tracing::{debug, warn};

use crate::alias::AliasTable;
use crate::app::{AppCollection, UiApp};
use crate::config::{RegistryConfig, Validation};
use crate::consumer::{ExportConsumer, ExportHandler};
use crate::error::{Error, Result};
use crate::export_type::ExportType;
use crate::nav_link::{NavLinkCollection, UiNavLink};
use crate::plugin::Plugin;

/// What an export type name resolved to
#[derive(Clone)]
enum Resolution {
    Consumer(ExportHandler),
    Builtin(ExportType),
}

impl fmt::Debug for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Consumer(_) => write!(f, "Consumer"),
            Self::Builtin(export_type) => write!(f, "Builtin({export_type})"),
        }
    }
}

/// Aggregates plugin exports into apps, nav links, aliases and bundles.
pub struct UiExports {
    config: RegistryConfig,
    apps: AppCollection,
    nav_links: NavLinkCollection,
    aliases: AliasTable,
    bundle_providers: Vec<Value>,
    consumers: Vec<Arc<dyn ExportConsumer>>,
    /// First resolution of each type name, kept for the registry's lifetime
    resolved: HashMap<String, Option<Resolution>>,
}

impl UiExports {
    /// Create an empty registry.
    pub fn new(config: RegistryConfig) -> Self {
        Self {
            config,
            apps: AppCollection::new(),
            nav_links: NavLinkCollection::new(),
            aliases: AliasTable::new(),
            bundle_providers: Vec::new(),
            consumers: Vec::new(),
            resolved: HashMap::new(),
        }
    }

    /// Register a consumer.
    ///
    /// Consumers only see type names that have not been resolved yet, so
    /// add them before consuming any plugin whose types they should claim.
    pub fn add_consumer(&mut self, consumer: Arc<dyn ExportConsumer>) {
        self.consumers.push(consumer);
    }

    /// Fold a plugin's exports into the registry.
    ///
    /// Attaches a fresh owned-apps collection to `plugin`, runs every
    /// consumer's plugin hook in registration order, then handles each
    /// declared export type in declaration order.
    ///
    /// Registration is not transactional: if a handler fails, whatever the
    /// earlier handlers aggregated stays in the registry.
    pub fn consume_plugin(&mut self, plugin: &mut Plugin) -> Result<()> {
        plugin.attach_apps();
        debug!(plugin = %plugin.id, "Consuming plugin");

        let types: Vec<String> = plugin.export_types().map(str::to_string).collect();
        let mut handlers = Vec::with_capacity(types.len());
        let mut unknown = Vec::new();
        for export_type in types {
            match self.resolve(&export_type) {
                Some(resolution) => handlers.push((export_type, resolution)),
                None => unknown.push(export_type),
            }
        }

        if !unknown.is_empty() {
            match self.config.validation {
                Validation::Strict => {
                    return Err(Error::UnknownExportTypes {
                        plugin: plugin.id.clone(),
                        types: unknown,
                    });
                }
                Validation::Lenient => {
                    warn!(
                        plugin = %plugin.id,
                        types = %unknown.join(", "),
                        "Skipping unknown export types"
                    );
                }
            }
        }

        for consumer in &self.consumers {
            consumer.consume_plugin(plugin)?;
        }

        for (export_type, resolution) in handlers {
            match resolution {
                Resolution::Consumer(handler) => {
                    if let Some(spec) = plugin.ui_exports_specs.get(&export_type) {
                        handler(plugin, spec)?;
                    }
                }
                Resolution::Builtin(kind) => self.apply_builtin(&kind, &export_type, plugin)?,
            }
        }

        Ok(())
    }

    /// Resolve a type name, consulting the cache first.
    fn resolve(&mut self, export_type: &str) -> Option<Resolution> {
        if let Some(cached) = self.resolved.get(export_type) {
            return cached.clone();
        }

        let resolution = self
            .consumers
            .iter()
            .find_map(|consumer| consumer.export_handler(export_type))
            .map(Resolution::Consumer)
            .or_else(|| {
                let parsed = ExportType::parse(export_type);
                parsed.is_builtin().then_some(Resolution::Builtin(parsed))
            });

        debug!(export_type, ?resolution, "Resolved export type");
        self.resolved
            .insert(export_type.to_string(), resolution.clone());
        resolution
    }

    fn apply_builtin(
        &mut self,
        kind: &ExportType,
        export_type: &str,
        plugin: &mut Plugin,
    ) -> Result<()> {
        let (plugin_id, specs, owned_apps) = plugin.owned_apps_mut();
        let Some(spec) = specs.get(export_type) else {
            return Ok(());
        };

        match kind {
            ExportType::App => {
                for app_spec in spec_list(spec) {
                    let app = UiApp::from_spec(plugin_id, app_spec)
                        .map_err(|reason| Error::invalid_spec(plugin_id, export_type, reason))?;
                    let app = self.apps.create(app)?;
                    if app.has_nav_link() {
                        self.nav_links
                            .add(UiNavLink::for_app(&self.config.url_base_path, &app));
                    }
                    owned_apps.add(app);
                }
            }
            ExportType::Link => {
                for link_spec in spec_list(spec) {
                    let link = UiNavLink::from_spec(&self.config.url_base_path, link_spec)
                        .map_err(|reason| Error::invalid_spec(plugin_id, export_type, reason))?;
                    self.nav_links.add(link);
                }
            }
            ExportType::Alias(category) => self.aliases.union(category, spec),
            ExportType::Bundle => self.bundle_providers.push(spec.clone()),
            ExportType::Aliases => match spec {
                Value::Object(categories) => {
                    for (category, value) in categories {
                        self.aliases.union(category, value);
                    }
                }
                Value::Null => {}
                other => {
                    return Err(Error::invalid_spec(
                        plugin_id,
                        export_type,
                        format!("expected a mapping of alias categories, found {other}"),
                    ));
                }
            },
            ExportType::Unrecognized(_) => {}
        }
        Ok(())
    }

    /// Specs of every alias category matching any of `patterns`.
    ///
    /// See [`AliasTable::find`] for matching and ordering rules.
    pub fn find<I, S>(&self, patterns: I) -> Vec<&Value>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.aliases.find(patterns)
    }

    /// Visible apps in creation order, followed by hidden apps
    pub fn all_apps(&self) -> Vec<&UiApp> {
        self.apps.all()
    }

    /// Look up a visible app
    pub fn app(&self, id: &str) -> Option<&UiApp> {
        self.apps.visible().get(id).map(|app| app.as_ref())
    }

    /// Look up a hidden app
    pub fn hidden_app(&self, id: &str) -> Option<&UiApp> {
        self.apps.hidden().get(id).map(|app| app.as_ref())
    }

    /// Bundle specs in registration order
    pub fn bundle_providers(&self) -> &[Value] {
        &self.bundle_providers
    }

    pub fn nav_links(&self) -> &NavLinkCollection {
        &self.nav_links
    }

    pub fn nav_link(&self, id: &str) -> Option<&UiNavLink> {
        self.nav_links.get(id)
    }

    pub fn aliases(&self) -> &AliasTable {
        &self.aliases
    }

    pub fn url_base_path(&self) -> &str {
        &self.config.url_base_path
    }

    pub fn config(&self) -> &RegistryConfig {
        &self.config
    }
}

impl Default for UiExports {
    fn default() -> Self {
        Self::new(RegistryConfig::default())
    }
}

impl fmt::Debug for UiExports {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UiExports")
            .field("config", &self.config)
            .field("apps", &self.apps.len())
            .field("nav_links", &self.nav_links.len())
            .field("aliases", &self.aliases.len())
            .field("bundle_providers", &self.bundle_providers.len())
            .field("consumers", &self.consumers.len())
            .finish()
    }
}

/// `null` is no specs, an array is many, anything else is one.
fn spec_list(spec: &Value) -> &[Value] {
    match spec {
        Value::Array(items) => items,
        Value::Null => &[],
        single => std::slice::from_ref(single),
    }
}
