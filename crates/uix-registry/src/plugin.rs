//! The plugin input model.

use std::sync::Arc;

use indexmap::IndexMap;
use serde::Deserialize;
use serde_json::Value;

use crate::app::UiApp;
use crate::collection::IdCollection;

/// A plugin and the exports it declares.
///
/// Export specs keep their declaration order; the registry visits them in
/// that order. Deserializes from `{ "id": ..., "uiExportsSpecs": {...} }`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Plugin {
    /// Unique within a registration session
    pub id: String,
    /// Export type name to spec
    #[serde(default)]
    pub ui_exports_specs: IndexMap<String, Value>,
    /// Apps this plugin registered, attached by the registry
    #[serde(skip)]
    apps: Option<IdCollection<Arc<UiApp>>>,
}

impl Plugin {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    /// Declare an export. Re-declaring a type replaces its spec but keeps
    /// its original position.
    pub fn with_export(mut self, export_type: impl Into<String>, spec: Value) -> Self {
        self.ui_exports_specs.insert(export_type.into(), spec);
        self
    }

    /// Declared export type names, in declaration order
    pub fn export_types(&self) -> impl Iterator<Item = &str> {
        self.ui_exports_specs.keys().map(String::as_str)
    }

    /// The apps this plugin registered, or `None` if it was never consumed.
    pub fn apps(&self) -> Option<&IdCollection<Arc<UiApp>>> {
        self.apps.as_ref()
    }

    pub(crate) fn attach_apps(&mut self) {
        self.apps = Some(IdCollection::new());
    }

    /// Split borrow used by the built-in `app` handler
    pub(crate) fn owned_apps_mut(
        &mut self,
    ) -> (&str, &IndexMap<String, Value>, &mut IdCollection<Arc<UiApp>>) {
        let apps = self.apps.get_or_insert_with(IdCollection::new);
        (&self.id, &self.ui_exports_specs, apps)
    }
}
