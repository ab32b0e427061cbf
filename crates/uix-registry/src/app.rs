//! Applications contributed through `app`/`apps` exports.

use std::collections::HashSet;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::collection::{IdCollection, Identified};
use crate::error::{Error, Result};

/// A registered application.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UiApp {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    /// Entry module of the app bundle
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub main: Option<String>,
    #[serde(default)]
    pub hidden: bool,
    /// Whether the app shows up in navigation. Defaults to `!hidden`.
    pub listed: bool,
    /// Path of the app, relative to the server base path.
    pub url: String,
    #[serde(default)]
    pub order: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link_to_last_sub_url: Option<bool>,
    /// Spec fields the registry does not interpret
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Raw app spec after merging in the owning plugin's id
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AppSpec {
    id: String,
    title: Option<String>,
    description: Option<String>,
    icon: Option<String>,
    main: Option<String>,
    #[serde(default)]
    hidden: bool,
    listed: Option<bool>,
    url: Option<String>,
    #[serde(default)]
    order: i64,
    link_to_last_sub_url: Option<bool>,
    #[serde(flatten)]
    extra: Map<String, Value>,
}

impl UiApp {
    /// Build an app from `{ id: plugin_id, ..spec }`.
    ///
    /// A `null` spec yields an app carrying only the plugin id. Any other
    /// non-object spec is rejected.
    pub fn from_spec(plugin_id: &str, spec: &Value) -> std::result::Result<Self, String> {
        let mut merged = Map::new();
        merged.insert("id".to_string(), Value::String(plugin_id.to_string()));
        match spec {
            Value::Object(fields) => {
                merged.extend(fields.iter().map(|(k, v)| (k.clone(), v.clone())));
            }
            Value::Null => {}
            other => return Err(format!("expected an object, found {other}")),
        }

        let spec: AppSpec =
            serde_json::from_value(Value::Object(merged)).map_err(|e| e.to_string())?;
        let url = spec.url.unwrap_or_else(|| format!("/app/{}", spec.id));

        Ok(Self {
            listed: spec.listed.unwrap_or(!spec.hidden),
            id: spec.id,
            title: spec.title,
            description: spec.description,
            icon: spec.icon,
            main: spec.main,
            hidden: spec.hidden,
            url,
            order: spec.order,
            link_to_last_sub_url: spec.link_to_last_sub_url,
            extra: spec.extra,
        })
    }

    /// Visible, listed apps get a navigation link.
    pub fn has_nav_link(&self) -> bool {
        !self.hidden && self.listed
    }
}

impl Identified for UiApp {
    fn id(&self) -> &str {
        &self.id
    }
}

/// Every application in the registry, split into visible and hidden.
///
/// Ids are claimed across both halves: a hidden app cannot reuse the id of
/// a visible one and vice versa.
#[derive(Debug, Clone, Default)]
pub struct AppCollection {
    visible: IdCollection<Arc<UiApp>>,
    hidden: IdCollection<Arc<UiApp>>,
    claimed_ids: HashSet<String>,
}

impl AppCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claim the app's id and store it in the matching half.
    pub fn create(&mut self, app: UiApp) -> Result<Arc<UiApp>> {
        if !self.claimed_ids.insert(app.id.clone()) {
            return Err(Error::DuplicateApp { id: app.id });
        }

        let app = Arc::new(app);
        if app.hidden {
            self.hidden.add(Arc::clone(&app));
        } else {
            self.visible.add(Arc::clone(&app));
        }
        Ok(app)
    }

    pub fn visible(&self) -> &IdCollection<Arc<UiApp>> {
        &self.visible
    }

    pub fn hidden(&self) -> &IdCollection<Arc<UiApp>> {
        &self.hidden
    }

    /// Visible apps in creation order, then hidden apps in creation order
    pub fn all(&self) -> Vec<&UiApp> {
        self.visible
            .iter()
            .chain(self.hidden.iter())
            .map(|app| app.as_ref())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.visible.len() + self.hidden.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
