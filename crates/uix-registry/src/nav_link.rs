//! Navigation links, from `link`/`links` exports and from listed apps.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::app::UiApp;
use crate::collection::{IdCollection, Identified};

fn default_true() -> bool {
    true
}

/// A navigation link.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UiNavLink {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default)]
    pub order: i64,
    /// Absolute URL, base path included
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(default = "default_true")]
    pub link_to_last_sub_url: bool,
    #[serde(default)]
    pub hidden: bool,
    #[serde(default)]
    pub disabled: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tooltip: Option<String>,
}

impl UiNavLink {
    /// Parse a `link` spec, prefixing its `url` with `url_base_path`.
    pub fn from_spec(url_base_path: &str, spec: &Value) -> Result<Self, String> {
        let mut link: Self = serde_json::from_value(spec.clone()).map_err(|e| e.to_string())?;
        link.url = format!("{url_base_path}{}", link.url);
        Ok(link)
    }

    /// The link a visible, listed app contributes.
    pub fn for_app(url_base_path: &str, app: &UiApp) -> Self {
        Self {
            id: app.id.clone(),
            title: app.title.clone(),
            order: app.order,
            url: format!("{url_base_path}{}", app.url),
            description: app.description.clone(),
            icon: app.icon.clone(),
            link_to_last_sub_url: app.link_to_last_sub_url.unwrap_or(true),
            hidden: false,
            disabled: false,
            tooltip: None,
        }
    }
}

impl Identified for UiNavLink {
    fn id(&self) -> &str {
        &self.id
    }
}

/// All navigation links, in creation order.
#[derive(Debug, Clone, Default)]
pub struct NavLinkCollection {
    links: IdCollection<UiNavLink>,
}

impl NavLinkCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a link. A link with an existing id replaces the old one.
    pub fn add(&mut self, link: UiNavLink) {
        if let Some(old) = self.links.add(link) {
            tracing::debug!(id = %old.id, "Replaced navigation link");
        }
    }

    pub fn get(&self, id: &str) -> Option<&UiNavLink> {
        self.links.get(id)
    }

    /// Links in creation order
    pub fn iter(&self) -> impl Iterator<Item = &UiNavLink> {
        self.links.iter()
    }

    /// Links sorted by `order`; ties keep creation order.
    pub fn in_order(&self) -> Vec<&UiNavLink> {
        let mut links: Vec<&UiNavLink> = self.links.iter().collect();
        links.sort_by_key(|link| link.order);
        links
    }

    pub fn len(&self) -> usize {
        self.links.len()
    }

    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }
}
