//! Export type names and their built-in handling strategy.

use std::fmt;

/// Alias categories with built-in union handling.
pub const ALIAS_CATEGORIES: &[&str] = &[
    "visTypes",
    "fieldFormats",
    "spyModes",
    "chromeNavControls",
    "navbarExtensions",
    "settingsSections",
    "docViews",
    "sledgehammers",
];

/// A parsed export type name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ExportType {
    /// `app` / `apps`
    App,
    /// `link` / `links`
    Link,
    /// One of [`ALIAS_CATEGORIES`]
    Alias(&'static str),
    /// `bundle`
    Bundle,
    /// `aliases`, a mapping of ad hoc alias categories
    Aliases,
    /// Anything else; only a consumer can handle it
    Unrecognized(String),
}

impl ExportType {
    /// Parse an export type name. Never fails; unknown names map to
    /// [`ExportType::Unrecognized`].
    pub fn parse(name: &str) -> Self {
        match name {
            "app" | "apps" => Self::App,
            "link" | "links" => Self::Link,
            "bundle" => Self::Bundle,
            "aliases" => Self::Aliases,
            other => match ALIAS_CATEGORIES.iter().copied().find(|c| *c == other) {
                Some(category) => Self::Alias(category),
                None => Self::Unrecognized(other.to_string()),
            },
        }
    }

    /// Whether the registry has a built-in handler for this type
    pub fn is_builtin(&self) -> bool {
        !matches!(self, Self::Unrecognized(_))
    }
}

impl fmt::Display for ExportType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::App => write!(f, "app"),
            Self::Link => write!(f, "link"),
            Self::Alias(category) => write!(f, "{category}"),
            Self::Bundle => write!(f, "bundle"),
            Self::Aliases => write!(f, "aliases"),
            Self::Unrecognized(name) => write!(f, "{name}"),
        }
    }
}
