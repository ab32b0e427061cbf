//! The alias table: a multimap from category name to unique specs.

use globset::{GlobBuilder, GlobMatcher};
use indexmap::IndexMap;
use serde_json::Value;

/// Category name to de-duplicated specs.
///
/// Categories keep first-insertion order and each category keeps the order
/// in which its specs were first seen.
#[derive(Debug, Clone, Default)]
pub struct AliasTable {
    entries: IndexMap<String, Vec<Value>>,
}

impl AliasTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Union `spec` into the `name` category.
    ///
    /// An array contributes each element, `null` contributes nothing and any
    /// other value contributes itself. The category is created even when
    /// nothing is contributed.
    pub fn union(&mut self, name: &str, spec: &Value) {
        let entry = self.entries.entry(name.to_string()).or_default();
        let incoming: &[Value] = match spec {
            Value::Array(items) => items,
            Value::Null => &[],
            single => std::slice::from_ref(single),
        };
        for value in incoming {
            if !entry.contains(value) {
                entry.push(value.clone());
            }
        }
    }

    /// Specs registered under exactly `name`
    pub fn get(&self, name: &str) -> Option<&[Value]> {
        self.entries.get(name).map(Vec::as_slice)
    }

    /// Category names in first-insertion order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Specs of every category matching any of `patterns`.
    ///
    /// Patterns are shell globs. A pattern without `/` is matched against
    /// the last `/`-separated segment of each category name. Output is
    /// grouped by pattern, then by category order, then by spec order; a
    /// category matched by two patterns is emitted twice. Patterns that fail
    /// to parse match nothing.
    pub fn find<I, S>(&self, patterns: I) -> Vec<&Value>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut found = Vec::new();
        for pattern in patterns {
            let Some(matcher) = NameMatcher::new(pattern.as_ref()) else {
                continue;
            };
            for (name, specs) in &self.entries {
                if matcher.is_match(name) {
                    found.extend(specs.iter());
                }
            }
        }
        found
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

struct NameMatcher {
    glob: GlobMatcher,
    match_base: bool,
}

impl NameMatcher {
    fn new(pattern: &str) -> Option<Self> {
        match GlobBuilder::new(pattern).literal_separator(true).build() {
            Ok(glob) => Some(Self {
                glob: glob.compile_matcher(),
                match_base: !pattern.contains('/'),
            }),
            Err(e) => {
                tracing::warn!(pattern, error = %e, "Ignoring invalid alias pattern");
                None
            }
        }
    }

    fn is_match(&self, name: &str) -> bool {
        if self.match_base {
            let base = name.rsplit('/').next().unwrap_or(name);
            self.glob.is_match(base)
        } else {
            self.glob.is_match(name)
        }
    }
}
