//! Insertion-ordered collections indexed by id.

use std::sync::Arc;

use indexmap::IndexMap;

/// Something with a stable string id.
pub trait Identified {
    fn id(&self) -> &str;
}

impl<T: Identified> Identified for Arc<T> {
    fn id(&self) -> &str {
        (**self).id()
    }
}

/// An ordered collection with constant-time lookup by id.
///
/// Adding an item whose id is already present replaces the old item in
/// place, keeping its original position.
#[derive(Debug, Clone)]
pub struct IdCollection<T> {
    items: IndexMap<String, T>,
}

impl<T> Default for IdCollection<T> {
    fn default() -> Self {
        Self {
            items: IndexMap::new(),
        }
    }
}

impl<T: Identified> IdCollection<T> {
    /// Create an empty collection
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an item, returning the item it replaced if the id was taken.
    pub fn add(&mut self, item: T) -> Option<T> {
        self.items.insert(item.id().to_string(), item)
    }

    /// Look up an item by id
    pub fn get(&self, id: &str) -> Option<&T> {
        self.items.get(id)
    }

    /// Whether an item with this id exists
    pub fn contains(&self, id: &str) -> bool {
        self.items.contains_key(id)
    }

    /// Items in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.items.values()
    }

    /// Ids in insertion order
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.items.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<'a, T: Identified> IntoIterator for &'a IdCollection<T> {
    type Item = &'a T;
    type IntoIter = indexmap::map::Values<'a, String, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.values()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    struct Item {
        id: &'static str,
        value: u32,
    }

    impl Identified for Item {
        fn id(&self) -> &str {
            self.id
        }
    }

    #[test]
    fn test_preserves_insertion_order() {
        let mut collection = IdCollection::new();
        collection.add(Item { id: "b", value: 1 });
        collection.add(Item { id: "a", value: 2 });
        collection.add(Item { id: "c", value: 3 });

        assert_eq!(collection.ids().collect::<Vec<_>>(), vec!["b", "a", "c"]);
        assert_eq!(collection.len(), 3);
    }

    #[test]
    fn test_lookup_by_id() {
        let mut collection = IdCollection::new();
        collection.add(Item { id: "a", value: 7 });

        assert_eq!(collection.get("a").map(|i| i.value), Some(7));
        assert!(collection.get("missing").is_none());
        assert!(collection.contains("a"));
    }

    #[test]
    fn test_add_existing_id_replaces_in_place() {
        let mut collection = IdCollection::new();
        collection.add(Item { id: "a", value: 1 });
        collection.add(Item { id: "b", value: 2 });

        let replaced = collection.add(Item { id: "a", value: 3 });

        assert_eq!(replaced, Some(Item { id: "a", value: 1 }));
        let values: Vec<u32> = collection.iter().map(|i| i.value).collect();
        assert_eq!(values, vec![3, 2]);
    }

    #[test]
    fn test_arc_items_are_identified() {
        let mut collection = IdCollection::new();
        collection.add(Arc::new(Item { id: "shared", value: 1 }));
        assert!(collection.contains("shared"));
    }
}
