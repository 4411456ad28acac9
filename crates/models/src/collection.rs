use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::errors::ModelError;
use crate::record::Record;

/// The persisted shape for one resource type: an auto-increment counter plus
/// the ordered items. Field order matters — `nextId` serializes first so the
/// persisted blob is byte-stable across runs.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct Collection<T: Record> {
    #[serde(rename = "nextId")]
    pub next_id: i64,
    pub items: Vec<T>,
}

impl<T: Record> Collection<T> {
    pub fn new() -> Self {
        Self { next_id: 1, items: Vec::new() }
    }

    /// Position of the item carrying `id`, if any.
    pub fn position(&self, id: i64) -> Option<usize> {
        self.items.iter().position(|item| item.id() == Some(id))
    }

    /// Check the collection invariants: every stored item has an id, ids are
    /// unique, and `next_id` is strictly greater than any present id.
    pub fn validate(&self) -> Result<(), ModelError> {
        if self.next_id < 1 {
            return Err(ModelError::Validation(format!("nextId {} must be >= 1", self.next_id)));
        }
        let mut seen = HashSet::new();
        for item in &self.items {
            let id = item
                .id()
                .ok_or_else(|| ModelError::Validation("stored item has no id".to_string()))?;
            if !seen.insert(id) {
                return Err(ModelError::Validation(format!("duplicate id {id}")));
            }
            if id >= self.next_id {
                return Err(ModelError::Validation(format!(
                    "nextId {} must exceed stored id {id}",
                    self.next_id
                )));
            }
        }
        Ok(())
    }
}

impl<T: Record> Default for Collection<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;
    use crate::park::Park;

    #[test]
    fn empty_collection_starts_at_id_one() {
        let c: Collection<Park> = Collection::new();
        assert_eq!(c.next_id, 1);
        assert!(c.items.is_empty());
        assert!(c.validate().is_ok());
    }

    #[test]
    fn serializes_next_id_first_in_camel_case() {
        let c: Collection<Park> = Collection::new();
        let blob = serde_json::to_string(&c).unwrap();
        assert_eq!(blob, r#"{"nextId":1,"items":[]}"#);
    }

    #[test]
    fn validate_accepts_fixture_collection() {
        let c = Collection { next_id: 5, items: fixtures::three_parks() };
        assert!(c.validate().is_ok());
    }

    #[test]
    fn validate_rejects_duplicate_ids() {
        let mut items = fixtures::three_parks();
        items[2].id = items[0].id;
        let c = Collection { next_id: 5, items };
        assert!(c.validate().is_err());
    }

    #[test]
    fn validate_rejects_next_id_not_above_max_id() {
        let c = Collection { next_id: 4, items: fixtures::three_parks() };
        assert!(c.validate().is_err());
    }

    #[test]
    fn validate_rejects_item_without_id() {
        let mut items = fixtures::one_park();
        items[0].id = None;
        let c = Collection { next_id: 2, items };
        assert!(c.validate().is_err());
    }

    #[test]
    fn position_finds_items_by_id() {
        let c = Collection { next_id: 5, items: fixtures::three_parks() };
        assert_eq!(c.position(3), Some(1));
        assert_eq!(c.position(99), None);
    }
}
