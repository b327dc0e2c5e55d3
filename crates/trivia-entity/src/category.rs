//! Category entity model.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use trivia_core::types::CategoryId;

/// A question category. Read-only from the service's point of view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Category {
    /// Unique category identifier.
    pub id: CategoryId,
    /// Display label, e.g. `"Science"`.
    #[serde(rename = "type")]
    #[sqlx(rename = "type")]
    pub kind: String,
}

impl Category {
    /// Create a category value.
    pub fn new(id: i64, kind: impl Into<String>) -> Self {
        Self {
            id: CategoryId(id),
            kind: kind.into(),
        }
    }
}

/// Categories keyed by identifier, serialized as `{"1": "Science", ...}`.
pub type CategoryMap = BTreeMap<CategoryId, String>;

/// Collapse an ordered category list into an id-to-label map.
pub fn to_map(categories: &[Category]) -> CategoryMap {
    categories
        .iter()
        .map(|c| (c.id, c.kind.clone()))
        .collect()
}

/// Labels seeded into a fresh store, in identifier order starting at 1.
pub const DEFAULT_CATEGORIES: [&str; 6] = [
    "Science",
    "Art",
    "Geography",
    "History",
    "Entertainment",
    "Sports",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_label_as_type() {
        let json = serde_json::to_value(Category::new(1, "Science")).unwrap();
        assert_eq!(json, serde_json::json!({ "id": 1, "type": "Science" }));
    }

    #[test]
    fn test_map_keys_are_stringified_ids() {
        let map = to_map(&[Category::new(2, "Art"), Category::new(1, "Science")]);
        let json = serde_json::to_value(&map).unwrap();
        assert_eq!(json, serde_json::json!({ "1": "Science", "2": "Art" }));
    }
}
