//! Question categories

use std::collections::BTreeMap;

use serde::Serialize;
use sqlx::FromRow;

/// Category record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow)]
pub struct Category {
    pub id: i32,
    /// Display label, stored in the `type` column
    #[serde(rename = "type")]
    #[sqlx(rename = "type")]
    pub kind: String,
}

impl Category {
    pub fn new(id: i32, kind: impl Into<String>) -> Self {
        Self {
            id,
            kind: kind.into(),
        }
    }
}

/// Category id -> label, iterated (and serialized) in ascending id order
pub type CategoryMap = BTreeMap<i32, String>;

/// Collapse category records into the id -> label mapping.
pub fn category_map(categories: impl IntoIterator<Item = Category>) -> CategoryMap {
    categories.into_iter().map(|c| (c.id, c.kind)).collect()
}
