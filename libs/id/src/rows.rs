//! Key enrichment for pivot rows.
//!
//! Junction-table inserts bypass the entity hook, so rows attached in bulk
//! need their `id` filled in here when the pivot uses string keys.

use std::collections::BTreeMap;

use serde_json::{Map, Value};

use crate::{KeyValue, PrimaryKeyKind};

/// A row of column values, keyed by column name.
pub type Row = Map<String, Value>;

/// Column that receives the generated key.
pub const KEY_COLUMN: &str = "id";

/// Adds a fresh key under `id` when the kind needs one and the row has none.
///
/// An existing `id` is never overwritten.
#[must_use]
pub fn enrich_row(kind: PrimaryKeyKind, mut row: Row) -> Row {
    if row.contains_key(KEY_COLUMN) {
        return row;
    }

    if let Some(value) = KeyValue::generate(kind).into_value() {
        row.insert(KEY_COLUMN.to_string(), Value::String(value));
    }

    row
}

/// Applies [`enrich_row`] to a copy of `row` for every id in `ids`.
///
/// Each entry gets its own generated key.
#[must_use]
pub fn enrich_rows<K, I>(kind: PrimaryKeyKind, ids: I, row: &Row) -> BTreeMap<K, Row>
where
    K: Ord,
    I: IntoIterator<Item = K>,
{
    ids.into_iter()
        .map(|id| (id, enrich_row(kind, row.clone())))
        .collect()
}
