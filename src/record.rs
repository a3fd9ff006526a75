// src/record.rs — Record and forest aliases shared by all helpers

use serde_json::{Map, Value};

/// One entry of a flat or hierarchical collection: an ordered field map.
///
/// Field order is insertion order (`serde_json` is built with
/// `preserve_order`), so helpers that care about key positions work on it.
pub type Record = Map<String, Value>;

/// Ordered root records, each possibly owning nested children.
pub type Forest = Vec<Record>;

/// Parse a JSON array of objects into records.
pub fn records_from_json(input: &str) -> Result<Vec<Record>, crate::infra::errors::HelperError> {
    Ok(serde_json::from_str(input)?)
}

/// Build a record from `(key, value)` pairs, keeping their order.
pub fn record<K, V, I>(fields: I) -> Record
where
    K: Into<String>,
    V: Into<Value>,
    I: IntoIterator<Item = (K, V)>,
{
    fields
        .into_iter()
        .map(|(k, v)| (k.into(), v.into()))
        .collect()
}
