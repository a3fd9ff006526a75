// src/array.rs — Record and table helpers
//
// Records are ordered maps, so key order is meaningful for `nearby_keys`
// and `swap_elements`.

use rand::seq::SliceRandom;
use serde_json::Value;
use std::cmp::Ordering;

use crate::record::Record;

/// Sort order for [`sort_table`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

/// How [`sort_table`] compares column values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortMethod {
    /// Compare as numbers; missing or non-numeric cells count as 0.
    #[default]
    Numeric,
    /// Byte-wise string comparison of the cell text.
    String,
}

/// Field value, or `default` when the key is absent.
pub fn field_or<'a>(record: &'a Record, key: &str, default: &'a Value) -> &'a Value {
    record.get(key).unwrap_or(default)
}

/// Pick `keys` from a record, in the order requested.
///
/// Missing keys are filled with `default` when one is given and skipped
/// otherwise.
pub fn elements(record: &Record, keys: &[&str], default: Option<Value>) -> Record {
    let mut out = Record::new();
    for &key in keys {
        match record.get(key) {
            Some(value) => {
                out.insert(key.to_string(), value.clone());
            }
            None => {
                if let Some(d) = &default {
                    out.insert(key.to_string(), d.clone());
                }
            }
        }
    }
    out
}

/// Look up a nested value by a delimited path such as `"user.address.city"`.
///
/// Objects are walked by key, arrays by numeric index. A `null` anywhere on
/// the way counts as not found.
pub fn path<'a>(value: &'a Value, path: &str, delimiter: &str) -> Option<&'a Value> {
    let mut current = value;
    for segment in path.split(delimiter) {
        current = match current {
            Value::Object(map) => map.get(segment)?,
            Value::Array(items) => items.get(segment.parse::<usize>().ok()?)?,
            _ => return None,
        };
        if current.is_null() {
            return None;
        }
    }
    Some(current)
}

/// Replace values of `base` with same-key values from `overrides`.
///
/// Keys that exist only in `overrides` are ignored.
pub fn override_with(mut base: Record, overrides: &Record) -> Record {
    for (key, value) in base.iter_mut() {
        if let Some(replacement) = overrides.get(key) {
            *value = replacement.clone();
        }
    }
    base
}

/// Remove a key and return its value, keeping the order of the rest.
pub fn take_element(record: &mut Record, key: &str) -> Option<Value> {
    record.shift_remove(key)
}

/// Remove several keys, returning the removed entries in request order.
pub fn take_elements(record: &mut Record, keys: &[&str]) -> Record {
    let mut out = Record::new();
    for &key in keys {
        if let Some(value) = record.shift_remove(key) {
            out.insert(key.to_string(), value);
        }
    }
    out
}

/// All scalar leaves of nested arrays/objects, depth first. Keys are dropped.
pub fn flatten_values(value: &Value) -> Vec<Value> {
    let mut out = Vec::new();
    collect_leaves(value, &mut out);
    out
}

fn collect_leaves(value: &Value, out: &mut Vec<Value>) {
    match value {
        Value::Array(items) => items.iter().for_each(|v| collect_leaves(v, out)),
        Value::Object(map) => map.values().for_each(|v| collect_leaves(v, out)),
        scalar => out.push(scalar.clone()),
    }
}

/// Keys immediately before and after `key`.
///
/// When `key` is absent the previous key is the last key of the record.
pub fn nearby_keys<'a>(record: &'a Record, key: &str) -> (Option<&'a str>, Option<&'a str>) {
    let mut prev = None;
    let mut keys = record.keys();
    while let Some(k) = keys.next() {
        if k == key {
            return (prev, keys.next().map(String::as_str));
        }
        prev = Some(k.as_str());
    }
    (prev, None)
}

/// Swap the positions of two keys; each value stays with its key.
///
/// Returns `false` and leaves the record untouched if either key is missing.
pub fn swap_elements(record: &mut Record, a: &str, b: &str) -> bool {
    if !record.contains_key(a) || !record.contains_key(b) {
        return false;
    }
    let old = std::mem::take(record);
    let mut moved_a = None;
    let mut moved_b = None;
    let mut order: Vec<(String, Option<Value>)> = Vec::with_capacity(old.len());
    for (key, value) in old {
        if key == a {
            moved_a = Some(value);
            order.push((b.to_string(), None));
        } else if key == b {
            moved_b = Some(value);
            order.push((a.to_string(), None));
        } else {
            order.push((key, Some(value)));
        }
    }
    for (key, value) in order {
        let value = match value {
            Some(v) => v,
            None if key == a => moved_a.take().unwrap_or(Value::Null),
            None => moved_b.take().unwrap_or(Value::Null),
        };
        record.insert(key, value);
    }
    true
}

/// Stable sort of table rows by one column.
pub fn sort_table(
    mut rows: Vec<Record>,
    column: &str,
    direction: SortDirection,
    method: SortMethod,
) -> Vec<Record> {
    rows.sort_by(|x, y| {
        let ordering = match method {
            SortMethod::Numeric => {
                let a = numeric_cell(x.get(column));
                let b = numeric_cell(y.get(column));
                a.partial_cmp(&b).unwrap_or(Ordering::Equal)
            }
            SortMethod::String => text_cell(x.get(column)).cmp(&text_cell(y.get(column))),
        };
        match direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    });
    rows
}

fn numeric_cell(value: Option<&Value>) -> f64 {
    match value {
        Some(Value::Number(n)) => n.as_f64().unwrap_or(0.0),
        Some(Value::String(s)) => s.trim().parse().unwrap_or(0.0),
        Some(Value::Bool(true)) => 1.0,
        _ => 0.0,
    }
}

fn text_cell(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Null) | None => String::new(),
        Some(other) => other.to_string(),
    }
}

/// Values of one column, skipping rows that lack it.
pub fn column(rows: &[Record], column: &str) -> Vec<Value> {
    rows.iter().filter_map(|r| r.get(column).cloned()).collect()
}

/// Values of one column keyed by another column's (stringified) value.
///
/// Rows missing either column are skipped; later rows overwrite earlier ones
/// with the same index value.
pub fn column_indexed(rows: &[Record], column: &str, index: &str) -> Record {
    let mut out = Record::new();
    for row in rows {
        if let (Some(value), Some(key)) = (row.get(column), row.get(index)) {
            out.insert(text_cell(Some(key)), value.clone());
        }
    }
    out
}

/// Shuffled copy of `items`, cut to `limit` entries when `limit > 0`.
pub fn randomize<T>(mut items: Vec<T>, limit: usize) -> Vec<T> {
    items.shuffle(&mut rand::rng());
    if limit > 0 {
        items.truncate(limit);
    }
    items
}
