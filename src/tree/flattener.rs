// src/tree/flattener.rs — Forest → pre-order flat sequence with depth

use serde_json::Value;
use tracing::debug;

use crate::infra::errors::HelperError;
use crate::record::{Forest, Record};

/// Flatten a forest in pre-order, tagging each record with its depth.
///
/// The children key is removed from every emitted record and `level_field`
/// is set to the number of ancestors (roots are 0). A subtree is emitted in
/// full before the next sibling.
///
/// A children value that is neither an array of objects nor `null` yields
/// `HelperError::InvalidChildren`, indexed by the record's output position.
pub fn flatten_tree(
    forest: Forest,
    children_field: &str,
    level_field: &str,
) -> Result<Vec<Record>, HelperError> {
    let mut out = Vec::new();
    flatten_into(forest, children_field, level_field, 0, &mut out)?;
    debug!(records = out.len(), "tree flattened");
    Ok(out)
}

fn flatten_into(
    records: Vec<Record>,
    children_field: &str,
    level_field: &str,
    depth: usize,
    out: &mut Vec<Record>,
) -> Result<(), HelperError> {
    for mut record in records {
        let children = record.shift_remove(children_field);
        record.insert(level_field.to_string(), Value::from(depth));

        let index = out.len();
        out.push(record);

        let invalid = || HelperError::InvalidChildren {
            index,
            field: children_field.to_string(),
        };
        match children {
            None | Some(Value::Null) => {}
            Some(Value::Array(items)) => {
                let nested = items
                    .into_iter()
                    .map(|item| match item {
                        Value::Object(child) => Ok(child),
                        _ => Err(invalid()),
                    })
                    .collect::<Result<Vec<_>, _>>()?;
                flatten_into(nested, children_field, level_field, depth + 1, out)?;
            }
            Some(_) => return Err(invalid()),
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn forest(value: Value) -> Forest {
        serde_json::from_value(value).unwrap()
    }

    fn as_json(records: Vec<Record>) -> Value {
        Value::Array(records.into_iter().map(Value::Object).collect())
    }

    #[test]
    fn test_basic_example() {
        let flat = flatten_tree(
            forest(json!([
                {"id": 1, "children": [{"id": 2}, {"id": 4}]},
                {"id": 3}
            ])),
            "children",
            "level",
        )
        .unwrap();

        assert_eq!(
            as_json(flat),
            json!([
                {"id": 1, "level": 0},
                {"id": 2, "level": 1},
                {"id": 4, "level": 1},
                {"id": 3, "level": 0}
            ])
        );
    }

    #[test]
    fn test_empty_forest() {
        assert!(flatten_tree(Vec::new(), "children", "level")
            .unwrap()
            .is_empty());
    }

    #[test]
    fn test_deep_subtree_precedes_next_sibling() {
        let flat = flatten_tree(
            forest(json!([
                {"id": "a", "children": [
                    {"id": "b", "children": [{"id": "c", "children": [{"id": "d"}]}]}
                ]},
                {"id": "e"}
            ])),
            "children",
            "level",
        )
        .unwrap();
        let order: Vec<(&Value, &Value)> = flat.iter().map(|r| (&r["id"], &r["level"])).collect();
        assert_eq!(
            order,
            vec![
                (&json!("a"), &json!(0)),
                (&json!("b"), &json!(1)),
                (&json!("c"), &json!(2)),
                (&json!("d"), &json!(3)),
                (&json!("e"), &json!(0)),
            ]
        );
    }

    #[test]
    fn test_repeated_calls_start_at_zero() {
        let input = forest(json!([{"id": 1, "children": [{"id": 2}]}]));
        let first = flatten_tree(input.clone(), "children", "level").unwrap();
        let second = flatten_tree(input, "children", "level").unwrap();
        assert_eq!(first, second);
        assert_eq!(second[0]["level"], json!(0));
    }

    #[test]
    fn test_empty_and_null_children_are_stripped() {
        let flat = flatten_tree(
            forest(json!([{"id": 1, "children": []}, {"id": 2, "children": null}])),
            "children",
            "level",
        )
        .unwrap();
        assert_eq!(as_json(flat), json!([{"id": 1, "level": 0}, {"id": 2, "level": 0}]));
    }

    #[test]
    fn test_existing_level_is_overwritten_in_place() {
        let flat = flatten_tree(
            forest(json!([{"level": 7, "id": 1}])),
            "children",
            "level",
        )
        .unwrap();
        let keys: Vec<&str> = flat[0].keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["level", "id"]);
        assert_eq!(flat[0]["level"], json!(0));
    }

    #[test]
    fn test_invalid_children() {
        let err = flatten_tree(
            forest(json!([{"id": 1}, {"id": 2, "children": [3]}])),
            "children",
            "level",
        )
        .unwrap_err();
        assert!(matches!(err, HelperError::InvalidChildren { index: 1, .. }));
    }
}
