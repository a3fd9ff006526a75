// src/tree/key.rs — Value identity for id/parent matching
//
// Numbers match by numeric value (1 == 1.0), everything else by JSON
// equality. Strings never match numbers.

use serde_json::Value;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub(crate) enum MatchKey {
    Int(i128),
    Float(u64),
    Str(String),
    Bool(bool),
    Null,
    Other(String),
}

impl MatchKey {
    pub(crate) fn from_value(value: &Value) -> Self {
        match value {
            Value::Null => MatchKey::Null,
            Value::Bool(b) => MatchKey::Bool(*b),
            Value::String(s) => MatchKey::Str(s.clone()),
            Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    MatchKey::Int(i128::from(i))
                } else if let Some(u) = n.as_u64() {
                    MatchKey::Int(i128::from(u))
                } else {
                    let f = n.as_f64().unwrap_or(f64::NAN);
                    if f.fract() == 0.0 && f.abs() < 1.7e38 {
                        MatchKey::Int(f as i128)
                    } else {
                        MatchKey::Float(f.to_bits())
                    }
                }
            }
            other => MatchKey::Other(other.to_string()),
        }
    }
}

impl fmt::Display for MatchKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchKey::Int(i) => write!(f, "{i}"),
            MatchKey::Float(bits) => write!(f, "{}", f64::from_bits(*bits)),
            MatchKey::Str(s) => write!(f, "{s:?}"),
            MatchKey::Bool(b) => write!(f, "{b}"),
            MatchKey::Null => f.write_str("null"),
            MatchKey::Other(raw) => f.write_str(raw),
        }
    }
}
