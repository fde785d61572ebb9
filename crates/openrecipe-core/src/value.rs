//! Helpers for the raw value tree before normalization.

use serde_yaml::{Mapping, Value};

/// Recursively lowercase every string mapping key in the tree.
///
/// Sequences and scalars pass through by recursion; non-string keys are left
/// untouched. The input is a tree, not a graph, so recursion is unbounded but
/// finite.
pub fn lower_keys(value: Value) -> Value {
    match value {
        Value::Mapping(map) => {
            let mut out = Mapping::with_capacity(map.len());
            for (key, item) in map {
                let key = match key {
                    Value::String(s) => Value::String(s.to_lowercase()),
                    other => other,
                };
                out.insert(key, lower_keys(item));
            }
            Value::Mapping(out)
        }
        Value::Sequence(seq) => Value::Sequence(seq.into_iter().map(lower_keys).collect()),
        other => other,
    }
}

/// A field that is absent, an explicit null, or the literal text `"None"` is
/// treated identically: the author left it out.
pub fn present(value: Option<&Value>) -> Option<&Value> {
    match value {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) if s == "None" => None,
        other => other,
    }
}

/// Render a scalar as text. Mappings, sequences, and nulls return `None`.
pub fn scalar_str(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}
