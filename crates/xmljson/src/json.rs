//! Conversion between the tree and `serde_json` values.

use crate::{TreeNode, Value};
use serde_json::Map;

/// Convert a tree value to JSON, keeping key order.
pub fn to_json(value: &Value) -> serde_json::Value {
    match value {
        Value::Null => serde_json::Value::Null,
        Value::Bool(b) => serde_json::Value::Bool(*b),
        Value::Number(n) => serde_json::Value::Number(n.clone()),
        Value::String(s) => serde_json::Value::String(s.clone()),
        Value::Node(node) => node_to_json(node),
        Value::List(items) => serde_json::Value::Array(items.iter().map(to_json).collect()),
    }
}

/// Convert a node to a JSON object, keeping key order.
pub fn node_to_json(node: &TreeNode) -> serde_json::Value {
    let map: Map<String, serde_json::Value> = node
        .iter()
        .map(|(key, value)| (key.clone(), to_json(value)))
        .collect();
    serde_json::Value::Object(map)
}

/// Convert JSON to a tree value.
///
/// Objects become nodes by plain insertion; JSON keys are already unique.
pub fn from_json(json: serde_json::Value) -> Value {
    match json {
        serde_json::Value::Null => Value::Null,
        serde_json::Value::Bool(b) => Value::Bool(b),
        serde_json::Value::Number(n) => Value::Number(n),
        serde_json::Value::String(s) => Value::String(s),
        serde_json::Value::Array(items) => Value::List(items.into_iter().map(from_json).collect()),
        serde_json::Value::Object(map) => Value::Node(
            map.into_iter()
                .map(|(key, value)| (key, from_json(value)))
                .collect(),
        ),
    }
}

/// Render a node as JSON text.
pub fn to_json_string(node: &TreeNode, pretty: bool) -> String {
    let json = node_to_json(node);
    if pretty {
        // Serializing a `serde_json::Value` to a String cannot fail
        serde_json::to_string_pretty(&json).unwrap_or_else(|_| json.to_string())
    } else {
        json.to_string()
    }
}

impl From<&Value> for serde_json::Value {
    fn from(value: &Value) -> Self {
        to_json(value)
    }
}

impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        from_json(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_to_json_keeps_order() {
        let mut node = TreeNode::new();
        node.accumulate("zebra", Value::from(1));
        node.accumulate("apple", Value::Bool(true));
        node.accumulate("apple", Value::Null);
        assert_eq!(
            to_json_string(&node, false),
            r#"{"zebra":1,"apple":[true,null]}"#
        );
    }

    #[test]
    fn test_from_json() {
        let value = from_json(json!({"a": {"b": [1, "x"]}, "c": null}));
        let node = value.as_node().unwrap();
        assert_eq!(node.keys().collect::<Vec<_>>(), vec!["a", "c"]);
        let inner = node.get("a").and_then(Value::as_node).unwrap();
        assert_eq!(
            inner.get("b"),
            Some(&Value::List(vec![Value::from(1), Value::from("x")]))
        );
        assert_eq!(node.get("c"), Some(&Value::Null));
    }

    #[test]
    fn test_round_trip_through_json() {
        let json = json!({"doc": {"title": "T", "n": 1.5, "flag": false, "tags": ["a", "b"]}});
        assert_eq!(to_json(&from_json(json.clone())), json);
    }

    #[test]
    fn test_pretty_output() {
        let mut node = TreeNode::new();
        node.insert("a", Value::from(1));
        assert_eq!(to_json_string(&node, true), "{\n  \"a\": 1\n}");
    }
}
