//! The JSON-like tree produced by parsing and consumed by serialization.

use indexmap::IndexMap;
use indexmap::map::{IntoIter, Iter};
use serde_json::Number;
use std::fmt;

/// Key under which an element's text runs are stored.
pub const CONTENT_KEY: &str = "content";

/// A value in the tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Bool(bool),
    Number(Number),
    String(String),
    Node(TreeNode),
    List(Vec<Value>),
}

/// An ordered mapping from keys to values with accumulate semantics.
///
/// Keys keep the order in which they were first inserted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TreeNode {
    entries: IndexMap<String, Value>,
}

impl Value {
    /// The empty string, used for empty elements and bare attributes.
    pub fn empty() -> Self {
        Value::String(String::new())
    }

    /// True for the empty string only.
    pub fn is_empty_string(&self) -> bool {
        matches!(self, Value::String(s) if s.is_empty())
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Number(n) => n.as_i64(),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Number(n) => n.as_f64(),
            _ => None,
        }
    }

    pub fn as_node(&self) -> Option<&TreeNode> {
        match self {
            Value::Node(node) => Some(node),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }
}

/// The text form of a value: strings verbatim, scalars by their JSON
/// spelling, nodes and lists as compact JSON.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => f.write_str("null"),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Number(n) => write!(f, "{}", n),
            Value::String(s) => f.write_str(s),
            Value::Node(_) | Value::List(_) => write!(f, "{}", crate::json::to_json(self)),
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Number(Number::from(i))
    }
}

impl From<TreeNode> for Value {
    fn from(node: TreeNode) -> Self {
        Value::Node(node)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::List(items)
    }
}

impl TreeNode {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `value` under `key`.
    ///
    /// The first value for a key is stored as is, except that a list is
    /// wrapped in a one-element list. A second value turns the entry into a
    /// list `[first, second]`; later values are appended.
    pub fn accumulate(&mut self, key: impl Into<String>, value: Value) {
        match self.entries.entry(key.into()) {
            indexmap::map::Entry::Vacant(slot) => {
                let value = match value {
                    Value::List(_) => Value::List(vec![value]),
                    other => other,
                };
                slot.insert(value);
            }
            indexmap::map::Entry::Occupied(mut slot) => match slot.get_mut() {
                Value::List(items) => items.push(value),
                existing => {
                    let first = std::mem::replace(existing, Value::Null);
                    *existing = Value::List(vec![first, value]);
                }
            },
        }
    }

    /// Set `key` to `value`, replacing any previous value.
    pub fn insert(&mut self, key: impl Into<String>, value: Value) -> Option<Value> {
        self.entries.insert(key.into(), value)
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.entries.shift_remove(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> Iter<'_, String, Value> {
        self.entries.iter()
    }

    /// If the node holds nothing but text, take that text value.
    pub fn into_content(mut self) -> Result<Value, TreeNode> {
        if self.len() == 1 {
            if let Some(content) = self.entries.shift_remove(CONTENT_KEY) {
                return Ok(content);
            }
        }
        Err(self)
    }
}

impl IntoIterator for TreeNode {
    type Item = (String, Value);
    type IntoIter = IntoIter<String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a TreeNode {
    type Item = (&'a String, &'a Value);
    type IntoIter = Iter<'a, String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl FromIterator<(String, Value)> for TreeNode {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}
