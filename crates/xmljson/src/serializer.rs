//! XML text from tree values.
//!
//! Serialization mirrors parsing structurally but does not undo coercion:
//! a number parsed from `007` comes back as `7`.

use crate::value::CONTENT_KEY;
use crate::{TreeNode, Value};

/// Tag used for list items when no tag name is available.
pub const ARRAY_TAG: &str = "array";

/// Serialize a value as XML.
///
/// With `tag_name` set, the value is wrapped in that element. A scalar
/// without a tag name comes out as a quoted string.
///
/// # Example
///
/// ```rust
/// use xmljson::{parse, serialize_node};
///
/// let tree = parse("<a><b>1</b><b>2</b></a>").unwrap();
/// assert_eq!(serialize_node(&tree, None), "<a><b>1</b><b>2</b></a>");
/// ```
pub fn serialize(value: &Value, tag_name: Option<&str>) -> String {
    let mut out = String::new();
    write_value(&mut out, value, tag_name);
    tracing::debug!(bytes = out.len(), "Serialized value to XML");
    out
}

/// Serialize a node as XML, one element per key.
pub fn serialize_node(node: &TreeNode, tag_name: Option<&str>) -> String {
    let mut out = String::new();
    write_node(&mut out, node, tag_name);
    tracing::debug!(bytes = out.len(), "Serialized node to XML");
    out
}

/// Serialize each item of a list as an element named `tag_name`, or
/// [`ARRAY_TAG`] if none is given.
pub fn serialize_list(items: &[Value], tag_name: Option<&str>) -> String {
    let mut out = String::new();
    write_list(&mut out, items, tag_name);
    tracing::debug!(bytes = out.len(), "Serialized list to XML");
    out
}

/// Replace the characters `&`, `<`, `>` and `"` with entity references.
pub fn escape(s: &str) -> String {
    let mut escaped = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

fn write_value(out: &mut String, value: &Value, tag_name: Option<&str>) {
    match value {
        Value::Node(node) => write_node(out, node, tag_name),
        Value::List(items) => write_list(out, items, tag_name),
        scalar => write_scalar(out, scalar, tag_name),
    }
}

fn open_tag(out: &mut String, name: &str) {
    out.push('<');
    out.push_str(name);
    out.push('>');
}

fn close_tag(out: &mut String, name: &str) {
    out.push_str("</");
    out.push_str(name);
    out.push('>');
}

fn empty_tag(out: &mut String, name: &str) {
    out.push('<');
    out.push_str(name);
    out.push_str("/>");
}

fn write_node(out: &mut String, node: &TreeNode, tag_name: Option<&str>) {
    if let Some(tag) = tag_name {
        open_tag(out, tag);
    }

    for (key, value) in node {
        if key == CONTENT_KEY {
            write_content(out, value);
            continue;
        }
        match value {
            Value::List(items) => {
                for item in items {
                    if let Value::List(_) = item {
                        open_tag(out, key);
                        write_value(out, item, None);
                        close_tag(out, key);
                    } else {
                        write_value(out, item, Some(key.as_str()));
                    }
                }
            }
            v if v.is_empty_string() => empty_tag(out, key),
            v => write_value(out, v, Some(key.as_str())),
        }
    }

    if let Some(tag) = tag_name {
        close_tag(out, tag);
    }
}

/// Text runs are written bare; several of them are separated by newlines.
fn write_content(out: &mut String, value: &Value) {
    match value {
        Value::List(items) => {
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push('\n');
                }
                out.push_str(&escape(&item.to_string()));
            }
        }
        other => out.push_str(&escape(&other.to_string())),
    }
}

fn write_list(out: &mut String, items: &[Value], tag_name: Option<&str>) {
    let tag = tag_name.unwrap_or(ARRAY_TAG);
    for item in items {
        write_value(out, item, Some(tag));
    }
}

fn write_scalar(out: &mut String, value: &Value, tag_name: Option<&str>) {
    let text = escape(&value.to_string());
    match tag_name {
        None => {
            out.push('"');
            out.push_str(&text);
            out.push('"');
        }
        Some(tag) if text.is_empty() => empty_tag(out, tag),
        Some(tag) => {
            open_tag(out, tag);
            out.push_str(&text);
            close_tag(out, tag);
        }
    }
}
