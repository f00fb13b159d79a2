//! Structural conversion between XML text and a JSON-like tree.
//!
//! This crate turns an XML document into a [`TreeNode`]: an ordered map from
//! element and attribute names to [`Value`]s, and turns such trees back into
//! XML text. It is a best-effort bridge, not a conformant XML processor:
//! namespaces, DTDs and entity decoding are out of scope.
//!
//! # Overview
//!
//! The main pieces are:
//! - [`Tokener`]: a character cursor that produces [`Token`]s on demand
//! - [`parse`]: builds a tree from XML text
//! - [`serialize`]: writes a tree back out as XML
//! - [`to_json`] / [`from_json`]: bridge the tree to `serde_json`
//!
//! # Tree shape
//!
//! Attributes and child elements become keys of the element's node. A key
//! seen twice holds a list of its values in document order. Text runs are
//! stored under the key `"content"`. An element with no attributes,
//! children or text becomes the empty string, and one holding only text
//! becomes that text. Attribute values and text are coerced to booleans,
//! null and numbers where they look like them.
//!
//! ```rust
//! use xmljson::{parse, to_json_string};
//!
//! let tree = parse(r#"<book id="7"><title>Dune</title><tag>a</tag><tag>b</tag></book>"#).unwrap();
//! assert_eq!(
//!     to_json_string(&tree, false),
//!     r#"{"book":{"id":7,"title":"Dune","tag":["a","b"]}}"#
//! );
//! ```
//!
//! # Round trips
//!
//! ```rust
//! use xmljson::{parse, serialize_node};
//!
//! let tree = parse("<a><b/><c>text</c></a>").unwrap();
//! assert_eq!(serialize_node(&tree, None), "<a><b/><c>text</c></a>");
//! ```

pub mod coerce;
pub mod context;
pub mod error;
pub mod json;
pub mod parser;
pub mod serializer;
pub mod token;
pub mod tokener;
pub mod value;

// Re-export main types
pub use coerce::coerce;
pub use context::{DEFAULT_MAX_DEPTH, ParseContext, ParseOptions, Warning};
pub use error::{Error, Result};
pub use json::{from_json, node_to_json, to_json, to_json_string};
pub use parser::{parse, parse_with_context, parse_with_options};
pub use serializer::{escape, serialize, serialize_list, serialize_node};
pub use token::Token;
pub use tokener::Tokener;
pub use value::{CONTENT_KEY, TreeNode, Value};
