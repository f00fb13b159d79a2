//! Options and warning collection for parsing.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Elements nested deeper than this are rejected unless
/// [`ParseOptions::max_depth`] says otherwise.
pub const DEFAULT_MAX_DEPTH: usize = 512;

/// Switches that change how XML is turned into a tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct ParseOptions {
    /// Keep every attribute value and text run as a string instead of
    /// inferring booleans, null and numbers.
    pub keep_strings: bool,

    /// Reject documents with more than one top-level element.
    pub single_root: bool,

    /// Deepest element nesting accepted before parsing fails with
    /// "Nesting too deep".
    ///
    /// The returned tree is dropped, serialized and converted to JSON
    /// recursively, so this also bounds native stack use after parsing.
    pub max_depth: usize,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            keep_strings: false,
            single_root: false,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

/// A non-fatal observation made while parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Warning {
    /// Text outside any element was dropped.
    DiscardedText { text: String },

    /// More than one top-level element was merged into the result.
    MultipleRoots { count: usize },
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Warning::DiscardedText { text } => {
                write!(f, "Discarded text outside of any element: '{}'", text)
            }
            Warning::MultipleRoots { count } => {
                write!(f, "Document has {} top-level elements", count)
            }
        }
    }
}

/// Context for parsing that carries options and collects warnings.
///
/// Warnings accumulate across parses until taken.
///
/// # Example
///
/// ```rust
/// use xmljson::{parse_with_context, ParseContext};
///
/// let mut ctx = ParseContext::new();
/// let tree = parse_with_context("stray <a/>", &mut ctx).unwrap();
/// assert!(tree.contains_key("a"));
/// for warning in ctx.warnings() {
///     eprintln!("warning: {}", warning);
/// }
/// assert!(ctx.has_warnings());
/// ```
#[derive(Debug, Default)]
pub struct ParseContext {
    options: ParseOptions,
    warnings: Vec<Warning>,
}

impl ParseContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: ParseOptions) -> Self {
        Self {
            options,
            warnings: Vec::new(),
        }
    }

    pub fn options(&self) -> &ParseOptions {
        &self.options
    }

    pub fn add_warning(&mut self, warning: Warning) {
        self.warnings.push(warning);
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    pub fn warnings(&self) -> &[Warning] {
        &self.warnings
    }

    /// Take all collected warnings, leaving the context empty.
    pub fn take_warnings(&mut self) -> Vec<Warning> {
        std::mem::take(&mut self.warnings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_take_warnings_empties_context() {
        let mut ctx = ParseContext::new();
        assert!(!ctx.has_warnings());
        ctx.add_warning(Warning::MultipleRoots { count: 2 });
        assert!(ctx.has_warnings());
        assert_eq!(ctx.take_warnings().len(), 1);
        assert!(!ctx.has_warnings());
    }

    #[test]
    fn test_warning_display() {
        let warning = Warning::DiscardedText {
            text: "junk".to_string(),
        };
        assert_eq!(
            warning.to_string(),
            "Discarded text outside of any element: 'junk'"
        );
    }

    #[test]
    fn test_options_default() {
        let ctx = ParseContext::with_options(ParseOptions {
            keep_strings: true,
            ..Default::default()
        });
        assert!(ctx.options().keep_strings);
        assert!(!ctx.options().single_root);
        assert_eq!(ctx.options().max_depth, DEFAULT_MAX_DEPTH);
    }
}
