//! Settings file for the CLI.
//!
//! ```yaml
//! parse:
//!   keep-strings: false
//!   single-root: true
//!   max-depth: 512
//! output:
//!   pretty: true
//!   root-tag: document
//! ```

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;
use xmljson::ParseOptions;

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub parse: ParseOptions,
    pub output: OutputConfig,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct OutputConfig {
    /// Indent JSON output.
    pub pretty: bool,

    /// Element that wraps XML output.
    pub root_tag: Option<String>,
}

impl Config {
    /// Load settings from `path`, or the defaults when no file is given.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config = Self::from_yaml(&text)
            .with_context(|| format!("Invalid config file {}", path.display()))?;
        tracing::debug!(path = %path.display(), ?config, "Loaded config");
        Ok(config)
    }

    fn from_yaml(text: &str) -> Result<Self> {
        // An empty document deserializes to unit, not to an empty map
        if text.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(text)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::load(None).unwrap();
        assert!(!config.parse.keep_strings);
        assert!(!config.output.pretty);
        assert_eq!(config.output.root_tag, None);
    }

    #[test]
    fn test_from_yaml() {
        let config = Config::from_yaml(
            "parse:\n  single-root: true\noutput:\n  pretty: true\n  root-tag: doc\n",
        )
        .unwrap();
        assert!(config.parse.single_root);
        assert!(!config.parse.keep_strings);
        assert!(config.output.pretty);
        assert_eq!(config.output.root_tag.as_deref(), Some("doc"));
    }

    #[test]
    fn test_max_depth_from_yaml() {
        let config = Config::from_yaml("parse:\n  max-depth: 8\n").unwrap();
        assert_eq!(config.parse.max_depth, 8);
        assert_eq!(Config::default().parse.max_depth, xmljson::DEFAULT_MAX_DEPTH);
    }

    #[test]
    fn test_empty_file_uses_defaults() {
        let config = Config::from_yaml("\n").unwrap();
        assert!(!config.output.pretty);
    }

    #[test]
    fn test_unknown_field_is_rejected() {
        assert!(Config::from_yaml("output:\n  colour: red\n").is_err());
    }
}
