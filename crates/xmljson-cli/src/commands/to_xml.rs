//! JSON to XML conversion

use anyhow::{Context, Result};

use crate::config::Config;

pub fn execute(input: Option<&str>, output: Option<&str>, config: &Config) -> Result<()> {
    let text = super::read_input(input)?;

    let json: serde_json::Value = serde_json::from_str(&text)
        .with_context(|| format!("Failed to parse JSON from {}", input.unwrap_or("stdin")))?;
    let value = xmljson::from_json(json);

    let xml = xmljson::serialize(&value, config.output.root_tag.as_deref());
    tracing::debug!(bytes = xml.len(), "Converted JSON to XML");
    super::write_output(output, &xml)
}
