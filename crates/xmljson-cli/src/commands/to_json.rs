//! XML to JSON conversion

use anyhow::{Context, Result};
use xmljson::ParseContext;

use crate::config::Config;

pub fn execute(input: Option<&str>, output: Option<&str>, config: &Config) -> Result<()> {
    let xml = super::read_input(input)?;

    let mut ctx = ParseContext::with_options(config.parse);
    let tree = xmljson::parse_with_context(&xml, &mut ctx)
        .with_context(|| format!("Failed to parse XML from {}", input.unwrap_or("stdin")))?;

    for warning in ctx.take_warnings() {
        tracing::warn!("{}", warning);
    }

    let json = xmljson::to_json_string(&tree, config.output.pretty);
    super::write_output(output, &json)
}
