//! Command implementations for the xmljson CLI
//!
//! Each command reads its input, hands the text to the xmljson library and
//! writes the result.

use anyhow::{Context, Result};
use std::io::{Read, Write};

pub mod to_json;
pub mod to_xml;

/// Read the whole input; `None` or `-` means stdin.
pub fn read_input(input: Option<&str>) -> Result<String> {
    match input {
        None | Some("-") => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("Failed to read stdin")?;
            Ok(text)
        }
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read input file {}", path)),
    }
}

/// Write `text` followed by a newline; `None` or `-` means stdout.
pub fn write_output(output: Option<&str>, text: &str) -> Result<()> {
    match output {
        None | Some("-") => {
            let mut stdout = std::io::stdout().lock();
            writeln!(stdout, "{}", text).context("Failed to write stdout")?;
            Ok(())
        }
        Some(path) => std::fs::write(path, format!("{}\n", text))
            .with_context(|| format!("Failed to write output file {}", path)),
    }
}
