//! xmljson-cli - Main entry point

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod config;

#[derive(Parser)]
#[command(name = "xmljson-cli")]
#[command(version)]
#[command(about = "Convert between XML and JSON", long_about = None)]
struct Cli {
    /// YAML file with parse and output settings
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert an XML document to JSON
    ToJson {
        /// Input file ('-' or omitted for stdin)
        input: Option<String>,

        /// Write output to FILE ('-' or omitted for stdout)
        #[arg(short = 'o', long)]
        output: Option<String>,

        /// Indent the JSON output
        #[arg(long)]
        pretty: bool,

        /// Keep attribute values and text as strings
        #[arg(long)]
        keep_strings: bool,

        /// Fail if the document has more than one top-level element
        #[arg(long)]
        single_root: bool,
    },

    /// Convert a JSON document to XML
    ToXml {
        /// Input file ('-' or omitted for stdin)
        input: Option<String>,

        /// Write output to FILE ('-' or omitted for stdout)
        #[arg(short = 'o', long)]
        output: Option<String>,

        /// Wrap the output in an element with this name
        #[arg(long)]
        root: Option<String>,
    },
}

fn main() -> Result<()> {
    // Logs go to stderr so they never mix with converted output
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "xmljson=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let mut settings = config::Config::load(cli.config.as_deref())?;

    match cli.command {
        Commands::ToJson {
            input,
            output,
            pretty,
            keep_strings,
            single_root,
        } => {
            settings.output.pretty |= pretty;
            settings.parse.keep_strings |= keep_strings;
            settings.parse.single_root |= single_root;
            commands::to_json::execute(input.as_deref(), output.as_deref(), &settings)
        }
        Commands::ToXml {
            input,
            output,
            root,
        } => {
            if root.is_some() {
                settings.output.root_tag = root;
            }
            commands::to_xml::execute(input.as_deref(), output.as_deref(), &settings)
        }
    }
}
