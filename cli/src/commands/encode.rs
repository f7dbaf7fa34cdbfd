//! Encode command implementation.

use clap::Parser;
use std::path::PathBuf;

/// Encode command arguments.
#[derive(Parser)]
pub struct EncodeCommand {
    /// Text to encode (use "-" to read stdin)
    #[arg(short, long)]
    pub input: Option<String>,

    /// Read the text from a PDF, DOCX or TXT file instead
    #[arg(short, long, conflicts_with = "input")]
    pub file: Option<PathBuf>,

    /// Tokenization granularity: char or word
    #[arg(short, long, default_value = "char")]
    pub granularity: String,

    /// Output file (stdout if not specified)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

use anyhow::Result;
use toknum_core::{build_and_encode, Granularity};

pub fn run(cmd: EncodeCommand) -> Result<()> {
    let granularity: Granularity = cmd.granularity.parse()?;
    let text = super::read_text(cmd.input.as_deref(), cmd.file.as_ref())?;

    let (_vocab, tokens) = build_and_encode(&text, granularity);

    let ids: Vec<String> = tokens.iter().map(|id| id.to_string()).collect();
    let output = ids.join(" ");

    match &cmd.output {
        Some(path) => {
            std::fs::write(path, &output)?;
            println!("Encoded {} tokens to {}", tokens.len(), path.display());
        }
        None => {
            println!("{}", output);
        }
    }

    Ok(())
}
