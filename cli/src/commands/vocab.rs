//! Vocab command implementation.

use clap::Parser;
use std::path::PathBuf;

/// Vocab command arguments.
#[derive(Parser)]
pub struct VocabCommand {
    /// Text to build the vocabulary from (use "-" to read stdin)
    #[arg(short, long)]
    pub input: Option<String>,

    /// Read the text from a PDF, DOCX or TXT file instead
    #[arg(short, long, conflicts_with = "input")]
    pub file: Option<PathBuf>,

    /// Tokenization granularity: char or word
    #[arg(short, long, default_value = "char")]
    pub granularity: String,

    /// Print the mapping as JSON
    #[arg(long, default_value_t = false)]
    pub json: bool,
}

use anyhow::Result;
use toknum_core::{Granularity, Vocabulary};

pub fn run(cmd: VocabCommand) -> Result<()> {
    let granularity: Granularity = cmd.granularity.parse()?;
    let text = super::read_text(cmd.input.as_deref(), cmd.file.as_ref())?;

    let vocab = Vocabulary::from_text(&text, granularity);

    if cmd.json {
        let entries: Vec<serde_json::Value> = vocab
            .entries()
            .map(|(symbol, id)| serde_json::json!({ "symbol": symbol, "id": id }))
            .collect();
        println!("{}", serde_json::to_string_pretty(&entries)?);
    } else {
        for (symbol, id) in vocab.entries() {
            println!("{}\t{:?}", id, symbol);
        }
    }

    Ok(())
}
