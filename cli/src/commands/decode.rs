//! Decode command implementation.
//!
//! Vocabularies are never persisted, so decoding rebuilds the deterministic
//! vocabulary from the same corpus text that produced the tokens.

use clap::Parser;
use std::path::PathBuf;

/// Decode command arguments.
#[derive(Parser)]
pub struct DecodeCommand {
    /// Whitespace-separated token ids (use "-" to read stdin)
    #[arg(short, long)]
    pub tokens: String,

    /// Corpus text the vocabulary was built from
    #[arg(short, long)]
    pub corpus: Option<String>,

    /// Read the corpus from a PDF, DOCX or TXT file instead
    #[arg(long, conflicts_with = "corpus")]
    pub corpus_file: Option<PathBuf>,

    /// Tokenization granularity: char or word
    #[arg(short, long, default_value = "char")]
    pub granularity: String,
}

use anyhow::{Context, Result};
use toknum_core::{decode, Granularity, Vocabulary};

pub fn run(cmd: DecodeCommand) -> Result<()> {
    let granularity: Granularity = cmd.granularity.parse()?;

    let raw_tokens = if cmd.tokens == "-" {
        use std::io::Read;
        let mut buffer = String::new();
        std::io::stdin()
            .read_to_string(&mut buffer)
            .context("failed to read stdin")?;
        buffer
    } else {
        cmd.tokens
    };
    let tokens = parse_tokens(&raw_tokens)?;

    let corpus = super::read_text(cmd.corpus.as_deref(), cmd.corpus_file.as_ref())
        .context("decoding needs the corpus text (--corpus or --corpus-file)")?;

    let vocab = Vocabulary::from_text(&corpus, granularity);
    println!("{}", decode(&tokens, &vocab, granularity));

    Ok(())
}

/// Parse a whitespace/comma-separated id list.
fn parse_tokens(raw: &str) -> Result<Vec<u32>> {
    raw.split(|c: char| c.is_whitespace() || c == ',')
        .filter(|part| !part.is_empty())
        .map(|part| {
            part.parse::<u32>()
                .with_context(|| format!("invalid token id `{}`", part))
        })
        .collect()
}
