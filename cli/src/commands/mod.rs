//! CLI commands for toknum.

pub mod decode;
pub mod encode;
pub mod serve;
pub mod vocab;

pub use decode::DecodeCommand;
pub use encode::EncodeCommand;
pub use serve::ServeCommand;
pub use vocab::VocabCommand;

use anyhow::{bail, Context, Result};
use std::path::{Path, PathBuf};

/// Resolve the text a command works on: inline `--input` (`-` = stdin) or a
/// document file routed through extraction.
pub(crate) fn read_text(input: Option<&str>, file: Option<&PathBuf>) -> Result<String> {
    match (input, file) {
        (_, Some(path)) => extract_file(path),
        (Some("-"), None) => {
            use std::io::Read;
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("failed to read stdin")?;
            Ok(buffer)
        }
        (Some(text), None) => Ok(text.to_string()),
        (None, None) => bail!("provide --input or --file"),
    }
}

fn extract_file(path: &Path) -> Result<String> {
    let bytes =
        std::fs::read(path).with_context(|| format!("failed to read {}", path.display()))?;
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    toknum_extract::extract(&name, &bytes)
        .with_context(|| format!("failed to extract text from {}", path.display()))
}
