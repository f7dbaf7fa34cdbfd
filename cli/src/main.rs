//! toknum CLI - convert text to numeric tokens and back.
//!
//! This is the main entry point for the `toknum` command-line tool.

mod commands;

use clap::{Parser, Subcommand};
use commands::{DecodeCommand, EncodeCommand, ServeCommand, VocabCommand};

#[derive(Parser)]
#[command(name = "toknum")]
#[command(about = "Convert text into numeric tokens and decode them back", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encode text to token ids
    Encode(EncodeCommand),
    /// Decode token ids back to text
    Decode(DecodeCommand),
    /// Print the vocabulary built from a text
    Vocab(VocabCommand),
    /// Serve the interactive web form
    Serve(ServeCommand),
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Encode(cmd) => commands::encode::run(cmd)?,
        Commands::Decode(cmd) => commands::decode::run(cmd)?,
        Commands::Vocab(cmd) => commands::vocab::run(cmd)?,
        Commands::Serve(cmd) => commands::serve::run(cmd)?,
    }

    Ok(())
}
