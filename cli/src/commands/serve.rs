//! Serve command implementation.

use clap::Parser;

/// Serve command arguments.
#[derive(Parser)]
pub struct ServeCommand {
    /// Address to bind, e.g. 127.0.0.1:3030
    #[arg(short, long, default_value = "127.0.0.1:3030")]
    pub addr: String,
}

use anyhow::Result;

pub fn run(cmd: ServeCommand) -> Result<()> {
    toknum_server::serve(&cmd.addr)?;
    Ok(())
}
