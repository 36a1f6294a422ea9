//! bin2hex: convert a binary file into a text file with one big-endian
//! 16-bit word per line, for memory initialization.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use vgm_trace::hexdump_path;

/// Convert a binary file into big-endian 16-bit hex words, one per line
#[derive(Parser, Debug)]
#[command(name = "bin2hex", version, long_about = None)]
struct Cli {
    /// Binary input file
    #[arg(value_name = "SOURCE")]
    source: PathBuf,

    /// Text file to write
    #[arg(value_name = "DEST")]
    dest: PathBuf,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter("warn")
        .with_writer(std::io::stderr)
        .init();

    let text = hexdump_path(&cli.source)
        .and_then(|dump| dump.render())
        .with_context(|| format!("Failed to convert {}", cli.source.display()))?;

    std::fs::write(&cli.dest, &text)
        .with_context(|| format!("Failed to write {}", cli.dest.display()))?;
    tracing::info!(words = text.len() / 5, dest = %cli.dest.display(), "wrote hex dump");

    Ok(())
}
