//! vgm2txt: print a human-readable trace of a VGM file.
//!
//! ```bash
//! vgm2txt song.vgm
//! vgm2txt song.vgz --pcm --blocks
//! vgm2txt song.vgm --json
//! ```

use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use vgm_trace::{trace_path, DecoderConfig, TextDump};

/// Decode a VGM (or gzipped VGZ) file and print its commands and timing
#[derive(Parser, Debug)]
#[command(name = "vgm2txt", version, long_about = None)]
struct Cli {
    /// VGM file to trace
    #[arg(value_name = "FILE")]
    file: PathBuf,

    /// Also print every PCM write
    #[arg(long)]
    pcm: bool,

    /// Also print the size of every data block
    #[arg(long)]
    blocks: bool,

    /// Print one JSON object per trace unit instead of text
    #[arg(long)]
    json: bool,

    /// Enable verbose (debug-level) logging on stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let config = DecoderConfig {
        trace_pcm_writes: cli.pcm,
        trace_data_blocks: cli.blocks,
        ..DecoderConfig::default()
    };

    let trace = trace_path(&cli.file, config)
        .with_context(|| format!("Failed to open {}", cli.file.display()))?;

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let result = if cli.json {
        trace.write_json(&mut out)
    } else {
        trace.write_text(&mut out)
    };
    out.flush().context("Failed to flush output")?;

    result.with_context(|| format!("Trace of {} aborted", cli.file.display()))
}
