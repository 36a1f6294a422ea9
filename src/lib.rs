pub mod decoder;
pub mod decoder_config;
pub mod errors;
pub mod hexdump;
pub mod traits;
pub mod utils;

pub use decoder::*;
pub use decoder_config::*;
pub use errors::*;
pub use hexdump::*;
pub use traits::*;

use std::path::Path;

/// Open a VGM (or gzipped VGZ) file and return its lazy trace
pub fn trace_path(path: &Path, config: DecoderConfig) -> TraceResult<Trace> {
    config.validate()?;
    let data = utils::load_input(path, &config)?;
    Trace::new(data, config)
}

/// Open any file and return its big-endian word dump
pub fn hexdump_path(path: &Path) -> TraceResult<HexDump> {
    let data = utils::read_file(path)?;
    Ok(HexDump::new(bytes::Bytes::from(data)))
}
