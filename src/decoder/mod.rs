//! VGM Trace Decoder Module
//!
//! Byte-at-a-time state machine that turns a VGM byte stream into trace units:
//! a raw hex dump of the header followed by YM2151 writes and wait reports.

pub mod machine;
pub mod output;
pub mod state;
pub mod trace;


pub use machine::VgmDecoder;
pub use output::TraceUnit;
pub use state::DecoderState;
pub use trace::Trace;

// Recognized top-level opcodes
pub const OP_YM2151_WRITE: u8 = 0x54;
pub const OP_WAIT_N_SAMPLES: u8 = 0x61;
pub const OP_DATA_BLOCK: u8 = 0x67;
pub const OP_PCM_WRITE: u8 = 0xC0;

/// Compatibility byte that must follow a data block opcode
pub const DATA_BLOCK_MARKER: u8 = 0x66;
