//! Trace Output Units
//!
//! One unit per decoder emission. Units render as the classic text trace via
//! `Display` and serialize to JSON for machine consumption.

use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TraceUnit {
    /// One byte of the header dump; `row_end` closes the current row
    HexByte { value: u8, row_end: bool },
    Ym2151Write { register: u8, value: u8 },
    /// Flushed wait report
    Wait { cycles: u32 },
    /// Size of a skipped data block (verbose only)
    DataBlock { size: u32 },
    /// PCM data byte and its address (verbose only)
    PcmWrite { addr: u16, value: u8 },
}

impl TraceUnit {
    /// Text written after the unit itself
    pub fn terminator(&self) -> &'static str {
        match self {
            Self::HexByte { row_end: false, .. } => "",
            _ => "\n",
        }
    }
}

impl fmt::Display for TraceUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::HexByte { value, .. } => write!(f, "{:02x} ", value),
            Self::Ym2151Write { register, value } => {
                write!(f, "YM2151 {:02x} : {:02x}", register, value)
            },
            Self::Wait { cycles } => write!(f, "Wait {} cycles", cycles),
            Self::DataBlock { size } => write!(f, "Block of size {:08x} bytes", size),
            Self::PcmWrite { addr, value } => write!(f, "Writing {:02x} to {:04x} PCM", value, addr),
        }
    }
}
