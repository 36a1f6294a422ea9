//! Decoder States
//!
//! Named states of the trace decoder. Each state keeps the numeric code the
//! classic `vgm2txt` used, so diagnostics and logs stay comparable.

use crate::errors::TraceError;
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum DecoderState {
    /// Leading bytes dumped as raw hex
    HeaderDump,
    /// Top-level opcode dispatch
    Command,
    Ym2151Reg,
    Ym2151Val,
    /// Expecting the 0x66 compatibility marker
    BlockHeader1,
    /// Data type byte, ignored
    BlockHeader2,
    BlockSizeB0,
    BlockSizeB1,
    BlockSizeB2,
    BlockSizeB3,
    /// Skipping the block payload
    BlockSkip,
    PcmAddrLo,
    PcmAddrHi,
    PcmWrite,
    WaitLo,
    WaitHi,
}

impl DecoderState {
    pub fn code(&self) -> u8 {
        match self {
            Self::HeaderDump => 0,
            Self::Command => 1,
            Self::Ym2151Reg => 10,
            Self::Ym2151Val => 11,
            Self::BlockHeader1 => 20,
            Self::BlockHeader2 => 21,
            Self::BlockSizeB0 => 22,
            Self::BlockSizeB1 => 23,
            Self::BlockSizeB2 => 24,
            Self::BlockSizeB3 => 25,
            Self::BlockSkip => 26,
            Self::PcmAddrLo => 30,
            Self::PcmAddrHi => 31,
            Self::PcmWrite => 32,
            Self::WaitLo => 40,
            Self::WaitHi => 41,
        }
    }

    /// True while the decoder is inside a multi-byte command
    pub fn is_mid_command(&self) -> bool {
        !matches!(self, Self::HeaderDump | Self::Command)
    }
}

impl TryFrom<u8> for DecoderState {
    type Error = TraceError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        let state = match code {
            0 => Self::HeaderDump,
            1 => Self::Command,
            10 => Self::Ym2151Reg,
            11 => Self::Ym2151Val,
            20 => Self::BlockHeader1,
            21 => Self::BlockHeader2,
            22 => Self::BlockSizeB0,
            23 => Self::BlockSizeB1,
            24 => Self::BlockSizeB2,
            25 => Self::BlockSizeB3,
            26 => Self::BlockSkip,
            30 => Self::PcmAddrLo,
            31 => Self::PcmAddrHi,
            32 => Self::PcmWrite,
            40 => Self::WaitLo,
            41 => Self::WaitHi,
            state => return Err(TraceError::UnknownState { state }),
        };
        Ok(state)
    }
}

impl fmt::Display for DecoderState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} ({})", self, self.code())
    }
}
