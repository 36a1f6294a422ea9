//! VGM Trace State Machine
//!
//! Owns all decoding state: position, pending wait, and the scratch fields of
//! multi-byte commands. `step` is the only mutator.

use super::output::TraceUnit;
use super::state::DecoderState;
use super::trace::Trace;
use super::{DATA_BLOCK_MARKER, OP_DATA_BLOCK, OP_PCM_WRITE, OP_WAIT_N_SAMPLES, OP_YM2151_WRITE};
use crate::decoder_config::DecoderConfig;
use crate::errors::{TraceError, TraceResult};
use bytes::Bytes;

#[derive(Debug, Clone)]
pub struct VgmDecoder {
    config: DecoderConfig,
    state: DecoderState,
    /// Offset of the next byte to be consumed
    byte_offset: u64,
    /// Wait cycles accumulated since the last report
    wait: u32,
    register: u8,
    block_size: u32,
    /// Offset of the last size byte of the current data block
    block_addr: u64,
    pcm_addr: u16,
}

impl Default for VgmDecoder {
    fn default() -> Self {
        Self::from_valid_config(DecoderConfig::default())
    }
}

impl VgmDecoder {
    /// Create a decoder, rejecting unusable configurations
    pub fn new(config: DecoderConfig) -> TraceResult<Self> {
        config.validate()?;
        Ok(Self::from_valid_config(config))
    }

    fn from_valid_config(config: DecoderConfig) -> Self {
        let state = if config.header_len == 0 {
            DecoderState::Command
        } else {
            DecoderState::HeaderDump
        };

        Self {
            config,
            state,
            byte_offset: 0,
            wait: 0,
            register: 0,
            block_size: 0,
            block_addr: 0,
            pcm_addr: 0,
        }
    }

    pub fn config(&self) -> &DecoderConfig {
        &self.config
    }

    pub fn state(&self) -> DecoderState {
        self.state
    }

    /// Number of bytes consumed so far
    pub fn byte_offset(&self) -> u64 {
        self.byte_offset
    }

    /// Wait cycles accumulated and not yet reported
    pub fn pending_wait(&self) -> u32 {
        self.wait
    }

    /// Lazily decode `data` with this decoder
    pub fn trace(self, data: Bytes) -> Trace {
        Trace::from_decoder(self, data)
    }

    /// Consume one byte, returning the unit it completes, if any
    pub fn step(&mut self, byte: u8) -> TraceResult<Option<TraceUnit>> {
        let unit = self.transition(byte)?;
        self.byte_offset += 1;
        Ok(unit)
    }

    fn transition(&mut self, byte: u8) -> TraceResult<Option<TraceUnit>> {
        let offset = self.byte_offset;

        let unit = match self.state {
            DecoderState::HeaderDump => {
                let row_width = self.config.row_width;
                if offset + 1 >= self.config.header_len {
                    self.state = DecoderState::Command;
                }
                Some(TraceUnit::HexByte {
                    value: byte,
                    row_end: offset % row_width == row_width - 1,
                })
            },
            DecoderState::Command => {
                self.state = match byte {
                    OP_YM2151_WRITE => DecoderState::Ym2151Reg,
                    OP_WAIT_N_SAMPLES => DecoderState::WaitLo,
                    OP_DATA_BLOCK => DecoderState::BlockHeader1,
                    0x70..=0x7F => {
                        // Wait n+1 samples
                        self.wait = self.wait.saturating_add((byte & 0x0F) as u32 + 1);
                        DecoderState::Command
                    },
                    OP_PCM_WRITE => DecoderState::PcmAddrLo,
                    opcode => {
                        tracing::error!(opcode, offset, "unknown command");
                        return Err(TraceError::UnknownCommand { opcode, offset });
                    },
                };
                None
            },
            DecoderState::Ym2151Reg => {
                let report = self.config.wait_report(self.wait);
                if report.is_some() {
                    self.wait = 0;
                }
                self.register = byte;
                self.state = DecoderState::Ym2151Val;
                report.map(|cycles| TraceUnit::Wait { cycles })
            },
            DecoderState::Ym2151Val => {
                self.state = DecoderState::Command;
                Some(TraceUnit::Ym2151Write {
                    register: self.register,
                    value: byte,
                })
            },
            DecoderState::BlockHeader1 => {
                if byte != DATA_BLOCK_MARKER {
                    tracing::error!(found = byte, offset, "malformed data block header");
                    return Err(TraceError::MalformedBlockHeader {
                        found: byte,
                        offset,
                    });
                }
                self.state = DecoderState::BlockHeader2;
                None
            },
            DecoderState::BlockHeader2 => {
                tracing::debug!(data_type = byte, offset, "data block");
                self.state = DecoderState::BlockSizeB0;
                None
            },
            DecoderState::BlockSizeB0 => {
                self.block_size = byte as u32;
                self.state = DecoderState::BlockSizeB1;
                None
            },
            DecoderState::BlockSizeB1 => {
                self.block_size |= (byte as u32) << 8;
                self.state = DecoderState::BlockSizeB2;
                None
            },
            DecoderState::BlockSizeB2 => {
                self.block_size |= (byte as u32) << 16;
                self.state = DecoderState::BlockSizeB3;
                None
            },
            DecoderState::BlockSizeB3 => {
                self.block_size |= (byte as u32) << 24;
                self.block_addr = offset;
                tracing::debug!(size = self.block_size, offset, "skipping data block payload");

                // An empty payload has nothing to skip
                self.state = if self.block_size == 0 {
                    DecoderState::Command
                } else {
                    DecoderState::BlockSkip
                };

                self.config
                    .trace_data_blocks
                    .then_some(TraceUnit::DataBlock {
                        size: self.block_size,
                    })
            },
            DecoderState::BlockSkip => {
                if offset == self.block_addr + self.block_size as u64 {
                    self.state = DecoderState::Command;
                }
                None
            },
            DecoderState::PcmAddrLo => {
                self.pcm_addr = byte as u16;
                self.state = DecoderState::PcmAddrHi;
                None
            },
            DecoderState::PcmAddrHi => {
                self.pcm_addr |= (byte as u16) << 8;
                self.state = DecoderState::PcmWrite;
                None
            },
            DecoderState::PcmWrite => {
                self.state = DecoderState::Command;
                if self.config.trace_pcm_writes {
                    Some(TraceUnit::PcmWrite {
                        addr: self.pcm_addr,
                        value: byte,
                    })
                } else {
                    tracing::trace!(addr = self.pcm_addr, value = byte, "PCM write discarded");
                    None
                }
            },
            DecoderState::WaitLo => {
                self.wait = self.wait.saturating_add(byte as u32);
                self.state = DecoderState::WaitHi;
                None
            },
            DecoderState::WaitHi => {
                self.wait = self.wait.saturating_add((byte as u32) << 8);
                self.state = DecoderState::Command;
                None
            },
        };

        Ok(unit)
    }
}
