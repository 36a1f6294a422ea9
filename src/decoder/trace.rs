//! Lazy Trace Iterator
//!
//! Pulls bytes from the input only as units are requested. The first error
//! ends the trace.

use super::machine::VgmDecoder;
use super::output::TraceUnit;
use crate::decoder_config::DecoderConfig;
use crate::errors::{TraceError, TraceResult};
use crate::traits::TextDump;
use bytes::{Buf, Bytes};
use std::io::Write;
use std::iter::FusedIterator;

#[derive(Debug)]
pub struct Trace {
    decoder: VgmDecoder,
    data: Bytes,
    finished: bool,
}

impl Trace {
    /// Trace `data` with a fresh decoder built from `config`
    pub fn new(data: Bytes, config: DecoderConfig) -> TraceResult<Self> {
        Ok(Self::from_decoder(VgmDecoder::new(config)?, data))
    }

    pub(crate) fn from_decoder(decoder: VgmDecoder, data: Bytes) -> Self {
        Self {
            decoder,
            data,
            finished: false,
        }
    }

    /// Decoder driving this trace, for inspecting position and pending wait
    pub fn decoder(&self) -> &VgmDecoder {
        &self.decoder
    }

    /// Write every unit as one JSON object per line, stopping at the first error
    pub fn write_json<W: Write>(self, out: &mut W) -> TraceResult<()> {
        for unit in self {
            let unit = unit?;
            serde_json::to_writer(&mut *out, &unit).map_err(|e| TraceError::WriteError {
                reason: e.to_string(),
            })?;
            out.write_all(b"\n")?;
        }
        Ok(())
    }
}

impl Iterator for Trace {
    type Item = TraceResult<TraceUnit>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        while self.data.has_remaining() {
            let byte = self.data.get_u8();
            match self.decoder.step(byte) {
                Ok(Some(unit)) => return Some(Ok(unit)),
                Ok(None) => continue,
                Err(e) => {
                    self.finished = true;
                    return Some(Err(e));
                },
            }
        }

        if self.decoder.state().is_mid_command() {
            tracing::debug!(
                state = %self.decoder.state(),
                offset = self.decoder.byte_offset(),
                "input ended inside a command"
            );
        }
        self.finished = true;
        None
    }
}

impl FusedIterator for Trace {}

impl TextDump for Trace {
    /// Writes the classic text trace. On a fatal error its diagnostic line
    /// (`Unknown code: XX` / `Unknown state: N`) is written before the error
    /// is returned.
    fn write_text<W: Write>(self, out: &mut W) -> TraceResult<()> {
        for unit in self {
            match unit {
                Ok(unit) => unit.write_text(out)?,
                Err(e) => {
                    if let Some(line) = e.trace_line() {
                        writeln!(out, "{}", line)?;
                    }
                    return Err(e);
                },
            }
        }
        Ok(())
    }
}
