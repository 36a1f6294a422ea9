//! Big-endian 16-bit hex dump, one word per line, for memory initialization files.

use crate::errors::{TraceError, TraceResult};
use crate::traits::TextDump;
use byteorder::{BigEndian, ByteOrder};
use bytes::Bytes;
use std::fmt::Write as _;
use std::io::Write;

#[derive(Debug, Clone)]
pub struct HexDump {
    data: Bytes,
}

impl HexDump {
    pub fn new(data: Bytes) -> Self {
        Self { data }
    }

    /// Decode the whole input as big-endian words.
    ///
    /// Fails without producing anything if the input has an odd length.
    pub fn words(&self) -> TraceResult<Vec<u16>> {
        if self.data.len() % 2 != 0 {
            return Err(TraceError::TruncatedWord {
                offset: self.data.len() - 1,
            });
        }

        Ok(self.data.chunks_exact(2).map(BigEndian::read_u16).collect())
    }

    /// Render the dump as text: four lowercase hex digits and a newline per word
    pub fn render(&self) -> TraceResult<String> {
        let words = self.words()?;
        let mut text = String::with_capacity(words.len() * 5);
        for word in words {
            // Writing into a String cannot fail
            let _ = writeln!(text, "{:04x}", word);
        }
        Ok(text)
    }
}

impl TextDump for HexDump {
    fn write_text<W: Write>(self, out: &mut W) -> TraceResult<()> {
        let text = self.render()?;
        out.write_all(text.as_bytes())?;
        Ok(())
    }
}
