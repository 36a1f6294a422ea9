//! VGM Byte Stream Builders
//!
//! Fluent builders for the raw byte streams fed to the trace decoder. The
//! header is free-form: the decoder only dumps it, so builders fill it with a
//! pattern rather than a real VGM header.

use bytes::Bytes;

/// Length of the dumped header region
pub const HEADER_LEN: usize = 0x80;

/// Builder for a header followed by a command stream
#[derive(Debug, Clone)]
pub struct VgmStreamBuilder {
    header: Vec<u8>,
    commands: Vec<u8>,
}

impl Default for VgmStreamBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl VgmStreamBuilder {
    /// Start with a zero-filled header carrying the "Vgm " magic
    pub fn new() -> Self {
        let mut header = vec![0u8; HEADER_LEN];
        header[..4].copy_from_slice(b"Vgm ");
        Self {
            header,
            commands: Vec::new(),
        }
    }

    /// Replace the header with `len` copies of `byte`
    pub fn header_filled(mut self, byte: u8, len: usize) -> Self {
        self.header = vec![byte; len];
        self
    }

    pub fn ym2151_write(mut self, register: u8, value: u8) -> Self {
        self.commands.extend_from_slice(&[0x54, register, value]);
        self
    }

    /// 0x61 nn nn
    pub fn wait_samples(mut self, n: u16) -> Self {
        self.commands.push(0x61);
        self.commands.extend_from_slice(&n.to_le_bytes());
        self
    }

    /// 0x7n, waits n+1 samples
    pub fn short_wait(mut self, n: u8) -> Self {
        assert!(n < 16, "short wait only encodes 1..=16 samples");
        self.commands.push(0x70 | n);
        self
    }

    /// 0x67 0x66 tt ss ss ss ss (payload)
    pub fn data_block(mut self, data_type: u8, payload: &[u8]) -> Self {
        self.commands.extend_from_slice(&[0x67, 0x66, data_type]);
        self.commands
            .extend_from_slice(&(payload.len() as u32).to_le_bytes());
        self.commands.extend_from_slice(payload);
        self
    }

    /// 0xC0 aaaa dd
    pub fn pcm_write(mut self, addr: u16, value: u8) -> Self {
        self.commands.push(0xC0);
        self.commands.extend_from_slice(&addr.to_le_bytes());
        self.commands.push(value);
        self
    }

    /// Append bytes verbatim, e.g. an unsupported opcode
    pub fn raw(mut self, bytes: &[u8]) -> Self {
        self.commands.extend_from_slice(bytes);
        self
    }

    pub fn build_vec(self) -> Vec<u8> {
        let mut data = self.header;
        data.extend_from_slice(&self.commands);
        data
    }

    pub fn build_bytes(self) -> Bytes {
        Bytes::from(self.build_vec())
    }
}

/// Ready-made streams for common scenarios
pub struct StreamGenerators;

impl StreamGenerators {
    /// A few register writes separated by a frame-length wait
    pub fn simple_song() -> VgmStreamBuilder {
        VgmStreamBuilder::new()
            .ym2151_write(0x08, 0x00)
            .wait_samples(735)
            .short_wait(0x0F)
            .ym2151_write(0x28, 0x4A)
            .wait_samples(44100)
            .ym2151_write(0x08, 0x78)
    }

    /// Sample data block and PCM writes between register writes
    pub fn with_pcm() -> VgmStreamBuilder {
        VgmStreamBuilder::new()
            .data_block(0x00, &[0x54, 0x61, 0x99, 0x67, 0x00])
            .ym2151_write(0x01, 0x02)
            .pcm_write(0x1234, 0x80)
            .pcm_write(0x1235, 0x7F)
            .ym2151_write(0x03, 0x04)
    }
}
