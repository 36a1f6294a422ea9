use crate::errors::{TraceError, TraceResult};

/// Configuration for the trace layout, wait reporting and input limits
///
/// The defaults reproduce the classic `vgm2txt` output exactly: a 128-byte hex
/// dump in rows of 16, wait reports only past 1000 accumulated cycles, and no
/// PCM or data block lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecoderConfig {
    /// Number of leading bytes dumped as raw hex before command decoding starts
    pub header_len: u64,

    /// Hex tokens per row in the header dump
    pub row_width: u64,

    /// Accumulated wait must exceed this before a wait report is emitted
    pub wait_flush_threshold: u32,

    /// Added to the accumulated wait before dividing
    pub wait_bias: u32,

    /// Divisor applied to the biased wait in a wait report
    pub wait_divisor: u32,

    /// Emit a line with the size of every data block skipped
    pub trace_data_blocks: bool,

    /// Emit a line for every PCM write instead of discarding it silently
    pub trace_pcm_writes: bool,

    /// Maximum input size accepted before decoding (bytes)
    pub max_input_size: usize,
}

impl Default for DecoderConfig {
    fn default() -> Self {
        Self {
            header_len: 0x80,
            row_width: 0x10,
            wait_flush_threshold: 1000,
            wait_bias: 100,
            wait_divisor: 7000,
            trace_data_blocks: false,
            trace_pcm_writes: false,
            max_input_size: 64 * 1024 * 1024, // 64MB
        }
    }
}

impl DecoderConfig {
    /// Default layout with every optional trace line enabled
    pub fn verbose() -> Self {
        Self {
            trace_data_blocks: true,
            trace_pcm_writes: true,
            ..Self::default()
        }
    }

    /// Check that the layout and wait constants are usable
    pub fn validate(&self) -> TraceResult<()> {
        if self.row_width == 0 {
            return Err(TraceError::InvalidConfig {
                field: "row_width".to_string(),
                reason: "must be at least 1".to_string(),
            });
        }

        if self.wait_divisor == 0 {
            return Err(TraceError::InvalidConfig {
                field: "wait_divisor".to_string(),
                reason: "must be non-zero".to_string(),
            });
        }

        Ok(())
    }

    /// Check if an input of `size` bytes may be decoded
    pub fn check_input_size(&self, size: usize) -> TraceResult<()> {
        if size > self.max_input_size {
            return Err(TraceError::DataSizeExceedsLimit {
                field: "input_size".to_string(),
                size,
                limit: self.max_input_size,
            });
        }
        Ok(())
    }

    /// Wait report for an accumulated wait, or `None` if it stays under the threshold
    pub fn wait_report(&self, wait: u32) -> Option<u32> {
        if wait > self.wait_flush_threshold {
            Some(wait.saturating_add(self.wait_bias) / self.wait_divisor)
        } else {
            None
        }
    }
}
