use std::fmt;
use thiserror::Error;

/// Error type for VGM tracing and hex dumping
///
/// Every variant is fatal for the current pass: the decoder has no resync logic,
/// so the first error ends the trace. Each error carries enough context (byte,
/// offset, path) to report where the pass stopped.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TraceError {
    // ========== I/O ERRORS (1000-1099) ==========
    /// File not found at the specified path
    #[error("File not found: {path}")]
    FileNotFound {
        path: String,
        io_kind: Option<std::io::ErrorKind>,
    },

    /// Error reading file contents
    #[error("Failed to read file {path}: {reason}")]
    FileReadError { path: String, reason: String },

    /// Permission denied when accessing file
    #[error("Permission denied accessing file: {path}")]
    PermissionDenied { path: String },

    /// Error writing output
    #[error("Failed to write output: {reason}")]
    WriteError { reason: String },

    /// Gzip stream could not be inflated
    #[error("Failed to decompress gzip data: {reason}")]
    DecompressionFailed { reason: String },

    // ========== CONFIGURATION AND LIMIT ERRORS (2000-2099) ==========
    /// Decoder configuration is unusable
    #[error("Invalid decoder configuration for {field}: {reason}")]
    InvalidConfig { field: String, reason: String },

    /// Data size exceeds configured limits
    #[error("Data size exceeds limit for {field}: {size} bytes (limit: {limit})")]
    DataSizeExceedsLimit {
        field: String,
        size: usize,
        limit: usize,
    },

    // ========== DECODE ERRORS (3000-3099) ==========
    /// Top-level byte outside the recognized opcode set
    #[error("Unknown command opcode 0x{opcode:02X} at offset {offset}")]
    UnknownCommand { opcode: u8, offset: u64 },

    /// Data block command without the 0x66 compatibility marker
    #[error("Malformed data block header at offset {offset}: expected 0x66, found 0x{found:02X}")]
    MalformedBlockHeader { found: u8, offset: u64 },

    // ========== INTERNAL ERRORS (4000-4099) ==========
    /// State code with no matching decoder state
    #[error("Unknown decoder state code {state}")]
    UnknownState { state: u8 },

    // ========== HEX DUMP ERRORS (5000-5099) ==========
    /// Input ended in the middle of a 16-bit word
    #[error("Truncated 16-bit word at offset {offset}: input has an odd number of bytes")]
    TruncatedWord { offset: usize },
}

impl TraceError {
    /// Get the error code for machine-readable processing
    pub fn code(&self) -> u16 {
        match self {
            // I/O Errors (1000-1099)
            Self::FileNotFound { .. } => 1001,
            Self::FileReadError { .. } => 1002,
            Self::PermissionDenied { .. } => 1003,
            Self::WriteError { .. } => 1004,
            Self::DecompressionFailed { .. } => 1005,

            // Configuration and Limit Errors (2000-2099)
            Self::InvalidConfig { .. } => 2001,
            Self::DataSizeExceedsLimit { .. } => 2002,

            // Decode Errors (3000-3099)
            Self::UnknownCommand { .. } => 3001,
            Self::MalformedBlockHeader { .. } => 3002,

            // Internal Errors (4000-4099)
            Self::UnknownState { .. } => 4001,

            // Hex Dump Errors (5000-5099)
            Self::TruncatedWord { .. } => 5001,
        }
    }

    /// Get the error category for grouping related errors
    pub fn category(&self) -> ErrorCategory {
        match self.code() {
            1000..=1099 => ErrorCategory::IO,
            2000..=2099 => ErrorCategory::Configuration,
            3000..=3099 => ErrorCategory::Decode,
            4000..=4099 => ErrorCategory::Internal,
            5000..=5099 => ErrorCategory::HexDump,
            _ => ErrorCategory::Unknown,
        }
    }

    /// Line printed on the trace output when this error ends a pass.
    ///
    /// Only unknown commands and unknown states have one; everything else is
    /// reported on stderr alone.
    pub fn trace_line(&self) -> Option<String> {
        match self {
            Self::UnknownCommand { opcode, .. } => Some(format!("Unknown code: {:02x}", opcode)),
            Self::UnknownState { state } => Some(format!("Unknown state: {}", state)),
            _ => None,
        }
    }

    /// Get suggested action for handling this error
    pub fn suggested_action(&self) -> &'static str {
        match self {
            Self::FileNotFound { .. } => "Check file path and ensure file exists",
            Self::PermissionDenied { .. } => "Check file permissions and user access rights",
            Self::UnknownCommand { .. } => {
                "Only wait, YM2151 write, data block and PCM write commands are traced"
            },
            Self::MalformedBlockHeader { .. } => "File appears to be corrupted or truncated",
            Self::DataSizeExceedsLimit { .. } => "Raise the input size limit or split the file",
            Self::TruncatedWord { .. } => "Pad the input to an even number of bytes",
            _ => "Check file integrity and tool arguments",
        }
    }
}

/// Error categories for grouping related error types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    IO,
    Configuration,
    Decode,
    Internal,
    HexDump,
    Unknown,
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IO => write!(f, "I/O"),
            Self::Configuration => write!(f, "Configuration"),
            Self::Decode => write!(f, "Decode"),
            Self::Internal => write!(f, "Internal"),
            Self::HexDump => write!(f, "Hex Dump"),
            Self::Unknown => write!(f, "Unknown"),
        }
    }
}

/// Result type alias for trace operations
pub type TraceResult<T> = Result<T, TraceError>;

/// Bare I/O errors only come from writing output; reads map their own errors
/// with the path attached.
impl From<std::io::Error> for TraceError {
    fn from(err: std::io::Error) -> Self {
        TraceError::WriteError {
            reason: err.to_string(),
        }
    }
}
