use crate::decoder_config::DecoderConfig;
use crate::errors::{TraceError, TraceResult};
use bytes::Bytes;
use flate2::read::GzDecoder;
use std::io::Read;
use std::path::Path;

/// Gzip magic bytes (RFC 1952)
pub const GZIP_MAGIC: [u8; 2] = [0x1f, 0x8b];

/// Detect if data is gzipped by checking magic bytes
pub fn is_gzipped(data: &[u8]) -> bool {
    data.len() >= 2 && data[0..2] == GZIP_MAGIC
}

/// Decompress gzipped data, inflating at most `limit` bytes.
///
/// Inflation stops one byte past the limit, so an oversized stream is
/// rejected without being expanded in full.
pub fn decompress_gzip(compressed_data: &[u8], limit: usize) -> TraceResult<Vec<u8>> {
    let cap = (limit as u64).saturating_add(1);
    let mut decoder = GzDecoder::new(compressed_data).take(cap);
    let mut decompressed = Vec::new();

    decoder
        .read_to_end(&mut decompressed)
        .map_err(|e| TraceError::DecompressionFailed {
            reason: e.to_string(),
        })?;

    if decompressed.len() > limit {
        return Err(TraceError::DataSizeExceedsLimit {
            field: "decompressed_size".to_string(),
            size: decompressed.len(),
            limit,
        });
    }

    Ok(decompressed)
}

fn io_error_for(path: &Path, e: std::io::Error) -> TraceError {
    match e.kind() {
        std::io::ErrorKind::NotFound => TraceError::FileNotFound {
            path: path.display().to_string(),
            io_kind: Some(e.kind()),
        },
        std::io::ErrorKind::PermissionDenied => TraceError::PermissionDenied {
            path: path.display().to_string(),
        },
        _ => TraceError::FileReadError {
            path: path.display().to_string(),
            reason: e.to_string(),
        },
    }
}

/// Read a whole file, mapping I/O failures to path-carrying errors
pub fn read_file(path: &Path) -> TraceResult<Vec<u8>> {
    std::fs::read(path).map_err(|e| io_error_for(path, e))
}

/// Load a VGM input for tracing.
///
/// `.vgz` files are inflated transparently; anything else is traced as-is,
/// without looking at the VGM header.
pub fn load_input(path: &Path, config: &DecoderConfig) -> TraceResult<Bytes> {
    let on_disk = std::fs::metadata(path).map_err(|e| io_error_for(path, e))?.len();
    config.check_input_size(usize::try_from(on_disk).unwrap_or(usize::MAX))?;

    let file_data = read_file(path)?;

    let data = if is_gzipped(&file_data) {
        tracing::debug!(path = %path.display(), "inflating gzip input");
        decompress_gzip(&file_data, config.max_input_size)?
    } else {
        file_data
    };

    config.check_input_size(data.len())?;
    tracing::info!(path = %path.display(), size = data.len(), "loaded input");

    Ok(Bytes::from(data))
}
