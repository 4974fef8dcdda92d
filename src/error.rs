use std::path::PathBuf;

use thiserror::Error;

/// Errors reported by the checked entry points.
///
/// The kernels in [`crate::algorithms`] never return these: they trust their
/// preconditions. Validation only happens at the public wrappers.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Error)]
pub enum FftError {
    /// The buffer does not hold `2 * N` scalars with `N` a power of two.
    #[error("invalid dimension: {len} scalars is not 2 * N for a power-of-two N")]
    InvalidDimension { len: usize },

    /// The window is not `2 * N` scalars with `N` a power of two, is larger than
    /// the input, or the input does not hold whole complex samples.
    #[error("invalid dimension: window of {window} scalars over an input of {input_len} scalars")]
    InvalidWindow { window: usize, input_len: usize },

    /// A caller-supplied buffer is too small for the requested operation.
    #[error("buffer size mismatch: expected at least {expected} scalars, got {actual}")]
    BufferSizeMismatch { expected: usize, actual: usize },
}

/// Errors reading or writing hex sample files.
#[derive(Debug, Error)]
pub enum FileError {
    #[error("failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{path} holds {found} samples, expected {expected}")]
    InvalidSize {
        path: PathBuf,
        expected: usize,
        found: usize,
    },

    #[error("line {line}: expected {width} hex digits, found `{text}`")]
    InvalidDatatype {
        line: usize,
        width: usize,
        text: String,
    },
}
