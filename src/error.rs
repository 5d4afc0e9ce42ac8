//! Error types for deck generation and card layout.

use std::path::PathBuf;

use thiserror::Error;

/// Coarse classification of every [`DobbleError`].
///
/// None of these are transient: the same inputs against the same tables
/// always fail the same way, so callers should never retry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidArgument,
    NotFound,
    Malformed,
    Io,
}

#[derive(Error, Debug)]
pub enum DobbleError {
    /// Order that is not a prime power, value outside its numeric range,
    /// rotation outside [0, 360), too few symbol names.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Packing family name not present in the registry.
    #[error("invalid packing type: '{0}' is not supported")]
    UnsupportedFamily(String),

    /// No precomputed packing for a circle count, or a symbol asset is absent.
    #[error("not found: {0}")]
    NotFound(String),

    /// A packing table exists but one of its entries cannot be used.
    #[error("malformed entry in {}:{line}: {reason}", .path.display())]
    Malformed {
        path: PathBuf,
        line: usize,
        reason: String,
    },

    /// A packing answered a lookup for one circle count with another.
    #[error("'{family}' packing for {expected} circles has {found} centers")]
    CircleCount {
        family: String,
        expected: usize,
        found: usize,
    },

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    /// Symbol image exists but could not be decoded.
    #[error("image error: {0}")]
    Image(#[from] image::ImageError),
}

impl DobbleError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            DobbleError::InvalidArgument(_) | DobbleError::UnsupportedFamily(_) => {
                ErrorKind::InvalidArgument
            }
            DobbleError::NotFound(_) => ErrorKind::NotFound,
            DobbleError::Malformed { .. }
            | DobbleError::CircleCount { .. }
            | DobbleError::Image(_) => ErrorKind::Malformed,
            DobbleError::Io(_) => ErrorKind::Io,
        }
    }

    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        DobbleError::InvalidArgument(msg.into())
    }

    pub(crate) fn not_found(msg: impl Into<String>) -> Self {
        DobbleError::NotFound(msg.into())
    }
}

pub type DobbleResult<T> = Result<T, DobbleError>;
