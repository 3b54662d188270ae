use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum PackError {
    #[error("Invalid container dimensions: {width}x{height} (both must be positive and finite)")]
    InvalidContainer { width: f64, height: f64 },
    #[error("Invalid block #{index}: {width}x{height} (both must be positive and finite)")]
    InvalidBlock { index: usize, width: f64, height: f64 },
    #[error("Could not place all blocks into the container ({placed} of {total} placed)")]
    PackingIncomplete { placed: usize, total: usize },
}

/// Coarse classification of [`PackError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A precondition on the container or a block was violated; nothing was packed.
    InvalidInput,
    /// At least one block found no free region under either orientation test.
    PackingIncomplete,
}

impl PackError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            PackError::InvalidContainer { .. } | PackError::InvalidBlock { .. } => {
                ErrorKind::InvalidInput
            }
            PackError::PackingIncomplete { .. } => ErrorKind::PackingIncomplete,
        }
    }
}

pub type Result<T> = std::result::Result<T, PackError>;
