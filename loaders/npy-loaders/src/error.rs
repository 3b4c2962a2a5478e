use ndarray_npy::ReadNpyError;
use std::io;
use std::path::PathBuf;

/// Errors that can occur while loading training or validation data.
///
/// None of these are retried; the failing call returns no partial data.
#[derive(Debug, thiserror::Error)]
pub enum LoaderError {
    /// The array file is missing or could not be opened
    #[error("cannot open {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// The file is not a valid `.npy` file for the requested element type
    #[error("cannot decode {}: {source}", .path.display())]
    Format {
        path: PathBuf,
        #[source]
        source: ReadNpyError,
    },
    /// The file holds a zero-dimensional array, which has no sample axis
    #[error("{} holds a scalar, expected at least one axis", .path.display())]
    ScalarArray { path: PathBuf },
    /// Batch size must be at least 1
    #[error("batch size must be greater than zero")]
    InvalidBatchSize,
    /// Feature and label arrays disagree on the number of samples
    #[error("features have {features} samples but labels have {labels}")]
    ShapeMismatch { features: usize, labels: usize },
    /// Fewer samples than one batch, so there is nothing to split into
    #[error("{samples} samples cannot fill a single batch of {batch_size}")]
    DegenerateBatching { samples: usize, batch_size: usize },
}

impl LoaderError {
    /// Whether the error was caused by an array file that does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, LoaderError::Io { source, .. } if source.kind() == io::ErrorKind::NotFound)
    }
}
