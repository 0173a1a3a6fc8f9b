use std::path::PathBuf;

use thiserror::Error;

/// Failures of the photo store.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("I/O error at {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("photo {id} not found")]
    NotFound { id: String },

    #[error("capture source {} is not a readable file", .path.display())]
    InvalidSource { path: PathBuf },

    #[error("favorites index is corrupt: {0}")]
    Index(#[from] serde_json::Error),
}

impl StorageError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        StorageError::Io {
            path: path.into(),
            source,
        }
    }
}

/// Failures of the capture device.
#[derive(Debug, Error)]
pub enum CaptureError {
    #[error("camera device is unavailable")]
    DeviceUnavailable,

    #[error("camera permission was revoked")]
    PermissionRevoked,

    #[error("no more stills to capture")]
    Exhausted,

    #[error("capture I/O error: {0}")]
    Io(#[from] std::io::Error),
}
