//! Collaborators the gesture engine talks to: the photo store that owns the
//! library on disk and the capture device that produces stills to triage.

mod capture;
mod entry;
mod error;
mod favorites;
mod store;

pub use capture::{is_image_path, CameraFacing, CaptureDevice, FolderCaptureDevice};
pub use entry::PhotoEntry;
pub use error::{CaptureError, StorageError};
pub use favorites::FavoritesIndex;
pub use store::{FsPhotoStore, PhotoStore, FAVORITES_FILE, STORED_EXTENSION};

pub type Result<T, E = StorageError> = std::result::Result<T, E>;
