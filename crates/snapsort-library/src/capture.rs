//! Capture device abstraction: the producer of stills to triage.

use std::collections::VecDeque;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::CaptureError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum CameraFacing {
    #[default]
    Back,
    Front,
}

impl CameraFacing {
    pub fn toggle(self) -> Self {
        match self {
            CameraFacing::Back => CameraFacing::Front,
            CameraFacing::Front => CameraFacing::Back,
        }
    }
}

pub trait CaptureDevice {
    /// Take one still and return the path of the temporary image file.
    fn take_still(&mut self) -> Result<PathBuf, CaptureError>;

    fn facing(&self) -> CameraFacing;

    fn set_facing(&mut self, facing: CameraFacing);

    fn toggle_facing(&mut self) -> CameraFacing {
        let facing = self.facing().toggle();
        self.set_facing(facing);
        facing
    }
}

/// True for the extensions the library stores and lists.
pub fn is_image_path(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| matches!(ext.to_ascii_lowercase().as_str(), "jpg" | "jpeg" | "png"))
        .unwrap_or(false)
}

/// Yields the images of an inbox directory one at a time, in name order.
pub struct FolderCaptureDevice {
    inbox: PathBuf,
    pending: VecDeque<PathBuf>,
    facing: CameraFacing,
}

impl FolderCaptureDevice {
    pub fn open(inbox: impl Into<PathBuf>) -> Result<Self, CaptureError> {
        let inbox = inbox.into();
        let read_dir = fs::read_dir(&inbox).map_err(|err| match err.kind() {
            ErrorKind::NotFound => CaptureError::DeviceUnavailable,
            ErrorKind::PermissionDenied => CaptureError::PermissionRevoked,
            _ => CaptureError::Io(err),
        })?;

        let mut stills = Vec::new();
        for entry in read_dir {
            let path = entry?.path();
            if path.is_file() && is_image_path(&path) {
                stills.push(path);
            }
        }
        stills.sort();
        log::info!("{} stills waiting in {}", stills.len(), inbox.display());

        Ok(Self {
            inbox,
            pending: stills.into(),
            facing: CameraFacing::default(),
        })
    }

    pub fn inbox(&self) -> &Path {
        &self.inbox
    }

    pub fn remaining(&self) -> usize {
        self.pending.len()
    }
}

impl CaptureDevice for FolderCaptureDevice {
    fn take_still(&mut self) -> Result<PathBuf, CaptureError> {
        let still = self.pending.pop_front().ok_or(CaptureError::Exhausted)?;
        if !still.is_file() {
            // Removed from the inbox after it was listed.
            return Err(CaptureError::DeviceUnavailable);
        }
        Ok(still)
    }

    fn facing(&self) -> CameraFacing {
        self.facing
    }

    fn set_facing(&mut self, facing: CameraFacing) {
        self.facing = facing;
    }
}
