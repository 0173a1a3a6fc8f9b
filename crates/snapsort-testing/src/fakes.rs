//! In-memory stand-ins for the collaborators the sessions talk to.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::io;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use snapsort_foundation::{HapticFeedback, HapticPulse};
use snapsort_library::{
    CameraFacing, CaptureDevice, CaptureError, PhotoEntry, PhotoStore, StorageError,
};
use snapsort_ui::{NavigationStack, Navigator, Route};

/// First id handed out by [`MemoryPhotoStore`]; ids count up from here.
const FIRST_MILLIS: i64 = 1_700_000_000_000;

fn injected_failure(path: &Path) -> StorageError {
    StorageError::Io {
        path: path.to_path_buf(),
        source: io::Error::new(io::ErrorKind::Other, "injected failure"),
    }
}

/// Photo store kept in memory, with switchable failures.
#[derive(Debug, Default)]
pub struct MemoryPhotoStore {
    entries: Vec<PhotoEntry>,
    next_millis: i64,
    fail_accept: bool,
    fail_reject: bool,
    accepted: Vec<PathBuf>,
    rejected: Vec<String>,
}

impl MemoryPhotoStore {
    pub fn new() -> Self {
        Self {
            next_millis: FIRST_MILLIS,
            ..Self::default()
        }
    }

    /// Store pre-filled with `count` photos; the returned ids run newest first.
    pub fn with_photos(count: usize) -> (Self, Vec<String>) {
        let mut store = Self::new();
        for i in 0..count {
            store.insert(PathBuf::from(format!("seed-{i}.jpg")));
        }
        let ids = store.sorted().into_iter().map(|entry| entry.id).collect();
        (store, ids)
    }

    pub fn set_fail_accept(&mut self, fail: bool) {
        self.fail_accept = fail;
    }

    pub fn set_fail_reject(&mut self, fail: bool) {
        self.fail_reject = fail;
    }

    /// Sources passed to successful `accept` calls.
    pub fn accepted(&self) -> &[PathBuf] {
        &self.accepted
    }

    /// Ids passed to `reject`, including failed calls.
    pub fn rejected(&self) -> &[String] {
        &self.rejected
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn insert(&mut self, source: PathBuf) -> PhotoEntry {
        let millis = self.next_millis;
        self.next_millis += 1;
        let entry = PhotoEntry {
            id: millis.to_string(),
            storage_uri: PathBuf::from(format!("memory/{millis}.jpg")),
            created_at: DateTime::<Utc>::from_timestamp_millis(millis).unwrap_or_default(),
            is_favorite: false,
        };
        log::trace!("memory store accepted {}", source.display());
        self.entries.push(entry.clone());
        entry
    }

    fn sorted(&self) -> Vec<PhotoEntry> {
        let mut entries = self.entries.clone();
        entries.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        entries
    }
}

impl PhotoStore for MemoryPhotoStore {
    fn accept(&mut self, source: &Path) -> Result<PhotoEntry, StorageError> {
        if self.fail_accept {
            return Err(injected_failure(source));
        }
        self.accepted.push(source.to_path_buf());
        Ok(self.insert(source.to_path_buf()))
    }

    fn reject(&mut self, id: &str) -> Result<(), StorageError> {
        self.rejected.push(id.to_owned());
        if self.fail_reject {
            return Err(injected_failure(Path::new(id)));
        }
        self.entries.retain(|entry| entry.id != id);
        Ok(())
    }

    fn toggle_favorite(&mut self, id: &str) -> Result<bool, StorageError> {
        let entry = self
            .entries
            .iter_mut()
            .find(|entry| entry.id == id)
            .ok_or_else(|| StorageError::NotFound { id: id.to_owned() })?;
        entry.is_favorite = !entry.is_favorite;
        Ok(entry.is_favorite)
    }

    fn list(&mut self) -> Result<Vec<PhotoEntry>, StorageError> {
        Ok(self.sorted())
    }
}

/// Camera that replays a script of stills and failures.
#[derive(Debug, Default)]
pub struct ScriptedCamera {
    script: VecDeque<Result<PathBuf, CaptureError>>,
    facing: CameraFacing,
    takes: usize,
}

impl ScriptedCamera {
    pub fn new() -> Self {
        Self::default()
    }

    /// Camera that yields `count` stills named `still-<n>.jpg`.
    pub fn with_stills(count: usize) -> Self {
        let mut camera = Self::new();
        for i in 0..count {
            camera.push_still(format!("still-{i}.jpg"));
        }
        camera
    }

    pub fn push_still(&mut self, path: impl Into<PathBuf>) {
        self.script.push_back(Ok(path.into()));
    }

    pub fn push_failure(&mut self, error: CaptureError) {
        self.script.push_back(Err(error));
    }

    /// Number of `take_still` calls so far.
    pub fn takes(&self) -> usize {
        self.takes
    }
}

impl CaptureDevice for ScriptedCamera {
    fn take_still(&mut self) -> Result<PathBuf, CaptureError> {
        self.takes += 1;
        self.script.pop_front().unwrap_or(Err(CaptureError::Exhausted))
    }

    fn facing(&self) -> CameraFacing {
        self.facing
    }

    fn set_facing(&mut self, facing: CameraFacing) {
        self.facing = facing;
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NavigationCall {
    GoTo(Route),
    ReplacePhoto(String),
    Back,
}

/// Navigation stack that also records every call made on it.
#[derive(Debug)]
pub struct RecordingNavigator {
    stack: NavigationStack,
    calls: Vec<NavigationCall>,
}

impl RecordingNavigator {
    pub fn new(root: Route) -> Self {
        Self {
            stack: NavigationStack::new(root),
            calls: Vec::new(),
        }
    }

    pub fn calls(&self) -> &[NavigationCall] {
        &self.calls
    }

    pub fn stack(&self) -> &NavigationStack {
        &self.stack
    }
}

impl Default for RecordingNavigator {
    fn default() -> Self {
        Self::new(Route::Capture)
    }
}

impl Navigator for RecordingNavigator {
    fn go_to(&mut self, route: Route) {
        self.calls.push(NavigationCall::GoTo(route.clone()));
        self.stack.go_to(route);
    }

    fn replace_photo(&mut self, id: &str) {
        self.calls.push(NavigationCall::ReplacePhoto(id.to_owned()));
        self.stack.replace_photo(id);
    }

    fn back(&mut self) {
        self.calls.push(NavigationCall::Back);
        self.stack.back();
    }

    fn current(&self) -> Option<&Route> {
        self.stack.current()
    }
}

/// Haptics sink that remembers every pulse.
#[derive(Debug, Default)]
pub struct RecordingHaptics {
    pulses: RefCell<Vec<HapticPulse>>,
}

impl RecordingHaptics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pulses(&self) -> Vec<HapticPulse> {
        self.pulses.borrow().clone()
    }
}

impl HapticFeedback for RecordingHaptics {
    fn pulse(&self, pulse: HapticPulse) {
        self.pulses.borrow_mut().push(pulse);
    }
}
