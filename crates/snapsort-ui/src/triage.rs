//! Photo triage: swipe a fresh capture right to save it, left to discard it.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::path::PathBuf;
use std::rc::Rc;

use snapsort_core::RuntimeHandle;
use snapsort_foundation::{PointerEvent, SwipeFeedback};
use snapsort_library::{CameraFacing, CaptureError, PhotoEntry, StorageError};

use crate::{
    Route, SharedCaptureDevice, SharedNavigator, SharedPhotoStore, SwipeAnimator, SwipeCommit,
    SwipeConfig,
};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TriageState {
    CaptureReady,
    Capturing,
    Reviewing { capture: PathBuf },
    Saving { capture: PathBuf },
    Saved { entry: PhotoEntry },
}

#[derive(Clone, Debug)]
pub enum TriageCommand {
    Capture,
    Pointer(PointerEvent),
    TakeAnother,
    OpenLibrary,
    ToggleFacing,
}

#[derive(Debug)]
pub enum TriageEvent {
    Captured { capture: PathBuf },
    CaptureFailed(CaptureError),
    Saved(PhotoEntry),
    /// The capture is kept so the user can swipe again.
    SaveFailed {
        capture: PathBuf,
        error: StorageError,
    },
    Discarded { capture: PathBuf },
    FacingChanged(CameraFacing),
}

enum Settled {
    Capture(Result<PathBuf, CaptureError>),
    Save {
        capture: PathBuf,
        result: Result<PhotoEntry, StorageError>,
    },
}

/// Binds a [`SwipeAnimator`] to one captured photo at a time.
///
/// Commands go in through [`dispatch`](Self::dispatch). Device and storage
/// work runs as posted runtime tasks; [`poll`](Self::poll) folds their
/// results and finished swipe animations into state changes and events.
pub struct TriageSession {
    runtime: RuntimeHandle,
    store: SharedPhotoStore,
    camera: SharedCaptureDevice,
    navigator: SharedNavigator,
    animator: SwipeAnimator,
    state: TriageState,
    settled: Rc<RefCell<VecDeque<Settled>>>,
    events: Vec<TriageEvent>,
}

impl TriageSession {
    pub fn new(
        config: SwipeConfig,
        runtime: RuntimeHandle,
        store: SharedPhotoStore,
        camera: SharedCaptureDevice,
        navigator: SharedNavigator,
    ) -> Self {
        let animator = SwipeAnimator::new(config, runtime.clone());
        animator.set_disabled(true);
        Self {
            runtime,
            store,
            camera,
            navigator,
            animator,
            state: TriageState::CaptureReady,
            settled: Rc::new(RefCell::new(VecDeque::new())),
            events: Vec::new(),
        }
    }

    pub fn state(&self) -> &TriageState {
        &self.state
    }

    pub fn animator(&self) -> &SwipeAnimator {
        &self.animator
    }

    pub fn feedback(&self) -> SwipeFeedback {
        self.animator.feedback()
    }

    /// True while a capture or save is in flight.
    pub fn is_busy(&self) -> bool {
        matches!(self.state, TriageState::Capturing | TriageState::Saving { .. })
    }

    pub fn dispatch(&mut self, command: TriageCommand) {
        match command {
            TriageCommand::Capture => self.capture(),
            TriageCommand::Pointer(event) => {
                self.animator.on_pointer_event(&event);
            }
            TriageCommand::TakeAnother => {
                if matches!(self.state, TriageState::Saved { .. }) {
                    self.enter(TriageState::CaptureReady);
                }
            }
            TriageCommand::OpenLibrary => {
                self.navigator.borrow_mut().go_to(Route::Library);
            }
            TriageCommand::ToggleFacing => {
                let facing = self.camera.borrow_mut().toggle_facing();
                self.events.push(TriageEvent::FacingChanged(facing));
            }
        }
    }

    /// Apply settled tasks and finished swipes; returns the events since the
    /// last poll.
    pub fn poll(&mut self) -> Vec<TriageEvent> {
        loop {
            let next = self.settled.borrow_mut().pop_front();
            let Some(settled) = next else {
                break;
            };
            self.apply_settled(settled);
        }
        for commit in self.animator.take_completions() {
            self.apply_commit(commit);
        }
        std::mem::take(&mut self.events)
    }

    fn enter(&mut self, state: TriageState) {
        let reviewing = matches!(state, TriageState::Reviewing { .. });
        if reviewing {
            self.animator.reset();
        }
        self.animator.set_disabled(!reviewing);
        self.state = state;
    }

    fn capture(&mut self) {
        if self.state != TriageState::CaptureReady {
            log::debug!("capture ignored while {:?}", self.state);
            return;
        }
        self.enter(TriageState::Capturing);

        let camera = self.camera.clone();
        let settled = self.settled.clone();
        self.runtime.post_task(move || {
            let result = camera.borrow_mut().take_still();
            settled.borrow_mut().push_back(Settled::Capture(result));
        });
    }

    fn apply_settled(&mut self, settled: Settled) {
        match settled {
            Settled::Capture(Ok(capture)) => {
                log::debug!("captured {}", capture.display());
                self.enter(TriageState::Reviewing {
                    capture: capture.clone(),
                });
                self.events.push(TriageEvent::Captured { capture });
            }
            Settled::Capture(Err(error)) => {
                log::warn!("capture failed: {error}");
                self.enter(TriageState::CaptureReady);
                self.events.push(TriageEvent::CaptureFailed(error));
            }
            Settled::Save {
                result: Ok(entry), ..
            } => {
                log::info!("saved photo {}", entry.id);
                self.enter(TriageState::Saved {
                    entry: entry.clone(),
                });
                self.events.push(TriageEvent::Saved(entry));
            }
            Settled::Save {
                capture,
                result: Err(error),
            } => {
                log::warn!("saving {} failed: {error}", capture.display());
                self.enter(TriageState::Reviewing {
                    capture: capture.clone(),
                });
                self.events.push(TriageEvent::SaveFailed { capture, error });
            }
        }
    }

    fn apply_commit(&mut self, commit: SwipeCommit) {
        let TriageState::Reviewing { capture } = &self.state else {
            log::warn!("swipe {commit:?} finished outside review; ignored");
            return;
        };
        let capture = capture.clone();

        match commit {
            SwipeCommit::Forward => {
                self.enter(TriageState::Saving {
                    capture: capture.clone(),
                });
                let store = self.store.clone();
                let settled = self.settled.clone();
                self.runtime.post_task(move || {
                    let result = store.borrow_mut().accept(&capture);
                    settled
                        .borrow_mut()
                        .push_back(Settled::Save { capture, result });
                });
            }
            SwipeCommit::Backward => {
                log::debug!("discarded {}", capture.display());
                self.enter(TriageState::CaptureReady);
                self.events.push(TriageEvent::Discarded { capture });
            }
        }
    }
}
