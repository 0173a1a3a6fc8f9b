//! Gallery navigation: a filmstrip over the library, newest first.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use snapsort_core::RuntimeHandle;
use snapsort_foundation::{HapticFeedback, HapticPulse, NoopHaptics, PointerEvent, SwipeFeedback};
use snapsort_library::{PhotoEntry, StorageError};

use crate::{
    NavigationCursor, SharedNavigator, SharedPhotoStore, SwipeAnimator, SwipeCommit, SwipeConfig,
};

#[derive(Clone, Debug)]
pub enum GalleryCommand {
    Pointer(PointerEvent),
    ToggleFavorite,
    DeleteCurrent,
    Reload,
    ShowPhoto(String),
}

#[derive(Debug)]
pub enum GalleryEvent {
    CursorMoved {
        index: usize,
        size: usize,
        id: String,
    },
    FavoriteToggled {
        id: String,
        is_favorite: bool,
    },
    Deleted {
        id: String,
    },
    /// The store could not remove the file; the photo is dropped from the
    /// gallery regardless.
    DeleteFailed {
        id: String,
        error: StorageError,
    },
    StorageFailed(StorageError),
    /// Nothing left to show; the session has navigated back.
    Exhausted,
}

struct SettledDelete {
    id: String,
    result: Result<(), StorageError>,
}

pub struct GallerySession {
    runtime: RuntimeHandle,
    store: SharedPhotoStore,
    navigator: SharedNavigator,
    haptics: Rc<dyn HapticFeedback>,
    animator: SwipeAnimator,
    entries: Vec<PhotoEntry>,
    cursor: Option<NavigationCursor>,
    delete_in_flight: bool,
    settled: Rc<RefCell<VecDeque<SettledDelete>>>,
    events: Vec<GalleryEvent>,
}

impl GallerySession {
    /// Load the library and show `initial_id`, or the newest photo.
    pub fn open(
        config: SwipeConfig,
        runtime: RuntimeHandle,
        store: SharedPhotoStore,
        navigator: SharedNavigator,
        initial_id: Option<&str>,
    ) -> Result<Self, StorageError> {
        let entries = store.borrow_mut().list()?;
        let mut session = Self {
            animator: SwipeAnimator::new(config, runtime.clone()),
            runtime,
            store,
            navigator,
            haptics: Rc::new(NoopHaptics),
            entries: Vec::new(),
            cursor: None,
            delete_in_flight: false,
            settled: Rc::new(RefCell::new(VecDeque::new())),
            events: Vec::new(),
        };
        session.replace_entries(entries, initial_id);
        Ok(session)
    }

    /// Haptics for threshold crossings and favorites.
    pub fn with_haptics(mut self, haptics: Rc<dyn HapticFeedback>) -> Self {
        self.animator = self.animator.with_haptics(haptics.clone());
        self.haptics = haptics;
        self
    }

    pub fn animator(&self) -> &SwipeAnimator {
        &self.animator
    }

    pub fn feedback(&self) -> SwipeFeedback {
        self.animator.feedback()
    }

    pub fn cursor(&self) -> Option<NavigationCursor> {
        self.cursor
    }

    pub fn entries(&self) -> &[PhotoEntry] {
        &self.entries
    }

    pub fn current(&self) -> Option<&PhotoEntry> {
        self.cursor
            .and_then(|cursor| self.entries.get(cursor.current_index()))
    }

    pub fn is_exhausted(&self) -> bool {
        self.cursor.is_none()
    }

    pub fn counter_label(&self) -> String {
        self.cursor
            .map(|cursor| cursor.label())
            .unwrap_or_else(|| "0 / 0".to_owned())
    }

    pub fn dispatch(&mut self, command: GalleryCommand) {
        match command {
            GalleryCommand::Pointer(event) => {
                self.animator.on_pointer_event(&event);
            }
            GalleryCommand::ToggleFavorite => self.toggle_favorite(),
            GalleryCommand::DeleteCurrent => self.delete_current(),
            GalleryCommand::Reload => self.reload(),
            GalleryCommand::ShowPhoto(id) => self.show_photo(&id),
        }
    }

    /// Apply settled deletes and finished swipes; returns the events since
    /// the last poll.
    pub fn poll(&mut self) -> Vec<GalleryEvent> {
        loop {
            let next = self.settled.borrow_mut().pop_front();
            let Some(settled) = next else {
                break;
            };
            self.apply_delete(settled);
        }
        for commit in self.animator.take_completions() {
            self.apply_commit(commit);
        }
        std::mem::take(&mut self.events)
    }

    fn apply_commit(&mut self, commit: SwipeCommit) {
        let Some(mut cursor) = self.cursor else {
            return;
        };
        let moved = match commit {
            SwipeCommit::Forward => cursor.advance(),
            SwipeCommit::Backward => cursor.retreat(),
        };
        if !moved {
            log::warn!("swipe {commit:?} finished at the edge of the collection");
            self.animator.reset();
            return;
        }
        self.cursor = Some(cursor);

        // The new photo arrives from the side opposite to where the old one left.
        let convention = self.animator.config().convention;
        let exit = match commit {
            SwipeCommit::Forward => convention.forward(),
            SwipeCommit::Backward => convention.backward(),
        };
        self.animator.enter_from(exit.opposite());
        self.announce_cursor();
    }

    fn toggle_favorite(&mut self) {
        let Some(index) = self.cursor.map(|cursor| cursor.current_index()) else {
            return;
        };
        let id = self.entries[index].id.clone();
        let result = self.store.borrow_mut().toggle_favorite(&id);
        match result {
            Ok(is_favorite) => {
                self.entries[index].is_favorite = is_favorite;
                if is_favorite {
                    self.haptics.pulse(HapticPulse::FavoriteAdded);
                }
                self.events
                    .push(GalleryEvent::FavoriteToggled { id, is_favorite });
            }
            Err(error) => {
                log::warn!("toggling favorite on {id} failed: {error}");
                self.events.push(GalleryEvent::StorageFailed(error));
            }
        }
    }

    fn delete_current(&mut self) {
        if self.swipe_in_progress("delete") {
            return;
        }
        if self.delete_in_flight {
            log::debug!("delete ignored: another delete is in flight");
            return;
        }
        let Some(id) = self.current().map(|entry| entry.id.clone()) else {
            return;
        };
        self.delete_in_flight = true;
        self.animator.set_disabled(true);

        let store = self.store.clone();
        let settled = self.settled.clone();
        self.runtime.post_task(move || {
            let result = store.borrow_mut().reject(&id);
            settled.borrow_mut().push_back(SettledDelete { id, result });
        });
    }

    fn apply_delete(&mut self, settled: SettledDelete) {
        self.delete_in_flight = false;
        self.animator.set_disabled(false);

        let SettledDelete { id, result } = settled;
        match result {
            Ok(()) => self.events.push(GalleryEvent::Deleted { id: id.clone() }),
            Err(error) => {
                log::warn!("deleting {id} failed, dropping it from the gallery anyway: {error}");
                self.events.push(GalleryEvent::DeleteFailed {
                    id: id.clone(),
                    error,
                });
            }
        }

        let Some(position) = self.entries.iter().position(|entry| entry.id == id) else {
            return;
        };
        let current = self.cursor.map(|cursor| cursor.current_index());
        self.entries.remove(position);

        self.cursor = match self.cursor {
            Some(cursor) if current == Some(position) => cursor.after_removal(),
            Some(cursor) if current.is_some_and(|index| index > position) => {
                NavigationCursor::new(cursor.current_index() - 1, self.entries.len())
            }
            Some(cursor) => cursor.resized(self.entries.len()),
            None => None,
        };
        log::debug!("cursor re-resolved to {:?}", self.cursor);

        if self.cursor.is_some() {
            self.animator.reset();
            self.announce_cursor();
        } else {
            self.exhaust();
        }
    }

    fn reload(&mut self) {
        if self.swipe_in_progress("reload") {
            return;
        }
        let current_id = self.current().map(|entry| entry.id.clone());
        let result = self.store.borrow_mut().list();
        match result {
            Ok(entries) => self.replace_entries(entries, current_id.as_deref()),
            Err(error) => {
                log::warn!("reloading the gallery failed: {error}");
                self.events.push(GalleryEvent::StorageFailed(error));
            }
        }
    }

    fn show_photo(&mut self, id: &str) {
        if self.swipe_in_progress("show photo") {
            return;
        }
        let Some(index) = self.entries.iter().position(|entry| entry.id == id) else {
            log::warn!("photo {id} is not in the gallery");
            return;
        };
        self.cursor = NavigationCursor::new(index, self.entries.len());
        self.animator.reset();
        self.announce_cursor();
    }

    /// Cursor changes wait until the running swipe has been applied.
    fn swipe_in_progress(&self, command: &str) -> bool {
        if self.animator.is_idle() {
            return false;
        }
        log::debug!(
            "{command} ignored while the swipe is {:?}",
            self.animator.phase()
        );
        true
    }

    fn replace_entries(&mut self, entries: Vec<PhotoEntry>, keep_id: Option<&str>) {
        let previous_index = self.cursor.map(|cursor| cursor.current_index()).unwrap_or(0);
        let index = keep_id
            .and_then(|id| entries.iter().position(|entry| entry.id == id))
            .unwrap_or(previous_index);
        self.entries = entries;
        self.cursor = NavigationCursor::new(index, self.entries.len());

        if self.cursor.is_some() {
            self.animator.reset();
            self.announce_cursor();
        } else {
            self.exhaust();
        }
    }

    fn announce_cursor(&mut self) {
        let Some(cursor) = self.cursor else {
            return;
        };
        self.animator
            .set_bound(cursor.has_next(), cursor.has_previous());
        self.animator.set_disabled(self.delete_in_flight);

        let id = self.entries[cursor.current_index()].id.clone();
        self.navigator.borrow_mut().replace_photo(&id);
        self.events.push(GalleryEvent::CursorMoved {
            index: cursor.current_index(),
            size: cursor.collection_size(),
            id,
        });
    }

    fn exhaust(&mut self) {
        log::info!("gallery is empty; closing");
        self.animator.set_bound(false, false);
        self.animator.set_disabled(true);
        self.navigator.borrow_mut().back();
        self.events.push(GalleryEvent::Exhausted);
    }
}
