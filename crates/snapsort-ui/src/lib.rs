//! Swipe transitions and the two screens built on them.
//!
//! [`SwipeAnimator`] owns the displacement of one swipeable element and turns
//! released gestures into fly-off, spring-back and entry animations.
//! [`TriageSession`] and [`GallerySession`] bind it to the photo library and
//! talk to the rest of the app through commands and events.

use std::cell::RefCell;
use std::rc::Rc;

mod animator;
mod config;
mod cursor;
mod gallery;
mod navigation;
mod triage;

pub use animator::{AnimatorPhase, FeedbackSubscription, SwipeAnimator, SwipeCommit};
pub use config::SwipeConfig;
pub use cursor::NavigationCursor;
pub use gallery::{GalleryCommand, GalleryEvent, GallerySession};
pub use navigation::{NavigationStack, Navigator, Route};
pub use triage::{TriageCommand, TriageEvent, TriageSession, TriageState};

use snapsort_library::{CaptureDevice, PhotoStore};

pub type SharedPhotoStore = Rc<RefCell<dyn PhotoStore>>;
pub type SharedCaptureDevice = Rc<RefCell<dyn CaptureDevice>>;
pub type SharedNavigator = Rc<RefCell<dyn Navigator>>;
