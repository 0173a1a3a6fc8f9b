//! Triage a folder of stills with a scripted swipe sequence, then walk the
//! resulting library.
//!
//! ```text
//! snapsort-demo --inbox ./shots --library ./library --swipes rlhr --walk nnfpd
//! ```

mod pump;
mod script;

use std::cell::{Cell, RefCell};
use std::path::PathBuf;
use std::rc::Rc;

use anyhow::{Context, Result};
use clap::Parser;
use snapsort_foundation::{HapticFeedback, HapticPulse, SwipeFeedback};
use snapsort_graphics::{Point, Size};
use snapsort_library::{CaptureError, FolderCaptureDevice, FsPhotoStore};
use snapsort_ui::{
    FeedbackSubscription, GalleryCommand, GalleryEvent, GallerySession, NavigationStack, Navigator,
    Route, SwipeAnimator, SwipeConfig, TriageCommand, TriageEvent, TriageSession,
};

use pump::FramePump;
use script::{GalleryStep, GestureScript, TriageStep};

#[derive(Parser, Debug)]
#[command(name = "snapsort-demo")]
#[command(about = "Swipe-triage a folder of photos into a library", long_about = None)]
struct Cli {
    /// Folder of captured stills, consumed in name order
    #[arg(long)]
    inbox: PathBuf,

    /// Library folder that saved photos are copied into
    #[arg(long)]
    library: PathBuf,

    /// Triage gestures: r = save, l = discard, h = hesitate then save
    #[arg(long, default_value = "rlr")]
    swipes: String,

    /// Gallery steps: n = next, p = previous, f = favorite, d = delete
    #[arg(long, default_value = "nfp")]
    walk: String,

    /// Viewport width in pixels; the height keeps a 9:16 portrait ratio
    #[arg(long, default_value_t = 1080.0)]
    viewport_width: f32,

    /// Pace frames against the wall clock instead of running flat out
    #[arg(long)]
    realtime: bool,
}

struct LogHaptics;

impl HapticFeedback for LogHaptics {
    fn pulse(&self, pulse: HapticPulse) {
        log::info!("haptic: {pulse:?}");
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    let cli = Cli::parse();
    let swipes = script::parse_triage(&cli.swipes).context("invalid --swipes")?;
    let walk = script::parse_gallery(&cli.walk).context("invalid --walk")?;
    let viewport = Size::new(cli.viewport_width, cli.viewport_width * 16.0 / 9.0);

    let store = FsPhotoStore::new(&cli.library);
    store
        .ensure_directory()
        .with_context(|| format!("cannot create library at {}", cli.library.display()))?;
    let store = Rc::new(RefCell::new(store));
    let camera = FolderCaptureDevice::open(&cli.inbox)
        .with_context(|| format!("cannot open inbox {}", cli.inbox.display()))?;
    let camera = Rc::new(RefCell::new(camera));
    let navigator = Rc::new(RefCell::new(NavigationStack::new(Route::Capture)));

    let mut pump = FramePump::new(cli.realtime);
    let mut gestures = GestureScript::new(Point::new(viewport.width / 2.0, viewport.height / 2.0));

    let mut triage = TriageSession::new(
        SwipeConfig::triage(viewport),
        pump.handle(),
        store.clone(),
        camera,
        navigator.clone(),
    );
    let (saved, discarded) = run_triage(&mut triage, &mut pump, &mut gestures, &swipes, viewport)?;
    log::info!("triage finished: {saved} saved, {discarded} discarded");

    triage.dispatch(TriageCommand::OpenLibrary);
    let mut gallery = GallerySession::open(
        SwipeConfig::navigation(viewport),
        pump.handle(),
        store,
        navigator.clone(),
        None,
    )
    .context("cannot list the library")?
    .with_haptics(Rc::new(LogHaptics));
    run_gallery(&mut gallery, &mut pump, &mut gestures, &walk, viewport)?;

    log::info!("final route: {:?}", navigator.borrow().current());
    Ok(())
}

fn run_triage(
    session: &mut TriageSession,
    pump: &mut FramePump,
    gestures: &mut GestureScript,
    steps: &[TriageStep],
    viewport: Size,
) -> Result<(usize, usize)> {
    let (mut saved, mut discarded) = (0, 0);
    let mut events = Vec::new();
    let (_render, frames) = render_to_log("triage", session.animator());

    for step in steps {
        session.dispatch(TriageCommand::Capture);
        pump.settle(|| events.extend(session.poll()))?;
        if let Some(TriageEvent::CaptureFailed(error)) = events.last() {
            if matches!(error, CaptureError::Exhausted) {
                log::info!("inbox is empty");
            } else {
                log::warn!("capture failed: {error}");
            }
            break;
        }
        events.clear();

        let mut pointer = Vec::new();
        match step {
            TriageStep::Save => pointer.extend(gestures.fling(viewport.width * 0.2)),
            TriageStep::Discard => pointer.extend(gestures.fling(-viewport.width * 0.2)),
            TriageStep::Hesitate => {
                for event in gestures.nudge(viewport.width * 0.1) {
                    session.dispatch(TriageCommand::Pointer(event));
                }
                pump.settle(|| events.extend(session.poll()))?;
                pointer.extend(gestures.fling(viewport.width * 0.2));
            }
        }
        for event in pointer {
            session.dispatch(TriageCommand::Pointer(event));
        }
        pump.settle(|| events.extend(session.poll()))?;

        for event in events.drain(..) {
            match event {
                TriageEvent::Saved(entry) => {
                    log::info!("saved {} as {}", entry.storage_uri.display(), entry.id);
                    saved += 1;
                }
                TriageEvent::Discarded { capture } => {
                    log::info!("discarded {}", capture.display());
                    discarded += 1;
                }
                TriageEvent::SaveFailed { capture, error } => {
                    log::warn!("could not save {}: {error}", capture.display());
                }
                other => log::debug!("triage event: {other:?}"),
            }
        }
        session.dispatch(TriageCommand::TakeAnother);
    }
    log::info!("triage rendered {} frames", frames.get());
    Ok((saved, discarded))
}

fn run_gallery(
    session: &mut GallerySession,
    pump: &mut FramePump,
    gestures: &mut GestureScript,
    steps: &[GalleryStep],
    viewport: Size,
) -> Result<()> {
    let mut events = Vec::new();
    let (_render, frames) = render_to_log("gallery", session.animator());
    pump.settle(|| events.extend(session.poll()))?;
    report(session, &mut events);

    for step in steps {
        if session.is_exhausted() {
            break;
        }
        match step {
            GalleryStep::Next => {
                for event in gestures.fling(-viewport.width * 0.2) {
                    session.dispatch(GalleryCommand::Pointer(event));
                }
            }
            GalleryStep::Previous => {
                for event in gestures.fling(viewport.width * 0.2) {
                    session.dispatch(GalleryCommand::Pointer(event));
                }
            }
            GalleryStep::Favorite => session.dispatch(GalleryCommand::ToggleFavorite),
            GalleryStep::Delete => session.dispatch(GalleryCommand::DeleteCurrent),
        }
        pump.settle(|| events.extend(session.poll()))?;
        report(session, &mut events);
    }
    log::info!("gallery rendered {} frames", frames.get());
    Ok(())
}

/// Stand-in renderer: traces every layer the animator publishes.
fn render_to_log(surface: &'static str, animator: &SwipeAnimator) -> (FeedbackSubscription, Rc<Cell<usize>>) {
    let frames = Rc::new(Cell::new(0usize));
    let subscription = animator.subscribe({
        let frames = Rc::clone(&frames);
        move |feedback: SwipeFeedback| {
            frames.set(frames.get() + 1);
            let layer = feedback.layer;
            log::trace!(
                "{surface}: x={:.1} y={:.1} rot={:.1} scale={:.2} alpha={:.2}",
                layer.translation_x,
                layer.translation_y,
                layer.rotation_z,
                layer.scale,
                layer.alpha
            );
        }
    });
    (subscription, frames)
}

fn report(session: &GallerySession, events: &mut Vec<GalleryEvent>) {
    for event in events.drain(..) {
        match event {
            GalleryEvent::CursorMoved { id, .. } => {
                log::info!("showing {id} ({})", session.counter_label());
            }
            GalleryEvent::Exhausted => log::info!("library is empty"),
            other => log::info!("gallery event: {other:?}"),
        }
    }
}
