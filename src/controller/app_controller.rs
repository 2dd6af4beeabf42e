//! Application controller implementation
//!
//! This module implements the controller that owns the pin store and the
//! interaction mode, and routes every canvas, table, prompt and timer event.

use crate::config::AppConfig;
use crate::input::PointerEvent;
use crate::model::{Mode, Pin, PinStore};
use crate::playback::{PlaybackEngine, PlaybackStatus, PlaybackStep, Scheduler};
use crate::render::{CanvasRenderer, Surface};
use crate::view::{LabelModal, ModalKey, TableView};

/// Application logic controller
///
/// Generic over the drawing surface and the continuation scheduler so hosts
/// can plug in a real toolkit and tests can use a recorded surface with a
/// simulated clock.
pub struct AppController<S: Surface, K: Scheduler> {
    /// Active configuration
    config: AppConfig,
    /// Ordered pins
    store: PinStore,
    /// Current interaction mode
    mode: Mode,
    /// Canvas renderer owning the drawing surface
    renderer: CanvasRenderer<S>,
    /// Delivers playback continuations
    scheduler: K,
    /// Playback state machine
    playback: PlaybackEngine,
    /// Pin table snapshot
    table: TableView,
    /// Open label prompt, if any
    modal: Option<LabelModal>,
}

impl<S: Surface, K: Scheduler> AppController<S, K> {
    /// Create a controller in `Idle` mode with an empty store
    pub fn new(config: AppConfig, surface: S, scheduler: K) -> Self {
        use tracing::info;

        info!(
            "Creating controller for a {}x{} canvas",
            config.canvas.width, config.canvas.height
        );

        let mut table = TableView::new();
        let store = PinStore::new();
        table.rebuild(&store, Mode::Idle);

        Self {
            renderer: CanvasRenderer::new(surface, config.pin, config.label),
            playback: PlaybackEngine::new(config.playback),
            config,
            store,
            mode: Mode::Idle,
            scheduler,
            table,
            modal: None,
        }
    }

    /// Current interaction mode
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Pins in store order
    pub fn pins(&self) -> &[Pin] {
        self.store.pins()
    }

    /// Current table snapshot
    pub fn table(&self) -> &TableView {
        &self.table
    }

    /// Open label prompt, if any
    pub fn modal(&self) -> Option<&LabelModal> {
        self.modal.as_ref()
    }

    /// The drawing surface holding the current frame
    pub fn surface(&self) -> &S {
        self.renderer.surface()
    }

    /// The continuation scheduler
    pub fn scheduler(&self) -> &K {
        &self.scheduler
    }

    /// Mutable access to the scheduler, for hosts that drive time themselves
    pub fn scheduler_mut(&mut self) -> &mut K {
        &mut self.scheduler
    }

    /// Active configuration
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Index of the pin playback is currently revealing
    pub fn playback_index(&self) -> Option<usize> {
        self.playback.current_index()
    }

    /// Start a fresh recording, discarding every pin
    ///
    /// Ignored while playing. Restarting an active recording resets it.
    pub fn start_recording(&mut self) -> bool {
        use tracing::{debug, info};

        if self.mode.is_playing() {
            debug!("Ignoring record request during playback");
            return false;
        }

        info!("Recording started ({} previous pins discarded)", self.store.len());
        self.mode = Mode::Recording;
        self.store.clear();
        self.modal = None;
        self.renderer.clear();
        self.table.rebuild(&self.store, self.mode);
        true
    }

    /// Replay the pin sequence
    ///
    /// Ignored while already playing. Ends any active recording.
    pub fn start_playing(&mut self) -> bool {
        use tracing::{debug, info};

        if self.mode.is_playing() {
            debug!("Ignoring play request: playback already running");
            return false;
        }

        info!("Playback started with {} pins", self.store.len());
        self.mode = Mode::Playing;
        self.table.rebuild(&self.store, self.mode);

        let status = self
            .playback
            .start(self.store.pins(), &mut self.renderer, &mut self.scheduler);
        if status == PlaybackStatus::Finished {
            self.finish_playback();
        }
        true
    }

    /// Deliver a fired playback continuation
    pub fn on_playback_step(&mut self, step: PlaybackStep) -> bool {
        let status = self.playback.resume(
            step,
            self.store.pins(),
            &mut self.renderer,
            &mut self.scheduler,
        );

        match status {
            Some(PlaybackStatus::Finished) => {
                self.finish_playback();
                true
            }
            Some(PlaybackStatus::Running) => true,
            None => false,
        }
    }

    /// Pointer moved over the canvas; shows the preview pin while recording
    pub fn pointer_moved(&mut self, event: &PointerEvent) -> bool {
        if !self.mode.is_recording() {
            return false;
        }

        let at = event.local();
        self.renderer.redraw_with_preview(self.store.pins(), at);
        true
    }

    /// Canvas clicked; appends a pin and opens the label prompt while recording
    pub fn pointer_clicked(&mut self, event: &PointerEvent) -> bool {
        use tracing::debug;

        if !self.mode.is_recording() {
            debug!("Ignoring canvas click in {} mode", self.mode);
            return false;
        }

        let at = event.local();
        let index = self.store.add(at.x, at.y);
        debug!("Pin {} added at ({}, {})", index, at.x, at.y);

        self.refresh();
        self.modal = Some(LabelModal::open(index));
        true
    }

    /// Set the label of the pin at `index` from the table
    pub fn set_label(&mut self, index: usize, text: impl Into<String>) -> bool {
        self.edit("set label", |store| store.set_label(index, text))
    }

    /// Move the pin at `index` one place earlier
    pub fn move_up(&mut self, index: usize) -> bool {
        let moved = self.edit("move up", |store| store.move_up(index));
        if moved && let Some(modal) = self.modal.as_mut() {
            modal.swap(index - 1, index);
        }
        moved
    }

    /// Move the pin at `index` one place later
    pub fn move_down(&mut self, index: usize) -> bool {
        let moved = self.edit("move down", |store| store.move_down(index));
        if moved && let Some(modal) = self.modal.as_mut() {
            modal.swap(index, index + 1);
        }
        moved
    }

    /// Delete the pin at `index`
    ///
    /// Deleting the pin an open prompt belongs to closes the prompt.
    pub fn remove(&mut self, index: usize) -> bool {
        let removed = self.edit("remove", |store| store.remove(index).is_some());
        if removed {
            self.modal = self.modal.take().and_then(|m| m.after_remove(index));
        }
        removed
    }

    /// Key pressed in the label prompt with the field holding `text`
    pub fn modal_key(&mut self, key: ModalKey, text: &str) -> bool {
        key.commits() && self.commit_label(text)
    }

    /// Commit the prompt: label the pin it was opened for and dismiss it
    ///
    /// The label write follows the table's rules, so it is dropped while playing.
    pub fn commit_label(&mut self, text: &str) -> bool {
        use tracing::debug;

        let Some(modal) = self.modal.take() else {
            debug!("Ignoring label commit: no prompt open");
            return false;
        };

        if self.mode.allows_edits() {
            self.store.set_label(modal.target(), text);
            self.refresh();
        }
        true
    }

    fn edit(&mut self, action: &str, apply: impl FnOnce(&mut PinStore) -> bool) -> bool {
        use tracing::debug;

        if !self.mode.allows_edits() {
            debug!("Ignoring {} during playback", action);
            return false;
        }
        if !apply(&mut self.store) {
            debug!("Ignoring {}: nothing to change", action);
            return false;
        }

        self.refresh();
        true
    }

    fn finish_playback(&mut self) {
        use tracing::info;

        info!("Playback finished");
        self.mode = Mode::Idle;
        self.table.rebuild(&self.store, self.mode);
    }

    /// Full redraw of the canvas and the table
    fn refresh(&mut self) {
        self.renderer.redraw(self.store.pins());
        self.table.rebuild(&self.store, self.mode);
    }
}
