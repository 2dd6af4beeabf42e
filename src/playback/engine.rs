//! Playback engine: timed reveal of the pin sequence.
//!
//! For each pin `i` in order:
//!
//! 1. clear and draw pins `0..=i`, plus the label of pin `i` if it has one
//! 2. after the reveal delay, clear and draw pins `0..=i` without the label
//! 3. after the conceal delay, continue with pin `i + 1`
//!
//! Once every pin has been shown the full static pin set is drawn and the
//! engine reports `Finished`. A run cannot be interrupted or restarted; steps
//! that arrive out of order or while no run is active are ignored.

use crate::config::PlaybackTiming;
use crate::model::Pin;
use crate::playback::scheduler::{PlaybackStep, Scheduler};
use crate::render::{CanvasRenderer, Surface};
use tracing::debug;

/// Outcome of running a playback stage
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackStatus {
    /// A continuation has been scheduled
    Running,
    /// The last pin has been shown and the static pin set redrawn
    Finished,
}

/// Explicit state machine for one playback run at a time
#[derive(Debug, Clone)]
pub struct PlaybackEngine {
    timing: PlaybackTiming,
    expected: Option<PlaybackStep>,
}

impl PlaybackEngine {
    /// Create an idle engine
    pub fn new(timing: PlaybackTiming) -> Self {
        Self {
            timing,
            expected: None,
        }
    }

    /// Whether a run is in progress
    pub fn is_active(&self) -> bool {
        self.expected.is_some()
    }

    /// Index of the pin currently being revealed
    pub fn current_index(&self) -> Option<usize> {
        match self.expected? {
            PlaybackStep::Conceal(i) => Some(i),
            PlaybackStep::Reveal(i) => i.checked_sub(1),
        }
    }

    /// Begin a run at the first pin
    ///
    /// An empty pin list finishes immediately.
    pub fn start<S: Surface, K: Scheduler>(
        &mut self,
        pins: &[Pin],
        renderer: &mut CanvasRenderer<S>,
        scheduler: &mut K,
    ) -> PlaybackStatus {
        debug!("Starting playback of {} pins", pins.len());
        renderer.clear();
        self.reveal(0, pins, renderer, scheduler)
    }

    /// Run a delivered continuation
    ///
    /// Returns `None` if the step is not the one this run is waiting for.
    pub fn resume<S: Surface, K: Scheduler>(
        &mut self,
        step: PlaybackStep,
        pins: &[Pin],
        renderer: &mut CanvasRenderer<S>,
        scheduler: &mut K,
    ) -> Option<PlaybackStatus> {
        if self.expected != Some(step) {
            debug!("Ignoring unexpected playback step {:?}", step);
            return None;
        }

        let status = match step {
            PlaybackStep::Reveal(index) => self.reveal(index, pins, renderer, scheduler),
            PlaybackStep::Conceal(index) => self.conceal(index, pins, renderer, scheduler),
        };
        Some(status)
    }

    fn reveal<S: Surface, K: Scheduler>(
        &mut self,
        index: usize,
        pins: &[Pin],
        renderer: &mut CanvasRenderer<S>,
        scheduler: &mut K,
    ) -> PlaybackStatus {
        let Some(pin) = pins.get(index) else {
            renderer.redraw(pins);
            self.expected = None;
            debug!("Playback finished");
            return PlaybackStatus::Finished;
        };

        renderer.clear();
        renderer.draw_pins_up_to(pins, index);
        if pin.has_label() {
            renderer.draw_label(pin);
        }

        self.schedule(scheduler, self.timing.reveal(), PlaybackStep::Conceal(index));
        PlaybackStatus::Running
    }

    fn conceal<S: Surface, K: Scheduler>(
        &mut self,
        index: usize,
        pins: &[Pin],
        renderer: &mut CanvasRenderer<S>,
        scheduler: &mut K,
    ) -> PlaybackStatus {
        renderer.clear();
        renderer.draw_pins_up_to(pins, index);

        self.schedule(
            scheduler,
            self.timing.conceal(),
            PlaybackStep::Reveal(index + 1),
        );
        PlaybackStatus::Running
    }

    fn schedule<K: Scheduler>(
        &mut self,
        scheduler: &mut K,
        delay: std::time::Duration,
        step: PlaybackStep,
    ) {
        self.expected = Some(step);
        scheduler.schedule(delay, step);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{LabelStyle, PinStyle};
    use crate::playback::scheduler::VirtualScheduler;
    use crate::render::{DisplayList, Size};
    use std::time::Duration;

    fn setup() -> (PlaybackEngine, CanvasRenderer<DisplayList>, VirtualScheduler) {
        (
            PlaybackEngine::new(PlaybackTiming::default()),
            CanvasRenderer::new(
                DisplayList::new(Size::new(800.0, 600.0), 0.5),
                PinStyle::default(),
                LabelStyle::default(),
            ),
            VirtualScheduler::new(),
        )
    }

    #[test]
    fn test_empty_playback_finishes_immediately() {
        let (mut engine, mut renderer, mut scheduler) = setup();
        let status = engine.start(&[], &mut renderer, &mut scheduler);

        assert_eq!(status, PlaybackStatus::Finished);
        assert!(!engine.is_active());
        assert_eq!(scheduler.pending(), 0);
        assert!(renderer.surface().commands().is_empty());
    }

    #[test]
    fn test_stage_sequence_and_delays() {
        let (mut engine, mut renderer, mut scheduler) = setup();
        let pins = vec![Pin::with_label(1.0, 1.0, "A"), Pin::new(2.0, 2.0)];

        assert_eq!(
            engine.start(&pins, &mut renderer, &mut scheduler),
            PlaybackStatus::Running
        );
        assert_eq!(engine.current_index(), Some(0));
        assert_eq!(renderer.surface().texts(), ["A"]);
        assert_eq!(scheduler.next_deadline(), Some(Duration::from_millis(1000)));

        let step = scheduler.fire_next().unwrap();
        assert_eq!(step, PlaybackStep::Conceal(0));
        engine.resume(step, &pins, &mut renderer, &mut scheduler);
        assert!(renderer.surface().texts().is_empty());
        assert_eq!(scheduler.next_deadline(), Some(Duration::from_millis(1400)));

        let step = scheduler.fire_next().unwrap();
        assert_eq!(step, PlaybackStep::Reveal(1));
        engine.resume(step, &pins, &mut renderer, &mut scheduler);
        assert_eq!(engine.current_index(), Some(1));
        assert_eq!(renderer.surface().circle_count(), 2);
        assert_eq!(renderer.surface().line_count(), 1);
        assert!(renderer.surface().texts().is_empty());

        let step = scheduler.fire_next().unwrap();
        engine.resume(step, &pins, &mut renderer, &mut scheduler);
        let step = scheduler.fire_next().unwrap();
        assert_eq!(step, PlaybackStep::Reveal(2));
        assert_eq!(
            engine.resume(step, &pins, &mut renderer, &mut scheduler),
            Some(PlaybackStatus::Finished)
        );
        assert_eq!(scheduler.now(), Duration::from_millis(2800));
        assert!(!engine.is_active());
    }

    #[test]
    fn test_unexpected_steps_are_ignored() {
        let (mut engine, mut renderer, mut scheduler) = setup();
        let pins = vec![Pin::new(1.0, 1.0)];

        assert_eq!(
            engine.resume(PlaybackStep::Reveal(0), &pins, &mut renderer, &mut scheduler),
            None
        );

        engine.start(&pins, &mut renderer, &mut scheduler);
        assert_eq!(
            engine.resume(PlaybackStep::Reveal(1), &pins, &mut renderer, &mut scheduler),
            None
        );
        assert!(engine.is_active());
        assert_eq!(scheduler.pending(), 1);
    }
}
