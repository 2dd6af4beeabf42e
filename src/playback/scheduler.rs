//! Delayed continuation scheduling
//!
//! Playback never blocks. Each stage asks a `Scheduler` to deliver a
//! `PlaybackStep` after a delay, and the host feeds the step back to the
//! controller when it fires. `VirtualScheduler` keeps a simulated clock so
//! tests can replay a whole animation without waiting.

use std::time::Duration;

/// Continuation token delivered back to the playback engine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackStep {
    /// Reveal pin `i` (or finish when `i` is past the last pin)
    Reveal(usize),
    /// Redraw pins `0..=i` without the label of pin `i`
    Conceal(usize),
}

/// Runs playback continuations after a delay
pub trait Scheduler {
    /// Deliver `step` once `delay` has elapsed
    fn schedule(&mut self, delay: Duration, step: PlaybackStep);
}

/// Deterministic scheduler driven by an explicit clock
#[derive(Debug, Default)]
pub struct VirtualScheduler {
    now: Duration,
    pending: Vec<(Duration, u64, PlaybackStep)>,
    sequence: u64,
}

impl VirtualScheduler {
    /// Create a scheduler with its clock at zero
    pub fn new() -> Self {
        Self::default()
    }

    /// Current simulated time
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Number of continuations waiting to fire
    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    /// Time at which the next continuation fires
    pub fn next_deadline(&self) -> Option<Duration> {
        self.pending.iter().map(|(due, _, _)| *due).min()
    }

    /// Pop the earliest continuation due at or before `now + by`
    ///
    /// Advances the clock to the continuation's deadline. When nothing is due
    /// the clock moves forward by `by` and `None` is returned.
    pub fn advance(&mut self, by: Duration) -> Option<PlaybackStep> {
        let limit = self.now + by;
        let next = self
            .pending
            .iter()
            .enumerate()
            .filter(|(_, (due, _, _))| *due <= limit)
            .min_by_key(|(_, (due, seq, _))| (*due, *seq))
            .map(|(i, _)| i);

        match next {
            Some(i) => {
                let (due, _, step) = self.pending.remove(i);
                self.now = due;
                Some(step)
            }
            None => {
                self.now = limit;
                None
            }
        }
    }

    /// Pop the next continuation, jumping the clock straight to it
    pub fn fire_next(&mut self) -> Option<PlaybackStep> {
        let wait = self.next_deadline()?.saturating_sub(self.now);
        self.advance(wait)
    }
}

impl Scheduler for VirtualScheduler {
    fn schedule(&mut self, delay: Duration, step: PlaybackStep) {
        self.pending.push((self.now + delay, self.sequence, step));
        self.sequence += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fires_in_deadline_order() {
        let mut scheduler = VirtualScheduler::new();
        scheduler.schedule(Duration::from_millis(400), PlaybackStep::Reveal(1));
        scheduler.schedule(Duration::from_millis(100), PlaybackStep::Conceal(0));

        assert_eq!(scheduler.pending(), 2);
        assert_eq!(scheduler.fire_next(), Some(PlaybackStep::Conceal(0)));
        assert_eq!(scheduler.now(), Duration::from_millis(100));
        assert_eq!(scheduler.fire_next(), Some(PlaybackStep::Reveal(1)));
        assert_eq!(scheduler.now(), Duration::from_millis(400));
        assert_eq!(scheduler.fire_next(), None);
    }

    #[test]
    fn test_advance_respects_deadline() {
        let mut scheduler = VirtualScheduler::new();
        scheduler.schedule(Duration::from_millis(1000), PlaybackStep::Conceal(0));

        assert_eq!(scheduler.advance(Duration::from_millis(999)), None);
        assert_eq!(scheduler.now(), Duration::from_millis(999));
        assert_eq!(
            scheduler.advance(Duration::from_millis(1)),
            Some(PlaybackStep::Conceal(0))
        );
        assert_eq!(scheduler.now(), Duration::from_millis(1000));
    }

    #[test]
    fn test_equal_deadlines_fire_in_schedule_order() {
        let mut scheduler = VirtualScheduler::new();
        scheduler.schedule(Duration::ZERO, PlaybackStep::Reveal(3));
        scheduler.schedule(Duration::ZERO, PlaybackStep::Reveal(4));
        assert_eq!(scheduler.fire_next(), Some(PlaybackStep::Reveal(3)));
        assert_eq!(scheduler.fire_next(), Some(PlaybackStep::Reveal(4)));
    }

    #[test]
    fn test_delay_is_relative_to_current_time() {
        let mut scheduler = VirtualScheduler::new();
        scheduler.advance(Duration::from_millis(500));
        scheduler.schedule(Duration::from_millis(400), PlaybackStep::Reveal(0));
        assert_eq!(scheduler.next_deadline(), Some(Duration::from_millis(900)));
    }
}
