// Copyright 2026 the Plotfield Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use bitflags::bitflags;

bitflags! {
    /// What a scheduled wake-up has to redo.
    ///
    /// Requests made while a frame is already pending are folded in with a
    /// bitwise OR, so the eventual wake-up sees the union of everything that
    /// was invalidated since the last frame.
    #[derive(Copy, Clone, Debug, PartialEq, Eq)]
    pub struct Damage: u8 {
        /// The picture is stale and must be re-rendered.
        const PAINT = 1 << 0;
        /// The surface or view geometry changed; aspect enforcement must run
        /// before painting.
        const LAYOUT = 1 << 1;
    }
}

/// Collapses a burst of triggers into one firing after a quiet period.
///
/// The debouncer is entirely timestamp-driven: [`Debouncer::trigger`] arms
/// (or re-arms) a deadline `delay_ms` after the given instant, and
/// [`Debouncer::poll`] reports `true` exactly once, the first time it is
/// called at or past that deadline. A continuous resize therefore produces a
/// single reaction, shortly after the user stops dragging.
#[derive(Debug)]
pub struct Debouncer {
    delay_ms: u64,
    deadline_ms: Option<u64>,
}

impl Debouncer {
    /// Creates a debouncer with the given quiet period.
    #[must_use]
    pub fn new(delay_ms: u64) -> Self {
        Self {
            delay_ms,
            deadline_ms: None,
        }
    }

    /// Arms (or pushes back) the deadline to `now_ms + delay`.
    pub fn trigger(&mut self, now_ms: u64) {
        self.deadline_ms = Some(now_ms.saturating_add(self.delay_ms));
    }

    /// Returns `true` once the quiet period has elapsed, then disarms.
    pub fn poll(&mut self, now_ms: u64) -> bool {
        match self.deadline_ms {
            Some(deadline) if now_ms >= deadline => {
                self.deadline_ms = None;
                true
            }
            _ => false,
        }
    }

    /// Returns `true` while a trigger is waiting out its quiet period.
    #[must_use]
    pub fn is_armed(&self) -> bool {
        self.deadline_ms.is_some()
    }
}

/// At-most-one pending redraw, with accumulated [`Damage`].
///
/// Input handlers call [`FrameScheduler::request`] freely; the embedder's
/// frame callback calls [`FrameScheduler::take`] once per paint opportunity
/// and renders only if the returned damage is non-empty. Painting never
/// happens synchronously inside an input handler.
#[derive(Debug, Default)]
pub struct FrameScheduler {
    pending: Option<Damage>,
}

impl FrameScheduler {
    /// Creates a scheduler with nothing pending.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `damage` to the pending frame, creating one if necessary.
    pub fn request(&mut self, damage: Damage) {
        self.pending = Some(self.pending.unwrap_or(Damage::empty()) | damage);
    }

    /// Returns `true` while a frame is pending.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Takes the accumulated damage, leaving the scheduler empty.
    pub fn take(&mut self) -> Damage {
        self.pending.take().unwrap_or(Damage::empty())
    }
}

#[cfg(test)]
mod tests {
    use super::{Damage, Debouncer, FrameScheduler};

    #[test]
    fn debounce_fires_once_after_the_quiet_period() {
        let mut d = Debouncer::new(80);
        d.trigger(1_000);
        assert!(!d.poll(1_050));
        assert!(d.poll(1_080));
        // Disarmed after firing.
        assert!(!d.poll(1_200));
        assert!(!d.is_armed());
    }

    #[test]
    fn retrigger_pushes_the_deadline_back() {
        let mut d = Debouncer::new(80);
        d.trigger(1_000);
        d.trigger(1_060);
        // The original deadline of 1080 has been superseded.
        assert!(!d.poll(1_090));
        assert!(d.poll(1_140));
    }

    #[test]
    fn untriggered_debouncer_never_fires() {
        let mut d = Debouncer::new(80);
        assert!(!d.poll(u64::MAX));
    }

    #[test]
    fn scheduler_coalesces_requests() {
        let mut s = FrameScheduler::new();
        assert!(!s.is_pending());

        s.request(Damage::PAINT);
        s.request(Damage::PAINT);
        s.request(Damage::LAYOUT);
        assert!(s.is_pending());

        assert_eq!(s.take(), Damage::PAINT | Damage::LAYOUT);
        assert!(!s.is_pending());
        assert_eq!(s.take(), Damage::empty());
    }
}
