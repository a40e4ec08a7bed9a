// Copyright 2026 the Plotfield Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::scene::ExprId;

/// The curve currently under the pointer, with the sampled world position.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct HoverTarget {
    /// Hovered expression.
    pub expr_id: ExprId,
    /// World X at the pointer.
    pub x: f64,
    /// World Y of the curve at that X.
    pub y: f64,
}

/// Transition produced by [`HoverState::update`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum HoverChange {
    /// The hover target became active or switched to a different curve.
    Began(HoverTarget),
    /// The pointer left all curves (or left the surface).
    Ended,
}

/// Tracks which curve is hovered, emitting transitions on change.
///
/// The state guarantees at most one active hover: a new target on a
/// different curve produces a single [`HoverChange::Began`] (no explicit end
/// for the previous curve), and moving along the same curve produces no
/// transition at all. Recomputed on every pointer move while no pan or pinch
/// is active.
#[derive(Copy, Clone, Debug, Default)]
pub struct HoverState {
    active: Option<HoverTarget>,
}

impl HoverState {
    /// Creates an inactive hover state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the active hover target, if any.
    #[must_use]
    pub fn active(&self) -> Option<HoverTarget> {
        self.active
    }

    /// Feeds the latest hit-test result, returning the transition if the
    /// hovered curve changed.
    pub fn update(&mut self, target: Option<HoverTarget>) -> Option<HoverChange> {
        let change = match (self.active, target) {
            (None, Some(t)) => Some(HoverChange::Began(t)),
            (Some(prev), Some(t)) if prev.expr_id != t.expr_id => Some(HoverChange::Began(t)),
            (Some(_), None) => Some(HoverChange::Ended),
            _ => None,
        };
        self.active = target;
        change
    }

    /// Clears the hover unconditionally, returning [`HoverChange::Ended`] if
    /// one was active. Used when the pointer leaves the surface or a gesture
    /// starts.
    pub fn clear(&mut self) -> Option<HoverChange> {
        self.update(None)
    }
}

#[cfg(test)]
mod tests {
    use super::{HoverChange, HoverState, HoverTarget};
    use crate::scene::ExprId;

    fn target(id: u32, x: f64) -> HoverTarget {
        HoverTarget {
            expr_id: ExprId(id),
            x,
            y: x,
        }
    }

    #[test]
    fn begin_move_end_sequence() {
        let mut hover = HoverState::new();

        assert_eq!(
            hover.update(Some(target(0, 1.0))),
            Some(HoverChange::Began(target(0, 1.0)))
        );
        // Moving along the same curve is not a transition.
        assert_eq!(hover.update(Some(target(0, 2.0))), None);
        assert_eq!(hover.update(None), Some(HoverChange::Ended));
        // Already inactive: nothing more to report.
        assert_eq!(hover.update(None), None);
    }

    #[test]
    fn switching_curves_emits_single_began() {
        let mut hover = HoverState::new();
        hover.update(Some(target(0, 1.0)));

        assert_eq!(
            hover.update(Some(target(1, 1.0))),
            Some(HoverChange::Began(target(1, 1.0)))
        );
        assert_eq!(hover.active().unwrap().expr_id, ExprId(1));
    }

    #[test]
    fn clear_reports_end_once() {
        let mut hover = HoverState::new();
        hover.update(Some(target(0, 1.0)));

        assert_eq!(hover.clear(), Some(HoverChange::Ended));
        assert_eq!(hover.clear(), None);
    }
}
