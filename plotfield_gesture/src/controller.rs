// Copyright 2026 the Plotfield Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use hashbrown::HashMap;
use kurbo::{Point, Rect, Vec2};

use plotfield_view2d::{FrameTransform, PlotView, SurfaceSize};

/// Identifier for an active pointer (mouse, finger, or stylus).
///
/// Assigned by the embedder from its event source; the controller only
/// compares ids for equality.
#[repr(transparent)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct PointerId(pub u64);

/// What a gesture input did, from the caller's point of view.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum GestureEffect {
    /// Nothing the caller needs to react to.
    None,
    /// The view was mutated; run aspect enforcement and request a redraw.
    ViewChanged,
    /// A press was released without crossing the drag threshold.
    ///
    /// The caller should hit-test `screen` against the plotted curves and
    /// place a marker on success.
    Click {
        /// Release position in physical screen pixels.
        screen: Point,
    },
}

/// Displacement, in logical pixels, past which a press counts as a pan
/// rather than a stationary click.
const DRAG_SLOP_PX: f64 = 4.0;

/// Wheel zoom factor per tick away from the user (zoom out).
const WHEEL_STEP_OUT: f64 = 1.1;

/// Wheel zoom factor per tick toward the user (zoom in).
const WHEEL_STEP_IN: f64 = 0.9;

/// Pointer separations below this many physical pixels are ignored while
/// pinching; the implied zoom factor would be wildly unstable.
const MIN_PINCH_DISTANCE_PX: f64 = 1.0;

#[derive(Copy, Clone, Debug)]
enum Phase {
    Idle,
    Panning {
        pointer: PointerId,
        press_screen: Point,
        /// View bounds at press time. Every move re-derives the view from
        /// this snapshot, so a pan cannot drift however many moves arrive.
        press_world: Rect,
        moved: bool,
    },
    Pinching {
        a: PointerId,
        b: PointerId,
        /// Inter-pointer distance at the previous move; the per-move zoom
        /// factor is `last_distance / current_distance`, which makes pinch
        /// zoom incremental rather than cumulative-from-start.
        last_distance: f64,
    },
}

/// Interprets pointer and wheel input into [`PlotView`] mutations.
///
/// See the [crate docs](crate) for the state machine overview. All positions
/// are physical screen pixels; all mutations go through the view's vetted
/// operations, so invalid input degenerates to a no-op rather than a broken
/// viewport.
#[derive(Debug)]
pub struct GestureController {
    pointers: HashMap<PointerId, Point>,
    phase: Phase,
}

impl GestureController {
    /// Creates an idle controller.
    #[must_use]
    pub fn new() -> Self {
        Self {
            pointers: HashMap::new(),
            phase: Phase::Idle,
        }
    }

    /// Returns `true` while no pan or pinch is in progress.
    ///
    /// Hover feedback should only be computed while idle; mid-gesture the
    /// pointer is steering the view, not inspecting curves.
    #[must_use]
    pub fn is_idle(&self) -> bool {
        matches!(self.phase, Phase::Idle)
    }

    /// Number of currently tracked pointers.
    #[must_use]
    pub fn pointer_count(&self) -> usize {
        self.pointers.len()
    }

    /// Handles a wheel tick at `pos`; positive `delta_y` zooms out.
    ///
    /// The zoom is centered at the cursor's world position, so the world
    /// point under the cursor stays put.
    pub fn on_wheel(
        &mut self,
        pos: Point,
        delta_y: f64,
        view: &mut PlotView,
        surface: SurfaceSize,
    ) -> GestureEffect {
        let factor = if delta_y > 0.0 {
            WHEEL_STEP_OUT
        } else {
            WHEEL_STEP_IN
        };
        let anchor = FrameTransform::new(view.world(), surface).screen_to_world(pos);
        if view.zoom_about(anchor, factor) {
            GestureEffect::ViewChanged
        } else {
            GestureEffect::None
        }
    }

    /// Handles a pointer press.
    ///
    /// The first pointer starts a (potential) pan with a snapshot of the
    /// current view; a second simultaneous pointer promotes the gesture to a
    /// pinch. Further pointers are tracked but do not affect the gesture.
    pub fn on_pointer_down(&mut self, id: PointerId, pos: Point, view: &PlotView) {
        self.pointers.insert(id, pos);
        match self.phase {
            Phase::Idle => {
                self.phase = Phase::Panning {
                    pointer: id,
                    press_screen: pos,
                    press_world: view.world(),
                    moved: false,
                };
            }
            Phase::Panning { pointer, .. } if pointer != id => {
                if let (Some(&pa), Some(&pb)) = (self.pointers.get(&pointer), self.pointers.get(&id))
                {
                    self.phase = Phase::Pinching {
                        a: pointer,
                        b: id,
                        last_distance: pa.distance(pb),
                    };
                }
            }
            _ => {}
        }
    }

    /// Handles a pointer move.
    ///
    /// Returns [`GestureEffect::ViewChanged`] when the move panned or zoomed
    /// the view. Moves of untracked pointers (hover) are ignored here; the
    /// caller hit-tests them while [`GestureController::is_idle`].
    pub fn on_pointer_move(
        &mut self,
        id: PointerId,
        pos: Point,
        view: &mut PlotView,
        surface: SurfaceSize,
    ) -> GestureEffect {
        let Some(entry) = self.pointers.get_mut(&id) else {
            return GestureEffect::None;
        };
        *entry = pos;

        match &mut self.phase {
            Phase::Panning {
                pointer,
                press_screen,
                press_world,
                moved,
            } if *pointer == id => {
                let delta = pos - *press_screen;
                if !*moved && delta.hypot() > DRAG_SLOP_PX * surface.scale {
                    *moved = true;
                }
                // Inverse translation of the press-time snapshot: dragging
                // right moves the view left, dragging down moves it up.
                let tf = FrameTransform::new(*press_world, surface);
                let world_delta = Vec2::new(
                    -delta.x * tf.world_per_pixel_x(),
                    delta.y * tf.world_per_pixel_y(),
                );
                let target = *press_world + world_delta;
                if view.set_world_rect(target) {
                    GestureEffect::ViewChanged
                } else {
                    GestureEffect::None
                }
            }
            Phase::Pinching {
                a,
                b,
                last_distance,
            } if *a == id || *b == id => {
                let (Some(&pa), Some(&pb)) = (self.pointers.get(a), self.pointers.get(b)) else {
                    return GestureEffect::None;
                };
                let current = pa.distance(pb);
                if current < MIN_PINCH_DISTANCE_PX {
                    return GestureEffect::None;
                }
                let factor = *last_distance / current;
                *last_distance = current;

                let mid = pa.midpoint(pb);
                let anchor = FrameTransform::new(view.world(), surface).screen_to_world(mid);
                if view.zoom_about(anchor, factor) {
                    GestureEffect::ViewChanged
                } else {
                    GestureEffect::None
                }
            }
            _ => GestureEffect::None,
        }
    }

    /// Handles a pointer release.
    ///
    /// A release of a pan that never crossed the drag threshold reports a
    /// [`GestureEffect::Click`]. Releasing one of two pinch pointers demotes
    /// the gesture to a pan seeded from the surviving pointer's current
    /// position, so the view does not jump.
    pub fn on_pointer_up(
        &mut self,
        id: PointerId,
        pos: Point,
        view: &mut PlotView,
        _surface: SurfaceSize,
    ) -> GestureEffect {
        self.pointers.remove(&id);
        match self.phase {
            Phase::Panning { pointer, moved, .. } if pointer == id => {
                self.phase = Phase::Idle;
                if moved {
                    GestureEffect::None
                } else {
                    GestureEffect::Click { screen: pos }
                }
            }
            Phase::Pinching { a, b, .. } if a == id || b == id => {
                let survivor = if a == id { b } else { a };
                self.phase = match self.pointers.get(&survivor) {
                    Some(&survivor_pos) => Phase::Panning {
                        pointer: survivor,
                        press_screen: survivor_pos,
                        press_world: view.world(),
                        // A pinch already happened; the demoted pan must not
                        // turn into a click on release.
                        moved: true,
                    },
                    None => Phase::Idle,
                };
                GestureEffect::None
            }
            _ => GestureEffect::None,
        }
    }

    /// Handles a pointer cancellation (capture lost, touch interrupted).
    ///
    /// Like [`GestureController::on_pointer_up`] but can never produce a
    /// click.
    pub fn on_pointer_cancel(&mut self, id: PointerId, view: &PlotView) {
        self.pointers.remove(&id);
        match self.phase {
            Phase::Panning { pointer, .. } if pointer == id => {
                self.phase = Phase::Idle;
            }
            Phase::Pinching { a, b, .. } if a == id || b == id => {
                let survivor = if a == id { b } else { a };
                self.phase = match self.pointers.get(&survivor) {
                    Some(&survivor_pos) => Phase::Panning {
                        pointer: survivor,
                        press_screen: survivor_pos,
                        press_world: view.world(),
                        moved: true,
                    },
                    None => Phase::Idle,
                };
            }
            _ => {}
        }
    }
}

impl Default for GestureController {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Rect};

    use plotfield_view2d::{PlotView, SurfaceSize};

    use super::{GestureController, GestureEffect, PointerId};

    const P0: PointerId = PointerId(0);
    const P1: PointerId = PointerId(1);

    fn setup() -> (PlotView, SurfaceSize, GestureController) {
        (
            PlotView::new(Rect::new(-10.0, -6.0, 10.0, 6.0)),
            // 40 physical px per world unit on X, 40 on Y.
            SurfaceSize::new(800.0, 480.0, 1.0),
            GestureController::new(),
        )
    }

    #[test]
    fn wheel_zoom_in_at_world_origin() {
        let (mut view, surface, mut g) = setup();
        // Screen center is world (0, 0).
        let effect = g.on_wheel(Point::new(400.0, 240.0), -1.0, &mut view, surface);

        assert_eq!(effect, GestureEffect::ViewChanged);
        assert!((view.span_x() - 18.0).abs() < 1e-9);
        assert!((view.span_y() - 10.8).abs() < 1e-9);
        assert!(view.center().distance(Point::ORIGIN) < 1e-9);
    }

    #[test]
    fn wheel_zoom_out_uses_1_1() {
        let (mut view, surface, mut g) = setup();
        g.on_wheel(Point::new(400.0, 240.0), 1.0, &mut view, surface);
        assert!((view.span_x() - 22.0).abs() < 1e-9);
    }

    #[test]
    fn wheel_keeps_cursor_world_point_fixed() {
        let (mut view, surface, mut g) = setup();
        let cursor = Point::new(600.0, 120.0);
        let before =
            plotfield_view2d::FrameTransform::new(view.world(), surface).screen_to_world(cursor);

        g.on_wheel(cursor, -1.0, &mut view, surface);

        let after =
            plotfield_view2d::FrameTransform::new(view.world(), surface).screen_to_world(cursor);
        assert!(before.distance(after) < 1e-9);
    }

    #[test]
    fn drag_right_moves_view_left() {
        let (mut view, surface, mut g) = setup();
        g.on_pointer_down(P0, Point::new(100.0, 100.0), &view);
        let effect = g.on_pointer_move(P0, Point::new(180.0, 100.0), &mut view, surface);

        assert_eq!(effect, GestureEffect::ViewChanged);
        // 80 px right at 40 px per unit: view shifts 2 world units left.
        assert_eq!(view.world(), Rect::new(-12.0, -6.0, 8.0, 6.0));
    }

    #[test]
    fn drag_down_moves_view_up() {
        let (mut view, surface, mut g) = setup();
        g.on_pointer_down(P0, Point::new(100.0, 100.0), &view);
        g.on_pointer_move(P0, Point::new(100.0, 180.0), &mut view, surface);

        assert_eq!(view.world(), Rect::new(-10.0, -4.0, 10.0, 8.0));
    }

    #[test]
    fn pan_is_snapshot_based_not_cumulative() {
        let (mut view, surface, mut g) = setup();
        g.on_pointer_down(P0, Point::new(0.0, 0.0), &view);
        for i in 1..=10 {
            g.on_pointer_move(P0, Point::new(f64::from(i) * 8.0, 0.0), &mut view, surface);
        }
        // Final displacement is 80 px = 2 world units, regardless of how
        // many intermediate moves were delivered.
        assert_eq!(view.world(), Rect::new(-12.0, -6.0, 8.0, 6.0));
    }

    #[test]
    fn stationary_release_is_a_click() {
        let (mut view, surface, mut g) = setup();
        g.on_pointer_down(P0, Point::new(250.0, 250.0), &view);
        // A sub-slop wiggle must not disqualify the click.
        g.on_pointer_move(P0, Point::new(251.0, 250.5), &mut view, surface);
        let effect = g.on_pointer_up(P0, Point::new(251.0, 250.5), &mut view, surface);

        assert_eq!(
            effect,
            GestureEffect::Click {
                screen: Point::new(251.0, 250.5)
            }
        );
        assert!(g.is_idle());
    }

    #[test]
    fn moved_drag_release_is_not_a_click() {
        let (mut view, surface, mut g) = setup();
        g.on_pointer_down(P0, Point::new(250.0, 250.0), &view);
        g.on_pointer_move(P0, Point::new(300.0, 250.0), &mut view, surface);
        let effect = g.on_pointer_up(P0, Point::new(300.0, 250.0), &mut view, surface);

        assert_eq!(effect, GestureEffect::None);
    }

    #[test]
    fn pinch_factor_is_distance_ratio() {
        let (mut view, surface, mut g) = setup();
        let span_before = view.span_x();

        // Two pointers 100 px apart, spreading to 200 px.
        g.on_pointer_down(P0, Point::new(300.0, 240.0), &view);
        g.on_pointer_down(P1, Point::new(400.0, 240.0), &view);
        let effect = g.on_pointer_move(P1, Point::new(500.0, 240.0), &mut view, surface);

        assert_eq!(effect, GestureEffect::ViewChanged);
        // factor = d0/d1 = 100/200 = 0.5: spans halve (zoom in).
        assert!((view.span_x() - span_before * 0.5).abs() < 1e-9);
    }

    #[test]
    fn pinch_is_incremental_between_moves() {
        let (mut view, surface, mut g) = setup();
        let span_before = view.span_x();

        g.on_pointer_down(P0, Point::new(300.0, 240.0), &view);
        g.on_pointer_down(P1, Point::new(400.0, 240.0), &view);
        // 100 -> 200 -> 400: two incremental halvings, factor 0.25 total.
        g.on_pointer_move(P1, Point::new(500.0, 240.0), &mut view, surface);
        g.on_pointer_move(P1, Point::new(700.0, 240.0), &mut view, surface);

        assert!((view.span_x() - span_before * 0.25).abs() < 1e-9);
    }

    #[test]
    fn releasing_one_pinch_pointer_demotes_to_pan_without_jump() {
        let (mut view, surface, mut g) = setup();
        g.on_pointer_down(P0, Point::new(300.0, 240.0), &view);
        g.on_pointer_down(P1, Point::new(400.0, 240.0), &view);
        g.on_pointer_move(P1, Point::new(500.0, 240.0), &mut view, surface);
        let world_after_pinch = view.world();

        g.on_pointer_up(P0, Point::new(300.0, 240.0), &mut view, surface);
        // The first move of the demoted pan with zero displacement must not
        // move the view at all.
        g.on_pointer_move(P1, Point::new(500.0, 240.0), &mut view, surface);
        assert_eq!(view.world(), world_after_pinch);

        // And its release is never a click: the pinch already "moved".
        let effect = g.on_pointer_up(P1, Point::new(500.0, 240.0), &mut view, surface);
        assert_eq!(effect, GestureEffect::None);
    }

    #[test]
    fn cancel_clears_gesture_without_click() {
        let (mut view, surface, mut g) = setup();
        g.on_pointer_down(P0, Point::new(100.0, 100.0), &view);
        g.on_pointer_cancel(P0, &view);

        assert!(g.is_idle());
        assert_eq!(g.pointer_count(), 0);
        // A stray move for the vanished pointer is ignored.
        let effect = g.on_pointer_move(P0, Point::new(150.0, 100.0), &mut view, surface);
        assert_eq!(effect, GestureEffect::None);
    }

    #[test]
    fn hover_moves_do_not_touch_the_view() {
        let (mut view, surface, mut g) = setup();
        let before = view.world();
        let effect = g.on_pointer_move(P0, Point::new(10.0, 10.0), &mut view, surface);

        assert_eq!(effect, GestureEffect::None);
        assert_eq!(view.world(), before);
        assert!(g.is_idle());
    }
}
