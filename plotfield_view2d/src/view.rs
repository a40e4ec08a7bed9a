// Copyright 2026 the Plotfield Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Rect, Vec2};

/// The visible world-space rectangle of a plot, plus its grid flag.
///
/// `PlotView` is the single owned piece of view state that wheel, drag,
/// pinch, and resize handlers all mutate. Raw field writes are not exposed;
/// every mutation goes through [`PlotView::set_world_rect`],
/// [`PlotView::zoom_about`], or [`PlotView::pan_world`], which all enforce
/// the same invariant: both spans stay positive and finite.
///
/// A rejected mutation is a silent no-op that keeps the previous valid
/// bounds. This is local self-healing, not an error the caller must handle,
/// so the mutation methods return `bool` rather than `Result`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlotView {
    world: Rect,
    grid: bool,
}

impl PlotView {
    /// World rectangle used when a caller supplies degenerate bounds.
    pub const DEFAULT_WORLD: Rect = Rect::new(-10.0, -6.0, 10.0, 6.0);

    /// Creates a view over `world` with the grid enabled.
    ///
    /// If `world` has a non-positive or non-finite span, the view falls back
    /// to [`PlotView::DEFAULT_WORLD`].
    #[must_use]
    pub fn new(world: Rect) -> Self {
        let world = if rect_is_valid(world) {
            world
        } else {
            Self::DEFAULT_WORLD
        };
        Self { world, grid: true }
    }

    /// Returns the current world rectangle.
    #[must_use]
    pub fn world(&self) -> Rect {
        self.world
    }

    /// Returns `true` if the grid and axes should be drawn.
    #[must_use]
    pub fn grid(&self) -> bool {
        self.grid
    }

    /// Enables or disables the grid.
    pub fn set_grid(&mut self, on: bool) {
        self.grid = on;
    }

    /// Returns the world-space width of the view.
    #[must_use]
    pub fn span_x(&self) -> f64 {
        self.world.width()
    }

    /// Returns the world-space height of the view.
    #[must_use]
    pub fn span_y(&self) -> f64 {
        self.world.height()
    }

    /// Returns the world-space center of the view.
    #[must_use]
    pub fn center(&self) -> Point {
        self.world.center()
    }

    /// Replaces the world bounds atomically.
    ///
    /// Returns `false` (leaving the view unchanged) if either span of `rect`
    /// would be non-positive or non-finite.
    pub fn set_world_rect(&mut self, rect: Rect) -> bool {
        if !rect_is_valid(rect) {
            return false;
        }
        self.world = rect;
        true
    }

    /// Rescales both spans by `factor` while holding `anchor` (in world
    /// coordinates) fixed on screen.
    ///
    /// A factor below `1.0` zooms in, above `1.0` zooms out. The anchor keeps
    /// its fractional position inside the view, which is what keeps it under
    /// the cursor: the new bounds are re-centered around `anchor`
    /// proportionally to its offset from the old bounds.
    ///
    /// Returns `false` (leaving the view unchanged) if `factor` is
    /// non-positive or non-finite, or if the scaled bounds would be.
    pub fn zoom_about(&mut self, anchor: Point, factor: f64) -> bool {
        if !(factor.is_finite() && factor > 0.0) {
            return false;
        }
        // Fractional position of the anchor inside the current bounds. The
        // anchor may lie outside [0, 1]; the math still holds it fixed.
        let fx = (anchor.x - self.world.x0) / self.span_x();
        let fy = (anchor.y - self.world.y0) / self.span_y();
        let new_span_x = self.span_x() * factor;
        let new_span_y = self.span_y() * factor;
        let x0 = anchor.x - fx * new_span_x;
        let y0 = anchor.y - fy * new_span_y;
        self.set_world_rect(Rect::new(x0, y0, x0 + new_span_x, y0 + new_span_y))
    }

    /// Translates the view by a world-space delta.
    ///
    /// Used by drag panning: a screen-space pointer delta is converted to
    /// world units by the caller and applied here as a translation of the
    /// bounds. Returns `false` if the translated bounds would be non-finite.
    pub fn pan_world(&mut self, delta: Vec2) -> bool {
        self.set_world_rect(self.world + delta)
    }
}

impl Default for PlotView {
    fn default() -> Self {
        Self::new(Self::DEFAULT_WORLD)
    }
}

fn rect_is_valid(rect: Rect) -> bool {
    rect.x0.is_finite()
        && rect.y0.is_finite()
        && rect.x1.is_finite()
        && rect.y1.is_finite()
        && rect.width() > 0.0
        && rect.height() > 0.0
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Rect, Vec2};

    use super::PlotView;

    #[test]
    fn degenerate_construction_falls_back_to_default() {
        let view = PlotView::new(Rect::new(3.0, 0.0, 3.0, 1.0));
        assert_eq!(view.world(), PlotView::DEFAULT_WORLD);

        let view = PlotView::new(Rect::new(0.0, f64::NAN, 1.0, 1.0));
        assert_eq!(view.world(), PlotView::DEFAULT_WORLD);
    }

    #[test]
    fn set_world_rect_rejects_degenerate_bounds() {
        let mut view = PlotView::default();
        let before = view.world();

        assert!(!view.set_world_rect(Rect::new(0.0, 0.0, 0.0, 1.0)));
        assert!(!view.set_world_rect(Rect::new(0.0, 0.0, 1.0, f64::INFINITY)));
        assert!(!view.set_world_rect(Rect::new(2.0, 0.0, 1.0, 1.0)));
        assert_eq!(view.world(), before);

        assert!(view.set_world_rect(Rect::new(-1.0, -1.0, 1.0, 1.0)));
        assert_eq!(view.world(), Rect::new(-1.0, -1.0, 1.0, 1.0));
    }

    #[test]
    fn zoom_about_center_scales_spans_exactly() {
        let mut view = PlotView::new(Rect::new(-10.0, -6.0, 10.0, 6.0));
        assert!(view.zoom_about(Point::ORIGIN, 0.9));

        assert!((view.span_x() - 18.0).abs() < 1e-12);
        assert!((view.span_y() - 10.8).abs() < 1e-12);
        assert!(view.center().distance(Point::ORIGIN) < 1e-12);
    }

    #[test]
    fn zoom_about_holds_anchor_fraction_fixed() {
        let mut view = PlotView::new(Rect::new(0.0, 0.0, 10.0, 10.0));
        let anchor = Point::new(2.0, 8.0);
        let world = view.world();
        let fx = (anchor.x - world.x0) / world.width();
        let fy = (anchor.y - world.y0) / world.height();

        assert!(view.zoom_about(anchor, 2.5));

        let world = view.world();
        let fx2 = (anchor.x - world.x0) / world.width();
        let fy2 = (anchor.y - world.y0) / world.height();
        assert!((fx - fx2).abs() < 1e-12);
        assert!((fy - fy2).abs() < 1e-12);
        assert!((world.width() - 25.0).abs() < 1e-12);
    }

    #[test]
    fn zoom_about_rejects_bad_factors() {
        let mut view = PlotView::default();
        let before = view.world();

        assert!(!view.zoom_about(Point::ORIGIN, 0.0));
        assert!(!view.zoom_about(Point::ORIGIN, -2.0));
        assert!(!view.zoom_about(Point::ORIGIN, f64::NAN));
        assert_eq!(view.world(), before);
    }

    #[test]
    fn pan_world_translates_without_resizing() {
        let mut view = PlotView::new(Rect::new(-5.0, -5.0, 5.0, 5.0));
        assert!(view.pan_world(Vec2::new(3.0, -1.0)));

        assert_eq!(view.world(), Rect::new(-2.0, -6.0, 8.0, 4.0));
        assert!(!view.pan_world(Vec2::new(f64::NAN, 0.0)));
        assert_eq!(view.world(), Rect::new(-2.0, -6.0, 8.0, 4.0));
    }

    #[test]
    fn grid_flag_toggles() {
        let mut view = PlotView::default();
        assert!(view.grid());
        view.set_grid(false);
        assert!(!view.grid());
    }
}
