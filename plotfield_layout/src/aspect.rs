// Copyright 2026 the Plotfield Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use plotfield_view2d::{PlotView, SurfaceSize};

/// Relative aspect mismatch below which the view is left untouched.
///
/// Rewriting the view for sub-epsilon drift would emit spurious "changed"
/// signals on every pan.
const ASPECT_EPSILON: f64 = 1e-9;

/// Reconciles the view's world aspect ratio with the surface's pixel aspect
/// ratio, returning `true` if the view was adjusted.
///
/// When the world is wider than the surface (more world units per pixel on X
/// than on Y), the X span is held and the Y span is grown to match,
/// re-centered on the current Y midpoint; when taller, the reverse. Either
/// way, one world unit afterwards covers the same number of pixels on both
/// axes.
///
/// Invalid surfaces are ignored; a transiently zero-sized surface during a
/// resize must not corrupt the view.
///
/// # Example
///
/// ```rust
/// use kurbo::Rect;
/// use plotfield_layout::enforce_square_units;
/// use plotfield_view2d::{PlotView, SurfaceSize};
///
/// // A square world on a 2:1 surface is "taller" than the surface: the X
/// // span doubles around its midpoint.
/// let mut view = PlotView::new(Rect::new(-5.0, -5.0, 5.0, 5.0));
/// let changed = enforce_square_units(&mut view, SurfaceSize::new(800.0, 400.0, 1.0));
/// assert!(changed);
/// assert_eq!(view.world(), Rect::new(-10.0, -5.0, 10.0, 5.0));
/// ```
pub fn enforce_square_units(view: &mut PlotView, surface: SurfaceSize) -> bool {
    if !surface.is_valid() {
        return false;
    }
    let surface_aspect = surface.pixel_aspect();
    let world_aspect = view.span_x() / view.span_y();
    if (world_aspect - surface_aspect).abs() <= ASPECT_EPSILON * surface_aspect {
        return false;
    }

    let mut world = view.world();
    if world_aspect > surface_aspect {
        // Wider than the surface: hold X, expand Y around its midpoint.
        let span_y = view.span_x() / surface_aspect;
        let mid_y = (world.y0 + world.y1) / 2.0;
        world.y0 = mid_y - span_y / 2.0;
        world.y1 = mid_y + span_y / 2.0;
    } else {
        // Taller than the surface: hold Y, expand X around its midpoint.
        let span_x = view.span_y() * surface_aspect;
        let mid_x = (world.x0 + world.x1) / 2.0;
        world.x0 = mid_x - span_x / 2.0;
        world.x1 = mid_x + span_x / 2.0;
    }
    view.set_world_rect(world)
}
