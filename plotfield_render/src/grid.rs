// Copyright 2026 the Plotfield Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Grid, axis, and tick label generation.

use alloc::vec::Vec;

use kurbo::{BezPath, Point};

use plotfield_view2d::FrameTransform;
use plotfield_view2d::ticks::{format_tick, nice_step};

use crate::ops::{FrameOp, TextAlign};
use crate::style::PlotStyle;

/// Target number of grid divisions across the shorter world span.
const GRID_DIVISIONS: f64 = 10.0;

/// Distance, in logical pixels, that a clamped axis label row keeps from the
/// surface edge so labels stay fully legible with the origin off-screen.
const EDGE_MARGIN_PX: f64 = 18.0;

/// Offset of x-tick labels below the x axis, logical pixels.
const X_LABEL_OFFSET_PX: f64 = 14.0;

/// Offset of y-tick labels left of the y axis, logical pixels.
const Y_LABEL_OFFSET_PX: f64 = 6.0;

/// Appends the grid lines, axis lines, and tick labels for the current view.
pub(crate) fn grid_ops(tf: &FrameTransform, style: &PlotStyle, ops: &mut Vec<FrameOp>) {
    let world = tf.world();
    let scale = tf.scale();
    let step = nice_step(world.width().min(world.height()) / GRID_DIVISIONS);

    let width_px = tf.world_to_screen(Point::new(world.x1, world.y0)).x;
    let height_px = tf.world_to_screen(Point::new(world.x0, world.y0)).y;

    // All minor grid lines go into a single path stroked once.
    let mut grid = BezPath::new();
    for x in multiples_within(world.x0, world.x1, step) {
        let sx = tf.world_to_screen(Point::new(x, 0.0)).x;
        grid.move_to(Point::new(sx, 0.0));
        grid.line_to(Point::new(sx, height_px));
    }
    for y in multiples_within(world.y0, world.y1, step) {
        let sy = tf.world_to_screen(Point::new(0.0, y)).y;
        grid.move_to(Point::new(0.0, sy));
        grid.line_to(Point::new(width_px, sy));
    }
    ops.push(FrameOp::StrokePath {
        path: grid,
        color: style.grid_color,
        width: style.grid_width * scale,
    });

    // Axis lines, only where the origin's row/column is actually visible.
    let mut axes = BezPath::new();
    if world.x0 <= 0.0 && 0.0 <= world.x1 {
        let sx = tf.world_to_screen(Point::ORIGIN).x;
        axes.move_to(Point::new(sx, 0.0));
        axes.line_to(Point::new(sx, height_px));
    }
    if world.y0 <= 0.0 && 0.0 <= world.y1 {
        let sy = tf.world_to_screen(Point::ORIGIN).y;
        axes.move_to(Point::new(0.0, sy));
        axes.line_to(Point::new(width_px, sy));
    }
    if !axes.elements().is_empty() {
        ops.push(FrameOp::StrokePath {
            path: axes,
            color: style.axis_color,
            width: style.axis_width * scale,
        });
    }

    // Labels sit along the axes; when an axis is off-screen its label row is
    // clamped onto the nearest visible edge instead of disappearing.
    let margin = EDGE_MARGIN_PX * scale;
    let origin = tf.world_to_screen(Point::ORIGIN);
    let label_row_y = clamp_to_band(origin.y, margin, height_px);
    let label_col_x = clamp_to_band(origin.x, margin, width_px);

    for x in multiples_within(world.x0, world.x1, step) {
        // Zero is marked by the axis line itself; labeling it would collide
        // with the y-label column at the origin.
        if x.abs() < step * 1e-6 {
            continue;
        }
        let sx = tf.world_to_screen(Point::new(x, 0.0)).x;
        ops.push(FrameOp::Text {
            text: format_tick(x, step),
            anchor: Point::new(sx, label_row_y + X_LABEL_OFFSET_PX * scale),
            color: style.label_color,
            size: style.label_size * scale,
            align: TextAlign::Center,
        });
    }
    for y in multiples_within(world.y0, world.y1, step) {
        if y.abs() < step * 1e-6 {
            continue;
        }
        let sy = tf.world_to_screen(Point::new(0.0, y)).y;
        ops.push(FrameOp::Text {
            text: format_tick(y, step),
            anchor: Point::new(label_col_x - Y_LABEL_OFFSET_PX * scale, sy),
            color: style.label_color,
            size: style.label_size * scale,
            align: TextAlign::End,
        });
    }
}

/// Clamps `v` into `[margin, extent - margin]`, degrading to the midline
/// when the surface is too small to hold the margin band at all. `f64::clamp`
/// panics on an inverted range, and a tiny-but-valid surface must render, not
/// abort.
fn clamp_to_band(v: f64, margin: f64, extent: f64) -> f64 {
    if extent <= 2.0 * margin {
        extent / 2.0
    } else {
        v.clamp(margin, extent - margin)
    }
}

/// Iterates every multiple of `step` inside `[lo, hi]`, ascending.
fn multiples_within(lo: f64, hi: f64, step: f64) -> impl Iterator<Item = f64> {
    let first = ceil_to_int(lo / step);
    let last = floor_to_int(hi / step);
    (first..=last).map(move |k| k as f64 * step)
}

// `ceil`/`floor` are not available in core; truncation via cast is.

fn ceil_to_int(q: f64) -> i64 {
    let t = q as i64;
    if (t as f64) < q { t + 1 } else { t }
}

fn floor_to_int(q: f64) -> i64 {
    let t = q as i64;
    if (t as f64) > q { t - 1 } else { t }
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use kurbo::Rect;

    use plotfield_view2d::{FrameTransform, SurfaceSize};

    use super::{ceil_to_int, clamp_to_band, floor_to_int, grid_ops, multiples_within};
    use crate::ops::{FrameOp, TextAlign};
    use crate::style::PlotStyle;

    fn ops_for(world: Rect) -> Vec<FrameOp> {
        let tf = FrameTransform::new(world, SurfaceSize::new(400.0, 240.0, 1.0));
        let mut ops = Vec::new();
        grid_ops(&tf, &PlotStyle::default(), &mut ops);
        ops
    }

    #[test]
    fn rounding_helpers_match_math() {
        assert_eq!(ceil_to_int(2.0), 2);
        assert_eq!(ceil_to_int(2.1), 3);
        assert_eq!(ceil_to_int(-2.1), -2);
        assert_eq!(floor_to_int(2.9), 2);
        assert_eq!(floor_to_int(-2.1), -3);
        assert_eq!(floor_to_int(-3.0), -3);
    }

    #[test]
    fn multiples_cover_the_closed_range() {
        let xs: Vec<f64> = multiples_within(-2.5, 2.5, 1.0).collect();
        assert_eq!(xs, [-2.0, -1.0, 0.0, 1.0, 2.0]);

        let xs: Vec<f64> = multiples_within(0.0, 4.0, 2.0).collect();
        assert_eq!(xs, [0.0, 2.0, 4.0]);
    }

    #[test]
    fn axes_present_when_origin_visible() {
        let ops = ops_for(Rect::new(-10.0, -6.0, 10.0, 6.0));
        // Grid path + axis path at minimum.
        let paths = ops
            .iter()
            .filter(|op| matches!(op, FrameOp::StrokePath { .. }))
            .count();
        assert_eq!(paths, 2);
    }

    #[test]
    fn axes_absent_when_origin_off_screen() {
        let ops = ops_for(Rect::new(5.0, 5.0, 25.0, 17.0));
        let paths = ops
            .iter()
            .filter(|op| matches!(op, FrameOp::StrokePath { .. }))
            .count();
        assert_eq!(paths, 1, "only the grid path should be emitted");
    }

    #[test]
    fn labels_clamp_to_visible_edges() {
        // Origin far off to the bottom-left: label rows must still be inside
        // the 400x240 surface.
        let ops = ops_for(Rect::new(50.0, 50.0, 70.0, 62.0));
        for op in &ops {
            if let FrameOp::Text { anchor, .. } = op {
                assert!((0.0..=240.0).contains(&anchor.y), "anchor {anchor:?}");
                assert!((0.0..=400.0).contains(&anchor.x), "anchor {anchor:?}");
            }
        }
        assert!(
            ops.iter().any(|op| matches!(op, FrameOp::Text { .. })),
            "ticks must still be labeled with the origin off-screen"
        );
    }

    #[test]
    fn zero_is_never_labeled() {
        let ops = ops_for(Rect::new(-10.0, -6.0, 10.0, 6.0));
        for op in &ops {
            if let FrameOp::Text { text, .. } = op {
                assert_ne!(text.as_str(), "0");
            }
        }
    }

    #[test]
    fn clamp_band_degrades_to_the_midline() {
        assert_eq!(clamp_to_band(100.0, 18.0, 240.0), 100.0);
        assert_eq!(clamp_to_band(-50.0, 18.0, 240.0), 18.0);
        assert_eq!(clamp_to_band(500.0, 18.0, 240.0), 222.0);
        // Extent smaller than twice the margin: no band exists.
        assert_eq!(clamp_to_band(100.0, 18.0, 30.0), 15.0);
        assert_eq!(clamp_to_band(100.0, 18.0, 36.0), 18.0);
    }

    #[test]
    fn surfaces_smaller_than_the_label_margin_still_render() {
        // Both extents are below twice the 18 px edge margin in turn; a
        // valid-but-tiny surface must produce a frame, not abort.
        for surface in [
            SurfaceSize::new(400.0, 30.0, 1.0),
            SurfaceSize::new(30.0, 240.0, 1.0),
            SurfaceSize::new(20.0, 20.0, 1.0),
        ] {
            let tf = FrameTransform::new(Rect::new(-10.0, -6.0, 10.0, 6.0), surface);
            let mut ops = Vec::new();
            grid_ops(&tf, &PlotStyle::default(), &mut ops);
            assert!(
                ops.iter().any(|op| matches!(op, FrameOp::Text { .. })),
                "labels expected for {surface:?}"
            );
            for op in &ops {
                if let FrameOp::Text { anchor, .. } = op {
                    assert!(anchor.x.is_finite() && anchor.y.is_finite());
                }
            }
        }
    }

    #[test]
    fn y_labels_right_align_toward_the_axis() {
        let ops = ops_for(Rect::new(-10.0, -6.0, 10.0, 6.0));
        assert!(ops.iter().any(|op| matches!(
            op,
            FrameOp::Text {
                align: TextAlign::End,
                ..
            }
        )));
    }
}
