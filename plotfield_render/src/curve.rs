// Copyright 2026 the Plotfield Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Curve sampling with discontinuity splitting.

use kurbo::{BezPath, PathEl, Point};

use plotfield_scene::Expression;
use plotfield_view2d::FrameTransform;

/// Samples taken per horizontal pixel.
///
/// One sample per pixel already looks continuous for gentle curves; the
/// oversample smooths steep sections without a measurable cost.
const CURVE_OVERSAMPLE: f64 = 2.0;

/// A sample whose magnitude exceeds this many visible Y-spans is treated as
/// undefined. This is what keeps `tan(x)` and `1/x` from being stroked as a
/// vertical streak across the surface: the branches on either side of an
/// asymptote end up in separate subpaths.
const MAX_MAGNITUDE_SPANS: f64 = 10.0;

/// Horizontal overscan past the right edge, in physical pixels, so a curve
/// never visibly truncates mid-pan before the next frame lands.
const RIGHT_OVERSCAN_PX: f64 = 8.0;

/// Samples `expr` across the transform's world width and returns the curve
/// as a screen-space path.
///
/// The path contains one subpath per continuous run of samples. A run is
/// broken wherever the guarded evaluation reports "undefined" (fault or
/// non-finite value) or the magnitude blows past the visible range, and a
/// new subpath starts at the next defined sample.
#[must_use]
pub fn curve_screen_path(expr: &Expression, tf: &FrameTransform) -> BezPath {
    let world = tf.world();
    let step = tf.world_per_pixel_x() / CURVE_OVERSAMPLE;
    let overscan = RIGHT_OVERSCAN_PX * tf.world_per_pixel_x();
    let magnitude_limit = MAX_MAGNITUDE_SPANS * world.height();

    // Index-based stepping avoids accumulating float error over thousands of
    // samples; `+ 2` covers the partial step at the far edge.
    let steps = ((world.width() + overscan) / step) as usize + 2;

    let mut path = BezPath::new();
    let mut pen_down = false;
    for i in 0..steps {
        let x = world.x0 + i as f64 * step;
        let sample = expr.sample(x).filter(|y| y.abs() <= magnitude_limit);
        match sample {
            Some(y) => {
                let p = tf.world_to_screen(Point::new(x, y));
                if pen_down {
                    path.line_to(p);
                } else {
                    path.move_to(p);
                    pen_down = true;
                }
            }
            None => pen_down = false,
        }
    }
    path
}

/// Number of subpaths (continuous segments) in a path.
#[must_use]
pub fn subpath_count(path: &BezPath) -> usize {
    path.elements()
        .iter()
        .filter(|el| matches!(el, PathEl::MoveTo(_)))
        .count()
}
