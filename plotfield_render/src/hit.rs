// Copyright 2026 the Plotfield Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pointer queries against the plotted curves.
//!
//! Both queries are pure reads over the scene and the frame transform:
//! - [`hover_target`] answers "which curve is under the pointer" using
//!   vertical world distance at the pointer's X. This is deliberately a
//!   nearest-curve-by-Y heuristic, not true nearest-point-on-curve; it is
//!   cheap, stable under zoom, and matches what users expect when tracing a
//!   graph left to right.
//! - [`click_hit`] answers "which curve did this click land on" with the
//!   stricter screen-space Euclidean distance, since a click commits to
//!   placing a marker.

use kurbo::Point;
use smallvec::SmallVec;

use plotfield_scene::{ExprId, HoverTarget, PlotScene};
use plotfield_view2d::FrameTransform;

/// Hover acceptance tolerance in logical pixels of vertical distance.
const HOVER_TOLERANCE_PX: f64 = 12.0;

/// Click acceptance tolerance in logical pixels of Euclidean distance.
const CLICK_TOLERANCE_PX: f64 = 8.0;

/// A successful click hit: the curve and the sampled world point.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ClickHit {
    /// Curve that was hit.
    pub expr_id: ExprId,
    /// World X of the click.
    pub x: f64,
    /// World Y of the curve at that X.
    pub y: f64,
}

/// Finds the visible curve nearest to `screen_pt` by vertical distance.
///
/// Every visible expression is evaluated at the pointer's world X; the one
/// with the smallest `|f(x) - pointer_y|` wins, provided that distance stays
/// within a density-scaled pixel tolerance. Curves undefined at that X are
/// skipped.
#[must_use]
pub fn hover_target(
    scene: &PlotScene,
    tf: &FrameTransform,
    screen_pt: Point,
) -> Option<HoverTarget> {
    let world_pt = tf.screen_to_world(screen_pt);
    let tolerance_world = HOVER_TOLERANCE_PX * tf.scale() * tf.world_per_pixel_y();

    let mut best: Option<(f64, HoverTarget)> = None;
    for expr in scene.visible_expressions() {
        let Some(y) = expr.sample(world_pt.x) else {
            continue;
        };
        let dist = (y - world_pt.y).abs();
        if best.is_none_or(|(d, _)| dist < d) {
            best = Some((
                dist,
                HoverTarget {
                    expr_id: expr.id,
                    x: world_pt.x,
                    y,
                },
            ));
        }
    }
    best.and_then(|(dist, target)| (dist <= tolerance_world).then_some(target))
}

/// Finds the visible curve nearest to a click, within the click tolerance.
///
/// Candidates are gathered by evaluating every visible expression at the
/// click's world X, mapping each `(x, f(x))` back to screen space, and
/// measuring the screen-space Euclidean distance to the click. The smallest
/// distance wins if it is within the tolerance (scaled by device pixel
/// density); otherwise the click is ignored.
#[must_use]
pub fn click_hit(scene: &PlotScene, tf: &FrameTransform, screen_pt: Point) -> Option<ClickHit> {
    let world_pt = tf.screen_to_world(screen_pt);
    let tolerance_px = CLICK_TOLERANCE_PX * tf.scale();

    let candidates: SmallVec<[(f64, ClickHit); 8]> = scene
        .visible_expressions()
        .filter_map(|expr| {
            let y = expr.sample(world_pt.x)?;
            let on_screen = tf.world_to_screen(Point::new(world_pt.x, y));
            Some((
                on_screen.distance(screen_pt),
                ClickHit {
                    expr_id: expr.id,
                    x: world_pt.x,
                    y,
                },
            ))
        })
        .collect();

    candidates
        .into_iter()
        .min_by(|(a, _), (b, _)| a.total_cmp(b))
        .and_then(|(dist, hit)| (dist <= tolerance_px).then_some(hit))
}
