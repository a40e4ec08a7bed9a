// Copyright 2026 the Plotfield Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::format;
use alloc::vec::Vec;

use kurbo::{Point, Vec2};

use plotfield_scene::PlotScene;
use plotfield_view2d::{FrameTransform, PlotView, SurfaceSize};

use crate::curve::curve_screen_path;
use crate::grid::grid_ops;
use crate::ops::{FrameOp, FramePicture, TextAlign};
use crate::style::PlotStyle;

/// Offset of a marker's caption from its circle, logical pixels, so the
/// label never occludes the sampled point.
const MARKER_LABEL_OFFSET_PX: Vec2 = Vec2::new(8.0, -8.0);

/// Marker outline width, logical pixels.
const MARKER_OUTLINE_PX: f64 = 1.5;

/// Renders one complete frame of the plot into a [`FramePicture`].
///
/// Paint order is background, grid and axes (if the view's grid flag is on),
/// visible curves, then markers, so markers always read on top of the curves
/// they annotate. The picture holds no reference to its inputs and can be
/// replayed on any [`PlotBackend`](crate::PlotBackend) at any later time.
#[must_use]
pub fn render_frame(
    scene: &PlotScene,
    view: &PlotView,
    surface: SurfaceSize,
    style: &PlotStyle,
) -> FramePicture {
    let tf = FrameTransform::new(view.world(), surface);
    let scale = surface.scale;
    let mut ops = Vec::new();

    ops.push(FrameOp::Clear {
        color: style.background,
    });

    if view.grid() {
        grid_ops(&tf, style, &mut ops);
    }

    for expr in scene.visible_expressions() {
        let path = curve_screen_path(expr, &tf);
        if path.elements().is_empty() {
            continue;
        }
        ops.push(FrameOp::StrokePath {
            path,
            color: expr.color,
            width: style.curve_width * scale,
        });
    }

    for marker in scene.markers() {
        let center = tf.world_to_screen(Point::new(marker.x, marker.y));
        ops.push(FrameOp::FillCircle {
            center,
            radius: style.marker_radius * scale,
            color: marker.color,
        });
        ops.push(FrameOp::StrokeCircle {
            center,
            radius: style.marker_radius * scale,
            color: style.marker_outline,
            width: MARKER_OUTLINE_PX * scale,
        });
        ops.push(FrameOp::Text {
            text: format!("{} ({:.2}, {:.2})", marker.label, marker.x, marker.y),
            anchor: center + MARKER_LABEL_OFFSET_PX * scale,
            color: style.label_color,
            size: style.label_size * scale,
            align: TextAlign::Start,
        });
    }

    FramePicture { ops }
}
