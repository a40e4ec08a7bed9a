// Copyright 2026 the Plotfield Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;
use alloc::vec::Vec;

use kurbo::{BezPath, Point};
use peniko::Color;

/// Horizontal alignment of a text label relative to its anchor.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TextAlign {
    /// Anchor is the left edge of the text.
    Start,
    /// Anchor is the horizontal center of the text.
    Center,
    /// Anchor is the right edge of the text.
    End,
}

/// A single draw operation of a plot frame.
///
/// All coordinates are physical screen pixels; all geometry has already been
/// mapped through the frame's world-to-screen transform. Backends replay ops
/// strictly in order with no retained state between them, which keeps the
/// trait surface minimal.
#[derive(Clone, Debug)]
pub enum FrameOp {
    /// Fill the whole surface with `color`.
    Clear {
        /// Background color.
        color: Color,
    },
    /// Stroke a path (grid bundle, axis lines, or one curve's segments).
    StrokePath {
        /// Path in screen pixels; may contain many subpaths.
        path: BezPath,
        /// Stroke color.
        color: Color,
        /// Stroke width in physical pixels.
        width: f64,
    },
    /// Fill a circle (marker body).
    FillCircle {
        /// Center in screen pixels.
        center: Point,
        /// Radius in physical pixels.
        radius: f64,
        /// Fill color.
        color: Color,
    },
    /// Stroke a circle outline (marker rim).
    StrokeCircle {
        /// Center in screen pixels.
        center: Point,
        /// Radius in physical pixels.
        radius: f64,
        /// Stroke color.
        color: Color,
        /// Stroke width in physical pixels.
        width: f64,
    },
    /// Draw a text label (tick values, marker captions).
    Text {
        /// Label text.
        text: String,
        /// Anchor position in screen pixels (baseline).
        anchor: Point,
        /// Text color.
        color: Color,
        /// Font size in physical pixels.
        size: f64,
        /// Horizontal alignment relative to the anchor.
        align: TextAlign,
    },
}

/// One rendered frame: an ordered list of [`FrameOp`]s.
///
/// Pictures are cheap to inspect in tests and trivially replayable onto any
/// [`PlotBackend`].
#[derive(Debug, Default)]
pub struct FramePicture {
    /// Draw operations in paint order.
    pub ops: Vec<FrameOp>,
}

impl FramePicture {
    /// Replays every op onto `backend`, in order.
    pub fn replay<B: PlotBackend + ?Sized>(&self, backend: &mut B) {
        for op in &self.ops {
            backend.apply(op);
        }
    }

    /// Iterates the stroked paths of the frame (grid, axes, curves).
    pub fn stroked_paths(&self) -> impl Iterator<Item = &BezPath> {
        self.ops.iter().filter_map(|op| match op {
            FrameOp::StrokePath { path, .. } => Some(path),
            _ => None,
        })
    }
}

/// A raster target that can replay [`FrameOp`]s.
///
/// Implementations exist outside this workspace (an HTML canvas, a CPU
/// rasterizer, a test recorder); the pipeline never needs to know which.
pub trait PlotBackend {
    /// Applies one draw operation.
    fn apply(&mut self, op: &FrameOp);
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use kurbo::BezPath;
    use peniko::Color;

    use super::{FrameOp, FramePicture, PlotBackend};

    #[derive(Default)]
    struct CountingBackend {
        seen: Vec<&'static str>,
    }

    impl PlotBackend for CountingBackend {
        fn apply(&mut self, op: &FrameOp) {
            self.seen.push(match op {
                FrameOp::Clear { .. } => "clear",
                FrameOp::StrokePath { .. } => "path",
                FrameOp::FillCircle { .. } => "fill",
                FrameOp::StrokeCircle { .. } => "stroke",
                FrameOp::Text { .. } => "text",
            });
        }
    }

    #[test]
    fn replay_preserves_order() {
        let picture = FramePicture {
            ops: alloc::vec![
                FrameOp::Clear {
                    color: Color::BLACK
                },
                FrameOp::StrokePath {
                    path: BezPath::new(),
                    color: Color::WHITE,
                    width: 1.0,
                },
            ],
        };

        let mut backend = CountingBackend::default();
        picture.replay(&mut backend);
        assert_eq!(backend.seen, ["clear", "path"]);
    }
}
