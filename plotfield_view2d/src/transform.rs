// Copyright 2026 the Plotfield Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Rect};

/// Logical size and device pixel density of a drawing surface.
///
/// `width` and `height` are in logical (CSS/client) units; `scale` is the
/// device-pixel density. The backing raster is expected to be
/// `width * scale` by `height * scale` physical pixels, and all screen
/// coordinates in this crate are physical pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SurfaceSize {
    /// Logical width of the surface.
    pub width: f64,
    /// Logical height of the surface.
    pub height: f64,
    /// Device pixels per logical unit.
    pub scale: f64,
}

impl SurfaceSize {
    /// Creates a surface size from logical dimensions and a density.
    #[must_use]
    pub const fn new(width: f64, height: f64, scale: f64) -> Self {
        Self {
            width,
            height,
            scale,
        }
    }

    /// Physical pixel width of the backing raster.
    #[must_use]
    pub fn pixel_width(&self) -> f64 {
        self.width * self.scale
    }

    /// Physical pixel height of the backing raster.
    #[must_use]
    pub fn pixel_height(&self) -> f64 {
        self.height * self.scale
    }

    /// Width-over-height ratio of the backing raster.
    #[must_use]
    pub fn pixel_aspect(&self) -> f64 {
        self.pixel_width() / self.pixel_height()
    }

    /// Returns `true` if the surface can actually host a frame: all fields
    /// finite, dimensions and density positive.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.width.is_finite()
            && self.height.is_finite()
            && self.scale.is_finite()
            && self.width > 0.0
            && self.height > 0.0
            && self.scale > 0.0
    }
}

/// Bidirectional world ↔ screen mapping for one frame.
///
/// The transform is a pure function of the world rectangle and the surface
/// size; it is cheap to build and is expected to be rebuilt whenever either
/// input changes rather than kept in sync incrementally.
///
/// Screen space is in physical pixels with Y increasing downward, so the
/// world's `y1` (top) edge maps to screen `y = 0`.
///
/// Invariant: `screen_to_world(world_to_screen(p)) == p` within
/// floating-point tolerance, for any `p` in (and slightly beyond) the world
/// rectangle.
#[derive(Clone, Copy, Debug)]
pub struct FrameTransform {
    world: Rect,
    pixel_width: f64,
    pixel_height: f64,
    scale: f64,
}

impl FrameTransform {
    /// Creates a transform mapping `world` onto the full surface.
    #[must_use]
    pub fn new(world: Rect, surface: SurfaceSize) -> Self {
        Self {
            world,
            pixel_width: surface.pixel_width(),
            pixel_height: surface.pixel_height(),
            scale: surface.scale,
        }
    }

    /// Returns the world rectangle this transform maps from.
    #[must_use]
    pub fn world(&self) -> Rect {
        self.world
    }

    /// Device pixels per logical unit of the underlying surface.
    #[must_use]
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Converts a world-space point into physical screen pixels.
    #[must_use]
    pub fn world_to_screen(&self, pt: Point) -> Point {
        let sx = (pt.x - self.world.x0) * self.pixel_width / self.world.width();
        // Screen Y grows downward; world Y grows upward.
        let sy = (self.world.y1 - pt.y) * self.pixel_height / self.world.height();
        Point::new(sx, sy)
    }

    /// Converts a physical screen pixel position into world coordinates.
    #[must_use]
    pub fn screen_to_world(&self, pt: Point) -> Point {
        let x = self.world.x0 + pt.x * self.world.width() / self.pixel_width;
        let y = self.world.y1 - pt.y * self.world.height() / self.pixel_height;
        Point::new(x, y)
    }

    /// World units covered by one horizontal physical pixel.
    ///
    /// Useful for choosing sampling steps and stroke widths in world units.
    #[must_use]
    pub fn world_per_pixel_x(&self) -> f64 {
        self.world.width() / self.pixel_width
    }

    /// World units covered by one vertical physical pixel.
    #[must_use]
    pub fn world_per_pixel_y(&self) -> f64 {
        self.world.height() / self.pixel_height
    }
}
