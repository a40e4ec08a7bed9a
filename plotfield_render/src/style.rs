// Copyright 2026 the Plotfield Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use peniko::Color;

/// Colors and logical sizes used when painting a frame.
///
/// Sizes are in logical pixels and are multiplied by the surface's device
/// pixel density at render time, so a style renders identically on 1x and 2x
/// displays.
#[derive(Clone, Debug, PartialEq)]
pub struct PlotStyle {
    /// Surface background.
    pub background: Color,
    /// Minor grid lines.
    pub grid_color: Color,
    /// The `x = 0` / `y = 0` axis lines.
    pub axis_color: Color,
    /// Tick and marker label text.
    pub label_color: Color,
    /// Grid line width, logical pixels.
    pub grid_width: f64,
    /// Axis line width, logical pixels.
    pub axis_width: f64,
    /// Curve stroke width, logical pixels.
    pub curve_width: f64,
    /// Marker circle radius, logical pixels.
    pub marker_radius: f64,
    /// Marker outline color.
    pub marker_outline: Color,
    /// Label font size, logical pixels.
    pub label_size: f64,
}

impl Default for PlotStyle {
    fn default() -> Self {
        Self {
            background: Color::from_rgb8(0x12, 0x12, 0x16),
            grid_color: Color::from_rgb8(0x2c, 0x2c, 0x34),
            axis_color: Color::from_rgb8(0x6a, 0x6a, 0x78),
            label_color: Color::from_rgb8(0xb0, 0xb0, 0xbc),
            grid_width: 1.0,
            axis_width: 1.5,
            curve_width: 2.0,
            marker_radius: 4.0,
            marker_outline: Color::from_rgb8(0xf2, 0xf2, 0xf6),
            label_size: 12.0,
        }
    }
}
