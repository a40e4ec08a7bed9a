// Copyright 2026 the Plotfield Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Plotfield View 2D: headless viewport primitives for function plotting.
//!
//! This crate provides the small, headless models at the bottom of the
//! Plotfield stack:
//! - [`PlotView`]: the visible world-space rectangle plus grid flag, mutated
//!   only through vetted operations (`set_world_rect`, `zoom_about`,
//!   `pan_world`) so every mutation path passes the same invariant checks.
//! - [`SurfaceSize`]: the drawing surface's logical size and device pixel
//!   density.
//! - [`FrameTransform`]: the bidirectional mapping between world coordinates
//!   and device-pixel screen coordinates for one frame.
//! - [`ticks`]: the 1-2-5 "nice step" grid heuristic and tick label
//!   formatting.
//!
//! It does **not** own any expression list, rendering backend, or input
//! handling. Callers are expected to:
//! - Keep curves and markers in `plotfield_scene`.
//! - Build a [`FrameTransform`] per frame from the current view and surface.
//! - Wire input events into [`PlotView`] mutations at a higher layer
//!   (`plotfield_gesture`).
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Rect};
//! use plotfield_view2d::{FrameTransform, PlotView, SurfaceSize};
//!
//! let mut view = PlotView::new(Rect::new(-10.0, -6.0, 10.0, 6.0));
//! let surface = SurfaceSize::new(800.0, 480.0, 2.0);
//!
//! // Zoom in around the world origin; both spans shrink by 10%.
//! view.zoom_about(Point::ORIGIN, 0.9);
//!
//! // Convert a device-space point into world space (for hit testing, etc.).
//! let tf = FrameTransform::new(view.world(), surface);
//! let world_pt = tf.screen_to_world(Point::new(800.0, 480.0));
//! ```
//!
//! ## Design notes
//!
//! - The view stores explicit world bounds rather than a zoom/pan pair: the
//!   plot's aspect-ratio contract ("one world unit is the same number of
//!   pixels on both axes") is enforced by rewriting one span, which is most
//!   direct on explicit bounds.
//! - Screen Y increases downward while mathematical Y increases upward; the
//!   transform owns that inversion so nothing else in the stack has to.
//! - Degenerate mutations (non-finite or non-positive spans, zero or
//!   negative zoom factors) are rejected as no-ops, keeping the previous
//!   valid state.
//!
//! This crate is `no_std`.

#![no_std]

extern crate alloc;

pub mod ticks;

mod transform;
mod view;

pub use transform::{FrameTransform, SurfaceSize};
pub use view::PlotView;
