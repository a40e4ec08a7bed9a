// Copyright 2026 the Plotfield Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Plotfield Render: backend-agnostic frame IR and the plot render pipeline.
//!
//! This crate turns a scene (`plotfield_scene`) seen through a viewport
//! (`plotfield_view2d`) into a [`FramePicture`]: a flat list of plain-old-data
//! draw operations ([`FrameOp`]) over kurbo paths and peniko colors. A
//! concrete raster target implements [`PlotBackend`] and replays the ops;
//! nothing in the pipeline touches pixels directly.
//!
//! # Pipeline
//!
//! [`render_frame`] paints, in order:
//! 1. A background clear.
//! 2. Grid lines and axes (when the view's grid flag is on), with tick
//!    labels that collapse onto the nearest visible edge when the origin is
//!    off-screen.
//! 3. Each visible expression's curve, sampled at sub-pixel resolution with
//!    a new subpath started at every discontinuity, so asymptotes are never
//!    drawn as vertical streaks.
//! 4. Placed markers with their labels.
//!
//! # Hit testing
//!
//! The [`hit`] module answers the two pointer queries against the same scene
//! and transform the renderer uses: [`hit::hover_target`] (nearest curve by
//! vertical distance) and [`hit::click_hit`] (nearest curve by screen-space
//! distance, within a density-scaled tolerance). Both only read the scene.
//!
//! # Example
//!
//! ```rust
//! use kurbo::Rect;
//! use peniko::Color;
//! use plotfield_render::{PlotStyle, render_frame};
//! use plotfield_scene::{ExprId, Expression, PlotScene};
//! use plotfield_view2d::{PlotView, SurfaceSize};
//!
//! let mut scene = PlotScene::new();
//! scene.insert(Expression::new(
//!     ExprId(0),
//!     "x^2",
//!     Color::WHITE,
//!     Box::new(|x: f64| Ok(x * x)),
//! ));
//!
//! let view = PlotView::new(Rect::new(-10.0, -6.0, 10.0, 6.0));
//! let surface = SurfaceSize::new(800.0, 480.0, 1.0);
//! let picture = render_frame(&scene, &view, surface, &PlotStyle::default());
//! assert!(!picture.ops.is_empty());
//! ```
//!
//! This crate is `no_std` + `alloc`.

#![no_std]

extern crate alloc;

pub mod hit;

mod curve;
mod grid;
mod ops;
mod pipeline;
mod style;

pub use curve::{curve_screen_path, subpath_count};
pub use ops::{FrameOp, FramePicture, PlotBackend, TextAlign};
pub use pipeline::render_frame;
pub use style::PlotStyle;
