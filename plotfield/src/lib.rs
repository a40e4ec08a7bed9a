// Copyright 2026 the Plotfield Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Plotfield: an interactive 2D function plotter as a retained widget.
//!
//! [`Plotter`] composes the kernel crates into one embeddable type: a
//! [`PlotView`] for the visible world rectangle, a [`PlotScene`] of compiled
//! expressions and markers, a gesture state machine for pan/zoom/pinch, a
//! layout reconciler that keeps world units square, and a backend-agnostic
//! frame renderer.
//!
//! The embedder owns the event loop and the raster surface. It feeds raw
//! input (pointer, wheel, resize, escape) into the plotter, drains the
//! [`PlotEvent`] queue for its own UI (hover readouts, marker tables), and
//! paints whenever [`Plotter::needs_frame`] says so:
//!
//! ```rust
//! use kurbo::Point;
//! use peniko::Color;
//! use plotfield::{ExprId, Expression, Plotter, SurfaceSize};
//!
//! let mut plotter = Plotter::new(SurfaceSize::new(800.0, 480.0, 1.0))?;
//! plotter.insert_expression(Expression::new(
//!     ExprId(0),
//!     "x^2",
//!     Color::from_rgb8(0x4f, 0xc3, 0xf7),
//!     Box::new(|x: f64| Ok(x * x)),
//! ));
//!
//! plotter.wheel(Point::new(400.0, 240.0), -1.0);
//! assert!(plotter.needs_frame());
//! let picture = plotter.take_frame().unwrap();
//! assert!(!picture.ops.is_empty());
//! # Ok::<(), plotfield::PlotError>(())
//! ```
//!
//! Rendering produces a [`FramePicture`] of plain draw ops; replay it on any
//! [`PlotBackend`] implementation to reach an actual screen.
//!
//! This crate is `no_std`.

#![no_std]

extern crate alloc;

mod plotter;

pub use plotter::{PlotError, PlotEvent, Plotter};

pub use plotfield_gesture::PointerId;
pub use plotfield_render::{FrameOp, FramePicture, PlotBackend, PlotStyle, TextAlign};
pub use plotfield_scene::{CurveFn, EvalError, ExprId, Expression, Marker, PlotScene};
pub use plotfield_view2d::{FrameTransform, PlotView, SurfaceSize};
