// Copyright 2026 the Plotfield Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Plotfield Gesture: a pointer state machine for plot navigation.
//!
//! [`GestureController`] interprets raw pointer and wheel input into
//! mutations of a [`PlotView`]. It is a small, explicit state machine:
//!
//! - `Idle`: no pointer down. Pointer moves are hover material for the
//!   caller; the controller does not act on them.
//! - `Panning`: one active pointer (mouse drag and single touch are the same
//!   thing here). The view is re-derived on every move from a snapshot taken
//!   at press time, so panning never accumulates drift.
//! - `Pinching`: two active pointers. Zoom is applied incrementally, move by
//!   move, anchored at the world position of the pointer midpoint.
//!
//! The controller accepts pre-computed screen positions rather than any
//! particular event type, in the same spirit as the rest of the stack:
//! translating a windowing system's (or browser's) events into these calls
//! is the embedder's one-liner.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Rect};
//! use plotfield_gesture::{GestureController, GestureEffect, PointerId};
//! use plotfield_view2d::{PlotView, SurfaceSize};
//!
//! let mut view = PlotView::new(Rect::new(-10.0, -6.0, 10.0, 6.0));
//! let surface = SurfaceSize::new(800.0, 480.0, 1.0);
//! let mut gestures = GestureController::new();
//!
//! // Wheel tick toward the user at the surface center zooms out by 1.1.
//! let effect = gestures.on_wheel(Point::new(400.0, 240.0), 1.0, &mut view, surface);
//! assert_eq!(effect, GestureEffect::ViewChanged);
//! assert!((view.span_x() - 22.0).abs() < 1e-9);
//!
//! // A press and stationary release is a click, not a pan.
//! let p = PointerId(1);
//! gestures.on_pointer_down(p, Point::new(100.0, 100.0), &view);
//! let effect = gestures.on_pointer_up(p, Point::new(100.0, 100.0), &mut view, surface);
//! assert!(matches!(effect, GestureEffect::Click { .. }));
//! ```
//!
//! This crate is `no_std`.

#![no_std]

mod controller;

pub use controller::{GestureController, GestureEffect, PointerId};
