// Copyright 2026 the Plotfield Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Plotfield Scene: what a plot shows, independent of how it is shown.
//!
//! This crate owns the registry of plotted expressions, the markers users
//! have placed on curves, and the transient hover state. It deliberately
//! knows nothing about viewports, surfaces, or rendering; those live in
//! `plotfield_view2d` and `plotfield_render`.
//!
//! The expression compiler is an external collaborator. It hands this crate
//! opaque callables through the [`CurveFn`] trait, and every evaluation made
//! on behalf of the renderer goes through [`Expression::sample`], which maps
//! faults and non-finite results onto "undefined at this x" instead of
//! propagating them. A single misbehaving expression can therefore never
//! take down a frame.
//!
//! ## Minimal example
//!
//! ```rust
//! use peniko::Color;
//! use plotfield_scene::{EvalError, ExprId, Expression, PlotScene};
//!
//! let mut scene = PlotScene::new();
//! scene.insert(Expression::new(
//!     ExprId(0),
//!     "1/x",
//!     Color::WHITE,
//!     Box::new(|x: f64| Ok(1.0 / x)),
//! ));
//!
//! let expr = scene.expression(ExprId(0)).unwrap();
//! assert_eq!(expr.sample(2.0), Some(0.5));
//! // Division by zero yields an infinite value: undefined, not an error.
//! assert_eq!(expr.sample(0.0), None);
//! ```
//!
//! This crate is `no_std` + `alloc`.

#![no_std]

extern crate alloc;

mod curve;
mod hover;
mod scene;

pub use curve::{CurveFn, EvalError};
pub use hover::{HoverChange, HoverState, HoverTarget};
pub use scene::{ExprId, Expression, Marker, PlotScene};
