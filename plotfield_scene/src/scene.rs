// Copyright 2026 the Plotfield Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::boxed::Box;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use peniko::Color;

use crate::curve::CurveFn;

/// Identifier for a registered expression.
///
/// This is a small, opaque handle assigned by the embedding shell when it
/// registers a compiled expression. It is stable for as long as the
/// expression stays registered, and markers refer back to their curve
/// through it.
#[repr(transparent)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct ExprId(pub u32);

/// A plotted expression: compiled curve plus display metadata.
///
/// Created by the shell from the expression compiler's output and registered
/// with [`PlotScene::insert`]. The plotting layer only ever flips
/// [`Expression::visible`]; everything else is treated as immutable after
/// registration.
pub struct Expression {
    /// Identifier assigned by the shell.
    pub id: ExprId,
    /// Display label, e.g. the source formula text.
    pub label: String,
    /// Stroke color of the curve and its markers.
    pub color: Color,
    /// Whether the curve participates in rendering and hit testing.
    pub visible: bool,
    curve: Box<dyn CurveFn>,
}

impl Expression {
    /// Creates a visible expression around a compiled curve.
    #[must_use]
    pub fn new(id: ExprId, label: impl Into<String>, color: Color, curve: Box<dyn CurveFn>) -> Self {
        Self {
            id,
            label: label.into(),
            color,
            visible: true,
            curve,
        }
    }

    /// Evaluates the curve at `x` behind the standard guard.
    ///
    /// Returns `None` when the compiled expression faults or produces a
    /// non-finite value; the sample is then "undefined at this x" and the
    /// renderer starts a new path segment instead of drawing through it.
    #[must_use]
    pub fn sample(&self, x: f64) -> Option<f64> {
        match self.curve.eval(x) {
            Ok(y) if y.is_finite() => Some(y),
            _ => None,
        }
    }
}

impl fmt::Debug for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Expression")
            .field("id", &self.id)
            .field("label", &self.label)
            .field("color", &self.color)
            .field("visible", &self.visible)
            .finish_non_exhaustive()
    }
}

/// A user-placed sample point on a curve.
///
/// Appended when a click hit-test succeeds; never removed by the plotting
/// layer. The shell owns marker lifecycle (tables, history, persistence).
#[derive(Clone, Debug, PartialEq)]
pub struct Marker {
    /// Curve this marker was sampled from.
    pub expr_id: ExprId,
    /// Label of that curve at placement time.
    pub label: String,
    /// Color of that curve at placement time.
    pub color: Color,
    /// World X of the sample.
    pub x: f64,
    /// World Y of the sample.
    pub y: f64,
}

/// Registry of everything a plot shows: expressions and markers.
///
/// The renderer and hit-testing read these as plain slices and never mutate
/// them mid-frame; additions are driven by the shell (expressions) and by
/// successful click hits (markers).
#[derive(Debug, Default)]
pub struct PlotScene {
    exprs: Vec<Expression>,
    markers: Vec<Marker>,
}

impl PlotScene {
    /// Creates an empty scene.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an expression, replacing any existing one with the same id.
    pub fn insert(&mut self, expr: Expression) {
        match self.exprs.iter_mut().find(|e| e.id == expr.id) {
            Some(slot) => *slot = expr,
            None => self.exprs.push(expr),
        }
    }

    /// Removes an expression; returns `true` if it was present.
    ///
    /// Markers referring to the removed expression are left in place; they
    /// record where a sample was taken, not a live link.
    pub fn remove(&mut self, id: ExprId) -> bool {
        let before = self.exprs.len();
        self.exprs.retain(|e| e.id != id);
        self.exprs.len() != before
    }

    /// Shows or hides an expression; returns `false` for unknown ids.
    pub fn set_visible(&mut self, id: ExprId, visible: bool) -> bool {
        match self.exprs.iter_mut().find(|e| e.id == id) {
            Some(expr) => {
                expr.visible = visible;
                true
            }
            None => false,
        }
    }

    /// Looks up an expression by id.
    #[must_use]
    pub fn expression(&self, id: ExprId) -> Option<&Expression> {
        self.exprs.iter().find(|e| e.id == id)
    }

    /// All registered expressions, in registration order.
    #[must_use]
    pub fn expressions(&self) -> &[Expression] {
        &self.exprs
    }

    /// Registered expressions that are currently visible.
    pub fn visible_expressions(&self) -> impl Iterator<Item = &Expression> {
        self.exprs.iter().filter(|e| e.visible)
    }

    /// All placed markers, oldest first.
    #[must_use]
    pub fn markers(&self) -> &[Marker] {
        &self.markers
    }

    /// Appends a marker.
    pub fn push_marker(&mut self, marker: Marker) {
        self.markers.push(marker);
    }
}
