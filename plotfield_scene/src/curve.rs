// Copyright 2026 the Plotfield Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

/// Fault raised by a compiled expression during evaluation.
///
/// The plotting layer never inspects the fault beyond "this sample is
/// undefined", so the error carries no payload. Compilers with richer
/// diagnostics should surface them through their own channels at
/// registration time, not per-sample.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct EvalError;

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("expression evaluation failed")
    }
}

impl core::error::Error for EvalError {}

/// A compiled real-valued function of one variable.
///
/// This is the seam between Plotfield and the external expression compiler:
/// whatever the compiler produces (bytecode interpreter, closure tree, JIT
/// stub) is registered as a `dyn CurveFn`.
///
/// Implementations may return [`EvalError`] for domain faults or any value,
/// including non-finite ones; callers are required to route samples through
/// [`Expression::sample`](crate::Expression::sample), which treats both
/// uniformly as undefined.
///
/// Any `Fn(f64) -> Result<f64, EvalError>` closure is a `CurveFn`:
///
/// ```rust
/// use plotfield_scene::{CurveFn, EvalError};
///
/// let square = |x: f64| Ok(x * x);
/// assert_eq!(square.eval(3.0), Ok(9.0));
///
/// let guarded = |x: f64| {
///     if x < 0.0 { Err(EvalError) } else { Ok(x) }
/// };
/// assert!(guarded.eval(-1.0).is_err());
/// ```
pub trait CurveFn {
    /// Evaluates the function at `x`.
    fn eval(&self, x: f64) -> Result<f64, EvalError>;
}

impl<F> CurveFn for F
where
    F: Fn(f64) -> Result<f64, EvalError>,
{
    fn eval(&self, x: f64) -> Result<f64, EvalError> {
        self(x)
    }
}
