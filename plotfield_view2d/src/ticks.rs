// Copyright 2026 the Plotfield Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Grid step selection and tick label formatting.
//!
//! Grid lines look best when their spacing is a "human" number: 1, 2, or 5
//! times a power of ten. [`nice_step`] snaps a raw spacing up to the nearest
//! such value, and [`format_tick`] renders tick values with just enough
//! decimals for that spacing, so labels like `0.30000000000000004` never
//! reach the screen.

use alloc::format;
use alloc::string::String;

/// Snaps `raw` up to the nearest 1/2/5 × 10ⁿ value.
///
/// Returns the smallest step on the 1-2-5 ladder that is `>= raw`. Degenerate
/// inputs (non-finite or non-positive) fall back to `1.0` so callers never
/// have to special-case a broken span.
///
/// ```
/// use plotfield_view2d::ticks::nice_step;
///
/// assert_eq!(nice_step(0.7), 1.0);
/// assert_eq!(nice_step(3.0), 5.0);
/// assert_eq!(nice_step(120.0), 200.0);
/// assert!((nice_step(0.03) - 0.05).abs() < 1e-12);
/// ```
#[must_use]
pub fn nice_step(raw: f64) -> f64 {
    if !raw.is_finite() || raw <= 0.0 {
        return 1.0;
    }
    // Bring a power of ten into [raw/10, raw] by pure multiplication and
    // division, which keeps this usable without `log10` in no_std builds.
    let mut unit = 1.0_f64;
    while unit * 10.0 <= raw {
        unit *= 10.0;
    }
    while unit > raw {
        unit /= 10.0;
    }
    for m in [1.0_f64, 2.0, 5.0, 10.0] {
        let step = m * unit;
        if step >= raw {
            return step;
        }
    }
    unit * 10.0
}

/// Number of decimal places needed to print multiples of `step` exactly.
///
/// Capped at 12 to bound the loop for steps that are not short decimals.
#[must_use]
pub fn step_decimals(step: f64) -> usize {
    if !step.is_finite() || step <= 0.0 {
        return 0;
    }
    let mut scaled = step;
    let mut decimals = 0;
    while decimals < 12 && !is_near_integer(scaled) {
        scaled *= 10.0;
        decimals += 1;
    }
    decimals
}

/// Formats a tick value for display at the given grid step.
///
/// The decimal count is derived from `step` so that all labels along an axis
/// agree, and values within a hair of zero print as `0` rather than `-0`.
///
/// ```
/// use plotfield_view2d::ticks::format_tick;
///
/// assert_eq!(format_tick(2.0, 0.5), "2.0");
/// assert_eq!(format_tick(-1.5, 0.5), "-1.5");
/// assert_eq!(format_tick(3.0, 1.0), "3");
/// assert_eq!(format_tick(-0.0000001, 0.5), "0.0");
/// ```
#[must_use]
pub fn format_tick(value: f64, step: f64) -> String {
    let decimals = step_decimals(step);
    // Collapse the negative-zero neighborhood onto zero before printing.
    let value = if value.abs() < step.abs() * 1e-6 {
        0.0
    } else {
        value
    };
    format!("{value:.decimals$}")
}

fn is_near_integer(x: f64) -> bool {
    // Truncation via cast is available in core; `round` is not.
    let truncated = x as i64 as f64;
    (x - truncated).abs() < 1e-9 || (x - truncated - 1.0).abs() < 1e-9
}

#[cfg(test)]
mod tests {
    use super::{format_tick, nice_step, step_decimals};

    #[test]
    fn ladder_hits_expected_rungs() {
        assert_eq!(nice_step(1.0), 1.0);
        assert_eq!(nice_step(1.1), 2.0);
        assert_eq!(nice_step(2.0), 2.0);
        assert_eq!(nice_step(4.9), 5.0);
        assert_eq!(nice_step(5.1), 10.0);
        assert_eq!(nice_step(10.0), 10.0);
        assert_eq!(nice_step(11.0), 20.0);
    }

    #[test]
    fn ladder_descends_below_one() {
        assert_eq!(nice_step(0.5), 0.5);
        assert_eq!(nice_step(0.11), 0.2);
        assert!((nice_step(0.009) - 0.01).abs() < 1e-15);
    }

    #[test]
    fn ladder_survives_degenerate_input() {
        assert_eq!(nice_step(0.0), 1.0);
        assert_eq!(nice_step(-3.0), 1.0);
        assert_eq!(nice_step(f64::NAN), 1.0);
        assert_eq!(nice_step(f64::INFINITY), 1.0);
    }

    #[test]
    fn decimals_follow_the_step() {
        assert_eq!(step_decimals(1.0), 0);
        assert_eq!(step_decimals(5.0), 0);
        assert_eq!(step_decimals(0.5), 1);
        assert_eq!(step_decimals(0.2), 1);
        assert_eq!(step_decimals(0.05), 2);
    }

    #[test]
    fn labels_are_short_and_stable() {
        assert_eq!(format_tick(4.0, 2.0), "4");
        assert_eq!(format_tick(-4.0, 2.0), "-4");
        assert_eq!(format_tick(0.25, 0.05), "0.25");
        assert_eq!(format_tick(0.1 + 0.2, 0.1), "0.3");
    }

    #[test]
    fn negative_zero_never_escapes() {
        assert_eq!(format_tick(-0.0, 1.0), "0");
        assert_eq!(format_tick(-1e-9, 0.5), "0.0");
    }
}
