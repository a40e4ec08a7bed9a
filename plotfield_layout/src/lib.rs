// Copyright 2026 the Plotfield Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Plotfield Layout: keeping the view, the surface, and the frame loop in
//! agreement.
//!
//! Three small concerns live here:
//!
//! - [`enforce_square_units`] reconciles the view's world aspect ratio with
//!   the surface's pixel aspect ratio, so one world unit always renders as
//!   the same number of pixels on both axes.
//! - [`Debouncer`] and [`FrameScheduler`] tame the embedder's event storms:
//!   resize bursts collapse into one reaction after a quiet period, and any
//!   number of redraw requests collapse into at most one pending frame,
//!   tagged with [`Damage`] flags naming what the wake-up must redo.
//! - [`FullscreenSession`] tracks whether a fullscreen presentation is
//!   active, so escape handling can be scoped to the session.
//!
//! Everything is driven by caller-supplied millisecond timestamps; this crate
//! never reads a clock, which keeps it `no_std` and trivially testable.

#![no_std]

mod aspect;
mod schedule;
mod session;

pub use aspect::enforce_square_units;
pub use schedule::{Damage, Debouncer, FrameScheduler};
pub use session::FullscreenSession;
