// Copyright 2026 the Plotfield Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Tracks whether a fullscreen presentation is in progress.
///
/// The session scopes escape handling: [`FullscreenSession::escape`] is
/// honored only between [`FullscreenSession::enter`] and
/// [`FullscreenSession::exit`], so a stray escape key outside fullscreen
/// does nothing. Entering and exiting both report whether the state actually
/// changed; the embedder re-fixes surface dimensions and re-runs aspect
/// enforcement on a `true`.
#[derive(Debug, Default)]
pub struct FullscreenSession {
    active: bool,
}

impl FullscreenSession {
    /// Creates an inactive session.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` while fullscreen is active.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Enters fullscreen; returns `true` if the state changed.
    pub fn enter(&mut self) -> bool {
        !core::mem::replace(&mut self.active, true)
    }

    /// Exits fullscreen; returns `true` if the state changed.
    pub fn exit(&mut self) -> bool {
        core::mem::replace(&mut self.active, false)
    }

    /// Handles an escape key press; exits and returns `true` only while the
    /// session is active.
    pub fn escape(&mut self) -> bool {
        self.exit()
    }
}
