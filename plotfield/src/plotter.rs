// Copyright 2026 the Plotfield Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;
use core::fmt;

use kurbo::{Point, Rect};

use plotfield_gesture::{GestureController, GestureEffect, PointerId};
use plotfield_layout::{Damage, Debouncer, FrameScheduler, FullscreenSession, enforce_square_units};
use plotfield_render::hit::{click_hit, hover_target};
use plotfield_render::{FramePicture, PlotStyle, render_frame};
use plotfield_scene::{ExprId, Expression, HoverChange, HoverState, Marker, PlotScene};
use plotfield_view2d::{FrameTransform, PlotView, SurfaceSize};

/// Quiet period for resize reaction. Continuous window resizing delivers a
/// storm of size changes; only the last one within this window is applied.
const RESIZE_DEBOUNCE_MS: u64 = 80;

/// Construction failure of a [`Plotter`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum PlotError {
    /// The initial surface has a non-positive or non-finite dimension.
    InvalidSurface,
}

impl fmt::Display for PlotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSurface => {
                write!(f, "plot surface has a non-positive or non-finite size")
            }
        }
    }
}

impl core::error::Error for PlotError {}

/// Outbound notification for the embedding shell, drained via
/// [`Plotter::take_events`].
#[derive(Clone, Debug, PartialEq)]
pub enum PlotEvent {
    /// The pointer settled on a curve (or switched to a different one).
    Hover {
        /// Hovered expression.
        expr_id: ExprId,
        /// World X at the pointer.
        x: f64,
        /// World Y of the curve at that X.
        y: f64,
    },
    /// The pointer left all curves or left the surface.
    HoverEnd,
    /// A click hit a curve and this marker was appended to the scene.
    PointMarked(Marker),
}

/// The retained plot widget.
///
/// Owns all plotting state and exposes three surfaces to the embedder:
/// input entry points ([`Plotter::pointer_down`] and friends), the outbound
/// event queue ([`Plotter::take_events`]), and coalesced frame production
/// ([`Plotter::needs_frame`] / [`Plotter::take_frame`]). Input handlers only
/// mutate state and accumulate damage; rendering happens exclusively inside
/// `take_frame`, on the embedder's frame pacing.
///
/// Every view or surface mutation is followed by aspect reconciliation, so
/// one world unit always spans the same number of pixels on both axes by the
/// time the next frame is taken.
#[derive(Debug)]
pub struct Plotter {
    view: PlotView,
    scene: PlotScene,
    surface: SurfaceSize,
    style: PlotStyle,
    gestures: GestureController,
    hover: HoverState,
    frames: FrameScheduler,
    resize: Debouncer,
    pending_surface: Option<SurfaceSize>,
    fullscreen: FullscreenSession,
    events: Vec<PlotEvent>,
}

impl Plotter {
    /// Creates a plotter over the default view.
    ///
    /// # Errors
    ///
    /// Returns [`PlotError::InvalidSurface`] if `surface` has a non-positive
    /// or non-finite dimension. Unlike later resizes (which are tolerated and
    /// ignored while transient), a plotter cannot come into existence without
    /// a real surface.
    pub fn new(surface: SurfaceSize) -> Result<Self, PlotError> {
        if !surface.is_valid() {
            return Err(PlotError::InvalidSurface);
        }
        let mut view = PlotView::default();
        enforce_square_units(&mut view, surface);
        let mut frames = FrameScheduler::new();
        frames.request(Damage::PAINT);
        Ok(Self {
            view,
            scene: PlotScene::new(),
            surface,
            style: PlotStyle::default(),
            gestures: GestureController::new(),
            hover: HoverState::new(),
            frames,
            resize: Debouncer::new(RESIZE_DEBOUNCE_MS),
            pending_surface: None,
            fullscreen: FullscreenSession::new(),
            events: Vec::new(),
        })
    }

    /// Current view snapshot.
    #[must_use]
    pub fn view(&self) -> PlotView {
        self.view
    }

    /// Current surface size.
    #[must_use]
    pub fn surface(&self) -> SurfaceSize {
        self.surface
    }

    /// The scene: registered expressions and placed markers.
    #[must_use]
    pub fn scene(&self) -> &PlotScene {
        &self.scene
    }

    /// Current paint style.
    #[must_use]
    pub fn style(&self) -> &PlotStyle {
        &self.style
    }

    /// Replaces the paint style.
    pub fn set_style(&mut self, style: PlotStyle) {
        self.style = style;
        self.frames.request(Damage::PAINT);
    }

    /// Registers an expression (replacing any previous one with its id).
    pub fn insert_expression(&mut self, expr: Expression) {
        self.scene.insert(expr);
        self.frames.request(Damage::PAINT);
    }

    /// Unregisters an expression; returns `true` if it was present.
    pub fn remove_expression(&mut self, id: ExprId) -> bool {
        let removed = self.scene.remove(id);
        if removed {
            self.frames.request(Damage::PAINT);
        }
        removed
    }

    /// Shows or hides a curve; returns `false` for unknown ids.
    pub fn set_expression_visible(&mut self, id: ExprId, visible: bool) -> bool {
        let changed = self.scene.set_visible(id, visible);
        if changed {
            self.frames.request(Damage::PAINT);
        }
        changed
    }

    /// Replaces the world bounds; returns `false` for degenerate bounds.
    pub fn set_world_bounds(&mut self, rect: Rect) -> bool {
        let changed = self.view.set_world_rect(rect);
        if changed {
            self.after_view_change();
        }
        changed
    }

    /// Zooms about a world-space anchor; returns `false` for bad factors.
    pub fn zoom_about(&mut self, anchor: Point, factor: f64) -> bool {
        let changed = self.view.zoom_about(anchor, factor);
        if changed {
            self.after_view_change();
        }
        changed
    }

    /// Enables or disables the grid.
    pub fn set_grid(&mut self, on: bool) {
        self.view.set_grid(on);
        self.frames.request(Damage::PAINT);
    }

    /// Handles a pointer press at a physical screen position.
    ///
    /// Starting a gesture ends any active hover; the pointer is now steering
    /// the view.
    pub fn pointer_down(&mut self, id: PointerId, pos: Point) {
        let change = self.hover.clear();
        self.note_hover(change);
        self.gestures.on_pointer_down(id, pos, &self.view);
    }

    /// Handles a pointer move.
    ///
    /// While a gesture is active this pans or pinches the view; while idle it
    /// recomputes the hover target and emits [`PlotEvent::Hover`] /
    /// [`PlotEvent::HoverEnd`] transitions.
    pub fn pointer_move(&mut self, id: PointerId, pos: Point) {
        let effect = self
            .gestures
            .on_pointer_move(id, pos, &mut self.view, self.surface);
        if effect == GestureEffect::ViewChanged {
            self.after_view_change();
        }
        if self.gestures.is_idle() {
            let tf = FrameTransform::new(self.view.world(), self.surface);
            let target = hover_target(&self.scene, &tf, pos);
            let change = self.hover.update(target);
            self.note_hover(change);
        }
    }

    /// Handles a pointer release.
    ///
    /// A stationary press-release is hit-tested against the curves; on a hit
    /// a [`Marker`] is appended and exactly one [`PlotEvent::PointMarked`] is
    /// queued.
    pub fn pointer_up(&mut self, id: PointerId, pos: Point) {
        let effect = self
            .gestures
            .on_pointer_up(id, pos, &mut self.view, self.surface);
        if let GestureEffect::Click { screen } = effect {
            self.handle_click(screen);
        }
    }

    /// Handles a pointer cancellation; the gesture is abandoned, never
    /// producing a click.
    pub fn pointer_cancel(&mut self, id: PointerId) {
        self.gestures.on_pointer_cancel(id, &self.view);
    }

    /// Handles the pointer leaving the surface entirely.
    pub fn pointer_leave(&mut self) {
        let change = self.hover.clear();
        self.note_hover(change);
    }

    /// Handles a wheel tick at a physical screen position; positive
    /// `delta_y` zooms out by 1.1, negative zooms in by 0.9.
    pub fn wheel(&mut self, pos: Point, delta_y: f64) {
        let effect = self.gestures.on_wheel(pos, delta_y, &mut self.view, self.surface);
        if effect == GestureEffect::ViewChanged {
            self.after_view_change();
        }
    }

    /// Notes a host surface resize at timestamp `now_ms`.
    ///
    /// The new size is not applied immediately: resize storms are debounced,
    /// and the latest size wins when [`Plotter::tick`] observes the quiet
    /// period.
    pub fn resized(&mut self, now_ms: u64, surface: SurfaceSize) {
        self.pending_surface = Some(surface);
        self.resize.trigger(now_ms);
    }

    /// Advances time-driven state; call once per host tick or frame.
    ///
    /// Applies a debounced resize when its quiet period has elapsed, re-runs
    /// aspect enforcement, and schedules a repaint.
    pub fn tick(&mut self, now_ms: u64) {
        if self.resize.poll(now_ms)
            && let Some(surface) = self.pending_surface.take()
            && surface.is_valid()
        {
            self.surface = surface;
            enforce_square_units(&mut self.view, self.surface);
            self.frames.request(Damage::LAYOUT | Damage::PAINT);
        }
    }

    /// Enters or leaves fullscreen presentation.
    ///
    /// A state change re-runs aspect enforcement against the current surface
    /// and schedules a repaint; the embedder reports the actual new surface
    /// size separately via [`Plotter::resized`].
    pub fn set_fullscreen(&mut self, active: bool) {
        let changed = if active {
            self.fullscreen.enter()
        } else {
            self.fullscreen.exit()
        };
        if changed {
            enforce_square_units(&mut self.view, self.surface);
            self.frames.request(Damage::LAYOUT | Damage::PAINT);
        }
    }

    /// Returns `true` while fullscreen is active.
    #[must_use]
    pub fn is_fullscreen(&self) -> bool {
        self.fullscreen.is_active()
    }

    /// Handles the escape key; honored (returning `true` and leaving
    /// fullscreen) only while a fullscreen session is active.
    pub fn key_escape(&mut self) -> bool {
        let left = self.fullscreen.escape();
        if left {
            enforce_square_units(&mut self.view, self.surface);
            self.frames.request(Damage::LAYOUT | Damage::PAINT);
        }
        left
    }

    /// Drains the queued outbound events, oldest first.
    #[must_use]
    pub fn take_events(&mut self) -> Vec<PlotEvent> {
        core::mem::take(&mut self.events)
    }

    /// Returns `true` while a repaint is pending.
    #[must_use]
    pub fn needs_frame(&self) -> bool {
        self.frames.is_pending()
    }

    /// Renders the pending frame, if any.
    ///
    /// Consumes the accumulated damage; returns `None` when nothing has
    /// changed since the last taken frame.
    pub fn take_frame(&mut self) -> Option<FramePicture> {
        let damage = self.frames.take();
        if damage.is_empty() {
            return None;
        }
        if damage.contains(Damage::LAYOUT) {
            enforce_square_units(&mut self.view, self.surface);
        }
        Some(render_frame(&self.scene, &self.view, self.surface, &self.style))
    }

    fn after_view_change(&mut self) {
        enforce_square_units(&mut self.view, self.surface);
        self.frames.request(Damage::PAINT);
    }

    fn note_hover(&mut self, change: Option<HoverChange>) {
        match change {
            Some(HoverChange::Began(target)) => self.events.push(PlotEvent::Hover {
                expr_id: target.expr_id,
                x: target.x,
                y: target.y,
            }),
            Some(HoverChange::Ended) => self.events.push(PlotEvent::HoverEnd),
            None => {}
        }
    }

    fn handle_click(&mut self, screen: Point) {
        let tf = FrameTransform::new(self.view.world(), self.surface);
        let Some(hit) = click_hit(&self.scene, &tf, screen) else {
            return;
        };
        let Some(expr) = self.scene.expression(hit.expr_id) else {
            return;
        };
        let marker = Marker {
            expr_id: hit.expr_id,
            label: expr.label.clone(),
            color: expr.color,
            x: hit.x,
            y: hit.y,
        };
        self.scene.push_marker(marker.clone());
        self.events.push(PlotEvent::PointMarked(marker));
        self.frames.request(Damage::PAINT);
    }
}
