//! Per-viewport cursor tracker.
//!
//! Owns one indicator bound to one window/document pair and drives it from
//! host notifications. Work that has to wait for layout to settle is parked
//! until the next [`Tracker::on_frame`] call, which the host makes once per
//! display refresh.

use core_types::{CaretEvent, EventKind, Rect, WindowId};

use crate::config::{FirstPosition, TrackerConfig};
use crate::error::CaretError;
use crate::geometry::{self, Resolved};
use crate::host::{Document, ViewportHost};
use crate::scroll::{ScrollCompensator, ScrollStep};
use crate::state::TrackerState;
use crate::visual::{CaretStyle, VisualLayer, VisualUpdate};

/// How a placement should reach the screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Transition {
    /// Interpolate from the previous position; commit on the following frame.
    Animated,
    /// Jump straight to the new position.
    Snap,
}

pub struct Tracker {
    window: WindowId,
    document: Box<dyn Document>,
    /// `None` once torn down.
    visual: Option<Box<dyn VisualLayer>>,
    config: TrackerConfig,
    state: TrackerState,
    scroll: ScrollCompensator,
    /// Resolution waiting for the next frame boundary.
    pending: Option<Transition>,
    /// Animated placement to store on the next frame boundary.
    pending_commit: Option<Rect>,
    /// The last visibility change written to the visual was a `Hide`.
    hidden: bool,
    resolutions: u64,
}

impl Tracker {
    /// Build a tracker for `window`: create and mount its visual element and
    /// subscribe to caret-affecting and scroll notifications.
    pub fn new(
        window: WindowId,
        document: Box<dyn Document>,
        host: &mut dyn ViewportHost,
        config: TrackerConfig,
    ) -> Result<Self, CaretError> {
        let mut visual = host.create_visual(window);
        visual.mount()?;

        for &kind in config.listen.kinds() {
            host.listen(window, kind);
        }
        host.listen(window, EventKind::Wheel);

        log::debug!("window {window}: caret tracker attached ({:?})", config.listen);

        Ok(Self {
            window,
            document,
            visual: Some(visual),
            config,
            state: TrackerState::default(),
            scroll: ScrollCompensator::new(),
            pending: None,
            pending_commit: None,
            hidden: false,
            resolutions: 0,
        })
    }

    pub fn window(&self) -> WindowId {
        self.window
    }

    pub fn state(&self) -> &TrackerState {
        &self.state
    }

    pub fn config(&self) -> &TrackerConfig {
        &self.config
    }

    /// Replace the geometry tunables. Subscriptions made at construction
    /// are not changed.
    pub fn set_config(&mut self, config: TrackerConfig) {
        self.config = config;
    }

    pub fn scroll_settling(&self) -> bool {
        self.scroll.is_sampling()
    }

    /// Number of geometry resolutions actually executed.
    pub fn resolution_count(&self) -> u64 {
        self.resolutions
    }

    pub fn is_torn_down(&self) -> bool {
        self.visual.is_none()
    }

    // =========================================================================
    // Notifications
    // =========================================================================

    pub fn on_event(&mut self, event: &CaretEvent) {
        if event.kind.is_scroll() {
            self.on_scroll();
            return;
        }
        if !self.config.listen.contains(event.kind) {
            log::trace!("window {}: ignoring unsubscribed {:?}", self.window, event.kind);
            return;
        }
        self.request_update(Some(event), Transition::Animated);
    }

    pub fn on_scroll(&mut self) {
        if self.is_torn_down() {
            log::trace!("window {}: scroll after teardown", self.window);
            return;
        }
        if !self.scroll.begin() {
            log::trace!("window {}: scroll absorbed by running sample loop", self.window);
        }
    }

    /// Advance one rendering-frame boundary.
    pub fn on_frame(&mut self) {
        if let Some(rect) = self.pending_commit.take() {
            self.state.last_rect = Some(rect);
            self.write_logged(VisualUpdate::Restart);
        }

        if let Some(transition) = self.pending.take() {
            if let Err(err) = self.resolve_and_publish(transition) {
                log::debug!("window {}: caret not resolved: {err}", self.window);
            }
            self.state.busy = false;
        }

        self.sample_scroll();
    }

    /// Detach the visual element. Safe to call more than once.
    pub fn teardown(&mut self) {
        let Some(mut visual) = self.visual.take() else {
            log::trace!("window {}: tracker already torn down", self.window);
            return;
        };
        if let Err(err) = visual.unmount() {
            log::debug!("window {}: unmount failed: {err}", self.window);
        }
        self.scroll.abort();
        log::debug!("window {}: caret tracker detached", self.window);
    }

    // =========================================================================
    // Update serializer
    // =========================================================================

    /// Entry point for every position update. At most one is in flight;
    /// anything arriving while busy is dropped, not queued.
    fn request_update(&mut self, event: Option<&CaretEvent>, transition: Transition) {
        if self.is_torn_down() {
            log::trace!("window {}: notification after teardown", self.window);
            return;
        }
        if self.state.busy {
            log::trace!("window {}: update in flight, dropping trigger", self.window);
            return;
        }
        self.state.busy = true;

        if let Some(event) = event {
            let editable = event
                .target
                .filter(|&target| self.document.is_editable(target));
            match editable {
                Some(target) => {
                    self.state.anchor = Some(target);
                    self.state.visible = true;
                }
                None => {
                    if self.state.visible {
                        self.state.visible = false;
                        self.hidden = true;
                        self.write_logged(VisualUpdate::Hide);
                    }
                    self.state.busy = false;
                    return;
                }
            }
        }

        self.pending = Some(transition);
    }

    // =========================================================================
    // Resolution and publish
    // =========================================================================

    fn resolve_and_publish(&mut self, transition: Transition) -> Result<(), CaretError> {
        self.resolutions += 1;

        let anchor = self.state.anchor.ok_or(CaretError::NoAnchor)?;
        self.state.anchor_top = self.document.bounding_rect(anchor)?.y;

        let resolved = geometry::resolve(&*self.document, anchor, &self.config)?;
        log::trace!(
            "window {}: caret at ({}, {}) from {:?}",
            self.window,
            resolved.rect.x,
            resolved.rect.y,
            resolved.source
        );
        self.publish(resolved, transition)
    }

    fn publish(&mut self, resolved: Resolved, transition: Transition) -> Result<(), CaretError> {
        let Resolved {
            rect, line_height, ..
        } = resolved;

        if !self.state.visible {
            // Track the position without drawing it.
            self.state.last_rect = Some(rect);
            return Ok(());
        }

        let Some(prev) = self.state.last_rect else {
            self.state.last_rect = Some(rect);
            if self.config.first_position == FirstPosition::Render || self.hidden {
                self.place(rect, rect, line_height, false)?;
            }
            return Ok(());
        };

        if prev.same_position(&rect) {
            if self.hidden {
                log::trace!("window {}: showing caret in place", self.window);
                self.place(rect, rect, line_height, false)?;
            } else {
                log::trace!("window {}: caret unchanged", self.window);
            }
            return Ok(());
        }

        let animate = transition == Transition::Animated;
        self.place(prev, rect, line_height, animate)?;

        if animate {
            self.pending_commit = Some(rect);
        } else {
            self.state.last_rect = Some(rect);
        }
        Ok(())
    }

    fn place(
        &mut self,
        from: Rect,
        to: Rect,
        height: f32,
        animate: bool,
    ) -> Result<(), CaretError> {
        self.write(VisualUpdate::Place(CaretStyle {
            from: from.origin(),
            to: to.origin(),
            offset_y: 0.0,
            height,
            visible: true,
            animate,
        }))?;
        self.hidden = false;
        Ok(())
    }

    // =========================================================================
    // Scroll compensation
    // =========================================================================

    fn sample_scroll(&mut self) {
        if !self.scroll.is_sampling() {
            return;
        }
        if let Err(err) = self.step_scroll() {
            log::debug!("window {}: scroll sampling stopped: {err}", self.window);
            self.scroll.abort();
        }
    }

    fn step_scroll(&mut self) -> Result<(), CaretError> {
        let Some(anchor) = self.state.anchor else {
            self.scroll.abort();
            return Ok(());
        };

        let top = self.document.bounding_rect(anchor)?.y;
        let step = self.scroll.sample(top - self.state.anchor_top);
        self.write(VisualUpdate::ScrollOffset(step.offset()))?;

        if let ScrollStep::Settled(offset) = step {
            log::trace!("window {}: scroll settled at {offset}", self.window);
            self.request_update(None, Transition::Snap);
        }
        Ok(())
    }

    // =========================================================================
    // Visual writes
    // =========================================================================

    fn write(&mut self, update: VisualUpdate) -> Result<(), CaretError> {
        let visual = self.visual.as_mut().ok_or(CaretError::TornDown)?;
        visual.write(&update)?;
        Ok(())
    }

    fn write_logged(&mut self, update: VisualUpdate) {
        if let Err(err) = self.write(update) {
            log::debug!("window {}: dropped {update:?}: {err}", self.window);
        }
    }
}
