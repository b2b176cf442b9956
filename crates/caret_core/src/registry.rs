//! Live trackers, one per open viewport.

use core_types::{CaretEvent, WindowId};

use crate::config::TrackerConfig;
use crate::host::{Document, ViewportHost};
use crate::tracker::Tracker;

/// Creates and destroys [`Tracker`]s as viewports come and go. Holds no
/// geometry logic of its own.
pub struct ViewportRegistry {
    config: TrackerConfig,
    trackers: Vec<Tracker>,
}

impl ViewportRegistry {
    pub fn new(config: TrackerConfig) -> Self {
        Self {
            config,
            trackers: Vec::new(),
        }
    }

    pub fn config(&self) -> &TrackerConfig {
        &self.config
    }

    /// Use `config` for trackers created from now on, and push its geometry
    /// tunables to the live ones.
    pub fn reconfigure(&mut self, config: TrackerConfig) {
        self.config = config;
        for tracker in &mut self.trackers {
            tracker.set_config(config);
        }
    }

    /// Register the primary viewport at startup.
    pub fn start(
        &mut self,
        host: &mut dyn ViewportHost,
        window: WindowId,
        document: Box<dyn Document>,
    ) -> bool {
        log::debug!("registering primary window {window}");
        self.open(host, window, document)
    }

    /// Register a newly opened viewport. A window that already has a tracker
    /// is left alone. Returns whether a tracker was created.
    pub fn open(
        &mut self,
        host: &mut dyn ViewportHost,
        window: WindowId,
        document: Box<dyn Document>,
    ) -> bool {
        if self.tracker(window).is_some() {
            log::trace!("window {window} already tracked");
            return false;
        }
        match Tracker::new(window, document, host, self.config) {
            Ok(tracker) => {
                self.trackers.push(tracker);
                true
            }
            Err(err) => {
                log::warn!("window {window}: could not attach caret tracker: {err}");
                false
            }
        }
    }

    /// Tear down and forget the tracker for `window`. Returns whether one existed.
    pub fn close(&mut self, window: WindowId) -> bool {
        let Some(i) = self.trackers.iter().position(|t| t.window() == window) else {
            return false;
        };
        let mut tracker = self.trackers.remove(i);
        tracker.teardown();
        true
    }

    pub fn caret_event(&mut self, window: WindowId, event: &CaretEvent) {
        if let Some(tracker) = self.tracker_mut(window) {
            tracker.on_event(event);
        }
    }

    pub fn scroll(&mut self, window: WindowId) {
        if let Some(tracker) = self.tracker_mut(window) {
            tracker.on_scroll();
        }
    }

    /// One rendering-frame boundary for every live tracker.
    pub fn on_frame(&mut self) {
        for tracker in &mut self.trackers {
            tracker.on_frame();
        }
    }

    pub fn shutdown(&mut self) {
        for mut tracker in self.trackers.drain(..) {
            tracker.teardown();
        }
    }

    pub fn tracker(&self, window: WindowId) -> Option<&Tracker> {
        self.trackers.iter().find(|t| t.window() == window)
    }

    fn tracker_mut(&mut self, window: WindowId) -> Option<&mut Tracker> {
        self.trackers.iter_mut().find(|t| t.window() == window)
    }

    pub fn windows(&self) -> impl Iterator<Item = WindowId> + '_ {
        self.trackers.iter().map(Tracker::window)
    }

    pub fn len(&self) -> usize {
        self.trackers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trackers.is_empty()
    }
}
