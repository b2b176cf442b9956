//! Fat caret plugin.
//!
//! Glue between a host application and [`caret_core`]: loads the persisted
//! settings, keeps one caret tracker per open window, and routes host
//! events to them.

use bus::HostEvent;
use caret_core::{Document, ViewportHost, ViewportRegistry};
use core_types::WindowId;
use settings::{Settings, SettingsError, SettingsStore};
use std::sync::mpsc::Receiver;

pub use caret_core;
pub use settings;

pub struct FatCaretPlugin<S> {
    settings: Settings,
    store: S,
    registry: ViewportRegistry,
}

impl<S: SettingsStore> FatCaretPlugin<S> {
    /// Load settings and start tracking the primary window.
    pub fn load(
        store: S,
        host: &mut dyn ViewportHost,
        primary: WindowId,
        document: Box<dyn Document>,
    ) -> Result<Self, SettingsError> {
        let settings = Settings::load(&store)?;
        let mut registry = ViewportRegistry::new(settings.tracker_config());
        registry.start(host, primary, document);

        Ok(Self {
            settings,
            store,
            registry,
        })
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn registry(&self) -> &ViewportRegistry {
        &self.registry
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Change settings, persist them, and apply them to the trackers.
    pub fn update_settings(
        &mut self,
        update: impl FnOnce(&mut Settings),
    ) -> Result<(), SettingsError> {
        update(&mut self.settings);
        self.registry.reconfigure(self.settings.tracker_config());
        self.settings.save(&mut self.store)
    }

    pub fn on_host_event(&mut self, host: &mut dyn ViewportHost, evt: HostEvent) {
        match evt {
            HostEvent::ViewportOpened { window, document } => {
                self.registry.open(host, window, document);
            }
            HostEvent::ViewportClosed { window } => {
                self.registry.close(window);
            }
            HostEvent::Caret { window, event } => self.registry.caret_event(window, &event),
            HostEvent::Scroll { window } => self.registry.scroll(window),
            HostEvent::Shutdown => self.unload(),
        }
    }

    /// Drain every event currently queued on the bus.
    pub fn pump(&mut self, host: &mut dyn ViewportHost, rx: &Receiver<HostEvent>) {
        while let Ok(evt) = rx.try_recv() {
            log::trace!("host event {evt:?}");
            self.on_host_event(host, evt);
        }
    }

    /// One rendering-frame boundary.
    pub fn frame(&mut self) {
        self.registry.on_frame();
    }

    pub fn unload(&mut self) {
        if !self.registry.is_empty() {
            log::debug!("unloading {} caret tracker(s)", self.registry.len());
        }
        self.registry.shutdown();
    }
}
