use caret_core::Document;
use core_types::{CaretEvent, WindowId};
use std::fmt;
use std::sync::mpsc::{self, Receiver, Sender};

pub enum HostEvent {
    // Window lifecycle
    ViewportOpened {
        window: WindowId,
        document: Box<dyn Document>,
    },
    ViewportClosed {
        window: WindowId,
    },

    // Input -> tracker
    Caret {
        window: WindowId,
        event: CaretEvent,
    },
    Scroll {
        window: WindowId,
    },

    Shutdown,
}

impl fmt::Debug for HostEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HostEvent::ViewportOpened { window, .. } => f
                .debug_struct("ViewportOpened")
                .field("window", window)
                .finish_non_exhaustive(),
            HostEvent::ViewportClosed { window } => f
                .debug_struct("ViewportClosed")
                .field("window", window)
                .finish(),
            HostEvent::Caret { window, event } => f
                .debug_struct("Caret")
                .field("window", window)
                .field("event", event)
                .finish(),
            HostEvent::Scroll { window } => {
                f.debug_struct("Scroll").field("window", window).finish()
            }
            HostEvent::Shutdown => f.write_str("Shutdown"),
        }
    }
}

pub struct Bus {
    pub evt_tx: Sender<HostEvent>, // handed to the host's event sources
    pub evt_rx: Receiver<HostEvent>,
}

impl Bus {
    pub fn new() -> Self {
        let (evt_tx, evt_rx) = mpsc::channel();
        Self { evt_tx, evt_rx }
    }
}

impl Default for Bus {
    fn default() -> Self {
        Self::new()
    }
}
