//! # caret_core
//!
//! UI-agnostic caret tracking and animation engine.
//!
//! Decides where the caret of an editable surface currently is, resolves it
//! to an on-screen rectangle, and produces the numbers a rendering adapter
//! needs to draw an exaggerated indicator gliding between positions:
//! - [`geometry`]: prioritized fallback chain of geometry queries
//! - [`ScrollCompensator`]: offset sampling while content scrolls
//! - [`Tracker`]: one indicator per viewport, with a drop-on-busy update gate
//! - [`ViewportRegistry`]: one tracker per open window
//!
//! ## Design Principles
//!
//! Like the input layer it sits next to, this crate does not depend on:
//! - Any graphics framework
//! - A real DOM or layout engine
//!
//! Hosts implement [`Document`] and [`ViewportHost`]; renderers implement
//! [`VisualLayer`]. Everything runs on one thread, driven by host
//! notifications and one [`Tracker::on_frame`] call per display refresh.

mod config;
mod error;
pub mod geometry;
mod host;
mod registry;
mod scroll;
mod state;
mod tracker;
mod visual;

pub use config::{
    DEFAULT_BULLET_OFFSET, DEFAULT_LINE_HEIGHT, FirstPosition, ListenSet, TrackerConfig,
};
pub use error::CaretError;
pub use geometry::{RectSource, Resolved};
pub use host::{Document, Marker, SelectionSnapshot, TextPosition, ViewportHost};
pub use registry::ViewportRegistry;
pub use scroll::{ScrollCompensator, ScrollPhase, ScrollStep};
pub use state::TrackerState;
pub use tracker::Tracker;
pub use visual::{CaretStyle, VisualError, VisualLayer, VisualUpdate};
