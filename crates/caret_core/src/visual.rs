//! Outbound interface to the rendering adapter.
//!
//! The core only produces numbers; how the transition between `from` and
//! `to` is drawn is up to the [`VisualLayer`] implementation.

use core_types::Point;
use thiserror::Error;

/// Parameters for one caret placement, written atomically.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CaretStyle {
    /// Previously resolved position; where the transition starts.
    pub from: Point,
    /// Newly resolved position; where the transition ends.
    pub to: Point,
    /// Vertical scroll compensation in effect. Reset to zero on every placement.
    pub offset_y: f32,
    pub height: f32,
    pub visible: bool,
    /// Transition from `from` to `to`. When false the caret is drawn at `to`
    /// straight away.
    pub animate: bool,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum VisualUpdate {
    Place(CaretStyle),
    /// Only the scroll compensation changed.
    ScrollOffset(f32),
    Hide,
    /// Second frame of an animated placement: restart the transition.
    Restart,
}

#[derive(Debug, Error)]
pub enum VisualError {
    #[error("visual element is not attached to a document")]
    Detached,

    #[error("host rejected the style write: {0}")]
    Host(String),
}

/// The indicator's owning element in one viewport.
///
/// `mount` is called once when the tracker is built and `unmount` once at
/// teardown.
pub trait VisualLayer {
    fn mount(&mut self) -> Result<(), VisualError>;

    fn write(&mut self, update: &VisualUpdate) -> Result<(), VisualError>;

    fn unmount(&mut self) -> Result<(), VisualError>;
}
