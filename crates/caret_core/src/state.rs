//! Per-viewport tracking state.

use core_types::{NodeId, Rect};

/// Mutable state owned by one [`Tracker`](crate::Tracker).
///
/// Only that tracker's own resolver, serializer and scroll compensator
/// touch it.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TrackerState {
    /// Most recent successfully resolved caret rectangle. `None` until the
    /// first resolution completes.
    pub last_rect: Option<Rect>,

    /// Element sampled during scroll compensation. Replaced by every
    /// editable event target.
    pub anchor: Option<NodeId>,

    /// The anchor's top edge when it was last resolved. Zero point for the
    /// scroll offset.
    pub anchor_top: f32,

    /// Whether the indicator is shown. While `false` no rectangle is drawn,
    /// whatever `last_rect` holds.
    pub visible: bool,

    /// A position computation is in flight.
    pub busy: bool,
}
