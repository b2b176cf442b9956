//! Host-facing traits.
//!
//! The tracker never touches a real document. Everything it needs to know
//! about a viewport's content goes through [`Document`], and everything it
//! needs from the surrounding application at construction time goes through
//! [`ViewportHost`].
//!
//! # Integration Pattern
//!
//! Hosts hand out their own element handles as [`NodeId`]s and answer
//! geometry queries for them:
//!
//! ```ignore
//! impl Document for PageDocument {
//!     fn client_rects(&self, node: NodeId) -> Vec<Rect> {
//!         self.layout.boxes_for(node).map(|b| b.border_rect()).collect()
//!     }
//!     // ...
//! }
//! ```

use core_types::{EventKind, NodeId, Rect, WindowId};

use crate::error::CaretError;
use crate::visual::VisualLayer;

/// A boundary point inside a text container.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TextPosition {
    pub node: NodeId,
    pub offset: usize,
}

impl TextPosition {
    pub fn new(node: NodeId, offset: usize) -> Self {
        Self { node, offset }
    }
}

/// The primary range of the active selection. A collapsed selection is the
/// caret itself.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SelectionSnapshot {
    pub start: TextPosition,
    pub end: TextPosition,
}

impl SelectionSnapshot {
    pub fn collapsed(at: TextPosition) -> Self {
        Self { start: at, end: at }
    }
}

/// Markers the host editor puts on the focused line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Marker {
    ActiveLine,
    ActiveListItem,
    BulletMarker,
}

/// Geometry and structure queries against one viewport's document.
pub trait Document {
    // =========================================================================
    // Structure
    // =========================================================================

    /// Whether `node` is inside an editable region (content-editable or a
    /// text input control).
    fn is_editable(&self, node: NodeId) -> bool;

    /// First descendant of `within` (or `within` itself) carrying `marker`.
    fn find_marker(&self, within: NodeId, marker: Marker) -> Option<NodeId>;

    /// Length of a text container in boundary offsets.
    fn container_len(&self, node: NodeId) -> usize;

    // =========================================================================
    // Selection
    // =========================================================================

    /// The active selection's primary range, if there is one.
    fn selection(&self) -> Option<SelectionSnapshot>;

    /// On-screen rectangles of the range `start..end`, in document order.
    fn range_client_rects(&self, start: TextPosition, end: TextPosition) -> Vec<Rect>;

    // =========================================================================
    // Element geometry
    // =========================================================================

    /// On-screen rectangles of an element, in document order.
    fn client_rects(&self, node: NodeId) -> Vec<Rect>;

    /// Bounding box of an element.
    ///
    /// Fails with [`CaretError::Detached`] once the element has left the
    /// document.
    fn bounding_rect(&self, node: NodeId) -> Result<Rect, CaretError>;

    /// Computed line height, or `None` if it is not numeric (e.g. `normal`).
    fn line_height(&self, node: NodeId) -> Option<f32>;
}

/// What a tracker needs from the application while it is being built.
pub trait ViewportHost {
    /// Subscribe `window` to notifications of `kind`.
    fn listen(&mut self, window: WindowId, kind: EventKind);

    /// Create the indicator's visual element for `window`. The tracker mounts it.
    fn create_visual(&mut self, window: WindowId) -> Box<dyn VisualLayer>;
}
