pub type WindowId = u64;

/// Host-assigned handle for an element in a viewport's document.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NodeId(pub u32);

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Viewport-relative rectangle, as reported by the host's geometry queries.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Exact `(x, y)` comparison; size is ignored and no epsilon is applied.
    pub fn same_position(&self, other: &Rect) -> bool {
        self.x == other.x && self.y == other.y
    }

    /// Both coordinates at zero. Some range measurements report this at
    /// line and paragraph boundaries instead of the real position.
    pub fn is_at_origin(&self) -> bool {
        self.x == 0.0 && self.y == 0.0
    }

    pub fn translated(&self, dx: f32, dy: f32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..*self
        }
    }
}

/// Host notifications a tracker can subscribe to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EventKind {
    KeyDown,
    KeyUp,
    PointerDown,
    PointerUp,
    TouchStart,
    TouchEnd,
    Wheel,
}

impl EventKind {
    pub fn is_scroll(self) -> bool {
        matches!(self, EventKind::Wheel)
    }
}

/// A caret-affecting notification. `target` is the element the host
/// dispatched the event to, if it was an element at all.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CaretEvent {
    pub kind: EventKind,
    pub target: Option<NodeId>,
}

impl CaretEvent {
    pub fn new(kind: EventKind, target: NodeId) -> Self {
        Self {
            kind,
            target: Some(target),
        }
    }

    pub fn untargeted(kind: EventKind) -> Self {
        Self { kind, target: None }
    }
}
