use core_types::EventKind;

/// Horizontal shift applied to a bullet marker's box so it lines up with
/// the caret column after the bullet glyph.
pub const DEFAULT_BULLET_OFFSET: f32 = 15.0;

/// Line height used when neither the active line nor the anchor reports one.
pub const DEFAULT_LINE_HEIGHT: f32 = 18.0;

/// What to do with the very first rectangle a tracker resolves.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FirstPosition {
    /// Store it as the transition baseline without drawing anything.
    #[default]
    Baseline,
    /// Store it and draw it in place.
    Render,
}

/// Which caret-affecting notifications a tracker subscribes to.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ListenSet {
    /// Key-down and pointer-up: enough for typed movement and click-to-place.
    #[default]
    Minimal,
    /// Also key-up, pointer-down and touch start/end.
    Broad,
}

impl ListenSet {
    pub fn kinds(self) -> &'static [EventKind] {
        match self {
            ListenSet::Minimal => &[EventKind::KeyDown, EventKind::PointerUp],
            ListenSet::Broad => &[
                EventKind::KeyDown,
                EventKind::PointerDown,
                EventKind::TouchEnd,
                EventKind::KeyUp,
                EventKind::PointerUp,
                EventKind::TouchStart,
            ],
        }
    }

    pub fn contains(self, kind: EventKind) -> bool {
        self.kinds().contains(&kind)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrackerConfig {
    pub bullet_offset: f32,
    pub default_line_height: f32,
    pub first_position: FirstPosition,
    pub listen: ListenSet,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            bullet_offset: DEFAULT_BULLET_OFFSET,
            default_line_height: DEFAULT_LINE_HEIGHT,
            first_position: FirstPosition::default(),
            listen: ListenSet::default(),
        }
    }
}
