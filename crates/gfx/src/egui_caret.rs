use std::cell::RefCell;
use std::rc::Rc;

use caret_core::{CaretStyle, VisualError, VisualLayer, VisualUpdate};
use egui::{Color32, Painter, Rect, pos2, vec2};

use crate::easing::{ease_out_cubic, interpolate, progress};

#[derive(Clone, Copy, Debug)]
pub struct EguiCaretConfig {
    pub width: f32,
    pub color: Color32,
    /// Transition length in seconds.
    pub duration: f32,
}

impl Default for EguiCaretConfig {
    fn default() -> Self {
        Self {
            width: 4.0,
            color: Color32::from_rgba_unmultiplied(96, 140, 255, 160),
            duration: 0.12,
        }
    }
}

/// Retained caret painted by egui every frame.
#[derive(Debug)]
pub struct EguiCaret {
    config: EguiCaretConfig,
    mounted: bool,
    style: Option<CaretStyle>,
    offset_y: f32,
    visible: bool,
    elapsed: f32,
}

impl EguiCaret {
    pub fn new(config: EguiCaretConfig) -> Self {
        Self {
            config,
            mounted: false,
            style: None,
            offset_y: 0.0,
            visible: false,
            elapsed: 0.0,
        }
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    pub fn is_animating(&self) -> bool {
        self.visible && self.style.is_some() && self.elapsed < self.config.duration
    }

    /// Where the caret is drawn right now, or `None` while hidden.
    pub fn current_rect(&self) -> Option<Rect> {
        if !self.mounted || !self.visible {
            return None;
        }
        let style = self.style?;
        let t = progress(self.elapsed, self.config.duration);
        let x = interpolate(style.from.x, style.to.x, t, ease_out_cubic);
        let y = interpolate(style.from.y, style.to.y, t, ease_out_cubic) + self.offset_y;
        Some(Rect::from_min_size(
            pos2(x, y),
            vec2(self.config.width, style.height),
        ))
    }

    /// Advance the transition by `dt` seconds and paint. Returns `true` while
    /// the caret is still moving, so the caller can request a repaint.
    pub fn paint(&mut self, painter: &Painter, dt: f32) -> bool {
        self.elapsed = (self.elapsed + dt.max(0.0)).min(self.config.duration);
        if let Some(rect) = self.current_rect() {
            painter.rect_filled(rect, 0.0, self.config.color);
        }
        self.is_animating()
    }
}

impl Default for EguiCaret {
    fn default() -> Self {
        Self::new(EguiCaretConfig::default())
    }
}

impl VisualLayer for EguiCaret {
    fn mount(&mut self) -> Result<(), VisualError> {
        self.mounted = true;
        Ok(())
    }

    fn write(&mut self, update: &VisualUpdate) -> Result<(), VisualError> {
        if !self.mounted {
            return Err(VisualError::Detached);
        }
        match *update {
            VisualUpdate::Place(style) => {
                self.offset_y = style.offset_y;
                self.visible = style.visible;
                self.style = Some(style);
                self.elapsed = if style.animate {
                    0.0
                } else {
                    self.config.duration
                };
            }
            VisualUpdate::ScrollOffset(dy) => self.offset_y = dy,
            VisualUpdate::Hide => self.visible = false,
            VisualUpdate::Restart => self.elapsed = 0.0,
        }
        Ok(())
    }

    fn unmount(&mut self) -> Result<(), VisualError> {
        self.mounted = false;
        self.style = None;
        self.visible = false;
        Ok(())
    }
}

/// Shared handle: one clone goes to the tracker, the host keeps another to
/// paint from its frame callback.
#[derive(Clone, Debug, Default)]
pub struct EguiCaretHandle(Rc<RefCell<EguiCaret>>);

impl EguiCaretHandle {
    pub fn new(caret: EguiCaret) -> Self {
        Self(Rc::new(RefCell::new(caret)))
    }

    pub fn paint(&self, painter: &Painter, dt: f32) -> bool {
        self.0.borrow_mut().paint(painter, dt)
    }

    pub fn current_rect(&self) -> Option<Rect> {
        self.0.borrow().current_rect()
    }
}

impl VisualLayer for EguiCaretHandle {
    fn mount(&mut self) -> Result<(), VisualError> {
        self.0.borrow_mut().mount()
    }

    fn write(&mut self, update: &VisualUpdate) -> Result<(), VisualError> {
        self.0.borrow_mut().write(update)
    }

    fn unmount(&mut self) -> Result<(), VisualError> {
        self.0.borrow_mut().unmount()
    }
}
