#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::{HashMap, HashSet};
use std::rc::Rc;

use caret_core::{
    CaretError, Document, Marker, SelectionSnapshot, TextPosition, TrackerConfig, VisualError,
    VisualLayer, VisualUpdate, ViewportHost,
};
use core_types::{EventKind, NodeId, Rect, WindowId};

pub const EDITOR: NodeId = NodeId(10);
pub const LINE: NodeId = NodeId(11);
pub const TEXT: NodeId = NodeId(12);
pub const TOOLBAR: NodeId = NodeId(20);

/// Layout a test can rewrite between frames.
#[derive(Debug, Default)]
pub struct Layout {
    pub editable: HashSet<NodeId>,
    pub rects: HashMap<NodeId, Rect>,
    pub detached: HashSet<NodeId>,
    pub markers: HashMap<(NodeId, Marker), NodeId>,
    pub line_heights: HashMap<NodeId, f32>,
    pub selection: Option<SelectionSnapshot>,
    pub ranges: HashMap<(TextPosition, TextPosition), Rect>,
    pub container_len: usize,
}

impl Layout {
    /// An editable element with a caret at `(x, y)`.
    pub fn editor_with_caret(x: f32, y: f32) -> Self {
        let mut layout = Layout::default();
        layout.editable.insert(EDITOR);
        layout.rects.insert(EDITOR, Rect::new(0.0, 100.0, 600.0, 400.0));
        layout.line_heights.insert(EDITOR, 20.0);
        layout.move_caret(x, y);
        layout
    }

    pub fn move_caret(&mut self, x: f32, y: f32) {
        let at = TextPosition::new(TEXT, 0);
        self.selection = Some(SelectionSnapshot::collapsed(at));
        self.ranges.insert((at, at), Rect::new(x, y, 0.0, 18.0));
    }

    /// Shift every rectangle vertically, as scrolling does.
    pub fn scroll_by(&mut self, dy: f32) {
        for rect in self.rects.values_mut() {
            rect.y += dy;
        }
        for rect in self.ranges.values_mut() {
            rect.y += dy;
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct FakeDocument {
    pub layout: Rc<RefCell<Layout>>,
}

impl FakeDocument {
    pub fn new(layout: Layout) -> Self {
        Self {
            layout: Rc::new(RefCell::new(layout)),
        }
    }
}

impl Document for FakeDocument {
    fn is_editable(&self, node: NodeId) -> bool {
        self.layout.borrow().editable.contains(&node)
    }

    fn find_marker(&self, within: NodeId, marker: Marker) -> Option<NodeId> {
        self.layout.borrow().markers.get(&(within, marker)).copied()
    }

    fn container_len(&self, _node: NodeId) -> usize {
        self.layout.borrow().container_len
    }

    fn selection(&self) -> Option<SelectionSnapshot> {
        self.layout.borrow().selection
    }

    fn range_client_rects(&self, start: TextPosition, end: TextPosition) -> Vec<Rect> {
        self.layout
            .borrow()
            .ranges
            .get(&(start, end))
            .copied()
            .into_iter()
            .collect()
    }

    fn client_rects(&self, node: NodeId) -> Vec<Rect> {
        self.layout
            .borrow()
            .rects
            .get(&node)
            .copied()
            .into_iter()
            .collect()
    }

    fn bounding_rect(&self, node: NodeId) -> Result<Rect, CaretError> {
        let layout = self.layout.borrow();
        if layout.detached.contains(&node) {
            return Err(CaretError::Detached(node));
        }
        layout
            .rects
            .get(&node)
            .copied()
            .ok_or(CaretError::Detached(node))
    }

    fn line_height(&self, node: NodeId) -> Option<f32> {
        self.layout.borrow().line_heights.get(&node).copied()
    }
}

/// Everything a visual layer was asked to do.
#[derive(Debug, Default)]
pub struct VisualLog {
    pub mounts: usize,
    pub unmounts: usize,
    pub writes: Vec<VisualUpdate>,
}

impl VisualLog {
    pub fn placements(&self) -> Vec<VisualUpdate> {
        self.writes
            .iter()
            .copied()
            .filter(|w| matches!(w, VisualUpdate::Place(_)))
            .collect()
    }

    pub fn offsets(&self) -> Vec<f32> {
        self.writes
            .iter()
            .filter_map(|w| match w {
                VisualUpdate::ScrollOffset(dy) => Some(*dy),
                _ => None,
            })
            .collect()
    }
}

pub struct RecordingVisual {
    log: Rc<RefCell<VisualLog>>,
    mounted: bool,
}

impl VisualLayer for RecordingVisual {
    fn mount(&mut self) -> Result<(), VisualError> {
        self.mounted = true;
        self.log.borrow_mut().mounts += 1;
        Ok(())
    }

    fn write(&mut self, update: &VisualUpdate) -> Result<(), VisualError> {
        if !self.mounted {
            return Err(VisualError::Detached);
        }
        self.log.borrow_mut().writes.push(*update);
        Ok(())
    }

    fn unmount(&mut self) -> Result<(), VisualError> {
        if !self.mounted {
            return Err(VisualError::Detached);
        }
        self.mounted = false;
        self.log.borrow_mut().unmounts += 1;
        Ok(())
    }
}

#[derive(Default)]
pub struct RecordingHost {
    pub listens: Vec<(WindowId, EventKind)>,
    pub visuals: HashMap<WindowId, Rc<RefCell<VisualLog>>>,
}

impl RecordingHost {
    pub fn visual(&self, window: WindowId) -> Rc<RefCell<VisualLog>> {
        self.visuals[&window].clone()
    }
}

impl ViewportHost for RecordingHost {
    fn listen(&mut self, window: WindowId, kind: EventKind) {
        self.listens.push((window, kind));
    }

    fn create_visual(&mut self, window: WindowId) -> Box<dyn VisualLayer> {
        let log = Rc::new(RefCell::new(VisualLog::default()));
        self.visuals.insert(window, log.clone());
        Box::new(RecordingVisual {
            log,
            mounted: false,
        })
    }
}

pub fn config() -> TrackerConfig {
    TrackerConfig::default()
}
