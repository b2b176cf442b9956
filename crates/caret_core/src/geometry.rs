//! Caret geometry resolution.
//!
//! Turns an anchor element plus the document's current selection into a
//! single best-guess caret rectangle. Sources are tried in order, first hit
//! wins:
//!
//! 1. the selection's primary range
//! 2. the active-line marker (or its bullet marker, shifted right)
//! 3. the anchor element itself
//!
//! A result sitting at the origin is treated as a measurement failure and
//! re-measured with synthetic ranges around the selection.

use core_types::{NodeId, Rect};

use crate::config::TrackerConfig;
use crate::error::CaretError;
use crate::host::{Document, Marker, SelectionSnapshot, TextPosition};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RectSource {
    Selection,
    BulletMarker,
    ActiveLine,
    Anchor,
    /// Re-measured after the first candidate came back at the origin.
    Corrected,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Resolved {
    pub rect: Rect,
    pub line_height: f32,
    pub source: RectSource,
}

pub fn resolve(
    doc: &dyn Document,
    anchor: NodeId,
    config: &TrackerConfig,
) -> Result<Resolved, CaretError> {
    let selection = doc.selection();

    let (rect, source) =
        candidate_rect(doc, anchor, selection.as_ref(), config).ok_or(CaretError::Unresolvable)?;

    let (rect, source) = if rect.is_at_origin() {
        log::debug!("caret rect from {source:?} is at the origin, re-measuring");
        let corrected = selection
            .as_ref()
            .and_then(|sel| correct_degenerate(doc, sel))
            .ok_or(CaretError::Degenerate)?;
        (corrected, RectSource::Corrected)
    } else {
        (rect, source)
    };

    Ok(Resolved {
        rect,
        line_height: line_height(doc, anchor, config),
        source,
    })
}

fn candidate_rect(
    doc: &dyn Document,
    anchor: NodeId,
    selection: Option<&SelectionSnapshot>,
    config: &TrackerConfig,
) -> Option<(Rect, RectSource)> {
    if let Some(sel) = selection
        && let Some(rect) = first_range_rect(doc, sel.start, sel.end)
    {
        return Some((rect, RectSource::Selection));
    }

    if let Some(line) = doc.find_marker(anchor, Marker::ActiveLine) {
        let bullet = doc
            .find_marker(line, Marker::ActiveListItem)
            .and_then(|item| doc.find_marker(item, Marker::BulletMarker))
            .and_then(|bullet| first_client_rect(doc, bullet));
        if let Some(rect) = bullet {
            return Some((rect.translated(config.bullet_offset, 0.0), RectSource::BulletMarker));
        }
        if let Some(rect) = first_client_rect(doc, line) {
            return Some((rect, RectSource::ActiveLine));
        }
    }

    first_client_rect(doc, anchor).map(|rect| (rect, RectSource::Anchor))
}

/// Second chance for a rectangle reported at the origin.
///
/// First measures from the selection start to the end of its container. If
/// that is still at the origin, measures the last character before the
/// selection end and uses its trailing edge.
fn correct_degenerate(doc: &dyn Document, sel: &SelectionSnapshot) -> Option<Rect> {
    let container_end = TextPosition::new(sel.start.node, doc.container_len(sel.start.node));
    if let Some(rect) = first_range_rect(doc, sel.start, container_end)
        && !rect.is_at_origin()
    {
        return Some(rect);
    }

    let before_end = TextPosition::new(sel.end.node, sel.end.offset.checked_sub(1)?);
    let last_char = first_range_rect(doc, before_end, sel.end)?;
    let trailing = Rect::new(
        last_char.right(),
        last_char.bottom() - last_char.height,
        0.0,
        last_char.height,
    );

    (!trailing.is_at_origin()).then_some(trailing)
}

/// Larger of the active line's and the anchor's computed line heights.
pub fn line_height(doc: &dyn Document, anchor: NodeId, config: &TrackerConfig) -> f32 {
    let numeric = |h: Option<f32>| h.filter(|h| h.is_finite());

    let active = numeric(
        doc.find_marker(anchor, Marker::ActiveLine)
            .and_then(|line| doc.line_height(line)),
    );
    let own = numeric(doc.line_height(anchor));

    match (active, own) {
        (Some(a), Some(b)) => a.max(b),
        (Some(h), None) | (None, Some(h)) => h,
        (None, None) => config.default_line_height,
    }
}

fn first_range_rect(doc: &dyn Document, start: TextPosition, end: TextPosition) -> Option<Rect> {
    doc.range_client_rects(start, end).first().copied()
}

fn first_client_rect(doc: &dyn Document, node: NodeId) -> Option<Rect> {
    doc.client_rects(node).first().copied()
}
