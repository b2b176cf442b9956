//! Rendering adapters for the caret indicator.
//!
//! Both adapters implement [`caret_core::VisualLayer`]; hosts pick one:
//! - [`CssCaret`]: writes CSS custom properties onto a DOM element and lets
//!   a stylesheet do the transition
//! - [`EguiCaret`]: keeps the latest placement and paints it with an egui
//!   [`Painter`](egui::Painter), easing between positions itself

mod css;
pub mod easing;
mod egui_caret;

pub use css::{CssCaret, DEFAULT_CLASS, StyleElement, caret_declarations, caret_stylesheet};
pub use egui_caret::{EguiCaret, EguiCaretConfig, EguiCaretHandle};
