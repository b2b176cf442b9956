//! CSS custom-property adapter.
//!
//! Each placement is one `cssText` write on the wrapper element; the
//! stylesheet from [`caret_stylesheet`] turns the properties into a moving
//! caret. Scroll compensation and hiding touch a single property.

use caret_core::{CaretStyle, VisualError, VisualLayer, VisualUpdate};

pub const DEFAULT_CLASS: &str = "x-cursor";

/// The host element that owns the caret, as seen by this adapter.
pub trait StyleElement {
    fn append_to_body(&mut self) -> Result<(), VisualError>;

    fn remove_from_body(&mut self) -> Result<(), VisualError>;

    /// Replace the element's inline style in one write.
    fn set_css_text(&mut self, text: &str) -> Result<(), VisualError>;

    fn set_property(&mut self, name: &str, value: &str) -> Result<(), VisualError>;

    /// Reassign the caret's class so its CSS animation starts over.
    fn reset_class(&mut self, class: &str) -> Result<(), VisualError>;
}

pub struct CssCaret<E> {
    element: E,
    class: String,
    attached: bool,
}

impl<E: StyleElement> CssCaret<E> {
    pub fn new(element: E) -> Self {
        Self::with_class(element, DEFAULT_CLASS)
    }

    pub fn with_class(element: E, class: impl Into<String>) -> Self {
        Self {
            element,
            class: class.into(),
            attached: false,
        }
    }

    pub fn element(&self) -> &E {
        &self.element
    }

    pub fn is_attached(&self) -> bool {
        self.attached
    }
}

impl<E: StyleElement> VisualLayer for CssCaret<E> {
    fn mount(&mut self) -> Result<(), VisualError> {
        if self.attached {
            return Ok(());
        }
        self.element.append_to_body()?;
        self.attached = true;
        self.element.set_property("--cursor-visibility", "hidden")
    }

    fn write(&mut self, update: &VisualUpdate) -> Result<(), VisualError> {
        if !self.attached {
            return Err(VisualError::Detached);
        }
        match update {
            VisualUpdate::Place(style) => self.element.set_css_text(&caret_declarations(style)),
            VisualUpdate::ScrollOffset(dy) => {
                self.element.set_property("--cursor-offset-y", &px(*dy))
            }
            VisualUpdate::Hide => self.element.set_property("--cursor-visibility", "hidden"),
            VisualUpdate::Restart => self.element.reset_class(&self.class),
        }
    }

    fn unmount(&mut self) -> Result<(), VisualError> {
        if !self.attached {
            log::trace!("caret element already detached");
            return Ok(());
        }
        self.attached = false;
        self.element.remove_from_body()
    }
}

fn px(v: f32) -> String {
    format!("{v}px")
}

/// Inline declarations for one placement. A placement that does not animate
/// starts where it ends.
pub fn caret_declarations(style: &CaretStyle) -> String {
    let visibility = if style.visible { "visible" } else { "hidden" };
    let from = if style.animate { style.from } else { style.to };
    format!(
        "--cursor-x1: {}; --cursor-y1src: {}; --cursor-x2: {}; --cursor-y2src: {}; \
         --cursor-offset-y: {}; --cursor-height: {}; --cursor-visibility: {visibility};",
        px(from.x),
        px(from.y),
        px(style.to.x),
        px(style.to.y),
        px(style.offset_y),
        px(style.height),
    )
}

/// Stylesheet consuming the custom properties written by [`CssCaret`].
pub fn caret_stylesheet(class: &str) -> String {
    format!(
        r#"
.{class}-wrapper {{
    position: fixed;
    inset: 0;
    pointer-events: none;
    z-index: 1000;
    visibility: var(--cursor-visibility, hidden);
}}
.{class} {{
    position: absolute;
    left: 0;
    top: 0;
    width: var(--cursor-width, 4px);
    height: var(--cursor-height, 18px);
    background-color: var(--cursor-color, currentColor);
    opacity: 0.6;
    transform: translate(var(--cursor-x2), calc(var(--cursor-y2src) + var(--cursor-offset-y)));
    animation: {class}-move 120ms ease-out;
}}
@keyframes {class}-move {{
    from {{ transform: translate(var(--cursor-x1), calc(var(--cursor-y1src) + var(--cursor-offset-y))); }}
    to {{ transform: translate(var(--cursor-x2), calc(var(--cursor-y2src) + var(--cursor-offset-y))); }}
}}
"#
    )
}
