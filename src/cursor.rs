//! Custom cursor: two markers pinned to the pointer, scaled on hover.

#[cfg(test)]
#[path = "cursor_test.rs"]
mod cursor_test;

use crate::consts::{CURSOR_BORDER_COLOR, DOT_HOVER_SCALE, OUTLINE_HOVER_SCALE};
use crate::host::{Host, Node};

/// Centering transform with a scale factor applied.
#[must_use]
pub fn scale_transform(scale: f64) -> String {
    format!("translate(-50%, -50%) scale({scale})")
}

#[derive(Debug, Default)]
pub struct CustomCursor {
    bound: bool,
}

impl CustomCursor {
    /// Bind only when both markers exist.
    pub fn initialize(&mut self, host: &impl Host) {
        self.bound = host.has_element(&Node::CursorDot) && host.has_element(&Node::CursorOutline);
    }

    /// Move both markers to the raw pointer coordinates.
    pub fn on_pointer_move(&self, host: &mut impl Host, x: f64, y: f64) {
        if !self.bound {
            return;
        }
        let (left, top) = (format!("{x}px"), format!("{y}px"));
        for node in [Node::CursorDot, Node::CursorOutline] {
            host.set_style(&node, "left", &left);
            host.set_style(&node, "top", &top);
        }
    }

    /// Pointer entered (`true`) or left an interactive element.
    pub fn on_hover(&self, host: &mut impl Host, entered: bool) {
        if !self.bound {
            return;
        }
        let (outline, dot) = if entered { (OUTLINE_HOVER_SCALE, DOT_HOVER_SCALE) } else { (1.0, 1.0) };
        host.set_style(&Node::CursorOutline, "transform", &scale_transform(outline));
        host.set_style(&Node::CursorOutline, "border-color", CURSOR_BORDER_COLOR);
        host.set_style(&Node::CursorDot, "transform", &scale_transform(dot));
    }

    #[must_use]
    pub fn is_bound(&self) -> bool {
        self.bound
    }
}
