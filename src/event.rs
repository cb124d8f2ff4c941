//! Events delivered to the page controller.
//!
//! Each browser event the page listens for maps to one variant; timers arrive
//! as [`Event::Timer`]. Handlers run to completion synchronously.

use crate::timer::TimerKind;

#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    Timer(TimerKind),
    ThemeToggleClicked,
    MenuButtonClicked,
    /// A link inside the mobile menu was clicked.
    MenuLinkClicked,
    Scrolled,
    /// Pointer moved, in viewport coordinates.
    PointerMoved { x: f64, y: f64 },
    /// Pointer entered an interactive element.
    HoverEntered,
    /// Pointer left an interactive element.
    HoverExited,
    /// A link with an in-page `href` was activated.
    AnchorActivated { href: String },
}

/// Whether the browser should still run the event's default action.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Propagation {
    #[default]
    Continue,
    PreventDefault,
}
