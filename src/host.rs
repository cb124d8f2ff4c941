//! The environment capability the controller acts through.
//!
//! DESIGN
//! ======
//! All browser access (element lookup and mutation, `localStorage`, timers,
//! scroll geometry, wall-clock time) goes through [`Host`]. The browser
//! implementation lives in `web` behind the `browser` feature; the in-memory
//! implementation in [`crate::memory`] backs the tests and any non-browser
//! embedding.
//!
//! Mutations against a [`Node`] the page does not contain are no-ops, never
//! errors.

use crate::clock::LocalTime;
use crate::timer::{TimerId, TimerKind};

/// A page element the controller addresses.
///
/// Fixed nodes are resolved once at startup from the page config;
/// [`Node::Fragment`] is resolved by id at the time of use.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Node {
    /// The document element (`<html>`), carrier of the theme attribute.
    Root,
    ThemeToggle,
    MenuButton,
    /// The `<i>` icon inside the menu button.
    MenuIcon,
    Menu,
    NavWrapper,
    SignatureLogo,
    Hero,
    Title,
    Time,
    Year,
    CursorDot,
    CursorOutline,
    /// An in-page scroll target, by element id.
    Fragment(String),
}

pub trait Host {
    // --- DOM queries ---

    fn has_element(&self, node: &Node) -> bool;

    fn attribute(&self, node: &Node, name: &str) -> Option<String>;

    fn has_class(&self, node: &Node, class: &str) -> bool;

    /// Viewport-relative bottom edge of the hero section, if the page has one.
    fn hero_bottom(&self) -> Option<f64>;

    /// Vertical scroll offset of the window in CSS pixels.
    fn scroll_y(&self) -> f64;

    // --- DOM mutations ---

    fn set_text(&mut self, node: &Node, text: &str);

    fn set_style(&mut self, node: &Node, property: &str, value: &str);

    fn set_attribute(&mut self, node: &Node, name: &str, value: &str);

    fn set_inner_html(&mut self, node: &Node, html: &str);

    /// Replace the element's whole class list.
    fn set_class_name(&mut self, node: &Node, class_name: &str);

    /// Add (`present`) or remove a single class.
    fn set_class(&mut self, node: &Node, class: &str, present: bool);

    /// Smoothly scroll `node` into view, top edge aligned to the viewport top.
    fn scroll_into_view(&mut self, node: &Node);

    // --- Storage ---

    fn storage_get(&self, key: &str) -> Option<String>;

    fn storage_set(&mut self, key: &str, value: &str);

    // --- Time ---

    fn now(&self) -> LocalTime;

    fn start_interval(&mut self, kind: TimerKind, period_ms: u32) -> TimerId;

    fn start_timeout(&mut self, kind: TimerKind, delay_ms: u32) -> TimerId;

    fn cancel_timer(&mut self, id: TimerId);
}
