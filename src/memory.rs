//! In-memory [`Host`]: a fake page, storage map, and virtual clock.
//!
//! Used by the test suite and usable by any embedding without a browser.
//! Elements exist only if added with [`MemoryHost::with_element`]; storage can
//! be carried across a simulated reload with [`MemoryHost::into_storage`].

#[cfg(test)]
#[path = "memory_test.rs"]
mod memory_test;

use std::collections::{BTreeMap, BTreeSet, HashMap};

use crate::clock::LocalTime;
use crate::controller::PageController;
use crate::event::Event;
use crate::host::{Host, Node};
use crate::timer::{Scheduler, TimerId, TimerKind};

/// Every fixed node the controller knows about.
pub const ALL_NODES: [Node; 13] = [
    Node::Root,
    Node::ThemeToggle,
    Node::MenuButton,
    Node::MenuIcon,
    Node::Menu,
    Node::NavWrapper,
    Node::SignatureLogo,
    Node::Hero,
    Node::Title,
    Node::Time,
    Node::Year,
    Node::CursorDot,
    Node::CursorOutline,
];

/// State of one fake element.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MemoryElement {
    pub text: String,
    pub inner_html: String,
    pub attributes: BTreeMap<String, String>,
    pub styles: BTreeMap<String, String>,
    pub classes: BTreeSet<String>,
}

impl MemoryElement {
    /// Space-joined class list, like `Element.className`.
    #[must_use]
    pub fn class_name(&self) -> String {
        self.classes.iter().map(String::as_str).collect::<Vec<_>>().join(" ")
    }
}

#[derive(Debug)]
pub struct MemoryHost {
    elements: BTreeMap<Node, MemoryElement>,
    storage: HashMap<String, String>,
    scheduler: Scheduler,
    now: LocalTime,
    hero_bottom: f64,
    scroll_y: f64,
    scrolled: Vec<Node>,
}

impl Default for MemoryHost {
    fn default() -> Self {
        Self::with_storage(HashMap::new())
    }
}

impl MemoryHost {
    /// An empty page: only the root element exists.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// An empty page whose storage survived a previous load.
    #[must_use]
    pub fn with_storage(storage: HashMap<String, String>) -> Self {
        let mut elements = BTreeMap::new();
        elements.insert(Node::Root, MemoryElement::default());
        Self {
            elements,
            storage,
            scheduler: Scheduler::new(),
            now: LocalTime::default(),
            hero_bottom: 0.0,
            scroll_y: 0.0,
            scrolled: Vec::new(),
        }
    }

    /// A page containing every fixed node.
    #[must_use]
    pub fn full_page() -> Self {
        ALL_NODES.iter().cloned().fold(Self::new(), Self::with_element)
    }

    #[must_use]
    pub fn with_element(mut self, node: Node) -> Self {
        self.elements.entry(node).or_default();
        self
    }

    #[must_use]
    pub fn with_class(mut self, node: Node, class: &str) -> Self {
        self.elements.entry(node).or_default().classes.insert(class.to_owned());
        self
    }

    #[must_use]
    pub fn with_text(mut self, node: Node, text: &str) -> Self {
        self.elements.entry(node).or_default().text = text.to_owned();
        self
    }

    pub fn remove_element(&mut self, node: &Node) {
        self.elements.remove(node);
    }

    // --- Inspection ---

    #[must_use]
    pub fn element(&self, node: &Node) -> Option<&MemoryElement> {
        self.elements.get(node)
    }

    #[must_use]
    pub fn text(&self, node: &Node) -> Option<&str> {
        self.element(node).map(|e| e.text.as_str())
    }

    #[must_use]
    pub fn style(&self, node: &Node, property: &str) -> Option<&str> {
        self.element(node)?.styles.get(property).map(String::as_str)
    }

    #[must_use]
    pub fn inner_html(&self, node: &Node) -> Option<&str> {
        self.element(node).map(|e| e.inner_html.as_str())
    }

    #[must_use]
    pub fn class_name(&self, node: &Node) -> Option<String> {
        self.element(node).map(MemoryElement::class_name)
    }

    #[must_use]
    pub fn stored(&self, key: &str) -> Option<&str> {
        self.storage.get(key).map(String::as_str)
    }

    /// Nodes scrolled into view, in call order.
    #[must_use]
    pub fn scrolled(&self) -> &[Node] {
        &self.scrolled
    }

    #[must_use]
    pub fn scheduler(&self) -> &Scheduler {
        &self.scheduler
    }

    /// Hand the storage to the next simulated page load.
    #[must_use]
    pub fn into_storage(self) -> HashMap<String, String> {
        self.storage
    }

    // --- Environment ---

    pub fn set_now(&mut self, now: LocalTime) {
        self.now = now;
    }

    /// Place the hero section and window scroll offset.
    pub fn set_scroll(&mut self, hero_bottom: f64, scroll_y: f64) {
        self.hero_bottom = hero_bottom;
        self.scroll_y = scroll_y;
    }

    /// Advance virtual time by `ms`, delivering every due timer to `controller`
    /// in deadline order. Timers started while handling are honored within the
    /// same advance.
    pub fn advance(&mut self, controller: &mut PageController, ms: u64) {
        let until = self.scheduler.now_ms() + ms;
        while let Some(kind) = self.scheduler.pop_due(until) {
            controller.handle(self, Event::Timer(kind));
        }
        self.scheduler.settle(until);
    }

    fn element_mut(&mut self, node: &Node) -> Option<&mut MemoryElement> {
        self.elements.get_mut(node)
    }
}

impl Host for MemoryHost {
    fn has_element(&self, node: &Node) -> bool {
        self.elements.contains_key(node)
    }

    fn attribute(&self, node: &Node, name: &str) -> Option<String> {
        self.element(node)?.attributes.get(name).cloned()
    }

    fn has_class(&self, node: &Node, class: &str) -> bool {
        self.element(node).is_some_and(|e| e.classes.contains(class))
    }

    fn hero_bottom(&self) -> Option<f64> {
        self.has_element(&Node::Hero).then_some(self.hero_bottom)
    }

    fn scroll_y(&self) -> f64 {
        self.scroll_y
    }

    fn set_text(&mut self, node: &Node, text: &str) {
        if let Some(el) = self.element_mut(node) {
            text.clone_into(&mut el.text);
        }
    }

    fn set_style(&mut self, node: &Node, property: &str, value: &str) {
        if let Some(el) = self.element_mut(node) {
            el.styles.insert(property.to_owned(), value.to_owned());
        }
    }

    fn set_attribute(&mut self, node: &Node, name: &str, value: &str) {
        if let Some(el) = self.element_mut(node) {
            el.attributes.insert(name.to_owned(), value.to_owned());
        }
    }

    fn set_inner_html(&mut self, node: &Node, html: &str) {
        if let Some(el) = self.element_mut(node) {
            html.clone_into(&mut el.inner_html);
        }
    }

    fn set_class_name(&mut self, node: &Node, class_name: &str) {
        if let Some(el) = self.element_mut(node) {
            el.classes = class_name.split_whitespace().map(str::to_owned).collect();
        }
    }

    fn set_class(&mut self, node: &Node, class: &str, present: bool) {
        if let Some(el) = self.element_mut(node) {
            if present {
                el.classes.insert(class.to_owned());
            } else {
                el.classes.remove(class);
            }
        }
    }

    fn scroll_into_view(&mut self, node: &Node) {
        if self.has_element(node) {
            self.scrolled.push(node.clone());
        }
    }

    fn storage_get(&self, key: &str) -> Option<String> {
        self.storage.get(key).cloned()
    }

    fn storage_set(&mut self, key: &str, value: &str) {
        self.storage.insert(key.to_owned(), value.to_owned());
    }

    fn now(&self) -> LocalTime {
        self.now.clone()
    }

    fn start_interval(&mut self, kind: TimerKind, period_ms: u32) -> TimerId {
        self.scheduler.schedule_interval(kind, period_ms)
    }

    fn start_timeout(&mut self, kind: TimerKind, delay_ms: u32) -> TimerId {
        self.scheduler.schedule_timeout(kind, delay_ms)
    }

    fn cancel_timer(&mut self, id: TimerId) {
        self.scheduler.cancel(id);
    }
}
