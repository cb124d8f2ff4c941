//! Smooth scrolling for in-page `#fragment` links.

#[cfg(test)]
#[path = "anchor_test.rs"]
mod anchor_test;

use crate::event::Propagation;
use crate::host::{Host, Node};

/// The fragment id of an in-page link, or `None` for other links and a bare `#`.
#[must_use]
pub fn fragment_of(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

/// Handle activation of a link. In-page links never navigate; they scroll
/// to their target when it exists.
pub fn on_activate(host: &mut impl Host, href: &str) -> Propagation {
    if !href.starts_with('#') {
        return Propagation::Continue;
    }
    if let Some(id) = fragment_of(href) {
        let target = Node::Fragment(id.to_owned());
        if host.has_element(&target) {
            host.scroll_into_view(&target);
        } else {
            log::debug!("no scroll target for {href}");
        }
    }
    Propagation::PreventDefault
}
