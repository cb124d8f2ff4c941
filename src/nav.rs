//! Navbar visibility driven by scroll position.
//!
//! The nav wrapper, signature logo, and theme toggle stay visible while the
//! hero section still reaches into the viewport or the page is near the top.
//! Hidden controls also stop receiving pointer events.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

use crate::consts::NAV_SCROLL_THRESHOLD_PX;
use crate::host::{Host, Node};

const NAV_NODES: [Node; 3] = [Node::NavWrapper, Node::SignatureLogo, Node::ThemeToggle];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavVisibility {
    Visible,
    Hidden,
}

impl NavVisibility {
    /// Decide from the hero's viewport-relative bottom edge and the scroll offset.
    #[must_use]
    pub fn compute(hero_bottom: f64, scroll_y: f64) -> Self {
        if hero_bottom > 0.0 || scroll_y < NAV_SCROLL_THRESHOLD_PX {
            Self::Visible
        } else {
            Self::Hidden
        }
    }

    #[must_use]
    pub fn opacity(self) -> &'static str {
        match self {
            Self::Visible => "1",
            Self::Hidden => "0",
        }
    }

    #[must_use]
    pub fn pointer_events(self) -> &'static str {
        match self {
            Self::Visible => "auto",
            Self::Hidden => "none",
        }
    }
}

#[derive(Debug, Default)]
pub struct ScrollNav {
    bound: bool,
}

impl ScrollNav {
    /// Bind only when the page has a hero section, then apply once.
    pub fn initialize(&mut self, host: &mut impl Host) {
        self.bound = host.has_element(&Node::Hero);
        self.on_scroll(host);
    }

    pub fn on_scroll(&self, host: &mut impl Host) -> Option<NavVisibility> {
        if !self.bound {
            return None;
        }
        let hero_bottom = host.hero_bottom()?;
        let visibility = NavVisibility::compute(hero_bottom, host.scroll_y());
        for node in &NAV_NODES {
            host.set_style(node, "opacity", visibility.opacity());
            host.set_style(node, "pointer-events", visibility.pointer_events());
        }
        Some(visibility)
    }

    #[must_use]
    pub fn is_bound(&self) -> bool {
        self.bound
    }
}
