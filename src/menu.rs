//! Mobile navigation menu.
//!
//! [`MenuState`] is the source of truth; the container's `hidden` class and
//! the button icon are rendered from it after every transition.

#[cfg(test)]
#[path = "menu_test.rs"]
mod menu_test;

use crate::consts::{MENU_CLOSED_ICON_CLASS, MENU_HIDDEN_CLASS, MENU_OPEN_ICON_CLASS};
use crate::host::{Host, Node};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MenuState {
    Open,
    #[default]
    Closed,
}

impl MenuState {
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Open => Self::Closed,
            Self::Closed => Self::Open,
        }
    }

    #[must_use]
    pub fn icon_class(self) -> &'static str {
        match self {
            Self::Open => MENU_OPEN_ICON_CLASS,
            Self::Closed => MENU_CLOSED_ICON_CLASS,
        }
    }
}

#[derive(Debug, Default)]
pub struct MobileMenu {
    state: MenuState,
    bound: bool,
}

impl MobileMenu {
    /// Bind if both the button and the container exist. The initial state is
    /// read once from the container's markup.
    pub fn initialize(&mut self, host: &impl Host) {
        if !host.has_element(&Node::MenuButton) || !host.has_element(&Node::Menu) {
            return;
        }
        self.state = if host.has_class(&Node::Menu, MENU_HIDDEN_CLASS) {
            MenuState::Closed
        } else {
            MenuState::Open
        };
        self.bound = true;
    }

    /// Menu button: flip open/closed.
    pub fn on_button(&mut self, host: &mut impl Host) {
        if self.bound {
            self.transition(host, self.state.toggled());
        }
    }

    /// Link inside the menu: always close.
    pub fn on_link(&mut self, host: &mut impl Host) {
        if self.bound {
            self.transition(host, MenuState::Closed);
        }
    }

    #[must_use]
    pub fn state(&self) -> MenuState {
        self.state
    }

    #[must_use]
    pub fn is_bound(&self) -> bool {
        self.bound
    }

    fn transition(&mut self, host: &mut impl Host, next: MenuState) {
        self.state = next;
        host.set_class(&Node::Menu, MENU_HIDDEN_CLASS, next == MenuState::Closed);
        host.set_class_name(&Node::MenuIcon, next.icon_class());
    }
}
