//! Dark/light theme switching with a persisted preference.
//!
//! The active theme lives in the root element's `data-theme` attribute and is
//! mirrored to storage on every change. The toggle button shows a sun while
//! the dark theme is active and a moon otherwise.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use std::fmt;
use std::str::FromStr;

use crate::consts::{MOON_ICON_HTML, SUN_ICON_HTML, THEME_ATTRIBUTE};
use crate::host::{Host, Node};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }

    /// The other theme.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    /// Markup placed inside the toggle button while this theme is active.
    #[must_use]
    pub fn icon_html(self) -> &'static str {
        match self {
            Self::Dark => SUN_ICON_HTML,
            Self::Light => MOON_ICON_HTML,
        }
    }

    /// Interpret the root attribute. Unset reads as dark; any value other than
    /// `dark` reads as light, so toggling it always lands on dark.
    #[must_use]
    pub fn from_attribute(value: Option<&str>) -> Self {
        match value {
            None | Some("dark") => Self::Dark,
            Some(_) => Self::Light,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownTheme(pub String);

impl fmt::Display for UnknownTheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown theme: {}", self.0)
    }
}

impl FromStr for Theme {
    type Err = UnknownTheme;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dark" => Ok(Self::Dark),
            "light" => Ok(Self::Light),
            other => Err(UnknownTheme(other.to_owned())),
        }
    }
}

/// Theme feature state.
#[derive(Debug)]
pub struct ThemeSwitch {
    storage_key: String,
    toggle_bound: bool,
}

impl ThemeSwitch {
    #[must_use]
    pub fn new(storage_key: impl Into<String>) -> Self {
        Self { storage_key: storage_key.into(), toggle_bound: false }
    }

    /// Apply the persisted theme (dark when absent or unrecognized) and bind
    /// the toggle button if the page has one.
    pub fn initialize(&mut self, host: &mut impl Host) -> Theme {
        let theme = match host.storage_get(&self.storage_key).map(|saved| saved.parse::<Theme>()) {
            Some(Ok(theme)) => theme,
            Some(Err(err)) => {
                log::debug!("ignoring stored preference: {err}");
                Theme::default()
            }
            None => Theme::default(),
        };
        self.set_theme(host, theme);
        self.toggle_bound = host.has_element(&Node::ThemeToggle);
        theme
    }

    /// Activate `theme`: root attribute, storage, and toggle icon.
    pub fn set_theme(&self, host: &mut impl Host, theme: Theme) {
        host.set_attribute(&Node::Root, THEME_ATTRIBUTE, theme.as_str());
        host.storage_set(&self.storage_key, theme.as_str());
        host.set_inner_html(&Node::ThemeToggle, theme.icon_html());
        log::debug!("theme set to {theme}");
    }

    /// Switch to the other theme and return it.
    pub fn toggle_theme(&self, host: &mut impl Host) -> Theme {
        let next = Self::current(&*host).toggled();
        self.set_theme(host, next);
        next
    }

    /// The theme the root attribute currently declares.
    #[must_use]
    pub fn current(host: &impl Host) -> Theme {
        Theme::from_attribute(host.attribute(&Node::Root, THEME_ATTRIBUTE).as_deref())
    }

    #[must_use]
    pub fn is_toggle_bound(&self) -> bool {
        self.toggle_bound
    }
}
