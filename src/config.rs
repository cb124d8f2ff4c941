//! Page configuration.
//!
//! Every field has a default matching the lab site's markup, so an empty JSON
//! object (or no config at all) yields a working controller. In the browser
//! the JSON is read from an optional `<script type="application/json"
//! id="page-config">` element.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::{Deserialize, Serialize};

use crate::error::PageError;

/// Id of the optional inline JSON config element.
pub const CONFIG_ELEMENT_ID: &str = "page-config";

/// Element ids the controller looks up once at startup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ElementIds {
    pub theme_toggle: String,
    pub mobile_menu_button: String,
    pub mobile_menu: String,
    pub nav_wrapper: String,
    pub signature_logo: String,
    pub toggling_title: String,
    pub current_time: String,
    pub current_year: String,
    pub cursor_dot: String,
    pub cursor_outline: String,
}

impl Default for ElementIds {
    fn default() -> Self {
        Self {
            theme_toggle: "theme-toggle".to_owned(),
            mobile_menu_button: "mobile-menu-button".to_owned(),
            mobile_menu: "mobile-menu".to_owned(),
            nav_wrapper: "nav-wrapper".to_owned(),
            signature_logo: "signature-logo".to_owned(),
            toggling_title: "toggling-title".to_owned(),
            current_time: "current-time".to_owned(),
            current_year: "current-year".to_owned(),
            cursor_dot: "cursor-dot".to_owned(),
            cursor_outline: "cursor-outline".to_owned(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PageConfig {
    pub elements: ElementIds,
    /// CSS selector of the hero section used as the nav visibility reference.
    pub hero_selector: String,
    /// Labels cycled by the rotating title, in display order.
    pub titles: Vec<String>,
    /// `localStorage` key holding the theme preference.
    pub storage_key: String,
    /// Global (`window`) property that receives the debug functions.
    pub debug_namespace: String,
    pub log_level: String,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            elements: ElementIds::default(),
            hero_selector: ".hero-bg".to_owned(),
            titles: [
                "Artificial Intelligence",
                "Deep Learning",
                "Computer Vision",
                "Healthcare AI",
                "Robotics",
                "Machine Learning",
            ]
            .into_iter()
            .map(str::to_owned)
            .collect(),
            storage_key: "theme".to_owned(),
            debug_namespace: "CRL".to_owned(),
            log_level: "info".to_owned(),
        }
    }
}

impl PageConfig {
    /// Parse and validate a JSON config. Missing fields take their defaults.
    pub fn from_json(raw: &str) -> Result<Self, PageError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject configs the controller cannot run with.
    pub fn validate(&self) -> Result<(), PageError> {
        if self.titles.is_empty() {
            return Err(PageError::EmptyTitles);
        }
        self.level()?;
        Ok(())
    }

    /// The configured log level.
    pub fn level(&self) -> Result<log::Level, PageError> {
        self.log_level.parse().map_err(|_| PageError::LogLevel(self.log_level.clone()))
    }
}
