//! The page controller: one-shot feature initialization and event dispatch.
//!
//! `PageController` owns the state of all seven features and never touches
//! the browser directly; every read and write goes through a [`Host`]. The
//! browser glue forwards DOM events and timer callbacks to [`PageController::handle`]
//! and applies the returned [`Propagation`].

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

use crate::anchor;
use crate::clock::Clock;
use crate::config::PageConfig;
use crate::cursor::CustomCursor;
use crate::error::PageError;
use crate::event::{Event, Propagation};
use crate::host::Host;
use crate::menu::{MenuState, MobileMenu};
use crate::nav::ScrollNav;
use crate::theme::{Theme, ThemeSwitch};
use crate::timer::TimerKind;
use crate::title::TitleRotation;

/// Which listeners the host should attach after [`PageController::start`].
///
/// Anchor links are always intercepted and are not listed.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Bindings {
    pub theme_toggle: bool,
    pub mobile_menu: bool,
    pub scroll: bool,
    pub cursor: bool,
}

pub struct PageController {
    config: PageConfig,
    theme: ThemeSwitch,
    clock: Clock,
    title: TitleRotation,
    menu: MobileMenu,
    nav: ScrollNav,
    cursor: CustomCursor,
    started: bool,
}

impl PageController {
    #[must_use]
    pub fn new(config: PageConfig) -> Self {
        Self {
            theme: ThemeSwitch::new(config.storage_key.clone()),
            title: TitleRotation::new(config.titles.clone()),
            clock: Clock::default(),
            menu: MobileMenu::default(),
            nav: ScrollNav::default(),
            cursor: CustomCursor::default(),
            started: false,
            config,
        }
    }

    #[must_use]
    pub fn config(&self) -> &PageConfig {
        &self.config
    }

    // --- Lifecycle ---

    /// Initialize every feature once, in page order.
    pub fn start(&mut self, host: &mut impl Host) -> Result<Bindings, PageError> {
        if self.started {
            return Err(PageError::AlreadyStarted);
        }
        self.started = true;

        self.clock.initialize(host);
        self.title.initialize(host);
        self.theme.initialize(host);
        self.menu.initialize(&*host);
        self.nav.initialize(host);
        self.cursor.initialize(&*host);

        let bindings = self.bindings();
        log::info!(
            "page controller initialized: clock={} title={} theme_toggle={} menu={} scroll={} cursor={}",
            self.clock.is_ticking(),
            self.title.is_running(),
            bindings.theme_toggle,
            bindings.mobile_menu,
            bindings.scroll,
            bindings.cursor,
        );
        Ok(bindings)
    }

    /// Cancel every timer. Events delivered afterwards are ignored.
    pub fn teardown(&mut self, host: &mut impl Host) {
        if !self.started {
            return;
        }
        self.clock.teardown(host);
        self.title.teardown(host);
        self.started = false;
        log::info!("page controller torn down");
    }

    #[must_use]
    pub fn is_started(&self) -> bool {
        self.started
    }

    #[must_use]
    pub fn bindings(&self) -> Bindings {
        Bindings {
            theme_toggle: self.theme.is_toggle_bound(),
            mobile_menu: self.menu.is_bound(),
            scroll: self.nav.is_bound(),
            cursor: self.cursor.is_bound(),
        }
    }

    // --- Events ---

    /// Dispatch one event to the feature that owns it.
    pub fn handle(&mut self, host: &mut impl Host, event: Event) -> Propagation {
        if !self.started {
            log::debug!("dropping {event:?}: controller not running");
            return Propagation::Continue;
        }
        match event {
            Event::Timer(TimerKind::ClockTick) => Clock::update_time(host),
            Event::Timer(TimerKind::TitleRotate) => self.title.on_rotate(host),
            Event::Timer(TimerKind::TitleSwap) => self.title.on_swap(host),
            Event::ThemeToggleClicked => {
                if self.theme.is_toggle_bound() {
                    self.theme.toggle_theme(host);
                }
            }
            Event::MenuButtonClicked => self.menu.on_button(host),
            Event::MenuLinkClicked => self.menu.on_link(host),
            Event::Scrolled => {
                self.nav.on_scroll(host);
            }
            Event::PointerMoved { x, y } => self.cursor.on_pointer_move(host, x, y),
            Event::HoverEntered => self.cursor.on_hover(host, true),
            Event::HoverExited => self.cursor.on_hover(host, false),
            Event::AnchorActivated { href } => return anchor::on_activate(host, &href),
        }
        Propagation::Continue
    }

    // --- Debug surface ---

    pub fn set_theme(&self, host: &mut impl Host, theme: Theme) {
        self.theme.set_theme(host, theme);
    }

    pub fn toggle_theme(&self, host: &mut impl Host) -> Theme {
        self.theme.toggle_theme(host)
    }

    pub fn update_time(host: &mut impl Host) {
        Clock::update_time(host);
    }

    // --- Queries ---

    #[must_use]
    pub fn menu_state(&self) -> MenuState {
        self.menu.state()
    }

    #[must_use]
    pub fn title_index(&self) -> usize {
        self.title.index()
    }
}
