use super::*;
use crate::clock::LocalTime;
use crate::consts::{MENU_HIDDEN_CLASS, SUN_ICON_HTML, THEME_ATTRIBUTE};
use crate::host::Node;
use crate::memory::MemoryHost;

// =============================================================
// Helpers
// =============================================================

fn full_page() -> MemoryHost {
    let mut host = MemoryHost::full_page()
        .with_class(Node::Menu, MENU_HIDDEN_CLASS)
        .with_text(Node::Title, "Artificial Intelligence")
        .with_element(Node::Fragment("contact".to_owned()));
    host.set_now(LocalTime { year: 2026, hour: 15, minute: 4, second: 5, zone: "EST".to_owned() });
    host.set_scroll(300.0, 0.0);
    host
}

fn started(host: &mut MemoryHost) -> PageController {
    let mut controller = PageController::new(PageConfig::default());
    controller.start(host).expect("first start succeeds");
    controller
}

fn theme_attr(host: &MemoryHost) -> Option<String> {
    host.attribute(&Node::Root, THEME_ATTRIBUTE)
}

// =============================================================
// Start
// =============================================================

#[test]
fn start_on_full_page_binds_everything() {
    let mut host = full_page();
    let mut controller = PageController::new(PageConfig::default());
    let bindings = controller.start(&mut host).expect("start");
    assert_eq!(bindings, Bindings { theme_toggle: true, mobile_menu: true, scroll: true, cursor: true });
    assert!(controller.is_started());
}

#[test]
fn start_on_full_page_renders_initial_state() {
    let mut host = full_page();
    let _controller = started(&mut host);
    assert_eq!(host.text(&Node::Year), Some("2026"));
    assert_eq!(host.text(&Node::Time), Some("03:04:05 PM EST"));
    assert_eq!(theme_attr(&host).as_deref(), Some("dark"));
    assert_eq!(host.inner_html(&Node::ThemeToggle), Some(SUN_ICON_HTML));
    assert_eq!(host.style(&Node::NavWrapper, "opacity"), Some("1"));
    // clock tick + title rotation
    assert_eq!(host.scheduler().pending(), 2);
}

#[test]
fn start_on_empty_page_binds_nothing() {
    let mut host = MemoryHost::new();
    let mut controller = PageController::new(PageConfig::default());
    let bindings = controller.start(&mut host).expect("start");
    assert_eq!(bindings, Bindings::default());
    assert_eq!(host.scheduler().pending(), 0);
    assert_eq!(theme_attr(&host).as_deref(), Some("dark"));
}

#[test]
fn second_start_is_rejected() {
    let mut host = full_page();
    let mut controller = started(&mut host);
    let err = controller.start(&mut host).unwrap_err();
    assert!(matches!(err, PageError::AlreadyStarted));
    assert_eq!(host.scheduler().pending(), 2);
}

#[test]
fn custom_storage_key_is_used() {
    let mut host = MemoryHost::new();
    let config = PageConfig { storage_key: "crl-theme".to_owned(), ..PageConfig::default() };
    let mut controller = PageController::new(config);
    controller.start(&mut host).expect("start");
    assert_eq!(host.stored("crl-theme"), Some("dark"));
    assert_eq!(host.stored("theme"), None);
}

// =============================================================
// Dispatch
// =============================================================

#[test]
fn theme_toggle_click_switches_theme() {
    let mut host = full_page();
    let mut controller = started(&mut host);
    controller.handle(&mut host, Event::ThemeToggleClicked);
    assert_eq!(theme_attr(&host).as_deref(), Some("light"));
    assert_eq!(host.stored("theme"), Some("light"));
    controller.handle(&mut host, Event::ThemeToggleClicked);
    assert_eq!(theme_attr(&host).as_deref(), Some("dark"));
}

#[test]
fn menu_button_then_link() {
    let mut host = full_page();
    let mut controller = started(&mut host);

    controller.handle(&mut host, Event::MenuButtonClicked);
    assert_eq!(controller.menu_state(), MenuState::Open);
    assert!(!host.has_class(&Node::Menu, MENU_HIDDEN_CLASS));
    assert!(host.has_class(&Node::MenuIcon, "fa-times"));

    controller.handle(&mut host, Event::MenuLinkClicked);
    assert_eq!(controller.menu_state(), MenuState::Closed);
    assert!(host.has_class(&Node::Menu, MENU_HIDDEN_CLASS));
    assert!(host.has_class(&Node::MenuIcon, "fa-bars"));
}

#[test]
fn scroll_event_updates_nav() {
    let mut host = full_page();
    let mut controller = started(&mut host);
    host.set_scroll(-10.0, 500.0);
    controller.handle(&mut host, Event::Scrolled);
    assert_eq!(host.style(&Node::SignatureLogo, "opacity"), Some("0"));
    assert_eq!(host.style(&Node::ThemeToggle, "pointer-events"), Some("none"));
}

#[test]
fn pointer_and_hover_events_drive_cursor() {
    let mut host = full_page();
    let mut controller = started(&mut host);
    controller.handle(&mut host, Event::PointerMoved { x: 10.0, y: 20.0 });
    controller.handle(&mut host, Event::HoverEntered);
    assert_eq!(host.style(&Node::CursorDot, "left"), Some("10px"));
    assert_eq!(host.style(&Node::CursorDot, "transform"), Some("translate(-50%, -50%) scale(0.7)"));
    controller.handle(&mut host, Event::HoverExited);
    assert_eq!(host.style(&Node::CursorDot, "transform"), Some("translate(-50%, -50%) scale(1)"));
}

#[test]
fn anchor_activation_prevents_default_and_scrolls_once() {
    let mut host = full_page();
    let mut controller = started(&mut host);
    let outcome = controller.handle(&mut host, Event::AnchorActivated { href: "#contact".to_owned() });
    assert_eq!(outcome, Propagation::PreventDefault);
    assert_eq!(host.scrolled().len(), 1);
}

#[test]
fn anchor_without_target_scrolls_nothing() {
    let mut host = full_page();
    let mut controller = started(&mut host);
    let outcome = controller.handle(&mut host, Event::AnchorActivated { href: "#missing".to_owned() });
    assert_eq!(outcome, Propagation::PreventDefault);
    assert!(host.scrolled().is_empty());
}

#[test]
fn clock_ticks_rerender_time() {
    let mut host = full_page();
    let mut controller = started(&mut host);
    host.set_now(LocalTime { year: 2026, hour: 15, minute: 4, second: 6, zone: "EST".to_owned() });
    host.advance(&mut controller, 1000);
    assert_eq!(host.text(&Node::Time), Some("03:04:06 PM EST"));
}

#[test]
fn events_before_start_are_ignored() {
    let mut host = full_page();
    let mut controller = PageController::new(PageConfig::default());
    controller.handle(&mut host, Event::ThemeToggleClicked);
    controller.handle(&mut host, Event::MenuButtonClicked);
    assert_eq!(theme_attr(&host), None);
    assert_eq!(controller.menu_state(), MenuState::Closed);
}

// =============================================================
// Debug surface
// =============================================================

#[test]
fn debug_set_theme_and_toggle() {
    let mut host = full_page();
    let controller = started(&mut host);
    controller.set_theme(&mut host, Theme::Light);
    assert_eq!(theme_attr(&host).as_deref(), Some("light"));
    assert_eq!(controller.toggle_theme(&mut host), Theme::Dark);
    assert_eq!(host.stored("theme"), Some("dark"));
}

#[test]
fn debug_update_time_renders_now() {
    let mut host = full_page();
    let _controller = started(&mut host);
    host.set_now(LocalTime { year: 2026, hour: 0, minute: 0, second: 1, zone: "UTC".to_owned() });
    PageController::update_time(&mut host);
    assert_eq!(host.text(&Node::Time), Some("12:00:01 AM UTC"));
}

// =============================================================
// Teardown
// =============================================================

#[test]
fn teardown_cancels_all_timers() {
    let mut host = full_page();
    let mut controller = started(&mut host);
    host.advance(&mut controller, 3000);
    assert_eq!(host.scheduler().pending(), 3);
    controller.teardown(&mut host);
    assert_eq!(host.scheduler().pending(), 0);
    assert!(!controller.is_started());
}

#[test]
fn events_after_teardown_are_ignored() {
    let mut host = full_page();
    let mut controller = started(&mut host);
    controller.teardown(&mut host);
    controller.handle(&mut host, Event::MenuButtonClicked);
    assert_eq!(controller.menu_state(), MenuState::Closed);
    let before = host.text(&Node::Title).map(str::to_owned);
    host.advance(&mut controller, 10_000);
    assert_eq!(host.text(&Node::Title).map(str::to_owned), before);
}
