use super::*;
use crate::memory::MemoryHost;

fn at(hour: u32, minute: u32, second: u32) -> LocalTime {
    LocalTime { year: 2026, hour, minute, second, zone: "EST".to_owned() }
}

// =============================================================
// format_time
// =============================================================

#[test]
fn afternoon_uses_pm_and_two_digits() {
    assert_eq!(format_time(&at(15, 4, 5)), "03:04:05 PM EST");
}

#[test]
fn midnight_renders_as_twelve_am() {
    assert_eq!(format_time(&at(0, 0, 0)), "12:00:00 AM EST");
}

#[test]
fn noon_renders_as_twelve_pm() {
    assert_eq!(format_time(&at(12, 30, 59)), "12:30:59 PM EST");
}

#[test]
fn morning_uses_am() {
    assert_eq!(format_time(&at(9, 41, 0)), "09:41:00 AM EST");
}

#[test]
fn empty_zone_is_omitted() {
    let mut time = at(23, 59, 59);
    time.zone = String::new();
    assert_eq!(format_time(&time), "11:59:59 PM");
}

// =============================================================
// Clock feature
// =============================================================

#[test]
fn initialize_writes_year_and_time() {
    let mut host = MemoryHost::new().with_element(Node::Year).with_element(Node::Time);
    host.set_now(at(15, 4, 5));
    let mut clock = Clock::default();
    clock.initialize(&mut host);
    assert_eq!(host.text(&Node::Year), Some("2026"));
    assert_eq!(host.text(&Node::Time), Some("03:04:05 PM EST"));
    assert!(clock.is_ticking());
    assert_eq!(host.scheduler().pending(), 1);
}

#[test]
fn year_only_page_starts_no_timer() {
    let mut host = MemoryHost::new().with_element(Node::Year);
    host.set_now(at(8, 0, 0));
    let mut clock = Clock::default();
    clock.initialize(&mut host);
    assert_eq!(host.text(&Node::Year), Some("2026"));
    assert!(!clock.is_ticking());
    assert_eq!(host.scheduler().pending(), 0);
}

#[test]
fn update_time_without_display_is_noop() {
    let mut host = MemoryHost::new();
    Clock::update_time(&mut host);
    assert!(host.text(&Node::Time).is_none());
}

#[test]
fn teardown_cancels_tick() {
    let mut host = MemoryHost::new().with_element(Node::Time);
    let mut clock = Clock::default();
    clock.initialize(&mut host);
    clock.teardown(&mut host);
    assert!(!clock.is_ticking());
    assert_eq!(host.scheduler().pending(), 0);
}
