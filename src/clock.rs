//! Live clock and copyright year.
//!
//! The year is written once at startup. The time display re-renders every
//! [`CLOCK_TICK_MS`] as a 12-hour `hh:mm:ss AM ZONE` string, the en-US
//! rendering with two-digit fields and a short zone name.

#[cfg(test)]
#[path = "clock_test.rs"]
mod clock_test;

use crate::consts::CLOCK_TICK_MS;
use crate::host::{Host, Node};
use crate::timer::{TimerId, TimerKind};

/// Wall-clock reading supplied by the host, already in local time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalTime {
    pub year: i32,
    /// 0 to 23.
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
    /// Short zone name, e.g. `EST` or `GMT+2`.
    pub zone: String,
}

impl Default for LocalTime {
    fn default() -> Self {
        Self { year: 1970, hour: 0, minute: 0, second: 0, zone: "UTC".to_owned() }
    }
}

/// Format a reading for the time display.
#[must_use]
pub fn format_time(time: &LocalTime) -> String {
    let (hour, meridiem) = match time.hour % 24 {
        0 => (12, "AM"),
        h @ 1..=11 => (h, "AM"),
        12 => (12, "PM"),
        h => (h - 12, "PM"),
    };
    let clock = format!("{hour:02}:{:02}:{:02} {meridiem}", time.minute, time.second);
    if time.zone.is_empty() { clock } else { format!("{clock} {}", time.zone) }
}

/// Clock feature state.
#[derive(Debug, Default)]
pub struct Clock {
    ticker: Option<TimerId>,
}

impl Clock {
    /// Write the year, render the time, and start the tick if a time display exists.
    pub fn initialize(&mut self, host: &mut impl Host) {
        let now = host.now();
        if host.has_element(&Node::Year) {
            host.set_text(&Node::Year, &now.year.to_string());
        }
        if host.has_element(&Node::Time) {
            host.set_text(&Node::Time, &format_time(&now));
            self.ticker = Some(host.start_interval(TimerKind::ClockTick, CLOCK_TICK_MS));
        }
    }

    /// Re-render the time display. No-op without one.
    pub fn update_time(host: &mut impl Host) {
        if host.has_element(&Node::Time) {
            let now = host.now();
            host.set_text(&Node::Time, &format_time(&now));
        }
    }

    #[must_use]
    pub fn is_ticking(&self) -> bool {
        self.ticker.is_some()
    }

    /// Stop the tick.
    pub fn teardown(&mut self, host: &mut impl Host) {
        if let Some(id) = self.ticker.take() {
            host.cancel_timer(id);
        }
    }
}
