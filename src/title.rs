//! Rotating hero title.
//!
//! Every [`TITLE_ROTATE_MS`] the index advances and the element fades out;
//! [`TITLE_FADE_MS`] later the text is swapped and the element fades back in.
//! The swap delay is shorter than the rotation period, so at most one swap is
//! ever pending.

#[cfg(test)]
#[path = "title_test.rs"]
mod title_test;

use crate::consts::{TITLE_FADE_MS, TITLE_ROTATE_MS, TITLE_TRANSITION};
use crate::host::{Host, Node};
use crate::timer::{TimerId, TimerKind};

#[derive(Debug)]
pub struct TitleRotation {
    titles: Vec<String>,
    index: usize,
    rotation: Option<TimerId>,
    pending_swap: Option<TimerId>,
}

impl TitleRotation {
    #[must_use]
    pub fn new(titles: Vec<String>) -> Self {
        Self { titles, index: 0, rotation: None, pending_swap: None }
    }

    /// Start rotating if the page has a title element and there is a label to show.
    pub fn initialize(&mut self, host: &mut impl Host) {
        if !host.has_element(&Node::Title) || self.titles.is_empty() {
            return;
        }
        host.set_style(&Node::Title, "transition", TITLE_TRANSITION);
        self.rotation = Some(host.start_interval(TimerKind::TitleRotate, TITLE_ROTATE_MS));
    }

    /// Phase one: advance and fade out, then schedule the swap.
    pub fn on_rotate(&mut self, host: &mut impl Host) {
        if self.rotation.is_none() {
            return;
        }
        self.index = (self.index + 1) % self.titles.len();
        host.set_style(&Node::Title, "opacity", "0");
        if let Some(stale) = self.pending_swap.take() {
            host.cancel_timer(stale);
        }
        self.pending_swap = Some(host.start_timeout(TimerKind::TitleSwap, TITLE_FADE_MS));
    }

    /// Phase two: show the new label and fade in.
    pub fn on_swap(&mut self, host: &mut impl Host) {
        if self.pending_swap.take().is_none() {
            return;
        }
        host.set_text(&Node::Title, &self.titles[self.index]);
        host.set_style(&Node::Title, "opacity", "1");
    }

    /// Index of the label most recently rotated to.
    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.rotation.is_some()
    }

    /// Stop rotating and drop any pending swap.
    pub fn teardown(&mut self, host: &mut impl Host) {
        for id in [self.rotation.take(), self.pending_swap.take()].into_iter().flatten() {
            host.cancel_timer(id);
        }
    }
}
