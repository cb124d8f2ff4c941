//! Timer handles and a virtual-time scheduler.
//!
//! Hosts hand out a [`TimerId`] for every timer they start; the controller
//! keeps those ids so it can cancel everything on teardown. [`Scheduler`] is
//! the deterministic clock used by [`crate::memory::MemoryHost`]: time only
//! moves when the caller advances it.

#[cfg(test)]
#[path = "timer_test.rs"]
mod timer_test;

/// Opaque handle to a started timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(pub u64);

/// What a timer drives when it fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimerKind {
    /// Re-render the clock.
    ClockTick,
    /// Advance the rotating title and fade it out.
    TitleRotate,
    /// Swap the faded-out title text and fade it back in.
    TitleSwap,
}

#[derive(Debug, Clone)]
struct Entry {
    id: TimerId,
    kind: TimerKind,
    due_ms: u64,
    period_ms: Option<u64>,
}

/// Virtual-time timer queue.
#[derive(Debug, Default)]
pub struct Scheduler {
    now_ms: u64,
    next_id: u64,
    entries: Vec<Entry>,
}

impl Scheduler {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current virtual time in milliseconds.
    #[must_use]
    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    /// Number of timers still scheduled.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.entries.len()
    }

    /// Whether a timer with this id is still scheduled.
    #[must_use]
    pub fn is_scheduled(&self, id: TimerId) -> bool {
        self.entries.iter().any(|e| e.id == id)
    }

    /// Schedule `kind` to fire every `period_ms`, first at `now + period_ms`.
    pub fn schedule_interval(&mut self, kind: TimerKind, period_ms: u32) -> TimerId {
        // A zero period would fire forever within a single advance.
        let period = u64::from(period_ms.max(1));
        self.push(kind, period, Some(period))
    }

    /// Schedule `kind` to fire once at `now + delay_ms`.
    pub fn schedule_timeout(&mut self, kind: TimerKind, delay_ms: u32) -> TimerId {
        self.push(kind, u64::from(delay_ms), None)
    }

    /// Remove a timer. Returns `false` if it already fired or was cancelled.
    pub fn cancel(&mut self, id: TimerId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.id != id);
        self.entries.len() != before
    }

    /// Pop the earliest timer due at or before `until_ms`, moving the clock to
    /// its deadline. Intervals are rescheduled; timeouts are removed.
    ///
    /// Ties fire in scheduling order.
    pub fn pop_due(&mut self, until_ms: u64) -> Option<TimerKind> {
        let idx = self
            .entries
            .iter()
            .enumerate()
            .filter(|(_, e)| e.due_ms <= until_ms)
            .min_by_key(|(_, e)| (e.due_ms, e.id))
            .map(|(idx, _)| idx)?;

        let entry = &mut self.entries[idx];
        self.now_ms = self.now_ms.max(entry.due_ms);
        let kind = entry.kind;
        match entry.period_ms {
            Some(period) => entry.due_ms += period,
            None => {
                self.entries.swap_remove(idx);
            }
        }
        Some(kind)
    }

    /// Move the clock forward to `until_ms` without firing anything.
    pub fn settle(&mut self, until_ms: u64) {
        self.now_ms = self.now_ms.max(until_ms);
    }

    fn push(&mut self, kind: TimerKind, delay: u64, period_ms: Option<u64>) -> TimerId {
        self.next_id += 1;
        let id = TimerId(self.next_id);
        self.entries.push(Entry { id, kind, due_ms: self.now_ms + delay, period_ms });
        id
    }
}
