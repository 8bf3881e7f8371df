//! Deferred-event abstraction.
//!
//! The controller never sleeps. It asks a [`Scheduler`] to deliver a
//! [`TimerEvent`] after a delay and the host hands the event back through
//! `WidgetController::fire` when it is due. The browser host backs this with
//! `gloo-timers`; tests and headless hosts use [`ManualScheduler`], a virtual
//! clock advanced by hand.

#[cfg(test)]
#[path = "scheduler_test.rs"]
mod scheduler_test;

/// Handle for a scheduled event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(pub u64);

/// Work the controller deferred.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimerEvent {
    /// Simulated reply latency elapsed for this prompt.
    Reply { prompt: String },
    /// Proactive nudge window elapsed for this page.
    Proactive { page: String },
}

pub trait Scheduler {
    /// Current time in milliseconds. Only used to stamp messages.
    fn now_ms(&self) -> f64;

    /// Deliver `event` after `delay_ms`.
    fn schedule(&mut self, delay_ms: u32, event: TimerEvent) -> TimerId;

    /// Drop a pending event. Unknown or already-fired ids are ignored.
    fn cancel(&mut self, id: TimerId);
}

#[derive(Debug, Clone)]
struct Pending {
    due_ms: u64,
    id: TimerId,
    event: TimerEvent,
}

/// Virtual-clock scheduler. Nothing fires until [`ManualScheduler::pop_due`]
/// is called.
#[derive(Debug, Clone, Default)]
pub struct ManualScheduler {
    now_ms: u64,
    next_id: u64,
    pending: Vec<Pending>,
}

impl ManualScheduler {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn now(&self) -> u64 {
        self.now_ms
    }

    #[must_use]
    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    #[must_use]
    pub fn is_pending(&self, id: TimerId) -> bool {
        self.pending.iter().any(|p| p.id == id)
    }

    /// Events currently queued, earliest first.
    #[must_use]
    pub fn pending_events(&self) -> Vec<&TimerEvent> {
        let mut queued = self.pending.iter().collect::<Vec<_>>();
        queued.sort_by_key(|p| (p.due_ms, p.id));
        queued.into_iter().map(|p| &p.event).collect()
    }

    /// Remove and return the earliest event due at or before `until_ms`,
    /// moving the clock to its due time. Ties fire in scheduling order.
    pub fn pop_due(&mut self, until_ms: u64) -> Option<(TimerId, TimerEvent)> {
        let index = self
            .pending
            .iter()
            .enumerate()
            .filter(|(_, p)| p.due_ms <= until_ms)
            .min_by_key(|(_, p)| (p.due_ms, p.id))
            .map(|(i, _)| i)?;
        let fired = self.pending.remove(index);
        self.now_ms = self.now_ms.max(fired.due_ms);
        Some((fired.id, fired.event))
    }

    /// Set the clock to `target_ms` without firing anything.
    pub fn set_now(&mut self, target_ms: u64) {
        self.now_ms = target_ms;
    }
}

impl Scheduler for ManualScheduler {
    #[allow(clippy::cast_precision_loss)]
    fn now_ms(&self) -> f64 {
        self.now_ms as f64
    }

    fn schedule(&mut self, delay_ms: u32, event: TimerEvent) -> TimerId {
        self.next_id += 1;
        let id = TimerId(self.next_id);
        self.pending.push(Pending { due_ms: self.now_ms.saturating_add(u64::from(delay_ms)), id, event });
        id
    }

    fn cancel(&mut self, id: TimerId) {
        self.pending.retain(|p| p.id != id);
    }
}
