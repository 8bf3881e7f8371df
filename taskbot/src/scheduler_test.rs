#![allow(clippy::float_cmp)]

use super::*;

fn reply(prompt: &str) -> TimerEvent {
    TimerEvent::Reply { prompt: prompt.to_owned() }
}

// =============================================================
// schedule / cancel
// =============================================================

#[test]
fn schedule_assigns_distinct_ids() {
    let mut sched = ManualScheduler::new();
    let a = sched.schedule(10, reply("a"));
    let b = sched.schedule(10, reply("b"));
    assert_ne!(a, b);
    assert_eq!(sched.pending_count(), 2);
}

#[test]
fn cancel_removes_only_that_event() {
    let mut sched = ManualScheduler::new();
    let a = sched.schedule(10, reply("a"));
    let b = sched.schedule(10, reply("b"));
    sched.cancel(a);
    assert!(!sched.is_pending(a));
    assert!(sched.is_pending(b));
}

#[test]
fn cancel_unknown_id_is_noop() {
    let mut sched = ManualScheduler::new();
    sched.schedule(10, reply("a"));
    sched.cancel(TimerId(999));
    assert_eq!(sched.pending_count(), 1);
}

// =============================================================
// pop_due
// =============================================================

fn drain_due(sched: &mut ManualScheduler, until_ms: u64) -> Vec<TimerEvent> {
    std::iter::from_fn(|| sched.pop_due(until_ms)).map(|(_, e)| e).collect()
}

#[test]
fn nothing_fires_before_due() {
    let mut sched = ManualScheduler::new();
    sched.schedule(1500, reply("a"));
    assert!(sched.pop_due(1499).is_none());
    assert_eq!(sched.now(), 0);
    assert_eq!(drain_due(&mut sched, 1500), vec![reply("a")]);
    assert_eq!(sched.pending_count(), 0);
}

#[test]
fn pop_due_fires_in_due_order() {
    let mut sched = ManualScheduler::new();
    sched.schedule(300, reply("late"));
    sched.schedule(100, reply("early"));
    sched.schedule(300, reply("late-second"));

    assert_eq!(drain_due(&mut sched, 1000), vec![reply("early"), reply("late"), reply("late-second")]);
    assert_eq!(sched.now(), 300);
}

#[test]
fn pop_due_moves_clock_to_event_time() {
    let mut sched = ManualScheduler::new();
    sched.schedule(250, reply("a"));
    let (_, event) = sched.pop_due(1000).unwrap();
    assert_eq!(event, reply("a"));
    assert_eq!(sched.now(), 250);
    assert_eq!(sched.now_ms(), 250.0);
}

#[test]
fn delays_are_relative_to_current_clock() {
    let mut sched = ManualScheduler::new();
    sched.set_now(5000);
    sched.schedule(100, reply("a"));
    assert!(sched.pop_due(5099).is_none());
    assert!(sched.pop_due(5100).is_some());
}

#[test]
fn pending_events_lists_earliest_first() {
    let mut sched = ManualScheduler::new();
    sched.schedule(20, TimerEvent::Proactive { page: "projects".to_owned() });
    sched.schedule(10, reply("a"));
    let queued = sched.pending_events();
    assert_eq!(queued[0], &reply("a"));
    assert_eq!(queued[1], &TimerEvent::Proactive { page: "projects".to_owned() });
}
