//! Browser-backed `Scheduler` for the assistant controller.
//!
//! SYSTEM CONTEXT
//! ==============
//! The controller asks for deferred events; this type turns each one into a
//! `gloo_timers` timeout that hands the event back through a sink bound after
//! the controller is built (the sink needs the signal holding the controller).
//! Outside the `csr` feature nothing ever fires.

#[cfg(test)]
#[path = "timers_test.rs"]
mod timers_test;

use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::Rc;

use taskbot::{Scheduler, TimerEvent, TimerId};

/// Receives due timer events.
pub type TimerSink = Rc<dyn Fn(TimerId, TimerEvent)>;

#[derive(Default)]
pub struct BrowserScheduler {
    next_id: u64,
    sink: Rc<RefCell<Option<TimerSink>>>,
    live: Rc<RefCell<HashSet<TimerId>>>,
}

impl BrowserScheduler {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Route due events to `sink`. Events due before binding are dropped.
    pub fn bind(&self, sink: TimerSink) {
        *self.sink.borrow_mut() = Some(sink);
    }

    #[must_use]
    pub fn live_count(&self) -> usize {
        self.live.borrow().len()
    }
}

impl Scheduler for BrowserScheduler {
    fn now_ms(&self) -> f64 {
        #[cfg(feature = "csr")]
        {
            js_sys::Date::now()
        }
        #[cfg(not(feature = "csr"))]
        {
            0.0
        }
    }

    fn schedule(&mut self, delay_ms: u32, event: TimerEvent) -> TimerId {
        self.next_id += 1;
        let id = TimerId(self.next_id);
        self.live.borrow_mut().insert(id);

        #[cfg(feature = "csr")]
        {
            let sink = Rc::clone(&self.sink);
            let live = Rc::clone(&self.live);
            gloo_timers::callback::Timeout::new(delay_ms, move || {
                if !live.borrow_mut().remove(&id) {
                    return;
                }
                // Release the borrow before the sink re-enters the scheduler.
                let handler = sink.borrow().clone();
                if let Some(handler) = handler {
                    handler(id, event);
                }
            })
            .forget();
        }
        #[cfg(not(feature = "csr"))]
        {
            _ = (delay_ms, event);
        }

        id
    }

    fn cancel(&mut self, id: TimerId) {
        self.live.borrow_mut().remove(&id);
    }
}
