//! The assistant widget controller.
//!
//! DESIGN
//! ======
//! One struct owns everything the widget shows: mood, visibility, transcript,
//! gaze offset, and the two kinds of deferred work (reply latency and
//! proactive nudges). Time, randomness and the host page are injected, so the
//! controller is a plain state machine driven by method calls plus
//! [`WidgetController::fire`] for timer events the host delivers back.
//!
//! Overlapping replies are not serialized. Each submission schedules its own
//! reply event and the widget stays "composing" until every in-flight reply
//! has landed.

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

use log::{debug, info, warn};

use crate::actions::{self, ActionEffect, ActionId, HostActions, QUICK_ACTIONS};
use crate::config::TaskBotConfig;
use crate::gaze::{self, Vector2};
use crate::message::{ChatMessage, Transcript};
use crate::mood::Mood;
use crate::proactive;
use crate::random::RandomSource;
use crate::responder;
use crate::scheduler::{ManualScheduler, Scheduler, TimerEvent, TimerId};
use crate::visibility::Visibility;

pub const TOOLTIP_TEXT: &str = "Hi! I'm TaskBot, your productivity buddy! Click me for help 💫";

/// Greeting shown as the first transcript entry.
#[must_use]
pub fn greeting(user_name: Option<&str>) -> String {
    let first = user_name
        .and_then(|name| name.split_whitespace().next())
        .unwrap_or("there");
    format!("Hi {first}! I'm TaskBot, your productivity buddy! 🤖✨ How can I help you today?")
}

pub struct WidgetController<S, R, H> {
    config: TaskBotConfig,
    scheduler: S,
    random: R,
    host: H,
    page: String,
    mood: Mood,
    visibility: Visibility,
    transcript: Transcript,
    gaze_offset: Vector2,
    hovered: bool,
    context_menu_open: bool,
    pending_replies: Vec<TimerId>,
    proactive_timer: Option<TimerId>,
    proactive_hint: Option<&'static str>,
}

impl<S, R, H> WidgetController<S, R, H>
where
    S: Scheduler,
    R: RandomSource,
    H: HostActions,
{
    /// Mount a widget on `page` for `user_name`. The transcript starts with
    /// the greeting and a proactive nudge is rolled for the page.
    /// A config that fails [`TaskBotConfig::validate`] is replaced by the
    /// defaults.
    pub fn new(config: TaskBotConfig, scheduler: S, random: R, host: H, page: &str, user_name: Option<&str>) -> Self {
        let config = match config.validate() {
            Ok(()) => config,
            Err(err) => {
                warn!("taskbot: {err}; using default config");
                TaskBotConfig::default()
            }
        };
        let mut transcript = Transcript::new();
        transcript.push(ChatMessage::assistant(
            &greeting(user_name),
            actions::greeting_actions(),
            scheduler.now_ms(),
        ));
        let mut controller = Self {
            config,
            scheduler,
            random,
            host,
            page: page.to_owned(),
            mood: Mood::Happy,
            visibility: Visibility::Closed,
            transcript,
            gaze_offset: Vector2::ZERO,
            hovered: false,
            context_menu_open: false,
            pending_replies: Vec::new(),
            proactive_timer: None,
            proactive_hint: None,
        };
        controller.arm_proactive();
        controller
    }

    // --- Queries ---

    #[must_use]
    pub fn mood(&self) -> Mood {
        self.mood
    }

    #[must_use]
    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    #[must_use]
    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    /// True while at least one simulated reply is in flight.
    #[must_use]
    pub fn is_composing(&self) -> bool {
        !self.pending_replies.is_empty()
    }

    #[must_use]
    pub fn gaze_offset(&self) -> Vector2 {
        self.gaze_offset
    }

    #[must_use]
    pub fn page(&self) -> &str {
        &self.page
    }

    #[must_use]
    pub fn config(&self) -> &TaskBotConfig {
        &self.config
    }

    /// Tooltip shows on hover, only while the chat is closed.
    #[must_use]
    pub fn shows_tooltip(&self) -> bool {
        self.hovered && !self.visibility.is_open()
    }

    #[must_use]
    pub fn context_menu_open(&self) -> bool {
        self.context_menu_open
    }

    /// Most recent proactive nudge picked, surfaced or not.
    #[must_use]
    pub fn proactive_hint(&self) -> Option<&'static str> {
        self.proactive_hint
    }

    #[must_use]
    pub fn proactive_armed(&self) -> bool {
        self.proactive_timer.is_some()
    }

    #[must_use]
    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }

    #[must_use]
    pub fn host(&self) -> &H {
        &self.host
    }

    // --- Visibility ---

    pub fn open(&mut self) {
        self.set_visibility(self.visibility.open());
    }

    pub fn close(&mut self) {
        self.set_visibility(self.visibility.close());
    }

    pub fn minimize(&mut self) {
        self.set_visibility(self.visibility.minimize());
    }

    pub fn restore(&mut self) {
        self.set_visibility(self.visibility.restore());
    }

    /// Mascot click.
    pub fn toggle(&mut self) {
        self.set_visibility(self.visibility.toggle());
    }

    pub fn hide(&mut self) {
        self.set_visibility(self.visibility.hide());
    }

    pub fn show(&mut self) {
        self.set_visibility(self.visibility.show());
    }

    /// Host mask as a level rather than an edge.
    pub fn set_hidden(&mut self, hidden: bool) {
        if hidden { self.hide() } else { self.show() }
    }

    fn set_visibility(&mut self, next: Visibility) {
        let prev = self.visibility;
        if prev == next {
            return;
        }
        self.visibility = next;
        debug!("taskbot: visibility {prev:?} -> {next:?}");

        if next.is_open() || next.is_hidden() {
            self.gaze_offset = Vector2::ZERO;
            self.cancel_proactive();
        } else {
            // Landing on closed rolls a fresh nudge for the current page.
            self.arm_proactive();
        }
    }

    // --- Host context ---

    /// The host switched pages. Re-arms the proactive nudge.
    pub fn set_page(&mut self, page: &str) {
        if self.page == page {
            return;
        }
        page.clone_into(&mut self.page);
        self.arm_proactive();
    }

    /// Host override for the mascot's mood.
    pub fn set_mood(&mut self, mood: Mood) {
        self.mood = mood;
    }

    pub fn set_hovered(&mut self, hovered: bool) {
        self.hovered = hovered;
    }

    // --- Conversation ---

    /// Append the user's message and schedule the assistant's reply.
    /// Blank input is ignored.
    pub fn submit_user_message(&mut self, text: &str) {
        if text.trim().is_empty() {
            return;
        }
        self.transcript.push(ChatMessage::user(text, self.scheduler.now_ms()));
        self.mood = Mood::Thinking;
        let id = self
            .scheduler
            .schedule(self.config.reply_latency_ms, TimerEvent::Reply { prompt: text.to_owned() });
        self.pending_replies.push(id);
        debug!("taskbot: reply {id:?} scheduled in {}ms", self.config.reply_latency_ms);
    }

    /// Run the effect of a suggested or quick action. Unknown ids are logged
    /// and ignored.
    pub fn invoke_suggested_action(&mut self, action_id: &str) {
        let action = ActionId::parse(action_id);
        match action.effect() {
            Some(ActionEffect::CreateTask) => {
                self.host.create_task();
                self.close();
            }
            Some(ActionEffect::Navigate(page)) => {
                self.host.navigate_to(page);
                self.close();
            }
            None => info!("taskbot: ignoring action {}", action.as_str()),
        }
    }

    // --- Context menu ---

    pub fn toggle_context_menu(&mut self) {
        self.context_menu_open = !self.context_menu_open;
    }

    /// Choose an entry from the right-click menu. Closes the menu.
    pub fn invoke_quick_action(&mut self, action_id: &str) {
        self.context_menu_open = false;
        if !QUICK_ACTIONS.iter().any(|q| q.action_id == action_id) {
            info!("taskbot: {action_id} is not a quick action");
        }
        self.invoke_suggested_action(action_id);
    }

    // --- Pointer ---

    /// Follow the pointer with the mascot's eyes while the chat is closed.
    pub fn track_pointer(&mut self, anchor: Vector2, pointer: Vector2) {
        if self.visibility.is_open() || self.visibility.is_hidden() {
            return;
        }
        self.gaze_offset = gaze::offset_from_pointer(anchor, pointer, &self.config.gaze);
    }

    // --- Timers ---

    /// Deliver a timer event previously handed to the scheduler. Events for
    /// cancelled or unknown timers are ignored.
    pub fn fire(&mut self, id: TimerId, event: TimerEvent) {
        self.scheduler.cancel(id);
        match event {
            TimerEvent::Reply { prompt } => self.complete_reply(id, &prompt),
            TimerEvent::Proactive { page } => self.complete_proactive(id, &page),
        }
    }

    /// Cancel every pending timer. Call when the host unmounts the widget.
    pub fn shutdown(&mut self) {
        for id in self.pending_replies.drain(..) {
            self.scheduler.cancel(id);
        }
        self.cancel_proactive();
    }

    fn complete_reply(&mut self, id: TimerId, prompt: &str) {
        let Some(index) = self.pending_replies.iter().position(|pending| *pending == id) else {
            debug!("taskbot: dropping stale reply {id:?}");
            return;
        };
        self.pending_replies.remove(index);
        let reply = responder::respond(prompt, &mut self.random);
        debug!("taskbot: reply {id:?} matched {:?}", reply.rule);
        self.transcript.push(ChatMessage::assistant(reply.content, reply.actions, self.scheduler.now_ms()));
        self.mood = Mood::Happy;
    }

    fn arm_proactive(&mut self) {
        self.cancel_proactive();
        if self.visibility.is_open() || self.visibility.is_hidden() {
            return;
        }
        if !proactive::should_arm(&self.page, self.config.proactive_threshold, &mut self.random) {
            return;
        }
        let id = self
            .scheduler
            .schedule(self.config.proactive_delay_ms, TimerEvent::Proactive { page: self.page.clone() });
        self.proactive_timer = Some(id);
        debug!("taskbot: proactive nudge armed for {}", self.page);
    }

    fn cancel_proactive(&mut self) {
        if let Some(id) = self.proactive_timer.take() {
            self.scheduler.cancel(id);
        }
    }

    fn complete_proactive(&mut self, id: TimerId, page: &str) {
        if self.proactive_timer != Some(id) {
            debug!("taskbot: dropping stale proactive {id:?}");
            return;
        }
        self.proactive_timer = None;
        if self.visibility.is_open() || self.visibility.is_hidden() {
            return;
        }
        let Some(hint) = proactive::pick(page, &mut self.random) else {
            return;
        };
        self.mood = Mood::Concerned;
        self.proactive_hint = Some(hint);
        debug!("taskbot: proactive nudge on {page}: {hint}");
        if self.config.surface_proactive {
            self.transcript.push(ChatMessage::assistant(hint, Vec::new(), self.scheduler.now_ms()));
        }
    }
}

impl<R, H> WidgetController<ManualScheduler, R, H>
where
    R: RandomSource,
    H: HostActions,
{
    /// Advance the virtual clock by `ms`, firing every event that comes due,
    /// including ones scheduled while firing. Returns how many fired.
    pub fn advance(&mut self, ms: u64) -> usize {
        let target = self.scheduler.now().saturating_add(ms);
        let mut fired = 0;
        while let Some((id, event)) = self.scheduler.pop_due(target) {
            self.fire(id, event);
            fired += 1;
        }
        self.scheduler.set_now(target);
        fired
    }
}
