//! Conversation controller for the TaskBot dashboard assistant.
//!
//! This crate holds every piece of the assistant widget that does not need a
//! browser: mood, visibility, the chat transcript, canned reply selection,
//! proactive nudges, and the gaze offset the mascot's eyes follow. The host
//! (the Leptos `client` crate) supplies real timers, a random seed, pointer
//! coordinates and the two page-level callbacks; tests supply fakes for all of
//! them.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`controller`] | [`controller::WidgetController`], the single stateful entry point |
//! | [`visibility`] | Hidden / closed / expanded / minimized state machine |
//! | [`message`] | Chat messages, suggested actions and the append-only transcript |
//! | [`responder`] | Keyword rules and canned reply text |
//! | [`actions`] | Action ids, the `HostActions` trait, and the quick-action menu |
//! | [`proactive`] | Page-keyed nudge pools |
//! | [`mood`] | Mascot moods and their expression table |
//! | [`gaze`] | Pure pointer-to-eye-offset math |
//! | [`scheduler`] | Timer abstraction and a virtual-clock implementation |
//! | [`random`] | Random source abstraction and a seeded implementation |
//! | [`config`] | Tunables with JSON/env loading |
//! | [`error`] | Configuration errors |

pub mod actions;
pub mod config;
pub mod controller;
pub mod error;
pub mod gaze;
pub mod message;
pub mod mood;
pub mod proactive;
pub mod random;
pub mod responder;
pub mod scheduler;
pub mod visibility;

pub use actions::{ActionEffect, ActionId, HostActions};
pub use config::TaskBotConfig;
pub use controller::WidgetController;
pub use error::ConfigError;
pub use gaze::{GazeLimits, Vector2};
pub use message::{ChatMessage, Sender, SuggestedAction, Transcript};
pub use mood::Mood;
pub use random::{RandomSource, SeededRandom};
pub use scheduler::{ManualScheduler, Scheduler, TimerEvent, TimerId};
pub use visibility::Visibility;
