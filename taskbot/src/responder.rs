//! Canned reply selection.
//!
//! Replies come from a closed keyword rule set checked in priority order; the
//! first rule that matches wins. Only the fallback involves randomness, a
//! uniform pick from [`GENERIC_REPLIES`].

#[cfg(test)]
#[path = "responder_test.rs"]
mod responder_test;

use crate::message::SuggestedAction;
use crate::random::RandomSource;

pub const TASK_CREATION_REPLY: &str = "I'll help you create a new task! 📝 What should we work on?";

pub const DUE_TODAY_REPLY: &str = "You have 3 tasks due today:\n\
• Update user authentication (High priority)\n\
• Review mobile designs (Medium)\n\
• Team standup prep (Low)\n\
\n\
Would you like me to help prioritize them? 🎯";

pub const WEEKLY_INSIGHTS_REPLY: &str = "📈 Weekly insights for you:\n\
• Completed: 8 tasks (+2 vs last week)\n\
• On time: 95% (excellent!)\n\
• Most productive day: Tuesday\n\
\n\
💡 Suggestion: Schedule important tasks on Tuesdays for best results!";

pub const GENERIC_REPLIES: [&str; 4] = [
    "That's interesting! How can I help you with your tasks? 🤖",
    "I'm here to boost your productivity! What would you like to work on? ⚡",
    "Let me help you stay organized! What's on your mind? 📋",
    "Great question! I can help with tasks, projects, and team coordination! 🎯",
];

/// Which rule an input matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplyRule {
    /// Mentions both "task" and "create".
    TaskCreation,
    /// Mentions "due" or "today".
    DueToday,
    /// Mentions "progress" or "status".
    WeeklyInsights,
    Generic,
}

/// Reply text plus any actions to attach.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub rule: ReplyRule,
    pub content: &'static str,
    pub actions: Vec<SuggestedAction>,
}

/// Classify `input` against the rule set. Matching is case-insensitive
/// substring search.
#[must_use]
pub fn classify(input: &str) -> ReplyRule {
    let lower = input.to_lowercase();
    if lower.contains("task") && lower.contains("create") {
        ReplyRule::TaskCreation
    } else if lower.contains("due") || lower.contains("today") {
        ReplyRule::DueToday
    } else if lower.contains("progress") || lower.contains("status") {
        ReplyRule::WeeklyInsights
    } else {
        ReplyRule::Generic
    }
}

/// Build the assistant's reply to `input`.
pub fn respond(input: &str, random: &mut impl RandomSource) -> Reply {
    let rule = classify(input);
    let (content, actions) = match rule {
        ReplyRule::TaskCreation => (
            TASK_CREATION_REPLY,
            vec![
                SuggestedAction::new("🚀 Quick Task", "quick-task"),
                SuggestedAction::new("📋 Detailed Task", "detailed-task"),
            ],
        ),
        ReplyRule::DueToday => (
            DUE_TODAY_REPLY,
            vec![
                SuggestedAction::new("📊 Prioritize", "prioritize"),
                SuggestedAction::new("⏰ Set Reminders", "reminders"),
            ],
        ),
        ReplyRule::WeeklyInsights => (WEEKLY_INSIGHTS_REPLY, Vec::new()),
        ReplyRule::Generic => (GENERIC_REPLIES[random.pick_index(GENERIC_REPLIES.len())], Vec::new()),
    };
    Reply { rule, content, actions }
}
