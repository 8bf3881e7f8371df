//! Suggested-action ids and their effect on the host page.
//!
//! Only five ids do anything: the three task-creation ids open the host's
//! create-task flow, `progress` and `team` navigate. Every other id, known or
//! not, is logged and dropped by the controller.

#[cfg(test)]
#[path = "actions_test.rs"]
mod actions_test;

use crate::message::SuggestedAction;

/// Page-level callbacks the widget forwards to its host.
///
/// Both are fire-and-forget; nothing is returned to the controller.
pub trait HostActions {
    fn create_task(&self);
    fn navigate_to(&self, page: &str);
}

/// Every action id the widget itself emits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionId {
    CreateTask,
    QuickTask,
    DetailedTask,
    Progress,
    Team,
    Prioritize,
    Reminders,
    Focus,
    Summary,
    Celebrate,
    Settings,
    DoNotDisturb,
    Unknown(String),
}

/// What the host should do for an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionEffect {
    CreateTask,
    Navigate(&'static str),
}

impl ActionId {
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        match raw {
            "create-task" => Self::CreateTask,
            "quick-task" => Self::QuickTask,
            "detailed-task" => Self::DetailedTask,
            "progress" => Self::Progress,
            "team" => Self::Team,
            "prioritize" => Self::Prioritize,
            "reminders" => Self::Reminders,
            "focus" => Self::Focus,
            "summary" => Self::Summary,
            "celebrate" => Self::Celebrate,
            "settings" => Self::Settings,
            "dnd" => Self::DoNotDisturb,
            other => Self::Unknown(other.to_owned()),
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::CreateTask => "create-task",
            Self::QuickTask => "quick-task",
            Self::DetailedTask => "detailed-task",
            Self::Progress => "progress",
            Self::Team => "team",
            Self::Prioritize => "prioritize",
            Self::Reminders => "reminders",
            Self::Focus => "focus",
            Self::Summary => "summary",
            Self::Celebrate => "celebrate",
            Self::Settings => "settings",
            Self::DoNotDisturb => "dnd",
            Self::Unknown(raw) => raw,
        }
    }

    /// Host effect, or `None` for ids that are only logged.
    #[must_use]
    pub fn effect(&self) -> Option<ActionEffect> {
        match self {
            Self::CreateTask | Self::QuickTask | Self::DetailedTask => Some(ActionEffect::CreateTask),
            Self::Progress => Some(ActionEffect::Navigate("dashboard")),
            Self::Team => Some(ActionEffect::Navigate("projects")),
            _ => None,
        }
    }
}

/// An entry in the mascot's right-click menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuickAction {
    pub label: &'static str,
    pub action_id: &'static str,
}

/// Context-menu entries, in display order.
pub const QUICK_ACTIONS: [QuickAction; 5] = [
    QuickAction { label: "Focus Mode", action_id: "focus" },
    QuickAction { label: "Daily Summary", action_id: "summary" },
    QuickAction { label: "Celebrate", action_id: "celebrate" },
    QuickAction { label: "Settings", action_id: "settings" },
    QuickAction { label: "Do Not Disturb", action_id: "dnd" },
];

/// Actions attached to the greeting message.
#[must_use]
pub fn greeting_actions() -> Vec<SuggestedAction> {
    vec![
        SuggestedAction::new("📝 Create Task", "create-task"),
        SuggestedAction::new("📊 My Progress", "progress"),
        SuggestedAction::new("👥 Team Status", "team"),
    ]
}
