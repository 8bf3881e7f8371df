//! Signed-in user record for the dashboard shell.
//!
//! SYSTEM CONTEXT
//! ==============
//! There is no auth backend. The shell keeps one user record in local storage
//! and seeds it with a demo user on first visit.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use serde::{Deserialize, Serialize};

/// Local storage key for the persisted user record.
pub const STORAGE_KEY: &str = "smart_task_user";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    #[default]
    Admin,
    Member,
}

impl Role {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "Admin",
            Self::Member => "Member",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    pub name: String,
    pub email: String,
    pub role: Role,
    #[serde(default)]
    pub avatar: String,
}

impl SessionUser {
    #[must_use]
    pub fn demo() -> Self {
        Self {
            name: "John Doe".to_owned(),
            email: "john@example.com".to_owned(),
            role: Role::Admin,
            avatar: "/placeholder.svg?height=32&width=32".to_owned(),
        }
    }

    /// Up to two uppercase initials, one per word.
    #[must_use]
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .flat_map(char::to_uppercase)
            .take(2)
            .collect()
    }

    /// First word of the display name, if any.
    #[must_use]
    pub fn first_name(&self) -> Option<&str> {
        self.name.split_whitespace().next()
    }
}

/// Load the stored user, seeding storage with the demo user when absent or
/// unreadable.
pub fn load_or_seed() -> SessionUser {
    if let Some(user) = crate::util::ui_persistence::load_json::<SessionUser>(STORAGE_KEY) {
        return user;
    }
    let user = SessionUser::demo();
    crate::util::ui_persistence::save_json(STORAGE_KEY, &user);
    user
}
