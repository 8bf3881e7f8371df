//! Shell navigation and page-level request state.
//!
//! DESIGN
//! ======
//! Components outside the router (the assistant widget) never navigate
//! directly. They record a pending page or bump a sequence counter here and
//! the shell reacts in an effect.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// Top-level dashboard pages.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Page {
    #[default]
    Dashboard,
    Projects,
    MyTasks,
    Profile,
}

impl Page {
    pub const ALL: [Page; 4] = [Page::Dashboard, Page::Projects, Page::MyTasks, Page::Profile];

    /// Page tag shared with the assistant's proactive pools and actions.
    #[must_use]
    pub fn tag(self) -> &'static str {
        match self {
            Self::Dashboard => "dashboard",
            Self::Projects => "projects",
            Self::MyTasks => "my-tasks",
            Self::Profile => "profile",
        }
    }

    #[must_use]
    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|page| page.tag() == tag)
    }

    #[must_use]
    pub fn path(self) -> &'static str {
        match self {
            Self::Dashboard => "/",
            Self::Projects => "/projects",
            Self::MyTasks => "/my-tasks",
            Self::Profile => "/profile",
        }
    }

    /// Resolve a router pathname. Unknown paths show the dashboard.
    #[must_use]
    pub fn from_path(path: &str) -> Self {
        let trimmed = path.trim_end_matches('/');
        let trimmed = if trimmed.is_empty() { "/" } else { trimmed };
        Self::ALL
            .into_iter()
            .find(|page| page.path() == trimmed)
            .unwrap_or_default()
    }

    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::Dashboard => "Dashboard",
            Self::Projects => "Projects",
            Self::MyTasks => "My Tasks",
            Self::Profile => "Profile",
        }
    }
}

/// Requests raised by the assistant widget for the shell to carry out.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    /// Bumped on every create-task request; the task modal watches it.
    pub create_task_seq: u64,
    /// Page the shell should route to on its next effect run.
    pub pending_navigation: Option<Page>,
    /// User asked to tuck the assistant away.
    pub assistant_hidden: bool,
}

impl UiState {
    pub fn request_create_task(&mut self) {
        self.create_task_seq += 1;
    }

    /// Queue navigation to a page tag. Unknown tags are dropped.
    pub fn request_navigation(&mut self, tag: &str) -> bool {
        match Page::from_tag(tag) {
            Some(page) => {
                self.pending_navigation = Some(page);
                true
            }
            None => {
                log::info!("ui: ignoring navigation to unknown page {tag}");
                false
            }
        }
    }

    pub fn take_pending_navigation(&mut self) -> Option<Page> {
        self.pending_navigation.take()
    }

    pub fn toggle_assistant(&mut self) {
        self.assistant_hidden = !self.assistant_hidden;
    }
}
