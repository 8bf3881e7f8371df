//! Widget visibility state machine.
//!
//! ```text
//!            toggle / open
//!   Closed ─────────────────▶ Expanded ──minimize──▶ Minimized
//!     ▲                          │  ▲                   │
//!     └──────── close/toggle ────┘  └──restore / open───┘
//!     ▲                                                 │
//!     └──────────────────── close/toggle ───────────────┘
//! ```
//!
//! `Hidden` sits outside the loop: the host masks the widget with `hide()` and
//! unmasks it with `show()`, which always lands on `Closed`. While hidden,
//! every user-facing transition is a no-op.

#[cfg(test)]
#[path = "visibility_test.rs"]
mod visibility_test;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    Hidden,
    #[default]
    Closed,
    Expanded,
    Minimized,
}

impl Visibility {
    /// Chat window is showing, either full or as the minimized pill.
    #[must_use]
    pub fn is_open(self) -> bool {
        matches!(self, Self::Expanded | Self::Minimized)
    }

    #[must_use]
    pub fn is_hidden(self) -> bool {
        self == Self::Hidden
    }

    #[must_use]
    pub fn open(self) -> Self {
        match self {
            Self::Closed | Self::Minimized | Self::Expanded => Self::Expanded,
            Self::Hidden => Self::Hidden,
        }
    }

    #[must_use]
    pub fn close(self) -> Self {
        match self {
            Self::Hidden => Self::Hidden,
            _ => Self::Closed,
        }
    }

    #[must_use]
    pub fn minimize(self) -> Self {
        match self {
            Self::Expanded => Self::Minimized,
            other => other,
        }
    }

    #[must_use]
    pub fn restore(self) -> Self {
        match self {
            Self::Minimized => Self::Expanded,
            other => other,
        }
    }

    /// Mascot click: opens a closed widget, closes an open one.
    #[must_use]
    pub fn toggle(self) -> Self {
        match self {
            Self::Closed => Self::Expanded,
            Self::Expanded | Self::Minimized => Self::Closed,
            Self::Hidden => Self::Hidden,
        }
    }

    #[must_use]
    pub fn hide(self) -> Self {
        Self::Hidden
    }

    #[must_use]
    pub fn show(self) -> Self {
        match self {
            Self::Hidden => Self::Closed,
            other => other,
        }
    }
}
