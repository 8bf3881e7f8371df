//! Mascot moods and the expression each one renders with.

#[cfg(test)]
#[path = "mood_test.rs"]
mod mood_test;

use serde::{Deserialize, Serialize};

/// The assistant's visible affect. Purely cosmetic.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    #[default]
    Happy,
    Working,
    Celebrating,
    Concerned,
    Thinking,
    Sleeping,
}

/// Renderer-facing description of a mood.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Expression {
    pub eyes: &'static str,
    pub mouth: &'static str,
    /// Gradient utility classes for the glow behind the mascot.
    pub glow: &'static str,
    /// Vertical eye scale; sleeping squints.
    pub eye_scale_y: f64,
    /// Vertical mouth scale; concerned flattens.
    pub mouth_scale_y: f64,
    /// Idle bounce height in pixels.
    pub bounce_px: f64,
    /// Idle bounce period in seconds.
    pub bounce_secs: f64,
    /// Whether the idle animation also sways side to side.
    pub sways: bool,
}

impl Mood {
    pub const ALL: [Mood; 6] = [
        Mood::Happy,
        Mood::Working,
        Mood::Celebrating,
        Mood::Concerned,
        Mood::Thinking,
        Mood::Sleeping,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Happy => "happy",
            Self::Working => "working",
            Self::Celebrating => "celebrating",
            Self::Concerned => "concerned",
            Self::Thinking => "thinking",
            Self::Sleeping => "sleeping",
        }
    }

    /// Parse a lower-case tag. Unknown tags fall back to [`Mood::Happy`].
    #[must_use]
    pub fn from_tag(tag: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|mood| mood.as_str() == tag)
            .unwrap_or_default()
    }

    #[must_use]
    pub fn expression(self) -> Expression {
        let (eyes, mouth, glow) = match self {
            Self::Happy => ("😊", "◡", "from-green-400 to-blue-400"),
            Self::Working => ("🤔", "○", "from-blue-400 to-purple-400"),
            Self::Celebrating => ("🤩", "◡", "from-yellow-400 to-pink-400"),
            Self::Concerned => ("😟", "◔", "from-orange-400 to-red-400"),
            Self::Thinking => ("🤔", "○", "from-purple-400 to-blue-400"),
            Self::Sleeping => ("😴", "◡", "from-gray-400 to-blue-400"),
        };
        let celebrating = self == Self::Celebrating;
        Expression {
            eyes,
            mouth,
            glow,
            eye_scale_y: if self == Self::Sleeping { 0.1 } else { 1.0 },
            mouth_scale_y: if self == Self::Concerned { 0.5 } else { 1.0 },
            bounce_px: if celebrating { 20.0 } else { 5.0 },
            bounce_secs: if celebrating { 0.6 } else { 2.0 },
            sways: self == Self::Happy,
        }
    }

    /// Thinking dots float above the head.
    #[must_use]
    pub fn shows_thinking_dots(self) -> bool {
        self == Self::Thinking
    }

    #[must_use]
    pub fn shows_particles(self) -> bool {
        self == Self::Celebrating
    }
}

impl std::fmt::Display for Mood {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
