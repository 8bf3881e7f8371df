//! Pointer-follow math for the mascot's eyes.
//!
//! Purely cosmetic. The controller feeds pointer positions through
//! [`offset_from_pointer`] while the chat is closed; nothing else reads the
//! result except the renderer.

#[cfg(test)]
#[path = "gaze_test.rs"]
mod gaze_test;

use serde::{Deserialize, Serialize};

/// A 2D vector in CSS pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Vector2 {
    pub x: f64,
    pub y: f64,
}

impl Vector2 {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub fn length(self) -> f64 {
        self.x.hypot(self.y)
    }

    #[must_use]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl std::ops::Sub for Vector2 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self { x: self.x - rhs.x, y: self.y - rhs.y }
    }
}

/// Tracking radius and clamp range for the eye offset.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GazeLimits {
    /// Pointers at or beyond this distance from the anchor reset the gaze.
    pub radius: f64,
    /// Pointer delta is divided by this before clamping.
    pub divisor: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl Default for GazeLimits {
    fn default() -> Self {
        Self { radius: 200.0, divisor: 20.0, max_x: 3.0, max_y: 2.0 }
    }
}

impl GazeLimits {
    /// Radius and both clamp bounds are finite and positive.
    #[must_use]
    pub fn is_usable(&self) -> bool {
        [self.radius, self.max_x, self.max_y]
            .into_iter()
            .all(|v| v.is_finite() && v > 0.0)
    }
}

/// Eye offset for a pointer `delta` at `distance` from the mascot's centre.
///
/// Result is always within `[-max_x, max_x] x [-max_y, max_y]`. Non-finite
/// input and unusable limits collapse to zero.
#[must_use]
pub fn offset(delta: Vector2, distance: f64, limits: &GazeLimits) -> Vector2 {
    if !limits.is_usable() || !delta.is_finite() || !distance.is_finite() || distance >= limits.radius {
        return Vector2::ZERO;
    }
    let divisor = if limits.divisor > 0.0 { limits.divisor } else { 1.0 };
    Vector2 {
        x: (delta.x / divisor).clamp(-limits.max_x, limits.max_x),
        y: (delta.y / divisor).clamp(-limits.max_y, limits.max_y),
    }
}

/// Convenience wrapper computing delta and distance from two screen points.
#[must_use]
pub fn offset_from_pointer(anchor: Vector2, pointer: Vector2, limits: &GazeLimits) -> Vector2 {
    let delta = pointer - anchor;
    offset(delta, delta.length(), limits)
}
