//! Page-keyed proactive nudges.
//!
//! Each arming rolls once against a threshold; a page with an empty pool
//! never arms.

#[cfg(test)]
#[path = "proactive_test.rs"]
mod proactive_test;

use crate::random::RandomSource;

const DASHBOARD: [&str; 3] = [
    "3 tasks are overdue - need help catching up? 🚀",
    "Great job! Team completed 12 tasks this week 🎉",
    "Your productivity is up 15% this week! 📈",
];

const PROJECTS: [&str; 2] = [
    "This project is 75% complete. Great progress! 🎯",
    "Want me to analyze project bottlenecks? 🔍",
];

const MY_TASKS: [&str; 2] = [
    "You have 2 high-priority tasks due today! ⚡",
    "Focus time! Want me to hide distractions? 🎯",
];

/// Nudges available on `page`. Empty for pages without any.
#[must_use]
pub fn pool_for(page: &str) -> &'static [&'static str] {
    match page {
        "dashboard" => &DASHBOARD,
        "projects" => &PROJECTS,
        "my-tasks" => &MY_TASKS,
        _ => &[],
    }
}

/// Roll whether a nudge window opens on `page`. True when the page has a
/// pool and the roll lands strictly above `threshold`.
pub fn should_arm(page: &str, threshold: f64, random: &mut impl RandomSource) -> bool {
    if pool_for(page).is_empty() {
        return false;
    }
    random.next_unit() > threshold
}

/// Pick one nudge for `page`, if it has any.
pub fn pick(page: &str, random: &mut impl RandomSource) -> Option<&'static str> {
    let pool = pool_for(page);
    if pool.is_empty() {
        return None;
    }
    Some(pool[random.pick_index(pool.len())])
}
