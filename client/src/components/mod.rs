//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the dashboard chrome and the assistant widget while
//! reading/writing shared state from Leptos context providers.

pub mod page_content;
pub mod sidebar;
pub mod task_bot;
