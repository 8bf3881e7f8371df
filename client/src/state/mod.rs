//! Application state modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Plain structs held in `RwSignal`s and provided as Leptos context by `App`.
//! Kept free of browser calls so they test on the host.

pub mod session;
pub mod ui;
