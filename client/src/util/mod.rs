//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Browser glue lives here so components and state stay free of `web-sys`
//! calls outside the `csr` feature.

pub mod timers;
pub mod ui_persistence;
