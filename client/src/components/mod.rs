//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render console chrome and modal surfaces while reading shared
//! session and UI state from Leptos context providers.

pub mod dialog;
pub mod protected_route;
pub mod sidebar;
