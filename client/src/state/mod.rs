//! Client-side state shared through Leptos context.
//!
//! SYSTEM CONTEXT
//! ==============
//! `session` owns the authenticated flag and token, `auth` exposes it to the
//! reactive tree, `ui` holds chrome state, and `records` patches fetched
//! lists after mutations.

pub mod auth;
pub mod records;
pub mod session;
pub mod ui;
