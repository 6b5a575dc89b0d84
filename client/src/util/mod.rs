//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules keep session plumbing and display formatting out of the
//! page components so both stay testable without a browser.

pub mod auth;
pub mod format;
