//! Networking modules for the platform REST backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` issues token-bearing requests, `error` classifies their failures,
//! and `types` defines the backend's record schema.

pub mod api;
pub mod error;
pub mod types;
