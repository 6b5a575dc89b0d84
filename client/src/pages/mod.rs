//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns its fetch and mutation flow through `util::auth::Backend`
//! and delegates dialogs and layout to `components`.

pub mod ads;
pub mod dashboard;
pub mod login;
pub mod recharges;
pub mod reports;
pub mod users;
pub mod video_upload;
pub mod videos;
pub mod withdrawals;
