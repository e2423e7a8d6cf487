//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`auth`, `ui`) so pages can depend on small
//! focused models handed down through context.

pub mod auth;
pub mod ui;
