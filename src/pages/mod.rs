//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page pulls the stores it needs from context; none of them construct
//! state of their own beyond form inputs.

pub mod index;
pub mod login;
