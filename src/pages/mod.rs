//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration: guard installation, list
//! fetching, and dialog state. Rendering details live in `components`.

pub mod login;
pub mod patients;
pub mod staff;
