//! Utility helpers shared across UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules keep routing and environment concerns out of page and
//! component logic.

pub mod dates;
pub mod guard;
