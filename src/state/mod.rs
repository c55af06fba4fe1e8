//! Shared reactive state provided from the app root.
//!
//! SYSTEM CONTEXT
//! ==============
//! State modules own their transition logic; components read signals from
//! context but never mutate session state directly.

pub mod session;
