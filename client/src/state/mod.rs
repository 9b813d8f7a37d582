//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! `preferences` holds the framework-free store; `context` bridges it into
//! the Leptos component tree.

pub mod context;
pub mod preferences;
