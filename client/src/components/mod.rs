//! Reusable UI components.
//!
//! ARCHITECTURE
//! ============
//! `layout` renders the chrome around every page; `palette` maps the active
//! theme to the class sets the chrome uses.

pub mod layout;
pub mod palette;
