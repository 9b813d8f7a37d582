//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page reads the active language from the preference context and
//! renders its copy table. Theme styling comes from `dark:` variants.

pub mod about;
pub mod certificates;
pub mod experience;
pub mod home;
pub mod projects;
