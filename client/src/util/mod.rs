//! Host-facing helpers for the client.
//!
//! SYSTEM CONTEXT
//! ==============
//! `environment` is the only module that touches browser APIs; everything
//! above it talks to the `EnvironmentProvider` trait.

pub mod environment;
