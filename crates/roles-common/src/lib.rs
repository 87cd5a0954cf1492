//! Roles Service Common
//!
//! Shared plumbing used by every binary in the workspace.

pub mod logging;

pub use logging::init_logging;
