//! Logging facility for the outer layers.
//!
//! The comparison engine itself never logs; this facility serves the
//! document matcher and CLI. It provides profile-based initialization,
//! canonical operation macros, and a capture layer for test assertions.

pub mod init;
pub mod test_capture;

mod macros;

pub use init::{init, Profile};
