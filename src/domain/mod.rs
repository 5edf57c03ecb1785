//! Domain layer - pure dialogue logic.
//!
//! Contains the dialogue engine, rotation tracker, options resolver,
//! and the shared vocabulary types. Performs no I/O.

pub mod dialogue;
pub mod foundation;
