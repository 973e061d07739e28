//! Shared types for the Vidya Library console
//!
//! Domain models, the official batch plan table, and small utilities
//! used by the engine crate and the collaborator shells (admin console
//! and student portal).

pub mod models;
pub mod plans;
pub mod types;
pub mod util;

// Re-exports
pub use serde::{Deserialize, Serialize};
