//! Data models
//!
//! Shared between the engine and the console shells. Field names follow
//! the persisted snapshot format (camelCase on the wire).

pub mod member;
pub mod payment;
pub mod replacement;

// Re-exports
pub use member::*;
pub use payment::*;
pub use replacement::*;
