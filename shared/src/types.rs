//! Common types for the shared crate

/// Timestamp type (Unix milliseconds)
pub type Timestamp = i64;

/// Opaque member identifier. Unique across all members, archived included.
pub type MemberId = String;

/// Payment identifier
pub type PaymentId = String;

/// Replacement request identifier
pub type RequestId = String;
