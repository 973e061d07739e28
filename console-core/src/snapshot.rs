//! Registry snapshot - serializable image of the full state
//!
//! Three top-level sequences with stable camelCase field names. Members
//! are emitted in canonical (id-sorted) order so that a save/load cycle
//! round-trips byte-for-byte as JSON.

use serde::{Deserialize, Serialize};
use shared::models::{Member, Payment, ReplacementRequest};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct RegistrySnapshot {
    pub members: Vec<Member>,
    pub payments: Vec<Payment>,
    pub requests: Vec<ReplacementRequest>,
}

impl RegistrySnapshot {
    pub fn is_empty(&self) -> bool {
        self.members.is_empty() && self.payments.is_empty() && self.requests.is_empty()
    }
}
