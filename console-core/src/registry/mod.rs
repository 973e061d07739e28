//! Registry - the canonical member/payment/request store
//!
//! The single shared mutable resource of the core. All mutation routes
//! through the operations here; collaborator shells only read through the
//! published accessors. Every operation validates its preconditions first
//! and then either applies all of its effects or none.
//!
//! Operations are totally ordered by invocation order: each takes the
//! state lock for its whole duration and contains no suspension points,
//! so readers always observe the state produced by the most recent
//! completed operation.

mod error;
pub use error::*;

mod archive;
mod members;
mod payments;
mod requests;

pub use members::MemberFilter;
pub use requests::Decision;

#[cfg(test)]
mod tests;

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;
use shared::models::{Member, Payment, ReplacementRequest};
use shared::types::MemberId;

use crate::clock::{Clock, SystemClock};
use crate::dues::parse_dues;
use crate::ids::{IdAllocator, SnowflakeAllocator};
use crate::snapshot::RegistrySnapshot;

/// In-memory registry state.
///
/// Members stay in the map after archival so payment and request foreign
/// keys remain valid. `member_order` preserves admission order for
/// listings.
#[derive(Debug, Default)]
pub(crate) struct RegistryState {
    pub members: HashMap<MemberId, Member>,
    pub member_order: Vec<MemberId>,
    pub payments: Vec<Payment>,
    pub requests: Vec<ReplacementRequest>,
}

/// Process-wide state holder for the console core.
///
/// The `epoch` field is a unique identifier generated on each startup.
/// Shells use it to detect engine restarts and trigger a full reload.
pub struct Registry {
    state: RwLock<RegistryState>,
    clock: Arc<dyn Clock>,
    ids: Arc<dyn IdAllocator>,
    epoch: String,
}

impl std::fmt::Debug for Registry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Registry").field("epoch", &self.epoch).finish()
    }
}

impl Registry {
    /// Create an empty registry with the given collaborator ports
    pub fn new(clock: Arc<dyn Clock>, ids: Arc<dyn IdAllocator>) -> Self {
        let epoch = uuid::Uuid::new_v4().to_string();
        tracing::info!(epoch = %epoch, "Registry started with new epoch");
        Self {
            state: RwLock::new(RegistryState::default()),
            clock,
            ids,
            epoch,
        }
    }

    pub fn epoch(&self) -> &str {
        &self.epoch
    }

    pub(crate) fn clock(&self) -> &dyn Clock {
        self.clock.as_ref()
    }

    pub(crate) fn state(&self) -> &RwLock<RegistryState> {
        &self.state
    }

    /// Allocate a collision-free id with the given prefix
    pub(crate) fn fresh_id(&self, prefix: &str, state: &RegistryState) -> String {
        let mut id = self.ids.fresh(prefix);
        while state.members.contains_key(&id)
            || state.payments.iter().any(|p| p.id == id)
            || state.requests.iter().any(|r| r.id == id)
        {
            id = self.ids.fresh(prefix);
        }
        id
    }

    /// Serializable image of the full state, members in canonical
    /// (id-sorted) order
    pub fn snapshot(&self) -> RegistrySnapshot {
        let state = self.state.read();
        let mut members: Vec<Member> = state.members.values().cloned().collect();
        members.sort_by(|a, b| a.id.cmp(&b.id));
        RegistrySnapshot {
            members,
            payments: state.payments.clone(),
            requests: state.requests.clone(),
        }
    }

    /// Replace the whole state from a snapshot, recomputing the parsed
    /// dues caches. Admission order follows snapshot order.
    pub fn hydrate(&self, snapshot: RegistrySnapshot) {
        let mut state = self.state.write();
        state.members.clear();
        state.member_order.clear();
        for mut member in snapshot.members {
            member.dues_amount = parse_dues(&member.dues);
            state.member_order.push(member.id.clone());
            state.members.insert(member.id.clone(), member);
        }
        state.payments = snapshot.payments;
        state.requests = snapshot.requests;
        tracing::info!(
            members = state.members.len(),
            payments = state.payments.len(),
            requests = state.requests.len(),
            "registry hydrated from snapshot"
        );
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new(Arc::new(SystemClock), Arc::new(SnowflakeAllocator))
    }
}
