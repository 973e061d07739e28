//! Replacement workflow - seat/batch change requests
//!
//! State machine per request:
//!
//! ```text
//!   (created) ──► Pending ──approve──► Approved (terminal)
//!                    │
//!                    └──reject──► Rejected (terminal)
//! ```
//!
//! Approval applies the requested seat and/or batch to the member
//! atomically; a seat conflict leaves both the member and the request
//! untouched.

use shared::models::{ReplacementRequest, RequestStatus};
use shared::types::RequestId;

use super::{Registry, RegistryError, RegistryResult};

/// Administrator decision on a Pending request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Approved,
    Rejected,
}

fn normalize(field: Option<String>) -> Option<String> {
    field.and_then(|s| {
        let trimmed = s.trim().to_string();
        if trimmed.is_empty() { None } else { Some(trimmed) }
    })
}

impl Registry {
    /// Submit a seat/batch change request on behalf of a student.
    ///
    /// At least one of `requested_seat` / `requested_batch` must be a
    /// non-empty string, and a reason is required. The member's name,
    /// seat and batch are snapshotted at this moment.
    pub fn submit_request(
        &self,
        member_id: &str,
        requested_seat: Option<String>,
        requested_batch: Option<String>,
        reason: &str,
    ) -> RegistryResult<RequestId> {
        let requested_seat = normalize(requested_seat);
        let requested_batch = normalize(requested_batch);
        if requested_seat.is_none() && requested_batch.is_none() {
            return Err(RegistryError::InvalidRequest(
                "at least one of seat or batch must be requested".to_string(),
            ));
        }
        if reason.trim().is_empty() {
            return Err(RegistryError::InvalidRequest(
                "reason must not be empty".to_string(),
            ));
        }
        let date = self.clock().today().format("%Y-%m-%d").to_string();

        let mut state = self.state().write();
        let member = state
            .members
            .get(member_id)
            .ok_or_else(|| RegistryError::UnknownMember(member_id.to_string()))?;
        if member.is_archived {
            return Err(RegistryError::ArchivedMember(member_id.to_string()));
        }
        let (student_name, current_seat, current_batch) = (
            member.name.clone(),
            member.seat_no.clone(),
            member.batch_time.clone(),
        );

        let id = self.fresh_id("R", &state);
        tracing::debug!(request_id = %id, member_id = %member_id, "replacement request submitted");
        state.requests.push(ReplacementRequest {
            id: id.clone(),
            member_id: member_id.to_string(),
            student_name,
            current_seat,
            current_batch,
            requested_seat,
            requested_batch,
            reason: reason.trim().to_string(),
            date,
            status: RequestStatus::Pending,
        });
        Ok(id)
    }

    /// Decide a Pending request.
    ///
    /// Approving applies the requested seat and/or batch to the member. A
    /// requested seat held by another active member fails with
    /// `SeatConflict` and leaves the request Pending; requesting the
    /// member's own current seat is a no-op success. Rejecting never
    /// mutates the member.
    pub fn update_status(&self, request_id: &str, decision: Decision) -> RegistryResult<()> {
        let mut state = self.state().write();
        let idx = state
            .requests
            .iter()
            .position(|r| r.id == request_id)
            .ok_or_else(|| RegistryError::UnknownRequest(request_id.to_string()))?;
        if state.requests[idx].status.is_terminal() {
            return Err(RegistryError::AlreadyDecided(request_id.to_string()));
        }

        match decision {
            Decision::Rejected => {
                state.requests[idx].status = RequestStatus::Rejected;
                tracing::debug!(request_id = %request_id, "request rejected");
            }
            Decision::Approved => {
                let member_id = state.requests[idx].member_id.clone();
                let requested_seat = state.requests[idx].requested_seat.clone();
                let requested_batch = state.requests[idx].requested_batch.clone();

                let current_seat = state
                    .members
                    .get(&member_id)
                    .ok_or_else(|| RegistryError::UnknownMember(member_id.clone()))?
                    .seat_no
                    .clone();
                if let Some(seat) = &requested_seat
                    && *seat != current_seat
                {
                    let taken = state
                        .members
                        .values()
                        .any(|m| m.id != member_id && !m.is_archived && m.seat_no == *seat);
                    if taken {
                        return Err(RegistryError::SeatConflict(seat.clone()));
                    }
                }

                // Preconditions hold; apply everything.
                let member = state
                    .members
                    .get_mut(&member_id)
                    .ok_or_else(|| RegistryError::UnknownMember(member_id.clone()))?;
                if let Some(seat) = requested_seat {
                    member.seat_no = seat;
                }
                if let Some(batch) = requested_batch {
                    member.batch_time = batch;
                }
                state.requests[idx].status = RequestStatus::Approved;
                tracing::debug!(request_id = %request_id, member_id = %member_id, "request approved");
            }
        }
        Ok(())
    }

    /// Requests of one member, newest first (student view)
    pub fn list_requests_for_member(&self, member_id: &str) -> Vec<ReplacementRequest> {
        let state = self.state().read();
        state
            .requests
            .iter()
            .filter(|r| r.member_id == member_id)
            .rev()
            .cloned()
            .collect()
    }

    /// All requests, newest first (admin view)
    pub fn list_all_requests(&self) -> Vec<ReplacementRequest> {
        let state = self.state().read();
        state.requests.iter().rev().cloned().collect()
    }
}
