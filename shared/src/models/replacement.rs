//! Replacement Request Model

use serde::{Deserialize, Serialize};

use crate::types::{MemberId, RequestId};

/// Request status. A request is created Pending and transitions exactly
/// once to a terminal state; terminal requests are immutable.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum RequestStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
}

impl RequestStatus {
    pub fn is_terminal(self) -> bool {
        !matches!(self, RequestStatus::Pending)
    }
}

/// Student-initiated proposal to change seat and/or batch.
///
/// `student_name`, `current_seat` and `current_batch` are snapshots taken
/// at creation time; later member mutations never touch them, so decided
/// requests keep an accurate audit trail.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ReplacementRequest {
    pub id: RequestId,
    pub member_id: MemberId,
    pub student_name: String,
    pub current_seat: String,
    pub current_batch: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub requested_seat: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub requested_batch: Option<String>,
    pub reason: String,
    /// ISO date of submission
    pub date: String,
    pub status: RequestStatus,
}
