//! Member Model

use serde::{Deserialize, Serialize};

use crate::types::MemberId;

/// Membership tier
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum MembershipTier {
    #[default]
    Basic,
    Premium,
}

/// Progress entry (mock test result). Append-only within a member.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProgressEntry {
    pub id: String,
    /// Entry date, `DD MMM` (e.g. "03 Feb")
    pub date: String,
    /// Subject name, stored uppercased
    pub subject: String,
    /// Percent string, e.g. "85%"
    pub score: String,
}

/// Member entity (a registered student occupying a seat within a batch)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Member {
    pub id: MemberId,
    pub name: String,
    pub father_name: String,
    pub address: String,
    pub phone: String,
    pub seat_no: String,
    /// Free text referencing a recognized plan's batch time label
    pub batch_time: String,
    /// Monthly fee string as printed on the plan card, e.g. "399/-"
    pub fee: String,
    /// Hand-written ledger text declaring outstanding dues
    pub dues: String,
    /// ISO calendar date (YYYY-MM-DD)
    pub join_date: String,
    pub membership_status: MembershipTier,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(default)]
    pub is_archived: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub archival_reason: Option<String>,
    #[serde(default)]
    pub progress: Vec<ProgressEntry>,
    /// Parsed dues cache, derived from `dues` on every registry write.
    /// Never serialized; the string stays authoritative.
    #[serde(skip)]
    pub dues_amount: f64,
}

/// Equality covers the persisted record only; `dues_amount` is derived
/// state and is zeroed on deserialization until the registry recomputes
/// it.
impl PartialEq for Member {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
            && self.name == other.name
            && self.father_name == other.father_name
            && self.address == other.address
            && self.phone == other.phone
            && self.seat_no == other.seat_no
            && self.batch_time == other.batch_time
            && self.fee == other.fee
            && self.dues == other.dues
            && self.join_date == other.join_date
            && self.membership_status == other.membership_status
            && self.email == other.email
            && self.password == other.password
            && self.is_archived == other.is_archived
            && self.archival_reason == other.archival_reason
            && self.progress == other.progress
    }
}

impl Eq for Member {}

/// Admission payload (Member without id and lifecycle fields)
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct MemberDraft {
    pub name: String,
    pub father_name: String,
    pub address: String,
    pub phone: String,
    pub seat_no: String,
    pub batch_time: String,
    pub fee: String,
    #[serde(default)]
    pub dues: String,
    pub join_date: String,
    #[serde(default)]
    pub membership_status: MembershipTier,
    /// Blank email is synthesized on admission
    #[serde(default)]
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}
