//! Payment Model

use serde::{Deserialize, Serialize};

use crate::types::{MemberId, PaymentId};

/// Externally recorded payment against a member's dues.
///
/// Holds a `member_id` foreign key into the registry map, never a member
/// reference. Payments for archived members are retained.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Payment {
    pub id: PaymentId,
    pub member_id: MemberId,
    /// Non-negative rupee amount
    pub amount: f64,
    /// ISO date the payment was recorded
    pub date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}
