//! Payment recording and dues accessors

use shared::models::Payment;
use shared::types::PaymentId;

use super::{Registry, RegistryError, RegistryResult};
use crate::dues::effective_dues;

impl Registry {
    /// Record a payment against a member's dues. Append-only.
    ///
    /// Zero amounts are legal (a no-op on effective dues); negative or
    /// non-finite amounts are rejected. Archived members cannot receive
    /// new payments.
    pub fn add_payment(
        &self,
        member_id: &str,
        amount: f64,
        date: &str,
    ) -> RegistryResult<PaymentId> {
        if !amount.is_finite() || amount < 0.0 {
            return Err(RegistryError::InvalidAmount);
        }

        let mut state = self.state().write();
        let member = state
            .members
            .get(member_id)
            .ok_or_else(|| RegistryError::UnknownMember(member_id.to_string()))?;
        if member.is_archived {
            return Err(RegistryError::ArchivedMember(member_id.to_string()));
        }

        let id = self.fresh_id("PAY", &state);
        tracing::debug!(payment_id = %id, member_id = %member_id, amount, "payment recorded");
        state.payments.push(Payment {
            id: id.clone(),
            member_id: member_id.to_string(),
            amount,
            date: date.to_string(),
            note: None,
        });
        Ok(id)
    }

    /// Payments referencing the member, in append order. Retained for
    /// archived members.
    pub fn list_payments_for_member(&self, member_id: &str) -> Vec<Payment> {
        let state = self.state().read();
        state
            .payments
            .iter()
            .filter(|p| p.member_id == member_id)
            .cloned()
            .collect()
    }

    /// Effective balance for one member: declared dues net of payments,
    /// clamped at zero
    pub fn effective_dues_for(&self, member_id: &str) -> RegistryResult<f64> {
        let state = self.state().read();
        let member = state
            .members
            .get(member_id)
            .ok_or_else(|| RegistryError::UnknownMember(member_id.to_string()))?;
        Ok(effective_dues(member, &state.payments))
    }

    /// Sum of effective dues across active members. Archived members do
    /// not contribute to dashboards.
    pub fn outstanding_dues_total(&self) -> f64 {
        let state = self.state().read();
        state
            .members
            .values()
            .filter(|m| !m.is_archived)
            .map(|m| effective_dues(m, &state.payments))
            .sum()
    }
}
