//! Archive lifecycle - soft deletion and restoration
//!
//! Archived members keep their map entry so payment and request foreign
//! keys stay valid, but are excluded from active listings, dues
//! dashboards, new payments and new requests.

use shared::models::RequestStatus;

use super::{Registry, RegistryError, RegistryResult};

impl Registry {
    /// Archive a member with a non-empty reason.
    ///
    /// Every Pending replacement request of the member is transitioned to
    /// Rejected as part of the same operation.
    pub fn archive_member(&self, member_id: &str, reason: &str) -> RegistryResult<()> {
        if reason.trim().is_empty() {
            return Err(RegistryError::InvalidMember(
                "archival reason must not be empty".to_string(),
            ));
        }

        let mut state = self.state().write();
        let member = state
            .members
            .get_mut(member_id)
            .ok_or_else(|| RegistryError::UnknownMember(member_id.to_string()))?;
        if member.is_archived {
            return Err(RegistryError::AlreadyArchived(member_id.to_string()));
        }
        member.is_archived = true;
        member.archival_reason = Some(reason.trim().to_string());
        tracing::info!(member_id = %member_id, reason = %reason.trim(), "member archived");

        for request in state
            .requests
            .iter_mut()
            .filter(|r| r.member_id == member_id && r.status == RequestStatus::Pending)
        {
            request.status = RequestStatus::Rejected;
            tracing::debug!(request_id = %request.id, "pending request rejected: member archived");
        }
        Ok(())
    }

    /// Restore an archived member: clears the flag and the reason,
    /// everything else untouched. The fact of prior archival is not
    /// separately logged.
    pub fn restore_member(&self, member_id: &str) -> RegistryResult<()> {
        let mut state = self.state().write();
        let member = state
            .members
            .get_mut(member_id)
            .ok_or_else(|| RegistryError::UnknownMember(member_id.to_string()))?;
        if !member.is_archived {
            return Err(RegistryError::NotArchived(member_id.to_string()));
        }
        member.is_archived = false;
        member.archival_reason = None;
        tracing::info!(member_id = %member_id, "member restored");
        Ok(())
    }
}
