//! Member admission, profile updates, progress tracking and listing

use shared::models::{Member, MemberDraft, ProgressEntry};
use shared::types::MemberId;
use shared::util::slugify;

use super::{Registry, RegistryError, RegistryResult};
use crate::dues::parse_dues;

/// Domain used for synthesized student emails
const EMAIL_DOMAIN: &str = "vidya.com";

/// Listing filter for [`Registry::list_members`]
#[derive(Debug, Clone, Default)]
pub struct MemberFilter {
    /// Exclude archived members (active roster, dues dashboards)
    pub active_only: bool,
    /// Only archived members (archive vault view)
    pub archived_only: bool,
    /// Case-insensitive substring over name, phone, seat number and id.
    /// Empty matches everything.
    pub search_term: String,
}

impl MemberFilter {
    pub fn active() -> Self {
        Self {
            active_only: true,
            ..Self::default()
        }
    }

    pub fn archived() -> Self {
        Self {
            archived_only: true,
            ..Self::default()
        }
    }

    fn matches(&self, member: &Member) -> bool {
        if self.active_only && member.is_archived {
            return false;
        }
        if self.archived_only && !member.is_archived {
            return false;
        }
        if self.search_term.is_empty() {
            return true;
        }
        let term = self.search_term.to_lowercase();
        member.name.to_lowercase().contains(&term)
            || member.phone.to_lowercase().contains(&term)
            || member.seat_no.to_lowercase().contains(&term)
            || member.id.to_lowercase().contains(&term)
    }
}

fn require(value: &str, field: &str) -> RegistryResult<()> {
    if value.trim().is_empty() {
        return Err(RegistryError::InvalidMember(format!(
            "{field} must not be empty"
        )));
    }
    Ok(())
}

impl Registry {
    /// Admit a new member.
    ///
    /// Synthesizes an email when the draft leaves it blank, using the
    /// slugified name plus the last four digits of the current millis.
    pub fn add_member(&self, draft: MemberDraft) -> RegistryResult<MemberId> {
        require(&draft.name, "name")?;
        require(&draft.phone, "phone")?;
        require(&draft.seat_no, "seat number")?;
        require(&draft.batch_time, "batch time")?;
        require(&draft.join_date, "join date")?;

        let email = if draft.email.trim().is_empty() {
            let suffix = self.clock().now_millis().rem_euclid(10_000);
            format!("{}.{:04}@{}", slugify(&draft.name), suffix, EMAIL_DOMAIN)
        } else {
            draft.email.clone()
        };

        let mut state = self.state().write();
        let id = self.fresh_id("M", &state);
        let member = Member {
            id: id.clone(),
            name: draft.name,
            father_name: draft.father_name,
            address: draft.address,
            phone: draft.phone,
            seat_no: draft.seat_no,
            batch_time: draft.batch_time,
            fee: draft.fee,
            dues_amount: parse_dues(&draft.dues),
            dues: draft.dues,
            join_date: draft.join_date,
            membership_status: draft.membership_status,
            email,
            password: draft.password,
            is_archived: false,
            archival_reason: None,
            progress: Vec::new(),
        };
        tracing::debug!(member_id = %id, seat = %member.seat_no, "member admitted");
        state.member_order.push(id.clone());
        state.members.insert(id.clone(), member);
        Ok(id)
    }

    /// Replace a member record wholesale.
    ///
    /// Progress entries may only be appended: the new sequence must be a
    /// prefix-extension of the stored one. Archival fields are not
    /// writable through this operation.
    pub fn update_member(&self, member: Member) -> RegistryResult<()> {
        require(&member.name, "name")?;
        require(&member.phone, "phone")?;
        require(&member.seat_no, "seat number")?;
        require(&member.batch_time, "batch time")?;
        require(&member.join_date, "join date")?;

        let mut state = self.state().write();
        let existing = state
            .members
            .get(&member.id)
            .ok_or_else(|| RegistryError::UnknownMember(member.id.clone()))?;
        if existing.is_archived {
            return Err(RegistryError::ArchivedMember(member.id.clone()));
        }
        if member.progress.len() < existing.progress.len()
            || member.progress[..existing.progress.len()] != existing.progress[..]
        {
            return Err(RegistryError::InvalidMember(
                "progress entries may only be appended".to_string(),
            ));
        }

        let mut updated = member;
        updated.is_archived = false;
        updated.archival_reason = None;
        updated.dues_amount = parse_dues(&updated.dues);
        state.members.insert(updated.id.clone(), updated);
        Ok(())
    }

    /// Append a mock test result to a member's progress sequence.
    ///
    /// Subject is stored uppercased, score as a percent string, the date
    /// as `DD MMM` of today.
    pub fn add_progress_entry(
        &self,
        member_id: &str,
        subject: &str,
        score_percent: &str,
    ) -> RegistryResult<String> {
        require(subject, "subject")?;
        require(score_percent, "score")?;
        let date = self.clock().today().format("%d %b").to_string();

        let mut state = self.state().write();
        let id = self.fresh_id("PR", &state);
        let member = state
            .members
            .get_mut(member_id)
            .ok_or_else(|| RegistryError::UnknownMember(member_id.to_string()))?;
        if member.is_archived {
            return Err(RegistryError::ArchivedMember(member_id.to_string()));
        }
        member.progress.push(ProgressEntry {
            id: id.clone(),
            date,
            subject: subject.trim().to_uppercase(),
            score: format!("{}%", score_percent.trim().trim_end_matches('%')),
        });
        Ok(id)
    }

    /// List members in admission order, applying the filter
    pub fn list_members(&self, filter: &MemberFilter) -> Vec<Member> {
        let state = self.state().read();
        state
            .member_order
            .iter()
            .filter_map(|id| state.members.get(id))
            .filter(|m| filter.matches(m))
            .cloned()
            .collect()
    }

    pub fn get_member(&self, id: &str) -> Option<Member> {
        self.state().read().members.get(id).cloned()
    }

    pub fn member_count(&self) -> usize {
        self.state().read().members.len()
    }
}
