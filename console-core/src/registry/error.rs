use thiserror::Error;

/// Registry errors - the tagged kinds of the core contract.
///
/// Errors are returned, never thrown; the core does not decide
/// user-visible wording, only kinds.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("Invalid member: {0}")]
    InvalidMember(String),

    #[error("Invalid amount")]
    InvalidAmount,

    #[error("Member not found: {0}")]
    UnknownMember(String),

    #[error("Member is archived: {0}")]
    ArchivedMember(String),

    #[error("Member is already archived: {0}")]
    AlreadyArchived(String),

    #[error("Member is not archived: {0}")]
    NotArchived(String),

    #[error("Request not found: {0}")]
    UnknownRequest(String),

    #[error("Request already decided: {0}")]
    AlreadyDecided(String),

    #[error("Seat is taken by another active member: {0}")]
    SeatConflict(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

pub type RegistryResult<T> = Result<T, RegistryError>;
