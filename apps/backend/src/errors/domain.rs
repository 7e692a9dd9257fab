//! Domain-level error type used across services, repos and adapters.
//!
//! This error type is transport- and DB-agnostic. Adapters return `DbErr`;
//! the repos layer converts via the `From<DbErr>` implementation below, and
//! services add their own validation/authorization variants.

use std::error::Error;
use std::fmt::{Display, Formatter, Result as FmtResult};

use sea_orm::DbErr;

/// Infra error kinds to distinguish operational failures
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum InfraErrorKind {
    Timeout,
    DbUnavailable,
    DataCorruption,
    Other(String),
}

/// Domain-level not found entities
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum NotFoundKind {
    Championship,
    Team,
    Player,
    Match,
    Phase,
    Group,
    Standing,
    Other(String),
}

/// Domain-level conflict kinds
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ConflictKind {
    /// Matches already exist for the championship (duplicate generation attempt)
    ScheduleExists,
    /// Bracket phases already created
    PhasesExist,
    /// Group stage already created
    GroupsExist,
    /// Championship `started` latch already flipped
    AlreadyStarted,
    /// Same pairing already scheduled in the round
    DuplicatePairing,
    Other(String),
}

/// Validation failure kinds (caller input or business-rule violations)
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ValidationKind {
    /// Wrong championship format for the requested operation
    FormatMismatch,
    /// Approved team count below the championship minimum
    TooFewTeams,
    /// Approved team count above the championship maximum
    TooManyTeams,
    /// Knockout team count is not a power of two
    NotPowerOfTwo,
    /// Team count not divisible by the group count
    NotDivisibleByGroups,
    /// Match is not in a state that accepts a result
    MatchNotOpen,
    /// Operation requires a finalized match
    MatchNotFinished,
    /// Group-stage matches still unfinished
    GroupStageUnfinished,
    /// A player appears twice in the lineup
    DuplicateLineupPlayer,
    /// Lineup entry's declared team differs from the player's team
    PlayerTeamMismatch,
    /// Yellow cards outside [0,2] or red cards outside [0,1]
    CardCountOutOfRange,
    /// Per-player goal sum differs from the declared score
    GoalSumMismatch,
    /// Drawn score submitted for a knockout (phase) match
    DrawInKnockout,
    /// Home and away team must differ
    SameTeam,
    /// Team is not registered and approved for the championship
    TeamNotApproved,
    Other(String),
}

/// Authorization failure kinds. Kept distinct from validation so callers
/// can tell "you may not" from "you got it wrong".
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ForbiddenKind {
    NotOrganizer,
}

/// Central domain error type
#[derive(Debug, Clone, PartialEq)]
pub enum DomainError {
    /// Input/user validation or business rule violation
    Validation(ValidationKind, String),
    /// Semantic conflict
    Conflict(ConflictKind, String),
    /// Missing resource in domain terms
    NotFound(NotFoundKind, String),
    /// Caller lacks the right to perform the operation
    Forbidden(ForbiddenKind, String),
    /// Infrastructure/operational failures
    Infra(InfraErrorKind, String),
}

impl Display for DomainError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            DomainError::Validation(kind, d) => write!(f, "validation error {kind:?}: {d}"),
            DomainError::Conflict(kind, d) => write!(f, "conflict {kind:?}: {d}"),
            DomainError::NotFound(kind, d) => write!(f, "not found {kind:?}: {d}"),
            DomainError::Forbidden(kind, d) => write!(f, "forbidden {kind:?}: {d}"),
            DomainError::Infra(kind, d) => write!(f, "infra {kind:?}: {d}"),
        }
    }
}

impl Error for DomainError {}

impl DomainError {
    pub fn validation(kind: ValidationKind, detail: impl Into<String>) -> Self {
        Self::Validation(kind, detail.into())
    }
    pub fn conflict(kind: ConflictKind, detail: impl Into<String>) -> Self {
        Self::Conflict(kind, detail.into())
    }
    pub fn not_found(kind: NotFoundKind, detail: impl Into<String>) -> Self {
        Self::NotFound(kind, detail.into())
    }
    pub fn forbidden(kind: ForbiddenKind, detail: impl Into<String>) -> Self {
        Self::Forbidden(kind, detail.into())
    }
    pub fn infra(kind: InfraErrorKind, detail: impl Into<String>) -> Self {
        Self::Infra(kind, detail.into())
    }
}

impl From<DbErr> for DomainError {
    fn from(err: DbErr) -> Self {
        match err {
            DbErr::RecordNotFound(detail) => {
                DomainError::NotFound(NotFoundKind::Other("record".into()), detail)
            }
            DbErr::ConnectionAcquire(e) => {
                DomainError::Infra(InfraErrorKind::DbUnavailable, e.to_string())
            }
            other => DomainError::Infra(InfraErrorKind::Other("db".into()), other.to_string()),
        }
    }
}
