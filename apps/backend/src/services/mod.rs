//! Service layer: orchestration over repos inside transactions.

use crate::errors::domain::{DomainError, ForbiddenKind};
use crate::repos::championships::Championship;

pub mod bracket;
pub mod championships;
pub mod groups;
pub mod matches;
pub mod results;
pub mod schedule;
pub mod standings;

/// Identity of the caller. Transport and authentication live outside this
/// crate; callers hand us the resolved user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Actor {
    pub user_id: i64,
    pub is_admin: bool,
}

impl Actor {
    pub fn user(user_id: i64) -> Self {
        Self {
            user_id,
            is_admin: false,
        }
    }

    pub fn admin(user_id: i64) -> Self {
        Self {
            user_id,
            is_admin: true,
        }
    }
}

/// Mutating championship operations are restricted to the organizer (or an
/// admin).
pub(crate) fn ensure_organizer(
    championship: &Championship,
    actor: &Actor,
) -> Result<(), DomainError> {
    if actor.is_admin || championship.organizer_user_id == actor.user_id {
        return Ok(());
    }
    Err(DomainError::forbidden(
        ForbiddenKind::NotOrganizer,
        format!(
            "user {} is not the organizer of championship {}",
            actor.user_id, championship.id
        ),
    ))
}
