//! Insert/update payloads for the matches adapter.

use time::OffsetDateTime;

use crate::entities::matches::MatchStatus;

/// Insert payload for one match. Team slots are optional so knockout
/// placeholders can be created before the pairing is known.
#[derive(Debug, Clone)]
pub struct MatchCreate {
    pub championship_id: i64,
    pub phase_id: Option<i64>,
    pub group_id: Option<i64>,
    pub home_team_id: Option<i64>,
    pub away_team_id: Option<i64>,
    pub round_no: i32,
    pub kickoff_at: Option<OffsetDateTime>,
    pub venue: Option<String>,
}

impl MatchCreate {
    pub fn new(championship_id: i64, round_no: i32) -> Self {
        Self {
            championship_id,
            phase_id: None,
            group_id: None,
            home_team_id: None,
            away_team_id: None,
            round_no,
            kickoff_at: None,
            venue: None,
        }
    }

    pub fn with_teams(mut self, home_team_id: i64, away_team_id: i64) -> Self {
        self.home_team_id = Some(home_team_id);
        self.away_team_id = Some(away_team_id);
        self
    }

    pub fn with_phase(mut self, phase_id: i64) -> Self {
        self.phase_id = Some(phase_id);
        self
    }

    pub fn with_group(mut self, group_id: i64) -> Self {
        self.group_id = Some(group_id);
        self
    }

    pub fn with_kickoff(mut self, kickoff_at: OffsetDateTime) -> Self {
        self.kickoff_at = Some(kickoff_at);
        self
    }

    pub fn with_venue(mut self, venue: impl Into<String>) -> Self {
        self.venue = Some(venue.into());
        self
    }
}

/// Scheduling fields an organizer may change before kickoff.
#[derive(Debug, Clone, Default)]
pub struct MatchScheduleUpdate {
    pub kickoff_at: Option<OffsetDateTime>,
    pub venue: Option<String>,
}

/// Final score written when a result is committed.
#[derive(Debug, Clone, Copy)]
pub struct MatchResultUpdate {
    pub home_score: i32,
    pub away_score: i32,
}

/// Status transitions allowed on an open match.
#[derive(Debug, Clone, Copy)]
pub struct MatchStatusUpdate {
    pub status: MatchStatus,
}
