//! SeaORM adapters, generic over `ConnectionTrait`.
//!
//! Adapter functions return `DbErr`; the repos layer maps to `DomainError`
//! via `From<DbErr>`.

pub mod championships_sea;
pub mod groups_sea;
pub mod lineup_entries_sea;
pub mod match_statistics_sea;
pub mod matches_sea;
pub mod phases_sea;
pub mod players_sea;
pub mod registrations_sea;
pub mod standings_sea;
pub mod teams_sea;
pub mod users_sea;
