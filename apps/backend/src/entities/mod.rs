//! SeaORM entity definitions for the tournament engine schema.

pub mod championships;
pub mod groups;
pub mod lineup_entries;
pub mod match_statistics;
pub mod matches;
pub mod phases;
pub mod players;
pub mod registrations;
pub mod standings;
pub mod teams;
pub mod users;
