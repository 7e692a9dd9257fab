//! Domain layer: pure tournament logic, no I/O.

pub mod bracket;
pub mod grouping;
pub mod results;
pub mod round_robin;
pub mod shuffle;
pub mod standings;

#[cfg(test)]
mod tests_bracket;
#[cfg(test)]
mod tests_grouping;
#[cfg(test)]
mod tests_props_round_robin;
#[cfg(test)]
mod tests_results;
#[cfg(test)]
mod tests_round_robin;
#[cfg(test)]
mod tests_standings;

// Re-exports for ergonomics
pub use bracket::{is_power_of_two, phase_names, BracketSlot};
pub use round_robin::double_round_robin;
pub use standings::{match_deltas, Outcome, StandingDelta};
