//! Data models for competition records.
//!
//! - `Event`: a competition, from the season index or its detail record
//! - `TeamRecord`, `Team`: remote team details and the scouting view of a team
//! - `Match`: one played match with its two alliances

pub mod event;
pub mod match_record;
pub mod team;

pub use event::Event;
pub use match_record::{Alliance, Alliances, CompetitionLevel, Match};
pub use team::{PhaseStats, Team, TeamRecord};
