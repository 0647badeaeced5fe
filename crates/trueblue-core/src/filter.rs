//! Narrow a season down to the events the scouted teams played in.

use tracing::info;

use crate::models::Event;
use crate::registry::TeamRegistry;

/// Keeps an event when at least one registered team is on its roster.
pub struct EventFilter<'a> {
    team_prefix: &'a str,
}

impl<'a> EventFilter<'a> {
    pub fn new(team_prefix: &'a str) -> Self {
        Self { team_prefix }
    }

    /// Input order is preserved and each event appears at most once.
    pub fn filter(&self, events: Vec<Event>, registry: &TeamRegistry) -> Vec<Event> {
        let before = events.len();
        let kept: Vec<Event> = events
            .into_iter()
            .filter(|event| registry.iter().any(|team| event.has_team(&team.key(self.team_prefix))))
            .collect();

        info!(before, after = kept.len(), "Filtered events to scouted teams");
        kept
    }
}
