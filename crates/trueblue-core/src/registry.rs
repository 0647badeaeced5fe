//! Teams registered at a set of events.

use std::collections::HashMap;

use anyhow::Result;
use tracing::{debug, info};

use crate::api::ResourceSource;
use crate::models::{Event, Team, TeamRecord};
use crate::pipeline::FetchContext;
use crate::progress::Progress;

/// Distinct teams keyed by team number, kept in the order they were first
/// seen.
#[derive(Debug, Default)]
pub struct TeamRegistry {
    teams: Vec<Team>,
    index: HashMap<u32, usize>,
}

impl TeamRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetch the roster of every event and register each team on it.
    pub async fn build_from_events<S: ResourceSource>(
        ctx: FetchContext<'_, S>,
        events: &[Event],
    ) -> Result<Self> {
        let source = ctx.source;
        let mut registry = Self::new();
        let mut progress = Progress::stdout("teams", events.len(), ctx.options.show_progress);

        for event in events {
            let roster = event.teams.as_slice();
            let records: Vec<TeamRecord> = ctx
                .cache
                .fetch_or_load_quiet(&format!("teams{}", event.key), move || {
                    source.team_details(roster)
                })
                .await?;

            for record in records {
                registry.register(record, &event.name);
            }
            progress.tick();
        }

        info!(teams = registry.len(), events = events.len(), "Built team registry");
        Ok(registry)
    }

    /// Add a newly seen team, or note another event for a known one.
    /// Identity fields always come from the first sighting.
    pub fn register(&mut self, record: TeamRecord, event_name: &str) {
        match self.index.get(&record.team_number) {
            Some(&slot) => {
                debug!(team = record.team_number, event = event_name, "Team seen again");
                self.teams[slot].events.push(event_name.to_string());
            }
            None => {
                self.index.insert(record.team_number, self.teams.len());
                self.teams.push(Team::from_record(record, event_name));
            }
        }
    }

    pub fn get(&self, number: u32) -> Option<&Team> {
        self.index.get(&number).map(|&slot| &self.teams[slot])
    }

    pub fn get_mut(&mut self, number: u32) -> Option<&mut Team> {
        self.index.get(&number).map(|&slot| &mut self.teams[slot])
    }

    pub fn contains(&self, number: u32) -> bool {
        self.index.contains_key(&number)
    }

    pub fn len(&self) -> usize {
        self.teams.len()
    }

    pub fn is_empty(&self) -> bool {
        self.teams.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Team> {
        self.teams.iter()
    }
}
