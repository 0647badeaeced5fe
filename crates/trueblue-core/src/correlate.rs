//! Fold match results into the scouted teams' running totals.

use anyhow::{Context, Result};
use tracing::{debug, info};

use crate::api::ResourceSource;
use crate::models::{Event, Match};
use crate::pipeline::FetchContext;
use crate::progress::Progress;
use crate::registry::TeamRegistry;

pub struct MatchCorrelator<'a, S> {
    ctx: FetchContext<'a, S>,
}

impl<'a, S: ResourceSource> MatchCorrelator<'a, S> {
    pub fn new(ctx: FetchContext<'a, S>) -> Self {
        Self { ctx }
    }

    /// Match keys of every event, event by event, in listed order.
    pub fn flatten(events: &[Event]) -> Vec<String> {
        events.iter().flat_map(|e| e.matches.iter().cloned()).collect()
    }

    /// Fetch each match and credit its alliance scores to registered teams.
    pub async fn correlate(
        &self,
        registry: &mut TeamRegistry,
        match_keys: &[String],
    ) -> Result<()> {
        let source = self.ctx.source;
        let show = self.ctx.options.show_progress;
        let mut progress = Progress::stdout("matches", match_keys.len(), show);

        for key in match_keys {
            let key = key.as_str();
            // The endpoint wraps the single record in a list
            let wrapped: Vec<Match> = self
                .ctx
                .cache
                .fetch_or_load(&format!("match{}", key), move || source.match_detail(key))
                .await?;

            match wrapped.into_iter().next() {
                Some(played) => self.apply(registry, &played, key)?,
                None => debug!(match_key = key, "Empty match record, skipping"),
            }
            progress.tick();
        }

        info!(matches = match_keys.len(), "Correlated match results");
        Ok(())
    }

    fn apply(&self, registry: &mut TeamRegistry, played: &Match, key: &str) -> Result<()> {
        let level = played.level();

        for (team_key, score) in played.appearances() {
            let number = self
                .team_number(team_key)
                .with_context(|| format!("Invalid team key in match {}", key))?;

            match registry.get_mut(number) {
                Some(team) => team.record_result(level, score),
                None => debug!(
                    team = number,
                    match_key = key,
                    %level,
                    "Team not scouted, skipping"
                ),
            }
        }
        Ok(())
    }

    fn team_number(&self, team_key: &str) -> Result<u32> {
        let digits = team_key
            .strip_prefix(self.ctx.options.team_prefix.as_str())
            .unwrap_or(team_key);
        digits
            .parse()
            .with_context(|| format!("Not a team key: {}", team_key))
    }
}
