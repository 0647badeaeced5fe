//! Season event lists and event detail records.

use anyhow::Result;
use tracing::info;

use crate::api::ResourceSource;
use crate::models::Event;
use crate::pipeline::FetchContext;
use crate::progress::Progress;

pub struct EventCatalog<'a, S> {
    ctx: FetchContext<'a, S>,
}

impl<'a, S: ResourceSource> EventCatalog<'a, S> {
    pub fn new(ctx: FetchContext<'a, S>) -> Self {
        Self { ctx }
    }

    /// Every event in the season index, official or not
    pub async fn list_all_events(&self, year: i32) -> Result<Vec<Event>> {
        let source = self.ctx.source;
        self.ctx
            .cache
            .fetch_or_load(&format!("regionals{}", year), move || source.event_index(year))
            .await
    }

    /// Official events of a season, in index order
    pub async fn list_events(&self, year: i32) -> Result<Vec<Event>> {
        let official: Vec<Event> = self
            .list_all_events(year)
            .await?
            .into_iter()
            .filter(|e| e.official)
            .collect();

        info!(year, count = official.len(), "Loaded official events");
        Ok(official)
    }

    /// Full record (roster and match keys) for one event
    pub async fn resolve_detail(&self, event_key: &str) -> Result<Event> {
        let source = self.ctx.source;
        self.ctx
            .cache
            .fetch_or_load(&format!("regional{}", event_key), move || {
                source.event_detail(event_key)
            })
            .await
    }

    /// Full records for a batch of events, with progress notices
    pub async fn resolve_details(&self, events: &[Event]) -> Result<Vec<Event>> {
        let source = self.ctx.source;
        let show = self.ctx.options.show_progress;
        let mut progress = Progress::stdout("events", events.len(), show);
        let mut details = Vec::with_capacity(events.len());

        for event in events {
            let key = event.key.as_str();
            let detail: Event = self
                .ctx
                .cache
                .fetch_or_load_quiet(&format!("regional{}", key), move || source.event_detail(key))
                .await?;
            details.push(detail);
            progress.tick();
        }

        Ok(details)
    }
}
