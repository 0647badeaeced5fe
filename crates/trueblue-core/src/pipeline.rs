//! End-to-end scouting run.
//!
//! Data flows one way: the season catalog feeds the attended-event
//! registry, the registry narrows the season, and the remaining matches
//! are folded into each team's totals. Every fetch goes through the
//! shared `ResourceCache` and is awaited before the next one starts.

use anyhow::Result;
use tracing::info;

use crate::api::ResourceSource;
use crate::cache::ResourceCache;
use crate::catalog::EventCatalog;
use crate::config::RunOptions;
use crate::correlate::MatchCorrelator;
use crate::filter::EventFilter;
use crate::models::Event;
use crate::registry::TeamRegistry;

/// Shared services handed to each stage.
pub struct FetchContext<'a, S> {
    pub cache: &'a ResourceCache,
    pub source: &'a S,
    pub options: &'a RunOptions,
}

impl<'a, S> FetchContext<'a, S> {
    pub fn new(cache: &'a ResourceCache, source: &'a S, options: &'a RunOptions) -> Self {
        Self {
            cache,
            source,
            options,
        }
    }
}

// Manual impls: the derives would demand `S: Clone`.
impl<S> Clone for FetchContext<'_, S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S> Copy for FetchContext<'_, S> {}

pub struct Pipeline<'a, S> {
    ctx: FetchContext<'a, S>,
}

impl<'a, S: ResourceSource> Pipeline<'a, S> {
    pub fn new(cache: &'a ResourceCache, source: &'a S, options: &'a RunOptions) -> Self {
        Self {
            ctx: FetchContext::new(cache, source, options),
        }
    }

    pub fn catalog(&self) -> EventCatalog<'a, S> {
        EventCatalog::new(self.ctx)
    }

    /// Official events of the research season, with rosters and match keys
    pub async fn season_events(&self, year: i32) -> Result<Vec<Event>> {
        let catalog = self.catalog();
        let events = catalog.list_events(year).await?;
        catalog.resolve_details(&events).await
    }

    /// Teams at the attended events, scored over the season's matches.
    pub async fn build_registry(
        &self,
        season: Vec<Event>,
        attended_keys: &[String],
    ) -> Result<TeamRegistry> {
        let catalog = self.catalog();
        let mut attended = Vec::with_capacity(attended_keys.len());
        for key in attended_keys {
            attended.push(catalog.resolve_detail(key).await?);
        }

        let mut registry = TeamRegistry::build_from_events(self.ctx, &attended).await?;

        let relevant = EventFilter::new(&self.ctx.options.team_prefix).filter(season, &registry);
        let matches = MatchCorrelator::<S>::flatten(&relevant);
        info!(
            events = relevant.len(),
            matches = matches.len(),
            "Correlating season matches"
        );

        MatchCorrelator::new(self.ctx)
            .correlate(&mut registry, &matches)
            .await?;
        Ok(registry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::{team_columns, ReportExporter};
    use crate::testing::FakeSource;
    use tempfile::TempDir;

    fn season() -> FakeSource {
        FakeSource::new()
            // Research season
            .with_event(
                2014,
                "2014casj",
                "Silicon Valley Regional",
                true,
                &[254, 971, 8],
                &["2014casj_qm1", "2014casj_f1m1"],
            )
            .with_event(
                2014,
                "2014mnmi",
                "Minnesota 10000 Lakes Regional",
                true,
                &[2052, 3130],
                &["2014mnmi_qm1"],
            )
            .with_event(2014, "2014scrim", "Offseason Scrimmage", false, &[254], &["2014scrim_qm1"])
            .with_match("2014casj_qm1", "Quals", (40, &[254, 8, 100]), (30, &[971, 101, 102]))
            .with_match("2014casj_f1m1", "Finals", (80, &[254, 971, 8]), (70, &[100, 101, 102]))
            .with_match("2014mnmi_qm1", "Quals", (99, &[2052, 3130, 1]), (1, &[2, 3, 4]))
            // Attended events
            .with_event(2015, "2015casj", "Silicon Valley Regional", true, &[254, 971, 1678], &[])
            .with_team(254, "The Cheesy Poofs")
            .with_team(971, "Spartan Robotics")
            .with_team(1678, "Citrus Circuits")
    }

    #[tokio::test]
    async fn test_full_run() {
        let dir = TempDir::new().unwrap();
        let cache = ResourceCache::new(dir.path().join("cache"), false).unwrap();
        let source = season();
        let options = RunOptions {
            show_progress: false,
            ..RunOptions::default()
        };
        let pipeline = Pipeline::new(&cache, &source, &options);

        let season_events = pipeline.season_events(2014).await.unwrap();
        assert_eq!(season_events.len(), 2);

        let registry = pipeline
            .build_registry(season_events, &["2015casj".to_string()])
            .await
            .unwrap();

        let order: Vec<u32> = registry.iter().map(|t| t.number).collect();
        assert_eq!(order, vec![254, 971, 1678]);

        let poofs = registry.get(254).unwrap();
        assert_eq!(poofs.qualification_average(), 40.0);
        assert_eq!(poofs.elimination_average(), 80.0);
        assert_eq!(poofs.overall_average(), 60.0);

        let spartans = registry.get(971).unwrap();
        assert_eq!(spartans.overall_average(), 55.0);

        // Didn't play in the research season
        assert_eq!(registry.get(1678).unwrap().overall_average(), 0.0);

        // Minnesota shares no team with the registry and was never fetched
        assert!(!cache.contains("match2014mnmi_qm1"));
        assert!(cache.contains("match2014casj_f1m1"));

        let mut out = Vec::new();
        ReportExporter::new(team_columns(2014, 2015))
            .write(&mut out, registry.iter())
            .unwrap();
        let report = String::from_utf8(out).unwrap();
        assert!(report.contains("\"1678\",\"Citrus Circuits\",\"\",\"\",\"\","));
    }

    #[tokio::test]
    async fn test_second_run_is_served_from_cache() {
        let dir = TempDir::new().unwrap();
        let cache = ResourceCache::new(dir.path().join("cache"), true).unwrap();
        let source = season();
        let options = RunOptions {
            show_progress: false,
            ..RunOptions::default()
        };
        let pipeline = Pipeline::new(&cache, &source, &options);
        let attended = vec!["2015casj".to_string()];

        let first = pipeline.season_events(2014).await.unwrap();
        let first = pipeline.build_registry(first, &attended).await.unwrap();
        let calls = source.calls();

        let second = pipeline.season_events(2014).await.unwrap();
        let second = pipeline.build_registry(second, &attended).await.unwrap();

        assert_eq!(source.calls(), calls);
        let totals =
            |r: &TeamRegistry| -> Vec<f64> { r.iter().map(|t| t.overall_average()).collect() };
        assert_eq!(totals(&first), totals(&second));
    }
}
