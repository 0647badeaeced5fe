//! Trueblue core - scouting statistics from The Blue Alliance.
//!
//! Fetches a season's events, teams, and matches through an on-disk
//! resource cache, folds the match scores of a chosen set of teams into
//! per-phase averages, and writes them out as a comma-delimited report.

pub mod api;
pub mod cache;
pub mod catalog;
pub mod config;
pub mod correlate;
pub mod filter;
pub mod models;
pub mod pipeline;
pub mod progress;
pub mod registry;
pub mod report;
pub mod season;
pub mod utils;

#[cfg(test)]
mod testing;

pub use api::{ApiClient, ApiError, ResourceSource};
pub use cache::ResourceCache;
pub use catalog::EventCatalog;
pub use config::{Config, RunOptions};
pub use correlate::MatchCorrelator;
pub use filter::EventFilter;
pub use models::{Event, Match, Team};
pub use pipeline::{FetchContext, Pipeline};
pub use registry::TeamRegistry;
pub use report::{team_columns, Column, ReportExporter};
pub use season::current_competition_year;
