//! Trueblue - scout robotics teams from last season's results.
//!
//! Asks which events the scouting team is attending, gathers every team
//! registered there, and reports each team's qualification, elimination,
//! and overall average alliance score from the research season.

mod prompt;

use std::io;
use std::path::PathBuf;

use anyhow::Result;
use chrono::Local;
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use prompt::Prompter;
use trueblue_core::{
    current_competition_year, team_columns, ApiClient, Config, Pipeline, ReportExporter,
    ResourceCache,
};

#[derive(Debug, Parser)]
#[command(name = "trueblue", version, about)]
struct Args {
    /// Shows caching messages.
    #[arg(long)]
    verbose: bool,

    /// Season to research (prompted for when absent)
    #[arg(long)]
    year: Option<i32>,

    /// Key of an attended event, e.g. 2015casj (repeatable; prompted for when absent)
    #[arg(long = "event", value_name = "KEY")]
    events: Vec<String>,

    /// Report file to write (prompted for when absent)
    #[arg(long, short)]
    output: Option<PathBuf>,

    /// Directory holding cached API responses
    #[arg(long)]
    cache_dir: Option<PathBuf>,
}

/// Initialize the tracing subscriber for logging
fn init_tracing(verbose: bool) {
    // RUST_LOG wins; otherwise --verbose raises the default from warn to info
    let default_level = if verbose { "info" } else { "warn" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr).with_target(false))
        .with(filter)
        .init();
}

/// Remember the chosen report file as next run's default
fn remember_output(path: &str) {
    let saved = Config::load().and_then(|mut config| {
        config.output_file = Some(path.to_string());
        config.save()
    });
    if let Err(e) = saved {
        warn!(error = %e, "Could not save config");
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Load .env file if present (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let args = Args::parse();
    init_tracing(args.verbose);
    if args.verbose {
        println!("Verbosity enabled.");
    }

    let mut config = Config::load()?;
    config.apply_env(|name| std::env::var(name).ok());
    if let Some(dir) = &args.cache_dir {
        config.cache_dir = Some(dir.clone());
    }

    let options = config.run_options(args.verbose);
    let client = ApiClient::new(config.api_base_url())?;
    let cache = ResourceCache::new(config.cache_dir(), options.verbose)?;
    let pipeline = Pipeline::new(&cache, &client, &options);
    info!(cache_dir = %cache.cache_dir().display(), api = client.base_url(), "Trueblue starting");

    let stdin = io::stdin();
    let mut prompter = Prompter::new(stdin.lock(), io::stdout());

    let year = match args.year {
        Some(year) => year,
        None => prompter.ask_year()?,
    };
    let season = pipeline.season_events(year).await?;

    let competition_year = current_competition_year(Local::now().date_naive());
    let attended = if args.events.is_empty() {
        let upcoming = pipeline.catalog().list_all_events(competition_year).await?;
        prompter.collect_attended(&upcoming)?
    } else {
        args.events.clone()
    };

    let registry = pipeline.build_registry(season, &attended).await?;

    let output = match args.output {
        Some(path) => path,
        None => {
            let chosen = prompter.ask_output(config.output_file())?;
            remember_output(&chosen);
            PathBuf::from(chosen)
        }
    };

    ReportExporter::new(team_columns(year, competition_year)).export(&output, registry.iter())?;
    info!(teams = registry.len(), path = %output.display(), "Report complete");
    Ok(())
}
