use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use clap::Parser;
use shared::{EventId, HolidayMap, NavigationDirection, NotifiedSet, ViewMode};
use tracing::info;

use event_calendar_backend::config::PreviewConfig;
use event_calendar_backend::domain::{ensure_supported_date, CalendarService};
use event_calendar_backend::input::{load_events, load_holidays};
use event_calendar_backend::preview::Render;

#[derive(Parser)]
#[command(name = "calendar-preview")]
#[command(about = "Render a week or month calendar view for a reference date")]
struct Cli {
    /// Reference date (YYYY-MM-DD), defaults to today
    #[arg(short, long)]
    date: Option<NaiveDate>,

    /// View mode: week or month
    #[arg(short, long)]
    view: Option<ViewMode>,

    /// Step the reference date once before rendering: prev or next
    #[arg(long)]
    navigate: Option<NavigationDirection>,

    /// JSON array of events
    #[arg(short, long)]
    events: Option<PathBuf>,

    /// JSON object of YYYY-MM-DD -> holiday label
    #[arg(long)]
    holidays: Option<PathBuf>,

    /// Id of an event that has already been notified (repeatable)
    #[arg(long = "notified")]
    notified: Vec<String>,

    /// Preview configuration file
    #[arg(short, long, default_value = "calendar-preview.yaml")]
    config: PathBuf,

    /// Print the assembled view as JSON instead of text
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = PreviewConfig::bootstrap(&cli.config)
        .with_context(|| format!("Failed to load config {}", cli.config.display()))?;

    let service = CalendarService::new();
    let mode = cli.view.unwrap_or(config.default_view);
    let mut reference = cli.date.unwrap_or_else(|| Local::now().date_naive());
    if let Some(direction) = cli.navigate {
        reference = service.navigate(reference, mode, direction);
    }
    let reference = ensure_supported_date(reference)?;

    let events = match cli.events.or(config.events_path) {
        Some(path) => load_events(&path)
            .with_context(|| format!("Failed to load events from {}", path.display()))?,
        None => Vec::new(),
    };
    let holidays = match cli.holidays.or(config.holidays_path) {
        Some(path) => load_holidays(&path)
            .with_context(|| format!("Failed to load holidays from {}", path.display()))?,
        None => HolidayMap::new(),
    };
    let notified: NotifiedSet = cli.notified.into_iter().map(EventId::new).collect();

    let view = service.build_view(mode, reference, &events, &notified, &holidays);
    info!(
        "Rendering {} for {} ({} events, {} holidays)",
        view.heading(),
        reference,
        events.len(),
        holidays.len()
    );

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&view)?);
    } else {
        println!("{}", view.render());
    }

    Ok(())
}
