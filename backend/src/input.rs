//! Readers for the JSON documents the external event store and holiday
//! source hand over. Nothing here writes back.

use log::{debug, warn};
use shared::{Event, HolidayMap};
use std::fs;
use std::path::Path;

use crate::domain::parse_date_key;
use crate::error::CalendarResult;

/// Load a JSON array of events
pub fn load_events(path: &Path) -> CalendarResult<Vec<Event>> {
    let content = fs::read_to_string(path)?;
    let events: Vec<Event> = serde_json::from_str(&content)?;
    debug!("Loaded {} events from {}", events.len(), path.display());
    Ok(events)
}

/// Load a JSON object of `YYYY-MM-DD` -> label.
///
/// Every key must be a valid date key, otherwise the lookup would silently
/// never match.
pub fn load_holidays(path: &Path) -> CalendarResult<HolidayMap> {
    let content = fs::read_to_string(path)?;
    let holidays = parse_holidays(&content)?;
    debug!("Loaded {} holidays from {}", holidays.len(), path.display());
    Ok(holidays)
}

pub fn parse_holidays(content: &str) -> CalendarResult<HolidayMap> {
    let holidays: HolidayMap = serde_json::from_str(content)?;
    for key in holidays.keys() {
        if let Err(e) = parse_date_key(key) {
            warn!("Rejecting holiday source: {}", e);
            return Err(e);
        }
    }
    Ok(holidays)
}
