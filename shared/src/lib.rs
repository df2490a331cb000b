use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::fmt;
use std::str::FromStr;

/// Opaque event identifier, unique within the event store
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventId(pub String);

impl EventId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Set of event ids the notification subsystem has already alerted on
pub type NotifiedSet = HashSet<EventId>;

/// Holiday labels keyed by `YYYY-MM-DD`
pub type HolidayMap = HashMap<String, String>;

/// How an event repeats. Events arrive already expanded into occurrences,
/// so this only drives the repeat marker on the badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RepeatType {
    #[default]
    None,
    Daily,
    Weekly,
    Monthly,
    Yearly,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RepeatInfo {
    #[serde(rename = "type")]
    pub repeat_type: RepeatType,
    #[serde(default = "default_repeat_interval")]
    pub interval: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
}

fn default_repeat_interval() -> u32 {
    1
}

impl Default for RepeatInfo {
    fn default() -> Self {
        Self {
            repeat_type: RepeatType::None,
            interval: default_repeat_interval(),
            end_date: None,
        }
    }
}

impl RepeatInfo {
    pub fn is_repeating(&self) -> bool {
        self.repeat_type != RepeatType::None
    }
}

/// A calendar event as supplied by the event store
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: EventId,
    pub title: String,
    /// Calendar day of the occurrence (YYYY-MM-DD)
    pub date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_time: Option<NaiveTime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_time: Option<NaiveTime>,
    #[serde(default)]
    pub repeat: RepeatInfo,
}

impl Event {
    pub fn new(id: impl Into<String>, title: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            id: EventId::new(id),
            title: title.into(),
            date,
            start_time: None,
            end_time: None,
            repeat: RepeatInfo::default(),
        }
    }

    pub fn with_repeat(mut self, repeat_type: RepeatType) -> Self {
        self.repeat.repeat_type = repeat_type;
        self
    }
}

/// Calendar view mode selected by the navigation controller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    Week,
    #[default]
    Month,
}

impl ViewMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ViewMode::Week => "week",
            ViewMode::Month => "month",
        }
    }
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ViewMode {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "week" => Ok(ViewMode::Week),
            "month" => Ok(ViewMode::Month),
            other => Err(ParseEnumError::UnknownViewMode(other.to_string())),
        }
    }
}

/// Direction of a prev/next navigation step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NavigationDirection {
    Prev,
    Next,
}

impl FromStr for NavigationDirection {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "prev" => Ok(NavigationDirection::Prev),
            "next" => Ok(NavigationDirection::Next),
            other => Err(ParseEnumError::UnknownDirection(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ParseEnumError {
    UnknownViewMode(String),
    UnknownDirection(String),
}

impl fmt::Display for ParseEnumError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseEnumError::UnknownViewMode(value) => {
                write!(f, "Unknown view mode '{}', expected 'week' or 'month'", value)
            }
            ParseEnumError::UnknownDirection(value) => {
                write!(f, "Unknown navigation direction '{}', expected 'prev' or 'next'", value)
            }
        }
    }
}

impl std::error::Error for ParseEnumError {}

/// The seven Sunday-first dates of one week
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekGrid {
    pub dates: [NaiveDate; 7],
}

/// One row of a month grid; `None` marks a position outside the month
pub type MonthWeek = [Option<u32>; 7];

/// Week rows spanning a whole month
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthGrid {
    pub year: i32,
    pub month: u32,
    pub weeks: Vec<MonthWeek>,
}

impl MonthGrid {
    /// In-month day numbers in grid order
    pub fn days(&self) -> impl Iterator<Item = u32> + '_ {
        self.weeks.iter().flat_map(|week| week.iter().flatten().copied())
    }
}

/// Rendering emphasis for an event badge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BadgeEmphasis {
    /// Already notified: bell icon, bold red text
    Notified,
    Normal,
}

/// Everything the presentation layer needs to draw one event chip
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventBadge {
    pub id: EventId,
    pub title: String,
    /// Display text, prefixed with the repeat marker for repeating events
    pub label: String,
    pub is_notified: bool,
    pub is_repeating: bool,
    pub emphasis: BadgeEmphasis,
}

/// Type of calendar day for explicit rendering logic
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum CalendarDayType {
    /// Empty padding day before the start of the month
    PaddingBefore,
    /// Actual day within the month (or any day of a week view)
    MonthDay,
    /// Empty padding day after the end of the month
    PaddingAfter,
}

/// Represents a single cell of a week or month view
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CalendarDay {
    /// Day of month, 0 for padding cells
    pub day: u32,
    pub date: Option<NaiveDate>,
    pub day_type: CalendarDayType,
    pub holiday: Option<String>,
    pub events: Vec<EventBadge>,
}

impl CalendarDay {
    pub fn padding(day_type: CalendarDayType) -> Self {
        Self {
            day: 0,
            date: None,
            day_type,
            holiday: None,
            events: Vec::new(),
        }
    }

    pub fn is_padding(&self) -> bool {
        self.day_type != CalendarDayType::MonthDay
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WeekView {
    pub heading: String,
    pub weekday_labels: [String; 7],
    pub days: Vec<CalendarDay>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MonthView {
    pub heading: String,
    pub weekday_labels: [String; 7],
    pub year: i32,
    pub month: u32,
    pub weeks: Vec<Vec<CalendarDay>>,
}

/// A fully assembled view, tagged by mode
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "view", rename_all = "lowercase")]
pub enum CalendarView {
    Week(WeekView),
    Month(MonthView),
}

impl CalendarView {
    pub fn mode(&self) -> ViewMode {
        match self {
            CalendarView::Week(_) => ViewMode::Week,
            CalendarView::Month(_) => ViewMode::Month,
        }
    }

    pub fn heading(&self) -> &str {
        match self {
            CalendarView::Week(view) => &view.heading,
            CalendarView::Month(view) => &view.heading,
        }
    }
}
