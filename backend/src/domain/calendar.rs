//! Calendar view assembly.
//!
//! This module turns a reference date, the event list, the notified set and
//! the holiday map into the week or month view the UI renders. The UI only
//! handles presentation; all date matching and cell assembly happens here.

use chrono::{Datelike, NaiveDate};
use shared::{
    CalendarDay, CalendarDayType, CalendarView, Event, HolidayMap, MonthView,
    NavigationDirection, NotifiedSet, ViewMode, WeekView,
};
use std::collections::HashMap;

use super::date_utils::{
    compute_month_weeks, compute_week_dates, date_from_month_and_day, format_date_key,
    format_month_label, format_week_label, shift_month, shift_week, WEEKDAY_LABELS,
};
use super::event_badge::badges_for;

/// Events on `date`, in input order.
pub fn events_on_date(events: &[Event], date: NaiveDate) -> Vec<&Event> {
    events.iter().filter(|event| event.date == date).collect()
}

/// Events on day `day` of the month containing `reference_month`, in input order.
///
/// Events from other months or years never match, and a day that does not
/// exist in the month yields nothing.
pub fn events_on_day_of_month(
    events: &[Event],
    reference_month: NaiveDate,
    day: u32,
) -> Vec<&Event> {
    match date_from_month_and_day(reference_month, day) {
        Some(date) => events_on_date(events, date),
        None => Vec::new(),
    }
}

/// Holiday label for `date`, looked up by its date key
pub fn holiday_for(holidays: &HolidayMap, date: NaiveDate) -> Option<String> {
    holidays.get(&format_date_key(date, date.day())).cloned()
}

/// Calendar service that assembles views from externally owned data
#[derive(Debug, Clone, Default)]
pub struct CalendarService;

impl CalendarService {
    /// Create a new CalendarService instance
    pub fn new() -> Self {
        Self
    }

    /// Build the view for `mode` around `reference`
    pub fn build_view(
        &self,
        mode: ViewMode,
        reference: NaiveDate,
        events: &[Event],
        notified: &NotifiedSet,
        holidays: &HolidayMap,
    ) -> CalendarView {
        match mode {
            ViewMode::Week => {
                CalendarView::Week(self.build_week_view(reference, events, notified, holidays))
            }
            ViewMode::Month => {
                CalendarView::Month(self.build_month_view(reference, events, notified, holidays))
            }
        }
    }

    /// Generate the week view containing `reference`
    pub fn build_week_view(
        &self,
        reference: NaiveDate,
        events: &[Event],
        notified: &NotifiedSet,
        holidays: &HolidayMap,
    ) -> WeekView {
        let week = compute_week_dates(reference);

        let days = week
            .dates
            .iter()
            .map(|&date| CalendarDay {
                day: date.day(),
                date: Some(date),
                day_type: CalendarDayType::MonthDay,
                holiday: holiday_for(holidays, date),
                events: badges_for(events_on_date(events, date), notified),
            })
            .collect::<Vec<_>>();

        log::debug!(
            "Built week view {}..{} with {} events",
            week.dates[0],
            week.dates[6],
            days.iter().map(|day| day.events.len()).sum::<usize>()
        );

        WeekView {
            heading: format_week_label(reference),
            weekday_labels: weekday_labels(),
            days,
        }
    }

    /// Generate the month view containing `reference`
    pub fn build_month_view(
        &self,
        reference: NaiveDate,
        events: &[Event],
        notified: &NotifiedSet,
        holidays: &HolidayMap,
    ) -> MonthView {
        let grid = compute_month_weeks(reference);
        let events_by_day = self.group_events_by_day(reference, events);

        let mut weeks = Vec::with_capacity(grid.weeks.len());
        let mut seen_month_day = false;

        for week in &grid.weeks {
            let mut row = Vec::with_capacity(7);
            for cell in week {
                match cell {
                    Some(day) => {
                        seen_month_day = true;
                        let key = format_date_key(reference, *day);
                        let day_events = events_by_day
                            .get(day)
                            .map(|matched| badges_for(matched.iter().copied(), notified))
                            .unwrap_or_default();

                        row.push(CalendarDay {
                            day: *day,
                            date: date_from_month_and_day(reference, *day),
                            day_type: CalendarDayType::MonthDay,
                            holiday: holidays.get(&key).cloned(),
                            events: day_events,
                        });
                    }
                    None if seen_month_day => {
                        row.push(CalendarDay::padding(CalendarDayType::PaddingAfter))
                    }
                    None => row.push(CalendarDay::padding(CalendarDayType::PaddingBefore)),
                }
            }
            weeks.push(row);
        }

        log::debug!(
            "Built month view {}/{} with {} rows, {} days, {} days with events",
            grid.month,
            grid.year,
            weeks.len(),
            grid.days().count(),
            events_by_day.len()
        );

        MonthView {
            heading: format_month_label(reference),
            weekday_labels: weekday_labels(),
            year: grid.year,
            month: grid.month,
            weeks,
        }
    }

    /// Group events by day-of-month for the month containing `reference_month`.
    ///
    /// Per-day order follows input order.
    pub fn group_events_by_day<'a>(
        &self,
        reference_month: NaiveDate,
        events: &'a [Event],
    ) -> HashMap<u32, Vec<&'a Event>> {
        let mut events_by_day: HashMap<u32, Vec<&'a Event>> = HashMap::new();

        for event in events {
            if event.date.year() == reference_month.year()
                && event.date.month() == reference_month.month()
            {
                events_by_day.entry(event.date.day()).or_default().push(event);
            }
        }

        events_by_day
    }

    /// New reference date after one prev/next step in `mode`
    pub fn navigate(
        &self,
        reference: NaiveDate,
        mode: ViewMode,
        direction: NavigationDirection,
    ) -> NaiveDate {
        let forward = direction == NavigationDirection::Next;
        let target = match mode {
            ViewMode::Week => shift_week(reference, forward),
            ViewMode::Month => shift_month(reference, forward),
        };
        log::info!("Navigated {} view from {} to {}", mode, reference, target);
        target
    }
}

fn weekday_labels() -> [String; 7] {
    WEEKDAY_LABELS.map(str::to_string)
}
