//! Plain-text rendering of assembled views for the preview binary.

use shared::{BadgeEmphasis, CalendarDay, CalendarView, EventBadge, MonthView, WeekView};

const CELL_WIDTH: usize = 6;
const BELL: &str = "🔔";

pub trait Render {
    fn render(&self) -> String;
}

impl Render for EventBadge {
    fn render(&self) -> String {
        match self.emphasis {
            BadgeEmphasis::Notified => format!("{} {}", BELL, self.label),
            BadgeEmphasis::Normal => self.label.clone(),
        }
    }
}

impl Render for WeekView {
    fn render(&self) -> String {
        let mut lines = vec![self.heading.clone()];
        for (label, day) in self.weekday_labels.iter().zip(&self.days) {
            let mut line = format!("{} {:>2}", label, day.day);
            if let Some(holiday) = &day.holiday {
                line.push_str(&format!("  [{}]", holiday));
            }
            lines.push(line);
            push_badges(day, &mut lines);
        }
        lines.join("\n")
    }
}

impl Render for MonthView {
    fn render(&self) -> String {
        let mut lines = vec![self.heading.clone()];
        lines.push(
            self.weekday_labels
                .iter()
                .map(|label| pad(label))
                .collect::<String>()
                .trim_end()
                .to_string(),
        );

        for week in &self.weeks {
            let row: String = week
                .iter()
                .map(|cell| {
                    if cell.is_padding() {
                        pad("")
                    } else {
                        let marker = if cell.holiday.is_some() { "*" } else { "" };
                        let count = if cell.events.is_empty() {
                            String::new()
                        } else {
                            format!("+{}", cell.events.len())
                        };
                        pad(&format!("{}{}{}", cell.day, marker, count))
                    }
                })
                .collect();
            lines.push(row.trim_end().to_string());
        }

        let annotated: Vec<&CalendarDay> = self
            .weeks
            .iter()
            .flatten()
            .filter(|cell| cell.holiday.is_some() || !cell.events.is_empty())
            .collect();

        if !annotated.is_empty() {
            lines.push(String::new());
        }
        for cell in annotated {
            let mut line = format!("{:>2}", cell.day);
            if let Some(holiday) = &cell.holiday {
                line.push_str(&format!("  [{}]", holiday));
            }
            lines.push(line);
            push_badges(cell, &mut lines);
        }

        lines.join("\n")
    }
}

impl Render for CalendarView {
    fn render(&self) -> String {
        match self {
            CalendarView::Week(view) => view.render(),
            CalendarView::Month(view) => view.render(),
        }
    }
}

fn push_badges(day: &CalendarDay, lines: &mut Vec<String>) {
    for badge in &day.events {
        lines.push(format!("    {}", badge.render()));
    }
}

// Pads by char count; wide glyphs will drift, which is fine for a preview.
fn pad(text: &str) -> String {
    let width = text.chars().count();
    format!("{}{}", text, " ".repeat(CELL_WIDTH.saturating_sub(width)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::CalendarService;
    use chrono::NaiveDate;
    use shared::{Event, EventId, HolidayMap, NotifiedSet, RepeatType};

    fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn test_render_notified_badge() {
        let event = Event::new("1", "Flight", ymd(2024, 1, 15)).with_repeat(RepeatType::Weekly);
        let notified: NotifiedSet = [EventId::new("1")].into_iter().collect();
        let badge = crate::domain::badge_for(&event, &notified);
        assert_eq!(badge.render(), "🔔 🔁 Flight");
    }

    #[test]
    fn test_render_month_view() {
        let events = vec![Event::new("1", "Lunch", ymd(2024, 1, 15))];
        let mut holidays = HolidayMap::new();
        holidays.insert("2024-01-01".to_string(), "신정".to_string());

        let view = CalendarService::new().build_month_view(
            ymd(2024, 1, 1),
            &events,
            &NotifiedSet::new(),
            &holidays,
        );
        let text = view.render();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "2024년 1월");
        assert!(lines[2].starts_with("      1*"));
        assert!(text.contains("15+1"));
        assert!(text.contains(" 1  [신정]"));
        assert!(text.contains("    Lunch"));
    }

    #[test]
    fn test_render_week_view() {
        let events = vec![Event::new("1", "Lunch", ymd(2024, 1, 15))];
        let view = CalendarService::new().build_week_view(
            ymd(2024, 1, 15),
            &events,
            &NotifiedSet::new(),
            &HolidayMap::new(),
        );
        let text = view.render();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "2024년 1월 3주");
        assert_eq!(lines[1], "일 14");
        assert_eq!(lines[2], "월 15");
        assert_eq!(lines[3], "    Lunch");
    }
}
