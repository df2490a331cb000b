//! Per-event badge data: repeat marker and notification emphasis.

use shared::{BadgeEmphasis, Event, EventBadge, NotifiedSet};

/// Marker prepended to the label of repeating events
pub const REPEAT_MARKER: &str = "🔁";

/// Build the badge the presentation layer draws for `event`.
pub fn badge_for(event: &Event, notified: &NotifiedSet) -> EventBadge {
    let is_notified = notified.contains(&event.id);
    let is_repeating = event.repeat.is_repeating();

    let label = if is_repeating {
        format!("{} {}", REPEAT_MARKER, event.title)
    } else {
        event.title.clone()
    };

    EventBadge {
        id: event.id.clone(),
        title: event.title.clone(),
        label,
        is_notified,
        is_repeating,
        emphasis: if is_notified { BadgeEmphasis::Notified } else { BadgeEmphasis::Normal },
    }
}

/// Badges for a day's events, in the order given
pub fn badges_for<'a, I>(events: I, notified: &NotifiedSet) -> Vec<EventBadge>
where
    I: IntoIterator<Item = &'a Event>,
{
    events.into_iter().map(|event| badge_for(event, notified)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use shared::{EventId, RepeatType};

    fn event(id: &str, title: &str) -> Event {
        Event::new(id, title, NaiveDate::from_ymd_opt(2024, 1, 15).unwrap())
    }

    #[test]
    fn test_plain_event_badge() {
        let badge = badge_for(&event("1", "Dentist"), &NotifiedSet::new());
        assert_eq!(badge.label, "Dentist");
        assert!(!badge.is_repeating);
        assert!(!badge.is_notified);
        assert_eq!(badge.emphasis, BadgeEmphasis::Normal);
    }

    #[test]
    fn test_repeating_event_gets_marker() {
        let repeating = event("2", "Standup").with_repeat(RepeatType::Daily);
        let badge = badge_for(&repeating, &NotifiedSet::new());
        assert_eq!(badge.label, "🔁 Standup");
        assert_eq!(badge.title, "Standup");
        assert!(badge.is_repeating);
    }

    #[test]
    fn test_notified_event_is_emphasized() {
        let notified: NotifiedSet = [EventId::new("3")].into_iter().collect();
        let badge = badge_for(&event("3", "Flight"), &notified);
        assert!(badge.is_notified);
        assert_eq!(badge.emphasis, BadgeEmphasis::Notified);

        let other = badge_for(&event("4", "Hotel"), &notified);
        assert!(!other.is_notified);
    }

    #[test]
    fn test_badges_preserve_order() {
        let events = vec![event("b", "Second"), event("a", "First")];
        let badges = badges_for(&events, &NotifiedSet::new());
        let ids: Vec<&str> = badges.iter().map(|b| b.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "a"]);
    }
}
