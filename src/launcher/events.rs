//! Upcoming calendar events view

use chrono::{Local, TimeZone};
use std::fmt::Display;

use super::{Fetched, Launcher, filter};
use crate::client::models::{CalendarEvent, UpcomingView};
use crate::client::{FN_UPCOMING_EVENTS, MoodleApi, ServiceCall};
use crate::error::Result;
use crate::models::item::or_placeholder;
use crate::models::{Action, DisplayItem, Icon};

/// Display format for event start times (DD/MM/YY, HH:MM)
const TIME_FORMAT: &str = "%d/%m/%y, %H:%M";

impl<C: MoodleApi> Launcher<C> {
    /// Upcoming events whose name matches `query`, soonest first
    pub async fn events(&self, query: &str) -> Result<Vec<DisplayItem>> {
        log::debug!("Rendering events for query '{}'", query);
        let call = ServiceCall::new(FN_UPCOMING_EVENTS, &self.credentials);

        match self.fetch::<UpcomingView>(&call).await? {
            Fetched::Failed(message) => Ok(vec![DisplayItem::message(message)]),
            Fetched::Data(view) => Ok(render_events(&view.events, query, &Local)),
        }
    }
}

/// Format an epoch timestamp in `tz`
pub fn format_timestart<Tz: TimeZone>(timestart: i64, tz: &Tz) -> String
where
    Tz::Offset: Display,
{
    tz.timestamp_opt(timestart, 0)
        .earliest()
        .map(|dt| dt.format(TIME_FORMAT).to_string())
        .unwrap_or_default()
}

/// Build event items: filter by name, then stable-sort by start time
pub fn render_events<Tz: TimeZone>(
    events: &[CalendarEvent],
    query: &str,
    tz: &Tz,
) -> Vec<DisplayItem>
where
    Tz::Offset: Display,
{
    let mut items: Vec<(i64, DisplayItem)> = events
        .iter()
        .filter(|event| filter::matches(query, event.display_name()))
        .map(|event| (event.timestart, event_item(event, tz)))
        .collect();

    items.sort_by_key(|(timestart, _)| *timestart);

    or_placeholder(items.into_iter().map(|(_, item)| item).collect())
}

fn event_item<Tz: TimeZone>(event: &CalendarEvent, tz: &Tz) -> DisplayItem
where
    Tz::Offset: Display,
{
    let name = event.display_name();
    let (icon, status) = if event.is_done() {
        (Icon::Done, "Done")
    } else {
        (Icon::NotDone, "Not done")
    };

    DisplayItem::new(
        icon,
        format!(
            "{} - {}:   {}",
            event.course_id(),
            name,
            format_timestart(event.timestart, tz)
        ),
        Action::OpenUrl(event.url().to_string()),
    )
    .description(format!("{} | Full Name: {}", status, name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use serde_json::{Value, json};

    fn events(value: Value) -> Vec<CalendarEvent> {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_format_timestart() {
        // 2024-03-05 14:07:00 UTC
        assert_eq!(format_timestart(1_709_647_620, &Utc), "05/03/24, 14:07");
    }

    #[test]
    fn test_sorted_by_timestart() {
        let events = events(json!([
            {"name": "c", "timestart": 100},
            {"name": "a", "timestart": 300},
            {"name": "b", "timestart": 200}
        ]));

        let items = render_events(&events, "", &Utc);
        let names: Vec<_> = items
            .iter()
            .map(|i| i.description.rsplit(": ").next().unwrap().to_string())
            .collect();

        assert_eq!(names, vec!["c", "b", "a"]);
    }

    #[test]
    fn test_sort_is_stable_for_equal_times() {
        let events = events(json!([
            {"name": "late", "timestart": 500},
            {"name": "first", "timestart": 100},
            {"name": "second", "timestart": 100},
            {"name": "third", "timestart": 100}
        ]));

        let items = render_events(&events, "", &Utc);
        let titles: Vec<_> = items.iter().map(|i| i.title.clone()).collect();

        assert!(titles[0].contains("first"));
        assert!(titles[1].contains("second"));
        assert!(titles[2].contains("third"));
        assert!(titles[3].contains("late"));
    }

    #[test]
    fn test_item_layout() {
        let events = events(json!([{
            "name": "Essay due.",
            "timestart": 1_709_647_620,
            "course": {"id": 42},
            "url": "https://moodle.test/mod/assign/view.php?id=7",
            "action": {"name": "Add submission"}
        }]));

        let items = render_events(&events, "", &Utc);

        assert_eq!(items.len(), 1);
        let item = &items[0];
        assert_eq!(item.title, "42 - Essay due:   05/03/24, 14:07");
        assert_eq!(item.description, "Not done | Full Name: Essay due");
        assert_eq!(item.icon, Icon::NotDone);
        assert_eq!(
            item.action,
            Action::OpenUrl("https://moodle.test/mod/assign/view.php?id=7".to_string())
        );
        assert!(item.highlightable);
    }

    #[test]
    fn test_done_when_action_missing() {
        let events = events(json!([{"name": "Quiz", "timestart": 0}]));

        let items = render_events(&events, "", &Utc);

        assert_eq!(items[0].icon, Icon::Done);
        assert!(items[0].description.starts_with("Done"));
        assert_eq!(items[0].title, " - Quiz:   01/01/70, 00:00");
        assert_eq!(items[0].action, Action::OpenUrl(String::new()));
    }

    #[test]
    fn test_filters_on_name() {
        let events = events(json!([
            {"name": "Quiz 1", "timestart": 1},
            {"name": "Essay", "timestart": 2},
            {"name": "Quiz 2", "timestart": 3}
        ]));

        let items = render_events(&events, "QUIZ", &Utc);

        assert_eq!(items.len(), 2);
        assert!(items.iter().all(|i| i.title.contains("Quiz")));
    }

    #[test]
    fn test_empty_after_filter_yields_placeholder() {
        let events = events(json!([{"name": "Essay", "timestart": 2}]));

        let items = render_events(&events, "quiz", &Utc);

        assert_eq!(items, vec![DisplayItem::nothing_to_show()]);
    }

    #[test]
    fn test_no_events_yields_placeholder() {
        let items = render_events(&[], "", &Utc);
        assert_eq!(items, vec![DisplayItem::nothing_to_show()]);
    }
}
