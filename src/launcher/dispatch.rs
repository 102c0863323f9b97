//! Query dispatch
//!
//! Decides from the typed keyword and argument which view to show. Routing is
//! a pure function of the input and the keyword preferences.

use super::Launcher;
use crate::client::MoodleApi;
use crate::config::Preferences;
use crate::models::{Action, DisplayItem, Icon};

/// A query as the launcher reports it: the keyword that triggered the
/// extension and the text typed after it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordQuery {
    pub keyword: String,
    pub argument: String,
}

impl KeywordQuery {
    /// Split raw input into the leading keyword and the remaining argument
    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim_start();
        match raw.split_once(char::is_whitespace) {
            Some((keyword, argument)) => Self {
                keyword: keyword.to_string(),
                argument: argument.trim_start().to_string(),
            },
            None => Self {
                keyword: raw.to_string(),
                argument: String::new(),
            },
        }
    }
}

/// Where a query goes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Events(String),
    Courses(String),
    Menu,
}

/// Strip `prefix` from the start of `text`, ignoring ASCII case
fn strip_prefix_ignore_case<'a>(text: &'a str, prefix: &str) -> Option<&'a str> {
    let head = text.get(..prefix.len())?;
    head.eq_ignore_ascii_case(prefix).then_some(&text[prefix.len()..])
}

/// Route a query.
///
/// Shortcut keywords win outright and receive the argument untouched. Otherwise
/// an empty argument shows the menu, and an argument starting with `events` or
/// `courses` (any case) goes to that view with the trimmed remainder.
pub fn route(preferences: &Preferences, keyword: &str, argument: &str) -> Route {
    if keyword == preferences.kw_events {
        return Route::Events(argument.to_string());
    }
    if keyword == preferences.kw_courses {
        return Route::Courses(argument.to_string());
    }

    if argument.is_empty() {
        return Route::Menu;
    }

    if let Some(rest) = strip_prefix_ignore_case(argument, "events") {
        return Route::Events(rest.trim().to_string());
    }
    if let Some(rest) = strip_prefix_ignore_case(argument, "courses") {
        return Route::Courses(rest.trim().to_string());
    }

    Route::Menu
}

impl<C: MoodleApi> Launcher<C> {
    /// Top-level menu; each entry pre-fills the query for its view
    pub fn menu(&self, keyword: &str) -> Vec<DisplayItem> {
        vec![
            DisplayItem::new(
                Icon::App,
                "Upcoming events",
                Action::SetQuery(format!("{} events ", keyword)),
            )
            .description("Your upcoming calendar events"),
            DisplayItem::new(
                Icon::App,
                "courses",
                Action::SetQuery(format!("{} courses ", keyword)),
            )
            .description("Your enrolled courses"),
        ]
    }

    /// Handle one query. Never fails: errors are logged and the menu is shown.
    pub async fn dispatch(&self, keyword: &str, argument: &str) -> Vec<DisplayItem> {
        let route = route(&self.preferences, keyword, argument);
        log::debug!("Query '{}' '{}' routed to {:?}", keyword, argument, route);

        let result = match route {
            Route::Events(query) => self.events(&query).await,
            Route::Courses(query) => self.courses(&query).await,
            Route::Menu => return self.menu(keyword),
        };

        result.unwrap_or_else(|err| {
            log::warn!("Query '{} {}' failed: {}", keyword, argument, err);
            self.menu(keyword)
        })
    }

    /// Parse raw launcher input and handle it
    pub async fn dispatch_raw(&self, raw: &str) -> Vec<DisplayItem> {
        let query = KeywordQuery::parse(raw);
        self.dispatch(&query.keyword, &query.argument).await
    }
}
