//! Result items and their activation actions

use serde::{Serialize, Serializer};
use std::fmt;
use tabled::Tabled;

/// Icon asset shown next to an item
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    /// Extension icon, used for menus, courses and messages
    App,
    /// Completed event
    Done,
    /// Event still waiting on an action
    NotDone,
}

impl Icon {
    /// Asset path relative to the extension directory
    pub fn path(&self) -> &'static str {
        match self {
            Icon::App => "images/icon.png",
            Icon::Done => "images/tick.png",
            Icon::NotDone => "images/cross.png",
        }
    }
}

/// Hosts load icons by path, so that is what gets serialized
impl Serialize for Icon {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.path())
    }
}

/// What the host does when an item is activated
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum Action {
    OpenUrl(String),
    DoNothing,
    /// Replace the query text typed into the launcher
    SetQuery(String),
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::OpenUrl(url) => write!(f, "open {}", url),
            Action::DoNothing => f.write_str("-"),
            Action::SetQuery(query) => write!(f, "query '{}'", query),
        }
    }
}

/// One entry in the rendered result list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Tabled)]
pub struct DisplayItem {
    #[tabled(skip)]
    pub icon: Icon,

    #[tabled(rename = "TITLE")]
    pub title: String,

    #[tabled(rename = "DESCRIPTION")]
    pub description: String,

    #[tabled(rename = "ACTION")]
    pub action: Action,

    #[tabled(skip)]
    pub highlightable: bool,
}

impl DisplayItem {
    pub fn new(icon: Icon, title: impl Into<String>, action: Action) -> Self {
        Self {
            icon,
            title: title.into(),
            description: String::new(),
            action,
            highlightable: true,
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Single inert item carrying a server or network error message
    pub fn message(text: impl Into<String>) -> Self {
        Self::new(Icon::App, text, Action::DoNothing)
    }

    /// Placeholder shown when a listing has nothing left after filtering
    pub fn nothing_to_show() -> Self {
        Self {
            highlightable: false,
            ..Self::new(Icon::App, "Nothing to Show", Action::DoNothing)
        }
    }
}

/// Substitute the placeholder for an empty listing
pub fn or_placeholder(items: Vec<DisplayItem>) -> Vec<DisplayItem> {
    if items.is_empty() {
        vec![DisplayItem::nothing_to_show()]
    } else {
        items
    }
}
