//! Typed views over Moodle web-service responses
//!
//! Every optional field defaults instead of failing so that a sparse event or
//! course never aborts a whole listing.

use serde::{Deserialize, Deserializer, de::IgnoredAny};
use serde_json::Value;

use crate::error::{ApiError, Result};

/// Server-side failure payload (`{"exception": ..., "message": ...}`)
#[derive(Debug, Clone, Deserialize)]
pub struct ServiceException {
    pub exception: String,

    #[serde(default)]
    pub errorcode: Option<String>,

    #[serde(default)]
    pub message: String,
}

/// Either a domain payload or a server exception
#[derive(Debug, Clone)]
pub enum ServiceResponse<T> {
    Exception(ServiceException),
    Ok(T),
}

impl<T: serde::de::DeserializeOwned> ServiceResponse<T> {
    /// Parse a raw JSON body, checking for an exception payload first
    pub fn from_value(value: Value) -> Result<Self> {
        if value.get("exception").is_some() {
            let exception: ServiceException = serde_json::from_value(value).map_err(|e| {
                ApiError::InvalidResponse(format!("Malformed exception payload: {}", e))
            })?;
            return Ok(ServiceResponse::Exception(exception));
        }

        let data: T = serde_json::from_value(value).map_err(|e| {
            ApiError::InvalidResponse(format!("Unexpected response shape: {}", e))
        })?;
        Ok(ServiceResponse::Ok(data))
    }
}

/// `core_calendar_get_calendar_upcoming_view` response
#[derive(Debug, Clone, Deserialize)]
pub struct UpcomingView {
    #[serde(default)]
    pub events: Vec<CalendarEvent>,
}

/// Calendar event
#[derive(Debug, Clone, Deserialize)]
pub struct CalendarEvent {
    #[serde(default)]
    pub name: Option<String>,

    /// Start time as Unix epoch seconds
    pub timestart: i64,

    #[serde(default)]
    pub course: Option<EventCourse>,

    #[serde(default)]
    pub url: Option<String>,

    /// Moodle only attaches an `action` while something is still to be done
    #[serde(rename = "action", default, deserialize_with = "field_present")]
    pub has_action: bool,
}

/// Course reference embedded in an event
#[derive(Debug, Clone, Deserialize)]
pub struct EventCourse {
    #[serde(default)]
    pub id: Option<i64>,
}

impl CalendarEvent {
    pub fn is_done(&self) -> bool {
        !self.has_action
    }

    pub fn course_id(&self) -> String {
        self.course
            .as_ref()
            .and_then(|c| c.id)
            .map(|id| id.to_string())
            .unwrap_or_default()
    }

    pub fn url(&self) -> &str {
        self.url.as_deref().unwrap_or_default()
    }

    /// Event name with a single trailing period removed
    pub fn display_name(&self) -> &str {
        let name = self.name.as_deref().unwrap_or_default();
        name.strip_suffix('.').unwrap_or(name)
    }
}

/// `core_course_get_enrolled_courses_by_timeline_classification` response
#[derive(Debug, Clone, Deserialize)]
pub struct EnrolledCourses {
    #[serde(default)]
    pub courses: Vec<Course>,
}

/// Enrolled course
#[derive(Debug, Clone, Deserialize)]
pub struct Course {
    #[serde(default)]
    pub fullname: String,

    #[serde(default)]
    pub coursecategory: String,

    #[serde(default)]
    pub isfavourite: bool,

    #[serde(default)]
    pub viewurl: String,
}

/// True whenever the field exists, whatever its value (including null)
fn field_present<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> std::result::Result<bool, D::Error> {
    IgnoredAny::deserialize(deserializer)?;
    Ok(true)
}
