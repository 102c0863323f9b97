//! Moodle web-service client

use async_trait::async_trait;
use serde_json::Value;

use crate::config::Credentials;
use crate::error::Result;

#[cfg(test)]
pub mod mock;
pub mod models;
pub mod moodle;

#[cfg(test)]
pub use mock::MockMoodleClient;
pub use moodle::MoodleClient;

/// Calendar function listing the user's upcoming events
pub const FN_UPCOMING_EVENTS: &str = "core_calendar_get_calendar_upcoming_view";

/// Course function listing enrolled courses for a timeline classification
pub const FN_ENROLLED_COURSES: &str = "core_course_get_enrolled_courses_by_timeline_classification";

/// One web-service invocation.
///
/// Identity for caching is the full combination of every field; extra
/// parameters are kept sorted by name so insertion order never matters.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ServiceCall {
    pub function: String,
    pub token: String,
    pub site: String,
    pub params: Vec<(String, String)>,
}

impl ServiceCall {
    /// Create a call with no extra parameters
    pub fn new(function: &str, credentials: &Credentials) -> Self {
        Self {
            function: function.to_string(),
            token: credentials.token.clone(),
            site: credentials.site.clone(),
            params: Vec::new(),
        }
    }

    /// Add a named extra parameter
    pub fn param(mut self, name: &str, value: &str) -> Self {
        self.params.retain(|(k, _)| k != name);
        self.params.push((name.to_string(), value.to_string()));
        self.params.sort();
        self
    }
}

/// Moodle web-service trait
#[async_trait]
pub trait MoodleApi: Send + Sync {
    /// Invoke a web-service function and return the parsed JSON body verbatim.
    ///
    /// Server-side failures arrive as a normal JSON value carrying
    /// `exception` and `message`; only transport and decoding failures are
    /// returned as errors.
    async fn call(&self, call: &ServiceCall) -> Result<Value>;
}
