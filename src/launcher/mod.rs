//! Launcher extension core
//!
//! Turns the text typed after a keyword into a list of result items: picks a
//! view, fetches through the (cached) client, filters and formats.

pub mod courses;
pub mod dispatch;
pub mod events;
pub mod filter;

use serde::de::DeserializeOwned;

use crate::client::models::ServiceResponse;
use crate::client::{MoodleApi, ServiceCall};
use crate::config::{Config, Credentials, Preferences};
use crate::error::{ApiError, Error, Result};

pub use dispatch::KeywordQuery;

/// Extension state that outlives a single query: credentials, preferences
/// and the client (whose cache is the only other long-lived state).
pub struct Launcher<C: MoodleApi> {
    client: C,
    credentials: Credentials,
    preferences: Preferences,
}

/// Outcome of a fetch that the views know how to render
pub(crate) enum Fetched<T> {
    Data(T),
    /// Server exception or transport failure, shown as a single message item
    Failed(String),
}

impl<C: MoodleApi> Launcher<C> {
    /// Create a launcher from loaded configuration
    pub fn new(client: C, config: &Config) -> Result<Self> {
        Ok(Self {
            client,
            credentials: config.credentials()?,
            preferences: config.preferences.clone(),
        })
    }

    pub fn preferences(&self) -> &Preferences {
        &self.preferences
    }

    /// Apply a preferences update from the host.
    ///
    /// Invalid credentials leave the current ones in place.
    pub fn update_preferences(&mut self, config: &Config) -> Result<()> {
        let credentials = config.credentials()?;
        let prefs = &config.preferences;
        if credentials != self.credentials || *prefs != self.preferences {
            log::info!(
                "New preferences: site={} keywords=({}, {}, {}) courses={}/{}",
                credentials.site,
                prefs.keyword,
                prefs.kw_events,
                prefs.kw_courses,
                prefs.course_status,
                prefs.courses_type
            );
        }
        self.credentials = credentials;
        self.preferences = config.preferences.clone();
        Ok(())
    }

    /// Call the web service and classify the response.
    ///
    /// Network failures are folded into `Fetched::Failed` so the user sees
    /// the reason; malformed bodies still surface as errors.
    pub(crate) async fn fetch<T: DeserializeOwned>(
        &self,
        call: &ServiceCall,
    ) -> Result<Fetched<T>> {
        let value = match self.client.call(call).await {
            Ok(value) => value,
            Err(Error::Api(ApiError::Network(message))) => {
                log::warn!("{} failed: {}", call.function, message);
                return Ok(Fetched::Failed(message));
            }
            Err(err) => return Err(err),
        };

        match ServiceResponse::<T>::from_value(value)? {
            ServiceResponse::Ok(data) => Ok(Fetched::Data(data)),
            ServiceResponse::Exception(exception) => {
                log::warn!(
                    "{} raised {} ({}): {}",
                    call.function,
                    exception.exception,
                    exception.errorcode.as_deref().unwrap_or("-"),
                    exception.message
                );
                Ok(Fetched::Failed(exception.message))
            }
        }
    }
}
