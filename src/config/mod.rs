//! Configuration management for moodle-launcher
//!
//! Mirrors the preference set a launcher host supplies to the extension:
//! site credentials, the keywords that trigger each view, and course
//! listing options.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

use crate::error::{ConfigError, Result};

/// Application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Moodle site base URL (e.g. https://moodle.example.edu)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub site: Option<String>,

    /// Web service token generated from the user's Moodle security keys page
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,

    /// Launcher preferences
    #[serde(default)]
    pub preferences: Preferences,
}

/// Site URL and token used for every web-service call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub site: String,
    pub token: String,
}

/// Keyword and listing preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Preferences {
    /// Main keyword that opens the top-level menu
    #[serde(default = "default_keyword")]
    pub keyword: String,

    /// Shortcut keyword that jumps straight to upcoming events
    #[serde(default = "default_kw_events")]
    pub kw_events: String,

    /// Shortcut keyword that jumps straight to courses
    #[serde(default = "default_kw_courses")]
    pub kw_courses: String,

    /// Timeline classification passed to the enrolled courses query
    #[serde(default)]
    pub course_status: Classification,

    /// Whether to list all courses or only starred ones
    #[serde(default)]
    pub courses_type: CoursesMode,
}

fn default_keyword() -> String {
    "moodle".to_string()
}

fn default_kw_events() -> String {
    "me".to_string()
}

fn default_kw_courses() -> String {
    "mc".to_string()
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            keyword: default_keyword(),
            kw_events: default_kw_events(),
            kw_courses: default_kw_courses(),
            course_status: Classification::default(),
            courses_type: CoursesMode::default(),
        }
    }
}

/// Server-side course bucket for the timeline query
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Classification {
    All,
    #[default]
    #[serde(alias = "in_progress")]
    Inprogress,
    Future,
    Past,
    Favourites,
    Hidden,
    Allincludinghidden,
}

impl Classification {
    pub const ALL: [Classification; 7] = [
        Classification::Inprogress,
        Classification::Future,
        Classification::Past,
        Classification::All,
        Classification::Favourites,
        Classification::Hidden,
        Classification::Allincludinghidden,
    ];

    /// Value sent as the `classification` parameter
    pub fn as_str(&self) -> &'static str {
        match self {
            Classification::All => "all",
            Classification::Inprogress => "inprogress",
            Classification::Future => "future",
            Classification::Past => "past",
            Classification::Favourites => "favourites",
            Classification::Hidden => "hidden",
            Classification::Allincludinghidden => "allincludinghidden",
        }
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Courses display mode
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CoursesMode {
    #[default]
    #[serde(alias = "All")]
    All,
    #[serde(alias = "Starred")]
    Starred,
}

impl fmt::Display for CoursesMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoursesMode::All => f.write_str("all"),
            CoursesMode::Starred => f.write_str("starred"),
        }
    }
}

impl Config {
    /// Get the default config file path
    pub fn default_path() -> Result<PathBuf> {
        let home = dirs::home_dir().ok_or(ConfigError::Invalid(
            "Could not determine home directory".to_string(),
        ))?;

        Ok(home.join(".moodle-launcher").join("config.yaml"))
    }

    /// Resolve an optional override to a concrete path
    pub fn resolve_path(path: Option<&str>) -> Result<PathBuf> {
        match path {
            Some(p) => Ok(PathBuf::from(p)),
            None => Self::default_path(),
        }
    }

    /// Load configuration from an optional override path
    pub fn load_at(path: Option<&str>) -> Result<Self> {
        Self::load_from(Self::resolve_path(path)?)
    }

    /// Load configuration from a specific path
    pub fn load_from(path: PathBuf) -> Result<Self> {
        if !path.exists() {
            return Err(ConfigError::NotFound.into());
        }

        let contents = std::fs::read_to_string(&path)?;
        let config: Config = serde_yaml::from_str(&contents).map_err(ConfigError::from)?;

        Ok(config)
    }

    /// Save configuration to an optional override path
    pub fn save_at(&self, path: Option<&str>) -> Result<()> {
        self.save_to(Self::resolve_path(path)?)
    }

    /// Save configuration to a specific path
    pub fn save_to(&self, path: PathBuf) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents =
            serde_yaml::to_string(self).map_err(|e| ConfigError::SaveError(e.to_string()))?;

        std::fs::write(&path, contents)?;

        // The token grants full web-service access, keep it private
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mut perms = std::fs::metadata(&path)?.permissions();
            perms.set_mode(0o600);
            std::fs::set_permissions(&path, perms)?;
        }

        Ok(())
    }

    /// Apply runtime overrides for the site and token
    pub fn with_overrides(mut self, site: Option<&str>, token: Option<&str>) -> Self {
        if let Some(site) = site {
            self.site = Some(site.to_string());
        }
        if let Some(token) = token {
            self.token = Some(token.to_string());
        }
        self
    }

    /// Validate that site and token are present and return them
    pub fn credentials(&self) -> Result<Credentials> {
        let site = self
            .site
            .as_deref()
            .filter(|s| !s.trim().is_empty())
            .ok_or(ConfigError::MissingSite)?;
        let token = self
            .token
            .as_deref()
            .filter(|t| !t.trim().is_empty())
            .ok_or(ConfigError::MissingToken)?;

        if !site.starts_with("http://") && !site.starts_with("https://") {
            let message = format!("site URL must start with http(s)://, got '{}'", site);
            return Err(ConfigError::Invalid(message).into());
        }

        Ok(Credentials {
            site: site.trim_end_matches('/').to_string(),
            token: token.trim().to_string(),
        })
    }
}
