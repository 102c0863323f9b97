//! Command execution context
//!
//! Loads configuration, applies overrides and builds the launcher with its
//! cached client so every command starts from the same state.

use crate::cache::CachedMoodleClient;
use crate::cli::{GlobalOptions, OutputFormat};
use crate::client::MoodleClient;
use crate::config::Config;
use crate::error::{ConfigError, Error, Result};
use crate::launcher::Launcher;

/// Context for command execution containing config, launcher, and runtime options.
pub struct CommandContext {
    /// Loaded configuration with overrides applied
    pub config: Config,
    /// Launcher backed by the caching Moodle client
    pub launcher: Launcher<CachedMoodleClient<MoodleClient>>,
    /// Output format preference
    pub format: OutputFormat,
    opts: GlobalOptions,
}

impl CommandContext {
    /// Create a new command context.
    ///
    /// # Errors
    /// Returns error if config cannot be loaded or site/token are missing.
    pub fn new(opts: &GlobalOptions) -> Result<Self> {
        let config = load_config(opts)?;

        let client = CachedMoodleClient::new(MoodleClient::new()?, !opts.no_cache);
        let launcher = Launcher::new(client, &config)?;

        Ok(Self {
            config,
            launcher,
            format: opts.format,
            opts: opts.clone(),
        })
    }

    /// Re-read the config file and hand any changes to the launcher.
    ///
    /// A broken or missing file keeps the current preferences.
    pub fn reload(&mut self) {
        let config = match load_config(&self.opts) {
            Ok(config) => config,
            Err(err) => {
                log::warn!("Keeping current preferences: {}", err);
                return;
            }
        };

        match self.launcher.update_preferences(&config) {
            Ok(()) => self.config = config,
            Err(err) => log::warn!("Keeping current preferences: {}", err),
        }
    }
}

/// Load the config file, tolerating a missing file when both credentials
/// are supplied as overrides
pub fn load_config(opts: &GlobalOptions) -> Result<Config> {
    let config = match Config::load_at(opts.config_ref()) {
        Ok(config) => config,
        Err(Error::Config(ConfigError::NotFound)) if opts.has_credential_overrides() => {
            Config::default()
        }
        Err(err) => return Err(err),
    };

    Ok(config.with_overrides(opts.site.as_deref(), opts.token.as_deref()))
}
