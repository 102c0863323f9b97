//! Global CLI options shared across all commands

use crate::cli::{Cli, OutputFormat};

/// Global CLI options passed to all command handlers.
///
/// # Precedence
///
/// Site and token: CLI flag > environment variable > config file.
#[derive(Debug, Clone)]
pub struct GlobalOptions {
    /// Output format (pretty, table, json)
    pub format: OutputFormat,

    /// Custom config file path (defaults to ~/.moodle-launcher/config.yaml)
    pub config: Option<String>,

    /// Moodle site URL override
    pub site: Option<String>,

    /// Web service token override
    pub token: Option<String>,

    /// Bypass the response cache
    pub no_cache: bool,
}

impl GlobalOptions {
    /// Create GlobalOptions from a parsed CLI struct.
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            format: cli.format,
            config: cli.config.clone(),
            site: cli.site.clone(),
            token: cli.token.clone(),
            no_cache: cli.no_cache,
        }
    }

    /// Get config path as `Option<&str>`.
    pub fn config_ref(&self) -> Option<&str> {
        self.config.as_deref()
    }

    /// True when both credentials were given on the command line or env
    pub fn has_credential_overrides(&self) -> bool {
        self.site.is_some() && self.token.is_some()
    }
}
