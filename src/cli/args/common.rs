//! Common CLI types shared across commands

/// Output format options
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Pretty format - one colored entry per item (default)
    #[default]
    Pretty,
    /// Table format - one row per item
    Table,
    /// JSON format - structured for launcher hosts and scripts
    Json,
}
