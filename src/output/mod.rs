//! Output formatting for rendered result lists

use colored::Colorize;

use crate::cli::OutputFormat;
use crate::error::Result;
use crate::models::{Action, DisplayItem, Icon};

pub mod json;
pub mod table;

/// Render items in the requested format
pub fn format_items(items: &[DisplayItem], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Pretty => Ok(format_pretty(items)),
        OutputFormat::Table => Ok(table::format_table(items)),
        OutputFormat::Json => Ok(json::format_json(items)?),
    }
}

/// Format and print items to stdout
pub fn print_items(items: &[DisplayItem], format: OutputFormat) -> Result<()> {
    let output = format_items(items, format)?;
    println!("{}", output);
    Ok(())
}

/// One line per item with a status marker, the description and target indented below
fn format_pretty(items: &[DisplayItem]) -> String {
    items
        .iter()
        .map(|item| {
            let marker = match item.icon {
                Icon::Done => "✓".green(),
                Icon::NotDone => "✗".red(),
                Icon::App => "•".cyan(),
            };
            let title = if item.highlightable {
                item.title.bold()
            } else {
                item.title.dimmed()
            };

            let mut line = format!("{} {}", marker, title);
            if !item.description.is_empty() {
                line.push_str(&format!("\n    {}", item.description.dimmed()));
            }
            match &item.action {
                Action::OpenUrl(url) if !url.is_empty() => {
                    line.push_str(&format!("\n    {}", url.cyan()));
                }
                Action::SetQuery(query) => {
                    line.push_str(&format!("\n    → {}", query.trim_end().cyan()));
                }
                _ => {}
            }
            line
        })
        .collect::<Vec<_>>()
        .join("\n")
}
