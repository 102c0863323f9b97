//! Table output formatting

use tabled::{
    Table,
    settings::{Alignment, Modify, Style, object::Rows},
};

use crate::models::DisplayItem;

/// Format items as a rounded table
pub fn format_table(items: &[DisplayItem]) -> String {
    if items.is_empty() {
        return "No results found.".to_string();
    }

    let mut table = Table::new(items);
    table
        .with(Style::rounded())
        .with(Modify::new(Rows::first()).with(Alignment::center()));

    table.to_string()
}
