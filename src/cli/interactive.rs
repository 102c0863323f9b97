//! Interactive launcher loop
//!
//! Stands in for a launcher host: each submitted line is one query event,
//! results are offered as a selection list and the chosen item's action is
//! carried out. The response cache lives as long as the loop.

use colored::Colorize;
use dialoguer::{Input, Select, theme::ColorfulTheme};

use crate::cli::{CommandContext, GlobalOptions};
use crate::error::Result;
use crate::models::{Action, DisplayItem};

/// Run the interactive loop until an empty query is submitted
pub async fn run(opts: &GlobalOptions) -> Result<()> {
    let mut ctx = CommandContext::new(opts)?;
    let theme = ColorfulTheme::default();

    println!(
        "{}",
        "Type a query (empty line to quit). Esc in the result list goes back.".dimmed()
    );

    let mut initial = format!("{} ", ctx.launcher.preferences().keyword);
    loop {
        let raw: String = Input::with_theme(&theme)
            .with_prompt("Query")
            .with_initial_text(initial.clone())
            .allow_empty(true)
            .interact_text()?;

        if raw.trim().is_empty() {
            return Ok(());
        }

        ctx.reload();
        let items = ctx.launcher.dispatch_raw(&raw).await;
        let titles: Vec<String> = items.iter().map(item_label).collect();

        let selection = Select::with_theme(&theme)
            .items(&titles)
            .default(0)
            .interact_opt()?;

        initial = match selection.map(|idx| &items[idx].action) {
            Some(Action::SetQuery(query)) => query.clone(),
            Some(Action::OpenUrl(url)) => {
                println!("{}", url);
                raw
            }
            Some(Action::DoNothing) | None => raw,
        };
    }
}

fn item_label(item: &DisplayItem) -> String {
    if item.description.is_empty() {
        item.title.clone()
    } else {
        format!("{}  {}", item.title, item.description.dimmed())
    }
}
