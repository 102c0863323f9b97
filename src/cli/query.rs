//! One-shot query commands

use crate::cli::{CommandContext, GlobalOptions};
use crate::error::Result;
use crate::launcher::KeywordQuery;
use crate::output;

/// Run the query command: the first word is the keyword, the rest its argument.
///
/// With no words at all the configured main keyword is used, which shows the menu.
pub async fn run(opts: &GlobalOptions, words: &[String]) -> Result<()> {
    let ctx = CommandContext::new(opts)?;

    let query = if words.is_empty() {
        KeywordQuery {
            keyword: ctx.launcher.preferences().keyword.clone(),
            argument: String::new(),
        }
    } else {
        KeywordQuery::parse(&words.join(" "))
    };

    let items = ctx.launcher.dispatch(&query.keyword, &query.argument).await;
    output::print_items(&items, ctx.format)
}

/// Run the events view directly. Errors are reported instead of falling back
/// to the menu.
pub async fn events(opts: &GlobalOptions, words: &[String]) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let items = ctx.launcher.events(&words.join(" ")).await?;
    output::print_items(&items, ctx.format)
}

/// Run the courses view directly
pub async fn courses(opts: &GlobalOptions, words: &[String]) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let items = ctx.launcher.courses(&words.join(" ")).await?;
    output::print_items(&items, ctx.format)
}
