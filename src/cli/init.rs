//! Init command implementation

use colored::Colorize;
use dialoguer::{Input, Password, Select, theme::ColorfulTheme};

use crate::cli::GlobalOptions;
use crate::client::MoodleClient;
use crate::config::{Classification, Config, CoursesMode, Preferences};
use crate::error::Result;
use crate::launcher::Launcher;
use crate::models::Action;

/// Run the init command
///
/// Existing values are offered as defaults so init can also edit a config.
pub async fn run(opts: &GlobalOptions) -> Result<()> {
    println!("{}", "Welcome to moodle-launcher!".bold().green());
    println!("Let's set up your Moodle configuration.\n");

    let existing = Config::load_at(opts.config_ref()).unwrap_or_default();
    let theme = ColorfulTheme::default();

    let site: String = Input::with_theme(&theme)
        .with_prompt("Moodle site URL")
        .with_initial_text(existing.site.clone().unwrap_or_default())
        .validate_with(|input: &String| -> std::result::Result<(), &str> {
            if input.starts_with("http://") || input.starts_with("https://") {
                Ok(())
            } else {
                Err("URL must start with http:// or https://")
            }
        })
        .interact_text()?;

    let token: String = Password::with_theme(&theme)
        .with_prompt("Web service token (Preferences → Security keys)")
        .interact()?;

    let current_status = existing.preferences.course_status;
    let status_default = Classification::ALL
        .iter()
        .position(|c| *c == current_status)
        .unwrap_or(0);
    let status_idx = Select::with_theme(&theme)
        .with_prompt("Which courses should be listed?")
        .items(&Classification::ALL)
        .default(status_default)
        .interact()?;

    let modes = [CoursesMode::All, CoursesMode::Starred];
    let mode_default = usize::from(existing.preferences.courses_type == CoursesMode::Starred);
    let mode_idx = Select::with_theme(&theme)
        .with_prompt("Show all of them or only starred courses?")
        .items(&modes)
        .default(mode_default)
        .interact()?;

    let keyword: String = Input::with_theme(&theme)
        .with_prompt("Launcher keyword")
        .default(existing.preferences.keyword.clone())
        .interact_text()?;
    let kw_events: String = Input::with_theme(&theme)
        .with_prompt("Shortcut keyword for events")
        .default(existing.preferences.kw_events.clone())
        .interact_text()?;
    let kw_courses: String = Input::with_theme(&theme)
        .with_prompt("Shortcut keyword for courses")
        .default(existing.preferences.kw_courses.clone())
        .interact_text()?;

    let config = Config {
        site: Some(site.trim_end_matches('/').to_string()),
        token: Some(token),
        preferences: Preferences {
            keyword,
            kw_events,
            kw_courses,
            course_status: Classification::ALL[status_idx],
            courses_type: modes[mode_idx],
        },
    };

    config.save_at(opts.config_ref())?;
    let config_path = Config::resolve_path(opts.config_ref())?;
    println!(
        "\n{} Configuration saved to: {}",
        "✓".green(),
        config_path.display()
    );

    // Try the token once so a typo shows up now rather than in the launcher
    println!("\n{}", "Checking access to upcoming events...".cyan());
    let launcher = Launcher::new(MoodleClient::new()?, &config)?;
    match launcher.events("").await {
        Ok(items) => match items.as_slice() {
            [item] if item.action == Action::DoNothing && item.highlightable => {
                println!("{} {}", "⚠".yellow(), item.title);
            }
            _ => println!("{}", "✓ Token accepted!".green()),
        },
        Err(err) => println!("{} {}", "⚠".yellow(), err),
    }

    println!("\n{}", "You're all set! Try running:".bold());
    println!(
        "  {} - Show configuration status",
        "moodle-launcher status".cyan()
    );
    println!(
        "  {} - List upcoming events",
        format!("moodle-launcher query {}", config.preferences.kw_events).cyan()
    );

    Ok(())
}
