//! Status command implementation

use colored::Colorize;

use crate::cli::GlobalOptions;
use crate::cli::context::load_config;
use crate::config::Config;
use crate::error::Result;

/// Run the status command to display configuration status
pub fn run(opts: &GlobalOptions) -> Result<()> {
    println!("{}\n", "moodle-launcher Configuration Status".bold());

    let config_path = Config::resolve_path(opts.config_ref())?;

    match load_config(opts) {
        Ok(config) => {
            if config_path.exists() {
                println!("Config file: {}", config_path.display().to_string().cyan());
            } else {
                println!(
                    "Config file: {} {}",
                    config_path.display().to_string().cyan(),
                    "(not present, using overrides)".dimmed()
                );
            }
            println!();

            match config.site {
                Some(ref site) => println!("{} Site: {}", "✓".green(), site),
                None => {
                    println!("{} Site not configured", "✗".red());
                    println!("  → Run 'moodle-launcher init' to configure");
                }
            }

            if config.token.is_some() {
                println!("{} Web service token configured", "✓".green());
            } else {
                println!("{} Web service token not configured", "✗".red());
                println!("  → Run 'moodle-launcher init' to configure");
            }

            if let Err(err) = config.credentials() {
                println!("{} {}", "⚠".yellow(), err);
            }

            let prefs = &config.preferences;
            println!();
            println!("Keyword: {}", prefs.keyword.bold());
            println!("Events shortcut: {}", prefs.kw_events.bold());
            println!("Courses shortcut: {}", prefs.kw_courses.bold());
            println!("Course status: {}", prefs.course_status);
            println!("Courses shown: {}", prefs.courses_type);
            println!();
        }
        Err(err) => {
            println!("{} {}", "✗".red(), err);
            println!();
            println!(
                "Run {} to create a configuration file.",
                "moodle-launcher init".cyan()
            );
            println!();
        }
    }

    Ok(())
}
