//! moodle-launcher - Moodle upcoming events and enrolled courses for desktop launchers

use clap::{CommandFactory, Parser};

mod cache;
mod cli;
mod client;
mod config;
mod error;
mod launcher;
mod models;
mod output;

use cli::{Cli, Commands, GlobalOptions};
use error::Result;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_logging(cli.debug);

    if let Err(err) = run(cli).await {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

fn init_logging(debug: bool) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if debug {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.format_timestamp(None).init();
}

async fn run(cli: Cli) -> Result<()> {
    let opts = GlobalOptions::from_cli(&cli);

    match cli.command {
        Commands::Init => cli::init::run(&opts).await,
        Commands::Status => cli::status::run(&opts),
        Commands::Version => {
            println!("moodle-launcher version {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        Commands::Query { words } => cli::query::run(&opts, &words).await,
        Commands::Events { query } => cli::query::events(&opts, &query).await,
        Commands::Courses { query } => cli::query::courses(&opts, &query).await,
        Commands::Interactive => cli::interactive::run(&opts).await,
        Commands::Completion { shell } => {
            clap_complete::generate(
                shell,
                &mut Cli::command(),
                "moodle-launcher",
                &mut std::io::stdout(),
            );
            Ok(())
        }
    }
}
