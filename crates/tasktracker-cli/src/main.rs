use clap::Parser;
use owo_colors::{OwoColorize, Style};
use tasktracker_core::db;
use tasktracker_core::error::CoreError;
use tasktracker_core::models::TaskStatus;
use tasktracker_core::repository::SqliteRepository;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;
mod config;
mod views;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // WARN unless RUST_LOG says otherwise; RUST_LOG=debug shows every statement
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = cli::Cli::parse();

    if let Err(e) = run(cli).await {
        handle_error(e);
        std::process::exit(1);
    }
}

async fn run(cli: cli::Cli) -> anyhow::Result<()> {
    let config = config::Config::new()?.with_database_override(cli.database);
    tracing::debug!(?config, "configuration loaded");

    let db_pool = db::establish_connection(&config.store_config()).await?;
    let repository = SqliteRepository::new(db_pool);

    let result = match cli.command {
        cli::Commands::Add(command) => commands::add::add_task(&repository, command).await,
        cli::Commands::Update(command) => {
            commands::update::update_task(&repository, command).await
        }
        cli::Commands::Delete(command) => {
            commands::delete::delete_task(&repository, command).await
        }
        cli::Commands::MarkInProgress(command) => {
            commands::mark::mark_task(&repository, command, TaskStatus::InProgress).await
        }
        cli::Commands::MarkDone(command) => {
            commands::mark::mark_task(&repository, command, TaskStatus::Done).await
        }
        cli::Commands::List(command) => commands::list::list_tasks(&repository, command).await,
    };

    repository.close().await;
    result
}

fn handle_error(err: anyhow::Error) {
    let error_style = Style::new().red().bold();

    match err.downcast_ref::<CoreError>() {
        Some(CoreError::SchemaRead { path, source }) => {
            eprintln!(
                "{} Could not read schema script {}: {}",
                "Error:".style(error_style),
                path.display().yellow(),
                source
            );
        }
        Some(CoreError::InvalidInput(s)) => {
            eprintln!("{} Invalid input: {}", "Error:".style(error_style), s);
        }
        _ => eprintln!("{} {}", "Error:".style(error_style), err),
    }
}
