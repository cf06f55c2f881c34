use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use trivia_api::config::Settings;
use trivia_api::server::app::run_server;
use trivia_api::telemetry::init_tracing;
use trivia_api::{db, transfer};

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Cli {
    #[clap(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run migrations and serve the API
    Serve,
    /// Apply database migrations
    Migrate,
    /// Import categories.csv and questions.csv from a directory
    Import { path: PathBuf },
    /// Export categories.csv and questions.csv to a directory
    Export { path: PathBuf },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let settings = Settings::load().context("Invalid configuration")?;
    let pool = db::establish_connection(settings.database_url())
        .await
        .context("Cannot connect to DB")?;

    tracing::info!("Running db migrations...");
    db::run_migrations(&pool).await?;

    match cli.command.unwrap_or(Commands::Serve) {
        Commands::Serve => run_server(pool, &settings.address()).await?,
        Commands::Migrate => {}
        Commands::Import { path } => transfer::import_data(&pool, &path)
            .await
            .context("Cannot import")?,
        Commands::Export { path } => transfer::export_data(&pool, &path)
            .await
            .context("Cannot export")?,
    };
    Ok(())
}
