use anyhow::Result;
use bookreview_e2e::Store;
use bookreview_e2e::infrastructure::database::Database;
use bookreview_e2e::infrastructure::session::SessionClient;
use bookreview_e2e::presentation::cli::{Cli, Commands, cleanup, login, seed};
use clap::Parser;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (before clap parses env vars)
    let _ = dotenvy::dotenv();

    init_tracing();

    let cli = Cli::parse();

    match cli.command {
        Commands::Seed { command } => {
            let database = Database::connect(&cli.config.database_url).await?;
            let result = seed::run(&Store::from_database(&database), command).await;
            database.close().await;
            result
        }
        Commands::Cleanup { command } => {
            let database = Database::connect(&cli.config.database_url).await?;
            let result = cleanup::run(&Store::from_database(&database), command).await;
            database.close().await;
            result
        }
        Commands::Login(command) => {
            let sessions = SessionClient::new(cli.config.base_url.clone());
            login::run(&sessions, command).await
        }
    }
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let use_json = std::env::var("RUST_LOG_FORMAT").is_ok_and(|v| v.eq_ignore_ascii_case("json"));

    let registry = tracing_subscriber::registry().with(env_filter);

    // Logs go to stderr so stdout stays pure JSON output.
    if use_json {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .compact()
                    .with_writer(std::io::stderr),
            )
            .init();
    }
}
