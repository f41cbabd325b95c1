use std::time::Duration;

use clap::{ArgAction, Args, Parser};
use url::Url;

/// Where the application under test, its database, and the browser driver live.
#[derive(Debug, Clone, Args)]
pub struct HarnessConfig {
    #[arg(
        long,
        global = true,
        env = "BOOKREVIEW_BASE_URL",
        default_value = "http://localhost:3000"
    )]
    pub base_url: Url,

    #[arg(
        long,
        global = true,
        env = "BOOKREVIEW_DATABASE_URL",
        default_value = "sqlite://prisma/dev.db"
    )]
    pub database_url: String,

    #[arg(
        long,
        global = true,
        env = "BOOKREVIEW_WEBDRIVER_URL",
        default_value = "http://localhost:4444"
    )]
    pub webdriver_url: String,

    #[arg(
        long,
        global = true,
        env = "BOOKREVIEW_HEADLESS",
        default_value_t = true,
        action = ArgAction::Set
    )]
    pub headless: bool,

    #[arg(
        long,
        global = true,
        env = "BOOKREVIEW_WAIT_TIMEOUT_MS",
        default_value_t = 5000
    )]
    pub wait_timeout_ms: u64,
}

#[derive(Debug, Parser)]
struct EnvOnly {
    #[command(flatten)]
    config: HarnessConfig,
}

impl HarnessConfig {
    /// Reads the configuration from the environment (and `.env`), ignoring process arguments.
    pub fn from_env() -> Result<Self, clap::Error> {
        let _ = dotenvy::dotenv();
        EnvOnly::try_parse_from(["bookreview-e2e"]).map(|parsed| parsed.config)
    }

    pub fn wait_timeout(&self) -> Duration {
        Duration::from_millis(self.wait_timeout_ms)
    }
}
