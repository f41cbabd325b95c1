use async_trait::async_trait;
use bookreview_e2e::browser::{BrowserContext, BrowserError};
use bookreview_e2e::infrastructure::database::Database;
use bookreview_e2e::infrastructure::session::{SessionClient, SessionCookie};
use bookreview_e2e::{HarnessConfig, Store};
use rstest::fixture;
use url::Url;

/// A private in-memory database with the application's tables.
#[fixture]
pub async fn database() -> Database {
    Database::in_memory().await.unwrap()
}

#[fixture]
pub async fn store(#[future(awt)] database: Database) -> Store {
    Store::from_database(&database)
}

pub fn offline_config() -> HarnessConfig {
    HarnessConfig {
        base_url: Url::parse("http://localhost:3000").unwrap(),
        database_url: "sqlite::memory:".to_string(),
        webdriver_url: "http://localhost:4444".to_string(),
        headless: true,
        wait_timeout_ms: 250,
    }
}

pub fn offline_sessions() -> SessionClient {
    SessionClient::new(offline_config().base_url)
}

/// Browser stand-in for helpers whose store-only operations never touch a page.
pub struct NoBrowser;

#[async_trait]
impl BrowserContext for NoBrowser {
    async fn clear_cookies(&self) -> Result<(), BrowserError> {
        Err(BrowserError::WebDriver("no browser attached".to_string()))
    }

    async fn install_cookies(&self, _cookies: &[SessionCookie]) -> Result<(), BrowserError> {
        Err(BrowserError::WebDriver("no browser attached".to_string()))
    }

    async fn goto(&self, _path: &str) -> Result<(), BrowserError> {
        Err(BrowserError::WebDriver("no browser attached".to_string()))
    }
}
