//! The slice of a browser the login handshake needs, plus (with the `e2e`
//! feature) a WebDriver-backed session with waits and form helpers.

#[cfg(feature = "e2e")]
pub mod forms;
#[cfg(feature = "e2e")]
pub mod network;
#[cfg(feature = "e2e")]
pub mod wait;
#[cfg(feature = "e2e")]
mod webdriver;

#[cfg(feature = "e2e")]
pub use webdriver::BrowserSession;

use async_trait::async_trait;
use thiserror::Error;

use crate::infrastructure::session::SessionCookie;

#[derive(Debug, Error)]
pub enum BrowserError {
    #[error("webdriver command failed: {0}")]
    WebDriver(String),
    #[error("timed out after {timeout_ms}ms waiting for {what}")]
    Timeout { what: String, timeout_ms: u128 },
    #[error("invalid page url {0}")]
    InvalidUrl(String),
    #[error("unexpected script result: {0}")]
    Script(String),
}

#[cfg(feature = "e2e")]
impl From<thirtyfour::error::WebDriverError> for BrowserError {
    fn from(err: thirtyfour::error::WebDriverError) -> Self {
        Self::WebDriver(err.to_string())
    }
}

/// Cookie and navigation control over one browser context.
#[async_trait]
pub trait BrowserContext: Send + Sync {
    async fn clear_cookies(&self) -> Result<(), BrowserError>;

    /// Adds cookies for the application's origin.
    async fn install_cookies(&self, cookies: &[SessionCookie]) -> Result<(), BrowserError>;

    /// Navigates to an application path such as `/` or `/books`.
    async fn goto(&self, path: &str) -> Result<(), BrowserError>;
}
