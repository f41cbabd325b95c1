use std::time::Duration;

use async_trait::async_trait;
use thirtyfour::Cookie;
use thirtyfour::prelude::*;
use url::Url;

use super::{BrowserContext, BrowserError};
use crate::HarnessConfig;
use crate::infrastructure::session::SessionCookie;

/// One WebDriver browser pointed at the application under test.
pub struct BrowserSession {
    pub driver: WebDriver,
    base_url: Url,
    timeout: Duration,
}

impl BrowserSession {
    pub async fn new(config: &HarnessConfig) -> Result<Self, BrowserError> {
        let mut caps = DesiredCapabilities::chrome();
        if config.headless {
            caps.set_headless()?;
        }
        caps.add_arg("--no-sandbox")?;
        caps.add_arg("--disable-dev-shm-usage")?;

        let driver = WebDriver::new(config.webdriver_url.as_str(), caps).await?;

        Ok(Self {
            driver,
            base_url: config.base_url.clone(),
            timeout: config.wait_timeout(),
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn url_for(&self, path: &str) -> Result<Url, BrowserError> {
        self.base_url
            .join(path)
            .map_err(|err| BrowserError::InvalidUrl(format!("{path}: {err}")))
    }

    /// Path of the current page, without query or fragment.
    pub async fn current_path(&self) -> Result<String, BrowserError> {
        Ok(self.driver.current_url().await?.path().to_string())
    }

    pub async fn reload(&self) -> Result<(), BrowserError> {
        self.driver.refresh().await?;
        Ok(())
    }

    pub async fn quit(self) {
        if let Err(err) = self.driver.quit().await {
            tracing::warn!(error = %err, "failed to quit browser session");
        }
    }

    async fn ensure_on_origin(&self) -> Result<(), BrowserError> {
        let current = self.driver.current_url().await?;
        if current.origin() != self.base_url.origin() {
            self.goto("/").await?;
        }
        Ok(())
    }
}

#[async_trait]
impl BrowserContext for BrowserSession {
    async fn clear_cookies(&self) -> Result<(), BrowserError> {
        // WebDriver scopes cookie commands to the current document's origin.
        self.ensure_on_origin().await?;
        self.driver.delete_all_cookies().await?;
        Ok(())
    }

    async fn install_cookies(&self, cookies: &[SessionCookie]) -> Result<(), BrowserError> {
        self.ensure_on_origin().await?;
        let secure = self.base_url.scheme() == "https";
        for cookie in cookies {
            let mut browser_cookie = Cookie::new(cookie.name.clone(), cookie.value.clone());
            browser_cookie.path = Some("/".to_string());
            browser_cookie.secure = Some(secure);
            self.driver.add_cookie(browser_cookie).await?;
        }
        Ok(())
    }

    async fn goto(&self, path: &str) -> Result<(), BrowserError> {
        let url = self.url_for(path)?;
        self.driver.goto(url.as_str()).await?;
        Ok(())
    }
}
