use std::future::Future;
use std::time::{Duration, Instant};

use thirtyfour::prelude::*;

use super::{BrowserError, BrowserSession};

const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Re-runs `check` until it yields a value or `timeout` passes.
pub async fn poll<T, F, Fut>(timeout: Duration, what: &str, mut check: F) -> Result<T, BrowserError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<Option<T>, BrowserError>>,
{
    let deadline = Instant::now() + timeout;
    loop {
        if let Some(value) = check().await? {
            return Ok(value);
        }
        if Instant::now() >= deadline {
            return Err(BrowserError::Timeout {
                what: what.to_string(),
                timeout_ms: timeout.as_millis(),
            });
        }
        tokio::time::sleep(POLL_INTERVAL).await;
    }
}

async fn first_displayed(driver: &WebDriver, by: By) -> Result<Option<WebElement>, BrowserError> {
    for element in driver.find_all(by).await? {
        if element.is_displayed().await.unwrap_or(false) {
            return Ok(Some(element));
        }
    }
    Ok(None)
}

pub async fn wait_for_visible(
    session: &BrowserSession,
    selector: &str,
) -> Result<WebElement, BrowserError> {
    poll(session.timeout(), selector, move || {
        first_displayed(&session.driver, By::Css(selector))
    })
    .await
}

pub async fn wait_for_hidden(session: &BrowserSession, selector: &str) -> Result<(), BrowserError> {
    poll(session.timeout(), &format!("{selector} to disappear"), move || async move {
        let shown = first_displayed(&session.driver, By::Css(selector)).await?;
        Ok(shown.is_none().then_some(()))
    })
    .await
}

pub async fn wait_for_test_id(
    session: &BrowserSession,
    test_id: &str,
) -> Result<WebElement, BrowserError> {
    wait_for_visible(session, &test_id_selector(test_id)).await
}

/// Waits until `text` is part of the page's rendered (visible) text.
pub async fn wait_for_text(session: &BrowserSession, text: &str) -> Result<(), BrowserError> {
    poll(session.timeout(), &format!("text {text:?}"), move || async move {
        Ok(visible_text(session).await?.contains(text).then_some(()))
    })
    .await
}

pub async fn wait_for_path(session: &BrowserSession, path: &str) -> Result<(), BrowserError> {
    poll(session.timeout(), &format!("url path {path}"), move || async move {
        Ok((session.current_path().await? == path).then_some(()))
    })
    .await
}

pub async fn visible_text(session: &BrowserSession) -> Result<String, BrowserError> {
    let body = session.driver.find(By::Css("body")).await?;
    Ok(body.text().await?)
}

pub fn test_id_selector(test_id: &str) -> String {
    let escaped = test_id.replace('\\', "\\\\").replace('"', "\\\"");
    format!("[data-testid=\"{escaped}\"]")
}
