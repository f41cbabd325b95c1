use thirtyfour::components::SelectElement;
use thirtyfour::prelude::*;

use super::wait::poll;
use super::{BrowserError, BrowserSession};

/// Quotes a string for use inside an XPath expression.
pub fn xpath_literal(value: &str) -> String {
    if !value.contains('\'') {
        return format!("'{value}'");
    }
    if !value.contains('"') {
        return format!("\"{value}\"");
    }
    let parts: Vec<String> = value.split('\'').map(|part| format!("'{part}'")).collect();
    format!("concat({})", parts.join(", \"'\", "))
}

/// Finds the form control a `<label>` with exactly this text describes.
pub async fn control_by_label(
    session: &BrowserSession,
    label: &str,
) -> Result<WebElement, BrowserError> {
    let xpath = format!("//label[normalize-space(.)={}]", xpath_literal(label));
    let xpath = xpath.as_str();
    poll(session.timeout(), &format!("label {label:?}"), move || async move {
        let labels = session.driver.find_all(By::XPath(xpath)).await?;
        let Some(label_element) = labels.into_iter().next() else {
            return Ok(None);
        };
        if let Some(target) = label_element.attr("for").await? {
            return Ok(Some(session.driver.find(By::Id(target.as_str())).await?));
        }
        let nested = label_element
            .find_all(By::Css("input, textarea, select"))
            .await?;
        Ok(nested.into_iter().next())
    })
    .await
}

pub async fn fill_by_label(
    session: &BrowserSession,
    label: &str,
    value: &str,
) -> Result<(), BrowserError> {
    let control = control_by_label(session, label).await?;
    control.clear().await?;
    if !value.is_empty() {
        control.send_keys(value).await?;
    }
    Ok(())
}

pub async fn fill_by_name(
    session: &BrowserSession,
    name: &str,
    value: &str,
) -> Result<(), BrowserError> {
    let selector = format!("input[name={}]", css_quote(name));
    let control = session.driver.find(By::Css(selector.as_str())).await?;
    control.clear().await?;
    control.send_keys(value).await?;
    Ok(())
}

pub async fn select_by_label(
    session: &BrowserSession,
    label: &str,
    value: &str,
) -> Result<(), BrowserError> {
    let control = control_by_label(session, label).await?;
    let select = SelectElement::new(&control).await?;
    select.select_by_value(value).await?;
    Ok(())
}

/// Clicks the first visible button or link whose text is one of `texts`.
pub async fn click_by_text(session: &BrowserSession, texts: &[&str]) -> Result<(), BrowserError> {
    let conditions = texts
        .iter()
        .map(|text| format!("normalize-space(.)={}", xpath_literal(text)))
        .collect::<Vec<_>>()
        .join(" or ");
    let xpath = format!("//*[self::button or self::a][{conditions}]");
    let xpath = xpath.as_str();

    let element = poll(session.timeout(), &format!("clickable {texts:?}"), move || async move {
        for element in session.driver.find_all(By::XPath(xpath)).await? {
            if element.is_displayed().await.unwrap_or(false) {
                return Ok(Some(element));
            }
        }
        Ok(None)
    })
    .await?;

    element.click().await?;
    Ok(())
}

pub async fn submit(session: &BrowserSession) -> Result<(), BrowserError> {
    session
        .driver
        .find(By::Css("button[type=\"submit\"]"))
        .await?
        .click()
        .await?;
    Ok(())
}

fn css_quote(value: &str) -> String {
    format!("\"{}\"", value.replace('\\', "\\\\").replace('"', "\\\""))
}
