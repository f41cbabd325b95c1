use serde::Deserialize;
use serde_json::{Value, json};

use super::wait::poll;
use super::{BrowserError, BrowserSession};

/// Wraps `window.fetch` so matching calls are recorded and, when asked, answered
/// with an empty 200 without reaching the server. Idempotent per page load.
const INSTALL_PROBE: &str = r"
const [fragments, method, fulfill] = arguments;
const state = window.__bookreviewProbe || (window.__bookreviewProbe = { probes: [] });
const probe = { fragments, method, fulfill, calls: [] };
state.probes.push(probe);
if (!state.wrapped) {
  const original = window.fetch.bind(window);
  window.fetch = async (input, init) => {
    const url = typeof input === 'string' ? input : (input.url || String(input));
    const verb = ((init && init.method) || (input && input.method) || 'GET').toUpperCase();
    const matching = state.probes.filter(p =>
      p.fragments.every(f => url.includes(f)) && (!p.method || p.method === verb));
    if (matching.some(p => p.fulfill)) {
      matching.forEach(p => p.calls.push({ url, method: verb, status: 200 }));
      return new Response(null, { status: 200 });
    }
    const response = await original(input, init);
    matching.forEach(p => p.calls.push({ url, method: verb, status: response.status }));
    return response;
  };
  state.wrapped = true;
}
return state.probes.length - 1;
";

const READ_PROBE: &str = r"
const state = window.__bookreviewProbe;
if (!state || !state.probes[arguments[0]]) { return null; }
return state.probes[arguments[0]].calls;
";

/// A fetch call observed by a [`NetworkProbe`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ObservedCall {
    pub url: String,
    pub method: String,
    pub status: u16,
}

impl ObservedCall {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Matches requests whose URL contains every fragment, optionally for one method.
#[derive(Debug, Clone)]
pub struct RequestMatcher {
    fragments: Vec<String>,
    method: Option<String>,
}

impl RequestMatcher {
    pub fn url_containing(fragments: &[&str]) -> Self {
        Self {
            fragments: fragments.iter().map(ToString::to_string).collect(),
            method: None,
        }
    }

    pub fn with_method(mut self, method: &str) -> Self {
        self.method = Some(method.to_ascii_uppercase());
        self
    }
}

/// Recorder for fetch calls made by the current page.
///
/// Installed after navigation and before the interaction under test, so nothing
/// the interaction triggers can slip past it. A reload discards it.
pub struct NetworkProbe<'a> {
    session: &'a BrowserSession,
    index: u64,
}

impl<'a> NetworkProbe<'a> {
    pub async fn observe(
        session: &'a BrowserSession,
        matcher: &RequestMatcher,
    ) -> Result<Self, BrowserError> {
        Self::install(session, matcher, false).await
    }

    /// Like [`observe`](Self::observe), but matching calls never leave the page.
    pub async fn fulfill(
        session: &'a BrowserSession,
        matcher: &RequestMatcher,
    ) -> Result<Self, BrowserError> {
        Self::install(session, matcher, true).await
    }

    async fn install(
        session: &'a BrowserSession,
        matcher: &RequestMatcher,
        fulfill: bool,
    ) -> Result<Self, BrowserError> {
        let args = vec![
            json!(matcher.fragments),
            json!(matcher.method),
            json!(fulfill),
        ];
        let ret = session.driver.execute(INSTALL_PROBE, args).await?;
        let index = ret
            .json()
            .as_u64()
            .ok_or_else(|| BrowserError::Script(ret.json().to_string()))?;
        Ok(Self { session, index })
    }

    pub async fn calls(&self) -> Result<Vec<ObservedCall>, BrowserError> {
        let ret = self
            .session
            .driver
            .execute(READ_PROBE, vec![json!(self.index)])
            .await?;
        decode_calls(ret.json())
    }

    /// Waits for the first matching response to complete.
    pub async fn wait_for_response(&self) -> Result<ObservedCall, BrowserError> {
        poll(self.session.timeout(), "matching network response", move || async move {
            Ok(self.calls().await?.into_iter().next())
        })
        .await
    }
}

fn decode_calls(value: &Value) -> Result<Vec<ObservedCall>, BrowserError> {
    if value.is_null() {
        return Err(BrowserError::Script(
            "network probe is gone; the page was reloaded".to_string(),
        ));
    }
    serde_json::from_value(value.clone()).map_err(|err| BrowserError::Script(err.to_string()))
}
