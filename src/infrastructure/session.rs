use std::fmt;
use std::sync::Arc;

use reqwest::cookie::{CookieStore, Jar};
use reqwest::{Client, StatusCode, Url, header, redirect};
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const CSRF_PATH: &str = "api/auth/csrf";
pub const CREDENTIALS_CALLBACK_PATH: &str = "api/auth/callback/credentials";
pub const SESSION_PATH: &str = "api/auth/session";

/// Where the application sends the browser after a successful sign-in.
pub const DEFAULT_CALLBACK_URL: &str = "/";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandshakeStep {
    CsrfToken,
    CredentialLogin,
    SessionCheck,
}

impl fmt::Display for HandshakeStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            HandshakeStep::CsrfToken => "anti-forgery token",
            HandshakeStep::CredentialLogin => "credential login",
            HandshakeStep::SessionCheck => "session check",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Error)]
pub enum HandshakeError {
    #[error("failed to configure HTTP client: {0}")]
    Client(#[source] reqwest::Error),
    #[error("invalid auth endpoint {path}: {source}")]
    Endpoint {
        path: String,
        #[source]
        source: url::ParseError,
    },
    #[error("{step} request failed: {source}")]
    Transport {
        step: HandshakeStep,
        #[source]
        source: reqwest::Error,
    },
    #[error("{step} returned {status}")]
    Status {
        step: HandshakeStep,
        status: StatusCode,
    },
    #[error("credential login was rejected (redirected to {location})")]
    Rejected { location: String },
    #[error("session endpoint reported no signed-in user")]
    NotAuthenticated,
}

#[derive(Debug, Clone)]
pub struct Credentials {
    pub email: String,
    pub password: String,
    pub callback_url: String,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
            callback_url: DEFAULT_CALLBACK_URL.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

/// Body of the session endpoint; an empty object when nobody is signed in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionState {
    #[serde(default)]
    pub user: Option<SessionUser>,
    #[serde(default)]
    pub expires: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionCookie {
    pub name: String,
    pub value: String,
}

impl SessionCookie {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// Cookies and confirmed session produced by a completed handshake.
#[derive(Debug, Clone)]
pub struct EstablishedSession {
    pub session: SessionState,
    pub cookies: Vec<SessionCookie>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct CsrfResponse {
    csrf_token: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CredentialForm<'a> {
    csrf_token: &'a str,
    email: &'a str,
    password: &'a str,
    callback_url: &'a str,
}

/// Runs the credential sign-in handshake against the application's auth endpoints.
///
/// Every call to [`SessionClient::establish`] starts from an empty cookie jar, so
/// no session state carries over between logins.
#[derive(Debug, Clone)]
pub struct SessionClient {
    base_url: Url,
}

impl SessionClient {
    pub fn new(base_url: Url) -> Self {
        let mut normalized = base_url;
        if !normalized.path().ends_with('/') {
            normalized.set_path(&format!("{}/", normalized.path().trim_end_matches('/')));
        }
        Self {
            base_url: normalized,
        }
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub async fn establish(
        &self,
        credentials: &Credentials,
    ) -> Result<EstablishedSession, HandshakeError> {
        let jar = Arc::new(Jar::default());
        let http = Client::builder()
            .user_agent("bookreview-e2e/1.0")
            .cookie_provider(Arc::clone(&jar))
            .redirect(redirect::Policy::none())
            .build()
            .map_err(HandshakeError::Client)?;

        // Each step consumes state the previous one left in the jar.
        let csrf_token = self.fetch_csrf_token(&http).await?;
        self.submit_credentials(&http, &csrf_token, credentials)
            .await?;
        let session = self.fetch_session(&http).await?;

        if session.user.is_none() {
            tracing::warn!(email = %credentials.email, "session missing after credential login");
            return Err(HandshakeError::NotAuthenticated);
        }

        let cookies = jar
            .cookies(&self.base_url)
            .and_then(|value| value.to_str().ok().map(parse_cookie_header))
            .unwrap_or_default();

        tracing::info!(
            email = %credentials.email,
            cookies = cookies.len(),
            "established session"
        );

        Ok(EstablishedSession { session, cookies })
    }

    fn endpoint(&self, path: &str) -> Result<Url, HandshakeError> {
        self.base_url
            .join(path)
            .map_err(|source| HandshakeError::Endpoint {
                path: path.to_string(),
                source,
            })
    }

    async fn fetch_csrf_token(&self, http: &Client) -> Result<String, HandshakeError> {
        let step = HandshakeStep::CsrfToken;
        let response = http
            .get(self.endpoint(CSRF_PATH)?)
            .send()
            .await
            .map_err(|source| HandshakeError::Transport { step, source })?;

        if !response.status().is_success() {
            return Err(HandshakeError::Status {
                step,
                status: response.status(),
            });
        }

        let body: CsrfResponse = response
            .json()
            .await
            .map_err(|source| HandshakeError::Transport { step, source })?;

        Ok(body.csrf_token)
    }

    async fn submit_credentials(
        &self,
        http: &Client,
        csrf_token: &str,
        credentials: &Credentials,
    ) -> Result<(), HandshakeError> {
        let step = HandshakeStep::CredentialLogin;
        let form = CredentialForm {
            csrf_token,
            email: &credentials.email,
            password: &credentials.password,
            callback_url: &credentials.callback_url,
        };

        let response = http
            .post(self.endpoint(CREDENTIALS_CALLBACK_PATH)?)
            .form(&form)
            .send()
            .await
            .map_err(|source| HandshakeError::Transport { step, source })?;

        let status = response.status();
        if status.is_redirection() {
            let location = response
                .headers()
                .get(header::LOCATION)
                .and_then(|value| value.to_str().ok())
                .unwrap_or_default();
            if location.contains("error=") {
                tracing::warn!(email = %credentials.email, location, "credential login rejected");
                return Err(HandshakeError::Rejected {
                    location: location.to_string(),
                });
            }
            return Ok(());
        }

        if status.is_success() {
            Ok(())
        } else {
            Err(HandshakeError::Status { step, status })
        }
    }

    async fn fetch_session(&self, http: &Client) -> Result<SessionState, HandshakeError> {
        let step = HandshakeStep::SessionCheck;
        let response = http
            .get(self.endpoint(SESSION_PATH)?)
            .send()
            .await
            .map_err(|source| HandshakeError::Transport { step, source })?;

        if !response.status().is_success() {
            return Err(HandshakeError::Status {
                step,
                status: response.status(),
            });
        }

        response
            .json()
            .await
            .map_err(|source| HandshakeError::Transport { step, source })
    }
}

/// Splits a `Cookie` request header (`a=1; b=2`) into name/value pairs.
pub fn parse_cookie_header(header: &str) -> Vec<SessionCookie> {
    header
        .split(';')
        .filter_map(|pair| {
            let (name, value) = pair.trim().split_once('=')?;
            let name = name.trim();
            if name.is_empty() {
                return None;
            }
            Some(SessionCookie::new(name, value.trim()))
        })
        .collect()
}
