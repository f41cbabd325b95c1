use thiserror::Error;

use crate::Store;
use crate::browser::{BrowserContext, BrowserError};
use crate::builders::{BuilderError, CreatedUser, UserBuilder};
use crate::infrastructure::session::{
    Credentials, HandshakeError, SessionClient, SessionState,
};
use crate::ui::routes;

#[derive(Debug, Error)]
pub enum AuthError {
    #[error(transparent)]
    Browser(#[from] BrowserError),
    #[error(transparent)]
    Handshake(#[from] HandshakeError),
    #[error(transparent)]
    Builder(#[from] BuilderError),
}

/// Signs a browser context in through the application's credential flow.
///
/// The steps run strictly in order: clear the browser's cookies, fetch an
/// anti-forgery token, post the credentials with it, confirm the session,
/// then hand the session cookies to the browser and open the home page.
pub struct AuthHelper<'a, B: ?Sized> {
    browser: &'a B,
    sessions: SessionClient,
    store: Store,
}

impl<'a, B> AuthHelper<'a, B>
where
    B: BrowserContext + ?Sized,
{
    pub fn new(browser: &'a B, sessions: SessionClient, store: Store) -> Self {
        Self {
            browser,
            sessions,
            store,
        }
    }

    pub async fn login_as(&self, user: &CreatedUser) -> Result<SessionState, AuthError> {
        self.browser.clear_cookies().await?;

        let credentials = Credentials::new(&user.email, &user.password);
        let established = self.sessions.establish(&credentials).await?;

        self.browser.install_cookies(&established.cookies).await?;
        self.browser.goto(routes::HOME).await?;

        Ok(established.session)
    }

    /// Persists the user described by `builder`, then signs in as them.
    pub async fn login_user(&self, builder: UserBuilder) -> Result<CreatedUser, AuthError> {
        let user = builder.create(&self.store).await?;
        self.login_as(&user).await?;
        Ok(user)
    }

    pub async fn login_new_user(&self) -> Result<CreatedUser, AuthError> {
        self.login_user(UserBuilder::a_user()).await
    }
}
