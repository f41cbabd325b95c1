use crate::browser::wait::{wait_for_path, wait_for_text};
use crate::browser::{BrowserContext, BrowserError, BrowserSession, forms};
use crate::builders::TestUser;
use crate::ui::{messages, routes};

/// Drives the registration page for a browser it owns.
pub struct RegistrationHelper {
    page: BrowserSession,
}

impl RegistrationHelper {
    pub fn new(page: BrowserSession) -> Self {
        Self { page }
    }

    pub fn page(&self) -> &BrowserSession {
        &self.page
    }

    pub fn into_page(self) -> BrowserSession {
        self.page
    }

    pub async fn open(&self) -> Result<(), BrowserError> {
        self.page.goto(routes::REGISTER).await
    }

    /// Opens the registration page, fills it with the user's fields and submits,
    /// without judging the result.
    pub async fn register_new_user(&self, user: &TestUser) -> Result<(), BrowserError> {
        self.open().await?;
        self.submit_form(user).await
    }

    /// Fills and submits the form already on screen.
    pub async fn submit_form(&self, user: &TestUser) -> Result<(), BrowserError> {
        forms::fill_by_label(&self.page, "Email", &user.email).await?;
        forms::fill_by_label(&self.page, "Password", &user.password).await?;
        forms::fill_by_label(&self.page, "Name", &user.name).await?;
        forms::click_by_text(&self.page, &[messages::CREATE_ACCOUNT]).await
    }

    pub async fn expect_success_message(&self) -> Result<(), BrowserError> {
        wait_for_text(&self.page, messages::ACCOUNT_CREATED).await
    }

    pub async fn expect_message(&self, message: &str) -> Result<(), BrowserError> {
        wait_for_text(&self.page, message).await
    }

    pub async fn expect_path(&self, path: &str) -> Result<(), BrowserError> {
        wait_for_path(&self.page, path).await
    }
}
