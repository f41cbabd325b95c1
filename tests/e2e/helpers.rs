use bookreview_e2e::browser::BrowserSession;
use bookreview_e2e::builders::{CreatedUser, UserBuilder};
use bookreview_e2e::fixtures::Harness;
use bookreview_e2e::helpers::ScenarioHelper;
use bookreview_e2e::{HarnessConfig, Store};
use rstest::fixture;

/// Connects to the running application's database, configured from the environment.
#[fixture]
pub async fn harness() -> Harness {
    let config = HarnessConfig::from_env().unwrap();
    Harness::connect(config).await.unwrap()
}

pub fn scenario<'a>(
    harness: &Harness,
    session: &'a BrowserSession,
) -> ScenarioHelper<'a, BrowserSession> {
    ScenarioHelper::new(session, harness.sessions(), harness.store().clone())
}

/// Opens a browser already signed in as a freshly created user.
pub async fn signed_in_session(harness: &Harness) -> (BrowserSession, CreatedUser) {
    let session = harness.browser().await.unwrap();
    let user = scenario(harness, &session)
        .create_and_login_user(UserBuilder::a_user())
        .await
        .unwrap();
    (session, user)
}

/// Deletes books the user created through the UI, then the user.
pub async fn remove_user_and_books(store: &Store, user: &CreatedUser) {
    for book in store.books.list_for_owner(&user.id).await.unwrap() {
        store.books.delete(&book.id).await.unwrap();
    }
    UserBuilder::delete(store, &user.email).await.unwrap();
}
