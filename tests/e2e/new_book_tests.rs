use bookreview_e2e::browser::network::{NetworkProbe, RequestMatcher};
use bookreview_e2e::browser::wait::{wait_for_path, wait_for_text};
use bookreview_e2e::browser::{BrowserContext, BrowserSession, forms};
use bookreview_e2e::fixtures::Harness;
use bookreview_e2e::ui::{messages, routes};
use rstest::rstest;

use crate::helpers::{harness, remove_user_and_books, signed_in_session};

const SUBMIT_LABELS: [&str; 2] = ["Add Book", "Saving..."];

async fn fill_and_submit(session: &BrowserSession, title: &str, description: &str) {
    forms::fill_by_label(session, "Title", title).await.unwrap();
    forms::fill_by_label(session, "Description", description)
        .await
        .unwrap();
    forms::click_by_text(session, &SUBMIT_LABELS).await.unwrap();
}

#[rstest]
#[tokio::test]
async fn empty_title_is_required(#[future(awt)] harness: Harness) {
    let (session, user) = signed_in_session(&harness).await;

    session.goto(routes::NEW_BOOK).await.unwrap();
    fill_and_submit(&session, "", "Valid description").await;

    wait_for_text(&session, messages::TITLE_REQUIRED)
        .await
        .unwrap();

    session.quit().await;
    remove_user_and_books(harness.store(), &user).await;
}

#[rstest]
#[tokio::test]
async fn title_over_100_characters_is_rejected(#[future(awt)] harness: Harness) {
    let (session, user) = signed_in_session(&harness).await;

    session.goto(routes::NEW_BOOK).await.unwrap();
    fill_and_submit(&session, &"a".repeat(101), "Valid description").await;

    wait_for_text(&session, messages::TITLE_TOO_LONG)
        .await
        .unwrap();

    session.quit().await;
    remove_user_and_books(harness.store(), &user).await;
}

#[rstest]
#[tokio::test]
async fn empty_description_is_required(#[future(awt)] harness: Harness) {
    let (session, user) = signed_in_session(&harness).await;

    session.goto(routes::NEW_BOOK).await.unwrap();
    fill_and_submit(&session, "Valid title", "").await;

    wait_for_text(&session, messages::DESCRIPTION_REQUIRED)
        .await
        .unwrap();

    session.quit().await;
    remove_user_and_books(harness.store(), &user).await;
}

#[rstest]
#[tokio::test]
async fn description_over_750_characters_is_rejected(#[future(awt)] harness: Harness) {
    let (session, user) = signed_in_session(&harness).await;

    session.goto(routes::NEW_BOOK).await.unwrap();
    fill_and_submit(&session, "Valid title", &"a".repeat(751)).await;

    wait_for_text(&session, messages::DESCRIPTION_TOO_LONG)
        .await
        .unwrap();

    session.quit().await;
    remove_user_and_books(harness.store(), &user).await;
}

#[rstest]
#[tokio::test]
async fn both_empty_fields_are_reported(#[future(awt)] harness: Harness) {
    let (session, user) = signed_in_session(&harness).await;

    session.goto(routes::NEW_BOOK).await.unwrap();
    fill_and_submit(&session, "", "").await;

    wait_for_text(&session, messages::TITLE_REQUIRED)
        .await
        .unwrap();
    wait_for_text(&session, messages::DESCRIPTION_REQUIRED)
        .await
        .unwrap();

    session.quit().await;
    remove_user_and_books(harness.store(), &user).await;
}

#[rstest]
#[tokio::test]
async fn failed_validation_sends_nothing(#[future(awt)] harness: Harness) {
    let (session, user) = signed_in_session(&harness).await;

    session.goto(routes::NEW_BOOK).await.unwrap();
    let probe = NetworkProbe::fulfill(
        &session,
        &RequestMatcher::url_containing(&[routes::BOOKS_API]).with_method("POST"),
    )
    .await
    .unwrap();
    fill_and_submit(&session, "", "").await;

    // Messages first, so a request would have been issued by now
    wait_for_text(&session, messages::TITLE_REQUIRED)
        .await
        .unwrap();
    wait_for_text(&session, messages::DESCRIPTION_REQUIRED)
        .await
        .unwrap();
    assert!(probe.calls().await.unwrap().is_empty());

    session.quit().await;
    remove_user_and_books(harness.store(), &user).await;
}

#[rstest]
#[tokio::test]
async fn valid_book_redirects_to_the_listing(#[future(awt)] harness: Harness) {
    let (session, user) = signed_in_session(&harness).await;

    session.goto(routes::NEW_BOOK).await.unwrap();
    fill_and_submit(
        &session,
        "Valid Title",
        "Valid description that meets the minimum requirements",
    )
    .await;

    wait_for_path(&session, routes::BOOKS).await.unwrap();
    let owned = harness.store().books.list_for_owner(&user.id).await.unwrap();
    assert_eq!(owned.len(), 1);
    assert_eq!(owned[0].title, "Valid Title");

    session.quit().await;
    remove_user_and_books(harness.store(), &user).await;
}

#[rstest]
#[tokio::test]
async fn title_of_exactly_100_characters_is_accepted(#[future(awt)] harness: Harness) {
    let (session, user) = signed_in_session(&harness).await;
    let title = "a".repeat(100);

    session.goto(routes::NEW_BOOK).await.unwrap();
    fill_and_submit(&session, &title, "Valid description").await;

    wait_for_path(&session, routes::BOOKS).await.unwrap();
    let owned = harness.store().books.list_for_owner(&user.id).await.unwrap();
    assert_eq!(owned.len(), 1);
    assert_eq!(owned[0].title, title);

    session.quit().await;
    remove_user_and_books(harness.store(), &user).await;
}
