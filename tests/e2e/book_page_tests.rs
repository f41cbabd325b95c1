use bookreview_e2e::browser::BrowserContext;
use bookreview_e2e::browser::wait::wait_for_test_id;
use bookreview_e2e::builders::BookBuilder;
use bookreview_e2e::fixtures::{Cleanup, Harness};
use bookreview_e2e::ui::{TestDataId, routes};
use rstest::rstest;

use crate::helpers::harness;

/// One book, created up front and read by every step.
#[rstest]
#[tokio::test]
async fn book_page_shows_the_stored_book(#[future(awt)] harness: Harness) {
    let shared = BookBuilder::a_book().create(harness.store()).await.unwrap();
    let mut cleanup = Cleanup::default();
    cleanup.book(&shared.book.id).user(&shared.owner.email);

    // Title
    let session = harness.browser().await.unwrap();
    session.goto(&routes::book(&shared.book.id)).await.unwrap();
    let title = wait_for_test_id(&session, TestDataId::BookTitle.as_str())
        .await
        .unwrap();
    assert_eq!(title.text().await.unwrap(), shared.book.title);
    session.quit().await;

    // Description
    let session = harness.browser().await.unwrap();
    session.goto(&routes::book(&shared.book.id)).await.unwrap();
    let description = wait_for_test_id(&session, TestDataId::BookDescription.as_str())
        .await
        .unwrap();
    assert_eq!(description.text().await.unwrap(), shared.book.description);
    session.quit().await;

    cleanup.run(harness.store()).await.unwrap();
}
