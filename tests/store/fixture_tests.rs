use bookreview_e2e::builders::{BookBuilder, BuilderError, UserBuilder};
use bookreview_e2e::domain::RepositoryError;
use bookreview_e2e::fixtures::{Cleanup, Harness};
use bookreview_e2e::infrastructure::database::Database;
use rstest::rstest;

use crate::helpers::{database, offline_config};

#[rstest]
#[tokio::test]
async fn fixtures_are_fresh_per_test(#[future(awt)] database: Database) {
    let harness = Harness::with_database(offline_config(), database);

    let first = harness.fixtures();
    let second = harness.fixtures();

    assert_ne!(
        first.user_builder.fields().email,
        second.user_builder.fields().email
    );
    assert_ne!(first.book_builder.fields().id, second.book_builder.fields().id);
    assert!(first.cleanup.steps().is_empty());
    assert_eq!(
        first.sessions.base_url().as_str(),
        "http://localhost:3000/"
    );

    // Overriding one set's builder leaves every other set's defaults alone
    let overridden = first.user_builder.with_name("Overridden Name");
    let third = harness.fixtures();

    assert_eq!(overridden.fields().name, "Overridden Name");
    assert_ne!(second.user_builder.fields().name, "Overridden Name");
    assert_ne!(third.user_builder.fields().name, "Overridden Name");
    assert_ne!(
        third.user_builder.fields().email,
        overridden.fields().email
    );
}

#[rstest]
#[tokio::test]
async fn fixtures_share_one_store(#[future(awt)] database: Database) {
    let harness = Harness::with_database(offline_config(), database);
    let writer = harness.fixtures();
    let reader = harness.fixtures();

    let created = writer.user_builder.create(&writer.store).await.unwrap();

    assert!(reader.store.users.get(&created.id).await.is_ok());
}

#[rstest]
#[tokio::test]
async fn cleanup_deletes_books_before_owners(#[future(awt)] database: Database) {
    let harness = Harness::with_database(offline_config(), database);
    let mut fixtures = harness.fixtures();
    let created = fixtures.book_builder.create(&fixtures.store).await.unwrap();

    fixtures
        .cleanup
        .book(&created.book.id)
        .user(&created.owner.email);
    fixtures.cleanup.run(&fixtures.store).await.unwrap();

    assert!(matches!(
        harness.store().books.get(&created.book.id).await,
        Err(RepositoryError::NotFound)
    ));
    assert!(matches!(
        harness.store().users.get(&created.owner.id).await,
        Err(RepositoryError::NotFound)
    ));
}

#[rstest]
#[tokio::test]
async fn cleanup_stops_at_the_first_failure(#[future(awt)] database: Database) {
    let harness = Harness::with_database(offline_config(), database);
    let store = harness.store().clone();
    let created = BookBuilder::a_book().create(&store).await.unwrap();

    // Owner tracked ahead of their book: the first step fails and the book stays
    let mut cleanup = Cleanup::default();
    cleanup.user(&created.owner.email).book(&created.book.id);
    let err = cleanup.run(&store).await.unwrap_err();

    assert!(matches!(
        err,
        BuilderError::Repository(RepositoryError::Constraint(_))
    ));
    assert!(store.books.get(&created.book.id).await.is_ok());
}

#[rstest]
#[tokio::test]
async fn cleanup_of_a_vanished_row_fails(#[future(awt)] database: Database) {
    let harness = Harness::with_database(offline_config(), database);
    let store = harness.store().clone();
    let created = UserBuilder::a_user().create(&store).await.unwrap();
    UserBuilder::delete(&store, &created.email).await.unwrap();

    let mut cleanup = Cleanup::default();
    cleanup.user(&created.email);

    assert!(matches!(
        cleanup.run(&store).await,
        Err(BuilderError::Repository(RepositoryError::NotFound))
    ));
}

#[rstest]
#[tokio::test]
async fn all_books_step_tolerates_an_empty_table(#[future(awt)] database: Database) {
    let harness = Harness::with_database(offline_config(), database);

    let mut cleanup = Cleanup::default();
    cleanup.all_books().all_books();

    cleanup.run(harness.store()).await.unwrap();
}

#[tokio::test]
async fn file_database_persists_across_connections() {
    let dir = tempfile::tempdir().unwrap();
    let url = format!("sqlite://{}", dir.path().join("harness.db").display());

    let mut config = offline_config();
    config.database_url.clone_from(&url);

    let database = Database::connect(&url).await.unwrap();
    database.install_schema().await.unwrap();
    let first = Harness::with_database(config.clone(), database);
    let created = UserBuilder::a_user()
        .create(first.store())
        .await
        .unwrap();
    first.close().await;

    let second = Harness::connect(config).await.unwrap();
    let stored = second
        .store()
        .users
        .get_by_email(&created.email)
        .await
        .unwrap();
    assert_eq!(stored.user.id, created.id);
    second.close().await;
}
