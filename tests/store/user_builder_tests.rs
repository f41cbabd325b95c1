use bookreview_e2e::Store;
use bookreview_e2e::builders::{BuilderError, UserBuilder, UserField};
use bookreview_e2e::domain::RepositoryError;
use rstest::rstest;

use crate::helpers::store;

#[rstest]
#[tokio::test]
async fn create_returns_plaintext_and_stores_a_hash(#[future(awt)] store: Store) {
    let builder = UserBuilder::a_user();
    let fields = builder.build();

    let created = builder.create(&store).await.unwrap();

    // The caller gets back what they can type into the login form
    assert_eq!(created.password, fields.password);
    assert_eq!(created.email, fields.email);
    assert_eq!(created.id, fields.id);
    assert_eq!(created.name.as_deref(), Some(fields.name.as_str()));

    // The row holds a bcrypt hash of that plaintext
    let stored = store.users.get_by_email(&fields.email).await.unwrap();
    assert_ne!(stored.user.password_hash, fields.password);
    assert!(bcrypt::verify(&fields.password, &stored.user.password_hash).unwrap());
}

#[rstest]
#[tokio::test]
async fn create_writes_the_profile_with_the_user(#[future(awt)] store: Store) {
    let created = UserBuilder::a_user()
        .with_name("Profile Person")
        .create(&store)
        .await
        .unwrap();

    let stored = store.users.get(&created.id).await.unwrap();
    assert_eq!(
        stored.profile.map(|profile| profile.name),
        Some("Profile Person".to_string())
    );
}

#[rstest]
#[tokio::test]
async fn duplicate_email_is_a_conflict(#[future(awt)] store: Store) {
    UserBuilder::a_user()
        .with_email("taken@example.com")
        .create(&store)
        .await
        .unwrap();

    let err = UserBuilder::a_user()
        .with_email("taken@example.com")
        .create(&store)
        .await
        .unwrap_err();

    assert!(
        matches!(err, BuilderError::Repository(RepositoryError::Conflict(_))),
        "unexpected error: {err:?}"
    );
}

#[rstest]
#[tokio::test]
async fn duplicate_id_is_a_conflict(#[future(awt)] store: Store) {
    let first = UserBuilder::a_user().create(&store).await.unwrap();

    // Same id, new email: nothing from the second attempt persists
    let err = UserBuilder::a_user()
        .with(UserField::Id(first.id.clone()))
        .with_email("second@example.com")
        .create(&store)
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        BuilderError::Repository(RepositoryError::Conflict(_))
    ));
    assert!(matches!(
        store.users.get_by_email("second@example.com").await,
        Err(RepositoryError::NotFound)
    ));
}

#[rstest]
#[tokio::test]
async fn delete_removes_user_and_profile(#[future(awt)] store: Store) {
    let created = UserBuilder::a_user().create(&store).await.unwrap();

    UserBuilder::delete(&store, &created.email).await.unwrap();

    assert!(matches!(
        store.users.get(&created.id).await,
        Err(RepositoryError::NotFound)
    ));
}

#[rstest]
#[tokio::test]
async fn deleting_a_missing_user_is_not_found(#[future(awt)] store: Store) {
    let err = UserBuilder::delete(&store, "nobody@example.com")
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        BuilderError::Repository(RepositoryError::NotFound)
    ));
}

#[rstest]
#[tokio::test]
async fn generated_users_never_collide(#[future(awt)] store: Store) {
    for _ in 0..5 {
        UserBuilder::a_user().create(&store).await.unwrap();
    }
}
