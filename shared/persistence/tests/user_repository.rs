//! Round trips against a live Postgres. Run with
//! `DATABASE_URL=... cargo test -p persistence -- --ignored`.

use models::{RecordId, UserRecord};
use persistence::{DatabaseConfig, PersistenceError, UserRepository};

async fn repository() -> UserRepository {
    let pool = DatabaseConfig::from_env()
        .connect()
        .await
        .expect("failed to connect db");
    persistence::run_migrations(&pool)
        .await
        .expect("failed to run migrations");
    UserRepository::new(pool)
}

fn handle(test: &str) -> String {
    format!("{test}-{}", std::process::id())
}

#[tokio::test]
#[ignore = "requires a running Postgres at DATABASE_URL"]
async fn save_assigns_id_once_and_then_updates() {
    let repo = repository().await;
    let mut user = UserRecord::create(handle("save"), "Jane Doe", "jane@example.com");
    assert_eq!(user.id(), RecordId::Unassigned);

    let id = repo.save(&mut user).await.unwrap();
    assert_eq!(user.id(), RecordId::Assigned(id));

    user.set_name("Jane D.");
    let again = repo.save(&mut user).await.unwrap();
    assert_eq!(again, id);
    assert_eq!(user.id(), RecordId::Assigned(id));

    let stored = repo.find_by_id(id).await.unwrap().expect("row exists");
    assert_eq!(stored.name(), "Jane D.");
    assert_eq!(stored.user_id(), user.user_id());
    assert_eq!(stored.email(), "jane@example.com");

    assert!(repo.delete_by_id(id).await.unwrap());
}

#[tokio::test]
#[ignore = "requires a running Postgres at DATABASE_URL"]
async fn updating_a_missing_row_is_not_found() {
    let repo = repository().await;
    let mut user = UserRecord::create(handle("ghost"), "Ghost", "ghost@example.com");
    user.set_id(-1);

    match repo.save(&mut user).await {
        Err(PersistenceError::NotFound { id }) => assert_eq!(id, -1),
        other => panic!("expected NotFound, got {other:?}"),
    }
}

#[tokio::test]
#[ignore = "requires a running Postgres at DATABASE_URL"]
async fn duplicate_handles_are_stored_side_by_side() {
    let repo = repository().await;
    let shared = handle("dup");
    let mut first = UserRecord::create(shared.clone(), "First", "one@example.com");
    let mut second = UserRecord::create(shared.clone(), "Second", "");
    let first_id = repo.save(&mut first).await.unwrap();
    let second_id = repo.save(&mut second).await.unwrap();
    assert_ne!(first_id, second_id);

    let found = repo.find_by_user_id(&shared).await.unwrap();
    let names: Vec<_> = found.iter().map(|u| u.name().to_string()).collect();
    assert_eq!(names, vec!["First", "Second"]);
    assert_eq!(found[1].email(), "");

    assert!(repo.delete_by_id(first_id).await.unwrap());
    assert!(repo.delete_by_id(second_id).await.unwrap());
    assert!(!repo.delete_by_id(second_id).await.unwrap());
    assert!(repo.find_by_user_id(&shared).await.unwrap().is_empty());
}

#[tokio::test]
#[ignore = "requires a running Postgres at DATABASE_URL"]
async fn find_all_and_count_see_saved_rows() {
    let repo = repository().await;
    let mut user = UserRecord::create(handle("list"), "Riley Chen", "riley@example.com");
    let id = repo.save(&mut user).await.unwrap();

    assert!(repo.count().await.unwrap() >= 1);
    let all = repo.find_all().await.unwrap();
    assert!(all.iter().any(|u| u.id() == RecordId::Assigned(id)));

    repo.delete_by_id(id).await.unwrap();
    assert!(repo.find_by_id(id).await.unwrap().is_none());
}
