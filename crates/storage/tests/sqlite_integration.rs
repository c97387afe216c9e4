use chrono::Duration;
use practice_core::model::{Attempt, ItemId, Language};
use practice_core::time::fixed_now;
use storage::repository::{
    PreferenceRepository, SessionStore, Storage, StorageError, StoredSession,
};
use storage::sqlite::SqliteRepository;

fn attempt(id: &str, correct: bool, hint_used: bool, offset_ms: i64) -> Attempt {
    Attempt {
        item_id: ItemId::new(id),
        response: if correct { "ok".into() } else { "wrong".into() },
        correct,
        elapsed_ms: 1_250 + offset_ms,
        hint_used,
        timestamp: fixed_now() + Duration::milliseconds(offset_ms),
    }
}

async fn repo(name: &str) -> SqliteRepository {
    let url = format!("sqlite:file:{name}?mode=memory&cache=shared");
    let repo = SqliteRepository::connect(&url).await.expect("connect");
    repo.migrate().await.expect("migrate");
    repo
}

#[tokio::test]
async fn sqlite_empty_database_loads_defaults() {
    let repo = repo("memdb_empty").await;
    assert_eq!(repo.load().await.unwrap(), StoredSession::default());
    assert_eq!(repo.language().await.unwrap(), None);
}

#[tokio::test]
async fn sqlite_save_preserves_order_and_fields() {
    let repo = repo("memdb_save").await;
    let history = vec![
        attempt("q3", true, false, 0),
        attempt("q1", false, true, 3_001),
        attempt("q6", true, true, 7_250),
    ];
    repo.save(&history, 14).await.unwrap();

    let loaded = repo.load().await.unwrap();
    assert_eq!(loaded.history, history);
    assert_eq!(loaded.points, 14);
}

#[tokio::test]
async fn sqlite_save_overwrites_previous_log() {
    let repo = repo("memdb_overwrite").await;
    repo.save(&[attempt("q1", true, false, 0)], 10).await.unwrap();
    let grown = vec![attempt("q1", true, false, 0), attempt("q2", true, false, 10)];
    repo.save(&grown, 20).await.unwrap();

    let loaded = repo.load().await.unwrap();
    assert_eq!(loaded.history.len(), 2);
    assert_eq!(loaded.points, 20);
}

#[tokio::test]
async fn sqlite_replace_and_clear() {
    let repo = repo("memdb_replace").await;
    repo.save(&[attempt("q1", true, false, 0)], 10).await.unwrap();

    repo.replace(&[attempt("q5", false, true, 5)], -3).await.unwrap();
    let loaded = repo.load().await.unwrap();
    assert_eq!(loaded.history[0].item_id, "q5");
    assert_eq!(loaded.points, -3);

    repo.clear().await.unwrap();
    assert_eq!(repo.load().await.unwrap(), StoredSession::default());
}

#[tokio::test]
async fn sqlite_language_preference_upserts() {
    let repo = repo("memdb_lang").await;
    repo.save_language(Language::En).await.unwrap();
    repo.save_language(Language::Hi).await.unwrap();
    assert_eq!(repo.language().await.unwrap(), Some(Language::Hi));
}

#[tokio::test]
async fn sqlite_unreadable_language_is_a_serialization_error() {
    let repo = repo("memdb_bad_language").await;
    sqlx::query("INSERT INTO preferences (id, language) VALUES (1, 'klingon')")
        .execute(repo.pool())
        .await
        .unwrap();

    let err = repo.language().await.unwrap_err();
    assert!(matches!(err, StorageError::Serialization(_)));
    assert!(err.to_string().contains("klingon"));
}

#[tokio::test]
async fn sqlite_migrations_are_idempotent() {
    let repo = repo("memdb_migrate_twice").await;
    repo.migrate().await.expect("second migrate");
}

#[tokio::test]
async fn storage_sqlite_wires_both_repositories() {
    let storage = Storage::sqlite("sqlite:file:memdb_storage?mode=memory&cache=shared")
        .await
        .expect("storage");
    storage
        .sessions
        .save(&[attempt("q4", true, false, 0)], 10)
        .await
        .unwrap();
    storage.preferences.save_language(Language::En).await.unwrap();

    assert_eq!(storage.sessions.load().await.unwrap().points, 10);
    assert_eq!(
        storage.preferences.language().await.unwrap(),
        Some(Language::En)
    );
}
