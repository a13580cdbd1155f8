use clipstash_core::clipboard::CapturedSnapshot;
use clipstash_core::ports::{HistoryRepositoryPort, ListQuery};
use clipstash_infra::db::{init_db_pool, DieselHistoryRepository, DieselSqliteExecutor};
use tempfile::TempDir;

fn setup() -> (DieselHistoryRepository<DieselSqliteExecutor>, TempDir) {
    let dir = tempfile::tempdir().expect("create temp dir");
    let db_path = dir.path().join("history.db");
    let pool = init_db_pool(db_path.to_str().expect("utf-8 db path")).expect("init db pool");
    let repo = DieselHistoryRepository::new(DieselSqliteExecutor::new(pool));
    (repo, dir)
}

fn plain(text: &str) -> CapturedSnapshot {
    CapturedSnapshot::plain_text(text)
}

#[tokio::test]
async fn insert_assigns_monotonically_increasing_ids() {
    let (repo, _dir) = setup();

    let first = repo.insert(&plain("a"), 1_000).await.unwrap();
    let second = repo.insert(&plain("b"), 2_000).await.unwrap();
    let third = repo.insert(&plain("c"), 3_000).await.unwrap();

    assert_eq!(first.as_i64(), 1);
    assert!(second > first);
    assert!(third > second);
}

#[tokio::test]
async fn get_round_trips_full_content() {
    let (repo, _dir) = setup();

    let snapshot = CapturedSnapshot::new(
        Some("<b>hi</b>".to_string()),
        Some("hi".to_string()),
        Some("editor".to_string()),
    );
    let id = repo.insert(&snapshot, 1_000).await.unwrap();

    let record = repo.get(id).await.unwrap().expect("record present");
    assert_eq!(record.id, id);
    assert_eq!(record.html.as_deref(), Some("<b>hi</b>"));
    assert_eq!(record.plain.as_deref(), Some("hi"));
    assert_eq!(record.source_app.as_deref(), Some("editor"));
    assert_eq!(record.created_at_ms, 1_000);
    assert_eq!(record.size_bytes, 11);
}

#[tokio::test]
async fn get_returns_none_for_unknown_id() {
    let (repo, _dir) = setup();

    let missing = repo.get(42.into()).await.unwrap();
    assert!(missing.is_none());
}

#[tokio::test]
async fn latest_orders_by_created_at_then_id() {
    let (repo, _dir) = setup();

    repo.insert(&plain("old"), 1_000).await.unwrap();
    let tied_a = repo.insert(&plain("tied a"), 5_000).await.unwrap();
    let tied_b = repo.insert(&plain("tied b"), 5_000).await.unwrap();

    // Equal timestamps: the higher id wins.
    let latest = repo.latest().await.unwrap().expect("non-empty store");
    assert_eq!(latest.id, tied_b);
    assert!(tied_b > tied_a);

    // A newer timestamp beats any id.
    repo.insert(&plain("newest"), 9_000).await.unwrap();
    let latest = repo.latest().await.unwrap().expect("non-empty store");
    assert_eq!(latest.plain.as_deref(), Some("newest"));
}

#[tokio::test]
async fn latest_is_none_on_empty_store() {
    let (repo, _dir) = setup();
    assert!(repo.latest().await.unwrap().is_none());
}

#[tokio::test]
async fn list_returns_most_recent_first() {
    let (repo, _dir) = setup();

    repo.insert(&plain("first"), 1_000).await.unwrap();
    repo.insert(&plain("second"), 2_000).await.unwrap();
    repo.insert(&plain("third"), 3_000).await.unwrap();

    let records = repo.list(&ListQuery::default()).await.unwrap();
    let bodies: Vec<_> = records.iter().map(|r| r.plain.as_deref().unwrap()).collect();
    assert_eq!(bodies, vec!["third", "second", "first"]);
}

#[tokio::test]
async fn list_pages_with_limit_and_offset() {
    let (repo, _dir) = setup();

    for i in 0..5 {
        repo.insert(&plain(&format!("entry {i}")), 1_000 + i).await.unwrap();
    }

    let page = repo.list(&ListQuery::page(2, 1)).await.unwrap();
    let bodies: Vec<_> = page.iter().map(|r| r.plain.as_deref().unwrap()).collect();
    assert_eq!(bodies, vec!["entry 3", "entry 2"]);
}

#[tokio::test]
async fn list_limit_zero_means_no_cap() {
    let (repo, _dir) = setup();

    for i in 0..7 {
        repo.insert(&plain(&format!("entry {i}")), 1_000 + i).await.unwrap();
    }

    let records = repo.list(&ListQuery::default()).await.unwrap();
    assert_eq!(records.len(), 7);
}

#[tokio::test]
async fn list_search_filters_on_plain_text() {
    let (repo, _dir) = setup();

    repo.insert(&plain("alpha report"), 1_000).await.unwrap();
    repo.insert(&plain("beta notes"), 2_000).await.unwrap();
    repo.insert(&plain("alpha summary"), 3_000).await.unwrap();

    let query = ListQuery {
        search: Some("alpha".to_string()),
        ..Default::default()
    };
    let records = repo.list(&query).await.unwrap();
    let bodies: Vec<_> = records.iter().map(|r| r.plain.as_deref().unwrap()).collect();
    assert_eq!(bodies, vec!["alpha summary", "alpha report"]);
}

#[tokio::test]
async fn delete_reports_whether_a_row_was_removed() {
    let (repo, _dir) = setup();

    let id = repo.insert(&plain("x"), 1_000).await.unwrap();

    assert!(repo.delete(id).await.unwrap());
    assert!(!repo.delete(id).await.unwrap());
    assert!(repo.get(id).await.unwrap().is_none());
}

#[tokio::test]
async fn clear_removes_everything_and_is_idempotent() {
    let (repo, _dir) = setup();

    repo.insert(&plain("a"), 1_000).await.unwrap();
    repo.insert(&plain("b"), 2_000).await.unwrap();

    assert_eq!(repo.clear().await.unwrap(), 2);
    assert_eq!(repo.count().await.unwrap(), 0);
    assert_eq!(repo.clear().await.unwrap(), 0);
}

#[tokio::test]
async fn delete_older_than_removes_strictly_older_records_only() {
    let (repo, _dir) = setup();

    repo.insert(&plain("stale"), 1_000).await.unwrap();
    let at_cutoff = repo.insert(&plain("at cutoff"), 2_000).await.unwrap();
    let fresh = repo.insert(&plain("fresh"), 3_000).await.unwrap();

    let removed = repo.delete_older_than(2_000).await.unwrap();

    assert_eq!(removed, 1);
    assert!(repo.get(at_cutoff).await.unwrap().is_some());
    assert!(repo.get(fresh).await.unwrap().is_some());
    assert_eq!(repo.count().await.unwrap(), 2);
}

#[tokio::test]
async fn count_and_total_size_track_inserts() {
    let (repo, _dir) = setup();

    assert_eq!(repo.count().await.unwrap(), 0);
    assert_eq!(repo.total_size_bytes().await.unwrap(), 0);

    repo.insert(&plain("abcd"), 1_000).await.unwrap();
    repo.insert(
        &CapturedSnapshot::new(Some("<p>x</p>".to_string()), Some("x".to_string()), None),
        2_000,
    )
    .await
    .unwrap();

    assert_eq!(repo.count().await.unwrap(), 2);
    assert_eq!(repo.total_size_bytes().await.unwrap(), 4 + 9);
}
