//! End-to-end dashboard tests against a mock word service.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use wiremock::matchers::{method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};
use wordscope::config::SessionConfig;
use wordscope::history;
use wordscope::{
    CurrentSearchState, Dashboard, FileStore, HistoryStore, KeyValueStore, MemoryStore,
    SessionGuard, WordscopeError,
};
use wordscope_search::{
    FETCH_FAILURE_MESSAGE, HttpTransport, SearchConfig, SearchOutcome, SearchService, SearchType,
};

fn service(server: &MockServer) -> SearchService<HttpTransport> {
    let config = SearchConfig {
        base_url: server.uri(),
        timeout_seconds: 2,
        ..Default::default()
    };
    let transport = HttpTransport::new(&config).expect("transport");
    SearchService::new(transport, config).expect("service")
}

#[tokio::test]
async fn logged_in_search_is_recorded_in_history() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/words"))
        .and(query_param("rel_trg", "cow"))
        .and(query_param("max", "100"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            {"word": "milking", "score": 1340},
            {"word": "dairy", "score": 1200, "tags": ["n"]}
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let guard = SessionGuard::new(MemoryStore::new(), SessionConfig::default());
    let mut dashboard = Dashboard::new(guard, service(&server), HistoryStore::new());
    dashboard.session().login("ada", "secret", false).unwrap();

    let outcome = dashboard
        .search(SearchType::TriggeredBy, "cow")
        .await
        .unwrap();
    let SearchOutcome::Success(records) = outcome else {
        panic!("expected success");
    };
    assert_eq!(records[0].word, "milking");
    assert_eq!(records[1].tags, vec!["n".to_string()]);

    let items = dashboard.history().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].query, "triggered-by: cow");
    assert_eq!(items[0].results, records);
}

#[tokio::test]
async fn fallback_results_are_tagged_and_recorded() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/words"))
        .and(query_param("sl", "jirraf"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/words"))
        .and(query_param("ml", "jirraf"))
        .and(query_param_is_missing("sl"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!([{"word": "giraffe"}])),
        )
        .expect(1)
        .mount(&server)
        .await;

    let guard = SessionGuard::new(MemoryStore::new(), SessionConfig::default());
    let mut dashboard = Dashboard::new(guard, service(&server), HistoryStore::new());
    dashboard.session().login("ada", "secret", false).unwrap();

    let outcome = dashboard
        .search(SearchType::SoundsLike, "jirraf")
        .await
        .unwrap();
    let SearchOutcome::Success(records) = outcome else {
        panic!("expected success");
    };
    assert_eq!(records[0].word, "giraffe");
    assert_eq!(records[0].score, 0.0);
    assert_eq!(records[0].tags, vec!["fallback_search".to_string()]);
    assert_eq!(dashboard.history().unwrap().len(), 1);
}

#[tokio::test]
async fn double_failure_sets_failed_state() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/words"))
        .respond_with(ResponseTemplate::new(503))
        .expect(2)
        .mount(&server)
        .await;

    let guard = SessionGuard::new(MemoryStore::new(), SessionConfig::default());
    let mut dashboard = Dashboard::new(guard, service(&server), HistoryStore::new());
    dashboard.session().login("ada", "secret", false).unwrap();

    let outcome = dashboard
        .search(SearchType::AdjectivesFor, "ocean")
        .await
        .unwrap();
    assert_eq!(outcome, SearchOutcome::Failure(FETCH_FAILURE_MESSAGE.into()));
    assert_eq!(
        dashboard.current(),
        &CurrentSearchState::Failed(FETCH_FAILURE_MESSAGE.into())
    );
    assert!(dashboard.history().unwrap().is_empty());
}

#[tokio::test]
async fn expired_session_blocks_search_and_clears_credential() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .expect(0)
        .mount(&server)
        .await;

    let guard = SessionGuard::new(MemoryStore::new(), SessionConfig::default());
    guard.login_at("ada", "secret", false, 0).unwrap();
    let mut dashboard = Dashboard::new(guard, service(&server), HistoryStore::new());

    let err = dashboard
        .search(SearchType::SimilarMeaning, "happy")
        .await
        .unwrap_err();
    assert!(matches!(err, WordscopeError::Unauthenticated));
    assert!(
        dashboard
            .session()
            .store()
            .get(wordscope::session::AUTH_TOKEN_KEY)
            .unwrap()
            .is_none()
    );
}

#[tokio::test]
async fn session_and_history_survive_reopen() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/words"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!([{"word": "talk"}])),
        )
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().expect("tempdir");
    let storage_path = dir.path().join("storage.json");
    let history_path = dir.path().join("history.json");

    {
        let guard = SessionGuard::new(FileStore::new(&storage_path), SessionConfig::default());
        let mut dashboard = Dashboard::new(guard, service(&server), HistoryStore::new())
            .with_history_file(&history_path);
        dashboard.session().login("ada", "secret", true).unwrap();
        dashboard
            .search(SearchType::LetterPattern, "t k 2")
            .await
            .unwrap();
    }

    let guard = SessionGuard::new(FileStore::new(&storage_path), SessionConfig::default());
    assert!(guard.is_authenticated());
    let store = history::load(&history_path, 20);
    let dashboard =
        Dashboard::new(guard, service(&server), store).with_history_file(&history_path);
    let items = dashboard.history().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].query, "letter-pattern: t k 2");
    assert_eq!(dashboard.current(), &CurrentSearchState::Idle);

    dashboard.session().logout();
    assert!(matches!(
        dashboard.history(),
        Err(WordscopeError::Unauthenticated)
    ));
}

#[tokio::test]
async fn corrupt_files_on_disk_do_not_block_the_dashboard() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/words"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!([{"word": "moo"}])),
        )
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().expect("tempdir");
    let storage_path = dir.path().join("storage.json");
    let history_path = dir.path().join("history.json");
    std::fs::write(&storage_path, r#"{"authToken": "#).unwrap();
    std::fs::write(&history_path, "[{").unwrap();

    let guard = SessionGuard::new(FileStore::new(&storage_path), SessionConfig::default());
    let store = history::load(&history_path, 20);
    assert!(store.is_empty());
    let mut dashboard =
        Dashboard::new(guard, service(&server), store).with_history_file(&history_path);

    assert!(!dashboard.session().is_authenticated());
    dashboard.session().login("ada", "secret", false).unwrap();
    dashboard
        .search(SearchType::TriggeredBy, "cow")
        .await
        .unwrap();

    assert_eq!(history::load(&history_path, 20).len(), 1);
}
