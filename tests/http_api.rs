//! HTTP client against a mock endpoint, and the controller wired to it.

mod common;

use std::sync::Arc;
use std::time::Duration;

use common::mock_backend::{MockBackend, MockResponse};
use moviedeck::config::SourceConfig;
use moviedeck::controller::CatalogController;
use moviedeck::movies::{
    HttpMovieApi, MovieApi, MovieDraft, MovieError, MovieId, SourceStyle, FETCH_FAILED_MESSAGE,
};
use moviedeck::ui::catalog::FetchPhase;

const FILMS_BODY: &str = r#"{
    "count": 2,
    "results": [
        {"episode_id": 4, "title": "A New Hope", "opening_crawl": "It is a period of civil war.", "release_date": "1977-05-25", "director": "George Lucas"},
        {"episode_id": 5, "title": "The Empire Strikes Back", "opening_crawl": "It is a dark time for the Rebellion.", "release_date": "1980-05-17", "director": "Irvin Kershner"}
    ]
}"#;

fn api(endpoint: String, style: SourceStyle) -> HttpMovieApi {
    let source = SourceConfig { endpoint, style };
    HttpMovieApi::new(&source, Duration::from_secs(5), Duration::from_secs(2))
        .expect("client builds")
}

#[tokio::test]
async fn films_listing_is_mapped() {
    let mock = MockBackend::start().await;
    mock.enqueue(MockResponse::json(FILMS_BODY)).await;
    let api = api(mock.url("/api/films/"), SourceStyle::Films);

    let movies = api.list().await.unwrap();

    assert_eq!(movies.len(), 2);
    assert_eq!(movies[0].id, MovieId::Number(4));
    assert_eq!(movies[0].title, "A New Hope");
    assert_eq!(movies[0].release_date, "1977-05-25");
    assert_eq!(movies[1].opening_text, "It is a dark time for the Rebellion.");

    let requests = mock.captured_requests().await;
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method, "GET");
    assert_eq!(requests[0].path, "/api/films/");
}

#[tokio::test]
async fn server_error_is_status_error() {
    let mock = MockBackend::start().await;
    mock.enqueue(MockResponse::error(500)).await;
    let api = api(mock.url("/api/films/"), SourceStyle::Films);

    let err = api.list().await.unwrap_err();
    assert!(matches!(err, MovieError::Status { status: 500 }));
}

#[tokio::test]
async fn unreachable_endpoint_is_transport_error() {
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };
    let api = api(format!("http://127.0.0.1:{}/films", port), SourceStyle::Films);

    let err = api.list().await.unwrap_err();
    assert!(matches!(err, MovieError::Transport { .. }));
}

#[tokio::test]
async fn films_endpoint_rejects_writes() {
    let mock = MockBackend::start().await;
    let api = api(mock.url("/api/films/"), SourceStyle::Films);

    assert!(!api.supports_writes());
    let err = api
        .create(&MovieDraft::new("Alien", "...", "1979-05-25"))
        .await
        .unwrap_err();
    assert!(matches!(err, MovieError::Unsupported { operation: "POST" }));
    assert!(mock.captured_requests().await.is_empty());
}

#[tokio::test]
async fn document_store_create_posts_draft() {
    let mock = MockBackend::start().await;
    mock.enqueue(MockResponse::json(r#"{"name":"-Nalien"}"#)).await;
    let api = api(mock.url("/movies.json"), SourceStyle::DocumentStore);

    let draft = MovieDraft::new("Alien", "In space...", "1979-05-25");
    let movie = api.create(&draft).await.unwrap();

    assert_eq!(movie.id, MovieId::from("-Nalien"));
    assert_eq!(movie.title, "Alien");

    let requests = mock.captured_requests().await;
    assert_eq!(requests[0].method, "POST");
    assert_eq!(requests[0].path, "/movies.json");
    assert_eq!(
        requests[0].json(),
        serde_json::json!({
            "title": "Alien",
            "openingText": "In space...",
            "releaseDate": "1979-05-25"
        })
    );
}

#[tokio::test]
async fn document_store_create_without_key_fails() {
    let mock = MockBackend::start().await;
    mock.enqueue(MockResponse::json(r#"{"ok":true}"#)).await;
    let api = api(mock.url("/movies.json"), SourceStyle::DocumentStore);

    let err = api
        .create(&MovieDraft::new("Alien", "...", "1979-05-25"))
        .await
        .unwrap_err();
    assert!(matches!(err, MovieError::MissingKey));
}

#[tokio::test]
async fn document_store_delete_targets_item_url() {
    let mock = MockBackend::start().await;
    mock.enqueue(MockResponse::json("null")).await;
    let api = api(mock.url("/movies.json"), SourceStyle::DocumentStore);

    api.delete(&MovieId::from("-Nalien")).await.unwrap();

    let requests = mock.captured_requests().await;
    assert_eq!(requests[0].method, "DELETE");
    assert_eq!(requests[0].path, "/movies/-Nalien.json");
}

#[tokio::test]
async fn document_store_listing_reads_keyed_object() {
    let mock = MockBackend::start().await;
    mock.enqueue(MockResponse::json(
        r#"{"-Na":{"title":"Alien","openingText":"In space...","releaseDate":"1979-05-25"}}"#,
    ))
    .await;
    let api = api(mock.url("/movies.json"), SourceStyle::DocumentStore);

    let movies = api.list().await.unwrap();
    assert_eq!(movies.len(), 1);
    assert_eq!(movies[0].id, MovieId::from("-Na"));
}

#[tokio::test]
async fn controller_recovers_after_server_error() {
    let mock = MockBackend::start().await;
    mock.enqueue(MockResponse::error(500)).await;
    mock.enqueue(MockResponse::json(FILMS_BODY)).await;
    let api = Arc::new(api(mock.url("/api/films/"), SourceStyle::Films));
    let mut controller = CatalogController::new(api, Duration::from_millis(100));

    controller.fetch_movies();
    assert!(controller.process_next().await);
    assert_eq!(controller.state().error(), Some(FETCH_FAILED_MESSAGE));
    assert!(controller.state().is_retrying());

    let loaded = tokio::time::timeout(Duration::from_secs(5), async {
        while controller.state().phase != FetchPhase::Loaded {
            assert!(controller.process_next().await);
        }
    })
    .await;
    assert!(loaded.is_ok(), "retry never succeeded");

    assert_eq!(controller.state().movies.len(), 2);
    assert!(!controller.is_retry_scheduled());
    assert_eq!(mock.captured_requests().await.len(), 2);
}
