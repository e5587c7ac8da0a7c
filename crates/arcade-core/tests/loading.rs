//! End-to-end catalog loading into the store.

use std::io::Write;

use arcade_core::catalog::{CatalogStatus, CatalogStore};
use arcade_core::source::{BundledFetcher, CatalogSource, FileFetcher, HttpFetcher, load_catalog};
use tokio::io::{AsyncReadExt, AsyncWriteExt};

/// Serves one canned HTTP response on a local port and returns its URL.
async fn serve_once(response: &'static str) -> url::Url {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut request = [0u8; 2048];
        let _ = socket.read(&mut request).await;
        socket.write_all(response.as_bytes()).await.unwrap();
        let _ = socket.shutdown().await;
    });
    url::Url::parse(&format!("http://{}/games.json", addr)).unwrap()
}

#[tokio::test]
async fn file_catalog_with_bad_records_is_partially_available() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"[
            {{"id": "a", "title": "Snake Classic", "description": "Eat and grow", "thumbnail": "a.png", "url": "https://a"}},
            {{"id": "b", "description": "no title", "thumbnail": "b.png", "url": "https://b"}},
            {{"id": "c", "title": "Tetris", "description": "Stack blocks", "thumbnail": "c.png", "url": "https://c"}}
        ]"#
    )
    .unwrap();

    let mut store = CatalogStore::new();
    store.apply_load(load_catalog(&FileFetcher::new(file.path())).await);

    assert_eq!(
        store.status(),
        &CatalogStatus::Ready {
            games: 2,
            skipped: 1
        }
    );
    let titles: Vec<&str> = store
        .visible_entries()
        .iter()
        .map(|e| e.title.as_str())
        .collect();
    assert_eq!(titles, vec!["Snake Classic", "Tetris"]);
}

#[tokio::test]
async fn missing_file_makes_catalog_unavailable() {
    let dir = tempfile::tempdir().unwrap();
    let source = CatalogSource::File(dir.path().join("games.json"));

    let mut store = CatalogStore::new();
    let mut rx = store.subscribe();
    store.apply_load(load_catalog(source.fetcher().as_ref()).await);

    assert!(matches!(store.status(), CatalogStatus::Unavailable { .. }));
    assert!(store.visible_entries().is_empty());
    assert!(matches!(
        rx.borrow_and_update().status,
        CatalogStatus::Unavailable { .. }
    ));
}

#[tokio::test]
async fn malformed_payload_makes_catalog_unavailable() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, r#"{{"games": []}}"#).unwrap();

    let mut store = CatalogStore::new();
    store.apply_load(load_catalog(&FileFetcher::new(file.path())).await);

    match store.status() {
        CatalogStatus::Unavailable { reason } => assert!(reason.contains("Malformed catalog")),
        other => panic!("expected unavailable, got {:?}", other),
    }
}

#[tokio::test]
async fn bundled_catalog_supports_search_and_selection() {
    let mut store = CatalogStore::new();
    store.apply_load(load_catalog(&BundledFetcher).await);
    assert!(store.status().is_ready());

    store.set_query("TETRIS");
    let visible: Vec<String> = store
        .visible_entries()
        .iter()
        .map(|e| e.id.to_string())
        .collect();
    assert!(visible.contains(&"tetris".to_string()));

    store.select("tetris").unwrap();
    assert_eq!(store.selected().map(|e| e.title.as_str()), Some("Tetris"));

    store.clear_selection();
    assert!(store.view().is_browsing());
}

#[tokio::test]
async fn http_error_status_makes_catalog_unavailable() {
    let url = serve_once(
        "HTTP/1.1 503 Service Unavailable\r\nContent-Length: 0\r\nConnection: close\r\n\r\n",
    )
    .await;

    let mut store = CatalogStore::new();
    store.apply_load(load_catalog(&HttpFetcher::new(url)).await);

    match store.status() {
        CatalogStatus::Unavailable { reason } => assert!(reason.contains("503")),
        other => panic!("expected unavailable, got {:?}", other),
    }
    assert!(store.visible_entries().is_empty());
}

#[tokio::test]
async fn http_catalog_loads_into_store() {
    let url = serve_once(concat!(
        "HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: 74\r\n",
        "Connection: close\r\n\r\n",
        r#"[{"id":"a","title":"Snake Classic","thumbnail":"a.png","url":"https://a"}]"#,
    ))
    .await;

    let source = CatalogSource::Url(url);
    let mut store = CatalogStore::new();
    store.apply_load(load_catalog(source.fetcher().as_ref()).await);

    assert_eq!(
        store.status(),
        &CatalogStatus::Ready {
            games: 1,
            skipped: 0
        }
    );
    store.select("a").unwrap();
    assert_eq!(store.selected().map(|e| e.title.as_str()), Some("Snake Classic"));
}
