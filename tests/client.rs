//! Integration tests for the catalog HTTP client.
//!
//! Each test starts a one-shot HTTP responder on a local port, points the
//! client at it, and checks both the request that arrived and the parsed
//! result.
//!
//! Run with:
//!
//! ```bash
//! cargo test --test client
//! ```

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::sync::oneshot;

use usd_games_tui::messages::{NetworkCommand, NetworkResponse, Operation};
use usd_games_tui::network::actor::execute;
use usd_games_tui::{ApiError, CatalogClient, ItemDraft};

/// What the responder saw
#[derive(Debug)]
struct Captured {
    method: String,
    path: String,
    body: String,
}

/// Accept a single connection, record the request, reply with `status` and `body`.
async fn serve_once(status: u16, body: &'static str) -> (String, oneshot::Receiver<Captured>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let base_url = format!("http://{}", listener.local_addr().unwrap());
    let (tx, rx) = oneshot::channel();

    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();

        let mut buf = Vec::new();
        let mut chunk = [0u8; 1024];
        let header_end = loop {
            let n = socket.read(&mut chunk).await.unwrap();
            assert!(n > 0, "client closed before sending headers");
            buf.extend_from_slice(&chunk[..n]);
            if let Some(pos) = find(&buf, b"\r\n\r\n") {
                break pos + 4;
            }
        };

        let head = String::from_utf8_lossy(&buf[..header_end]).to_string();
        let content_length = head
            .lines()
            .filter_map(|line| line.split_once(':'))
            .find(|(name, _)| name.trim().eq_ignore_ascii_case("content-length"))
            .and_then(|(_, value)| value.trim().parse::<usize>().ok())
            .unwrap_or(0);

        while buf.len() < header_end + content_length {
            let n = socket.read(&mut chunk).await.unwrap();
            if n == 0 {
                break;
            }
            buf.extend_from_slice(&chunk[..n]);
        }

        let mut request_line = head.lines().next().unwrap_or_default().split_whitespace();
        let captured = Captured {
            method: request_line.next().unwrap_or_default().to_string(),
            path: request_line.next().unwrap_or_default().to_string(),
            body: String::from_utf8_lossy(&buf[header_end..]).to_string(),
        };
        let _ = tx.send(captured);

        let response = if status == 204 {
            "HTTP/1.1 204 No Content\r\nConnection: close\r\n\r\n".to_string()
        } else {
            format!(
                "HTTP/1.1 {} Test\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status,
                body.len(),
                body
            )
        };
        socket.write_all(response.as_bytes()).await.unwrap();
        let _ = socket.shutdown().await;
    });

    (base_url, rx)
}

fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack.windows(needle.len()).position(|w| w == needle)
}

fn draft() -> ItemDraft {
    ItemDraft {
        name: "Hollow Knight".into(),
        category: "Metroidvania".into(),
        platform: "Switch".into(),
        rating: "9.5".into(),
        image_url: "https://img.example.com/hk.png".into(),
    }
}

const HALO: &str = r#"{"id":1,"nome":"Halo","categoria":"Shooter","plataforma":"Xbox","classificacao":"9","imgUrl":"https://img.example.com/halo.png"}"#;

// ---------------------------------------------------------------------------
// Client operations
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_list_items() {
    let body = r#"[
        {"id":1,"nome":"Halo","categoria":"Shooter","plataforma":"Xbox","classificacao":"9","imgUrl":"https://img.example.com/halo.png"},
        {"id":2,"nome":"Celeste","categoria":"Platformer","plataforma":"PC","classificacao":"10","imgUrl":"https://img.example.com/celeste.png"}
    ]"#;
    let (base_url, seen) = serve_once(200, body).await;
    let client = CatalogClient::new(&base_url).unwrap();

    let items = client.list().await.unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0].name, "Halo");
    assert_eq!(items[1].id, 2);

    let req = seen.await.unwrap();
    assert_eq!(req.method, "GET");
    assert_eq!(req.path, "/jogos");
}

#[tokio::test]
async fn test_get_item() {
    let (base_url, seen) = serve_once(200, HALO).await;
    let client = CatalogClient::new(&format!("{}/", base_url)).unwrap();

    let item = client.get(1).await.unwrap();
    assert_eq!(item.platform, "Xbox");

    let req = seen.await.unwrap();
    assert_eq!(req.method, "GET");
    assert_eq!(req.path, "/jogos/1");
}

#[tokio::test]
async fn test_get_missing_item_is_status_error() {
    let (base_url, _seen) = serve_once(404, r#"{"error":"not found"}"#).await;
    let client = CatalogClient::new(&base_url).unwrap();

    match client.get(99).await {
        Err(ApiError::Status { status, body }) => {
            assert_eq!(status, 404);
            assert!(body.contains("not found"));
        }
        other => panic!("expected 404 status error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_create_sends_draft_without_id() {
    let created = r#"{"id":42,"nome":"Hollow Knight","categoria":"Metroidvania","plataforma":"Switch","classificacao":"9.5","imgUrl":"https://img.example.com/hk.png"}"#;
    let (base_url, seen) = serve_once(201, created).await;
    let client = CatalogClient::new(&base_url).unwrap();

    let item = client.create(&draft()).await.unwrap();
    assert_eq!(item.id, 42);

    let req = seen.await.unwrap();
    assert_eq!(req.method, "POST");
    assert_eq!(req.path, "/jogos");
    let sent: serde_json::Value = serde_json::from_str(&req.body).unwrap();
    assert_eq!(sent["nome"], "Hollow Knight");
    assert_eq!(sent["classificacao"], "9.5");
    assert!(sent.get("id").is_none());
}

#[tokio::test]
async fn test_update_targets_item_path() {
    let updated = r#"{"id":4,"nome":"Hollow Knight","categoria":"Metroidvania","plataforma":"Switch","classificacao":"9.5","imgUrl":"https://img.example.com/hk.png"}"#;
    let (base_url, seen) = serve_once(200, updated).await;
    let client = CatalogClient::new(&base_url).unwrap();

    let item = client.update(4, &draft()).await.unwrap();
    assert_eq!(item.id, 4);

    let req = seen.await.unwrap();
    assert_eq!(req.method, "PUT");
    assert_eq!(req.path, "/jogos/4");
    let sent: ItemDraft = serde_json::from_str(&req.body).unwrap();
    assert_eq!(sent, draft());
}

#[tokio::test]
async fn test_delete_item() {
    let (base_url, seen) = serve_once(204, "").await;
    let client = CatalogClient::new(&base_url).unwrap();

    client.delete(5).await.unwrap();

    let req = seen.await.unwrap();
    assert_eq!(req.method, "DELETE");
    assert_eq!(req.path, "/jogos/5");
}

#[tokio::test]
async fn test_server_error_on_create() {
    let (base_url, _seen) = serve_once(500, r#"{"message":"boom"}"#).await;
    let client = CatalogClient::new(&base_url).unwrap();

    let err = client.create(&draft()).await.unwrap_err();
    assert!(matches!(err, ApiError::Status { status: 500, .. }));
}

#[tokio::test]
async fn test_connection_refused_is_request_error() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let base_url = format!("http://{}", listener.local_addr().unwrap());
    drop(listener);

    let client = CatalogClient::new(&base_url).unwrap();
    let err = client.list().await.unwrap_err();
    assert!(matches!(err, ApiError::Request(_)));
}

// ---------------------------------------------------------------------------
// Network actor command execution
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_execute_delete_command() {
    let (base_url, seen) = serve_once(204, "").await;
    let client = CatalogClient::new(&base_url).unwrap();

    let response = execute(&client, NetworkCommand::Delete { id: 7, item_id: 5 }).await;
    assert_eq!(response, Some(NetworkResponse::Deleted { id: 7, item_id: 5 }));
    assert_eq!(seen.await.unwrap().path, "/jogos/5");
}

#[tokio::test]
async fn test_execute_failure_becomes_failed_response() {
    let (base_url, _seen) = serve_once(503, "{}").await;
    let client = CatalogClient::new(&base_url).unwrap();

    match execute(&client, NetworkCommand::List { id: 3 }).await {
        Some(NetworkResponse::Failed { id, op, message }) => {
            assert_eq!(id, 3);
            assert_eq!(op, Operation::List);
            assert!(message.contains("503"));
        }
        other => panic!("expected failure, got {:?}", other),
    }
}

#[tokio::test]
async fn test_execute_shutdown_is_not_a_request() {
    let client = CatalogClient::new("http://127.0.0.1:9").unwrap();
    assert!(execute(&client, NetworkCommand::Shutdown).await.is_none());
}
