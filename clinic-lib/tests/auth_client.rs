//! `AuthClient` against a one-shot HTTP server on loopback.

use tokio::io::AsyncReadExt;
use tokio::io::AsyncWriteExt;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

use clinic_lib::auth::AuthApi;
use clinic_lib::auth::RegisterRequest;
use clinic_lib::form::RegistrationField;
use clinic_lib::form::RegistrationForm;
use clinic_lib::form::SubmitOutcome;
use clinic_lib::store::AuthStore;
use clinic_lib::AuthClient;

/// What the server saw.
struct Captured {
    head: String,
    body: String,
}

fn header_end(buf: &[u8]) -> Option<usize> {
    buf.windows(4).position(|w| w == b"\r\n\r\n")
}

fn content_length(head: &str) -> usize {
    head.lines()
        .find_map(|line| line.to_ascii_lowercase().strip_prefix("content-length:").map(|v| v.trim().to_string()))
        .and_then(|v| v.parse().ok())
        .unwrap_or(0)
}

/// Accepts one connection, records the request and answers with `status` and `body`.
async fn serve_once(status: &'static str, body: &'static str) -> (String, JoinHandle<Captured>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let base_url = format!("http://{}/apiPetNova/auth", listener.local_addr().unwrap());

    let handle = tokio::spawn(async move {
        let (mut stream, _) = listener.accept().await.unwrap();

        let mut buf = Vec::new();
        let mut chunk = [0u8; 1024];
        let (head, body_start) = loop {
            let n = stream.read(&mut chunk).await.unwrap();
            assert!(n > 0, "connection closed before request was complete");
            buf.extend_from_slice(&chunk[..n]);

            if let Some(end) = header_end(&buf) {
                let head = String::from_utf8_lossy(&buf[..end]).into_owned();
                let wanted = end + 4 + content_length(&head);
                while buf.len() < wanted {
                    let n = stream.read(&mut chunk).await.unwrap();
                    assert!(n > 0, "connection closed mid-body");
                    buf.extend_from_slice(&chunk[..n]);
                }
                break (head, end + 4);
            }
        };
        let request_body = String::from_utf8_lossy(&buf[body_start..]).into_owned();

        let response = format!(
            "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status,
            body.len(),
            body
        );
        stream.write_all(response.as_bytes()).await.unwrap();
        stream.shutdown().await.unwrap();

        Captured {
            head,
            body: request_body,
        }
    });

    (base_url, handle)
}

fn client(base_url: &str) -> AuthClient {
    AuthClient::builder().base_url(base_url).build().unwrap()
}

#[tokio::test]
async fn test_register_posts_json_and_accepts_200() {
    let (base_url, server) = serve_once("200 OK", r#"{"message":"User registered"}"#).await;
    let request = RegisterRequest::new("gabriel", "gabriel@gmail.com", "glenwood1310");

    let response = client(&base_url).register(&request).await.unwrap();
    assert_eq!(response.status, 200);
    assert_eq!(response.message.as_deref(), Some("User registered"));

    let seen = server.await.unwrap();
    assert!(
        seen.head.starts_with("POST /apiPetNova/auth/userRegister HTTP/1.1"),
        "unexpected request line: {}",
        seen.head
    );
    assert!(seen.head.to_ascii_lowercase().contains("content-type: application/json"));

    let body: serde_json::Value = serde_json::from_str(&seen.body).unwrap();
    assert_eq!(
        body,
        serde_json::json!({
            "username": "gabriel",
            "email": "gabriel@gmail.com",
            "password": "glenwood1310",
        })
    );
}

#[tokio::test]
async fn test_register_conflict_carries_server_message() {
    let (base_url, server) = serve_once("409 Conflict", r#"{"message":"Email already registered"}"#).await;
    let request = RegisterRequest::new("gabriel", "gabriel@gmail.com", "glenwood1310");

    let err = client(&base_url).register(&request).await.unwrap_err();
    assert_eq!(err.status_code(), Some(409));
    assert_eq!(err.server_message(), Some("Email already registered"));
    server.await.unwrap();
}

#[tokio::test]
async fn test_form_shows_server_message_from_http() {
    let (base_url, server) = serve_once("400 Bad Request", r#"{"message":"Username already exists"}"#).await;
    let api = client(&base_url);
    let mut store = AuthStore::auth();

    let mut form = RegistrationForm::new();
    form.set_field(RegistrationField::Username, "gabriel");
    form.set_field(RegistrationField::Email, "gabriel@gmail.com");
    form.set_field(RegistrationField::Password, "glenwood1310");

    assert_eq!(form.submit(&api, &mut store).await, SubmitOutcome::Failed);
    assert_eq!(form.errors().general.as_deref(), Some("Username already exists"));
    assert!(!store.state().show_loading);
    server.await.unwrap();
}
