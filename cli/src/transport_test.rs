use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

use super::*;

async fn read_head(stream: &mut tokio::net::TcpStream) -> String {
    let mut head = Vec::new();
    let mut buf = [0_u8; 1024];
    while !head.windows(4).any(|w| w == b"\r\n\r\n") {
        let n = stream.read(&mut buf).await.unwrap();
        if n == 0 {
            break;
        }
        head.extend_from_slice(&buf[..n]);
    }
    String::from_utf8_lossy(&head).into_owned()
}

// =============================================================
// method
// =============================================================

#[test]
fn method_maps_to_reqwest() {
    assert_eq!(method(HttpMethod::Get), reqwest::Method::GET);
    assert_eq!(method(HttpMethod::Post), reqwest::Method::POST);
}

// =============================================================
// send
// =============================================================

#[tokio::test]
async fn send_returns_status_and_body_with_headers_forwarded() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let server = tokio::spawn(async move {
        let (mut stream, _) = listener.accept().await.unwrap();
        let head = read_head(&mut stream).await;
        let body = r#"{"message":"Seat already booked"}"#;
        let response = format!(
            "HTTP/1.1 409 Conflict\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
            body.len()
        );
        stream.write_all(response.as_bytes()).await.unwrap();
        head
    });

    let transport = ReqwestTransport::new(Duration::from_secs(5)).unwrap();
    let request = ApiRequest::get(format!("http://{addr}/api/shows/3/seats")).with_header("Idempotency-Key", "k-1");
    let response = transport.send(request).await.unwrap();

    assert_eq!(response.status, 409);
    assert_eq!(response.body, r#"{"message":"Seat already booked"}"#);
    let head = server.await.unwrap().to_ascii_lowercase();
    assert!(head.starts_with("get /api/shows/3/seats"));
    assert!(head.contains("idempotency-key: k-1"));
}

#[tokio::test]
async fn send_reports_timeout_when_server_stalls() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        let (stream, _) = listener.accept().await.unwrap();
        tokio::time::sleep(Duration::from_secs(10)).await;
        drop(stream);
    });

    let transport = ReqwestTransport::new(Duration::from_millis(200)).unwrap();
    let result = transport.send(ApiRequest::get(format!("http://{addr}/api/movies"))).await;
    assert_eq!(result, Err(ApiError::Timeout));
}

#[tokio::test]
async fn send_reports_transport_error_when_nothing_listens() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let transport = ReqwestTransport::new(Duration::from_secs(5)).unwrap();
    let result = transport.send(ApiRequest::get(format!("http://{addr}/api/movies"))).await;
    assert!(matches!(result, Err(ApiError::Transport(_))));
}
