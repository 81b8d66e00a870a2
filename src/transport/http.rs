//! HTTP transport backed by reqwest.

use std::time::{Duration, SystemTime, UNIX_EPOCH};

use async_trait::async_trait;
use reqwest::header::{ACCEPT, CACHE_CONTROL};
use reqwest::{Method, StatusCode};

use super::{CommandRequest, CommandTransport};
use crate::error::TransportError;

/// Form-encoded command submission over HTTP.
pub struct HttpTransport {
    http: reqwest::Client,
}

impl HttpTransport {
    /// Build a transport whose requests fail with a timeout after `timeout`.
    pub fn new(timeout: Duration) -> Self {
        Self {
            http: build_http_client(timeout),
        }
    }
}

/// Build an HTTP client with timeout applied.
fn build_http_client(timeout: Duration) -> reqwest::Client {
    // Fall back to reqwest defaults if builder creation fails for any reason.
    reqwest::Client::builder()
        .timeout(timeout)
        .build()
        .unwrap_or_else(|_| reqwest::Client::new())
}

/// Unique query value that keeps GET responses out of caches.
fn cache_buster() -> String {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis()
        .to_string()
}

#[async_trait]
impl CommandTransport for HttpTransport {
    async fn send(&self, request: &CommandRequest) -> Result<String, TransportError> {
        let method = Method::from_bytes(request.method.as_bytes())
            .map_err(|_| TransportError::InvalidMethod(request.method.clone()))?;

        // GET and HEAD carry the fields in the query string, like a form would.
        let builder = if method == Method::GET || method == Method::HEAD {
            self.http
                .request(method, &request.url)
                .query(&request.fields)
                .query(&[("_", cache_buster())])
        } else {
            self.http
                .request(method, &request.url)
                .form(&request.fields)
        };

        tracing::debug!(url = %request.url, method = %request.method, "dispatching command");
        let response = builder
            .header(CACHE_CONTROL, "no-cache")
            .header(ACCEPT, "text/plain, */*; q=0.01")
            .send()
            .await?;

        let status = response.status();
        if status == StatusCode::NOT_MODIFIED || !status.is_success() {
            return Err(TransportError::Status(status.as_u16()));
        }

        let bytes = response.bytes().await?;
        String::from_utf8(bytes.to_vec()).map_err(|e| TransportError::Decode(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::FailureKind;
    use std::collections::BTreeMap;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    /// Serve exactly one canned response and hand back the raw request.
    async fn serve_once(response: &'static [u8]) -> (String, tokio::task::JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let handle = tokio::spawn(async move {
            let (mut stream, _) = listener.accept().await.expect("accept");
            let raw = read_request(&mut stream).await;
            stream.write_all(response).await.expect("write");
            stream.shutdown().await.ok();
            raw
        });
        (format!("http://{addr}/cmd"), handle)
    }

    /// Read headers plus a `Content-Length` body.
    async fn read_request(stream: &mut tokio::net::TcpStream) -> String {
        let mut raw = Vec::new();
        let mut buf = [0u8; 4096];
        loop {
            let n = stream.read(&mut buf).await.expect("read");
            if n == 0 {
                break;
            }
            raw.extend_from_slice(&buf[..n]);
            let text = String::from_utf8_lossy(&raw).into_owned();
            let Some(header_end) = text.find("\r\n\r\n") else {
                continue;
            };
            let content_length = text[..header_end]
                .lines()
                .filter_map(|line| line.split_once(':'))
                .find(|(name, _)| name.trim().eq_ignore_ascii_case("content-length"))
                .and_then(|(_, value)| value.trim().parse::<usize>().ok())
                .unwrap_or(0);
            if raw.len() >= header_end + 4 + content_length {
                break;
            }
        }
        String::from_utf8_lossy(&raw).into_owned()
    }

    fn request(url: String, method: &str, input: &str) -> CommandRequest {
        let mut fields = BTreeMap::new();
        fields.insert("input".to_string(), input.to_string());
        CommandRequest {
            url,
            method: method.to_string(),
            fields,
        }
    }

    #[tokio::test]
    async fn post_sends_form_body_and_returns_text() {
        let (url, server) = serve_once(
            b"HTTP/1.1 200 OK\r\nContent-Type: text/plain\r\nContent-Length: 5\r\nConnection: close\r\n\r\nhello",
        )
        .await;
        let transport = HttpTransport::new(Duration::from_secs(5));
        let body = transport
            .send(&request(url, "POST", "echo a&b"))
            .await
            .unwrap();
        assert_eq!(body, "hello");

        let raw = server.await.unwrap();
        assert!(raw.starts_with("POST /cmd "), "got: {raw}");
        assert!(raw.contains("application/x-www-form-urlencoded"));
        assert!(raw.contains("input=echo+a%26b"), "got: {raw}");
        assert!(raw.to_ascii_lowercase().contains("cache-control: no-cache"));
    }

    #[tokio::test]
    async fn get_sends_fields_in_query_with_cache_buster() {
        let (url, server) = serve_once(
            b"HTTP/1.1 200 OK\r\nContent-Length: 2\r\nConnection: close\r\n\r\nok",
        )
        .await;
        let transport = HttpTransport::new(Duration::from_secs(5));
        transport.send(&request(url, "GET", "ls")).await.unwrap();

        let raw = server.await.unwrap();
        let request_line = raw.lines().next().unwrap_or_default();
        assert!(request_line.starts_with("GET /cmd?input=ls&_="), "got: {request_line}");
    }

    #[tokio::test]
    async fn server_error_is_generic_failure() {
        let (url, _server) = serve_once(
            b"HTTP/1.1 500 Internal Server Error\r\nContent-Length: 0\r\nConnection: close\r\n\r\n",
        )
        .await;
        let transport = HttpTransport::new(Duration::from_secs(5));
        let err = transport.send(&request(url, "POST", "x")).await.unwrap_err();
        assert_eq!(err.failure_kind(), FailureKind::GenericError);
    }

    #[tokio::test]
    async fn not_modified_is_classified() {
        let (url, _server) =
            serve_once(b"HTTP/1.1 304 Not Modified\r\nConnection: close\r\n\r\n").await;
        let transport = HttpTransport::new(Duration::from_secs(5));
        let err = transport.send(&request(url, "POST", "x")).await.unwrap_err();
        assert_eq!(err.failure_kind(), FailureKind::NotModified);
    }

    #[tokio::test]
    async fn non_utf8_body_is_parse_failure() {
        let (url, _server) = serve_once(
            b"HTTP/1.1 200 OK\r\nContent-Length: 2\r\nConnection: close\r\n\r\n\xff\xfe",
        )
        .await;
        let transport = HttpTransport::new(Duration::from_secs(5));
        let err = transport.send(&request(url, "POST", "x")).await.unwrap_err();
        assert_eq!(err.failure_kind(), FailureKind::ParseError);
    }

    #[tokio::test]
    async fn slow_server_is_timeout_failure() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        // Accept and hold the connection open so the client hits its timeout.
        let _accept = tokio::spawn(async move {
            let (_stream, _) = listener.accept().await.expect("accept");
            tokio::time::sleep(Duration::from_secs(5)).await;
        });

        let transport = HttpTransport::new(Duration::from_millis(50));
        let err = transport
            .send(&request(format!("http://{addr}/"), "POST", "x"))
            .await
            .unwrap_err();
        assert_eq!(err.failure_kind(), FailureKind::Timeout, "got: {err}");
    }

    #[tokio::test]
    async fn invalid_method_never_touches_the_network() {
        let transport = HttpTransport::new(Duration::from_secs(1));
        let err = transport
            .send(&request("http://127.0.0.1:9/".into(), "NOT A METHOD", "x"))
            .await
            .unwrap_err();
        assert!(matches!(err, TransportError::InvalidMethod(_)));
    }
}
