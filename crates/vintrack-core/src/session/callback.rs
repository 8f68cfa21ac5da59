//! One-shot loopback HTTP listener receiving the OAuth redirect.
//!
//! The identity service redirects the browser to
//! `http://127.0.0.1:<port>/callback?code=...`; we accept connections until
//! that request arrives, answer it with a small page and hand the code back.

use std::time::Duration;

use reqwest::Url;
use tokio::io::{AsyncBufReadExt, AsyncReadExt, AsyncWriteExt, BufReader};
use tokio::net::TcpListener;
use tracing::debug;

use crate::error::{VintrackError, VintrackResult};

/// Path the identity service redirects to
pub const CALLBACK_PATH: &str = "/callback";

/// Time a connection gets to send its request line before it is dropped
const REQUEST_READ_TIMEOUT: Duration = Duration::from_secs(2);
/// Upper bound on the bytes read from one connection
const MAX_REQUEST_BYTES: u64 = 8192;

const SUCCESS_PAGE: &str = "<!doctype html><html><body style=\"background:#000;color:#fff;font-family:sans-serif;text-align:center;padding-top:20vh\">\
<h1>Connexion réussie</h1><p>Vous pouvez fermer cet onglet et retourner sur VinTrack.</p></body></html>";

const FAILURE_PAGE: &str = "<!doctype html><html><body style=\"background:#000;color:#fff;font-family:sans-serif;text-align:center;padding-top:20vh\">\
<h1>Connexion impossible</h1><p>Retournez sur VinTrack pour réessayer.</p></body></html>";

/// Interpret the request target of an incoming redirect.
///
/// Returns `Ok(Some(code))` for the callback carrying an authorization code,
/// `Ok(None)` for unrelated requests (favicon and the like), and an error
/// when the identity service reported a failure or the code is missing.
pub fn parse_callback_target(target: &str) -> VintrackResult<Option<String>> {
    let url = Url::parse(&format!("http://127.0.0.1{}", target))
        .map_err(|e| VintrackError::Callback(format!("{}: {}", target, e)))?;

    if url.path() != CALLBACK_PATH {
        return Ok(None);
    }

    let mut code = None;
    let mut error = None;
    for (key, value) in url.query_pairs() {
        match key.as_ref() {
            "code" if !value.is_empty() => code = Some(value.into_owned()),
            "error_description" => error = Some(value.into_owned()),
            "error" if error.is_none() => error = Some(value.into_owned()),
            _ => {}
        }
    }

    if let Some(message) = error {
        return Err(VintrackError::Auth(message));
    }
    code.map(Some)
        .ok_or_else(|| VintrackError::Callback("redirect carried no authorization code".to_string()))
}

/// Accept connections on `listener` until the OAuth redirect arrives.
///
/// Connections that stay silent (browsers preconnect speculatively) are
/// dropped after `REQUEST_READ_TIMEOUT` so they cannot hold up the redirect.
pub(crate) async fn await_authorization_code(listener: TcpListener) -> VintrackResult<String> {
    loop {
        let (mut stream, peer) = listener.accept().await?;
        let (reader, mut writer) = stream.split();
        let mut reader = BufReader::new(reader.take(MAX_REQUEST_BYTES));

        let mut request_line = String::new();
        match tokio::time::timeout(REQUEST_READ_TIMEOUT, reader.read_line(&mut request_line)).await {
            Ok(Ok(_)) => {}
            Ok(Err(e)) => {
                debug!(%peer, "Unreadable loopback request: {}", e);
                continue;
            }
            Err(_) => {
                debug!(%peer, "Idle loopback connection dropped");
                continue;
            }
        }
        let target = request_line.split_whitespace().nth(1).unwrap_or("/");
        debug!(%peer, %target, "Loopback request");

        let outcome = parse_callback_target(target);
        let (status, body) = match &outcome {
            Ok(Some(_)) => ("200 OK", SUCCESS_PAGE),
            Ok(None) => ("404 Not Found", ""),
            Err(_) => ("400 Bad Request", FAILURE_PAGE),
        };
        let response = format!(
            "HTTP/1.1 {}\r\nContent-Type: text/html; charset=utf-8\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status,
            body.len(),
            body
        );
        if let Err(e) = writer.write_all(response.as_bytes()).await {
            debug!(%peer, "Could not answer loopback request: {}", e);
        }
        let _ = writer.flush().await;

        if let Some(code) = outcome? {
            return Ok(code);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::net::TcpStream;

    #[test]
    fn test_parse_code() {
        let code = parse_callback_target("/callback?code=abc-123").unwrap();
        assert_eq!(code.as_deref(), Some("abc-123"));
    }

    #[test]
    fn test_parse_unrelated_path() {
        assert_eq!(parse_callback_target("/favicon.ico").unwrap(), None);
    }

    #[test]
    fn test_parse_error_description() {
        let err = parse_callback_target(
            "/callback?error=access_denied&error_description=The+user+denied+access",
        )
        .unwrap_err();
        match err {
            VintrackError::Auth(msg) => assert_eq!(msg, "The user denied access"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_parse_missing_code() {
        assert!(matches!(
            parse_callback_target("/callback?state=x"),
            Err(VintrackError::Callback(_))
        ));
    }

    #[tokio::test]
    async fn test_listener_returns_code_after_unrelated_request() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let server = tokio::spawn(await_authorization_code(listener));

        let mut favicon = TcpStream::connect(addr).await.unwrap();
        favicon
            .write_all(b"GET /favicon.ico HTTP/1.1\r\nHost: localhost\r\n\r\n")
            .await
            .unwrap();
        let mut reply = String::new();
        favicon.read_to_string(&mut reply).await.unwrap();
        assert!(reply.starts_with("HTTP/1.1 404"));

        let mut browser = TcpStream::connect(addr).await.unwrap();
        browser
            .write_all(b"GET /callback?code=xyz HTTP/1.1\r\nHost: localhost\r\n\r\n")
            .await
            .unwrap();
        let mut reply = String::new();
        browser.read_to_string(&mut reply).await.unwrap();
        assert!(reply.starts_with("HTTP/1.1 200"));

        assert_eq!(server.await.unwrap().unwrap(), "xyz");
    }

    #[tokio::test]
    async fn test_idle_connection_does_not_block_callback() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let server = tokio::spawn(await_authorization_code(listener));

        // Speculative preconnect that never sends a request
        let _idle = TcpStream::connect(addr).await.unwrap();

        let mut browser = TcpStream::connect(addr).await.unwrap();
        browser
            .write_all(b"GET /callback?code=xyz HTTP/1.1\r\nHost: localhost\r\n\r\n")
            .await
            .unwrap();
        let mut reply = String::new();
        tokio::time::timeout(Duration::from_secs(10), browser.read_to_string(&mut reply))
            .await
            .unwrap()
            .unwrap();
        assert!(reply.starts_with("HTTP/1.1 200"));

        let code = tokio::time::timeout(Duration::from_secs(10), server)
            .await
            .unwrap()
            .unwrap()
            .unwrap();
        assert_eq!(code, "xyz");
    }

    #[tokio::test]
    async fn test_oversized_request_line_is_dropped() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let server = tokio::spawn(await_authorization_code(listener));

        let mut flood = TcpStream::connect(addr).await.unwrap();
        let long_target = format!("GET /{} HTTP/1.1\r\n\r\n", "a".repeat(20_000));
        let _ = flood.write_all(long_target.as_bytes()).await;
        let mut reply = Vec::new();
        let _ = flood.read_to_end(&mut reply).await;

        let mut browser = TcpStream::connect(addr).await.unwrap();
        browser
            .write_all(b"GET /callback?code=abc HTTP/1.1\r\nHost: localhost\r\n\r\n")
            .await
            .unwrap();
        let mut reply = String::new();
        browser.read_to_string(&mut reply).await.unwrap();
        assert!(reply.starts_with("HTTP/1.1 200"));
        assert_eq!(server.await.unwrap().unwrap(), "abc");
    }
}
