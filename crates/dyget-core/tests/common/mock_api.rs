//! Minimal HTTP/1.1 server standing in for the resolution API in integration tests.
//!
//! Answers every request with one canned status and body, and records the
//! request line and headers so tests can assert on what the client sent.

use std::io::{Read, Write};
use std::net::TcpListener;
use std::sync::{Arc, Mutex};
use std::thread;

/// A request as seen by the mock: `GET /path?query HTTP/1.1` plus header lines.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub request_line: String,
    pub headers: Vec<(String, String)>,
}

impl RecordedRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// Path and query from the request line.
    pub fn target(&self) -> &str {
        self.request_line.split_whitespace().nth(1).unwrap_or("")
    }
}

pub struct MockApi {
    /// Endpoint URL to configure the client with.
    pub endpoint: String,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl MockApi {
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }
}

/// Starts a server in a background thread answering `status` with `body`.
/// The server runs until the process exits.
pub fn start(status: u16, body: &str) -> MockApi {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    let requests = Arc::new(Mutex::new(Vec::new()));
    let body = Arc::new(body.to_string());
    {
        let requests = Arc::clone(&requests);
        thread::spawn(move || {
            for stream in listener.incoming().flatten() {
                let requests = Arc::clone(&requests);
                let body = Arc::clone(&body);
                thread::spawn(move || handle(stream, status, &body, &requests));
            }
        });
    }
    MockApi {
        endpoint: format!("http://127.0.0.1:{}/api/v1/douyin/web/fetch_one_video_by_share_url", port),
        requests,
    }
}

/// An endpoint on a port nothing listens on.
pub fn dead_endpoint() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{}/resolve", port)
}

fn handle(
    mut stream: std::net::TcpStream,
    status: u16,
    body: &str,
    requests: &Mutex<Vec<RecordedRequest>>,
) {
    let _ = stream.set_read_timeout(Some(std::time::Duration::from_secs(2)));
    let _ = stream.set_write_timeout(Some(std::time::Duration::from_secs(2)));

    let mut head = Vec::new();
    let mut buf = [0u8; 4096];
    while !head.windows(4).any(|w| w == b"\r\n\r\n") {
        match stream.read(&mut buf) {
            Ok(0) | Err(_) => break,
            Ok(n) => head.extend_from_slice(&buf[..n]),
        }
    }
    let Ok(text) = std::str::from_utf8(&head) else {
        return;
    };
    requests.lock().unwrap().push(parse_request(text));

    let response = format!(
        "HTTP/1.1 {} Mock\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        status,
        body.len(),
        body
    );
    let _ = stream.write_all(response.as_bytes());
}

fn parse_request(text: &str) -> RecordedRequest {
    let mut lines = text.lines();
    let request_line = lines.next().unwrap_or("").trim().to_string();
    let headers = lines
        .map(str::trim)
        .take_while(|l| !l.is_empty())
        .filter_map(|l| l.split_once(':'))
        .map(|(n, v)| (n.trim().to_string(), v.trim().to_string()))
        .collect();
    RecordedRequest {
        request_line,
        headers,
    }
}
