//! Minimal HTTP/1.1 chat-completion server for integration tests.
//!
//! Each request is answered by a responder closure given the 0-based request
//! number. The server counts requests and keeps the raw text of the last one.

use serde_json::json;
use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

/// What the server sends back: status, JSON body, and an optional delay.
#[derive(Debug, Clone)]
pub struct Reply {
    pub status: u16,
    pub body: String,
    pub delay: Duration,
}

impl Reply {
    pub fn json(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
            delay: Duration::ZERO,
        }
    }

    /// 200 with `choices[0].message.content = content`.
    pub fn content(content: &str) -> Self {
        let body = json!({
            "id": "chatcmpl-1",
            "object": "chat.completion",
            "choices": [{
                "index": 0,
                "message": {"role": "assistant", "content": content},
                "finish_reason": "stop",
            }],
        });
        Self::json(200, body.to_string())
    }

    pub fn api_error(status: u16, message: &str) -> Self {
        Self::json(status, json!({"error": {"message": message}}).to_string())
    }

    pub fn delayed(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }
}

pub struct ChatServer {
    pub url: String,
    hits: Arc<AtomicUsize>,
    last_request: Arc<Mutex<String>>,
}

impl ChatServer {
    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }

    /// Raw text (request line, headers, body) of the most recent request.
    pub fn last_request(&self) -> String {
        self.last_request.lock().unwrap().clone()
    }
}

/// Starts a server in a background thread. Runs until the process exits.
pub fn start<F>(responder: F) -> ChatServer
where
    F: Fn(usize) -> Reply + Send + Sync + 'static,
{
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    let hits = Arc::new(AtomicUsize::new(0));
    let last_request = Arc::new(Mutex::new(String::new()));
    let responder = Arc::new(responder);
    {
        let hits = Arc::clone(&hits);
        let last_request = Arc::clone(&last_request);
        thread::spawn(move || {
            for stream in listener.incoming().flatten() {
                let hits = Arc::clone(&hits);
                let last_request = Arc::clone(&last_request);
                let responder = Arc::clone(&responder);
                thread::spawn(move || {
                    let Some(request) = read_request(&stream) else {
                        return;
                    };
                    let n = hits.fetch_add(1, Ordering::SeqCst);
                    *last_request.lock().unwrap() = request;
                    write_reply(stream, &(*responder)(n));
                });
            }
        });
    }
    ChatServer {
        url: format!("http://127.0.0.1:{}/v1/chat/completions", port),
        hits,
        last_request,
    }
}

/// A URL on which nothing is listening.
pub fn refused_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{}/v1/chat/completions", port)
}

fn read_request(mut stream: &TcpStream) -> Option<String> {
    let _ = stream.set_read_timeout(Some(Duration::from_secs(5)));
    let mut data = Vec::new();
    let mut buf = [0u8; 8192];
    loop {
        let n = stream.read(&mut buf).ok()?;
        if n == 0 {
            return None;
        }
        data.extend_from_slice(&buf[..n]);
        if let Some(head_end) = find(&data, b"\r\n\r\n") {
            let head = String::from_utf8_lossy(&data[..head_end]).to_string();
            let body_len = content_length(&head);
            if data.len() >= head_end + 4 + body_len {
                return Some(String::from_utf8_lossy(&data).to_string());
            }
        }
    }
}

fn write_reply(mut stream: TcpStream, reply: &Reply) {
    if !reply.delay.is_zero() {
        thread::sleep(reply.delay);
    }
    let response = format!(
        "HTTP/1.1 {} X\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        reply.status,
        reply.body.len(),
        reply.body
    );
    let _ = stream.write_all(response.as_bytes());
}

fn content_length(head: &str) -> usize {
    head.lines()
        .filter_map(|l| l.split_once(':'))
        .find(|(name, _)| name.trim().eq_ignore_ascii_case("content-length"))
        .and_then(|(_, v)| v.trim().parse().ok())
        .unwrap_or(0)
}

fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack.windows(needle.len()).position(|w| w == needle)
}
