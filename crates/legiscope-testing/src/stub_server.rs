//! One-shot scripted HTTP server for client tests.
//!
//! Binds `127.0.0.1:0`, serves a fixed script of responses in order (one per
//! connection), records what it received, and stops. Enough HTTP/1.1 to
//! satisfy reqwest; not a general server.

use std::io::{Read, Write};
use std::net::{SocketAddr, TcpListener, TcpStream};
use std::thread::JoinHandle;

/// A scripted response: status code plus a JSON body.
#[derive(Debug, Clone)]
pub struct StubResponse {
    pub status: u16,
    pub body: String,
}

impl StubResponse {
    pub fn json(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn ok(body: impl Into<String>) -> Self {
        Self::json(200, body)
    }
}

/// What one connection actually sent.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: String,
    /// Path including the query string, as it appeared on the request line.
    pub target: String,
    pub body: String,
}

pub struct StubServer {
    addr: SocketAddr,
    handle: Option<JoinHandle<Vec<RecordedRequest>>>,
}

impl StubServer {
    /// Start serving `script` responses, one per incoming connection.
    pub fn start(script: Vec<StubResponse>) -> std::io::Result<Self> {
        let listener = TcpListener::bind("127.0.0.1:0")?;
        let addr = listener.local_addr()?;

        let handle = std::thread::spawn(move || {
            let mut recorded = Vec::new();
            for response in script {
                match listener.accept() {
                    Ok((stream, _)) => {
                        if let Some(request) = serve_one(stream, &response) {
                            recorded.push(request);
                        }
                    }
                    Err(_) => break,
                }
            }
            recorded
        });

        Ok(Self {
            addr,
            handle: Some(handle),
        })
    }

    /// Base URL to point a client at, e.g. `http://127.0.0.1:49152`.
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Wait for the whole script to be consumed and return what was received.
    ///
    /// Call only after issuing as many requests as there were scripted
    /// responses, otherwise this blocks on the next accept.
    pub fn finish(mut self) -> Vec<RecordedRequest> {
        self.handle
            .take()
            .map(|h| h.join().unwrap_or_default())
            .unwrap_or_default()
    }
}

fn serve_one(mut stream: TcpStream, response: &StubResponse) -> Option<RecordedRequest> {
    let raw = read_request(&mut stream)?;
    let request = parse_request(&raw)?;

    let reason = match response.status {
        200 => "OK",
        400 => "Bad Request",
        404 => "Not Found",
        500 => "Internal Server Error",
        _ => "Unknown",
    };
    let payload = format!(
        "HTTP/1.1 {} {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        response.status,
        reason,
        response.body.len(),
        response.body
    );
    let _ = stream.write_all(payload.as_bytes());
    let _ = stream.flush();

    Some(request)
}

/// Read headers plus a Content-Length body (requests without one end at the
/// blank line).
fn read_request(stream: &mut TcpStream) -> Option<Vec<u8>> {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 4096];

    let header_end = loop {
        match stream.read(&mut chunk) {
            Ok(0) => return if buf.is_empty() { None } else { Some(buf) },
            Ok(n) => {
                buf.extend_from_slice(&chunk[..n]);
                if let Some(pos) = find_header_end(&buf) {
                    break pos;
                }
            }
            Err(_) => return None,
        }
    };

    let headers = String::from_utf8_lossy(&buf[..header_end]).to_string();
    let content_length = headers
        .lines()
        .find_map(|line| {
            let (name, value) = line.split_once(':')?;
            if name.eq_ignore_ascii_case("content-length") {
                value.trim().parse::<usize>().ok()
            } else {
                None
            }
        })
        .unwrap_or(0);

    let body_start = header_end + 4;
    while buf.len() < body_start + content_length {
        match stream.read(&mut chunk) {
            Ok(0) => break,
            Ok(n) => buf.extend_from_slice(&chunk[..n]),
            Err(_) => break,
        }
    }

    Some(buf)
}

fn find_header_end(buf: &[u8]) -> Option<usize> {
    buf.windows(4).position(|w| w == b"\r\n\r\n")
}

fn parse_request(raw: &[u8]) -> Option<RecordedRequest> {
    let header_end = find_header_end(raw)?;
    let head = String::from_utf8_lossy(&raw[..header_end]);
    let mut parts = head.lines().next()?.split_whitespace();
    let method = parts.next()?.to_string();
    let target = parts.next()?.to_string();
    let body = String::from_utf8_lossy(&raw[header_end + 4..]).to_string();

    Some(RecordedRequest {
        method,
        target,
        body,
    })
}
