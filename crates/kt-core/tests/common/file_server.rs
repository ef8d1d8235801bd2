//! Minimal HTTP/1.1 server for integration tests.
//!
//! Serves bodies registered per path with a chosen status; unknown paths get 404.
//! Routes can be replaced while the server runs to simulate branch drift.

#![allow(dead_code)]

use std::collections::HashMap;
use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

type Routes = Arc<Mutex<HashMap<String, (u16, Vec<u8>)>>>;

pub struct FileServer {
    base_url: String,
    routes: Routes,
    hits: Arc<AtomicUsize>,
}

impl FileServer {
    /// Starts a server in a background thread. It runs until the process exits.
    pub fn start() -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
        let port = listener.local_addr().unwrap().port();
        let routes: Routes = Arc::new(Mutex::new(HashMap::new()));
        let hits = Arc::new(AtomicUsize::new(0));
        {
            let routes = Arc::clone(&routes);
            let hits = Arc::clone(&hits);
            thread::spawn(move || {
                for stream in listener.incoming().flatten() {
                    let routes = Arc::clone(&routes);
                    hits.fetch_add(1, Ordering::SeqCst);
                    thread::spawn(move || handle(stream, &routes));
                }
            });
        }
        Self {
            base_url: format!("http://127.0.0.1:{}/", port),
            routes,
            hits,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Serve `body` with 200 at `path` (absolute, e.g. `/o/r/b/src/index.css`).
    pub fn serve(&self, path: &str, body: &[u8]) {
        self.serve_status(path, 200, body);
    }

    pub fn serve_status(&self, path: &str, status: u16, body: &[u8]) {
        self.routes
            .lock()
            .unwrap()
            .insert(path.to_string(), (status, body.to_vec()));
    }

    /// Number of connections accepted so far.
    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }
}

/// Base URL of a port nothing listens on (connection refused).
pub fn closed_base_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{}/", port)
}

fn reason(status: u16) -> &'static str {
    match status {
        200 => "OK",
        403 => "Forbidden",
        404 => "Not Found",
        500 => "Internal Server Error",
        _ => "Unknown",
    }
}

fn handle(mut stream: TcpStream, routes: &Routes) {
    let _ = stream.set_read_timeout(Some(Duration::from_secs(2)));
    let _ = stream.set_write_timeout(Some(Duration::from_secs(2)));

    let mut request = Vec::new();
    let mut buf = [0u8; 4096];
    while !request.windows(4).any(|w| w == b"\r\n\r\n") {
        match stream.read(&mut buf) {
            Ok(0) | Err(_) => return,
            Ok(n) => request.extend_from_slice(&buf[..n]),
        }
    }
    let request = String::from_utf8_lossy(&request);
    let mut first = request.lines().next().unwrap_or("").split_whitespace();
    let method = first.next().unwrap_or("");
    let path = first.next().unwrap_or("/").to_string();

    if !method.eq_ignore_ascii_case("GET") {
        let _ = stream.write_all(b"HTTP/1.1 405 Method Not Allowed\r\nContent-Length: 0\r\nConnection: close\r\n\r\n");
        return;
    }

    let (status, body) = routes
        .lock()
        .unwrap()
        .get(&path)
        .cloned()
        .unwrap_or((404, b"404: Not Found".to_vec()));
    let head = format!(
        "HTTP/1.1 {} {}\r\nContent-Type: text/plain; charset=utf-8\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
        status,
        reason(status),
        body.len()
    );
    let _ = stream.write_all(head.as_bytes());
    let _ = stream.write_all(&body);
}
