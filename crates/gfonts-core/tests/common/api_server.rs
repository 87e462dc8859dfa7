//! Minimal HTTP/1.1 server standing in for the contents API and the raw
//! download host in integration tests.
//!
//! Serves canned responses by path (query ignored) and records every request
//! with its `Authorization` header. Unknown paths get a GitHub-style 404 body.

#![allow(dead_code)]

use std::collections::HashMap;
use std::io::{Read, Write};
use std::net::TcpListener;
use std::sync::{Arc, Mutex};
use std::thread;

#[derive(Debug, Clone)]
pub struct Route {
    pub status: u16,
    pub body: Vec<u8>,
    pub content_type: &'static str,
}

impl Route {
    pub fn json(body: impl Into<String>) -> Self {
        Self {
            status: 200,
            body: body.into().into_bytes(),
            content_type: "application/json",
        }
    }

    pub fn bytes(body: Vec<u8>) -> Self {
        Self {
            status: 200,
            body,
            content_type: "font/ttf",
        }
    }

    pub fn status(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into().into_bytes(),
            content_type: "application/json",
        }
    }

    pub fn not_found() -> Self {
        Self::status(
            404,
            r#"{"message": "Not Found", "documentation_url": "https://docs.github.com/rest", "status": "404"}"#,
        )
    }
}

/// A request the server received.
#[derive(Debug, Clone)]
pub struct Hit {
    /// Request target including the query string.
    pub target: String,
    pub authorization: Option<String>,
}

impl Hit {
    pub fn path(&self) -> &str {
        self.target.split('?').next().unwrap_or("")
    }
}

pub struct ApiServer {
    base: String,
    hits: Arc<Mutex<Vec<Hit>>>,
}

impl ApiServer {
    /// Starts a server in a background thread. `routes` receives the base URL
    /// (e.g. "http://127.0.0.1:12345") so bodies can link back to the server.
    pub fn start<F>(routes: F) -> Self
    where
        F: FnOnce(&str) -> Vec<(String, Route)>,
    {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
        let port = listener.local_addr().unwrap().port();
        let base = format!("http://127.0.0.1:{}", port);
        let routes: Arc<HashMap<String, Route>> = Arc::new(routes(&base).into_iter().collect());
        let hits = Arc::new(Mutex::new(Vec::new()));
        let hits_srv = Arc::clone(&hits);
        thread::spawn(move || {
            for stream in listener.incoming().flatten() {
                let routes = Arc::clone(&routes);
                let hits = Arc::clone(&hits_srv);
                thread::spawn(move || handle(stream, &routes, &hits));
            }
        });
        Self { base, hits }
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }

    pub fn hits(&self) -> Vec<Hit> {
        self.hits.lock().unwrap().clone()
    }

    /// Number of requests to `path` (query ignored).
    pub fn hit_count(&self, path: &str) -> usize {
        self.hits().iter().filter(|h| h.path() == path).count()
    }
}

fn handle(
    mut stream: std::net::TcpStream,
    routes: &HashMap<String, Route>,
    hits: &Mutex<Vec<Hit>>,
) {
    let _ = stream.set_read_timeout(Some(std::time::Duration::from_secs(2)));
    let _ = stream.set_write_timeout(Some(std::time::Duration::from_secs(2)));
    let mut buf = Vec::new();
    let mut chunk = [0u8; 4096];
    while !buf.windows(4).any(|w| w == b"\r\n\r\n") {
        match stream.read(&mut chunk) {
            Ok(0) | Err(_) => break,
            Ok(n) => buf.extend_from_slice(&chunk[..n]),
        }
    }
    let request = match std::str::from_utf8(&buf) {
        Ok(s) => s,
        Err(_) => return,
    };
    let Some(hit) = parse_request(request) else {
        return;
    };
    let route = routes
        .get(hit.path())
        .cloned()
        .unwrap_or_else(Route::not_found);
    hits.lock().unwrap().push(hit);

    let response = format!(
        "HTTP/1.1 {} {}\r\nContent-Type: {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
        route.status,
        reason(route.status),
        route.content_type,
        route.body.len()
    );
    let _ = stream.write_all(response.as_bytes());
    let _ = stream.write_all(&route.body);
}

fn parse_request(request: &str) -> Option<Hit> {
    let mut lines = request.lines();
    let target = lines.next()?.split_whitespace().nth(1)?.to_string();
    let mut authorization = None;
    for line in lines {
        let line = line.trim();
        if line.is_empty() {
            break;
        }
        if let Some((name, value)) = line.split_once(':') {
            if name.trim().eq_ignore_ascii_case("authorization") {
                authorization = Some(value.trim().to_string());
            }
        }
    }
    Some(Hit {
        target,
        authorization,
    })
}

fn reason(status: u16) -> &'static str {
    match status {
        200 => "OK",
        401 => "Unauthorized",
        403 => "Forbidden",
        404 => "Not Found",
        500 => "Internal Server Error",
        _ => "Unknown",
    }
}

/// Catalog JSON for `families`, each pointing at its listing on `base`.
pub fn catalog_json(base: &str, families: &[&str]) -> String {
    let entries: Vec<String> = families
        .iter()
        .map(|name| {
            format!(
                r#"{{"name": "{name}", "path": "ofl/{name}", "sha": "0", "size": 0,
                    "url": "{base}/repos/google/fonts/contents/ofl/{name}?ref=main",
                    "download_url": null, "type": "dir"}}"#
            )
        })
        .collect();
    format!("[{}]", entries.join(","))
}

/// Family listing JSON with one file entry per `(file name, download url)`.
pub fn listing_json(family: &str, files: &[(&str, String)]) -> String {
    let entries: Vec<String> = files
        .iter()
        .map(|(file, url)| {
            format!(
                r#"{{"name": "{file}", "path": "ofl/{family}/{file}", "size": 100,
                    "download_url": "{url}", "type": "file"}}"#
            )
        })
        .collect();
    format!("[{}]", entries.join(","))
}

pub const CONTENTS: &str = "/repos/google/fonts/contents";
