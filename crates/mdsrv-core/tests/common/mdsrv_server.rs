//! Minimal HTTP/1.1 stand-in for the MDsrv routes used by integration tests.
//!
//! Serves one fixed trajectory (`cwd/md.xtc`, 3 frames of 2 atoms) plus a
//! two-level directory listing, and records every request it sees.

use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::{Arc, Mutex};
use std::thread;

pub const NUM_FRAMES: usize = 3;
pub const NUM_ATOMS: usize = 2;

/// One request as seen by the server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Seen {
    pub method: String,
    pub path: String,
    pub body: String,
}

pub struct MdsrvServer {
    /// e.g. "http://127.0.0.1:12345/"
    pub base_url: String,
    seen: Arc<Mutex<Vec<Seen>>>,
}

impl MdsrvServer {
    pub fn seen(&self) -> Vec<Seen> {
        self.seen.lock().unwrap().clone()
    }
}

/// Starts the server in a background thread. It runs until the process exits.
pub fn start() -> MdsrvServer {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    let seen = Arc::new(Mutex::new(Vec::new()));
    let seen_srv = Arc::clone(&seen);
    thread::spawn(move || {
        for stream in listener.incoming().flatten() {
            let seen = Arc::clone(&seen_srv);
            thread::spawn(move || handle(stream, &seen));
        }
    });
    MdsrvServer {
        base_url: format!("http://127.0.0.1:{}/", port),
        seen,
    }
}

/// Position of atom `atom` in frame `frame`.
pub fn coord(frame: usize, atom: usize) -> [f32; 3] {
    let f = frame as f32;
    let a = atom as f32;
    [f + a, f * 10.0 + a, -(f + 1.0)]
}

fn handle(mut stream: TcpStream, seen: &Mutex<Vec<Seen>>) {
    let _ = stream.set_read_timeout(Some(std::time::Duration::from_secs(2)));
    let _ = stream.set_write_timeout(Some(std::time::Duration::from_secs(2)));
    let (method, path, body) = match read_request(&mut stream) {
        Some(r) => r,
        None => return,
    };
    seen.lock().unwrap().push(Seen {
        method: method.clone(),
        path: path.clone(),
        body: body.clone(),
    });

    let (status, payload) = route(&method, &path, &body);
    let head = format!(
        "HTTP/1.1 {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
        status,
        payload.len()
    );
    let _ = stream.write_all(head.as_bytes());
    let _ = stream.write_all(&payload);
}

fn route(method: &str, path: &str, body: &str) -> (&'static str, Vec<u8>) {
    let segments: Vec<&str> = path.trim_start_matches('/').split('/').collect();
    match (method, segments.as_slice()) {
        ("GET", ["dir", ""]) => ok(br#"[{"name":"cwd","path":"cwd","dir":true,"restricted":false}]"#.to_vec()),
        ("GET", ["dir", "cwd"]) => ok(br#"[{"name":"..","path":"","dir":true},{"name":"md.xtc","path":"cwd/md.xtc","size":1024}]"#.to_vec()),
        ("GET", ["dir", "broken"]) => ok(b"[{".to_vec()),
        ("GET", ["traj", "numframes", "cwd", "md.xtc"]) => ok(format!("{}", NUM_FRAMES).into_bytes()),
        ("POST", ["traj", "frame", idx, "cwd", "md.xtc"]) => match idx.parse::<usize>() {
            Ok(i) if i < NUM_FRAMES => ok(frame_body(i, body)),
            _ => not_found(),
        },
        ("POST", ["traj", "path", idx, "cwd", "md.xtc"]) => match idx.parse::<usize>() {
            Ok(a) if a < NUM_ATOMS => ok(path_body(a)),
            _ => not_found(),
        },
        _ => not_found(),
    }
}

fn ok(payload: Vec<u8>) -> (&'static str, Vec<u8>) {
    ("200 OK", payload)
}

fn not_found() -> (&'static str, Vec<u8>) {
    ("404 Not Found", b"not found".to_vec())
}

/// Every atom of `frame`. The `atomIndices` form is accepted but, like the
/// real trajectory backend, not applied.
fn frame_body(frame: usize, _form: &str) -> Vec<u8> {
    let mut out = (NUM_FRAMES as i32).to_le_bytes().to_vec();
    out.extend_from_slice(&(frame as f32 * 0.5).to_le_bytes());
    for i in 0..9 {
        let v: f32 = if i % 4 == 0 { 0.1 } else { 0.0 };
        out.extend_from_slice(&v.to_le_bytes());
    }
    for a in 0..NUM_ATOMS {
        for v in coord(frame, a) {
            out.extend_from_slice(&v.to_le_bytes());
        }
    }
    out
}

fn path_body(atom: usize) -> Vec<u8> {
    let mut out = Vec::new();
    for f in 0..NUM_FRAMES {
        for v in coord(f, atom) {
            out.extend_from_slice(&v.to_le_bytes());
        }
    }
    out
}

/// Reads request line, headers and a `Content-Length` body.
fn read_request(stream: &mut TcpStream) -> Option<(String, String, String)> {
    let mut data = Vec::new();
    let mut buf = [0u8; 4096];
    let header_end = loop {
        let n = stream.read(&mut buf).ok()?;
        if n == 0 {
            return None;
        }
        data.extend_from_slice(&buf[..n]);
        if let Some(pos) = data.windows(4).position(|w| w == b"\r\n\r\n") {
            break pos + 4;
        }
    };

    let head = std::str::from_utf8(&data[..header_end]).ok()?.to_string();
    let mut lines = head.lines();
    let mut request_line = lines.next()?.split_whitespace();
    let method = request_line.next()?.to_string();
    let path = request_line.next()?.to_string();
    let content_length = lines
        .filter_map(|l| l.split_once(':'))
        .find(|(name, _)| name.trim().eq_ignore_ascii_case("content-length"))
        .and_then(|(_, v)| v.trim().parse::<usize>().ok())
        .unwrap_or(0);

    while data.len() < header_end + content_length {
        let n = stream.read(&mut buf).ok()?;
        if n == 0 {
            break;
        }
        data.extend_from_slice(&buf[..n]);
    }
    let end = (header_end + content_length).min(data.len());
    let body = String::from_utf8_lossy(&data[header_end..end]).into_owned();
    Some((method, path, body))
}
