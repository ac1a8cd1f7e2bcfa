//! Minimal HTTP/1.1 server for integration tests.
//!
//! Serves a single static body to every GET; optionally answers with a
//! fixed error status instead. Runs in a background thread until the test
//! process exits.

use std::io::{Read, Write};
use std::net::TcpListener;
use std::sync::Arc;
use std::thread;

/// Starts a server returning `body` with 200 OK. Returns the base URL,
/// e.g. "http://127.0.0.1:12345/data".
pub fn start(body: Vec<u8>) -> String {
    start_with_status(body, 200)
}

/// Like `start`, but every response uses `status` (e.g. 404).
pub fn start_with_status(body: Vec<u8>, status: u16) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    let body = Arc::new(body);
    thread::spawn(move || {
        for stream in listener.incoming().flatten() {
            let body = Arc::clone(&body);
            thread::spawn(move || handle(stream, &body, status));
        }
    });
    format!("http://127.0.0.1:{}/data", port)
}

/// An address nothing is listening on (bind, grab the port, drop).
pub fn refused_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{}/gone", port)
}

fn handle(mut stream: std::net::TcpStream, body: &[u8], status: u16) {
    let _ = stream.set_read_timeout(Some(std::time::Duration::from_secs(2)));
    let _ = stream.set_write_timeout(Some(std::time::Duration::from_secs(10)));

    // Read and discard the request head; one read is enough for curl's GET.
    let mut buf = [0u8; 8192];
    match stream.read(&mut buf) {
        Ok(0) | Err(_) => return,
        Ok(_) => {}
    }

    let reason = match status {
        200 => "OK",
        404 => "Not Found",
        500 => "Internal Server Error",
        _ => "Status",
    };
    let payload: &[u8] = if status == 200 { body } else { &[] };
    let head = format!(
        "HTTP/1.1 {} {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
        status,
        reason,
        payload.len()
    );
    if stream.write_all(head.as_bytes()).is_err() {
        return;
    }
    let _ = stream.write_all(payload);
}
