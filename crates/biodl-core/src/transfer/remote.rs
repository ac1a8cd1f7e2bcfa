//! Blocking readable channel over a libcurl transfer.
//!
//! curl's easy interface pushes bytes into a callback; the copy loop wants
//! to pull them through `io::Read`. [`RemoteChannel`] bridges the two: the
//! transfer runs on a private worker thread and hands chunks over a bounded
//! channel, so a slow destination applies backpressure and memory use stays
//! bounded.

use std::io::{self, Read};
use std::sync::mpsc::{self, Receiver, SyncSender};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use curl::easy::Easy;
use thiserror::Error;
use url::Url;

use super::copy::CHUNK_SIZE;

/// In-flight chunks between the curl worker and the reader.
const CHANNEL_DEPTH: usize = 4;

/// Redirect cap; purl.obolibrary.org entries redirect at least once.
const MAX_REDIRECTS: u32 = 10;

/// Failure opening or reading the remote side of a transfer.
#[derive(Debug, Error)]
pub enum RemoteError {
    /// libcurl failed: DNS, refused connection, timeout, protocol error.
    #[error(transparent)]
    Curl(#[from] curl::Error),

    /// Server answered with a non-success HTTP status.
    #[error("HTTP {0}")]
    Http(u32),

    /// The transfer worker thread could not be spawned.
    #[error("failed to spawn transfer worker")]
    Spawn(#[source] io::Error),
}

type ChunkResult = Result<Vec<u8>, RemoteError>;

/// Readable byte channel for a single remote URL. One worker thread, one
/// curl handle; both are reclaimed when the channel is dropped.
pub struct RemoteChannel {
    rx: Option<Receiver<ChunkResult>>,
    worker: Option<JoinHandle<()>>,
    pending: Vec<u8>,
    pos: usize,
}

impl RemoteChannel {
    /// Opens `url` and blocks until the transfer produces its first chunk,
    /// reaches end-of-stream, or fails. Connect-phase failures (DNS,
    /// refused, timeout, HTTP >= 400) therefore surface here rather than
    /// from a later read.
    pub fn open(url: &Url, connect_timeout: Duration) -> Result<Self, RemoteError> {
        let (tx, rx) = mpsc::sync_channel::<ChunkResult>(CHANNEL_DEPTH);
        let url_str = url.to_string();
        let worker = thread::Builder::new()
            .name("biodl-remote".into())
            .spawn(move || run_worker(&url_str, connect_timeout, &tx))
            .map_err(RemoteError::Spawn)?;

        match rx.recv() {
            Ok(Ok(chunk)) => Ok(Self {
                rx: Some(rx),
                worker: Some(worker),
                pending: chunk,
                pos: 0,
            }),
            Ok(Err(err)) => {
                drop(rx);
                let _ = worker.join();
                Err(err)
            }
            // Sender gone without data or error: a zero-byte source.
            Err(mpsc::RecvError) => {
                let _ = worker.join();
                Ok(Self {
                    rx: None,
                    worker: None,
                    pending: Vec::new(),
                    pos: 0,
                })
            }
        }
    }

    /// Drops the receiver (which makes the worker's next send fail and
    /// aborts the curl transfer) and reaps the thread.
    fn shutdown(&mut self) {
        self.rx = None;
        if let Some(handle) = self.worker.take() {
            let _ = handle.join();
        }
    }
}

impl Read for RemoteChannel {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        loop {
            if self.pos < self.pending.len() {
                let n = (self.pending.len() - self.pos).min(buf.len());
                buf[..n].copy_from_slice(&self.pending[self.pos..self.pos + n]);
                self.pos += n;
                return Ok(n);
            }

            let rx = match self.rx.as_ref() {
                Some(rx) => rx,
                None => return Ok(0),
            };
            match rx.recv() {
                Ok(Ok(chunk)) => {
                    self.pending = chunk;
                    self.pos = 0;
                }
                Ok(Err(err)) => {
                    self.shutdown();
                    return Err(io::Error::new(io::ErrorKind::Other, err));
                }
                Err(mpsc::RecvError) => {
                    self.shutdown();
                    return Ok(0);
                }
            }
        }
    }
}

impl Drop for RemoteChannel {
    fn drop(&mut self) {
        self.shutdown();
    }
}

fn run_worker(url: &str, connect_timeout: Duration, tx: &SyncSender<ChunkResult>) {
    let mut easy = Easy::new();
    if let Err(e) = configure(&mut easy, url, connect_timeout) {
        let _ = tx.send(Err(e.into()));
        return;
    }

    let performed = {
        let mut transfer = easy.transfer();
        let hooked = transfer.write_function(|data| {
            match tx.send(Ok(data.to_vec())) {
                Ok(()) => Ok(data.len()),
                // Receiver gone: the caller abandoned the transfer.
                Err(_) => Ok(0), // abort transfer
            }
        });
        match hooked {
            Ok(()) => transfer.perform(),
            Err(e) => Err(e),
        }
    };

    if let Err(e) = performed {
        if e.is_write_error() {
            // Our own abort after the reader went away; nobody is listening.
            return;
        }
        let err = if e.is_http_returned_error() {
            match easy.response_code() {
                Ok(code) => RemoteError::Http(code),
                Err(_) => RemoteError::Curl(e),
            }
        } else {
            RemoteError::Curl(e)
        };
        let _ = tx.send(Err(err));
    }
    // Dropping tx signals end-of-stream to the reader.
}

fn configure(easy: &mut Easy, url: &str, connect_timeout: Duration) -> Result<(), curl::Error> {
    easy.url(url)?;
    easy.follow_location(true)?;
    easy.max_redirections(MAX_REDIRECTS)?;
    easy.fail_on_error(true)?;
    easy.buffer_size(CHUNK_SIZE)?;
    easy.connect_timeout(connect_timeout)?;
    Ok(())
}
