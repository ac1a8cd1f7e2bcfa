//! Transfer failure taxonomy, one variant per phase of a transfer.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use super::remote::RemoteError;

/// Why a [`transfer`](super::transfer) call failed. Variants map onto the
/// phases of a transfer: argument validation, connect, destination open,
/// the copy loop, and cleanup.
#[derive(Debug, Error)]
pub enum TransferError {
    /// A required argument was empty; no I/O was attempted.
    #[error("{0} is required")]
    MissingArgument(&'static str),

    /// The source URL string did not parse.
    #[error("malformed source URL {input:?}")]
    InvalidUrl {
        input: String,
        #[source]
        source: url::ParseError,
    },

    /// The source stream could not be opened (DNS, refused connection,
    /// timeout, HTTP error status).
    #[error("failed to open source stream {url}")]
    Connect {
        url: String,
        #[source]
        source: RemoteError,
    },

    /// The destination file could not be created.
    #[error("failed to open destination file {}", .path.display())]
    OpenDestination {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The source stream failed mid-copy. The destination may hold a
    /// partial file of `bytes_copied` bytes.
    #[error("read from {url} failed after {bytes_copied} bytes")]
    Read {
        url: String,
        bytes_copied: u64,
        #[source]
        source: io::Error,
    },

    /// The destination write failed mid-copy.
    #[error("write to {} failed after {bytes_copied} bytes", .path.display())]
    Write {
        path: PathBuf,
        bytes_copied: u64,
        #[source]
        source: io::Error,
    },

    /// The destination could not be flushed/closed after an otherwise
    /// successful copy.
    #[error("failed to close destination file {}", .path.display())]
    Close {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
