//! Streaming transfer engine: remote URL to local file.
//!
//! One call copies one URL to one path through a fixed-size chunk buffer,
//! synchronously, and closes both endpoints exactly once on every exit
//! path. No retries, no resume, no integrity check; a failed transfer may
//! leave a partial file at the destination.

mod copy;
mod error;
mod remote;

pub use copy::CHUNK_SIZE;
pub use error::TransferError;
pub use remote::{RemoteChannel, RemoteError};

use std::fs::File;
use std::path::{Path, PathBuf};
use std::time::Duration;

use url::Url;

use copy::CopyError;

/// Connect timeout used by [`transfer`]; [`transfer_with_timeout`] lets the
/// caller pick their own.
pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(30);

/// Downloads `source` to `destination` with the default connect timeout.
pub fn transfer(source: &str, destination: &Path) -> Result<PathBuf, TransferError> {
    transfer_with_timeout(source, destination, DEFAULT_CONNECT_TIMEOUT)
}

/// Downloads `source` (an HTTP/HTTPS/FTP URL) to `destination`, creating or
/// truncating the file. On success the destination holds the byte-identical
/// content of the source stream and its path is returned unchanged.
///
/// Both the remote stream and the destination file are closed exactly once
/// before this returns, whether the copy succeeded or not. When both a copy
/// error and a close error occur, the copy error is surfaced and the close
/// failure is logged as a secondary diagnostic.
pub fn transfer_with_timeout(
    source: &str,
    destination: &Path,
    connect_timeout: Duration,
) -> Result<PathBuf, TransferError> {
    if source.trim().is_empty() {
        return Err(TransferError::MissingArgument("source URL"));
    }
    if destination.as_os_str().is_empty() {
        return Err(TransferError::MissingArgument("destination path"));
    }
    let url = Url::parse(source).map_err(|source_err| TransferError::InvalidUrl {
        input: source.to_string(),
        source: source_err,
    })?;

    tracing::info!("starting transfer from {}", url);

    let mut reader =
        RemoteChannel::open(&url, connect_timeout).map_err(|source| TransferError::Connect {
            url: url.to_string(),
            source,
        })?;
    let mut file = File::create(destination).map_err(|source| TransferError::OpenDestination {
        path: destination.to_path_buf(),
        source,
    })?;

    let copied = copy::copy_chunks(&mut reader, &mut file);

    // Close both endpoints exactly once regardless of the copy outcome. The
    // remote channel closes on drop; the destination close is observable
    // through sync_all, so its failure can be reported.
    let closed = file.sync_all();
    drop(file);
    drop(reader);

    match (copied, closed) {
        (Ok(bytes), Ok(())) => {
            tracing::info!(
                "transfer completed: {} bytes to {}",
                bytes,
                destination.display()
            );
            Ok(destination.to_path_buf())
        }
        (Ok(_), Err(source)) => Err(TransferError::Close {
            path: destination.to_path_buf(),
            source,
        }),
        (Err(copy_err), closed) => {
            if let Err(close_err) = closed {
                tracing::warn!(
                    "destination close failed after transfer error (suppressed): {}",
                    close_err
                );
            }
            Err(match copy_err {
                CopyError::Read {
                    bytes_copied,
                    source,
                } => TransferError::Read {
                    url: url.to_string(),
                    bytes_copied,
                    source,
                },
                CopyError::Write {
                    bytes_copied,
                    source,
                } => TransferError::Write {
                    path: destination.to_path_buf(),
                    bytes_copied,
                    source,
                },
            })
        }
    }
}
