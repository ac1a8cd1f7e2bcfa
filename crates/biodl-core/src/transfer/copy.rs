//! Chunked copy loop between a readable and a writable channel.

use std::io::{self, Read, Write};

/// Fixed per-cycle buffer capacity. The remote channel is configured to
/// deliver chunks of at most this size as well.
pub const CHUNK_SIZE: usize = 2048;

/// Failed copy: which side failed and how many bytes had been fully written
/// to the destination before the failure.
#[derive(Debug)]
pub(crate) enum CopyError {
    Read { bytes_copied: u64, source: io::Error },
    Write { bytes_copied: u64, source: io::Error },
}

/// Copies `reader` to `writer` through a fixed [`CHUNK_SIZE`] buffer until
/// the reader reports end-of-stream (a zero-length read). A short write is
/// resubmitted until the whole chunk has been accepted before the next read.
/// Returns the total number of bytes copied.
pub(crate) fn copy_chunks<R: Read, W: Write>(
    reader: &mut R,
    writer: &mut W,
) -> Result<u64, CopyError> {
    let mut buf = [0u8; CHUNK_SIZE];
    let mut copied: u64 = 0;

    loop {
        let n = match reader.read(&mut buf) {
            Ok(0) => return Ok(copied),
            Ok(n) => n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(source) => {
                return Err(CopyError::Read {
                    bytes_copied: copied,
                    source,
                })
            }
        };

        let mut written = 0;
        while written < n {
            match writer.write(&buf[written..n]) {
                Ok(0) => {
                    return Err(CopyError::Write {
                        bytes_copied: copied,
                        source: io::Error::new(
                            io::ErrorKind::WriteZero,
                            "destination accepted no bytes",
                        ),
                    })
                }
                Ok(w) => {
                    written += w;
                    copied += w as u64;
                }
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(source) => {
                    return Err(CopyError::Write {
                        bytes_copied: copied,
                        source,
                    })
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn pattern(len: usize) -> Vec<u8> {
        (0..len).map(|i| (i % 251) as u8).collect()
    }

    #[test]
    fn round_trips_bodies_around_chunk_boundaries() {
        for len in [0usize, 1, 2047, 2048, 2049, 1_000_000] {
            let body = pattern(len);
            let mut reader = Cursor::new(body.clone());
            let mut sink = Vec::new();
            let copied = copy_chunks(&mut reader, &mut sink).unwrap();
            assert_eq!(copied, len as u64, "byte count for len {len}");
            assert_eq!(sink, body, "content for len {len}");
        }
    }

    /// Writer that accepts at most a few bytes per call, forcing the
    /// partial-write resubmission path.
    struct TricklingWriter {
        out: Vec<u8>,
    }

    impl Write for TricklingWriter {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            let n = buf.len().min(7);
            self.out.extend_from_slice(&buf[..n]);
            Ok(n)
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn partial_writes_are_resubmitted() {
        let body = pattern(5000);
        let mut reader = Cursor::new(body.clone());
        let mut sink = TricklingWriter { out: Vec::new() };
        let copied = copy_chunks(&mut reader, &mut sink).unwrap();
        assert_eq!(copied, 5000);
        assert_eq!(sink.out, body);
    }

    /// Reader double that counts drops, standing in for the remote channel.
    struct TrackedReader {
        inner: Cursor<Vec<u8>>,
        closed: Arc<AtomicUsize>,
    }

    impl Read for TrackedReader {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            self.inner.read(buf)
        }
    }

    impl Drop for TrackedReader {
        fn drop(&mut self) {
            self.closed.fetch_add(1, Ordering::SeqCst);
        }
    }

    /// Writer double that fails on its nth chunk and counts drops.
    struct FailingWriter {
        chunks_seen: usize,
        fail_on_chunk: usize,
        accepted: u64,
        closed: Arc<AtomicUsize>,
    }

    impl Write for FailingWriter {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.chunks_seen += 1;
            if self.chunks_seen >= self.fail_on_chunk {
                return Err(io::Error::new(io::ErrorKind::Other, "disk on fire"));
            }
            self.accepted += buf.len() as u64;
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl Drop for FailingWriter {
        fn drop(&mut self) {
            self.closed.fetch_add(1, Ordering::SeqCst);
        }
    }

    #[test]
    fn write_failure_on_third_chunk_closes_both_endpoints_once() {
        let reader_closed = Arc::new(AtomicUsize::new(0));
        let writer_closed = Arc::new(AtomicUsize::new(0));

        {
            let mut reader = TrackedReader {
                inner: Cursor::new(pattern(10 * CHUNK_SIZE)),
                closed: Arc::clone(&reader_closed),
            };
            let mut writer = FailingWriter {
                chunks_seen: 0,
                fail_on_chunk: 3,
                accepted: 0,
                closed: Arc::clone(&writer_closed),
            };

            let err = copy_chunks(&mut reader, &mut writer).unwrap_err();
            match err {
                CopyError::Write {
                    bytes_copied,
                    source,
                } => {
                    assert_eq!(bytes_copied, 2 * CHUNK_SIZE as u64);
                    assert_eq!(bytes_copied, writer.accepted);
                    assert_eq!(source.kind(), io::ErrorKind::Other);
                }
                other => panic!("expected Write error, got {other:?}"),
            }
        }

        assert_eq!(reader_closed.load(Ordering::SeqCst), 1);
        assert_eq!(writer_closed.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn read_failure_reports_bytes_copied_so_far() {
        struct FailingReader {
            served: usize,
        }

        impl Read for FailingReader {
            fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
                if self.served >= 2 {
                    return Err(io::Error::new(
                        io::ErrorKind::ConnectionReset,
                        "peer went away",
                    ));
                }
                self.served += 1;
                Ok(buf.len())
            }
        }

        let mut reader = FailingReader { served: 0 };
        let mut sink = Vec::new();
        let err = copy_chunks(&mut reader, &mut sink).unwrap_err();
        match err {
            CopyError::Read {
                bytes_copied,
                source,
            } => {
                assert_eq!(bytes_copied, 2 * CHUNK_SIZE as u64);
                assert_eq!(source.kind(), io::ErrorKind::ConnectionReset);
            }
            other => panic!("expected Read error, got {other:?}"),
        }
    }

    #[test]
    fn empty_source_yields_empty_destination() {
        let mut reader = Cursor::new(Vec::new());
        let mut sink = Vec::new();
        assert_eq!(copy_chunks(&mut reader, &mut sink).unwrap(), 0);
        assert!(sink.is_empty());
    }
}
