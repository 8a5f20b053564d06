use std::io::{ErrorKind, Read};

use bytes::BytesMut;
use tracing::debug;

use crate::codec::{decode_record, Record};
use crate::error::{Result, WireError};

const INITIAL_BUFFER_CAPACITY: usize = 1024;
const READ_CHUNK_SIZE: usize = 1024;

/// Reads complete records from any `Read` stream.
///
/// Accumulates arbitrarily chunked reads internally — callers always get
/// complete records, in byte-arrival order.
pub struct RecordReader<T> {
    inner: T,
    buf: BytesMut,
}

impl<T: Read> RecordReader<T> {
    /// Create a new record reader with an empty connection buffer.
    pub fn new(inner: T) -> Self {
        Self {
            inner,
            buf: BytesMut::with_capacity(INITIAL_BUFFER_CAPACITY),
        }
    }

    /// Read the next complete record (blocking).
    ///
    /// Returns `Err(WireError::ConnectionClosed)` when EOF is reached. A
    /// trailing partial record (1-12 leftover bytes) is discarded silently;
    /// partial frames at stream end are not a protocol error.
    pub fn read_record(&mut self) -> Result<Record> {
        loop {
            if let Some(record) = decode_record(&mut self.buf)? {
                return Ok(record);
            }

            let mut chunk = [0u8; READ_CHUNK_SIZE];
            let read = match self.inner.read(&mut chunk) {
                Ok(n) => n,
                Err(err) if err.kind() == ErrorKind::Interrupted => continue,
                Err(err) => return Err(WireError::Io(err)),
            };

            if read == 0 {
                if !self.buf.is_empty() {
                    debug!(
                        leftover = self.buf.len(),
                        "discarding trailing partial record at end of stream"
                    );
                }
                return Err(WireError::ConnectionClosed);
            }

            self.buf.extend_from_slice(&chunk[..read]);
        }
    }

    /// Borrow the underlying stream.
    pub fn get_ref(&self) -> &T {
        &self.inner
    }

    /// Mutably borrow the underlying stream.
    pub fn get_mut(&mut self) -> &mut T {
        &mut self.inner
    }

    /// Consume the reader and return the inner stream.
    pub fn into_inner(self) -> T {
        self.inner
    }
}
