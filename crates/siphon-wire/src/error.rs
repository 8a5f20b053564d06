/// Errors that can occur while encoding or decoding records.
#[derive(Debug, thiserror::Error)]
pub enum WireError {
    /// A record slice had the wrong length.
    ///
    /// Unreachable through [`decode_record`](crate::codec::decode_record),
    /// which only hands the decoder exactly-sized slices. The variant exists
    /// so a caller violating the fixed-width contract fails loudly instead
    /// of reading garbage.
    #[error("record has wrong length ({len} bytes, expected {expected})")]
    InvalidLength { len: usize, expected: usize },

    /// An I/O error occurred while reading or writing records.
    #[error("record I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The stream reached end-of-file.
    ///
    /// Normal termination signal for a connection, not a protocol failure.
    /// Any buffered partial record is discarded.
    #[error("connection closed")]
    ConnectionClosed,
}

pub type Result<T> = std::result::Result<T, WireError>;
