/// Errors that can occur in the ingestion server.
#[derive(Debug, thiserror::Error)]
pub enum IngestError {
    /// Failed to bind the listening socket. Fatal; there is no retry.
    #[error("failed to bind to {addr}: {source}")]
    Bind {
        addr: String,
        source: std::io::Error,
    },

    /// Failed to accept an incoming connection.
    #[error("failed to accept connection: {0}")]
    Accept(std::io::Error),
}

pub type Result<T> = std::result::Result<T, IngestError>;
