use std::fmt;
use std::io;

use siphon_ingest::IngestError;
use siphon_wire::WireError;

// Exit code constants aligned with rsfulmen/DDR-0002 semantics.
pub const SUCCESS: i32 = 0;
pub const FAILURE: i32 = 1;
pub const TRANSPORT_ERROR: i32 = 3;
pub const PERMISSION_DENIED: i32 = 50;
pub const DATA_INVALID: i32 = 60;
pub const USAGE: i32 = 64;
pub const TIMEOUT: i32 = 124;
pub const INTERNAL: i32 = 125;

pub type CliResult<T> = Result<T, CliError>;

#[derive(Debug)]
pub struct CliError {
    pub code: i32,
    pub message: String,
}

impl CliError {
    pub fn new(code: i32, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

fn io_code(err: &io::Error) -> i32 {
    match err.kind() {
        io::ErrorKind::PermissionDenied => PERMISSION_DENIED,
        io::ErrorKind::TimedOut | io::ErrorKind::WouldBlock => TIMEOUT,
        io::ErrorKind::ConnectionRefused => FAILURE,
        io::ErrorKind::AddrInUse | io::ErrorKind::AddrNotAvailable => TRANSPORT_ERROR,
        _ => INTERNAL,
    }
}

pub fn io_error(context: &str, err: io::Error) -> CliError {
    CliError::new(io_code(&err), format!("{context}: {err}"))
}

pub fn ingest_error(context: &str, err: IngestError) -> CliError {
    let code = match &err {
        IngestError::Bind { source, .. } | IngestError::Accept(source) => io_code(source),
    };
    CliError::new(code, format!("{context}: {err}"))
}

pub fn wire_error(context: &str, err: WireError) -> CliError {
    match err {
        WireError::Io(source) => io_error(context, source),
        WireError::InvalidLength { .. } => CliError::new(DATA_INVALID, format!("{context}: {err}")),
        WireError::ConnectionClosed => CliError::new(FAILURE, format!("{context}: {err}")),
    }
}
