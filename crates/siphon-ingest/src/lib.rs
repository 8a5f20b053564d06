//! TCP ingestion runtime for siphon records.
//!
//! One thread per accepted connection, reassembling and decoding records,
//! all feeding a bounded queue drained by a single consumer. The queue is
//! the only shared mutable state; a full queue is the only backpressure.

pub mod consumer;
pub mod dispatch;
pub mod error;
pub mod handler;
pub mod listener;
pub mod server;

pub use consumer::RecordSink;
pub use dispatch::{
    queue, QueueClosed, RecordReceiver, RecordSender, TryPushError, DEFAULT_QUEUE_CAPACITY,
};
pub use error::{IngestError, Result};
pub use handler::handle_connection;
pub use listener::Listener;
pub use server::serve;
