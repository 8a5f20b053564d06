//! The bounded record queue between connection handlers and the consumer.
//!
//! Many producers (one per connection), a single consumer. FIFO across the
//! queue as a whole; each connection's records keep their relative order,
//! records from different connections interleave in publish order with no
//! fairness policy. A full queue blocks producers — this is the system's
//! only backpressure mechanism, propagating the consumer's pace back to
//! whichever connection is producing fastest.

use crossbeam_channel::{bounded, Receiver, Sender, TrySendError};
use siphon_wire::Record;

/// Default queue capacity.
pub const DEFAULT_QUEUE_CAPACITY: usize = 10;

/// Create a bounded record queue.
pub fn queue(capacity: usize) -> (RecordSender, RecordReceiver) {
    let (tx, rx) = bounded(capacity);
    (RecordSender(tx), RecordReceiver(rx))
}

/// Producer half, cloned into every connection handler.
#[derive(Clone)]
pub struct RecordSender(Sender<Record>);

impl RecordSender {
    /// Publish a record, blocking while the queue is full.
    ///
    /// Fails only once the consumer is gone.
    pub fn send(&self, record: Record) -> Result<(), QueueClosed> {
        self.0.send(record).map_err(|_| QueueClosed)
    }

    /// Publish without blocking, distinguishing a full queue from a
    /// closed one.
    pub fn try_send(&self, record: Record) -> Result<(), TryPushError> {
        self.0.try_send(record).map_err(|err| match err {
            TrySendError::Full(record) => TryPushError::Full(record),
            TrySendError::Disconnected(record) => TryPushError::Closed(record),
        })
    }
}

/// Consumer half. Exactly one exists per queue.
pub struct RecordReceiver(Receiver<Record>);

impl RecordReceiver {
    /// Take the next record, blocking while the queue is empty.
    ///
    /// Returns `None` once every sender is dropped and the queue is drained.
    pub fn recv(&self) -> Option<Record> {
        self.0.recv().ok()
    }

    /// Iterate records until the queue is closed and drained.
    pub fn iter(&self) -> impl Iterator<Item = Record> + '_ {
        self.0.iter()
    }

    /// Number of records currently queued.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the queue is currently empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// The consumer is gone; no further records can be published.
#[derive(Debug, thiserror::Error)]
#[error("record queue closed")]
pub struct QueueClosed;

/// Non-blocking publish failure.
#[derive(Debug, thiserror::Error)]
pub enum TryPushError {
    /// The queue is at capacity; the record is handed back.
    #[error("record queue full")]
    Full(Record),

    /// The consumer is gone; the record is handed back.
    #[error("record queue closed")]
    Closed(Record),
}
