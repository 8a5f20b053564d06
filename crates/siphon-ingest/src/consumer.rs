use siphon_wire::Record;
use tracing::debug;

use crate::dispatch::RecordReceiver;

/// Destination for consumed records.
pub trait RecordSink {
    fn deliver(&mut self, record: &Record);
}

impl<F: FnMut(&Record)> RecordSink for F {
    fn deliver(&mut self, record: &Record) {
        self(record)
    }
}

/// Drain the record queue into `sink`.
///
/// Blocks while the queue is empty and returns once it is closed and
/// drained, or after `limit` records when a limit is given. Returns the
/// number of records delivered. If the sink stalls, queue backpressure is
/// the only throttle on producers.
pub fn run<S: RecordSink>(records: &RecordReceiver, sink: &mut S, limit: Option<usize>) -> usize {
    let mut delivered = 0usize;

    while limit.map_or(true, |limit| delivered < limit) {
        let Some(record) = records.recv() else {
            break;
        };
        sink.deliver(&record);
        delivered += 1;
    }

    debug!(delivered, "consumer finished");
    delivered
}

#[cfg(test)]
mod tests {
    use siphon_wire::Record;

    use super::*;
    use crate::dispatch::queue;

    #[test]
    fn drains_in_order_until_queue_closes() {
        let (tx, rx) = queue(10);
        for id in 0..4u32 {
            tx.send(Record::new(id, 0.0, b'd')).unwrap();
        }
        drop(tx);

        let mut seen = Vec::new();
        let delivered = run(&rx, &mut |record: &Record| seen.push(record.id), None);

        assert_eq!(delivered, 4);
        assert_eq!(seen, vec![0, 1, 2, 3]);
    }

    #[test]
    fn limit_stops_early_and_leaves_the_rest_queued() {
        let (tx, rx) = queue(10);
        for id in 0..5u32 {
            tx.send(Record::new(id, 0.0, b'l')).unwrap();
        }

        let delivered = run(&rx, &mut |_: &Record| {}, Some(2));
        assert_eq!(delivered, 2);
        assert_eq!(rx.len(), 3);
    }

    #[test]
    fn empty_closed_queue_delivers_nothing() {
        let (tx, rx) = queue(2);
        drop(tx);

        let delivered = run(&rx, &mut |_: &Record| {}, None);
        assert_eq!(delivered, 0);
    }
}
