use std::net::{SocketAddr, TcpStream};

use siphon_wire::{RecordReader, WireError};
use tracing::{debug, warn};

use crate::dispatch::RecordSender;

/// Drive one accepted connection until it ends.
///
/// Reads chunks, reassembles them into records, and publishes each record
/// to the queue (suspending while the queue is full). The socket is
/// released on every exit path. Errors never escape to the accept loop or
/// touch any other connection.
pub fn handle_connection(stream: TcpStream, peer: SocketAddr, records: RecordSender) {
    let mut reader = RecordReader::new(stream);

    loop {
        match reader.read_record() {
            Ok(record) => {
                debug!(%peer, id = record.id, "record received");
                if records.send(record).is_err() {
                    debug!(%peer, "record queue closed, dropping connection");
                    return;
                }
            }
            Err(WireError::ConnectionClosed) => {
                debug!(%peer, "connection closed by client");
                return;
            }
            // Frame boundaries are length-based, so the reader has already
            // advanced past the bad bytes; the connection survives.
            Err(err @ WireError::InvalidLength { .. }) => {
                warn!(%peer, error = %err, "skipping undecodable record");
            }
            Err(err) => {
                warn!(%peer, error = %err, "read failed, dropping connection");
                return;
            }
        }
    }
}
