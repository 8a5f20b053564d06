use std::io::ErrorKind;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;

use tracing::warn;

use crate::dispatch::RecordSender;
use crate::error::{IngestError, Result};
use crate::handler::handle_connection;
use crate::listener::Listener;

/// Accept connections until `running` is cleared or a fatal error occurs.
///
/// Every accepted connection gets its own handler thread, unconditionally —
/// there is no admission control, so a flood of clients means a thread per
/// client. Handlers share nothing but the record queue. Transient accept
/// failures are logged and the loop continues; anything else is fatal to
/// the accept loop and returned.
pub fn serve(listener: Listener, records: RecordSender, running: &AtomicBool) -> Result<()> {
    while running.load(Ordering::SeqCst) {
        let (stream, peer) = match listener.accept() {
            Ok(accepted) => accepted,
            Err(IngestError::Accept(err)) if is_transient(&err) => {
                warn!(error = %err, "accept failed, continuing");
                continue;
            }
            Err(err) => return Err(err),
        };

        let records = records.clone();
        let spawned = thread::Builder::new()
            .name(format!("conn-{peer}"))
            .spawn(move || handle_connection(stream, peer, records));
        if let Err(err) = spawned {
            warn!(%peer, error = %err, "failed to spawn connection handler");
        }
    }

    Ok(())
}

fn is_transient(err: &std::io::Error) -> bool {
    matches!(
        err.kind(),
        ErrorKind::ConnectionAborted | ErrorKind::ConnectionReset | ErrorKind::Interrupted
    )
}
