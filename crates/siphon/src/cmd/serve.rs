use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;

use siphon_ingest::{consumer, dispatch, server, Listener};
use siphon_wire::Record;

use crate::cmd::ServeArgs;
use crate::exit::{ingest_error, CliError, CliResult, INTERNAL, SUCCESS};
use crate::output::{print_record, OutputFormat};

pub fn run(args: ServeArgs, format: OutputFormat) -> CliResult<i32> {
    let listener =
        Listener::bind(args.addr.as_str()).map_err(|err| ingest_error("bind failed", err))?;

    let running = Arc::new(AtomicBool::new(true));
    install_ctrlc_handler(running.clone())?;

    let (records, incoming) = dispatch::queue(args.queue_capacity);

    let acceptor = {
        let running = Arc::clone(&running);
        thread::Builder::new()
            .name("acceptor".to_string())
            .spawn(move || server::serve(listener, records, &running))
            .map_err(|err| CliError::new(INTERNAL, format!("failed to start accept loop: {err}")))?
    };

    consumer::run(
        &incoming,
        &mut |record: &Record| print_record(record, format),
        args.count,
    );

    // The consumer returns after --count records, or once the queue closes
    // behind a finished accept loop. Only the latter carries a verdict.
    if acceptor.is_finished() {
        match acceptor.join() {
            Ok(result) => result.map_err(|err| ingest_error("accept failed", err))?,
            Err(_) => return Err(CliError::new(INTERNAL, "accept loop panicked")),
        }
    }

    Ok(SUCCESS)
}

fn install_ctrlc_handler(running: Arc<AtomicBool>) -> CliResult<()> {
    ctrlc::set_handler(move || {
        running.store(false, Ordering::SeqCst);
    })
    .map_err(|err| {
        CliError::new(
            INTERNAL,
            format!("signal handler setup failed: {err}"),
        )
    })
}
