use clap::{Args, Subcommand};

use crate::exit::CliResult;
use crate::output::OutputFormat;

pub mod send;
pub mod serve;

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the record ingestion server.
    Serve(ServeArgs),
    /// Send records to a running server.
    Send(SendArgs),
}

pub fn run(command: Command, format: OutputFormat) -> CliResult<i32> {
    match command {
        Command::Serve(args) => serve::run(args, format),
        Command::Send(args) => send::run(args),
    }
}

#[derive(Args, Debug)]
pub struct ServeArgs {
    /// Address to listen on.
    #[arg(default_value = "127.0.0.1:12345")]
    pub addr: String,

    /// Distribution queue capacity.
    #[arg(long, default_value_t = siphon_ingest::DEFAULT_QUEUE_CAPACITY)]
    pub queue_capacity: usize,

    /// Exit after printing N records.
    #[arg(long)]
    pub count: Option<usize>,
}

#[derive(Args, Debug)]
pub struct SendArgs {
    /// Address of the server.
    #[arg(default_value = "127.0.0.1:12345")]
    pub addr: String,

    /// Record id.
    #[arg(long, default_value_t = 42)]
    pub id: u32,

    /// Record value.
    #[arg(long, default_value_t = 3.14)]
    pub value: f64,

    /// Record flag character (ASCII).
    #[arg(long, default_value_t = 'A')]
    pub flag: char,

    /// Send N records, incrementing the id each time.
    #[arg(long, default_value_t = 1)]
    pub repeat: u32,
}
