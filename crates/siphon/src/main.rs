mod cmd;
mod exit;
mod logging;
mod output;

use clap::Parser;

use crate::cmd::Command;
use crate::logging::{init_logging, LogFormat, LogLevel};
use crate::output::OutputFormat;

#[derive(Parser, Debug)]
#[command(
    name = "siphon",
    version,
    about = "Fixed-width binary record ingestion over TCP"
)]
struct Cli {
    /// Output format for records.
    #[arg(long, value_name = "FORMAT", global = true)]
    format: Option<OutputFormat>,

    /// Log output format (stderr).
    #[arg(long, value_name = "FORMAT", default_value = "text", global = true)]
    log_format: LogFormat,

    /// Minimum log level (stderr).
    #[arg(long, value_name = "LEVEL", default_value = "info", global = true)]
    log_level: LogLevel,

    #[command(subcommand)]
    command: Command,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.log_format, cli.log_level);

    let format = cli.format.unwrap_or_else(OutputFormat::default_for_stdout);
    let result = cmd::run(cli.command, format);

    match result {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(err.code);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_serve_subcommand() {
        let cli = Cli::try_parse_from([
            "siphon",
            "serve",
            "127.0.0.1:0",
            "--queue-capacity",
            "4",
            "--count",
            "2",
        ])
        .expect("serve args should parse");

        match cli.command {
            Command::Serve(args) => {
                assert_eq!(args.addr, "127.0.0.1:0");
                assert_eq!(args.queue_capacity, 4);
                assert_eq!(args.count, Some(2));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn parses_send_subcommand() {
        let cli = Cli::try_parse_from([
            "siphon",
            "send",
            "127.0.0.1:12345",
            "--id",
            "7",
            "--value",
            "2.5",
            "--flag",
            "Z",
            "--repeat",
            "3",
        ])
        .expect("send args should parse");

        assert!(matches!(cli.command, Command::Send(_)));
    }

    #[test]
    fn rejects_non_numeric_id() {
        let err = Cli::try_parse_from(["siphon", "send", "--id", "abc"])
            .expect_err("bad id should fail");
        assert_eq!(err.kind(), clap::error::ErrorKind::ValueValidation);
    }
}
