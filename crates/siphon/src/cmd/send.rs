use std::net::TcpStream;

use siphon_wire::{Record, RecordWriter};
use tracing::{debug, info};

use crate::cmd::SendArgs;
use crate::exit::{io_error, wire_error, CliError, CliResult, SUCCESS, USAGE};

pub fn run(args: SendArgs) -> CliResult<i32> {
    let flag = flag_byte(args.flag)?;

    let stream =
        TcpStream::connect(args.addr.as_str()).map_err(|err| io_error("connect failed", err))?;
    let mut writer = RecordWriter::new(stream);

    for offset in 0..args.repeat {
        let record = Record::new(args.id.wrapping_add(offset), args.value, flag);
        writer
            .send(&record)
            .map_err(|err| wire_error("send failed", err))?;
        debug!(id = record.id, "record sent");
    }

    info!(count = args.repeat, "records sent");
    Ok(SUCCESS)
}

fn flag_byte(flag: char) -> CliResult<u8> {
    u8::try_from(flag).map_err(|_| {
        CliError::new(
            USAGE,
            format!("--flag must be a single-byte character, got {flag:?}"),
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascii_flag_is_accepted() {
        assert_eq!(flag_byte('A').unwrap(), b'A');
    }

    #[test]
    fn wide_flag_is_a_usage_error() {
        let err = flag_byte('→').unwrap_err();
        assert_eq!(err.code, USAGE);
    }
}
