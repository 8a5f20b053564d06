use std::io::IsTerminal;
use std::time::{SystemTime, UNIX_EPOCH};

use bytes::BytesMut;
use clap::ValueEnum;
use serde::Serialize;
use siphon_wire::{encode_record, Record};

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum OutputFormat {
    Json,
    Pretty,
    Hex,
}

impl OutputFormat {
    pub fn default_for_stdout() -> Self {
        if std::io::stdout().is_terminal() {
            Self::Pretty
        } else {
            Self::Json
        }
    }
}

#[derive(Serialize)]
struct RecordOutput {
    schema_id: &'static str,
    id: u32,
    value: f64,
    flag: String,
    timestamp: String,
}

pub fn print_record(record: &Record, format: OutputFormat) {
    println!("{}", render_record(record, format));
}

fn render_record(record: &Record, format: OutputFormat) -> String {
    match format {
        OutputFormat::Json => {
            let out = RecordOutput {
                schema_id: "https://schemas.3leaps.dev/siphon/cli/v1/record-received.schema.json",
                id: record.id,
                value: record.value,
                flag: record.flag_char().to_string(),
                timestamp: now_unix_seconds(),
            };
            serde_json::to_string(&out).unwrap_or_else(|_| "{}".to_string())
        }
        OutputFormat::Pretty => {
            format!(
                "id={} value={:.2} flag={}",
                record.id,
                record.value,
                record.flag_char()
            )
        }
        OutputFormat::Hex => {
            let mut wire = BytesMut::new();
            encode_record(record, &mut wire);
            wire.iter().map(|byte| format!("{byte:02x}")).collect()
        }
    }
}

fn now_unix_seconds() -> String {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs().to_string())
        .unwrap_or_else(|_| "0".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pretty_renders_fixed_precision_and_flag_char() {
        let line = render_record(&Record::new(42, 3.14159, b'A'), OutputFormat::Pretty);
        assert_eq!(line, "id=42 value=3.14 flag=A");
    }

    #[test]
    fn json_renders_machine_readable_fields() {
        let line = render_record(&Record::new(7, 2.5, b'Z'), OutputFormat::Json);
        assert!(line.contains("\"id\":7"));
        assert!(line.contains("\"value\":2.5"));
        assert!(line.contains("\"flag\":\"Z\""));
        assert!(line.contains("record-received.schema.json"));
    }

    #[test]
    fn hex_renders_the_wire_bytes() {
        let line = render_record(&Record::new(1, 3.0, b'A'), OutputFormat::Hex);
        assert_eq!(line, "01000000000000000000084041");
    }
}
