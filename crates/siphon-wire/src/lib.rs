//! Fixed-width binary record codec and stream reassembly.
//!
//! This is the core layer of siphon. One record is exactly 13 bytes,
//! little-endian, with no delimiter, length prefix, or checksum:
//! - A 4-byte record id (u32)
//! - An 8-byte value (IEEE-754 f64)
//! - A 1-byte flag, displayed as an ASCII character
//!
//! Framing is purely positional: a valid stream is a concatenation of zero
//! or more records with no padding. [`RecordReader`] hides partial reads —
//! callers always get complete records.

pub mod codec;
pub mod error;
pub mod reader;
pub mod writer;

pub use codec::{decode_exact, decode_record, encode_record, Record, RECORD_SIZE};
pub use error::{Result, WireError};
pub use reader::RecordReader;
pub use writer::RecordWriter;
