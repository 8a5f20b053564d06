use std::io::{ErrorKind, Write};

use bytes::BytesMut;

use crate::codec::{encode_record, Record, RECORD_SIZE};
use crate::error::{Result, WireError};

/// Writes complete records to any `Write` stream.
///
/// This is the client side of the wire format, used by the `siphon send`
/// test client and by tests.
pub struct RecordWriter<T> {
    inner: T,
    buf: BytesMut,
}

impl<T: Write> RecordWriter<T> {
    /// Create a new record writer.
    pub fn new(inner: T) -> Self {
        Self {
            inner,
            buf: BytesMut::with_capacity(RECORD_SIZE),
        }
    }

    /// Encode and send one record (blocking).
    pub fn send(&mut self, record: &Record) -> Result<()> {
        self.buf.clear();
        encode_record(record, &mut self.buf);

        let mut offset = 0usize;
        while offset < self.buf.len() {
            match self.inner.write(&self.buf[offset..]) {
                Ok(0) => return Err(WireError::ConnectionClosed),
                Ok(n) => offset += n,
                Err(err) if err.kind() == ErrorKind::Interrupted => continue,
                Err(err) if err.kind() == ErrorKind::WouldBlock => continue,
                Err(err) => return Err(WireError::Io(err)),
            }
        }

        self.flush()
    }

    /// Flush the underlying stream.
    pub fn flush(&mut self) -> Result<()> {
        loop {
            match self.inner.flush() {
                Ok(()) => return Ok(()),
                Err(err) if err.kind() == ErrorKind::Interrupted => continue,
                Err(err) if err.kind() == ErrorKind::WouldBlock => continue,
                Err(err) => return Err(WireError::Io(err)),
            }
        }
    }

    /// Consume the writer and return the inner stream.
    pub fn into_inner(self) -> T {
        self.inner
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use bytes::BytesMut;

    use super::*;
    use crate::codec::decode_record;

    #[test]
    fn write_single_record() {
        let mut writer = RecordWriter::new(Cursor::new(Vec::<u8>::new()));
        writer.send(&Record::new(42, 3.14, b'A')).unwrap();

        let wire = writer.into_inner().into_inner();
        assert_eq!(wire.len(), RECORD_SIZE);

        let mut buf = BytesMut::from(wire.as_slice());
        let record = decode_record(&mut buf).unwrap().unwrap();
        assert_eq!(record.id, 42);
        assert_eq!(record.value, 3.14);
        assert_eq!(record.flag, b'A');
    }

    #[test]
    fn write_handles_short_writes() {
        let mut writer = RecordWriter::new(OneBytePerWrite(Vec::new()));
        writer.send(&Record::new(5, 0.5, b'S')).unwrap();

        let wire = writer.into_inner().0;
        let mut buf = BytesMut::from(wire.as_slice());
        let record = decode_record(&mut buf).unwrap().unwrap();
        assert_eq!(record.id, 5);
    }

    #[test]
    fn closed_sink_reports_connection_closed() {
        let mut writer = RecordWriter::new(ClosedSink);
        let err = writer.send(&Record::new(1, 1.0, b'c')).unwrap_err();
        assert!(matches!(err, WireError::ConnectionClosed));
    }

    struct OneBytePerWrite(Vec<u8>);

    impl Write for OneBytePerWrite {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            if buf.is_empty() {
                return Ok(0);
            }
            self.0.push(buf[0]);
            Ok(1)
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    struct ClosedSink;

    impl Write for ClosedSink {
        fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
            Ok(0)
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }
}
