use std::fmt::Display;
use std::net::{SocketAddr, TcpListener, TcpStream, ToSocketAddrs};

use tracing::{debug, info};

use crate::error::{IngestError, Result};

/// The listening socket records are ingested through.
#[derive(Debug)]
pub struct Listener {
    inner: TcpListener,
    addr: SocketAddr,
}

impl Listener {
    /// Bind and listen on `addr`.
    pub fn bind(addr: impl ToSocketAddrs + Display) -> Result<Self> {
        let inner = TcpListener::bind(&addr).map_err(|source| IngestError::Bind {
            addr: addr.to_string(),
            source,
        })?;
        let addr = inner.local_addr().map_err(|source| IngestError::Bind {
            addr: addr.to_string(),
            source,
        })?;

        info!(%addr, "listening for record streams");

        Ok(Self { inner, addr })
    }

    /// Accept an incoming connection (blocking).
    pub fn accept(&self) -> Result<(TcpStream, SocketAddr)> {
        let (stream, peer) = self.inner.accept().map_err(IngestError::Accept)?;
        debug!(%peer, "accepted connection");
        Ok((stream, peer))
    }

    /// The locally bound address. With port 0 this is the assigned port.
    pub fn local_addr(&self) -> SocketAddr {
        self.addr
    }
}

#[cfg(test)]
mod tests {
    use std::io::{Read, Write};

    use super::*;

    #[test]
    fn bind_accept_connect() {
        let listener = Listener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr();

        let client = std::thread::spawn(move || {
            let mut stream = TcpStream::connect(addr).unwrap();
            stream.write_all(b"hello").unwrap();
        });

        let (mut stream, _peer) = listener.accept().unwrap();
        let mut buf = [0u8; 5];
        stream.read_exact(&mut buf).unwrap();
        assert_eq!(&buf, b"hello");

        client.join().unwrap();
    }

    #[test]
    fn bind_conflict_reports_address() {
        let first = Listener::bind("127.0.0.1:0").unwrap();
        let addr = first.local_addr();

        let err = Listener::bind(addr).unwrap_err();
        assert!(matches!(err, IngestError::Bind { .. }));
        assert!(err.to_string().contains(&addr.to_string()));
    }
}
