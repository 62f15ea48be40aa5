//! The sender side of one session: resolve, dial, exchange.

use std::net::SocketAddr;

use tokio::io::BufReader;
use tokio::net::{lookup_host, TcpStream};
use tracing::debug;

use otpad_core::Message;
use otpad_protocol::{handshake, wire, Flavor};

use crate::error::{SenderError, SenderResult};

/// Resolves `host:port` to the first usable address.
pub async fn resolve(host: &str, port: u16) -> SenderResult<SocketAddr> {
    let mut addrs = lookup_host((host, port))
        .await
        .map_err(|source| SenderError::Resolve {
            host: host.to_string(),
            port,
            source,
        })?;

    addrs.next().ok_or_else(|| SenderError::NoAddress {
        host: host.to_string(),
        port,
    })
}

/// Dials the daemon and runs the whole exchange.
///
/// The sequence mirrors the daemon's state machine: assert the flavor,
/// send the data, wait for the acknowledgement, send the key, then read
/// exactly `data.len()` result bytes up to the peer's close.
pub async fn run_exchange(
    addr: SocketAddr,
    flavor: Flavor,
    data: &Message,
    key: &Message,
) -> SenderResult<Vec<u8>> {
    let stream = TcpStream::connect(addr)
        .await
        .map_err(|source| SenderError::Connect { addr, source })?;
    let (reader, mut writer) = stream.into_split();
    let mut reader = BufReader::new(reader);

    handshake::initiate(&mut reader, &mut writer, flavor).await?;
    debug!(%addr, %flavor, "Session opened");

    wire::write_frame(&mut writer, &data.to_text()).await?;
    wire::read_ack(&mut reader).await?;
    wire::write_frame(&mut writer, &key.to_text()).await?;

    let result = wire::read_result(&mut reader, data.len()).await?;
    debug!(len = result.len(), "Result received");

    Ok(result)
}
