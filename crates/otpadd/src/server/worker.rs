//! Session worker - one task per accepted connection.
//!
//! A worker owns its session end to end: it answers the handshake,
//! validates both payloads, applies the transform, writes the result,
//! and shuts the connection down. It never serves a second exchange,
//! and its failure never reaches the supervisor or another session.
//!
//! Validation failures abort with no reply; the peer observes the close.
//! Only the flavor check answers on the failure path (with the rejection
//! tag), and that happens before any payload byte is read.

use tokio::io::{AsyncWriteExt, BufReader};
use tokio::net::tcp::{OwnedReadHalf, OwnedWriteHalf};
use tokio::net::TcpStream;
use tracing::debug;

use otpad_core::{cipher, CoreError, Message};
use otpad_protocol::{handshake, wire, ProtocolError};

use crate::session::{Session, SessionPhase};

/// Handles one connection from accept to close.
pub struct Worker {
    reader: BufReader<OwnedReadHalf>,
    writer: OwnedWriteHalf,
    session: Session,
}

impl Worker {
    pub fn new(stream: TcpStream, session: Session) -> Self {
        let (reader, writer) = stream.into_split();
        Self {
            reader: BufReader::new(reader),
            writer,
            session,
        }
    }

    /// Runs the exchange once. The connection is closed on return,
    /// whichever way the session ended.
    pub async fn run(mut self) -> Result<(), WorkerError> {
        let flavor = self.session.flavor();

        debug!(
            session = %self.session.id(),
            peer = %self.session.peer(),
            %flavor,
            "Worker started"
        );

        match handshake::respond(&mut self.reader, &mut self.writer, flavor).await {
            Ok(()) => self.session.advance(SessionPhase::Accepted),
            Err(ProtocolError::UnexpectedTag { got, .. }) => {
                self.session.advance(SessionPhase::Rejected);
                return Err(WorkerError::FlavorMismatch { got });
            }
            Err(e) => return Err(WorkerError::Protocol(e)),
        }

        self.session.advance(SessionPhase::Exchanging);

        let data_bytes = wire::read_frame(&mut self.reader).await?;
        let data = Message::from_text(&data_bytes).map_err(WorkerError::InvalidData)?;
        debug!(session = %self.session.id(), len = data.len(), "Data payload accepted");

        // The ack tells the sender the data passed, so it only goes out
        // after validation.
        wire::write_ack(&mut self.writer).await?;

        let key_bytes = wire::read_frame(&mut self.reader).await?;
        let key = Message::from_text(&key_bytes).map_err(WorkerError::InvalidKey)?;
        debug!(session = %self.session.id(), len = key.len(), "Key payload accepted");

        let result = cipher::transform(&data, &key, flavor.direction()).map_err(|e| match e {
            CoreError::KeyTooShort { key_len, data_len } => {
                WorkerError::KeyTooShort { key_len, data_len }
            }
            other => WorkerError::InvalidKey(other),
        })?;

        wire::write_result(&mut self.writer, &result.to_text()).await?;
        self.writer
            .shutdown()
            .await
            .map_err(|e| WorkerError::Protocol(ProtocolError::Io(e)))?;

        self.session.advance(SessionPhase::Closed);
        debug!(session = %self.session.id(), len = result.len(), "Result sent");

        Ok(())
    }
}

/// Ways a session can end without a result.
#[derive(Debug, thiserror::Error)]
pub enum WorkerError {
    #[error("Flavor mismatch: sender asserted {got:?}")]
    FlavorMismatch { got: String },

    #[error("Invalid data payload: {0}")]
    InvalidData(CoreError),

    #[error("Invalid key payload: {0}")]
    InvalidKey(CoreError),

    #[error("Key too short: {key_len} symbols for {data_len} symbols of data")]
    KeyTooShort { key_len: usize, data_len: usize },

    #[error("Protocol failure: {0}")]
    Protocol(#[from] ProtocolError),
}

impl WorkerError {
    /// Status category the supervisor logs at reap time. 0 is success,
    /// 1 a validation failure, 2 a protocol or network failure.
    pub fn status_code(&self) -> i32 {
        match self {
            WorkerError::InvalidData(_)
            | WorkerError::InvalidKey(_)
            | WorkerError::KeyTooShort { .. } => 1,
            WorkerError::FlavorMismatch { .. } | WorkerError::Protocol(_) => 2,
        }
    }
}
