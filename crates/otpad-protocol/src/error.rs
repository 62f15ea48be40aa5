//! Errors that can occur on the wire.

use thiserror::Error;

use crate::flavor::Flavor;

/// Errors from framing, handshaking, and the payload exchange.
#[derive(Debug, Error)]
pub enum ProtocolError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Connection closed by peer")]
    ConnectionClosed,

    #[error("Frame too large: {size} bytes (max: {max})")]
    FrameTooLarge { size: usize, max: usize },

    #[error("Daemon rejected {flavor} request")]
    Rejected { flavor: Flavor },

    #[error("Unexpected tag: expected {expected:?}, got {got:?}")]
    UnexpectedTag { expected: &'static str, got: String },

    #[error("Unexpected acknowledgement byte 0x{byte:02x}")]
    UnexpectedAck { byte: u8 },

    #[error("Truncated result: {received} of {expected} bytes before close")]
    TruncatedResult { expected: usize, received: usize },

    #[error("Trailing data after result: expected {expected} bytes, got {received}")]
    TrailingData { expected: usize, received: usize },
}

pub type ProtocolResult<T> = Result<T, ProtocolError>;
