//! Error types for the sender, each mapped to a process exit code.
//!
//! Local failures (unreadable files, out-of-alphabet input, a key that
//! cannot cover the data) exit 1 and are all caught before the first
//! network step. Network and protocol failures exit 2.

use std::net::SocketAddr;
use std::path::PathBuf;

use thiserror::Error;

use otpad_core::CoreError;
use otpad_protocol::ProtocolError;

#[derive(Error, Debug)]
pub enum SenderError {
    #[error("Failed to read {}: {source}", .path.display())]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid input in {}: {source}", .path.display())]
    InvalidInput { path: PathBuf, source: CoreError },

    #[error("Key is too short: {key_len} symbols for {data_len} symbols of data")]
    KeyTooShort { key_len: usize, data_len: usize },

    #[error("Failed to resolve {host}:{port}: {source}")]
    Resolve {
        host: String,
        port: u16,
        source: std::io::Error,
    },

    #[error("No usable address for {host}:{port}")]
    NoAddress { host: String, port: u16 },

    #[error("Failed to connect to {addr}: {source}")]
    Connect {
        addr: SocketAddr,
        source: std::io::Error,
    },

    #[error(transparent)]
    Protocol(#[from] ProtocolError),
}

impl SenderError {
    /// Process exit code: 1 for local validation failures, 2 for
    /// network and protocol failures.
    pub fn exit_code(&self) -> i32 {
        match self {
            SenderError::FileRead { .. }
            | SenderError::InvalidInput { .. }
            | SenderError::KeyTooShort { .. } => 1,
            SenderError::Resolve { .. }
            | SenderError::NoAddress { .. }
            | SenderError::Connect { .. }
            | SenderError::Protocol(_) => 2,
        }
    }
}

pub type SenderResult<T> = Result<T, SenderError>;
