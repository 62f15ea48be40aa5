//! Error types for core domain operations.

use thiserror::Error;

use crate::message::MAX_MESSAGE_LEN;

/// Errors from validating and transforming messages.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    #[error("Invalid character 0x{byte:02x} at position {position}")]
    InvalidCharacter { byte: u8, position: usize },

    #[error("Key is too short: {key_len} symbols for {data_len} symbols of data")]
    KeyTooShort { key_len: usize, data_len: usize },

    #[error("Message too long: {len} symbols (maximum {max})")]
    MessageTooLong { len: usize, max: usize },
}

impl CoreError {
    pub fn message_too_long(len: usize) -> Self {
        CoreError::MessageTooLong {
            len,
            max: MAX_MESSAGE_LEN,
        }
    }
}

pub type CoreResult<T> = Result<T, CoreError>;
