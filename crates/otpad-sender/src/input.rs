//! Input file loading and pre-flight validation.
//!
//! Everything here is local and synchronous. By the time a sender
//! touches the network its inputs are already known to be valid, so the
//! daemon's own checks are a second line of defense, not the first.

use std::path::Path;

use otpad_core::Message;

use crate::error::{SenderError, SenderResult};

/// Reads one file and validates it into a [`Message`].
///
/// At most one trailing newline is tolerated as a terminator; anything
/// else outside the alphabet fails with the offending byte and position.
pub fn load_message(path: &Path) -> SenderResult<Message> {
    let text = std::fs::read(path).map_err(|source| SenderError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;

    Message::from_text(&text).map_err(|source| SenderError::InvalidInput {
        path: path.to_path_buf(),
        source,
    })
}

/// Loads the data and key files and checks that the key covers the data.
pub fn load_inputs(data_path: &Path, key_path: &Path) -> SenderResult<(Message, Message)> {
    let data = load_message(data_path)?;
    let key = load_message(key_path)?;

    if key.len() < data.len() {
        return Err(SenderError::KeyTooShort {
            key_len: key.len(),
            data_len: data.len(),
        });
    }

    Ok((data, key))
}
