//! Validated message payloads.
//!
//! A [`Message`] is an owned sequence of internal symbol values. Both
//! plaintext and key material use the same type; once constructed, every
//! symbol is guaranteed to be in `0..27`.

use crate::alphabet;
use crate::error::{CoreError, CoreResult};

/// Maximum number of symbols in a single message.
pub const MAX_MESSAGE_LEN: usize = 100_000;

/// An owned, validated sequence of alphabet symbols.
///
/// No `Display` impl on purpose. Key material flows through this type and
/// must never end up in log output by accident; callers that want the
/// external text ask for it explicitly via [`Message::to_text`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    symbols: Vec<u8>,
}

impl Message {
    /// Builds a message from external text, such as the contents of a data
    /// or key file.
    ///
    /// At most one trailing newline is stripped before validation; a second
    /// one, or any interior newline, is an invalid character. Fails on the
    /// first out-of-alphabet byte or when the text exceeds
    /// [`MAX_MESSAGE_LEN`] symbols.
    pub fn from_text(text: &[u8]) -> CoreResult<Self> {
        let text = match text.split_last() {
            Some((b'\n', rest)) => rest,
            _ => text,
        };

        if text.len() > MAX_MESSAGE_LEN {
            return Err(CoreError::message_too_long(text.len()));
        }

        let mut symbols = Vec::with_capacity(text.len());
        for (position, &byte) in text.iter().enumerate() {
            match alphabet::encode(byte) {
                Some(symbol) => symbols.push(symbol),
                None => return Err(CoreError::InvalidCharacter { byte, position }),
            }
        }

        Ok(Message { symbols })
    }

    /// Wraps cipher output without re-validating.
    ///
    /// Only the cipher module constructs messages this way, and it only
    /// produces symbols already reduced mod the alphabet length.
    pub(crate) fn from_symbols(symbols: Vec<u8>) -> Self {
        Message { symbols }
    }

    pub fn symbols(&self) -> &[u8] {
        &self.symbols
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Renders the message back into external bytes (no trailing newline).
    pub fn to_text(&self) -> Vec<u8> {
        self.symbols.iter().map(|&s| alphabet::decode(s)).collect()
    }
}
