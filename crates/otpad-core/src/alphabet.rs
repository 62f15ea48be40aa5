//! The 27-symbol alphabet shared by every component.
//!
//! External representation: the uppercase Latin letters and a single space.
//! Internal representation: integers `0..=26`, with `A`-`Z` mapped to
//! `0..=25` and space mapped to [`SPACE_SYMBOL`].

use crate::error::{CoreError, CoreResult};

/// Number of symbols in the alphabet.
pub const ALPHABET_LEN: u8 = 27;

/// Internal value of the space symbol.
pub const SPACE_SYMBOL: u8 = 26;

/// Encodes one external byte into its symbol value.
///
/// Returns `None` for any byte outside `A`-`Z` and space. Newline is
/// deliberately not encodable; a trailing terminator is stripped before
/// encoding (see [`crate::Message::from_text`]).
pub fn encode(byte: u8) -> Option<u8> {
    match byte {
        b'A'..=b'Z' => Some(byte - b'A'),
        b' ' => Some(SPACE_SYMBOL),
        _ => None,
    }
}

/// Decodes one symbol value back into its external byte.
///
/// The symbol is reduced mod [`ALPHABET_LEN`] first, so any `u8` input
/// produces an in-alphabet byte.
pub fn decode(symbol: u8) -> u8 {
    match symbol % ALPHABET_LEN {
        SPACE_SYMBOL => b' ',
        letter => letter + b'A',
    }
}

/// Validates that every byte is in-alphabet, reporting the first
/// offending byte and its position.
pub fn validate(bytes: &[u8]) -> CoreResult<()> {
    for (position, &byte) in bytes.iter().enumerate() {
        if encode(byte).is_none() {
            return Err(CoreError::InvalidCharacter { byte, position });
        }
    }
    Ok(())
}
