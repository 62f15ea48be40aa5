//! The modular substitution transform.
//!
//! Encryption adds key symbols to data symbols mod 27; decryption
//! subtracts them. The two directions are exact inverses under the same
//! key, and the key may be longer than the data (the tail is unused).

use crate::alphabet::ALPHABET_LEN;
use crate::error::{CoreError, CoreResult};
use crate::message::Message;

/// Which way the transform runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Encrypt,
    Decrypt,
}

impl Direction {
    fn sign(&self) -> i16 {
        match self {
            Direction::Encrypt => 1,
            Direction::Decrypt => -1,
        }
    }
}

/// Combines a single data symbol with a key symbol.
///
/// Works in `i16` so the decrypt subtraction never wraps; `rem_euclid`
/// brings the result back into `0..27` for either sign.
fn combine(data: u8, key: u8, direction: Direction) -> u8 {
    let combined = i16::from(data) + direction.sign() * i16::from(key);
    combined.rem_euclid(i16::from(ALPHABET_LEN)) as u8
}

/// Applies the transform to a whole message.
///
/// Fails with [`CoreError::KeyTooShort`] when the key has fewer symbols
/// than the data. Extra key symbols beyond the data length are ignored.
pub fn transform(data: &Message, key: &Message, direction: Direction) -> CoreResult<Message> {
    if key.len() < data.len() {
        return Err(CoreError::KeyTooShort {
            key_len: key.len(),
            data_len: data.len(),
        });
    }

    let symbols = data
        .symbols()
        .iter()
        .zip(key.symbols())
        .map(|(&d, &k)| combine(d, k, direction))
        .collect();

    Ok(Message::from_symbols(symbols))
}
