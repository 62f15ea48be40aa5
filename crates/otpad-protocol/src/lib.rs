//! otpad protocol - wire protocol between senders and daemons.
//!
//! This crate provides the pieces of the conversation both sides share:
//! - `flavor` - the encrypt/decrypt identity and its wire tags
//! - `wire` - NUL-terminated framing, the acknowledgement byte, and the
//!   close-delimited result
//! - `handshake` - the flavor-asserting tag exchange

pub mod error;
pub mod flavor;
pub mod handshake;
pub mod wire;

pub use error::{ProtocolError, ProtocolResult};
pub use flavor::{Flavor, REJECT_TAG};
pub use wire::{ACK_BYTE, FRAME_DELIMITER, MAX_FRAME_SIZE};
