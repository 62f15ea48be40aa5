//! otpad core - shared domain types for the OTP transform service.
//!
//! This crate provides the pieces used identically by the senders and the
//! daemons:
//! - `alphabet` - the 27-symbol codec (`A`-`Z` plus space)
//! - `message` - validated, owned symbol sequences
//! - `cipher` - the modular substitution transform
//!
//! All production code follows the panic-free policy: no `.unwrap()`,
//! `.expect()`, `panic!()`, or direct indexing outside of tests.

pub mod alphabet;
pub mod cipher;
pub mod error;
pub mod message;

// Re-exports for convenience
pub use cipher::{transform, Direction};
pub use error::{CoreError, CoreResult};
pub use message::{Message, MAX_MESSAGE_LEN};
