//! otpad sender - the client side of the one-time-pad transform service.
//!
//! A sender reads a data file and a key file, validates both against the
//! 27-symbol alphabet, dials a daemon of its own flavor, and prints the
//! transformed text to stdout. Two binaries share this crate: `otpad-enc`
//! talks to the encrypt daemon and `otpad-dec` to the decrypt daemon;
//! the flavor is fixed at compile time in each binary's `main`.
//!
//! ## Modules
//!
//! - `cli`: argument parsing and the process entry point
//! - `config`: runtime settings (host, port)
//! - `error`: sender error types and exit-code mapping
//! - `exchange`: resolve, dial, and drive one session
//! - `input`: file loading and alphabet validation
//!
//! ## Panic-Free Policy
//!
//! Sender code returns `SenderError` rather than panicking; every failure
//! maps to a documented exit code. `unwrap`/`expect` appear only in tests.

pub mod cli;
pub mod config;
pub mod error;
pub mod exchange;
pub mod input;
