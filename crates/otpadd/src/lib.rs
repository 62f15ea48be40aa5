//! otpadd - the one-time-pad transform daemons.
//!
//! This crate is the server side of the service:
//! - `config` - runtime settings (port, bind address, backlog, session cap)
//! - `server` - the connection supervisor and per-session workers
//! - `session` - per-connection identity and lifecycle state
//! - `cli` - the entry point the daemon binaries delegate to
//!
//! A daemon is flavor-fixed: `otpad-encd` only encrypts and `otpad-decd`
//! only decrypts. The two binaries are the same code parametrized by
//! [`otpad_protocol::Flavor`]. Cross-pairing is refused during the
//! handshake, before any payload is read.
//!
//! # Panic-Free Guarantees
//!
//! All production code in this crate follows the panic-free policy:
//! - No `.unwrap()`, `.expect()`, `panic!()`, `unreachable!()`, `todo!()`
//! - All fallible operations return `Result` or `Option`
//! - A worker failure ends that session only, never the daemon

pub mod cli;
pub mod config;
pub mod server;
pub mod session;
