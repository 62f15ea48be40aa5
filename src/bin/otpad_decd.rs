//! otpad-decd - Decrypt daemon
//!
//! Listens on the given port and serves decrypt sessions until killed.
//! Senders of the encrypt flavor are rejected during the handshake.
//! Exits 1 for setup failures, 2 if the port cannot be bound or listened
//! on; a healthy daemon never exits on its own.
//!
//! # Usage
//!
//! ```bash
//! otpad-decd 57172 &
//! ```

use otpad_protocol::Flavor;

fn main() {
    std::process::exit(otpadd::cli::run(Flavor::Decrypt));
}
