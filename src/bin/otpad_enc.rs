//! otpad-enc - Encrypting sender
//!
//! Reads a plaintext file and a key file, dials the encrypt daemon, and
//! prints the ciphertext to stdout. Exits 0 on success, 1 for local
//! failures (arguments, files, validation), 2 for network failures.
//!
//! # Usage
//!
//! ```bash
//! otpad-enc plaintext.txt key.txt 57171 > ciphertext.txt
//! ```

use otpad_protocol::Flavor;

fn main() {
    std::process::exit(otpad_sender::cli::run(Flavor::Encrypt));
}
