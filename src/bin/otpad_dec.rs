//! otpad-dec - Decrypting sender
//!
//! Reads a ciphertext file and a key file, dials the decrypt daemon, and
//! prints the recovered plaintext to stdout. Exits 0 on success, 1 for
//! local failures (arguments, files, validation), 2 for network failures.
//!
//! # Usage
//!
//! ```bash
//! otpad-dec ciphertext.txt key.txt 57172 > plaintext.txt
//! ```

use otpad_protocol::Flavor;

fn main() {
    std::process::exit(otpad_sender::cli::run(Flavor::Decrypt));
}
