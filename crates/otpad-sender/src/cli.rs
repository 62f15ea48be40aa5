//! Command line entry point shared by the two sender binaries.
//!
//! Each binary fixes the [`Flavor`] at compile time and delegates here.
//! Inputs are read and validated before any network activity so that a
//! bad file or character never costs a connection.

use std::io::Write;
use std::path::PathBuf;

use clap::Parser;
use tracing::error;
use tracing_subscriber::EnvFilter;

use otpad_core::Message;
use otpad_protocol::Flavor;

use crate::config::SenderConfig;
use crate::error::{SenderError, SenderResult};
use crate::exchange;
use crate::input;

// ============================================================================
// Arguments
// ============================================================================

#[derive(Parser, Debug)]
#[command(version, about)]
pub struct Args {
    /// File holding the text to transform (A-Z and space).
    pub data_file: PathBuf,

    /// File holding the key (same alphabet, at least as long as the data).
    pub key_file: PathBuf,

    /// Daemon port to dial.
    pub port: u16,
}

// ============================================================================
// Entry point
// ============================================================================

/// Parses arguments, runs one exchange, and returns the process exit code.
///
/// Exit codes: 0 on success, 1 for local failures (arguments, files,
/// validation), 2 for network and protocol failures.
pub fn run(flavor: Flavor) -> i32 {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            let _ = e.print();
            return if e.use_stderr() { 1 } else { 0 };
        }
    };

    init_tracing();

    // Validate both inputs before touching the network.
    let (data, key) = match input::load_inputs(&args.data_file, &args.key_file) {
        Ok(inputs) => inputs,
        Err(e) => return fail(e),
    };

    let config = SenderConfig::from_env(args.port);

    match transform(&config, flavor, &data, &key) {
        Ok(result) => {
            let mut stdout = std::io::stdout().lock();
            if let Err(e) = stdout.write_all(&result).and_then(|()| stdout.write_all(b"\n")) {
                eprintln!("failed to write result: {e}");
                return 1;
            }
            0
        }
        Err(e) => fail(e),
    }
}

fn fail(e: SenderError) -> i32 {
    error!(error = %e, "Sender failed");
    eprintln!("{e}");
    e.exit_code()
}

#[tokio::main]
async fn transform(
    config: &SenderConfig,
    flavor: Flavor,
    data: &Message,
    key: &Message,
) -> SenderResult<Vec<u8>> {
    let addr = exchange::resolve(&config.host, config.port).await?;
    exchange::run_exchange(addr, flavor, data, key).await
}

/// Diagnostics go to stderr so stdout stays clean for the result.
/// Silent unless RUST_LOG asks for output.
fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();
}
