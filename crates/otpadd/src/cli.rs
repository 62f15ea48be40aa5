//! Command-line entry point shared by both daemon binaries.
//!
//! The flavor is fixed by the binary that calls [`run`], never by an
//! argument: `otpad-encd` and `otpad-decd` are the same code with a
//! different flavor baked in.

use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use otpad_protocol::Flavor;

use crate::config::DaemonConfig;
use crate::server::{ServerError, Supervisor};

/// One-time-pad transform daemon
#[derive(Parser, Debug)]
#[command(version, about)]
pub struct Args {
    /// TCP port to listen on
    pub port: u16,

    /// Cap on simultaneous sessions (unbounded when unset)
    #[arg(long, value_name = "N")]
    pub max_sessions: Option<usize>,
}

/// Runs a daemon of the given flavor; returns the process exit code.
///
/// Usage and socket setup failures exit 1, bind or listen failures exit
/// 2. In normal operation the daemon runs until killed and this function
/// never returns.
pub fn run(flavor: Flavor) -> i32 {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            // Help and version land on stdout and exit 0; real usage
            // errors land on stderr and exit 1.
            let _ = e.print();
            return if e.use_stderr() { 1 } else { 0 };
        }
    };

    if let Err(e) = init_tracing() {
        eprintln!("Failed to initialize logging: {e}");
        return 1;
    }

    let mut config = DaemonConfig::from_env(args.port);
    config.max_sessions = args.max_sessions;

    match serve(config, flavor) {
        Ok(()) => 0,
        Err(e) => {
            error!(error = %e, "Daemon failed to start");
            eprintln!("{e}");
            e.exit_code()
        }
    }
}

#[tokio::main]
async fn serve(config: DaemonConfig, flavor: Flavor) -> Result<(), ServerError> {
    info!(
        version = env!("CARGO_PKG_VERSION"),
        %flavor,
        port = config.port,
        "otpad daemon starting"
    );

    let supervisor = Supervisor::bind(&config, flavor).await?;
    supervisor.run().await
}

fn init_tracing() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive("otpadd=info".parse()?)
                .add_directive("otpad_protocol=info".parse()?)
                .add_directive("otpad_core=info".parse()?),
        )
        .init();
    Ok(())
}
