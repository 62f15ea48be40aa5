//! TCP server for the otpad daemons.
//!
//! The supervisor owns the listening socket and the set of live worker
//! tasks. Before each accept it reaps every worker that has already
//! finished, logging each outcome; the only await point in steady state
//! is `accept` itself. Accept errors are logged and the loop continues,
//! so the daemon never exits in normal operation.
//!
//! ```text
//! ┌──────────────┐  accept   ┌────────────┐
//! │  Supervisor  │──────────▶│   Worker   │  one task per connection,
//! │ (TcpListener)│  spawn    │ (owns the  │  spawned into a JoinSet
//! └──────┬───────┘           │  Session)  │
//!        │ try_join_next     └────────────┘
//!        ▼
//!   outcome logs (status 0/1/2)
//! ```
//!
//! # Panic-Free Guarantees
//!
//! This module follows the crate's panic-free policy:
//! - No `.unwrap()`, `.expect()`, `panic!()`, `unreachable!()`, `todo!()`
//! - All fallible operations use `?`, pattern matching, or `unwrap_or`
//! - Worker failures are logged at reap and never end the accept loop

mod worker;

pub use worker::{Worker, WorkerError};

use std::net::{IpAddr, SocketAddr};

use tokio::net::{TcpListener, TcpSocket, TcpStream};
use tokio::task::{JoinError, JoinSet};
use tracing::{debug, error, info, warn};

use otpad_protocol::Flavor;

use crate::config::DaemonConfig;
use crate::session::{Session, SessionId};

/// Outcome of one worker task, keyed for logging.
type WorkerOutcome = (SessionId, Result<(), WorkerError>);

/// Supervises one listening socket and its worker tasks.
///
/// The supervisor is the only task that touches the `JoinSet`; workers
/// share nothing with it beyond their return value.
#[derive(Debug)]
pub struct Supervisor {
    listener: TcpListener,
    local_addr: SocketAddr,
    flavor: Flavor,
    max_sessions: Option<usize>,
    next_session: u64,
    workers: JoinSet<WorkerOutcome>,
}

impl Supervisor {
    /// Creates the listening socket: IPv4 with `SO_REUSEADDR`, bound to
    /// `config.bind_host:config.port`, listening with the configured
    /// backlog.
    pub async fn bind(config: &DaemonConfig, flavor: Flavor) -> Result<Self, ServerError> {
        let ip: IpAddr = config
            .bind_host
            .parse()
            .map_err(|source| ServerError::BindAddr {
                addr: config.bind_host.clone(),
                source,
            })?;
        let addr = SocketAddr::new(ip, config.port);

        let socket = match addr {
            SocketAddr::V4(_) => TcpSocket::new_v4(),
            SocketAddr::V6(_) => TcpSocket::new_v6(),
        }
        .map_err(|source| ServerError::SocketSetup { source })?;
        socket
            .set_reuseaddr(true)
            .map_err(|source| ServerError::SocketSetup { source })?;
        socket
            .bind(addr)
            .map_err(|source| ServerError::Bind { addr, source })?;

        let listener = socket
            .listen(config.backlog)
            .map_err(|source| ServerError::Listen { addr, source })?;
        let local_addr = listener
            .local_addr()
            .map_err(|source| ServerError::Listen { addr, source })?;

        Ok(Self {
            listener,
            local_addr,
            flavor,
            max_sessions: config.max_sessions,
            next_session: 0,
            workers: JoinSet::new(),
        })
    }

    /// Address the socket actually bound to (port 0 resolves here).
    pub fn local_addr(&self) -> SocketAddr {
        self.local_addr
    }

    /// Number of worker tasks not yet reaped.
    pub fn live_sessions(&self) -> usize {
        self.workers.len()
    }

    /// Accept loop. Does not return in normal operation; the daemon
    /// dies by signal.
    pub async fn run(mut self) -> Result<(), ServerError> {
        info!(
            addr = %self.local_addr,
            flavor = %self.flavor,
            "Daemon listening"
        );

        loop {
            self.reap_finished();

            // With a session cap, wait for a slot instead of accepting.
            if let Some(max) = self.max_sessions {
                while self.workers.len() >= max {
                    match self.workers.join_next().await {
                        Some(outcome) => log_outcome(outcome),
                        None => break,
                    }
                }
            }

            match self.listener.accept().await {
                Ok((stream, peer)) => self.spawn_worker(stream, peer),
                Err(e) => {
                    error!(error = %e, "Failed to accept connection");
                }
            }
        }
    }

    /// Reaps every worker that has already finished, without blocking.
    fn reap_finished(&mut self) {
        while let Some(outcome) = self.workers.try_join_next() {
            log_outcome(outcome);
        }
    }

    /// Hands a fresh connection to its own worker task.
    fn spawn_worker(&mut self, stream: TcpStream, peer: SocketAddr) {
        let id = SessionId::new(self.next_session);
        self.next_session += 1;

        let session = Session::new(id, peer, self.flavor);
        debug!(
            session = %id,
            peer = %peer,
            live = self.workers.len() + 1,
            "Connection accepted"
        );

        self.workers.spawn(async move {
            let worker = Worker::new(stream, session);
            (id, worker.run().await)
        });
    }
}

/// Logs one reaped worker outcome with its status category.
fn log_outcome(outcome: Result<WorkerOutcome, JoinError>) {
    match outcome {
        Ok((id, Ok(()))) => {
            info!(session = %id, status = 0, "Session complete");
        }
        Ok((id, Err(e))) => {
            warn!(
                session = %id,
                status = e.status_code(),
                error = %e,
                "Session failed"
            );
        }
        Err(e) => {
            error!(error = %e, "Worker task aborted");
        }
    }
}

/// Errors that prevent the daemon from starting.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Failed to create socket: {source}")]
    SocketSetup { source: std::io::Error },

    #[error("Invalid bind address {addr:?}: {source}")]
    BindAddr {
        addr: String,
        source: std::net::AddrParseError,
    },

    #[error("Failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        source: std::io::Error,
    },

    #[error("Failed to listen on {addr}: {source}")]
    Listen {
        addr: SocketAddr,
        source: std::io::Error,
    },
}

impl ServerError {
    /// Process exit code: 1 for socket setup, 2 for bind or listen.
    pub fn exit_code(&self) -> i32 {
        match self {
            ServerError::SocketSetup { .. } | ServerError::BindAddr { .. } => 1,
            ServerError::Bind { .. } | ServerError::Listen { .. } => 2,
        }
    }
}
