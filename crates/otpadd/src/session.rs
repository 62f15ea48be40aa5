//! Per-connection identity and lifecycle state.

use std::fmt;
use std::net::SocketAddr;

use tracing::debug;

use otpad_protocol::Flavor;

/// Identifier for one accepted connection, unique within a daemon run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SessionId(u64);

impl SessionId {
    pub fn new(value: u64) -> Self {
        SessionId(value)
    }

    pub fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Where a session is in its lifecycle.
///
/// The normal path is `Pending -> Accepted -> Exchanging -> Closed`. A
/// failed handshake goes `Pending -> Rejected` instead; the connection
/// closes in either terminal phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    /// Accepted by the supervisor, handshake not yet answered.
    Pending,
    /// Request tag matched, acceptance tag sent.
    Accepted,
    /// Payload transfer and transform in progress.
    Exchanging,
    /// Request tag did not match, rejection tag sent.
    Rejected,
    /// Result written, connection shut down.
    Closed,
}

impl fmt::Display for SessionPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SessionPhase::Pending => "pending",
            SessionPhase::Accepted => "accepted",
            SessionPhase::Exchanging => "exchanging",
            SessionPhase::Rejected => "rejected",
            SessionPhase::Closed => "closed",
        };
        write!(f, "{name}")
    }
}

/// One accepted connection.
///
/// Created by the supervisor on accept, then owned by exactly one worker
/// task until it finishes. Nothing outside that worker ever sees it.
#[derive(Debug)]
pub struct Session {
    id: SessionId,
    peer: SocketAddr,
    flavor: Flavor,
    phase: SessionPhase,
}

impl Session {
    /// Creates a session in the `Pending` phase.
    pub fn new(id: SessionId, peer: SocketAddr, flavor: Flavor) -> Self {
        Session {
            id,
            peer,
            flavor,
            phase: SessionPhase::Pending,
        }
    }

    pub fn id(&self) -> SessionId {
        self.id
    }

    pub fn peer(&self) -> SocketAddr {
        self.peer
    }

    /// The flavor this session serves, fixed by the daemon.
    pub fn flavor(&self) -> Flavor {
        self.flavor
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    /// Records a phase transition.
    pub fn advance(&mut self, phase: SessionPhase) {
        debug!(
            session = %self.id,
            from = %self.phase,
            to = %phase,
            "Session phase change"
        );
        self.phase = phase;
    }
}
