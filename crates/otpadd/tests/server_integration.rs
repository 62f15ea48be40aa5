//! Integration tests for the otpad daemons over real TCP sockets.
//!
//! Each test starts a Supervisor on an ephemeral loopback port and
//! drives complete sessions with a protocol-level client, covering the
//! round trip, flavor isolation, validation aborts, and concurrency.
//!
//! Tests CAN use `.unwrap()` and `.expect()` - the panic-free policy
//! applies to production code only.

use std::net::SocketAddr;

use tokio::io::BufReader;
use tokio::net::tcp::{OwnedReadHalf, OwnedWriteHalf};
use tokio::net::TcpStream;
use tokio::task::JoinHandle;

use otpad_core::{cipher, Direction, Message};
use otpad_protocol::{handshake, wire, Flavor, ProtocolError};
use otpadd::config::DaemonConfig;
use otpadd::server::Supervisor;

// ============================================================================
// Test Helpers
// ============================================================================

/// One daemon of a given flavor on an ephemeral loopback port.
struct TestDaemon {
    addr: SocketAddr,
    handle: JoinHandle<()>,
}

impl TestDaemon {
    async fn start(flavor: Flavor) -> Self {
        Self::start_with(flavor, None).await
    }

    async fn start_with(flavor: Flavor, max_sessions: Option<usize>) -> Self {
        let mut config = DaemonConfig::new(0);
        config.bind_host = "127.0.0.1".to_string();
        config.max_sessions = max_sessions;

        let supervisor = Supervisor::bind(&config, flavor)
            .await
            .expect("bind supervisor");
        let addr = supervisor.local_addr();

        // The socket is listening as soon as bind() returns, so clients
        // may connect before the accept loop gets polled; the backlog
        // holds them.
        let handle = tokio::spawn(async move {
            let _ = supervisor.run().await;
        });

        TestDaemon { addr, handle }
    }

    async fn connect(&self) -> TestSender {
        TestSender::connect(self.addr).await
    }
}

impl Drop for TestDaemon {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

/// Protocol-level client driving one session by hand.
struct TestSender {
    reader: BufReader<OwnedReadHalf>,
    writer: OwnedWriteHalf,
}

impl TestSender {
    async fn connect(addr: SocketAddr) -> Self {
        let stream = TcpStream::connect(addr).await.expect("connect to daemon");
        let (reader, writer) = stream.into_split();
        Self {
            reader: BufReader::new(reader),
            writer,
        }
    }

    /// Runs the whole sender side of one session.
    async fn exchange(
        mut self,
        flavor: Flavor,
        data: &[u8],
        key: &[u8],
    ) -> Result<Vec<u8>, ProtocolError> {
        handshake::initiate(&mut self.reader, &mut self.writer, flavor).await?;
        wire::write_frame(&mut self.writer, data).await?;
        wire::read_ack(&mut self.reader).await?;
        wire::write_frame(&mut self.writer, key).await?;
        wire::read_result(&mut self.reader, data.len()).await
    }

    /// Sends an arbitrary opening tag and returns the daemon's reply.
    async fn send_raw_tag(&mut self, tag: &[u8]) -> Result<Vec<u8>, ProtocolError> {
        wire::write_frame(&mut self.writer, tag).await?;
        wire::read_frame(&mut self.reader).await
    }
}

fn in_alphabet(bytes: &[u8]) -> bool {
    bytes.iter().all(|b| matches!(b, b'A'..=b'Z' | b' '))
}

/// Expected transform output, computed directly against the cipher.
fn expect_transform(data: &[u8], key: &[u8], direction: Direction) -> Vec<u8> {
    let data = Message::from_text(data).expect("valid data");
    let key = Message::from_text(key).expect("valid key");
    cipher::transform(&data, &key, direction)
        .expect("transform")
        .to_text()
}

// ============================================================================
// Round Trip Tests
// ============================================================================

#[tokio::test]
async fn test_encrypt_decrypt_round_trip() {
    let encd = TestDaemon::start(Flavor::Encrypt).await;
    let decd = TestDaemon::start(Flavor::Decrypt).await;

    let plaintext = b"HELLO WORLD";
    let key = b"XMCKL QZPWJ";

    let ciphertext = encd
        .connect()
        .await
        .exchange(Flavor::Encrypt, plaintext, key)
        .await
        .expect("encrypt exchange");

    assert_eq!(ciphertext.len(), plaintext.len());
    assert_ne!(ciphertext.as_slice(), plaintext.as_slice());
    assert!(in_alphabet(&ciphertext), "Ciphertext must stay in-alphabet");

    let recovered = decd
        .connect()
        .await
        .exchange(Flavor::Decrypt, &ciphertext, key)
        .await
        .expect("decrypt exchange");

    assert_eq!(recovered.as_slice(), plaintext.as_slice());
}

#[tokio::test]
async fn test_known_ciphertext() {
    let encd = TestDaemon::start(Flavor::Encrypt).await;

    // A(0) + B(1) = B(1)
    let result = encd
        .connect()
        .await
        .exchange(Flavor::Encrypt, b"A", b"B")
        .await
        .expect("exchange");
    assert_eq!(result, b"B");
}

#[tokio::test]
async fn test_empty_payload_round_trip() {
    let encd = TestDaemon::start(Flavor::Encrypt).await;

    let result = encd
        .connect()
        .await
        .exchange(Flavor::Encrypt, b"", b"")
        .await
        .expect("empty exchange");
    assert!(result.is_empty());
}

#[tokio::test]
async fn test_key_longer_than_data() {
    let encd = TestDaemon::start(Flavor::Encrypt).await;

    let data = b"HI";
    let key = b"QWERTYUIOP";

    let result = encd
        .connect()
        .await
        .exchange(Flavor::Encrypt, data, key)
        .await
        .expect("exchange");

    assert_eq!(result, expect_transform(data, key, Direction::Encrypt));
}

// ============================================================================
// Handshake Tests
// ============================================================================

#[tokio::test]
async fn test_cross_flavor_rejected() {
    let decd = TestDaemon::start(Flavor::Decrypt).await;

    let err = decd
        .connect()
        .await
        .exchange(Flavor::Encrypt, b"HELLO", b"WORLD")
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        ProtocolError::Rejected {
            flavor: Flavor::Encrypt,
        }
    ));

    let encd = TestDaemon::start(Flavor::Encrypt).await;

    let err = encd
        .connect()
        .await
        .exchange(Flavor::Decrypt, b"HELLO", b"WORLD")
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        ProtocolError::Rejected {
            flavor: Flavor::Decrypt,
        }
    ));
}

#[tokio::test]
async fn test_garbage_tag_rejected() {
    let encd = TestDaemon::start(Flavor::Encrypt).await;
    let mut sender = encd.connect().await;

    let reply = sender.send_raw_tag(b"OPEN SESAME").await.expect("reply");
    assert_eq!(reply, b"invalid");
}

#[tokio::test]
async fn test_daemon_survives_rejection() {
    let encd = TestDaemon::start(Flavor::Encrypt).await;

    let err = encd
        .connect()
        .await
        .exchange(Flavor::Decrypt, b"A", b"B")
        .await
        .unwrap_err();
    assert!(matches!(err, ProtocolError::Rejected { .. }));

    // The daemon keeps serving after rejecting a session.
    let result = encd
        .connect()
        .await
        .exchange(Flavor::Encrypt, b"A", b"B")
        .await
        .expect("exchange after rejection");
    assert_eq!(result, b"B");
}

// ============================================================================
// Validation Tests
// ============================================================================

#[tokio::test]
async fn test_short_key_aborts_without_result() {
    let encd = TestDaemon::start(Flavor::Encrypt).await;

    // Key "A" cannot cover data "HI"; the daemon closes with no output.
    let err = encd
        .connect()
        .await
        .exchange(Flavor::Encrypt, b"HI", b"A")
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        ProtocolError::TruncatedResult {
            expected: 2,
            received: 0,
        }
    ));
}

#[tokio::test]
async fn test_invalid_data_aborts_before_ack() {
    let encd = TestDaemon::start(Flavor::Encrypt).await;
    let mut sender = encd.connect().await;

    handshake::initiate(&mut sender.reader, &mut sender.writer, Flavor::Encrypt)
        .await
        .expect("handshake");
    wire::write_frame(&mut sender.writer, b"lowercase is not allowed")
        .await
        .expect("send data");

    let err = wire::read_ack(&mut sender.reader).await.unwrap_err();
    assert!(matches!(err, ProtocolError::ConnectionClosed));
}

#[tokio::test]
async fn test_invalid_key_aborts_after_ack() {
    let encd = TestDaemon::start(Flavor::Encrypt).await;

    let err = encd
        .connect()
        .await
        .exchange(Flavor::Encrypt, b"HELLO", b"key42")
        .await
        .unwrap_err();

    // The data was acked, so the abort surfaces while reading the result.
    assert!(matches!(
        err,
        ProtocolError::TruncatedResult { received: 0, .. }
    ));
}

// ============================================================================
// Concurrency Tests
// ============================================================================

#[tokio::test]
async fn test_concurrent_sessions() {
    let encd = TestDaemon::start(Flavor::Encrypt).await;
    let addr = encd.addr;

    let mut handles = Vec::new();
    for i in 0..8u8 {
        let handle = tokio::spawn(async move {
            // Distinct payload per session.
            let data = vec![b'A' + i; 16 + usize::from(i)];
            let key = vec![b'K'; 64];

            let sender = TestSender::connect(addr).await;
            let result = sender
                .exchange(Flavor::Encrypt, &data, &key)
                .await
                .expect("concurrent exchange");

            assert_eq!(result, expect_transform(&data, &key, Direction::Encrypt));
        });
        handles.push(handle);
    }

    for handle in handles {
        handle.await.expect("concurrent session task");
    }
}

#[tokio::test]
async fn test_sequential_sessions() {
    let decd = TestDaemon::start(Flavor::Decrypt).await;

    for _ in 0..3 {
        let result = decd
            .connect()
            .await
            .exchange(Flavor::Decrypt, b"B", b"B")
            .await
            .expect("sequential exchange");
        // B(1) - B(1) = A(0)
        assert_eq!(result, b"A");
    }
}

#[tokio::test]
async fn test_session_cap_still_serves_everyone() {
    let encd = TestDaemon::start_with(Flavor::Encrypt, Some(1)).await;
    let addr = encd.addr;

    let mut handles = Vec::new();
    for _ in 0..4 {
        let handle = tokio::spawn(async move {
            let sender = TestSender::connect(addr).await;
            sender
                .exchange(Flavor::Encrypt, b"CAPPED", b"QWERTY")
                .await
                .expect("capped exchange")
        });
        handles.push(handle);
    }

    let expected = expect_transform(b"CAPPED", b"QWERTY", Direction::Encrypt);
    for handle in handles {
        assert_eq!(handle.await.expect("capped session task"), expected);
    }
}
