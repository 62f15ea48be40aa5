//! Byte-level framing shared by both sides of the connection.
//!
//! Every variable-length message (handshake tags, data payload, key
//! payload) is a run of ASCII bytes terminated by a single NUL. The
//! alphabet cannot contain NUL, so the sentinel is unambiguous and no
//! length prefixes are needed. The transformed result is the one
//! exception: the daemon writes exactly the payload length and closes,
//! and the sender reads to EOF.

use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};

use otpad_core::MAX_MESSAGE_LEN;

use crate::error::{ProtocolError, ProtocolResult};

/// Frame terminator.
pub const FRAME_DELIMITER: u8 = 0;

/// Maximum frame contents. Payload frames carry at most one message.
pub const MAX_FRAME_SIZE: usize = MAX_MESSAGE_LEN;

/// Acknowledgement byte the daemon sends once the data payload validates.
pub const ACK_BYTE: u8 = b'!';

/// Writes one NUL-terminated frame and flushes.
pub async fn write_frame<W>(writer: &mut W, payload: &[u8]) -> ProtocolResult<()>
where
    W: AsyncWrite + Unpin,
{
    writer.write_all(payload).await?;
    writer.write_all(&[FRAME_DELIMITER]).await?;
    writer.flush().await?;
    Ok(())
}

/// Reads one NUL-terminated frame, returning its contents without the
/// terminator.
///
/// A clean EOF before any byte, or an EOF in the middle of a frame, is
/// [`ProtocolError::ConnectionClosed`]. Size is checked after the read,
/// against [`MAX_FRAME_SIZE`].
pub async fn read_frame<R>(reader: &mut R) -> ProtocolResult<Vec<u8>>
where
    R: AsyncBufRead + Unpin,
{
    let mut buf = Vec::new();
    let bytes_read = reader.read_until(FRAME_DELIMITER, &mut buf).await?;

    if bytes_read == 0 {
        return Err(ProtocolError::ConnectionClosed);
    }

    match buf.pop() {
        Some(FRAME_DELIMITER) => {}
        // Stream ended before the terminator arrived.
        _ => return Err(ProtocolError::ConnectionClosed),
    }

    if buf.len() > MAX_FRAME_SIZE {
        return Err(ProtocolError::FrameTooLarge {
            size: buf.len(),
            max: MAX_FRAME_SIZE,
        });
    }

    Ok(buf)
}

/// Writes the single acknowledgement byte and flushes.
pub async fn write_ack<W>(writer: &mut W) -> ProtocolResult<()>
where
    W: AsyncWrite + Unpin,
{
    writer.write_all(&[ACK_BYTE]).await?;
    writer.flush().await?;
    Ok(())
}

/// Reads the single acknowledgement byte.
pub async fn read_ack<R>(reader: &mut R) -> ProtocolResult<()>
where
    R: AsyncRead + Unpin,
{
    let mut byte = [0u8; 1];
    let bytes_read = reader.read(&mut byte).await?;

    if bytes_read == 0 {
        return Err(ProtocolError::ConnectionClosed);
    }

    if byte[0] != ACK_BYTE {
        return Err(ProtocolError::UnexpectedAck { byte: byte[0] });
    }

    Ok(())
}

/// Writes the transformed result, unterminated, and flushes.
///
/// The caller closes the connection afterwards; the close is the
/// end-of-result marker.
pub async fn write_result<W>(writer: &mut W, result: &[u8]) -> ProtocolResult<()>
where
    W: AsyncWrite + Unpin,
{
    writer.write_all(result).await?;
    writer.flush().await?;
    Ok(())
}

/// Reads the transformed result: everything until the peer closes, which
/// must be exactly `expected` bytes.
pub async fn read_result<R>(reader: &mut R, expected: usize) -> ProtocolResult<Vec<u8>>
where
    R: AsyncRead + Unpin,
{
    let mut buf = Vec::with_capacity(expected);
    reader.read_to_end(&mut buf).await?;

    if buf.len() < expected {
        return Err(ProtocolError::TruncatedResult {
            expected,
            received: buf.len(),
        });
    }

    if buf.len() > expected {
        return Err(ProtocolError::TrailingData {
            expected,
            received: buf.len(),
        });
    }

    Ok(buf)
}
