//! The flavor-asserting tag exchange that opens every session.
//!
//! The sender states its flavor with a request tag; the daemon answers
//! with its own acceptance tag, or with the rejection tag when the
//! flavors do not match. Rejection happens before any payload is read.

use tokio::io::{AsyncBufRead, AsyncWrite};
use tracing::debug;

use crate::error::{ProtocolError, ProtocolResult};
use crate::flavor::{Flavor, REJECT_TAG};
use crate::wire::{read_frame, write_frame};

/// Sender side: asserts `flavor` and waits for the daemon's verdict.
///
/// Returns `Rejected` when the daemon answers with the rejection tag and
/// `UnexpectedTag` on any other reply that is not the matching
/// acceptance tag.
pub async fn initiate<R, W>(reader: &mut R, writer: &mut W, flavor: Flavor) -> ProtocolResult<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    write_frame(writer, flavor.request_tag().as_bytes()).await?;

    let reply = read_frame(reader).await?;
    if reply == REJECT_TAG.as_bytes() {
        return Err(ProtocolError::Rejected { flavor });
    }
    if reply != flavor.accept_tag().as_bytes() {
        return Err(ProtocolError::UnexpectedTag {
            expected: flavor.accept_tag(),
            got: String::from_utf8_lossy(&reply).into_owned(),
        });
    }

    debug!(%flavor, "Handshake accepted");
    Ok(())
}

/// Daemon side: reads the sender's request tag and answers it.
///
/// A matching tag is answered with the acceptance tag; anything else is
/// answered with the rejection tag and returned as `UnexpectedTag`. No
/// payload bytes are consumed on the rejection path.
pub async fn respond<R, W>(reader: &mut R, writer: &mut W, flavor: Flavor) -> ProtocolResult<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let request = read_frame(reader).await?;

    if request != flavor.request_tag().as_bytes() {
        write_frame(writer, REJECT_TAG.as_bytes()).await?;
        return Err(ProtocolError::UnexpectedTag {
            expected: flavor.request_tag(),
            got: String::from_utf8_lossy(&request).into_owned(),
        });
    }

    write_frame(writer, flavor.accept_tag().as_bytes()).await?;

    debug!(%flavor, "Handshake answered");
    Ok(())
}
