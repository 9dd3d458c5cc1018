//! Newline-delimited JSON notifications from a byte stream (stdin in the daemon).
//!
//! A bad line never ends the feed: undecodable or overlong lines are logged
//! and skipped, only an I/O error or end of input stops it.

use super::hub::EventHub;
use super::RawNotification;
use futures::StreamExt;
use tokio::io::AsyncRead;
use tokio_util::codec::{AnyDelimiterCodec, AnyDelimiterCodecError, FramedRead};
use tracing::{error, warn};

/// Longest accepted notification line, in bytes.
pub const MAX_NOTIFICATION_LEN: usize = 64 * 1024;

/// Publish every decodable line of `input` on the hub.
/// Returns how many notifications were published.
pub async fn pump<R: AsyncRead + Unpin>(input: R, event_hub: &EventHub) -> usize {
    pump_with_limit(input, event_hub, MAX_NOTIFICATION_LEN).await
}

async fn pump_with_limit<R: AsyncRead + Unpin>(
    input: R,
    event_hub: &EventHub,
    max_len: usize,
) -> usize {
    let codec = AnyDelimiterCodec::new_with_max_length(b"\n".to_vec(), Vec::new(), max_len);
    let mut frames = FramedRead::new(input, codec);
    let mut published = 0;
    // FramedRead reports `None` once after a decode error; reading resumes after it.
    let mut resume_after_error = false;

    loop {
        let frame = match frames.next().await {
            Some(Ok(frame)) => frame,
            Some(Err(AnyDelimiterCodecError::MaxChunkLengthExceeded)) => {
                warn!(max_len, "Skipping oversized notification");
                resume_after_error = true;
                continue;
            }
            Some(Err(AnyDelimiterCodecError::Io(e))) => {
                error!(error = %e, "Failed to read notification");
                break;
            }
            None if resume_after_error => {
                resume_after_error = false;
                continue;
            }
            None => break,
        };
        resume_after_error = false;

        if frame.iter().all(u8::is_ascii_whitespace) {
            continue;
        }

        match serde_json::from_slice::<RawNotification>(&frame) {
            Ok(raw) => match event_hub.publish(raw) {
                Ok(_) => published += 1,
                Err(e) => warn!(error = %e, "No listener for notification"),
            },
            Err(e) => warn!(
                error = %e,
                line = %String::from_utf8_lossy(&frame),
                "Skipping malformed notification"
            ),
        }
    }

    published
}
