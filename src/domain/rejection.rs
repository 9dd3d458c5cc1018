//! Reasons an event does not become an upload request.
//!
//! None of these are faults from the dispatcher's point of view: each one is
//! logged and the event is dropped.

use super::media::MediaKind;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Rejection {
    #[error("incorrect event received: {0}")]
    UnrecognizedEventKind(String),

    #[error("instant {0} upload disabled, ignoring new {0}")]
    PolicyDisabled(MediaKind),

    #[error("no account found for instant upload, aborting")]
    NoAccount,

    #[error("couldn't resolve given uri: {uri} ({reason})")]
    UnresolvableMedia { uri: String, reason: String },

    #[error("duplicate detected: {0}. Ignore.")]
    DuplicateSuppressed(String),

    #[error("upload subsystem refused request for {path}")]
    EnqueueFailed {
        path: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

/// Log severity a rejection is reported at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Debug,
    Warn,
    Error,
}

impl Rejection {
    pub fn severity(&self) -> Severity {
        match self {
            Rejection::PolicyDisabled(_) | Rejection::DuplicateSuppressed(_) => Severity::Debug,
            Rejection::NoAccount | Rejection::UnrecognizedEventKind(_) => Severity::Warn,
            Rejection::UnresolvableMedia { .. } | Rejection::EnqueueFailed { .. } => {
                Severity::Error
            }
        }
    }
}
