//! Instant upload daemon.
//!
//! Reads media notifications from stdin, one JSON object per line:
//!
//! ```text
//! {"action": "android.hardware.action.NEW_PICTURE", "uri": "file:///dcim/IMG_1.jpg"}
//! ```
//!
//! Admitted uploads are appended to the spool file for the upload service.

use camsync::adapters::local::{
    events, EventHub, FsMediaResolver, InstantUploadNamer, JsonPreferences, PreferenceAccount,
    SpoolQueue,
};
use camsync::{AdmissionFilter, LocalConfig};
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let config = LocalConfig::from_env();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    // 1. Adapters (Local implementations)
    let preferences = match JsonPreferences::open(&config.preferences_path) {
        Ok(preferences) => Arc::new(preferences),
        Err(e) => {
            error!(error = %e, "Failed to load preferences");
            std::process::exit(1);
        }
    };

    let (uploads, spool_writer) = match SpoolQueue::open(&config.spool_path).await {
        Ok(spool) => spool,
        Err(e) => {
            error!(error = %e, "Failed to open upload spool");
            std::process::exit(1);
        }
    };

    // 2. Application Service
    let filter = Arc::new(AdmissionFilter::new(
        preferences.clone(),
        PreferenceAccount::new(preferences.clone()),
        FsMediaResolver::new(),
        InstantUploadNamer::new(preferences),
        uploads,
    ));

    // 3. Event System
    let event_hub = EventHub::new(config.event_capacity);
    let listener = events::listener::start(&event_hub, filter);

    info!(
        preferences = ?config.preferences_path,
        spool = ?config.spool_path,
        "Waiting for media notifications"
    );

    // 4. Notifications from stdin
    let published = events::feed::pump(tokio::io::stdin(), &event_hub).await;
    info!(published, "End of notification input");

    // 5. Drain: closing the hub stops the listener, which releases the spool.
    drop(event_hub);
    if let Err(e) = listener.await {
        error!(error = %e, "Listener stopped abnormally");
    }
    match spool_writer.await {
        Ok(written) => info!(written, spool = ?config.spool_path, "Upload spool closed"),
        Err(e) => error!(error = %e, "Upload spool writer stopped abnormally"),
    }
}
