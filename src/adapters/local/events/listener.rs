use super::hub::EventHub;
use crate::application::admission::AdmissionFilter;
use crate::ports::{
    accounts::AccountResolver, media::MediaResolver, naming::RemotePathNamer,
    preferences::PreferenceStore, upload::UploadQueuePort,
};
use std::sync::Arc;
use tokio::sync::broadcast::error::RecvError;
use tokio::task::{JoinError, JoinHandle, JoinSet};
use tracing::{error, warn};

/// Feed every notification published on the hub to the filter.
///
/// Each notification is handled on its own task, so duplicates may race; the
/// filter is responsible for that. The returned task ends once the hub is
/// dropped and all in-flight notifications have been handled.
pub fn start<P, A, M, N, U>(
    event_hub: &EventHub,
    filter: Arc<AdmissionFilter<P, A, M, N, U>>,
) -> JoinHandle<()>
where
    P: PreferenceStore + 'static,
    A: AccountResolver + 'static,
    M: MediaResolver + 'static,
    N: RemotePathNamer + 'static,
    U: UploadQueuePort + 'static,
{
    let mut rx = event_hub.subscribe();

    tokio::spawn(async move {
        let mut in_flight = JoinSet::new();
        loop {
            tokio::select! {
                received = rx.recv() => match received {
                    Ok(raw) => {
                        let filter = filter.clone();
                        in_flight.spawn(async move {
                            filter.dispatch(raw).await;
                        });
                    }
                    Err(RecvError::Lagged(skipped)) => {
                        warn!(skipped, "Listener fell behind, notifications were dropped")
                    }
                    Err(RecvError::Closed) => break,
                },
                Some(finished) = in_flight.join_next(), if !in_flight.is_empty() => {
                    log_handler_exit(finished)
                }
            }
        }

        while let Some(finished) = in_flight.join_next().await {
            log_handler_exit(finished);
        }
    })
}

fn log_handler_exit(finished: Result<(), JoinError>) {
    if let Err(e) = finished {
        error!(error = %e, "Notification handler did not complete");
    }
}
