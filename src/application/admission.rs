use crate::domain::dedup::PhotoDedup;
use crate::domain::media::{MediaAction, MediaEvent, MediaKind, RawNotification};
use crate::domain::policy::UploadPolicy;
use crate::domain::rejection::{Rejection, Severity};
use crate::domain::upload::UploadRequest;
use crate::ports::accounts::AccountResolver;
use crate::ports::media::MediaResolver;
use crate::ports::naming::RemotePathNamer;
use crate::ports::preferences::PreferenceStore;
use crate::ports::upload::UploadQueuePort;
use std::path::Path;
use tracing::{debug, error, info, warn};

/// Decides whether a new photo or video becomes an upload request.
///
/// Every event either ends up in the upload queue or is dropped with a log
/// line; nothing is returned to the notifier as an error.
pub struct AdmissionFilter<P, A, M, N, U> {
    preferences: P,
    accounts: A,
    resolver: M,
    namer: N,
    uploads: U,
    photo_dedup: PhotoDedup,
}

impl<P, A, M, N, U> AdmissionFilter<P, A, M, N, U>
where
    P: PreferenceStore,
    A: AccountResolver,
    M: MediaResolver,
    N: RemotePathNamer,
    U: UploadQueuePort,
{
    pub fn new(preferences: P, accounts: A, resolver: M, namer: N, uploads: U) -> Self {
        Self {
            preferences,
            accounts,
            resolver,
            namer,
            uploads,
            photo_dedup: PhotoDedup::new(),
        }
    }

    /// Decode a raw notification and handle it.
    pub async fn dispatch(&self, raw: RawNotification) -> Option<UploadRequest> {
        debug!(action = %raw.action, "Received notification");

        let event = match raw.action.parse::<MediaAction>() {
            Ok(action) => MediaEvent::new(action, raw.uri),
            Err(rejection) => {
                report(None, &raw.uri, &rejection);
                return None;
            }
        };

        let request = self.handle(&event).await;
        debug!(
            action = event.action.as_str(),
            official = event.action.is_official(),
            "Notification processed"
        );
        request
    }

    pub async fn handle(&self, event: &MediaEvent) -> Option<UploadRequest> {
        match self.admit(event).await {
            Ok(request) => {
                info!(
                    kind = %event.kind(),
                    local_path = %request.local_path,
                    remote_path = %request.remote_path,
                    wifi_only = request.wifi_only,
                    "Instant upload enqueued"
                );
                Some(request)
            }
            Err(rejection) => {
                report(Some(event.kind()), &event.uri, &rejection);
                None
            }
        }
    }

    async fn admit(&self, event: &MediaEvent) -> Result<UploadRequest, Rejection> {
        let kind = event.kind();
        debug!(%kind, uri = %event.uri, "New {} received", kind);

        let policy = UploadPolicy::load(&self.preferences);
        if !policy.enabled(kind) {
            return Err(Rejection::PolicyDisabled(kind));
        }

        let account = self
            .accounts
            .current_account()
            .ok_or(Rejection::NoAccount)?;

        // Resolved before touching the dedup state so no lock is held across the await.
        let metadata = match self.resolver.resolve(&event.uri, kind).await {
            Ok(Some(metadata)) if !metadata.path.is_empty() => metadata,
            Ok(Some(_)) => {
                return Err(Rejection::UnresolvableMedia {
                    uri: event.uri.clone(),
                    reason: "resolver returned an empty path".to_string(),
                })
            }
            Ok(None) => {
                return Err(Rejection::UnresolvableMedia {
                    uri: event.uri.clone(),
                    reason: "no matching media item".to_string(),
                })
            }
            Err(e) => {
                return Err(Rejection::UnresolvableMedia {
                    uri: event.uri.clone(),
                    reason: e.to_string(),
                })
            }
        };

        // Videos only ever arrive on one channel.
        if kind == MediaKind::Photo && !self.photo_dedup.admit(&metadata.path) {
            return Err(Rejection::DuplicateSuppressed(metadata.path));
        }
        debug!(path = %metadata.path, "Path resolved");

        let display_name = if metadata.display_name.is_empty() {
            Path::new(&metadata.path)
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_default()
        } else {
            metadata.display_name
        };

        let request = UploadRequest::single_file(
            account,
            metadata.path,
            self.namer.remote_path(&display_name),
            metadata.mime_type.as_deref(),
            policy.wifi_only(kind),
        );

        self.uploads
            .enqueue(request.clone())
            .map_err(|source| Rejection::EnqueueFailed {
                path: request.local_path.clone(),
                source,
            })?;

        Ok(request)
    }
}

fn report(kind: Option<MediaKind>, uri: &str, rejection: &Rejection) {
    let kind = kind.map(|k| k.to_string()).unwrap_or_default();
    match rejection.severity() {
        Severity::Debug => debug!(%kind, uri, "{}", rejection),
        Severity::Warn => warn!(%kind, uri, "{}", rejection),
        Severity::Error => match rejection {
            Rejection::EnqueueFailed { source, .. } => {
                error!(%kind, uri, error = %source, "{}", rejection)
            }
            _ => error!(%kind, uri, "{}", rejection),
        },
    }
}
