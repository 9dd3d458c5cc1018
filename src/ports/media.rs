use crate::domain::media::{MediaKind, MediaMetadata};
use async_trait::async_trait;
use std::error::Error;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MediaResolver: Send + Sync {
    /// Look up path, display name and mime type for an opaque media handle.
    /// `Ok(None)` means the handle points at nothing (e.g. the item was deleted).
    async fn resolve(
        &self,
        uri: &str,
        kind: MediaKind,
    ) -> Result<Option<MediaMetadata>, Box<dyn Error + Send + Sync>>;
}
