use crate::domain::upload::UploadRequest;
use std::error::Error;

#[cfg_attr(test, mockall::automock)]
pub trait UploadQueuePort: Send + Sync {
    /// Hand a request over to the upload subsystem. Must not block.
    fn enqueue(&self, request: UploadRequest) -> Result<(), Box<dyn Error + Send + Sync>>;
}
