//! Upload queue that appends admitted requests to a JSON-lines spool file.
//!
//! `enqueue` only pushes onto a channel; a background task owns the file and
//! does the writing, so callers never wait on disk I/O.

use crate::domain::upload::UploadRequest;
use crate::ports::upload::UploadQueuePort;
use std::error::Error;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tokio::fs::{File, OpenOptions};
use tokio::io::AsyncWriteExt;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, error};

#[derive(Debug, Error)]
pub enum SpoolError {
    #[error("failed to open spool {path:?}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("spool writer has shut down")]
    Closed,
}

#[derive(Clone, Debug)]
pub struct SpoolQueue {
    sender: mpsc::UnboundedSender<UploadRequest>,
}

impl SpoolQueue {
    /// Open (or create) the spool file and start its writer.
    ///
    /// The writer runs until every `SpoolQueue` clone is dropped and returns
    /// the number of requests it wrote.
    pub async fn open(path: impl AsRef<Path>) -> Result<(Self, JoinHandle<usize>), SpoolError> {
        let path = path.as_ref().to_path_buf();
        let open_error = |source| SpoolError::Open {
            path: path.clone(),
            source,
        };

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await.map_err(open_error)?;
        }
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .await
            .map_err(open_error)?;

        let (sender, receiver) = mpsc::unbounded_channel();
        let writer = tokio::spawn(write_loop(path, file, receiver));
        Ok((Self { sender }, writer))
    }
}

impl UploadQueuePort for SpoolQueue {
    fn enqueue(&self, request: UploadRequest) -> Result<(), Box<dyn Error + Send + Sync>> {
        self.sender
            .send(request)
            .map_err(|_| SpoolError::Closed.into())
    }
}

async fn write_loop(
    path: PathBuf,
    mut file: File,
    mut receiver: mpsc::UnboundedReceiver<UploadRequest>,
) -> usize {
    let mut written = 0;
    while let Some(request) = receiver.recv().await {
        match append(&mut file, &request).await {
            Ok(()) => {
                written += 1;
                debug!(spool = ?path, local_path = %request.local_path, "Upload request spooled");
            }
            Err(e) => error!(
                spool = ?path,
                local_path = %request.local_path,
                error = %e,
                "Failed to spool upload request"
            ),
        }
    }
    written
}

async fn append(file: &mut File, request: &UploadRequest) -> io::Result<()> {
    let mut line = serde_json::to_vec(request)?;
    line.push(b'\n');
    file.write_all(&line).await?;
    file.flush().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::upload::Account;
    use tempfile::tempdir;

    fn request(local_path: &str) -> UploadRequest {
        UploadRequest::single_file(
            Account::new("alice"),
            local_path,
            "/InstantUpload/x",
            Some("image/jpeg"),
            false,
        )
    }

    #[tokio::test]
    async fn test_spools_requests_in_order() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("spool").join("uploads.jsonl");

        let (queue, writer) = SpoolQueue::open(&path).await.unwrap();
        queue.enqueue(request("/dcim/IMG_1.jpg")).unwrap();
        queue.enqueue(request("/dcim/IMG_2.jpg")).unwrap();
        drop(queue);

        assert_eq!(writer.await.unwrap(), 2);

        let contents = tokio::fs::read_to_string(&path).await.unwrap();
        let spooled: Vec<UploadRequest> = contents
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect();
        assert_eq!(
            spooled,
            vec![request("/dcim/IMG_1.jpg"), request("/dcim/IMG_2.jpg")]
        );
    }

    #[tokio::test]
    async fn test_appends_to_existing_spool() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("uploads.jsonl");

        for local_path in ["/dcim/a.jpg", "/dcim/b.jpg"] {
            let (queue, writer) = SpoolQueue::open(&path).await.unwrap();
            queue.enqueue(request(local_path)).unwrap();
            drop(queue);
            writer.await.unwrap();
        }

        let contents = tokio::fs::read_to_string(&path).await.unwrap();
        assert_eq!(contents.lines().count(), 2);
    }

    #[tokio::test]
    async fn test_enqueue_after_writer_stops_fails() {
        let dir = tempdir().unwrap();
        let (queue, writer) = SpoolQueue::open(dir.path().join("uploads.jsonl"))
            .await
            .unwrap();

        writer.abort();
        let _ = writer.await;

        assert!(queue.enqueue(request("/dcim/IMG_1.jpg")).is_err());
    }
}
