//! Resolves `file://` handles (or bare absolute paths) against the local filesystem.

use crate::domain::media::{MediaKind, MediaMetadata};
use crate::ports::media::MediaResolver;
use async_trait::async_trait;
use std::error::Error;
use std::io;
use std::path::Path;
use thiserror::Error;

const FILE_SCHEME: &str = "file://";

#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("unsupported media handle: {0}")]
    UnsupportedHandle(String),
    #[error("failed to stat {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },
}

#[derive(Clone, Copy, Debug, Default)]
pub struct FsMediaResolver;

impl FsMediaResolver {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl MediaResolver for FsMediaResolver {
    async fn resolve(
        &self,
        uri: &str,
        kind: MediaKind,
    ) -> Result<Option<MediaMetadata>, Box<dyn Error + Send + Sync>> {
        let path = uri.strip_prefix(FILE_SCHEME).unwrap_or(uri);
        if !path.starts_with('/') {
            return Err(ResolveError::UnsupportedHandle(uri.to_string()).into());
        }

        let metadata = match tokio::fs::metadata(path).await {
            Ok(metadata) => metadata,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(source) => {
                return Err(ResolveError::Io {
                    path: path.to_string(),
                    source,
                }
                .into())
            }
        };
        if !metadata.is_file() {
            return Ok(None);
        }

        let mime_type = mime_for(Path::new(path));
        // Behaves like a per-kind media table: a video file is not a photo row.
        if let Some(mime) = mime_type {
            if media_kind_of(mime) != Some(kind) {
                return Ok(None);
            }
        }

        let display_name = Path::new(path)
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();

        Ok(Some(MediaMetadata {
            path: path.to_string(),
            display_name,
            mime_type: mime_type.map(String::from),
        }))
    }
}

/// Mime type for the camera formats we know by extension.
pub fn mime_for(path: &Path) -> Option<&'static str> {
    let extension = path.extension()?.to_str()?.to_ascii_lowercase();
    let mime = match extension.as_str() {
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "heic" => "image/heic",
        "heif" => "image/heif",
        "dng" => "image/x-adobe-dng",
        "mp4" => "video/mp4",
        "3gp" => "video/3gpp",
        "mov" => "video/quicktime",
        "mkv" => "video/x-matroska",
        "webm" => "video/webm",
        _ => return None,
    };
    Some(mime)
}

fn media_kind_of(mime: &str) -> Option<MediaKind> {
    if mime.starts_with("image/") {
        Some(MediaKind::Photo)
    } else if mime.starts_with("video/") {
        Some(MediaKind::Video)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_resolves_file_uri() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("IMG_1.jpg");
        fs::write(&path, b"jpeg").unwrap();
        let uri = format!("file://{}", path.display());

        let metadata = FsMediaResolver::new()
            .resolve(&uri, MediaKind::Photo)
            .await
            .unwrap()
            .unwrap();

        assert_eq!(metadata.path, path.to_string_lossy());
        assert_eq!(metadata.display_name, "IMG_1.jpg");
        assert_eq!(metadata.mime_type.as_deref(), Some("image/jpeg"));
    }

    #[tokio::test]
    async fn test_unknown_extension_has_no_mime() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("capture.raw0");
        fs::write(&path, b"?").unwrap();

        let metadata = FsMediaResolver::new()
            .resolve(path.to_str().unwrap(), MediaKind::Photo)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(metadata.mime_type, None);
    }

    #[tokio::test]
    async fn test_missing_file_is_not_found() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("gone.jpg");

        let result = FsMediaResolver::new()
            .resolve(path.to_str().unwrap(), MediaKind::Photo)
            .await
            .unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_directory_is_not_found() {
        let dir = tempdir().unwrap();

        let result = FsMediaResolver::new()
            .resolve(dir.path().to_str().unwrap(), MediaKind::Video)
            .await
            .unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_kind_mismatch_is_not_found() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("VID_1.mp4");
        fs::write(&path, b"mp4").unwrap();

        let resolver = FsMediaResolver::new();
        assert!(resolver
            .resolve(path.to_str().unwrap(), MediaKind::Photo)
            .await
            .unwrap()
            .is_none());
        assert!(resolver
            .resolve(path.to_str().unwrap(), MediaKind::Video)
            .await
            .unwrap()
            .is_some());
    }

    #[tokio::test]
    async fn test_foreign_handle_is_an_error() {
        let result = FsMediaResolver::new()
            .resolve("content://media/external/images/media/42", MediaKind::Photo)
            .await;
        assert!(result.is_err());
    }

    #[test]
    fn test_mime_for_is_case_insensitive() {
        assert_eq!(mime_for(Path::new("/dcim/IMG_1.JPG")), Some("image/jpeg"));
        assert_eq!(mime_for(Path::new("/dcim/VID_1.3gp")), Some("video/3gpp"));
        assert_eq!(mime_for(Path::new("/dcim/noext")), None);
    }
}
