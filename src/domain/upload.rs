use serde::{Deserialize, Serialize};

/// Mime type used when the resolver reports none.
pub const DEFAULT_MIME_TYPE: &str = "application/octet-stream";

/// Reference to the account uploads are made on behalf of.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    pub name: String,
}

impl Account {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UploadKind {
    SingleFile,
}

/// Request handed to the upload subsystem. Its fate is not tracked here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadRequest {
    pub account: Account,
    pub local_path: String,
    pub remote_path: String,
    pub upload_kind: UploadKind,
    pub mime_type: String,
    pub create_remote_folder: bool,
    pub wifi_only: bool,
}

impl UploadRequest {
    /// Build a single-file request that creates the remote folder if missing.
    /// An empty or absent mime type falls back to `DEFAULT_MIME_TYPE`.
    pub fn single_file(
        account: Account,
        local_path: impl Into<String>,
        remote_path: impl Into<String>,
        mime_type: Option<&str>,
        wifi_only: bool,
    ) -> Self {
        let mime_type = match mime_type.map(str::trim) {
            Some(mime) if !mime.is_empty() => mime.to_string(),
            _ => DEFAULT_MIME_TYPE.to_string(),
        };

        Self {
            account,
            local_path: local_path.into(),
            remote_path: remote_path.into(),
            upload_kind: UploadKind::SingleFile,
            mime_type,
            create_remote_folder: true,
            wifi_only,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_file_defaults() {
        let req = UploadRequest::single_file(
            Account::new("alice@cloud.example"),
            "/dcim/IMG_1.jpg",
            "/InstantUpload/IMG_1.jpg",
            Some("image/jpeg"),
            true,
        );

        assert_eq!(req.upload_kind, UploadKind::SingleFile);
        assert!(req.create_remote_folder);
        assert!(req.wifi_only);
        assert_eq!(req.mime_type, "image/jpeg");
    }

    #[test]
    fn test_missing_or_blank_mime_falls_back() {
        for mime in [None, Some(""), Some("  ")] {
            let req = UploadRequest::single_file(
                Account::new("a"),
                "/dcim/x",
                "/InstantUpload/x",
                mime,
                false,
            );
            assert_eq!(req.mime_type, DEFAULT_MIME_TYPE);
        }
    }

    #[test]
    fn test_serializes_upload_kind_as_snake_case() {
        let req = UploadRequest::single_file(Account::new("a"), "/l", "/r", None, false);
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["upload_kind"], "single_file");
        assert_eq!(json["account"]["name"], "a");
    }
}
