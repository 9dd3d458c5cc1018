#[cfg_attr(test, mockall::automock)]
pub trait RemotePathNamer: Send + Sync {
    /// Destination path for a file with the given display name.
    fn remote_path(&self, display_name: &str) -> String;
}
