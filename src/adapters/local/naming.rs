use crate::ports::naming::RemotePathNamer;
use crate::ports::preferences::PreferenceStore;

/// Preference key for the remote folder instant uploads land in.
pub const INSTANT_UPLOAD_PATH: &str = "instant_upload_path";
pub const DEFAULT_INSTANT_UPLOAD_PATH: &str = "/InstantUpload";

/// Places files directly under the configured instant upload folder.
pub struct InstantUploadNamer<P> {
    preferences: P,
}

impl<P: PreferenceStore> InstantUploadNamer<P> {
    pub fn new(preferences: P) -> Self {
        Self { preferences }
    }

    fn root(&self) -> String {
        self.preferences
            .get_string(INSTANT_UPLOAD_PATH)
            .filter(|root| !root.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_INSTANT_UPLOAD_PATH.to_string())
    }
}

impl<P: PreferenceStore> RemotePathNamer for InstantUploadNamer<P> {
    fn remote_path(&self, display_name: &str) -> String {
        format!(
            "{}/{}",
            self.root().trim_end_matches('/'),
            display_name.trim_start_matches('/')
        )
    }
}
