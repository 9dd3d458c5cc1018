use super::media::MediaKind;
use crate::ports::preferences::PreferenceStore;

pub const INSTANT_UPLOADING: &str = "instant_uploading";
pub const INSTANT_VIDEO_UPLOADING: &str = "instant_video_uploading";
pub const INSTANT_UPLOAD_ON_WIFI: &str = "instant_upload_on_wifi";
pub const INSTANT_VIDEO_UPLOAD_ON_WIFI: &str = "instant_video_upload_on_wifi";

/// Snapshot of the instant upload preferences, taken once per handled event.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UploadPolicy {
    pub photo_enabled: bool,
    pub video_enabled: bool,
    pub photo_wifi_only: bool,
    pub video_wifi_only: bool,
}

impl UploadPolicy {
    /// Read the four flags from the store. Unset keys mean disabled.
    pub fn load<P: PreferenceStore + ?Sized>(store: &P) -> Self {
        let flag = |key: &str| store.get_bool(key).unwrap_or(false);
        Self {
            photo_enabled: flag(INSTANT_UPLOADING),
            video_enabled: flag(INSTANT_VIDEO_UPLOADING),
            photo_wifi_only: flag(INSTANT_UPLOAD_ON_WIFI),
            video_wifi_only: flag(INSTANT_VIDEO_UPLOAD_ON_WIFI),
        }
    }

    pub fn enabled(&self, kind: MediaKind) -> bool {
        match kind {
            MediaKind::Photo => self.photo_enabled,
            MediaKind::Video => self.video_enabled,
        }
    }

    pub fn wifi_only(&self, kind: MediaKind) -> bool {
        match kind {
            MediaKind::Photo => self.photo_wifi_only,
            MediaKind::Video => self.video_wifi_only,
        }
    }
}
