use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::rejection::Rejection;

/// Unofficial camera action, delivered by most devices alongside the official one.
pub const NEW_PHOTO_ACTION_UNOFFICIAL: &str = "com.android.camera.NEW_PICTURE";
pub const NEW_PHOTO_ACTION: &str = "android.hardware.action.NEW_PICTURE";
pub const NEW_VIDEO_ACTION: &str = "android.hardware.action.NEW_VIDEO";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Photo,
    Video,
}

impl fmt::Display for MediaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MediaKind::Photo => write!(f, "photo"),
            MediaKind::Video => write!(f, "video"),
        }
    }
}

/// Notification channel an event arrived on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaAction {
    UnofficialNewPicture,
    NewPicture,
    NewVideo,
}

impl MediaAction {
    pub fn kind(&self) -> MediaKind {
        match self {
            MediaAction::UnofficialNewPicture | MediaAction::NewPicture => MediaKind::Photo,
            MediaAction::NewVideo => MediaKind::Video,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MediaAction::UnofficialNewPicture => NEW_PHOTO_ACTION_UNOFFICIAL,
            MediaAction::NewPicture => NEW_PHOTO_ACTION,
            MediaAction::NewVideo => NEW_VIDEO_ACTION,
        }
    }

    pub fn is_official(&self) -> bool {
        !matches!(self, MediaAction::UnofficialNewPicture)
    }
}

impl FromStr for MediaAction {
    type Err = Rejection;

    fn from_str(action: &str) -> Result<Self, Self::Err> {
        match action {
            NEW_PHOTO_ACTION_UNOFFICIAL => Ok(MediaAction::UnofficialNewPicture),
            NEW_PHOTO_ACTION => Ok(MediaAction::NewPicture),
            NEW_VIDEO_ACTION => Ok(MediaAction::NewVideo),
            other => Err(Rejection::UnrecognizedEventKind(other.to_string())),
        }
    }
}

/// Raw notification as delivered by the media change notifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawNotification {
    pub action: String,
    pub uri: String,
}

/// A decoded "new media item" event. The uri is an opaque handle for the resolver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaEvent {
    pub action: MediaAction,
    pub uri: String,
}

impl MediaEvent {
    pub fn new(action: MediaAction, uri: impl Into<String>) -> Self {
        Self {
            action,
            uri: uri.into(),
        }
    }

    pub fn kind(&self) -> MediaKind {
        self.action.kind()
    }
}

/// Attributes of a media item, as returned by a `MediaResolver`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaMetadata {
    pub path: String,
    pub display_name: String,
    pub mime_type: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_both_picture_actions_decode_to_photo() {
        let unofficial: MediaAction = NEW_PHOTO_ACTION_UNOFFICIAL.parse().unwrap();
        let official: MediaAction = NEW_PHOTO_ACTION.parse().unwrap();

        assert_eq!(unofficial.kind(), MediaKind::Photo);
        assert_eq!(official.kind(), MediaKind::Photo);
        assert!(!unofficial.is_official());
        assert!(official.is_official());
    }

    #[test]
    fn test_video_action_decodes_to_video() {
        let action: MediaAction = NEW_VIDEO_ACTION.parse().unwrap();
        assert_eq!(action, MediaAction::NewVideo);
        assert_eq!(action.kind(), MediaKind::Video);
        assert_eq!(action.as_str(), NEW_VIDEO_ACTION);
    }

    #[test]
    fn test_unknown_action_is_rejected() {
        match "android.intent.action.BOOT_COMPLETED".parse::<MediaAction>() {
            Err(Rejection::UnrecognizedEventKind(action)) => {
                assert_eq!(action, "android.intent.action.BOOT_COMPLETED")
            }
            other => panic!("expected UnrecognizedEventKind, got {:?}", other),
        }
    }

    #[test]
    fn test_raw_notification_from_json() {
        let raw: RawNotification = serde_json::from_str(
            r#"{"action": "android.hardware.action.NEW_PICTURE", "uri": "file:///dcim/IMG_1.jpg"}"#,
        )
        .unwrap();
        let action: MediaAction = raw.action.parse().unwrap();

        assert_eq!(action, MediaAction::NewPicture);
        assert_eq!(raw.uri, "file:///dcim/IMG_1.jpg");
    }
}
