//! Camsync - Instant upload admission for a sync client
//!
//! Hexagonal Architecture:
//! - domain/: Media events, policy, dedup state, upload requests
//! - ports/: Trait definitions for preferences, accounts, media, naming, uploads
//! - adapters/: Concrete implementations
//! - application/: The admission filter
//! - config: Environment configuration
//!
//! # Features
//! - `local`: Single-host adapters (JSON preferences, filesystem media, spool queue)

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;

// Re-exports for convenience
#[cfg(feature = "local")]
pub use adapters::local::{events, EventHub};

#[cfg(feature = "local")]
pub use config::LocalConfig;

pub use application::admission::AdmissionFilter;
pub use domain::media::{MediaAction, MediaEvent, MediaKind, MediaMetadata, RawNotification};
pub use domain::policy::UploadPolicy;
pub use domain::rejection::Rejection;
pub use domain::upload::{Account, UploadKind, UploadRequest};
