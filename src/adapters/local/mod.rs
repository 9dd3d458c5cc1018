//! Local adapters for single-host deployment.

pub mod accounts;
pub mod events;
pub mod media;
pub mod naming;
pub mod preferences;
pub mod spool;

pub use accounts::PreferenceAccount;
pub use events::hub::EventHub;
pub use media::FsMediaResolver;
pub use naming::InstantUploadNamer;
pub use preferences::JsonPreferences;
pub use spool::SpoolQueue;
