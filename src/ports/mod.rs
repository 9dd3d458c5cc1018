//! Ports - Traits for the collaborators the admission filter depends on.

pub mod accounts;
pub mod media;
pub mod naming;
pub mod preferences;
pub mod upload;
