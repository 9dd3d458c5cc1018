//! Domain layer - Pure admission types and state.

pub mod dedup;
pub mod media;
pub mod policy;
pub mod rejection;
pub mod upload;
