//! In-process delivery of media notifications to the admission filter.

pub mod feed;
pub mod hub;
pub mod listener;

pub use crate::domain::media::RawNotification;
