//! Adapters - Concrete implementations of ports.

#[cfg(feature = "local")]
pub mod local;
