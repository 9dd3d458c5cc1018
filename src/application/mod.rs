//! Application layer - Services built on the ports.

pub mod admission;
