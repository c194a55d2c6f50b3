//! Shared constants and static element configuration.

pub mod constants;
pub mod elements;
