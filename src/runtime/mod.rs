//! Frame loop: configuration, the scene stack and the fixed-step driver.

pub(crate) mod config;
pub(crate) mod engine;
pub(crate) mod manager;
