use std::path::Path;

use anyhow::Context as _;

use crate::foundation::error::{SceneError, SceneResult};
use crate::space::world::Viewport;

/// Frame-loop and view settings.
///
/// Every field has a default, so a JSON document only needs the keys it
/// overrides.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Fixed update rate in Hz.
    pub updates_per_second: f64,
    /// Updates run by a single frame before the remaining lag is dropped.
    pub max_updates_per_frame: u32,
    /// Longest frame time, in seconds, fed to the lag accumulator.
    pub max_frame_time_secs: f64,
    /// Logical view width.
    pub view_width: f64,
    /// Logical view height.
    pub view_height: f64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            updates_per_second: 60.0,
            max_updates_per_frame: 5,
            max_frame_time_secs: 0.25,
            view_width: 800.0,
            view_height: 600.0,
        }
    }
}

impl EngineConfig {
    /// Checks that the loop can run with these settings.
    ///
    /// # Errors
    ///
    /// [`SceneError::Validation`] naming the first offending field.
    pub fn validate(&self) -> SceneResult<()> {
        if !(self.updates_per_second.is_finite() && self.updates_per_second > 0.0) {
            return Err(SceneError::validation(
                "updates_per_second must be a positive number",
            ));
        }
        if self.max_updates_per_frame == 0 {
            return Err(SceneError::validation("max_updates_per_frame must be > 0"));
        }
        if !(self.max_frame_time_secs.is_finite() && self.max_frame_time_secs > 0.0) {
            return Err(SceneError::validation(
                "max_frame_time_secs must be a positive number",
            ));
        }
        self.viewport().map(|_| ())
    }

    /// Length of one fixed update step in seconds.
    pub fn step_secs(&self) -> f64 {
        1.0 / self.updates_per_second
    }

    /// 1:1 viewport of the configured view size.
    ///
    /// # Errors
    ///
    /// [`SceneError::Validation`] for a degenerate view size.
    pub fn viewport(&self) -> SceneResult<Viewport> {
        Viewport::new(self.view_width, self.view_height)
    }

    /// Parses and validates a JSON document.
    ///
    /// # Errors
    ///
    /// [`SceneError::Other`] for malformed JSON, [`SceneError::Validation`] for
    /// rejected values.
    pub fn from_json_str(s: &str) -> SceneResult<Self> {
        let cfg: Self = serde_json::from_str(s)
            .context("parse engine config JSON")
            .map_err(SceneError::from)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Reads, parses and validates a JSON file.
    ///
    /// # Errors
    ///
    /// As [`from_json_str`](Self::from_json_str), plus IO failures.
    pub fn from_json_path(path: &Path) -> SceneResult<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("read engine config '{}'", path.display()))
            .map_err(SceneError::from)?;
        Self::from_json_str(&text)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/runtime/config.rs"]
mod tests;
