//! Fixed-timestep frame driver.
//!
//! Updates run at a fixed rate decoupled from the render rate. Each frame adds
//! the elapsed wall time to a lag accumulator, drains it in whole update steps
//! and hands the leftover fraction of a step to the draw pass as the
//! interpolation factor.

use crate::foundation::error::SceneResult;
use crate::render::context::RenderContext;
use crate::runtime::config::EngineConfig;
use crate::runtime::manager::NodeManager;
use crate::scene::stats::FrameStats;
use crate::space::world::Viewport;

/// Lag accumulator for a fixed update step.
#[derive(Clone, Debug, PartialEq)]
pub struct FixedStep {
    step: f64,
    max_frame_time: f64,
    max_updates: u32,
    lag: f64,
}

/// Outcome of one [`FixedStep::advance`].
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct Tick {
    /// Whole update steps to run this frame.
    pub updates: u32,
    /// Leftover lag as a fraction of a step, in `[0, 1)`.
    pub interpolation: f64,
    /// Seconds of lag discarded because the update cap was reached.
    pub dropped: f64,
}

impl FixedStep {
    /// Accumulator for the rates in `config`.
    #[must_use]
    pub fn new(config: &EngineConfig) -> Self {
        Self {
            step: config.step_secs(),
            max_frame_time: config.max_frame_time_secs,
            max_updates: config.max_updates_per_frame,
            lag: 0.0,
        }
    }

    /// Step length in seconds.
    #[must_use]
    pub fn step(&self) -> f64 {
        self.step
    }

    /// Accumulated, not yet simulated time.
    #[must_use]
    pub fn lag(&self) -> f64 {
        self.lag
    }

    /// Feeds `elapsed` seconds (clamped to `[0, max_frame_time]`) and drains
    /// whole steps, at most `max_updates_per_frame` of them.
    ///
    /// Whole steps beyond the cap are dropped; the fractional remainder is
    /// kept.
    pub fn advance(&mut self, elapsed: f64) -> Tick {
        let elapsed = if elapsed.is_finite() {
            elapsed.clamp(0.0, self.max_frame_time)
        } else {
            0.0
        };
        self.lag += elapsed;

        let mut updates = 0;
        while self.lag >= self.step && updates < self.max_updates {
            self.lag -= self.step;
            updates += 1;
        }

        let mut dropped = 0.0;
        if self.lag >= self.step {
            let kept = self.lag % self.step;
            dropped = self.lag - kept;
            self.lag = kept;
            tracing::debug!(dropped, "update cap reached, dropping lag");
        }

        Tick {
            updates,
            interpolation: self.lag / self.step,
            dropped,
        }
    }
}

/// Summary of one [`Engine::run_frame`].
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct FrameReport {
    /// Frame number, starting at zero.
    pub frame: u64,
    /// Whether a scene was running and drawn.
    pub running: bool,
    /// Fixed-step accounting.
    pub tick: Tick,
    /// Traversal counters.
    pub stats: FrameStats,
}

/// Drives a [`NodeManager`] frame by frame.
#[derive(Debug)]
pub struct Engine {
    config: EngineConfig,
    viewport: Viewport,
    clock: FixedStep,
    manager: NodeManager,
    frames: u64,
}

impl Engine {
    /// Engine over an empty manager.
    ///
    /// # Errors
    ///
    /// Rejected configuration values.
    pub fn new(config: EngineConfig) -> SceneResult<Self> {
        Self::with_manager(config, NodeManager::new())
    }

    /// Engine over an existing manager.
    ///
    /// # Errors
    ///
    /// Rejected configuration values.
    pub fn with_manager(config: EngineConfig, manager: NodeManager) -> SceneResult<Self> {
        config.validate()?;
        Ok(Self {
            viewport: config.viewport()?,
            clock: FixedStep::new(&config),
            config,
            manager,
            frames: 0,
        })
    }

    /// Settings the engine was built with.
    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// View the scenes are presented in.
    #[must_use]
    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// Scene stack.
    #[must_use]
    pub fn manager(&self) -> &NodeManager {
        &self.manager
    }

    /// Mutable scene stack.
    pub fn manager_mut(&mut self) -> &mut NodeManager {
        &mut self.manager
    }

    /// Frames run so far.
    #[must_use]
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Runs one frame: `pre_visit`, the fixed updates owed, one `visit` and
    /// `post_visit`.
    ///
    /// # Errors
    ///
    /// Failures of [`NodeManager::visit`] and [`NodeManager::post_visit`].
    #[tracing::instrument(level = "debug", skip(self, ctx), fields(frame = self.frames))]
    pub fn run_frame(
        &mut self,
        elapsed: f64,
        ctx: &mut dyn RenderContext,
    ) -> SceneResult<FrameReport> {
        self.manager.pre_visit();
        let tick = self.clock.advance(elapsed);
        let step = self.clock.step();
        for _ in 0..tick.updates {
            self.manager.update(step);
        }
        let running = self.manager.visit(ctx, tick.interpolation)?;
        let stats = self.manager.post_visit()?;

        let report = FrameReport {
            frame: self.frames,
            running,
            tick,
            stats,
        };
        self.frames += 1;
        Ok(report)
    }

    /// Runs up to `frames` frames of `elapsed` seconds each, stopping after the
    /// first frame with no running scene.
    ///
    /// # Errors
    ///
    /// As [`run_frame`](Self::run_frame).
    pub fn run(
        &mut self,
        frames: u64,
        elapsed: f64,
        ctx: &mut dyn RenderContext,
    ) -> SceneResult<Vec<FrameReport>> {
        let mut reports = Vec::new();
        for _ in 0..frames {
            let report = self.run_frame(elapsed, ctx)?;
            reports.push(report);
            if !report.running {
                break;
            }
        }
        Ok(reports)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/runtime/engine.rs"]
mod tests;
