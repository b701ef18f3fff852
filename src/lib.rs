//! Scenery is the core of a 2D scene-graph engine.
//!
//! Consumers build a tree of positionable nodes, push scene roots onto a
//! stack, and let the engine walk the running scene every frame: composing
//! coordinate transforms, invoking behavior hooks and routing input.
//!
//! # Frame overview
//!
//! 1. **Update**: fixed-timestep [`NodeManager::update`] calls on every timing target
//! 2. **Visit**: [`NodeManager::visit`] resolves scene transitions, then draws the
//!    running scene with the leftover step fraction as interpolation
//! 3. **Finish**: [`NodeManager::post_visit`] destroys retired scenes and reports
//!    [`FrameStats`]
//!
//! [`Engine`] runs that loop from wall-clock frame times.
//!
//! # Conventions
//!
//! - **Row-vector composition**: `multiply(m, n)` applies `m`, then `n`.
//! - **Y down**: positive rotations turn clockwise on screen.
//! - **Arena ownership**: nodes live in a [`SceneTree`] and are addressed by
//!   [`NodeId`]; destroying a node destroys its subtree.
//! - **No unsafe**: `unsafe` is forbidden in this crate.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;
mod render;
mod runtime;
mod scene;

/// Coordinate spaces and the conversions between them.
pub mod space;
/// Affine matrices, vector helpers and the pan/zoom transform.
pub mod transform;

pub use foundation::core::{Affine, BezPath, EPSILON, Point, Rect, Size, Vec2, approx_eq};
pub use foundation::error::{SceneError, SceneResult};
pub use foundation::ids::{IdAllocator, NodeId};
pub use render::context::RenderContext;
pub use render::recording::{DrawCommand, RecordingContext};
pub use runtime::config::EngineConfig;
pub use runtime::engine::{Engine, FixedStep, FrameReport, Tick};
pub use runtime::manager::NodeManager;
pub use scene::event::{InputEvent, PointerButton};
pub use scene::filter::{Filter, FilterKind, FilterPreset, calc_filtered_transform};
pub use scene::node::{DrawInfo, NodeBehavior, NodeKind, NodeMut, Pose};
pub use scene::stats::FrameStats;
pub use scene::transition::{Transition, TransitionAction};
pub use scene::tree::SceneTree;
pub use space::world::{Viewport, World};
pub use transform::affine::{AffineTransform, multiply, multiply_post, multiply_pre};
pub use transform::zoom::ZoomTransform;
