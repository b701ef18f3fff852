//! Scene stack, lifecycle notifications and target registries.
//!
//! The manager owns the [`SceneTree`] and a stack of scene roots. Stack edits
//! (`push_node`, `pop_node`, `replace`) take effect on the stack immediately but
//! only mark the new top as *next*; the running scene is swapped inside
//! [`visit`](NodeManager::visit), so a frame never observes half a switch.
//!
//! Nodes that report [`receives_updates`](crate::NodeBehavior::receives_updates)
//! or [`receives_events`](crate::NodeBehavior::receives_events) while their
//! scene enters are registered automatically and dropped again when it exits.
//! Manual registrations survive scene switches until
//! [`unregister`](NodeManager::unregister) or a
//! [`ReplaceAndTakeUnregister`](crate::TransitionAction::ReplaceAndTakeUnregister)
//! transition.

use crate::foundation::error::{SceneError, SceneResult};
use crate::foundation::ids::NodeId;
use crate::render::context::RenderContext;
use crate::scene::event::InputEvent;
use crate::scene::stats::FrameStats;
use crate::scene::transition::Transition;
use crate::scene::tree::{Interest, Lifecycle, SceneTree};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Entry {
    id: NodeId,
    by_scene: bool,
    manual: bool,
}

/// Registration-ordered set of node ids.
#[derive(Clone, Debug, Default)]
struct Registry {
    entries: Vec<Entry>,
}

impl Registry {
    fn add(&mut self, id: NodeId, manual: bool) {
        if let Some(e) = self.entries.iter_mut().find(|e| e.id == id) {
            e.manual |= manual;
            e.by_scene |= !manual;
            return;
        }
        self.entries.push(Entry {
            id,
            by_scene: !manual,
            manual,
        });
    }

    fn drop_scene(&mut self, id: NodeId) {
        for e in self.entries.iter_mut().filter(|e| e.id == id) {
            e.by_scene = false;
        }
        self.entries.retain(|e| e.by_scene || e.manual);
    }

    fn drop_manual(&mut self) {
        for e in &mut self.entries {
            e.manual = false;
        }
        self.entries.retain(|e| e.by_scene);
    }

    fn remove(&mut self, id: NodeId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.id != id);
        self.entries.len() != before
    }

    fn retain_live(&mut self, tree: &SceneTree) {
        self.entries.retain(|e| {
            let live = tree.contains(e.id);
            if !live {
                tracing::warn!(node = %e.id, "dropping registration of destroyed node");
            }
            live
        });
    }

    fn ids(&self) -> Vec<NodeId> {
        self.entries.iter().map(|e| e.id).collect()
    }
}

/// Scene stack and per-frame driver over a [`SceneTree`].
#[derive(Debug, Default)]
pub struct NodeManager {
    tree: SceneTree,
    stack: Vec<NodeId>,
    running: Option<NodeId>,
    next: Option<NodeId>,
    timing: Registry,
    events: Registry,
    retired: Vec<NodeId>,
}

impl NodeManager {
    /// Manager over an empty tree.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Manager over an existing tree.
    #[must_use]
    pub fn with_tree(tree: SceneTree) -> Self {
        Self {
            tree,
            ..Self::default()
        }
    }

    /// The node arena.
    #[must_use]
    pub fn tree(&self) -> &SceneTree {
        &self.tree
    }

    /// Mutable access to the node arena.
    pub fn tree_mut(&mut self) -> &mut SceneTree {
        &mut self.tree
    }

    /// Scene currently running, if any.
    #[must_use]
    pub fn running(&self) -> Option<NodeId> {
        self.running
    }

    /// Scene that becomes running at the next visit, if a switch is pending.
    #[must_use]
    pub fn next(&self) -> Option<NodeId> {
        self.next
    }

    /// Scene stack, bottom first.
    #[must_use]
    pub fn stack(&self) -> &[NodeId] {
        &self.stack
    }

    /// Nodes receiving fixed-step updates, in registration order.
    #[must_use]
    pub fn timing_targets(&self) -> Vec<NodeId> {
        self.timing.ids()
    }

    /// Nodes receiving input events, in registration order.
    #[must_use]
    pub fn event_targets(&self) -> Vec<NodeId> {
        self.events.ids()
    }

    /// Counters of the current frame.
    #[must_use]
    pub fn stats(&self) -> FrameStats {
        self.tree.stats()
    }

    // -- Stack edits --

    /// Seeds an empty stack with the first scene.
    ///
    /// # Errors
    ///
    /// [`SceneError::Validation`] when the stack is not empty,
    /// [`SceneError::UnknownNode`] for a dead handle.
    pub fn push_start(&mut self, scene: NodeId) -> SceneResult<()> {
        if !self.stack.is_empty() {
            return Err(SceneError::validation(format!(
                "push_start({scene}) on a stack of {} scenes",
                self.stack.len()
            )));
        }
        self.push_node(scene)
    }

    /// Pushes `scene` on top of the stack; it runs from the next visit.
    ///
    /// # Errors
    ///
    /// [`SceneError::UnknownNode`] for a dead handle.
    pub fn push_node(&mut self, scene: NodeId) -> SceneResult<()> {
        self.check_live(scene)?;
        self.stack.push(scene);
        self.next = Some(scene);
        tracing::debug!(scene = %scene, depth = self.stack.len(), "pushed scene");
        Ok(())
    }

    /// Pops the top scene and returns it. The scene below, if any, runs from the
    /// next visit; an emptied stack makes the next visit return `false`.
    pub fn pop_node(&mut self) -> Option<NodeId> {
        let popped = self.stack.pop()?;
        self.next = self.stack.last().copied();
        tracing::debug!(scene = %popped, depth = self.stack.len(), "popped scene");
        Some(popped)
    }

    /// Replaces the top scene (or seeds an empty stack) with `scene` and returns
    /// the scene it displaced.
    ///
    /// # Errors
    ///
    /// [`SceneError::UnknownNode`] for a dead handle.
    pub fn replace(&mut self, scene: NodeId) -> SceneResult<Option<NodeId>> {
        self.check_live(scene)?;
        let old = self.stack.pop();
        self.stack.push(scene);
        self.next = Some(scene);
        tracing::debug!(scene = %scene, replaced = ?old, "replaced top scene");
        Ok(old)
    }

    // -- Registries --

    /// Registers `id` for fixed-step updates until unregistered.
    ///
    /// # Errors
    ///
    /// [`SceneError::UnknownNode`] for a dead handle.
    pub fn register_timing_target(&mut self, id: NodeId) -> SceneResult<()> {
        self.check_live(id)?;
        self.timing.add(id, true);
        tracing::trace!(node = %id, "registered timing target");
        Ok(())
    }

    /// Registers `id` for input events until unregistered.
    ///
    /// # Errors
    ///
    /// [`SceneError::UnknownNode`] for a dead handle.
    pub fn register_event_target(&mut self, id: NodeId) -> SceneResult<()> {
        self.check_live(id)?;
        self.events.add(id, true);
        tracing::trace!(node = %id, "registered event target");
        Ok(())
    }

    /// Removes `id` from both registries, however it got there. Returns whether
    /// it was registered at all.
    pub fn unregister(&mut self, id: NodeId) -> bool {
        let timing = self.timing.remove(id);
        let events = self.events.remove(id);
        timing || events
    }

    // -- Frame --

    /// Starts a frame: zeroes the frame counters.
    pub fn pre_visit(&mut self) {
        self.tree.reset_stats();
    }

    /// Runs one fixed step on every timing target, in registration order.
    ///
    /// Targets whose node has been destroyed are skipped with a warning.
    pub fn update(&mut self, dt: f64) {
        for id in self.timing.ids() {
            if let Err(err) = self.tree.update_node(id, dt) {
                tracing::warn!(node = %id, %err, "skipping timing target");
            }
        }
    }

    /// Offers `event` to the event targets in registration order until one
    /// handles it. Returns whether any did.
    pub fn handle(&mut self, event: &InputEvent) -> bool {
        for id in self.events.ids() {
            match self.tree.handle_node(id, event) {
                Ok(true) => {
                    tracing::trace!(node = %id, ?event, "event handled");
                    return true;
                }
                Ok(false) => {}
                Err(err) => tracing::warn!(node = %id, %err, "skipping event target"),
            }
        }
        false
    }

    /// Resolves pending scene switches and transitions, then draws the running
    /// scene into `ctx`.
    ///
    /// Transition chains resolve within the call: a scene that requests a
    /// replacement is swapped out, the replacement entered, and its own
    /// request honored in turn, before anything is drawn. Returns `false` when
    /// no scene is left to run.
    ///
    /// # Errors
    ///
    /// Dead replacement handles and the invariant violations of
    /// [`SceneTree::visit`].
    #[tracing::instrument(level = "trace", skip(self, ctx))]
    pub fn visit(&mut self, ctx: &mut dyn RenderContext, interpolation: f64) -> SceneResult<bool> {
        loop {
            self.switch_pending()?;
            let Some(running) = self.running else {
                return Ok(false);
            };
            let transition = self.tree.transition(running)?.unwrap_or_default();
            if !transition.action.is_pending() {
                break;
            }
            self.tree.set_transition(running, Transition::default())?;
            if transition.action.takes() {
                self.retired.push(running);
            }
            if transition.action.unregisters() {
                self.timing.drop_manual();
                self.events.drop_manual();
            }
            tracing::debug!(
                scene = %running,
                action = ?transition.action,
                replacement = ?transition.replacement,
                "scene transition"
            );
            match transition.replacement {
                Some(replacement) => {
                    self.replace(replacement)?;
                }
                None => {
                    self.pop_node();
                }
            }
        }

        let Some(running) = self.running else {
            return Ok(false);
        };
        self.tree.visit(running, ctx, interpolation)?;
        Ok(true)
    }

    /// Ends a frame: destroys scenes retired by `ReplaceAndTake*` transitions,
    /// drops registrations of destroyed nodes and reports the frame counters.
    ///
    /// # Errors
    ///
    /// Propagates arena failures while destroying retired scenes.
    pub fn post_visit(&mut self) -> SceneResult<FrameStats> {
        for scene in std::mem::take(&mut self.retired) {
            if Some(scene) == self.running || self.stack.contains(&scene) {
                continue;
            }
            if self.tree.contains(scene) {
                self.tree.destroy(scene)?;
            }
        }
        self.timing.retain_live(&self.tree);
        self.events.retain_live(&self.tree);

        let stats = self.tree.stats();
        tracing::debug!(
            visited = stats.nodes_visited,
            drawn = stats.nodes_drawn,
            skipped = stats.skipped_invisible,
            recomputed = stats.transforms_recomputed,
            updates = stats.updates,
            switches = stats.scene_switches,
            "frame finished"
        );
        Ok(stats)
    }

    // -- Internals --

    fn check_live(&self, id: NodeId) -> SceneResult<()> {
        if self.tree.contains(id) {
            Ok(())
        } else {
            Err(SceneError::UnknownNode(id))
        }
    }

    /// Swaps the running scene for `next`, or retires it when the stack has
    /// drained.
    fn switch_pending(&mut self) -> SceneResult<()> {
        let target = match self.next.take() {
            Some(next) => Some(next),
            None if self.stack.is_empty() && self.running.is_some() => None,
            None => return Ok(()),
        };
        if target.is_some() && target == self.running {
            return Ok(());
        }

        if let Some(old) = self.running.take() {
            if self.tree.contains(old) {
                for (id, _) in self.tree.notify_subtree(old, Lifecycle::Exit)? {
                    self.timing.drop_scene(id);
                    self.events.drop_scene(id);
                }
            } else {
                tracing::warn!(scene = %old, "running scene was destroyed before exit");
            }
        }
        if let Some(new) = target {
            self.retired.retain(|&r| r != new);
            for (id, Interest { updates, events }) in
                self.tree.notify_subtree(new, Lifecycle::Enter)?
            {
                if updates {
                    self.timing.add(id, false);
                }
                if events {
                    self.events.add(id, false);
                }
            }
            self.running = Some(new);
        }
        self.tree.stats_mut().scene_switches += 1;
        tracing::debug!(running = ?self.running, "switched scene");
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/runtime/manager.rs"]
mod tests;
