//! Scene transition policy.

use crate::foundation::ids::NodeId;

/// What the scene stack does with a running scene at the next visit.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum TransitionAction {
    /// Keep running.
    #[default]
    NoAction,
    /// Swap in the replacement; the outgoing scene stays alive in the tree
    /// for its creator to reuse or destroy.
    Replace,
    /// Swap in the replacement and destroy the outgoing scene.
    ReplaceAndTake,
    /// Like [`ReplaceAndTake`](Self::ReplaceAndTake), and also drop every
    /// manual timing/event registration.
    ReplaceAndTakeUnregister,
}

impl TransitionAction {
    /// Whether the stack acts on this scene at all.
    #[must_use]
    pub fn is_pending(self) -> bool {
        self != Self::NoAction
    }

    /// Whether the outgoing scene is destroyed once replaced.
    #[must_use]
    pub fn takes(self) -> bool {
        matches!(self, Self::ReplaceAndTake | Self::ReplaceAndTakeUnregister)
    }

    /// Whether manual registrations are cleared on replacement.
    #[must_use]
    pub fn unregisters(self) -> bool {
        self == Self::ReplaceAndTakeUnregister
    }
}

/// Transition state of a scene node.
///
/// The replacement is not owned by the scene; the stack takes it over when it
/// becomes active.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize)]
pub struct Transition {
    /// Requested action.
    pub action: TransitionAction,
    /// Scene to switch to, if any.
    pub replacement: Option<NodeId>,
}

impl Transition {
    /// Transition with the given action and replacement.
    #[must_use]
    pub fn new(action: TransitionAction, replacement: Option<NodeId>) -> Self {
        Self {
            action,
            replacement,
        }
    }

    /// Zero-duration scene that hands over to `replacement` immediately.
    #[must_use]
    pub fn replace_and_take(replacement: Option<NodeId>) -> Self {
        Self::new(TransitionAction::ReplaceAndTake, replacement)
    }

    /// Overwrites action and replacement.
    pub fn request(&mut self, action: TransitionAction, replacement: Option<NodeId>) {
        self.action = action;
        self.replacement = replacement;
    }

    /// Resets to [`TransitionAction::NoAction`] and forgets the replacement.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
