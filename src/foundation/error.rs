use crate::foundation::ids::NodeId;

/// Convenience result type used across scenery.
pub type SceneResult<T> = Result<T, SceneError>;

/// Top-level error taxonomy used by engine APIs.
///
/// Every variant is an invariant violation. Normal absence conditions (empty
/// scene stack, unhandled event, missing replacement scene) are reported through
/// `bool`/`Option` return values instead.
#[derive(thiserror::Error, Debug)]
pub enum SceneError {
    /// A matrix with a zero determinant was inverted.
    #[error("singular matrix: determinant {det} cannot be inverted")]
    SingularMatrix {
        /// Determinant `a*d - b*c` of the offending matrix.
        det: f64,
    },

    /// A node's local transform collapsed (usually a zero scale).
    #[error("node {id} ('{name}') has a singular transform")]
    SingularTransform {
        /// Offending node.
        id: NodeId,
        /// Diagnostic name of the offending node.
        name: String,
    },

    /// A filter node was visited without a parent to filter.
    #[error("filter node {id} ('{name}') has no parent")]
    OrphanFilter {
        /// Offending node.
        id: NodeId,
        /// Diagnostic name of the offending node.
        name: String,
    },

    /// A handle does not refer to a live node.
    #[error("unknown node {0}")]
    UnknownNode(NodeId),

    /// A node was attached while it still had a parent.
    #[error("node {child} already has parent {parent}")]
    AlreadyParented {
        /// Node being attached.
        child: NodeId,
        /// Its current parent.
        parent: NodeId,
    },

    /// Attaching would make a node its own ancestor.
    #[error("attaching {child} under {parent} would create a cycle")]
    WouldCycle {
        /// Node being attached.
        child: NodeId,
        /// Requested parent.
        parent: NodeId,
    },

    /// Invalid user-provided configuration or arguments.
    #[error("validation error: {0}")]
    Validation(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl SceneError {
    /// Build a [`SceneError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`SceneError::SingularTransform`] value.
    pub fn singular_transform(id: NodeId, name: impl Into<String>) -> Self {
        Self::SingularTransform {
            id,
            name: name.into(),
        }
    }

    /// Build a [`SceneError::OrphanFilter`] value.
    pub fn orphan_filter(id: NodeId, name: impl Into<String>) -> Self {
        Self::OrphanFilter {
            id,
            name: name.into(),
        }
    }

    /// Node the error is about, when there is one.
    pub fn node(&self) -> Option<NodeId> {
        match self {
            Self::SingularTransform { id, .. } | Self::OrphanFilter { id, .. } => Some(*id),
            Self::UnknownNode(id) => Some(*id),
            Self::AlreadyParented { child, .. } | Self::WouldCycle { child, .. } => Some(*child),
            Self::SingularMatrix { .. } | Self::Validation(_) | Self::Other(_) => None,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
