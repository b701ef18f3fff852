/// Per-frame traversal counters.
///
/// Reset by [`NodeManager::pre_visit`](crate::NodeManager::pre_visit) and
/// reported by [`NodeManager::post_visit`](crate::NodeManager::post_visit).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize)]
pub struct FrameStats {
    /// Visible nodes entered by the draw traversal.
    pub nodes_visited: u64,
    /// Nodes whose behavior was asked to draw.
    pub nodes_drawn: u64,
    /// Invisible nodes skipped together with their subtrees.
    pub skipped_invisible: u64,
    /// Local matrices rebuilt because the node was dirty.
    pub transforms_recomputed: u64,
    /// Fixed-step update calls delivered to timing targets.
    pub updates: u64,
    /// Scene switches performed by the scene stack.
    pub scene_switches: u64,
}
