pub(crate) mod event;
pub(crate) mod filter;
pub(crate) mod node;
pub(crate) mod stats;
pub(crate) mod transition;
pub(crate) mod tree;
