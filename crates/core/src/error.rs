use crate::NodeId;

/// An error of the menu state machine.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A transition referenced a node that is not part of the tree.
    #[error("node `{0}` is not part of the menu tree")]
    UnknownNode(NodeId),

    /// A transition referenced a node at the wrong depth.
    #[error("node `{id}` lives at depth {actual}, but depth {expected} was requested")]
    DepthMismatch {
        /// The referenced node.
        id: NodeId,
        /// The requested depth.
        expected: usize,
        /// The actual depth of the node.
        actual: usize,
    },

    /// Two nodes of a tree share the same id.
    #[error("the id `{0}` is used by more than one node")]
    DuplicateId(NodeId),

    /// A node has an empty title.
    #[error("the node at `{path}` has an empty title")]
    EmptyTitle {
        /// The title path of the parent, followed by the index of the node.
        path: String,
    },
}

impl Error {
    /// Returns true if the error is an internal-consistency error raised by a
    /// transition, as opposed to a configuration error raised while building
    /// a tree.
    pub fn is_consistency(&self) -> bool {
        matches!(self, Self::UnknownNode(_) | Self::DepthMismatch { .. })
    }
}
