use crate::NodeId;

/// The chain of currently open nodes, root-first.
///
/// An [`OpenPath`] can only be changed through the transitions of a
/// [`MenuState`], which keep it a valid path through its tree: each entry is
/// the parent of the next one, so there is at most one open node per depth.
///
/// [`MenuState`]: crate::MenuState
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct OpenPath(Vec<NodeId>);

impl OpenPath {
    /// Returns the open ids, root-first.
    pub fn as_slice(&self) -> &[NodeId] {
        &self.0
    }

    /// Returns the number of open nodes.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if nothing is open.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns true if the node with the given id is open.
    pub fn contains(&self, id: &NodeId) -> bool {
        self.0.contains(id)
    }

    /// Returns the position of the given id in the path, which is also its
    /// depth in the tree.
    pub fn position(&self, id: &NodeId) -> Option<usize> {
        self.0.iter().position(|open| open == id)
    }

    /// Returns the open node at the given depth.
    pub fn at_depth(&self, depth: usize) -> Option<&NodeId> {
        self.0.get(depth)
    }

    /// Returns the deepest open node.
    pub fn deepest(&self) -> Option<&NodeId> {
        self.0.last()
    }

    /// Returns an iterator over the open ids, root-first.
    pub fn iter(&self) -> std::slice::Iter<'_, NodeId> {
        self.0.iter()
    }

    pub(crate) fn replace(&mut self, chain: Vec<NodeId>) {
        self.0 = chain;
    }

    pub(crate) fn truncate(&mut self, len: usize) {
        self.0.truncate(len);
    }

    pub(crate) fn clear(&mut self) {
        self.0.clear();
    }
}

impl<'a> IntoIterator for &'a OpenPath {
    type Item = &'a NodeId;
    type IntoIter = std::slice::Iter<'a, NodeId>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl PartialEq<[&str]> for OpenPath {
    fn eq(&self, other: &[&str]) -> bool {
        self.0.len() == other.len() && self.0.iter().zip(other).all(|(a, b)| a == b)
    }
}

impl<const N: usize> PartialEq<[&str; N]> for OpenPath {
    fn eq(&self, other: &[&str; N]) -> bool {
        *self == other[..]
    }
}
