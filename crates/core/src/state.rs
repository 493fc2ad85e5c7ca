//! The open/closed state machine of a menu.
use crate::{Error, MenuTree, NodeId, OpenPath};

/// The state of a menu: a [`MenuTree`] and its [`OpenPath`].
///
/// The open path is only ever changed through the transitions of a
/// [`MenuState`]: [`open`], [`close`], [`close_all`] and [`toggle`]. Every
/// transition is a total function over the current state; calls referencing
/// unknown nodes or wrong depths are logged and ignored.
///
/// Transitions return whether the open path changed.
///
/// [`open`]: Self::open
/// [`close`]: Self::close
/// [`close_all`]: Self::close_all
/// [`toggle`]: Self::toggle
#[derive(Debug, Clone, Default)]
pub struct MenuState {
    tree: MenuTree,
    path: OpenPath,
    revision: u64,
}

impl MenuState {
    /// Creates a new [`MenuState`] for the given tree, with nothing open.
    pub fn new(tree: MenuTree) -> Self {
        Self {
            tree,
            path: OpenPath::default(),
            revision: 0,
        }
    }

    /// Returns the tree of the [`MenuState`].
    pub fn tree(&self) -> &MenuTree {
        &self.tree
    }

    /// Returns the current [`OpenPath`].
    pub fn path(&self) -> &OpenPath {
        &self.path
    }

    /// Returns the deepest open node.
    pub fn deepest(&self) -> Option<&NodeId> {
        self.path.deepest()
    }

    /// Returns a counter that increases every time the open path changes.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Returns true if the node with the given id is open.
    pub fn is_open(&self, id: &NodeId) -> bool {
        self.path.contains(id)
    }

    /// Opens the node with the given id, which must live at `depth`.
    ///
    /// Whatever was open at `depth` or deeper is closed, and the ancestors of
    /// the node are opened if they were not.
    pub fn open(&mut self, id: &NodeId, depth: usize) -> bool {
        self.try_open(id, depth).unwrap_or_else(|error| {
            log::warn!("Ignoring open transition: {error}");
            false
        })
    }

    /// Opens the node with the given id, reporting inconsistent calls.
    pub fn try_open(&mut self, id: &NodeId, depth: usize) -> Result<bool, Error> {
        self.check(id, depth)?;

        if self.path.deepest() == Some(id) {
            return Ok(false);
        }

        let chain = self
            .tree
            .chain(id)
            .ok_or_else(|| Error::UnknownNode(id.clone()))?;

        log::debug!("Opening menu `{id}` at depth {depth}");

        self.path.replace(chain);
        self.bump();

        Ok(true)
    }

    /// Closes the node with the given id along with everything open below it.
    ///
    /// Closing a node that is not open does nothing.
    pub fn close(&mut self, id: &NodeId) -> bool {
        let Some(position) = self.path.position(id) else {
            return false;
        };

        log::debug!("Closing menu `{id}`");

        self.path.truncate(position);
        self.bump();

        true
    }

    /// Closes every open node.
    pub fn close_all(&mut self) -> bool {
        if self.path.is_empty() {
            return false;
        }

        log::debug!("Closing all menus");

        self.path.clear();
        self.bump();

        true
    }

    /// Closes the node with the given id if it is open, or opens it
    /// otherwise.
    pub fn toggle(&mut self, id: &NodeId, depth: usize) -> bool {
        self.try_toggle(id, depth).unwrap_or_else(|error| {
            log::warn!("Ignoring toggle transition: {error}");
            false
        })
    }

    /// Toggles the node with the given id, reporting inconsistent calls.
    pub fn try_toggle(&mut self, id: &NodeId, depth: usize) -> Result<bool, Error> {
        self.check(id, depth)?;

        if self.is_open(id) {
            Ok(self.close(id))
        } else {
            self.try_open(id, depth)
        }
    }

    /// Replaces the tree of the [`MenuState`].
    ///
    /// The open path is pruned to its longest prefix that is still a valid
    /// path through the new tree.
    pub fn set_tree(&mut self, tree: MenuTree) {
        let mut valid = 0;

        for (depth, id) in self.path.iter().enumerate() {
            let parent_matches = match depth {
                0 => tree.node(id).is_some_and(|node| node.is_root()),
                _ => tree
                    .parent(id)
                    .is_some_and(|parent| Some(&parent.id) == self.path.at_depth(depth - 1)),
            };

            if !parent_matches {
                break;
            }

            valid += 1;
        }

        self.tree = tree;

        if valid < self.path.len() {
            log::debug!(
                "Pruning open path from {} to {valid} entries",
                self.path.len()
            );

            self.path.truncate(valid);
            self.bump();
        }
    }

    fn check(&self, id: &NodeId, depth: usize) -> Result<(), Error> {
        let actual = self
            .tree
            .depth(id)
            .ok_or_else(|| Error::UnknownNode(id.clone()))?;

        if actual != depth {
            return Err(Error::DepthMismatch {
                id: id.clone(),
                expected: depth,
                actual,
            });
        }

        Ok(())
    }

    fn bump(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MenuItem;

    fn scenario() -> MenuState {
        let tree = MenuTree::new(vec![
            MenuItem::new("Root1", "/1").children(vec![
                MenuItem::new("Child1", "/1/1").push(MenuItem::new("Leaf", "/1/1/1")),
                MenuItem::new("Child2", "/1/2").push(MenuItem::new("Leaf", "/1/2/1")),
            ]),
            MenuItem::new("Root2", "/2").push(MenuItem::new("Child1", "/2/1")),
        ])
        .expect("valid tree");

        MenuState::new(tree)
    }

    fn id(id: &str) -> NodeId {
        NodeId::from(id)
    }

    fn assert_valid(state: &MenuState) {
        let path = state.path();

        for (depth, open) in path.iter().enumerate() {
            assert_eq!(state.tree().depth(open), Some(depth));

            if depth > 0 {
                assert_eq!(
                    state.tree().parent(open).map(|parent| &parent.id),
                    path.at_depth(depth - 1)
                );
            }
        }
    }

    #[test]
    fn test_open_switches_roots() {
        let mut state = scenario();

        assert!(state.open(&id("menu-Root1"), 0));
        assert_eq!(*state.path(), ["menu-Root1"]);

        assert!(state.open(&id("menu-Root2"), 0));
        assert_eq!(*state.path(), ["menu-Root2"]);

        assert!(state.toggle(&id("menu-Root2"), 0));
        assert!(state.path().is_empty());
    }

    #[test]
    fn test_open_sibling_preserves_shallower_entries() {
        let mut state = scenario();

        let _ = state.open(&id("menu-Root1"), 0);
        let _ = state.open(&id("menu-Root1/Child1"), 1);
        let _ = state.open(&id("menu-Root1/Child1/Leaf"), 2);
        assert_eq!(state.path().len(), 3);

        assert!(state.open(&id("menu-Root1/Child2"), 1));
        assert_eq!(*state.path(), ["menu-Root1", "menu-Root1/Child2"]);
        assert_valid(&state);
    }

    #[test]
    fn test_open_deep_node_opens_its_ancestors() {
        let mut state = scenario();

        let _ = state.open(&id("menu-Root2"), 0);
        assert!(state.open(&id("menu-Root1/Child2"), 1));

        assert_eq!(*state.path(), ["menu-Root1", "menu-Root1/Child2"]);
        assert_valid(&state);
    }

    #[test]
    fn test_reopening_deepest_is_a_noop() {
        let mut state = scenario();

        assert!(state.open(&id("menu-Root1"), 0));
        let revision = state.revision();

        assert!(!state.open(&id("menu-Root1"), 0));
        assert_eq!(state.revision(), revision);
    }

    #[test]
    fn test_reopening_ancestor_closes_descendants() {
        let mut state = scenario();

        let _ = state.open(&id("menu-Root1/Child1/Leaf"), 2);
        assert!(state.open(&id("menu-Root1"), 0));

        assert_eq!(*state.path(), ["menu-Root1"]);
    }

    #[test]
    fn test_close_truncates() {
        let mut state = scenario();

        let _ = state.open(&id("menu-Root1/Child1/Leaf"), 2);
        assert!(state.close(&id("menu-Root1/Child1")));
        assert_eq!(*state.path(), ["menu-Root1"]);

        assert!(!state.close(&id("menu-Root2")));
        assert!(!state.close(&id("menu-Missing")));
        assert_eq!(*state.path(), ["menu-Root1"]);
    }

    #[test]
    fn test_close_all() {
        let mut state = scenario();

        let _ = state.open(&id("menu-Root1/Child1"), 1);
        assert!(state.close_all());
        assert!(state.path().is_empty());
        assert!(!state.close_all());
    }

    #[test]
    fn test_toggle_twice_restores_path() {
        let mut state = scenario();

        let _ = state.open(&id("menu-Root1/Child1"), 1);
        let before = state.path().clone();

        for (target, depth) in [("menu-Root1/Child1", 1), ("menu-Root1/Child1/Leaf", 2)] {
            assert!(state.toggle(&id(target), depth));
            assert!(state.toggle(&id(target), depth));

            assert_eq!(*state.path(), before, "toggling {target} twice");
        }

        let mut state = scenario();

        let _ = state.toggle(&id("menu-Root2"), 0);
        let _ = state.toggle(&id("menu-Root2"), 0);

        assert!(state.path().is_empty());
    }

    #[test]
    fn test_toggle_closes_open_node() {
        let mut state = scenario();

        let _ = state.toggle(&id("menu-Root1"), 0);
        let _ = state.toggle(&id("menu-Root2"), 0);
        assert_eq!(*state.path(), ["menu-Root2"]);

        assert!(state.toggle(&id("menu-Root2"), 0));
        assert!(state.path().is_empty());

        let _ = state.open(&id("menu-Root1/Child1"), 1);
        let _ = state.toggle(&id("menu-Root1/Child2"), 1);
        assert!(state.toggle(&id("menu-Root1/Child2"), 1));
        assert_eq!(*state.path(), ["menu-Root1"]);
    }

    #[test]
    fn test_inconsistent_calls_are_ignored() {
        let mut state = scenario();
        let _ = state.open(&id("menu-Root1"), 0);

        assert!(!state.open(&id("menu-Root1/Child1"), 0));
        assert!(!state.open(&id("menu-Missing"), 0));
        assert!(!state.toggle(&id("menu-Root2"), 3));
        assert_eq!(*state.path(), ["menu-Root1"]);

        assert_eq!(
            state.try_open(&id("menu-Root1/Child1"), 2),
            Err(Error::DepthMismatch {
                id: id("menu-Root1/Child1"),
                expected: 2,
                actual: 1,
            })
        );
        assert_eq!(
            state.try_toggle(&id("menu-Missing"), 0),
            Err(Error::UnknownNode(id("menu-Missing")))
        );
    }

    #[test]
    fn test_random_transitions_keep_path_valid() {
        let mut state = scenario();
        let nodes: Vec<_> = state
            .tree()
            .iter()
            .map(|node| (node.id.clone(), node.depth()))
            .collect();

        // Linear congruential sequence; deterministic and dependency-free
        let mut seed: u64 = 0x2545_F491_4F6C_DD1D;

        for _ in 0..500 {
            seed = seed
                .wrapping_mul(6_364_136_223_846_793_005)
                .wrapping_add(1_442_695_040_888_963_407);

            let (target, depth) = &nodes[(seed >> 33) as usize % nodes.len()];

            let _ = match (seed >> 13) % 4 {
                0 => state.open(target, *depth),
                1 => state.close(target),
                2 => state.toggle(target, *depth),
                _ => state.open(target, depth + 1),
            };

            assert_valid(&state);
        }
    }

    #[test]
    fn test_set_tree_prunes_path() {
        let mut state = scenario();
        let _ = state.open(&id("menu-Root1/Child1/Leaf"), 2);

        let tree = MenuTree::new(vec![
            MenuItem::new("Root1", "/1").push(MenuItem::new("Child1", "/1/1")),
            MenuItem::new("Root2", "/2"),
        ])
        .expect("valid tree");

        state.set_tree(tree);

        assert_eq!(*state.path(), ["menu-Root1", "menu-Root1/Child1"]);
    }

    #[test]
    fn test_set_tree_drops_moved_nodes() {
        let mut state = scenario();
        let _ = state.open(&id("menu-Root1/Child1"), 1);

        let tree = MenuTree::new(vec![
            MenuItem::new("Root2", "/2")
                .push(MenuItem::new("Moved", "/2/m").id("menu-Root1/Child1")),
        ])
        .expect("valid tree");

        state.set_tree(tree);

        assert!(state.path().is_empty());
    }
}
