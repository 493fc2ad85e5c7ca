//! A tree structure describing a hierarchical navigation menu.
//!
//! A menu is described by the caller as nested [`MenuItem`]s and validated
//! into a [`MenuTree`]. Conceptually a node is either a menu (inner node) or
//! a link (leaf node), but there's no need to explicitly distinguish them: if
//! a node has children, it opens a panel, otherwise it is followed.
//!
//! # Example
//!
//! ```
//! use icy_menu_core::{MenuItem, MenuTree, NodeId};
//!
//! let tree = MenuTree::new(vec![
//!     MenuItem::new("Products", "/products").children(vec![
//!         MenuItem::new("Editor", "/products/editor"),
//!         MenuItem::new("Viewer", "/products/viewer"),
//!     ]),
//!     MenuItem::new("About", "/about"),
//! ])?;
//!
//! let editor = NodeId::from_path(["Products", "Editor"]);
//! assert_eq!(tree.depth(&editor), Some(1));
//! # Ok::<(), icy_menu_core::Error>(())
//! ```
use crate::{Error, NodeId};

use rustc_hash::FxHashMap;

/// The description of a menu entry, as supplied by the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MenuItem {
    /// The title of the entry.
    pub title: String,
    /// The link followed when the entry is activated.
    pub url: String,
    /// An optional description shown below the title.
    #[cfg_attr(feature = "serde", serde(default))]
    pub description: Option<String>,
    /// An optional icon shown next to the title.
    #[cfg_attr(feature = "serde", serde(default))]
    pub icon: Option<String>,
    /// An explicit id, replacing the one derived from the title path.
    #[cfg_attr(feature = "serde", serde(default))]
    pub id: Option<NodeId>,
    /// The nested entries.
    #[cfg_attr(feature = "serde", serde(default))]
    pub children: Vec<MenuItem>,
}

impl MenuItem {
    /// Creates a new [`MenuItem`] linking to the given url.
    pub fn new(title: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
            description: None,
            icon: None,
            id: None,
            children: Vec::new(),
        }
    }

    /// Sets the description of the [`MenuItem`].
    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the icon of the [`MenuItem`].
    #[must_use]
    pub fn icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    /// Overrides the id derived from the title path.
    #[must_use]
    pub fn id(mut self, id: impl Into<NodeId>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Sets the nested entries of the [`MenuItem`].
    #[must_use]
    pub fn children(mut self, children: Vec<MenuItem>) -> Self {
        self.children = children;
        self
    }

    /// Appends a nested entry to the [`MenuItem`].
    #[must_use]
    pub fn push(mut self, child: MenuItem) -> Self {
        self.children.push(child);
        self
    }
}

/// A validated node of a [`MenuTree`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuNode {
    /// The unique id of the node.
    pub id: NodeId,
    /// The title of the node.
    pub title: String,
    /// The link of the node.
    pub url: String,
    /// The description of the node.
    pub description: Option<String>,
    /// The icon of the node.
    pub icon: Option<String>,
    parent: Option<usize>,
    depth: usize,
    children: Vec<usize>,
}

impl MenuNode {
    /// Returns the depth of the node; roots live at depth 0.
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Returns true if the node opens a panel of children.
    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    /// Returns the number of children of the node.
    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    /// Returns true if the node is a root of its tree.
    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }
}

/// An immutable menu hierarchy.
///
/// The tree is flattened into a vector in depth-first pre-order; every node
/// knows the index of its parent and its children, and an index maps each
/// [`NodeId`] to its slot.
#[derive(Debug, Clone, Default)]
pub struct MenuTree {
    nodes: Vec<MenuNode>,
    roots: Vec<usize>,
    index: FxHashMap<NodeId, usize>,
}

impl MenuTree {
    /// Validates the given items into a [`MenuTree`].
    ///
    /// Fails if two nodes end up with the same id or a node has an empty
    /// title.
    pub fn new(items: Vec<MenuItem>) -> Result<Self, Error> {
        let mut tree = Self::default();
        let mut titles = Vec::new();

        for (i, item) in items.into_iter().enumerate() {
            let root = tree.insert(item, None, 0, i, &mut titles)?;
            tree.roots.push(root);
        }

        log::debug!("Built menu tree with {} nodes", tree.nodes.len());

        Ok(tree)
    }

    fn insert(
        &mut self,
        item: MenuItem,
        parent: Option<usize>,
        depth: usize,
        position: usize,
        titles: &mut Vec<String>,
    ) -> Result<usize, Error> {
        if item.title.trim().is_empty() {
            let mut path = titles.join("/");
            if !path.is_empty() {
                path.push('/');
            }
            path.push_str(&format!("#{position}"));

            return Err(Error::EmptyTitle { path });
        }

        titles.push(item.title.clone());

        let id = item
            .id
            .unwrap_or_else(|| NodeId::from_path(titles.iter().map(String::as_str)));

        let slot = self.nodes.len();

        if self.index.insert(id.clone(), slot).is_some() {
            return Err(Error::DuplicateId(id));
        }

        self.nodes.push(MenuNode {
            id,
            title: item.title,
            url: item.url,
            description: item.description,
            icon: item.icon,
            parent,
            depth,
            children: Vec::with_capacity(item.children.len()),
        });

        for (i, child) in item.children.into_iter().enumerate() {
            let child = self.insert(child, Some(slot), depth + 1, i, titles)?;
            self.nodes[slot].children.push(child);
        }

        let _ = titles.pop();

        Ok(slot)
    }

    /// Returns the number of nodes in the tree.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns true if the tree has no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Returns the root nodes, in order.
    pub fn roots(&self) -> impl ExactSizeIterator<Item = &MenuNode> {
        self.roots.iter().map(|&i| &self.nodes[i])
    }

    /// Returns every node in depth-first pre-order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &MenuNode> {
        self.nodes.iter()
    }

    /// Returns the node with the given id.
    pub fn node(&self, id: &NodeId) -> Option<&MenuNode> {
        self.index.get(id).map(|&i| &self.nodes[i])
    }

    /// Returns true if the tree has a node with the given id.
    pub fn contains(&self, id: &NodeId) -> bool {
        self.index.contains_key(id)
    }

    /// Returns the depth of the node with the given id.
    pub fn depth(&self, id: &NodeId) -> Option<usize> {
        self.node(id).map(MenuNode::depth)
    }

    /// Returns the parent of the node with the given id.
    pub fn parent(&self, id: &NodeId) -> Option<&MenuNode> {
        self.node(id)
            .and_then(|node| node.parent)
            .map(|i| &self.nodes[i])
    }

    /// Returns the children of the node with the given id.
    ///
    /// Unknown ids have no children.
    pub fn children<'a>(
        &'a self,
        id: &NodeId,
    ) -> impl ExactSizeIterator<Item = &'a MenuNode> + use<'a> {
        let children = self
            .index
            .get(id)
            .map(|&i| self.nodes[i].children.as_slice())
            .unwrap_or(&[]);

        children.iter().map(|&i| &self.nodes[i])
    }

    /// Returns the node with the given id along with its siblings, in order.
    ///
    /// The siblings of a root are the other roots. Unknown ids have no
    /// siblings.
    pub fn siblings<'a>(
        &'a self,
        id: &NodeId,
    ) -> impl ExactSizeIterator<Item = &'a MenuNode> + use<'a> {
        let siblings = match self.node(id) {
            Some(MenuNode {
                parent: Some(parent),
                ..
            }) => self.nodes[*parent].children.as_slice(),
            Some(_) => self.roots.as_slice(),
            None => &[],
        };

        siblings.iter().map(|&i| &self.nodes[i])
    }

    /// Returns the ids of the chain of nodes leading to the given one,
    /// root-first and including the node itself.
    pub fn chain(&self, id: &NodeId) -> Option<Vec<NodeId>> {
        let mut slot = *self.index.get(id)?;
        let mut chain = vec![self.nodes[slot].id.clone()];

        while let Some(parent) = self.nodes[slot].parent {
            chain.push(self.nodes[parent].id.clone());
            slot = parent;
        }

        chain.reverse();

        Some(chain)
    }

    /// Returns true if `ancestor` is `node` itself or one of its ancestors.
    pub fn is_ancestor_or_self(&self, ancestor: &NodeId, node: &NodeId) -> bool {
        let (Some(&target), Some(&start)) = (self.index.get(ancestor), self.index.get(node))
        else {
            return false;
        };

        let mut current = Some(start);

        while let Some(slot) = current {
            if slot == target {
                return true;
            }
            current = self.nodes[slot].parent;
        }

        false
    }
}
