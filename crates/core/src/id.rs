//! Stable identifiers for menu nodes and the elements they render to.
use smol_str::SmolStr;

use std::borrow::Borrow;
use std::fmt;

/// The prefix of every derived [`NodeId`].
pub const PREFIX: &str = "menu-";

/// The separator between titles in a derived [`NodeId`] path.
pub const SEPARATOR: char = '/';

/// The identifier of a node in a [`MenuTree`].
///
/// Derived ids follow the title path of the node, root-first: a root
/// titled `Products` becomes `menu-Products` and its child `Tools` becomes
/// `menu-Products/Tools`. The same value doubles as the id of the panel
/// holding the node's children.
///
/// [`MenuTree`]: crate::MenuTree
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NodeId(SmolStr);

impl NodeId {
    /// Creates a [`NodeId`] from a raw value, used verbatim.
    pub fn new(id: impl Into<SmolStr>) -> Self {
        Self(id.into())
    }

    /// Derives the [`NodeId`] of a node from its title path, root-first.
    pub fn from_path<'a>(titles: impl IntoIterator<Item = &'a str>) -> Self {
        let mut id = String::from(PREFIX);

        for (i, title) in titles.into_iter().enumerate() {
            if i > 0 {
                id.push(SEPARATOR);
            }
            id.push_str(title);
        }

        Self(SmolStr::from(id))
    }

    /// Returns the id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the part of the id after the `menu-` prefix.
    ///
    /// Explicit ids without the prefix are returned unchanged.
    pub fn path(&self) -> &str {
        self.0.strip_prefix(PREFIX).unwrap_or(&self.0)
    }

    /// Returns the [`ElementIds`] of the node.
    pub fn elements(&self) -> ElementIds {
        ElementIds::new(self)
    }

    /// Hashes the id into a stable 64-bit value.
    pub fn hash64(&self) -> u64 {
        fnv1a_hash_str(&self.0)
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for NodeId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for NodeId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for NodeId {
    fn from(id: String) -> Self {
        Self::new(id)
    }
}

impl PartialEq<str> for NodeId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for NodeId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// The element ids a node renders to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementIds {
    /// The list item wrapping the node (`nav-<path>`).
    pub item: SmolStr,
    /// The link that opens the node or follows its url (`menuitem-<path>`).
    pub trigger: SmolStr,
    /// The panel holding the children of the node (`menu-<path>`).
    pub panel: SmolStr,
    /// The icon of the node (`menuitem-icon-<path>`).
    pub icon: SmolStr,
}

impl ElementIds {
    fn new(id: &NodeId) -> Self {
        let path = id.path();

        Self {
            item: SmolStr::from(format!("nav-{path}")),
            trigger: SmolStr::from(format!("menuitem-{path}")),
            panel: id.0.clone(),
            icon: SmolStr::from(format!("menuitem-icon-{path}")),
        }
    }
}

/// FNV-1a 64-bit offset basis.
const FNV1A_OFFSET: u64 = 0xcbf29ce484222325;

/// FNV-1a 64-bit prime.
const FNV1A_PRIME: u64 = 0x00000100000001B3;

/// Computes FNV-1a hash of a string at compile time.
#[must_use]
pub const fn fnv1a_hash_str(s: &str) -> u64 {
    let bytes = s.as_bytes();
    let mut hash = FNV1A_OFFSET;
    let mut i = 0;
    while i < bytes.len() {
        hash ^= bytes[i] as u64;
        hash = hash.wrapping_mul(FNV1A_PRIME);
        i += 1;
    }
    hash
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_path() {
        assert_eq!(NodeId::from_path(["Root1"]), "menu-Root1");
        assert_eq!(
            NodeId::from_path(["Root1", "Child1"]).as_str(),
            "menu-Root1/Child1"
        );
    }

    #[test]
    fn test_element_ids() {
        let ids = NodeId::from_path(["Root1", "Child1"]).elements();

        assert_eq!(ids.item, "nav-Root1/Child1");
        assert_eq!(ids.trigger, "menuitem-Root1/Child1");
        assert_eq!(ids.panel, "menu-Root1/Child1");
        assert_eq!(ids.icon, "menuitem-icon-Root1/Child1");
    }

    #[test]
    fn test_explicit_id_path() {
        let id = NodeId::new("products");

        assert_eq!(id.path(), "products");
        assert_eq!(id.elements().trigger, "menuitem-products");
    }

    #[test]
    fn test_hash_is_stable() {
        assert_eq!(fnv1a_hash_str(""), FNV1A_OFFSET);
        assert_eq!(
            NodeId::from("menu-Root1").hash64(),
            NodeId::from_path(["Root1"]).hash64()
        );
        assert_ne!(
            NodeId::from("menu-Root1").hash64(),
            NodeId::from("menu-Root2").hash64()
        );
    }
}
