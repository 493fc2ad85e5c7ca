//! Accessibility attributes of a navigation menu.
//!
//! [`annotate`] derives the ARIA-equivalent attributes of every element of a
//! menu from a [`MenuTree`] and its [`OpenPath`]: the two landmarks wrapping
//! it, the trigger and wrapper of every node, and every open panel. It is a
//! pure function; hosts call it again after every transition.
use crate::{MenuTree, NodeId, OpenPath};

use rustc_hash::FxHashMap;
use smol_str::SmolStr;

/// The element id of the root navigation container.
pub const NAVIGATION_ID: &str = "site-nav";

/// The accessible label of the root navigation container.
pub const NAVIGATION_LABEL: &str = "Main Navigation";

/// The element id of the menu bar.
pub const MENUBAR_ID: &str = "menubar-main";

/// The accessible label of the menu bar.
pub const MENUBAR_LABEL: &str = "Main Menu";

/// The accessibility role of a menu element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    /// The landmark wrapping the whole menu.
    Navigation,
    /// The bar holding the roots.
    MenuBar,
    /// A panel holding the children of a node.
    Menu,
    /// The trigger of a node.
    MenuItem,
    /// A purely presentational wrapper.
    None,
}

impl Role {
    /// Returns the ARIA name of the role.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Navigation => "navigation",
            Self::MenuBar => "menubar",
            Self::Menu => "menu",
            Self::MenuItem => "menuitem",
            Self::None => "none",
        }
    }
}

/// A fixed, labelled region of a menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Landmark {
    /// The element id of the region.
    pub id: &'static str,
    /// The role of the region.
    pub role: Role,
    /// The accessible label of the region.
    pub label: &'static str,
}

/// The landmarks of every menu, outermost first.
pub const LANDMARKS: [Landmark; 2] = [
    Landmark {
        id: NAVIGATION_ID,
        role: Role::Navigation,
        label: NAVIGATION_LABEL,
    },
    Landmark {
        id: MENUBAR_ID,
        role: Role::MenuBar,
        label: MENUBAR_LABEL,
    },
];

/// The accessibility attributes of a node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Annotation {
    /// The role of the trigger.
    pub role: Role,
    /// The role of the list item wrapping the trigger.
    pub wrapper: Role,
    /// Whether the panel of the node is open.
    pub expanded: bool,
    /// Whether the node has a panel of children.
    pub has_popup: bool,
    /// The id of the panel the trigger controls, if it has one.
    pub controls: Option<NodeId>,
}

/// The accessibility attributes of an open panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelAnnotation {
    /// The role of the panel.
    pub role: Role,
    /// The element id of the trigger labelling the panel.
    pub labelled_by: SmolStr,
}

/// The accessibility attributes of a whole menu.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Annotations {
    nodes: FxHashMap<NodeId, Annotation>,
    panels: FxHashMap<NodeId, PanelAnnotation>,
}

impl Annotations {
    /// Returns the landmarks of the menu, outermost first.
    pub fn landmarks(&self) -> &'static [Landmark] {
        &LANDMARKS
    }

    /// Returns the attributes of the node with the given id.
    pub fn get(&self, id: &NodeId) -> Option<&Annotation> {
        self.nodes.get(id)
    }

    /// Returns the attributes of the open panel of the given node.
    pub fn panel(&self, id: &NodeId) -> Option<&PanelAnnotation> {
        self.panels.get(id)
    }

    /// Returns the number of annotated nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns true if no node is annotated.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Returns an iterator over every annotated node, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&NodeId, &Annotation)> {
        self.nodes.iter()
    }

    /// Returns an iterator over every open panel, in no particular order.
    pub fn panels(&self) -> impl Iterator<Item = (&NodeId, &PanelAnnotation)> {
        self.panels.iter()
    }
}

/// Derives the accessibility attributes of every element of the menu.
pub fn annotate(tree: &MenuTree, path: &OpenPath) -> Annotations {
    let nodes = tree
        .iter()
        .map(|node| {
            let has_popup = node.has_children();

            let annotation = Annotation {
                role: Role::MenuItem,
                wrapper: Role::None,
                expanded: path.contains(&node.id),
                has_popup,
                controls: has_popup.then(|| node.id.clone()),
            };

            (node.id.clone(), annotation)
        })
        .collect();

    let panels = path
        .iter()
        .filter(|id| tree.node(id).is_some_and(crate::MenuNode::has_children))
        .map(|id| {
            let panel = PanelAnnotation {
                role: Role::Menu,
                labelled_by: id.elements().trigger,
            };

            (id.clone(), panel)
        })
        .collect();

    Annotations { nodes, panels }
}

#[cfg(feature = "accessibility")]
pub use accesskit_tree::build;

#[cfg(feature = "accessibility")]
mod accesskit_tree {
    use super::{Annotations, Role};
    use crate::id::fnv1a_hash_str;
    use crate::{MenuNode, MenuTree};

    use accesskit::{Action, HasPopup, Node, NodeId};

    fn node_id(element: &str) -> NodeId {
        NodeId(fnv1a_hash_str(element))
    }

    fn role(role: Role) -> accesskit::Role {
        match role {
            Role::Navigation => accesskit::Role::Navigation,
            Role::MenuBar => accesskit::Role::MenuBar,
            Role::Menu => accesskit::Role::Menu,
            Role::MenuItem => accesskit::Role::MenuItem,
            Role::None => accesskit::Role::GenericContainer,
        }
    }

    /// Builds the AccessKit nodes of a menu, landmarks first.
    ///
    /// Triggers are keyed by their trigger element id and panels by their
    /// panel id; only open panels are part of the tree.
    pub fn build(tree: &MenuTree, annotations: &Annotations) -> Vec<(NodeId, Node)> {
        let mut nodes = Vec::with_capacity(tree.len() + 2);

        let landmarks = annotations.landmarks();

        for (i, landmark) in landmarks.iter().enumerate() {
            let mut node = Node::new(role(landmark.role));
            node.set_label(landmark.label);

            match landmarks.get(i + 1) {
                Some(inner) => node.set_children(vec![node_id(inner.id)]),
                None => node.set_children(tree.roots().map(trigger_id).collect::<Vec<_>>()),
            }

            nodes.push((node_id(landmark.id), node));
        }

        for menu_node in tree.iter() {
            let Some(annotation) = annotations.get(&menu_node.id) else {
                continue;
            };

            let mut trigger = Node::new(role(annotation.role));
            trigger.set_label(menu_node.title.as_str());
            trigger.add_action(Action::Click);
            trigger.add_action(Action::Focus);

            if let Some(description) = &menu_node.description {
                trigger.set_description(description.as_str());
            }

            if annotation.has_popup {
                trigger.set_has_popup(HasPopup::Menu);
                trigger.set_expanded(annotation.expanded);
            }

            if let Some(panel) = annotations.panel(&menu_node.id) {
                let panel_id = node_id(menu_node.id.as_str());

                trigger.set_controls(vec![panel_id]);
                trigger.set_children(vec![panel_id]);

                let mut menu = Node::new(role(panel.role));
                menu.set_label(menu_node.title.as_str());
                menu.set_labelled_by(vec![node_id(&panel.labelled_by)]);
                menu.set_children(
                    tree.children(&menu_node.id)
                        .map(trigger_id)
                        .collect::<Vec<_>>(),
                );
                nodes.push((panel_id, menu));
            }

            nodes.push((trigger_id(menu_node), trigger));
        }

        nodes
    }

    fn trigger_id(node: &MenuNode) -> NodeId {
        node_id(&node.id.elements().trigger)
    }
}
