//! Project the state of a menu into a view.
//!
//! A [`View`] is a plain description of what a host has to draw. It holds no
//! state of its own and is recomputed after every transition.
use crate::core::a11y::{MENUBAR_ID, NAVIGATION_ID};
use crate::core::{ElementIds, MenuNode, MenuTree, NodeId, OpenPath, ViewportMode};
use crate::shell::HAMBURGER_ID;

/// The brand shown in the top bar of a menu.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Brand {
    /// The location of the logo image, if any.
    pub logo: Option<String>,
    /// The name of the brand.
    pub title: String,
}

impl Brand {
    /// Creates a new [`Brand`] with the given title.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            logo: None,
            title: title.into(),
        }
    }

    /// Sets the logo of the [`Brand`].
    #[must_use]
    pub fn logo(mut self, logo: impl Into<String>) -> Self {
        self.logo = Some(logo.into());
        self
    }
}

/// How a panel is laid out relative to its trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// Floating above the page, next to the trigger.
    Overlay,
    /// Expanded in place below the trigger, pushing content down.
    Inline,
}

impl From<ViewportMode> for Placement {
    fn from(mode: ViewportMode) -> Self {
        match mode {
            ViewportMode::Full => Self::Overlay,
            ViewportMode::Compact => Self::Inline,
        }
    }
}

/// A projected menu, ready to be drawn.
#[derive(Debug, Clone, PartialEq)]
pub struct View<'a> {
    /// The element id of the navigation container.
    pub id: &'static str,
    /// The brand of the menu.
    pub brand: &'a Brand,
    /// The layout mode of the menu.
    pub mode: ViewportMode,
    /// The toggle of the compact drawer; only present in compact mode.
    pub hamburger: Option<Hamburger>,
    /// The menu bar; hidden in compact mode while the drawer is closed.
    pub bar: Option<Bar<'a>>,
}

impl View<'_> {
    /// Returns an iterator over every visible trigger, depth-first.
    pub fn triggers(&self) -> impl Iterator<Item = &Trigger<'_>> {
        let mut stack: Vec<&Trigger<'_>> = self
            .bar
            .iter()
            .flat_map(|bar| bar.items.iter().rev())
            .collect();

        std::iter::from_fn(move || {
            let trigger = stack.pop()?;

            if let Some(panel) = &trigger.panel {
                stack.extend(panel.items.iter().rev());
            }

            Some(trigger)
        })
    }

    /// Returns the trigger of the given node, if visible.
    pub fn trigger(&self, id: &NodeId) -> Option<&Trigger<'_>> {
        self.triggers().find(|trigger| trigger.node.id == *id)
    }
}

/// The toggle showing the menu bar in compact mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hamburger {
    /// The element id of the toggle.
    pub id: &'static str,
    /// Whether the drawer is open.
    pub expanded: bool,
}

/// The bar holding the roots of a menu.
#[derive(Debug, Clone, PartialEq)]
pub struct Bar<'a> {
    /// The element id of the bar.
    pub id: &'static str,
    /// The triggers of the roots.
    pub items: Vec<Trigger<'a>>,
}

/// The trigger of a node.
#[derive(Debug, Clone, PartialEq)]
pub struct Trigger<'a> {
    /// The node.
    pub node: &'a MenuNode,
    /// The element ids of the node.
    pub elements: ElementIds,
    /// Whether the node is open.
    pub expanded: bool,
    /// The panel of the node; only present while it is open.
    pub panel: Option<Panel<'a>>,
}

/// A panel holding the children of an open node.
///
/// Pointer movement over a panel is reported as [`Target::Panel`] with the
/// id of its owner.
///
/// [`Target::Panel`]: crate::core::Target::Panel
#[derive(Debug, Clone, PartialEq)]
pub struct Panel<'a> {
    /// The element id of the panel.
    pub id: &'a NodeId,
    /// How the panel is laid out.
    pub placement: Placement,
    /// The triggers of the children.
    pub items: Vec<Trigger<'a>>,
}

/// Projects a menu into a [`View`].
pub fn render<'a>(
    tree: &'a MenuTree,
    path: &OpenPath,
    mode: ViewportMode,
    drawer_open: bool,
    brand: &'a Brand,
) -> View<'a> {
    let placement = Placement::from(mode);

    let hamburger = (mode == ViewportMode::Compact).then_some(Hamburger {
        id: HAMBURGER_ID,
        expanded: drawer_open,
    });

    let bar = (mode == ViewportMode::Full || drawer_open).then(|| Bar {
        id: MENUBAR_ID,
        items: tree
            .roots()
            .map(|node| trigger(tree, node, path, placement))
            .collect(),
    });

    View {
        id: NAVIGATION_ID,
        brand,
        mode,
        hamburger,
        bar,
    }
}

fn trigger<'a>(
    tree: &'a MenuTree,
    node: &'a MenuNode,
    path: &OpenPath,
    placement: Placement,
) -> Trigger<'a> {
    let expanded = path.contains(&node.id);

    let panel = (expanded && node.has_children()).then(|| Panel {
        id: &node.id,
        placement,
        items: tree
            .children(&node.id)
            .map(|child| trigger(tree, child, path, placement))
            .collect(),
    });

    Trigger {
        node,
        elements: node.id.elements(),
        expanded,
        panel,
    }
}
