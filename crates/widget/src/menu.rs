//! A hierarchical navigation menu.
//!
//! # Example
//! ```
//! use icy_menu_widget::core::time::{Instant, milliseconds};
//! use icy_menu_widget::core::{Event, MenuItem, MenuTree, Target};
//! use icy_menu_widget::{Brand, NavMenu};
//!
//! let tree = MenuTree::new(vec![
//!     MenuItem::new("Products", "/products")
//!         .push(MenuItem::new("Software", "/products/software")),
//!     MenuItem::new("About", "/about"),
//! ])
//! .expect("valid tree");
//!
//! let mut menu = NavMenu::new(Brand::new("Acme"), tree);
//! let now = Instant::now();
//!
//! let _ = menu.update(&Event::PointerEnter(Target::Node("menu-Products".into())).at(now));
//! let _ = menu.tick(now + milliseconds(150));
//!
//! assert_eq!(menu.path(), &["menu-Products"]);
//! ```
use crate::core::a11y::{self, Annotations};
use crate::core::time::Instant;
use crate::core::{Input, MenuTree, OpenPath, ViewportMode};
use crate::router::Router;
use crate::settings::Settings;
use crate::shell::Shell;
use crate::view::{self, Brand, View};

/// A navigation menu: a [`Brand`], a [`MenuTree`] and the [`Router`]
/// driving its state.
#[derive(Debug, Clone)]
pub struct NavMenu {
    brand: Brand,
    router: Router,
}

impl NavMenu {
    /// Creates a new [`NavMenu`] with the default [`Settings`].
    pub fn new(brand: Brand, tree: MenuTree) -> Self {
        Self::with_settings(brand, tree, Settings::default())
    }

    /// Creates a new [`NavMenu`] with the given [`Settings`].
    pub fn with_settings(brand: Brand, tree: MenuTree, settings: Settings) -> Self {
        log::debug!(
            "Creating menu `{}` with {} nodes in {:?} mode",
            brand.title,
            tree.len(),
            settings.initial_mode
        );

        Self {
            brand,
            router: Router::new(tree, settings),
        }
    }

    /// Processes an [`Input`] and returns the side effects it requests.
    pub fn update(&mut self, input: &Input) -> Shell {
        let mut shell = Shell::new();
        self.router.update(input, &mut shell);
        shell
    }

    /// Processes a batch of [`Input`]s in order and returns the side effects
    /// they request together.
    ///
    /// The batch is captured if any of its inputs is, and later focus or
    /// navigation requests win over earlier ones.
    pub fn update_all<'a>(&mut self, inputs: impl IntoIterator<Item = &'a Input>) -> Shell {
        let mut shell = Shell::new();

        for input in inputs {
            shell.merge(self.update(input));
        }

        shell
    }

    /// Fires the timers due at `now` and returns the side effects they
    /// request.
    pub fn tick(&mut self, now: Instant) -> Shell {
        let mut shell = Shell::new();
        self.router.tick(now, &mut shell);
        shell
    }

    /// Resets the menu after the host followed a link.
    pub fn navigated(&mut self) -> Shell {
        let mut shell = Shell::new();
        self.router.navigated(&mut shell);
        shell
    }

    /// Replaces the tree of the menu, keeping whatever is still open in it.
    pub fn set_tree(&mut self, tree: MenuTree) {
        self.router.set_tree(tree);
    }

    /// Returns the [`Brand`] of the menu.
    pub fn brand(&self) -> &Brand {
        &self.brand
    }

    /// Returns the [`Router`] of the menu.
    pub fn router(&self) -> &Router {
        &self.router
    }

    /// Returns the current [`OpenPath`].
    pub fn path(&self) -> &OpenPath {
        self.router.path()
    }

    /// Returns the current [`ViewportMode`].
    pub fn mode(&self) -> ViewportMode {
        self.router.mode()
    }

    /// Returns the time the menu needs to be ticked next, if any.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.router.next_deadline()
    }

    /// Projects the menu into a [`View`].
    pub fn view(&self) -> View<'_> {
        view::render(
            self.router.tree(),
            self.router.path(),
            self.router.mode(),
            self.router.is_drawer_open(),
            &self.brand,
        )
    }

    /// Returns the accessibility attributes of every node.
    pub fn annotations(&self) -> Annotations {
        a11y::annotate(self.router.tree(), self.router.path())
    }

    /// Builds the AccessKit nodes of the menu.
    #[cfg(feature = "accessibility")]
    pub fn accessibility_nodes(
        &self,
    ) -> Vec<(crate::core::accesskit::NodeId, crate::core::accesskit::Node)> {
        a11y::build(self.router.tree(), &self.annotations())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::event::{Event, Status, Target};
    use crate::core::keyboard::{Key, Named};
    use crate::core::time::milliseconds;
    use crate::core::{MenuItem, MenuState, NodeId};
    use crate::shell::{Focus, RedrawRequest};

    fn tree() -> MenuTree {
        MenuTree::new(vec![
            MenuItem::new("Root1", "/1").children(vec![
                MenuItem::new("Child1", "/1/1"),
                MenuItem::new("Child2", "/1/2"),
            ]),
            MenuItem::new("Root2", "/2").push(MenuItem::new("Child1", "/2/1")),
        ])
        .expect("valid tree")
    }

    fn menu() -> NavMenu {
        NavMenu::new(Brand::new("Acme"), tree())
    }

    fn node(id: &str) -> Target {
        Target::Node(NodeId::from(id))
    }

    #[test]
    fn test_projections_follow_transitions() {
        let mut menu = menu();
        let now = Instant::now();

        let shell = menu.update(&Event::Click(node("menu-Root1")).at(now));
        assert!(shell.is_event_captured());

        let view = menu.view();
        assert!(
            view.trigger(&"menu-Root1".into())
                .is_some_and(|trigger| trigger.expanded)
        );

        let annotations = menu.annotations();
        assert!(
            annotations
                .get(&NodeId::from("menu-Root1"))
                .is_some_and(|annotation| annotation.expanded)
        );
        assert!(annotations.panel(&NodeId::from("menu-Root1")).is_some());

        let _ = menu.navigated();
        assert!(menu.path().is_empty());
        assert!(menu.annotations().iter().all(|(_, a)| !a.expanded));
    }

    #[test]
    fn test_next_deadline() {
        let mut menu = menu();
        let now = Instant::now();

        assert_eq!(menu.next_deadline(), None);

        let _ = menu.update(&Event::PointerEnter(node("menu-Root2")).at(now));
        assert_eq!(menu.next_deadline(), Some(now + milliseconds(150)));

        let _ = menu.tick(now + milliseconds(150));
        assert_eq!(menu.path(), &["menu-Root2"]);
        assert_eq!(menu.next_deadline(), None);
    }

    #[test]
    fn test_update_all_merges_side_effects() {
        let mut menu = menu();
        let now = Instant::now();

        let batch = [
            Event::PointerEnter(node("menu-Root2")).at(now),
            Event::Click(node("menu-Root1")).at(now),
            Event::key(node("menu-Root1"), Key::Named(Named::Escape)).at(now),
        ];

        let mut shell = menu.update_all(&batch);

        assert!(menu.path().is_empty());
        assert!(shell.is_event_captured());
        assert_eq!(shell.redraw_request(), RedrawRequest::NextFrame);
        assert_eq!(
            shell.take_focus_request(),
            Some(Focus::Node("menu-Root1".into()))
        );

        let shell = menu.update_all(&[Event::PointerDown(Target::Container).at(now)]);

        assert!(!shell.is_event_captured());
        assert_eq!(shell.redraw_request(), RedrawRequest::Wait);
    }

    #[test]
    fn test_brand() {
        assert_eq!(menu().brand().title, "Acme");
        assert_eq!(menu().mode(), ViewportMode::Full);
    }

    #[test]
    fn test_opening_another_root_switches_branches() {
        let mut state = MenuState::new(tree());

        assert!(state.open(&"menu-Root1".into(), 0));
        assert_eq!(state.path(), &["menu-Root1"]);

        assert!(state.open(&"menu-Root2".into(), 0));
        assert_eq!(state.path(), &["menu-Root2"]);

        assert!(state.toggle(&"menu-Root2".into(), 0));
        assert!(state.path().is_empty());
    }

    #[test]
    fn test_passing_pointer_does_not_open() {
        let mut menu = menu();
        let t0 = Instant::now();

        let _ = menu.update(&Event::PointerEnter(node("menu-Root1")).at(t0));
        let _ = menu.update(&Event::PointerLeave(node("menu-Root1")).at(t0 + milliseconds(50)));
        let _ = menu.tick(t0 + milliseconds(150));
        let _ = menu.tick(t0 + milliseconds(1000));

        assert!(menu.path().is_empty());
        assert_eq!(menu.next_deadline(), None);
    }

    #[test]
    fn test_diagonal_move_keeps_branch_open() {
        let mut menu = menu();
        let t0 = Instant::now();

        let _ = menu.update(&Event::Click(node("menu-Root1")).at(t0));
        assert_eq!(menu.path(), &["menu-Root1"]);

        let _ = menu.update(&Event::PointerLeave(node("menu-Root1")).at(t0 + milliseconds(10)));
        let _ = menu.update(&Event::PointerEnter(node("menu-Root1/Child1")).at(t0 + milliseconds(60)));
        let _ = menu.tick(t0 + milliseconds(2000));

        assert_eq!(menu.path(), &["menu-Root1"]);
    }

    #[test]
    fn test_outside_pointer_down_dismisses() {
        let mut menu = menu();
        let t0 = Instant::now();

        let _ = menu.update(&Event::Click(node("menu-Root1")).at(t0));
        let _ = menu.update(&Event::Click(node("menu-Root1/Child1")).at(t0));
        let _ = menu.update(&Event::PointerEnter(node("menu-Root2")).at(t0));

        let shell = menu.update(&Event::PointerDown(Target::Outside).at(t0 + milliseconds(20)));

        assert!(menu.path().is_empty());
        assert_eq!(shell.event_status(), Status::Ignored);

        // The canceled hover intent never fires
        let _ = menu.tick(t0 + milliseconds(1000));
        assert!(menu.path().is_empty());
    }

    #[test]
    fn test_toggling_twice_restores_path() {
        let mut state = MenuState::new(tree());

        let _ = state.open(&"menu-Root1".into(), 0);
        let before = state.path().clone();

        assert!(state.toggle(&"menu-Root1".into(), 0));
        assert!(state.path().is_empty());
        assert!(state.toggle(&"menu-Root1".into(), 0));
        assert_eq!(state.path(), &before);
    }

    #[test]
    fn test_clicking_open_root_closes_it() {
        let mut menu = menu();
        let t0 = Instant::now();

        let _ = menu.update(&Event::Click(node("menu-Root1")).at(t0));
        let _ = menu.update(&Event::Click(node("menu-Root2")).at(t0));
        assert_eq!(menu.path(), &["menu-Root2"]);

        let _ = menu.update(&Event::Click(node("menu-Root2")).at(t0));
        assert!(menu.path().is_empty());
    }

    #[test]
    fn test_escape_returns_focus_to_open_trigger() {
        let mut menu = menu();
        let t0 = Instant::now();

        let _ = menu.update(&Event::key(node("menu-Root2"), Key::Named(Named::ArrowDown)).at(t0));
        assert_eq!(menu.path(), &["menu-Root2"]);

        let mut shell =
            menu.update(&Event::key(node("menu-Root2/Child1"), Key::Named(Named::Escape)).at(t0));

        assert!(menu.path().is_empty());
        assert_eq!(
            shell.take_focus_request(),
            Some(Focus::Node("menu-Root2".into()))
        );
    }

    #[test]
    fn test_compact_layout_is_click_only() {
        let mut menu = menu();
        let t0 = Instant::now();

        let _ = menu.update(&Event::Click(node("menu-Root1")).at(t0));
        let _ = menu.update(&Event::Resize { width: 480.0 }.at(t0));

        assert!(menu.path().is_empty());
        assert!(menu.view().bar.is_none());

        let _ = menu.update(&Event::PointerEnter(node("menu-Root2")).at(t0));
        let _ = menu.tick(t0 + milliseconds(1000));
        assert!(menu.path().is_empty());

        let _ = menu.update(&Event::Click(Target::Hamburger).at(t0));
        let _ = menu.update(&Event::Click(node("menu-Root2")).at(t0));
        assert_eq!(menu.path(), &["menu-Root2"]);

        let view = menu.view();
        assert!(
            view.trigger(&"menu-Root2/Child1".into())
                .is_some_and(|trigger| !trigger.expanded)
        );
    }

    #[test]
    fn test_following_a_link() {
        let mut menu = menu();
        let t0 = Instant::now();

        let _ = menu.update(&Event::Click(node("menu-Root2")).at(t0));
        let mut shell = menu.update(&Event::Click(node("menu-Root2/Child1")).at(t0));

        assert_eq!(shell.event_status(), Status::Ignored);
        assert_eq!(shell.take_navigate_request().as_deref(), Some("/2/1"));

        let shell = menu.navigated();

        assert!(menu.path().is_empty());
        assert!(!shell.is_event_captured());
    }

    #[cfg(feature = "accessibility")]
    #[test]
    fn test_accessibility_nodes() {
        let mut menu = menu();

        // Landmark, bar and five triggers
        assert_eq!(menu.accessibility_nodes().len(), 7);

        let _ = menu.update(&Event::Click(node("menu-Root1")).at(Instant::now()));

        // Plus the open panel
        assert_eq!(menu.accessibility_nodes().len(), 8);
    }
}
