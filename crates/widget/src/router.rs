//! Route raw input to the transitions of a menu.
use crate::core::event::{Event, Input, Status, Target};
use crate::core::keyboard::{Key, Named};
use crate::core::time::Instant;
use crate::core::{MenuNode, MenuState, MenuTree, NodeId, OpenPath, ViewportMode};
use crate::settings::Settings;
use crate::shell::{Focus, Shell};
use crate::timer::{Kind, Timer, Timers};

use rustc_hash::FxHashSet;

/// The interaction policy of a navigation menu.
///
/// A [`Router`] owns the [`MenuState`] of a menu along with its pending
/// timers, and turns every [`Input`] into at most one kind of transition.
/// In priority order:
///
/// 1. A pointer press or a focus change outside of the menu closes
///    everything.
/// 2. Escape closes everything and moves focus back to the trigger of the
///    deepest open node.
/// 3. In [`ViewportMode::Full`], resting the pointer on a trigger opens it
///    after [`Settings::hover_open_delay`], and leaving an open branch closes
///    it after [`Settings::close_grace_delay`] unless the pointer comes back.
/// 4. Clicking or activating a trigger with children toggles it and
///    suppresses its hover intent until the pointer leaves it. Activating a
///    leaf only requests navigation.
/// 5. Resizing into [`ViewportMode::Compact`] closes everything and disables
///    hover intent.
///
/// Timers fire through [`tick`]; [`update`] ticks before handling its input,
/// so timers due before an input always fire first.
///
/// [`tick`]: Self::tick
/// [`update`]: Self::update
#[derive(Debug, Clone)]
pub struct Router {
    pub(crate) state: MenuState,
    pub(crate) settings: Settings,
    pub(crate) timers: Timers,
    mode: ViewportMode,
    suppressed: FxHashSet<NodeId>,
    pub(crate) focused: Option<NodeId>,
    drawer_open: bool,
}

impl Router {
    /// Creates a new [`Router`] for the given tree, with nothing open.
    pub fn new(tree: MenuTree, settings: Settings) -> Self {
        let mode = settings.initial_mode;

        Self {
            state: MenuState::new(tree),
            settings,
            timers: Timers::new(),
            mode,
            suppressed: FxHashSet::default(),
            focused: None,
            drawer_open: false,
        }
    }

    /// Returns the [`MenuState`] of the [`Router`].
    pub fn state(&self) -> &MenuState {
        &self.state
    }

    /// Returns the tree of the menu.
    pub fn tree(&self) -> &MenuTree {
        self.state.tree()
    }

    /// Returns the current [`OpenPath`].
    pub fn path(&self) -> &OpenPath {
        self.state.path()
    }

    /// Returns the [`Settings`] of the [`Router`].
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Returns the current [`ViewportMode`].
    pub fn mode(&self) -> ViewportMode {
        self.mode
    }

    /// Returns true if the compact drawer is showing the menu bar.
    pub fn is_drawer_open(&self) -> bool {
        self.drawer_open
    }

    /// Returns the node whose trigger has focus, if any.
    pub fn focused(&self) -> Option<&NodeId> {
        self.focused.as_ref()
    }

    /// Returns the pending [`Timers`].
    pub fn timers(&self) -> &Timers {
        &self.timers
    }

    /// Returns the time the next pending timer is due, if any.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.timers.next_deadline()
    }

    /// Processes an [`Input`], recording side effects in the [`Shell`].
    pub fn update(&mut self, input: &Input, shell: &mut Shell) {
        self.tick(input.at, shell);

        match &input.event {
            Event::PointerDown(target) | Event::Focus(target) if target.is_outside() => {
                self.dismiss(shell);
            }
            Event::KeyDown {
                key: Key::Named(Named::Escape),
                ..
            } => {
                self.escape(shell);
            }
            Event::Resize { width } => {
                self.resize(*width, shell);
            }
            Event::Click(target) => {
                self.activate(target, shell);
            }
            Event::KeyDown {
                target,
                key,
                modifiers,
            } if key.is_activation() && !modifiers.is_shortcut() => {
                self.activate(target, shell);
            }
            Event::KeyDown {
                target: Target::Node(id),
                key: Key::Named(named),
                modifiers,
            } if !modifiers.is_shortcut() => {
                if self.traverse(id, *named, shell) == Status::Captured {
                    shell.capture_event();
                }
            }
            Event::PointerEnter(target) => {
                self.pointer_enter(target, input.at, shell);
            }
            Event::PointerLeave(target) => {
                self.pointer_leave(target, input.at, shell);
            }
            Event::Focus(target) => {
                self.focused = target.node().cloned();
            }
            Event::Blur(target) => {
                if self.focused.as_ref() == target.node() {
                    self.focused = None;
                }
            }
            Event::PointerDown(_) | Event::KeyDown { .. } => {
                log::trace!("Ignoring menu input: {:?}", input.event);
            }
        }
    }

    /// Fires every timer due at `now`.
    pub fn tick(&mut self, now: Instant, shell: &mut Shell) {
        for timer in self.timers.take_due(now) {
            if self.fire(&timer) {
                shell.request_redraw();
            }
        }

        if let Some(deadline) = self.timers.next_deadline() {
            shell.request_redraw_at(deadline);
        }
    }

    /// Closes every open node and cancels every pending timer.
    ///
    /// Returns true if something was open.
    pub fn close_all(&mut self) -> bool {
        let canceled = self.timers.cancel_all();

        if canceled > 0 {
            log::debug!("Canceled {canceled} pending menu transitions");
        }

        self.suppressed.clear();
        self.state.close_all()
    }

    /// Resets the menu after the host followed a link.
    pub fn navigated(&mut self, shell: &mut Shell) {
        self.dismiss(shell);
    }

    /// Replaces the tree of the menu.
    ///
    /// The open path is pruned to the part still valid in the new tree, and
    /// the timers of removed nodes are canceled.
    pub fn set_tree(&mut self, tree: MenuTree) {
        self.state.set_tree(tree);

        let tree = self.state.tree();

        self.timers.retain(|node| tree.contains(node));
        self.suppressed.retain(|node| tree.contains(node));

        if self.focused.as_ref().is_some_and(|node| !tree.contains(node)) {
            self.focused = None;
        }
    }

    fn dismiss(&mut self, shell: &mut Shell) {
        let closed = self.close_all();
        let hidden = std::mem::replace(&mut self.drawer_open, false);

        if closed || hidden {
            shell.request_redraw();
        }
    }

    fn escape(&mut self, shell: &mut Shell) {
        if let Some(deepest) = self.state.deepest().cloned() {
            let _ = self.close_all();

            self.focused = Some(deepest.clone());

            shell.request_focus(Focus::Node(deepest));
            shell.capture_event();
            shell.request_redraw();
        } else if self.drawer_open {
            self.drawer_open = false;

            shell.request_focus(Focus::Hamburger);
            shell.capture_event();
            shell.request_redraw();
        }
    }

    fn resize(&mut self, width: f32, shell: &mut Shell) {
        let mode = self.settings.mode_for(width);

        if mode == self.mode {
            return;
        }

        log::debug!("Switching menu to {mode:?} mode");

        self.mode = mode;

        if mode == ViewportMode::Compact {
            let _ = self.close_all();
        } else {
            self.drawer_open = false;
        }

        shell.request_redraw();
    }

    fn activate(&mut self, target: &Target, shell: &mut Shell) {
        match target {
            Target::Node(id) => self.activate_node(id, shell),
            Target::Hamburger => self.toggle_drawer(shell),
            Target::Panel(_) | Target::Container | Target::Outside => {
                log::trace!("Ignoring activation of {target:?}");
            }
        }
    }

    fn activate_node(&mut self, id: &NodeId, shell: &mut Shell) {
        let Some(node) = self.state.tree().node(id) else {
            log::warn!("Ignoring activation of unknown menu `{id}`");
            return;
        };

        if !node.has_children() {
            log::debug!("Following `{}` from `{id}`", node.url);

            shell.request_navigate(node.url.as_str());
            return;
        }

        let depth = node.depth();

        self.timers.cancel_node(id);
        let _ = self.suppressed.insert(id.clone());

        if self.state.toggle(id, depth) {
            shell.request_redraw();
        }

        shell.capture_event();
    }

    fn toggle_drawer(&mut self, shell: &mut Shell) {
        if self.mode != ViewportMode::Compact {
            log::trace!("Ignoring menu toggle in {:?} mode", self.mode);
            return;
        }

        self.drawer_open = !self.drawer_open;

        if !self.drawer_open {
            let _ = self.close_all();
        }

        log::debug!(
            "{} menu drawer",
            if self.drawer_open { "Opening" } else { "Closing" }
        );

        shell.capture_event();
        shell.request_redraw();
    }

    fn pointer_enter(&mut self, target: &Target, at: Instant, shell: &mut Shell) {
        let (id, on_trigger) = match target {
            Target::Node(id) => (id, true),
            Target::Panel(id) => (id, false),
            Target::Hamburger | Target::Container | Target::Outside => return,
        };

        if !self.mode.allows_hover() {
            return;
        }

        let Some(chain) = self.state.tree().chain(id) else {
            log::trace!("Ignoring pointer on unknown menu `{id}`");
            return;
        };

        for node in &chain {
            let _ = self.timers.cancel(node, Kind::Close);
        }

        if !on_trigger {
            return;
        }

        let has_children = self
            .state
            .tree()
            .node(id)
            .is_some_and(MenuNode::has_children);

        if !has_children || self.state.is_open(id) || self.suppressed.contains(id) {
            return;
        }

        let deadline = at + self.settings.hover_open_delay;

        self.timers.schedule(id.clone(), Kind::Open, deadline);

        if deadline <= at {
            self.tick(at, shell);
        } else {
            shell.request_redraw_at(deadline);
        }
    }

    fn pointer_leave(&mut self, target: &Target, at: Instant, shell: &mut Shell) {
        let (id, on_trigger) = match target {
            Target::Node(id) => (id, true),
            Target::Panel(id) => (id, false),
            Target::Hamburger | Target::Container | Target::Outside => return,
        };

        if !self.mode.allows_hover() {
            return;
        }

        if on_trigger {
            let _ = self.timers.cancel(id, Kind::Open);
            let _ = self.suppressed.remove(id);
        }

        let Some(chain) = self.state.tree().chain(id) else {
            return;
        };

        let deadline = at + self.settings.close_grace_delay;
        let mut scheduled = false;

        for node in chain {
            if self.state.is_open(&node) {
                self.timers.schedule(node, Kind::Close, deadline);
                scheduled = true;
            }
        }

        if scheduled {
            shell.request_redraw_at(deadline);
        }
    }

    fn fire(&mut self, timer: &Timer) -> bool {
        let id = &timer.node;

        match timer.kind {
            Kind::Open => {
                let tree = self.state.tree();

                let Some(depth) = tree.depth(id) else {
                    return false;
                };

                let reachable = tree
                    .parent(id)
                    .is_none_or(|parent| self.state.is_open(&parent.id));

                if !reachable || !self.mode.allows_hover() || self.suppressed.contains(id) {
                    log::trace!("Dropping stale hover intent on `{id}`");
                    return false;
                }

                log::debug!("Hover intent elapsed on `{id}`");

                self.state.open(id, depth)
            }
            Kind::Close => self.state.close(id),
        }
    }
}
