//! Keyboard traversal of a menu, following the menu bar pattern.
use crate::core::event::Status::{self, Captured, Ignored};
use crate::core::keyboard::Named;
use crate::core::{MenuNode, NodeId};
use crate::router::Router;
use crate::shell::{Focus, Shell};

/// The direction of a step among siblings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    Next,
    Previous,
    First,
    Last,
}

impl Router {
    /// Moves focus, and possibly the open path, in response to a named key
    /// pressed on the trigger of the given node.
    pub(crate) fn traverse(&mut self, id: &NodeId, key: Named, shell: &mut Shell) -> Status {
        let Some(node) = self.state.tree().node(id) else {
            log::warn!("Ignoring key on unknown menu `{id}`");
            return Ignored;
        };

        let depth = node.depth();
        let has_children = node.has_children();

        if depth == 0 {
            match key {
                Named::ArrowRight => self.move_root(id, Step::Next, shell),
                Named::ArrowLeft => self.move_root(id, Step::Previous, shell),
                Named::Home => self.move_root(id, Step::First, shell),
                Named::End => self.move_root(id, Step::Last, shell),
                Named::ArrowDown if has_children => self.enter(id, 0, Step::First, shell),
                Named::ArrowUp if has_children => self.enter(id, 0, Step::Last, shell),
                _ => Ignored,
            }
        } else {
            match key {
                Named::ArrowDown => self.move_sibling(id, Step::Next, shell),
                Named::ArrowUp => self.move_sibling(id, Step::Previous, shell),
                Named::Home => self.move_sibling(id, Step::First, shell),
                Named::End => self.move_sibling(id, Step::Last, shell),
                Named::ArrowRight if has_children => self.enter(id, depth, Step::First, shell),
                Named::ArrowRight => {
                    let root = self.root_of(id);
                    self.move_root(&root, Step::Next, shell)
                }
                Named::ArrowLeft if depth >= 2 => self.leave(id, shell),
                Named::ArrowLeft => {
                    let root = self.root_of(id);
                    self.move_root(&root, Step::Previous, shell)
                }
                _ => Ignored,
            }
        }
    }

    /// Focuses another root. If a menu was open, the new root replaces it.
    fn move_root(&mut self, from: &NodeId, step: Step, shell: &mut Shell) -> Status {
        let tree = self.state.tree();
        let roots: Vec<&MenuNode> = tree.roots().collect();

        let Some(target) = self.step(&roots, from, step) else {
            return Captured;
        };

        let target_id = target.id.clone();
        let opens = target.has_children();

        if !self.state.path().is_empty() {
            let _ = self.timers.cancel_all();

            let changed = if opens {
                self.state.open(&target_id, 0)
            } else {
                self.state.close_all()
            };

            if changed {
                shell.request_redraw();
            }
        }

        self.focus(target_id, shell);

        Captured
    }

    /// Focuses another node of the same panel.
    fn move_sibling(&mut self, from: &NodeId, step: Step, shell: &mut Shell) -> Status {
        let siblings: Vec<&MenuNode> = self.state.tree().siblings(from).collect();

        let Some(target) = self.step(&siblings, from, step) else {
            return Captured;
        };

        let target_id = target.id.clone();

        self.focus(target_id, shell);

        Captured
    }

    /// Opens a node and focuses its first or last child.
    fn enter(&mut self, id: &NodeId, depth: usize, step: Step, shell: &mut Shell) -> Status {
        let children: Vec<NodeId> = self
            .state
            .tree()
            .children(id)
            .map(|child| child.id.clone())
            .collect();

        let target = match step {
            Step::Last => children.last(),
            Step::First | Step::Next | Step::Previous => children.first(),
        };

        let Some(target) = target.cloned() else {
            return Ignored;
        };

        let _ = self.timers.cancel_all();

        if self.state.open(id, depth) {
            shell.request_redraw();
        }

        self.focus(target, shell);

        Captured
    }

    /// Closes the panel containing a node and focuses its trigger.
    fn leave(&mut self, id: &NodeId, shell: &mut Shell) -> Status {
        let Some(parent) = self.state.tree().parent(id).map(|parent| parent.id.clone()) else {
            return Ignored;
        };

        let _ = self.timers.cancel_all();

        if self.state.close(&parent) {
            shell.request_redraw();
        }

        self.focus(parent, shell);

        Captured
    }

    fn step<'a>(&self, nodes: &[&'a MenuNode], from: &NodeId, step: Step) -> Option<&'a MenuNode> {
        let current = nodes.iter().position(|node| node.id == *from)?;
        let last = nodes.len().checked_sub(1)?;
        let wrap = self.settings.wrap_navigation;

        let index = match step {
            Step::First => 0,
            Step::Last => last,
            Step::Next if current < last => current + 1,
            Step::Next if wrap => 0,
            Step::Previous if current > 0 => current - 1,
            Step::Previous if wrap => last,
            Step::Next | Step::Previous => return None,
        };

        nodes.get(index).copied()
    }

    fn root_of(&self, id: &NodeId) -> NodeId {
        self.state
            .tree()
            .chain(id)
            .and_then(|chain| chain.into_iter().next())
            .unwrap_or_else(|| id.clone())
    }

    fn focus(&mut self, id: NodeId, shell: &mut Shell) {
        log::trace!("Moving menu focus to `{id}`");

        self.focused = Some(id.clone());
        shell.request_focus(Focus::Node(id));
    }
}
