//! Handle events of a navigation menu.
use crate::NodeId;
use crate::keyboard::{Key, Modifiers};
use crate::time::Instant;

/// The element an [`Event`] is aimed at.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Target {
    /// The trigger of a menu node.
    Node(NodeId),

    /// The toggle showing and hiding the menu bar in compact layouts.
    Hamburger,

    /// The open panel of a menu node, including its padding, reported with
    /// the id of the node owning it.
    Panel(NodeId),

    /// Any other element inside the root menu container, like the brand bar.
    Container,

    /// Anything outside of the root menu container.
    Outside,
}

impl Target {
    /// Returns the targeted node, if any.
    pub fn node(&self) -> Option<&NodeId> {
        match self {
            Self::Node(id) => Some(id),
            Self::Panel(_) | Self::Hamburger | Self::Container | Self::Outside => None,
        }
    }

    /// Returns true if the target lies outside of the root menu container.
    pub fn is_outside(&self) -> bool {
        matches!(self, Self::Outside)
    }
}

impl From<NodeId> for Target {
    fn from(id: NodeId) -> Self {
        Self::Node(id)
    }
}

/// A raw input event, as reported by the host.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// The pointer entered the target.
    PointerEnter(Target),

    /// The pointer left the target.
    PointerLeave(Target),

    /// A pointer button was pressed over the target.
    PointerDown(Target),

    /// The target was clicked.
    Click(Target),

    /// A key was pressed while the target had focus.
    KeyDown {
        /// The focused target.
        target: Target,
        /// The pressed key.
        key: Key,
        /// The state of the modifier keys.
        modifiers: Modifiers,
    },

    /// The target gained focus.
    Focus(Target),

    /// The target lost focus.
    Blur(Target),

    /// The viewport was resized to the given width, in logical pixels.
    Resize {
        /// The new width of the viewport.
        width: f32,
    },
}

impl Event {
    /// Creates a [`Event::KeyDown`] without modifiers.
    pub fn key(target: impl Into<Target>, key: Key) -> Self {
        Self::KeyDown {
            target: target.into(),
            key,
            modifiers: Modifiers::empty(),
        }
    }

    /// Returns the target of the [`Event`], if any.
    pub fn target(&self) -> Option<&Target> {
        match self {
            Self::PointerEnter(target)
            | Self::PointerLeave(target)
            | Self::PointerDown(target)
            | Self::Click(target)
            | Self::Focus(target)
            | Self::Blur(target)
            | Self::KeyDown { target, .. } => Some(target),
            Self::Resize { .. } => None,
        }
    }

    /// Timestamps the [`Event`], turning it into an [`Input`].
    pub fn at(self, at: Instant) -> Input {
        Input { event: self, at }
    }
}

/// An [`Event`] along with the time it happened.
#[derive(Debug, Clone, PartialEq)]
pub struct Input {
    /// The event.
    pub event: Event,
    /// The time of the event.
    pub at: Instant,
}

/// The status of an [`Event`] after being processed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// The [`Event`] was **NOT** handled by the menu.
    ///
    /// The host should run its default behavior, like following a link.
    Ignored,

    /// The [`Event`] was handled and processed by the menu.
    Captured,
}

impl Status {
    /// Merges two [`Status`] into one.
    ///
    /// `Captured` takes precedence over `Ignored`:
    ///
    /// ```
    /// use icy_menu_core::event::Status;
    ///
    /// assert_eq!(Status::Ignored.merge(Status::Ignored), Status::Ignored);
    /// assert_eq!(Status::Ignored.merge(Status::Captured), Status::Captured);
    /// assert_eq!(Status::Captured.merge(Status::Ignored), Status::Captured);
    /// assert_eq!(Status::Captured.merge(Status::Captured), Status::Captured);
    /// ```
    pub fn merge(self, b: Self) -> Self {
        match self {
            Status::Ignored => b,
            Status::Captured => Status::Captured,
        }
    }
}
