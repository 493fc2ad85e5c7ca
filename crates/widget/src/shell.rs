//! Request side effects from the host of a menu.
use crate::core::NodeId;
use crate::core::event;
use crate::core::time::Instant;

use smol_str::SmolStr;

/// The element id of the toggle showing the menu bar in compact layouts.
pub const HAMBURGER_ID: &str = "nav-main";

/// The strategy used to redraw a menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum RedrawRequest {
    /// Redraw the next frame.
    NextFrame,

    /// Redraw at the given time; the menu has a pending timer due then.
    At(Instant),

    /// No redraw is needed.
    Wait,
}

/// An element the menu wants keyboard focus moved to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Focus {
    /// The trigger of a node.
    Node(NodeId),

    /// The toggle showing the menu bar in compact layouts.
    Hamburger,
}

impl Focus {
    /// Returns the id of the element to focus.
    pub fn element_id(&self) -> SmolStr {
        match self {
            Self::Node(id) => id.elements().trigger,
            Self::Hamburger => SmolStr::new_static(HAMBURGER_ID),
        }
    }
}

/// A connection to the host of a menu.
///
/// The menu leverages a [`Shell`] to request side effects from its host,
/// like redrawing, moving focus or following a link.
#[derive(Debug, Clone)]
pub struct Shell {
    event_status: event::Status,
    redraw_request: RedrawRequest,
    focus_request: Option<Focus>,
    navigate_request: Option<SmolStr>,
}

impl Default for Shell {
    fn default() -> Self {
        Self::new()
    }
}

impl Shell {
    /// Creates a new, empty [`Shell`].
    pub fn new() -> Self {
        Self {
            event_status: event::Status::Ignored,
            redraw_request: RedrawRequest::Wait,
            focus_request: None,
            navigate_request: None,
        }
    }

    /// Marks the current event as captured. Prevents the default behavior
    /// of the host.
    pub fn capture_event(&mut self) {
        self.event_status = event::Status::Captured;
    }

    /// Returns the current [`event::Status`] of the [`Shell`].
    #[must_use]
    pub fn event_status(&self) -> event::Status {
        self.event_status
    }

    /// Returns whether the current event has been captured.
    #[must_use]
    pub fn is_event_captured(&self) -> bool {
        self.event_status == event::Status::Captured
    }

    /// Requests a new frame to be drawn as soon as possible.
    pub fn request_redraw(&mut self) {
        self.redraw_request = RedrawRequest::NextFrame;
    }

    /// Requests a new frame to be drawn at the given time, unless an
    /// earlier redraw was already requested.
    pub fn request_redraw_at(&mut self, at: Instant) {
        self.redraw_request = self.redraw_request.min(RedrawRequest::At(at));
    }

    /// Returns the request a redraw should happen, if any.
    #[must_use]
    pub fn redraw_request(&self) -> RedrawRequest {
        self.redraw_request
    }

    /// Requests keyboard focus to move to the given element.
    pub fn request_focus(&mut self, focus: Focus) {
        self.focus_request = Some(focus);
    }

    /// Takes the pending focus request, if any.
    pub fn take_focus_request(&mut self) -> Option<Focus> {
        self.focus_request.take()
    }

    /// Returns the pending focus request, if any.
    #[must_use]
    pub fn focus_request(&self) -> Option<&Focus> {
        self.focus_request.as_ref()
    }

    /// Requests the host to follow the given link.
    pub fn request_navigate(&mut self, url: impl Into<SmolStr>) {
        self.navigate_request = Some(url.into());
    }

    /// Takes the pending navigation request, if any.
    pub fn take_navigate_request(&mut self) -> Option<SmolStr> {
        self.navigate_request.take()
    }

    /// Returns the pending navigation request, if any.
    #[must_use]
    pub fn navigate_request(&self) -> Option<&str> {
        self.navigate_request.as_deref()
    }

    /// Merges the current [`Shell`] with another one.
    ///
    /// Requests of the other [`Shell`] win over the current ones.
    pub fn merge(&mut self, other: Shell) {
        self.event_status = self.event_status.merge(other.event_status);
        self.redraw_request = self.redraw_request.min(other.redraw_request);

        if other.focus_request.is_some() {
            self.focus_request = other.focus_request;
        }

        if other.navigate_request.is_some() {
            self.navigate_request = other.navigate_request;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::time::{Duration, Instant};

    #[test]
    fn test_redraw_requests_keep_the_earliest() {
        let now = Instant::now();
        let mut shell = Shell::new();

        assert_eq!(shell.redraw_request(), RedrawRequest::Wait);

        shell.request_redraw_at(now + Duration::from_millis(300));
        shell.request_redraw_at(now + Duration::from_millis(150));
        shell.request_redraw_at(now + Duration::from_millis(500));
        assert_eq!(
            shell.redraw_request(),
            RedrawRequest::At(now + Duration::from_millis(150))
        );

        shell.request_redraw();
        shell.request_redraw_at(now);
        assert_eq!(shell.redraw_request(), RedrawRequest::NextFrame);
    }

    #[test]
    fn test_merge() {
        let mut shell = Shell::new();
        shell.request_focus(Focus::Hamburger);

        let mut other = Shell::new();
        other.capture_event();
        other.request_redraw();
        other.request_focus(Focus::Node("menu-Root1".into()));
        other.request_navigate("/root1");

        shell.merge(other);

        assert!(shell.is_event_captured());
        assert_eq!(shell.redraw_request(), RedrawRequest::NextFrame);
        assert_eq!(
            shell.take_focus_request(),
            Some(Focus::Node("menu-Root1".into()))
        );
        assert_eq!(shell.navigate_request(), Some("/root1"));
        assert_eq!(shell.take_focus_request(), None);
    }

    #[test]
    fn test_focus_element_ids() {
        assert_eq!(
            Focus::Node("menu-Root1/Child1".into()).element_id(),
            "menuitem-Root1/Child1"
        );
        assert_eq!(Focus::Hamburger.element_id(), HAMBURGER_ID);
    }
}
