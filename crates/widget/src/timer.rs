//! Cancellable, single-shot timers driving delayed menu transitions.
use crate::core::NodeId;
use crate::core::time::Instant;

use rustc_hash::FxHashMap;

/// The transition a [`Timer`] performs when it fires.
///
/// Closes are ordered before opens, so that timers due at the same instant
/// close stale branches before opening new ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Kind {
    /// Closes a node after the grace delay.
    Close,

    /// Opens a node after the hover delay.
    Open,
}

/// A timer that is due.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Timer {
    /// The node the timer applies to.
    pub node: NodeId,
    /// The transition to perform.
    pub kind: Kind,
    /// The time the timer was due.
    pub deadline: Instant,
}

/// The set of pending timers of a menu.
///
/// There is at most one pending timer per node and [`Kind`]; scheduling a
/// timer replaces any pending one for the same node and kind.
#[derive(Debug, Clone, Default)]
pub struct Timers {
    pending: FxHashMap<(NodeId, Kind), Instant>,
}

impl Timers {
    /// Creates an empty set of [`Timers`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedules a timer, replacing any pending one for the same node and
    /// kind.
    pub fn schedule(&mut self, node: NodeId, kind: Kind, deadline: Instant) {
        log::trace!("Scheduling {kind:?} timer for `{node}`");

        let _ = self.pending.insert((node, kind), deadline);
    }

    /// Cancels the pending timer of the given node and kind.
    ///
    /// Returns true if a timer was pending.
    pub fn cancel(&mut self, node: &NodeId, kind: Kind) -> bool {
        self.pending.remove(&(node.clone(), kind)).is_some()
    }

    /// Cancels every pending timer of the given node.
    pub fn cancel_node(&mut self, node: &NodeId) {
        let _ = self.cancel(node, Kind::Open);
        let _ = self.cancel(node, Kind::Close);
    }

    /// Cancels every pending timer.
    ///
    /// Returns the number of canceled timers.
    pub fn cancel_all(&mut self) -> usize {
        let canceled = self.pending.len();

        if canceled > 0 {
            log::trace!("Canceling {canceled} pending timers");
        }

        self.pending.clear();

        canceled
    }

    /// Keeps only the timers of the nodes matching the predicate.
    pub fn retain(&mut self, mut keep: impl FnMut(&NodeId) -> bool) {
        self.pending.retain(|(node, _), _| keep(node));
    }

    /// Returns the deadline of the pending timer of the given node and
    /// kind.
    pub fn deadline(&self, node: &NodeId, kind: Kind) -> Option<Instant> {
        self.pending.get(&(node.clone(), kind)).copied()
    }

    /// Returns true if a timer of the given node and kind is pending.
    pub fn is_pending(&self, node: &NodeId, kind: Kind) -> bool {
        self.deadline(node, kind).is_some()
    }

    /// Returns the earliest deadline among the pending timers.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.pending.values().min().copied()
    }

    /// Returns the number of pending timers.
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    /// Returns true if no timer is pending.
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Removes and returns every timer due at `now`, in firing order.
    pub fn take_due(&mut self, now: Instant) -> Vec<Timer> {
        let mut due: Vec<Timer> = self
            .pending
            .iter()
            .filter(|(_, deadline)| **deadline <= now)
            .map(|((node, kind), deadline)| Timer {
                node: node.clone(),
                kind: *kind,
                deadline: *deadline,
            })
            .collect();

        for timer in &due {
            let _ = self.pending.remove(&(timer.node.clone(), timer.kind));
        }

        due.sort_by(|a, b| {
            a.deadline
                .cmp(&b.deadline)
                .then(a.kind.cmp(&b.kind))
                .then_with(|| a.node.cmp(&b.node))
        });

        due
    }
}
