//! Event plumbing: store change notification and scoped pointer capture.
//!
//! Two mechanisms live here:
//!
//! - [`SubscriberSet`] - an explicit observer list the store notifies after
//!   every mutation, so presentation layers re-render from store state
//!   instead of polling.
//! - [`PointerListeners`] / [`PointerCapture`] - a registry for the
//!   pointer-move/pointer-up listeners a drag or resize session holds for
//!   its duration. The capture guard detaches both listeners on drop, so
//!   they are released on every exit path of a session.

use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

use crate::geometry::Point;
use crate::model::AnnotationId;

// ============================================================================
// Store change notification
// ============================================================================

/// A change the store notifies its subscribers about.
///
/// The store state is already consistent when the event fires; a
/// `Deleted` event for the selected annotation implies the selection was
/// cleared in the same operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreEvent {
    /// An annotation was created.
    Created(AnnotationId),
    /// An annotation's fields were merged with a patch.
    Updated(AnnotationId),
    /// An annotation was removed.
    Deleted(AnnotationId),
    /// The selection changed.
    SelectionChanged(Option<AnnotationId>),
    /// Transient view state changed (tool, color, icon, or zoom).
    ViewChanged,
}

/// Identifier handed out by [`SubscriberSet::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubscriptionId(u64);

/// An ordered list of store subscribers.
#[derive(Default)]
pub struct SubscriberSet {
    next_id: u64,
    entries: Vec<(SubscriptionId, Box<dyn FnMut(&StoreEvent)>)>,
}

impl SubscriberSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a subscriber. Returns the id needed to unsubscribe.
    pub fn subscribe<F>(&mut self, f: F) -> SubscriptionId
    where
        F: FnMut(&StoreEvent) + 'static,
    {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, Box::new(f)));
        id
    }

    /// Remove a subscriber. Unknown ids are a no-op.
    pub fn unsubscribe(&mut self, id: SubscriptionId) {
        self.entries.retain(|(entry_id, _)| *entry_id != id);
    }

    /// Notify all subscribers of an event, in subscription order.
    pub fn emit(&mut self, event: &StoreEvent) {
        for (_, f) in &mut self.entries {
            f(event);
        }
    }

    /// Number of active subscribers.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Debug for SubscriberSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SubscriberSet")
            .field("subscribers", &self.entries.len())
            .finish()
    }
}

// ============================================================================
// Scoped pointer capture
// ============================================================================

/// Identifier for a registered pointer listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ListenerId(u64);

struct ListenerTable<M> {
    next_id: u64,
    moves: Vec<(ListenerId, Box<dyn Fn(Point) -> M>)>,
    ups: Vec<(ListenerId, Box<dyn Fn(Point) -> M>)>,
}

impl<M> ListenerTable<M> {
    fn alloc_id(&mut self) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        id
    }
}

/// Registry for the process-wide pointer-move/pointer-up listeners that
/// drag and resize sessions hold while active.
///
/// Dispatching a pointer event maps it through every registered listener
/// and returns the produced messages; the caller feeds them back into its
/// update loop. Single-threaded by design, mirroring the event model of
/// the host surface.
pub struct PointerListeners<M> {
    inner: Rc<RefCell<ListenerTable<M>>>,
}

impl<M> PointerListeners<M> {
    pub fn new() -> Self {
        Self {
            inner: Rc::new(RefCell::new(ListenerTable {
                next_id: 0,
                moves: Vec::new(),
                ups: Vec::new(),
            })),
        }
    }

    /// Attach a move and an up listener, returning the guard that detaches
    /// both when dropped.
    pub fn capture<FM, FU>(&self, on_move: FM, on_up: FU) -> PointerCapture<M>
    where
        FM: Fn(Point) -> M + 'static,
        FU: Fn(Point) -> M + 'static,
    {
        let mut table = self.inner.borrow_mut();
        let move_id = table.alloc_id();
        table.moves.push((move_id, Box::new(on_move)));
        let up_id = table.alloc_id();
        table.ups.push((up_id, Box::new(on_up)));
        PointerCapture {
            table: Rc::downgrade(&self.inner),
            move_id,
            up_id,
        }
    }

    /// Dispatch a pointer-move event to all captured listeners.
    pub fn pointer_moved(&self, pointer: Point) -> Vec<M> {
        let table = self.inner.borrow();
        table.moves.iter().map(|(_, f)| f(pointer)).collect()
    }

    /// Dispatch a pointer-up event to all captured listeners.
    pub fn pointer_released(&self, pointer: Point) -> Vec<M> {
        let table = self.inner.borrow();
        table.ups.iter().map(|(_, f)| f(pointer)).collect()
    }

    /// Number of live captures (move/up listener pairs).
    pub fn active_captures(&self) -> usize {
        self.inner.borrow().moves.len()
    }
}

impl<M> Default for PointerListeners<M> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M> Clone for PointerListeners<M> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<M> fmt::Debug for PointerListeners<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PointerListeners")
            .field("captures", &self.active_captures())
            .finish()
    }
}

/// RAII guard for one move/up listener pair.
///
/// Dropping the guard detaches both listeners, including when a session
/// ends abnormally, so listeners never leak across sessions.
pub struct PointerCapture<M> {
    table: Weak<RefCell<ListenerTable<M>>>,
    move_id: ListenerId,
    up_id: ListenerId,
}

impl<M> Drop for PointerCapture<M> {
    fn drop(&mut self) {
        if let Some(table) = self.table.upgrade() {
            let mut table = table.borrow_mut();
            table.moves.retain(|(id, _)| *id != self.move_id);
            table.ups.retain(|(id, _)| *id != self.up_id);
        }
    }
}

impl<M> fmt::Debug for PointerCapture<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PointerCapture")
            .field("move_id", &self.move_id)
            .field("up_id", &self.up_id)
            .finish()
    }
}
