use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet, VecDeque};
use std::rc::Rc;

use tracing::trace;

use super::{Listener, ListenerId, PointerPosition, PointerSource};

/// In-process display surface that delivers pointer moves on demand.
///
/// Cloning yields another handle to the same surface, so a tracker can own
/// one handle while the caller keeps dispatching through another.
#[derive(Clone, Default)]
pub struct SimulatedSurface {
    inner: Rc<RefCell<Registry>>,
}

#[derive(Default)]
struct Registry {
    next_id: u64,
    listeners: BTreeMap<ListenerId, Listener>,
    // Listeners taken out of `listeners` for the dispatch in progress.
    in_flight: BTreeSet<ListenerId>,
    dispatching: bool,
    // Moves dispatched by a listener while another move is being delivered.
    queued: VecDeque<PointerPosition>,
}

impl SimulatedSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Deliver a pointer move to every registered listener in registration
    /// order. Returns the number of listener invocations.
    ///
    /// Listeners may register or release listeners while running; a listener
    /// released mid-dispatch is not invoked afterwards and one registered
    /// mid-dispatch first sees the next move. A move dispatched from inside a
    /// listener is queued and delivered once the current move has reached
    /// every listener; the nested call returns 0.
    pub fn dispatch(&self, position: PointerPosition) -> usize {
        {
            let mut registry = self.inner.borrow_mut();
            if registry.dispatching {
                registry.queued.push_back(position);
                trace!(%position, "queued nested pointer move");
                return 0;
            }
            registry.dispatching = true;
        }

        let mut invoked = self.deliver(position);
        while let Some(next) = self.next_queued() {
            invoked += self.deliver(next);
        }
        invoked
    }

    fn next_queued(&self) -> Option<PointerPosition> {
        let mut registry = self.inner.borrow_mut();
        let next = registry.queued.pop_front();
        if next.is_none() {
            registry.dispatching = false;
        }
        next
    }

    fn deliver(&self, position: PointerPosition) -> usize {
        let mut active = {
            let mut registry = self.inner.borrow_mut();
            let active = std::mem::take(&mut registry.listeners);
            registry.in_flight = active.keys().copied().collect();
            active
        };

        let mut invoked = 0;
        for (id, listener) in active.iter_mut() {
            if !self.inner.borrow().in_flight.contains(id) {
                continue;
            }
            listener(position);
            invoked += 1;
        }

        let mut registry = self.inner.borrow_mut();
        let in_flight = std::mem::take(&mut registry.in_flight);
        for (id, listener) in active {
            if in_flight.contains(&id) {
                registry.listeners.insert(id, listener);
            }
        }

        trace!(%position, invoked, "dispatched pointer move");
        invoked
    }

    /// Number of listeners currently registered.
    pub fn listener_count(&self) -> usize {
        let registry = self.inner.borrow();
        registry.listeners.len() + registry.in_flight.len()
    }
}

impl PointerSource for SimulatedSurface {
    fn add_listener(&self, listener: Listener) -> ListenerId {
        let mut registry = self.inner.borrow_mut();
        let id = ListenerId::new(registry.next_id);
        registry.next_id += 1;
        registry.listeners.insert(id, listener);
        id
    }

    fn remove_listener(&self, id: ListenerId) -> bool {
        let mut registry = self.inner.borrow_mut();
        registry.listeners.remove(&id).is_some() || registry.in_flight.remove(&id)
    }
}
