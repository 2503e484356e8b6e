use std::cell::Cell;
use std::rc::Rc;

use tracing::{debug, trace, warn};

use super::{ListenerId, PointerPosition, PointerSource};

/// Mirrors the latest pointer-move of a [`PointerSource`].
///
/// `start` registers one listener and `stop` releases it; dropping the
/// tracker stops it, so no listener outlives its owner.
pub struct PointerTracker<S: PointerSource> {
    source: S,
    position: Rc<Cell<PointerPosition>>,
    listener: Option<ListenerId>,
}

impl<S: PointerSource> PointerTracker<S> {
    /// Create an inactive tracker positioned at the origin.
    pub fn new(source: S) -> Self {
        Self {
            source,
            position: Rc::new(Cell::new(PointerPosition::ORIGIN)),
            listener: None,
        }
    }

    /// Reset to the origin and start listening for pointer moves.
    ///
    /// `on_change` runs exactly once per move, after the stored position has
    /// been overwritten. Restarting an active tracker releases its previous
    /// listener first.
    pub fn start<F>(&mut self, mut on_change: F)
    where
        F: FnMut(PointerPosition) + 'static,
    {
        self.stop();
        self.position.set(PointerPosition::ORIGIN);

        let position = Rc::clone(&self.position);
        let id = self.source.add_listener(Box::new(move |next| {
            trace!(%next, "pointer moved");
            position.set(next);
            on_change(next);
        }));

        debug!(listener = id.get(), "pointer tracker started");
        self.listener = Some(id);
    }

    /// Stop listening. Calling this on an inactive tracker does nothing.
    pub fn stop(&mut self) {
        let Some(id) = self.listener.take() else {
            return;
        };

        if self.source.remove_listener(id) {
            debug!(listener = id.get(), "pointer tracker stopped");
        } else {
            warn!(listener = id.get(), "pointer listener was already released");
        }
    }

    pub fn position(&self) -> PointerPosition {
        self.position.get()
    }

    pub fn is_active(&self) -> bool {
        self.listener.is_some()
    }

    pub fn source(&self) -> &S {
        &self.source
    }
}

impl<S: PointerSource> Drop for PointerTracker<S> {
    fn drop(&mut self) {
        self.stop();
    }
}
