use super::PointerPosition;

#[cfg(test)]
use mockall::automock;

/// Callback invoked with the coordinates of every pointer-move event.
pub type Listener = Box<dyn FnMut(PointerPosition)>;

/// Handle for a registered listener, used to release it again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(u64);

impl ListenerId {
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub const fn get(self) -> u64 {
        self.0
    }
}

/// Host input seam delivering pointer-move events. Can be mocked in tests.
#[cfg_attr(test, automock)]
pub trait PointerSource {
    /// Register a listener for pointer-move events.
    fn add_listener(&self, listener: Listener) -> ListenerId;

    /// Release a listener. Returns `false` if it was not registered.
    fn remove_listener(&self, id: ListenerId) -> bool;
}
