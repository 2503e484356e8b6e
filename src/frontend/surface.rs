//! Browser window as a pointer source

use std::cell::{Cell, RefCell};
use std::collections::HashMap;

use landing::pointer::{Listener, ListenerId, PointerPosition, PointerSource};
use leptos::ev;
use leptos_use::{use_event_listener, use_window};

/// `mousemove` listeners on `window`, reporting `clientX`/`clientY`.
#[derive(Default)]
pub struct WindowSurface {
    next_id: Cell<u64>,
    removers: RefCell<HashMap<ListenerId, Box<dyn Fn()>>>,
}

impl WindowSurface {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PointerSource for WindowSurface {
    fn add_listener(&self, mut listener: Listener) -> ListenerId {
        let id = ListenerId::new(self.next_id.get());
        self.next_id.set(id.get() + 1);

        let remove = use_event_listener(use_window(), ev::mousemove, move |event| {
            listener(PointerPosition::new(event.client_x(), event.client_y()));
        });
        self.removers.borrow_mut().insert(id, Box::new(remove));

        id
    }

    fn remove_listener(&self, id: ListenerId) -> bool {
        // Release the borrow before calling into the DOM
        let remove = self.removers.borrow_mut().remove(&id);
        match remove {
            Some(remove) => {
                remove();
                true
            }
            None => false,
        }
    }
}
