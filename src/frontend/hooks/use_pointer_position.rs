use landing::pointer::{PointerPosition, PointerTracker};
use leptos::prelude::*;

use crate::surface::WindowSurface;

/// Hook tracking the pointer over the browser window
///
/// Starts a [`PointerTracker`] when the calling component mounts and stops it
/// when the component's owner is cleaned up. Reads `(0, 0)` until the first
/// `mousemove`.
///
/// # Example
/// ```rust
/// let position = use_pointer_position();
///
/// view! {
///     <p>{move || position.get().to_string()}</p>
/// }
/// ```
pub fn use_pointer_position() -> ReadSignal<PointerPosition> {
    let (position, set_position) = signal(PointerPosition::ORIGIN);

    let mut tracker = PointerTracker::new(WindowSurface::new());
    tracker.start(move |next| set_position.set(next));

    let tracker = StoredValue::new_local(tracker);
    on_cleanup(move || tracker.update_value(|tracker| tracker.stop()));

    position
}
