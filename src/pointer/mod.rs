//! Pointer tracking.
//!
//! A [`PointerTracker`] mirrors the most recent pointer-move event of a
//! [`PointerSource`] into a [`PointerPosition`]. Sources are the host's input
//! seam: the browser window in the frontend build, [`SimulatedSurface`] in
//! tests and the CLI.

mod position;
mod simulated;
mod source;
mod tracker;

pub use position::{ParsePositionError, PointerPosition};
pub use simulated::SimulatedSurface;
pub use source::{Listener, ListenerId, PointerSource};
pub use tracker::PointerTracker;

#[cfg(test)]
pub use source::MockPointerSource;

#[cfg(test)]
#[path = "position_test.rs"]
mod position_test;


#[cfg(test)]
#[path = "tracker_test.rs"]
mod tracker_test;
