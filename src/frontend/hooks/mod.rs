//! Reusable hooks for the landing page

mod use_pointer_position;

pub use use_pointer_position::*;
