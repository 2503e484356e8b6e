//! Greeting view: static text over a glow that follows the pointer.

mod gradient;
mod greeting;

pub use gradient::Gradient;
pub use greeting::{GreetingView, HEADLINE, RenderedSurface, TAGLINE};
