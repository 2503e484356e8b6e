use std::fmt;

use serde::Serialize;

use crate::pointer::PointerPosition;
use crate::theme::{GLOW_FADE, GLOW_RADIUS_PX, Palette};

/// Radial glow centred on a pointer position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Gradient {
    center: PointerPosition,
}

impl Gradient {
    pub const fn at(center: PointerPosition) -> Self {
        Self { center }
    }

    pub const fn center(&self) -> PointerPosition {
        self.center
    }

    /// CSS `background` value for the glow layer.
    pub fn css(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Gradient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "radial-gradient({}px at {}px {}px, {}, {})",
            GLOW_RADIUS_PX,
            self.center.x,
            self.center.y,
            Palette::NIGHT.glow,
            GLOW_FADE
        )
    }
}
