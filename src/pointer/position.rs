use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

use miette::Diagnostic;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Last known pointer location in viewport coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PointerPosition {
    pub x: i32,
    pub y: i32,
}

impl PointerPosition {
    /// Position reported before any pointer event has been observed.
    pub const ORIGIN: PointerPosition = PointerPosition { x: 0, y: 0 };

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for PointerPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Errors from parsing an `x,y` coordinate pair.
#[derive(Error, Diagnostic, Debug, PartialEq, Eq)]
pub enum ParsePositionError {
    #[error("Expected coordinates as 'x,y', got '{input}'")]
    #[diagnostic(code(landing::pointer::missing_separator), help("Example: --move 120,80"))]
    MissingSeparator { input: String },

    #[error("Invalid {axis} coordinate '{value}'")]
    #[diagnostic(code(landing::pointer::invalid_coordinate))]
    InvalidCoordinate {
        axis: &'static str,
        value: String,
        #[source]
        source: ParseIntError,
    },
}

impl FromStr for PointerPosition {
    type Err = ParsePositionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (x, y) = s
            .split_once(',')
            .ok_or_else(|| ParsePositionError::MissingSeparator {
                input: s.to_string(),
            })?;

        Ok(Self::new(parse_axis("x", x)?, parse_axis("y", y)?))
    }
}

fn parse_axis(axis: &'static str, value: &str) -> Result<i32, ParsePositionError> {
    let value = value.trim();
    value
        .parse()
        .map_err(|source| ParsePositionError::InvalidCoordinate {
            axis,
            value: value.to_string(),
            source,
        })
}
