//! Quadrant classification of unit-circle points

use std::fmt::{self, Display, Formatter};

/// One of the four angular bands a packed angle can occupy
///
/// Each band is a quarter turn centred on an axis direction. The band boundaries
/// sit on the diagonals, where |sin| = |cos|.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Quadrant {
    /// [-π/4, π/4], payload sin
    East,
    /// (π/4, 3π/4], payload cos
    North,
    /// (3π/4, π] ∪ (-π, -3π/4), payload sin
    West,
    /// [-3π/4, -π/4), payload cos
    South,
}

impl Quadrant {
    /// Band index, 0 to 3
    pub fn index(self) -> u8 {
        match self {
            Quadrant::East => 0,
            Quadrant::North => 1,
            Quadrant::West => 2,
            Quadrant::South => 3,
        }
    }

    /// Classifies a unit point and picks its payload
    ///
    /// Returns the band and whichever of `sin` or `cos` is stored for it:
    /// the sine when |sin| <= |cos|, otherwise the cosine.
    pub(crate) fn classify(sin: f64, cos: f64) -> (Quadrant, f64) {
        if sin.abs() <= cos.abs() {
            let quadrant = if cos > 0.0 {
                Quadrant::East
            } else {
                Quadrant::West
            };
            (quadrant, sin)
        } else {
            let quadrant = if sin > 0.0 {
                Quadrant::North
            } else {
                Quadrant::South
            };
            (quadrant, cos)
        }
    }
}

impl Display for Quadrant {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let name = match self {
            Quadrant::East => "east",
            Quadrant::North => "north",
            Quadrant::West => "west",
            Quadrant::South => "south",
        };
        write!(f, "{} ({})", name, self.index())
    }
}
