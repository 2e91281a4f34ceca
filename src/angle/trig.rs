//! Trigonometric functions evaluated from the packed word
//!
//! The stored payload already is one of sin or cos. The other one follows from
//! `√(1 - payload²)`, with the sign fixed by the band, so no transcendental
//! call is needed at all.

use super::{PackedAngle, Quadrant};

/// `√(1 - x²)` for |x| <= 1/√2, factored to keep the low bits of `x`
#[inline]
fn complement(x: f64) -> f64 {
    ((1.0 - x) * (1.0 + x)).sqrt()
}

impl PackedAngle {
    /// Sine of the angle
    pub fn sin(self) -> f64 {
        let (quadrant, payload) = self.unpack();
        match quadrant {
            Quadrant::East => payload,
            Quadrant::North if Self::on_boundary(payload) => 1.0,
            Quadrant::North => complement(payload),
            Quadrant::West if Self::on_boundary(payload) => 0.0,
            Quadrant::West => payload,
            Quadrant::South if Self::on_boundary(payload) => -1.0,
            Quadrant::South => -complement(payload),
        }
    }

    /// Cosine of the angle
    pub fn cos(self) -> f64 {
        let (quadrant, payload) = self.unpack();
        match quadrant {
            Quadrant::East => complement(payload),
            Quadrant::North | Quadrant::South if Self::on_boundary(payload) => 0.0,
            Quadrant::North | Quadrant::South => payload,
            Quadrant::West if Self::on_boundary(payload) => -1.0,
            Quadrant::West => -complement(payload),
        }
    }

    /// Sine and cosine of the angle, from a single band lookup
    ///
    /// # Examples
    ///
    /// ```rust
    /// use packed_angle::PackedAngle;
    ///
    /// assert_eq!(PackedAngle::from_degrees(180.0).sin_cos(), (0.0, -1.0));
    /// assert_eq!(PackedAngle::from_degrees(-90.0).sin_cos(), (-1.0, 0.0));
    /// ```
    pub fn sin_cos(self) -> (f64, f64) {
        let (quadrant, payload) = self.unpack();
        match quadrant {
            Quadrant::East => (payload, complement(payload)),
            Quadrant::North if Self::on_boundary(payload) => (1.0, 0.0),
            Quadrant::North => (complement(payload), payload),
            Quadrant::West if Self::on_boundary(payload) => (0.0, -1.0),
            Quadrant::West => (payload, -complement(payload)),
            Quadrant::South if Self::on_boundary(payload) => (-1.0, 0.0),
            Quadrant::South => (-complement(payload), payload),
        }
    }

    /// Tangent, `sin / cos`. Infinite at ±π/2.
    pub fn tan(self) -> f64 {
        let (sin, cos) = self.sin_cos();
        sin / cos
    }

    /// Cotangent, `1 / tan`. Infinite at 0 and π.
    pub fn cot(self) -> f64 {
        1.0 / self.tan()
    }

    /// Secant, `1 / cos`
    pub fn sec(self) -> f64 {
        1.0 / self.cos()
    }

    /// Cosecant, `1 / sin`
    pub fn csc(self) -> f64 {
        1.0 / self.sin()
    }
}
