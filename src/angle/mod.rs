//! # Packed Angle Module
//!
//! This module provides [`PackedAngle`], an angle in (-π, π] stored in a single
//! `f64` word from which sin and cos can be recovered at full precision.
//!
//! ## Internal Storage
//!
//! The stored word is a tagged value, not the angle. Its magnitude band
//! (see [`crate::constants::BandLayout`]) selects the quadrant, and the value
//! inside the band is a scaled trigonometric payload:
//!
//! | band       | quadrant          | angle range                  | payload     |
//! |------------|-------------------|------------------------------|-------------|
//! | `< f0`     | [`Quadrant::East`]  | [-π/4, π/4]                  | sin         |
//! | `[f0, f1)` | [`Quadrant::North`] | (π/4, 3π/4]                  | cos × f1    |
//! | `[f1, f2)` | [`Quadrant::West`]  | (3π/4, π] ∪ (-π, -3π/4)      | sin × f2    |
//! | `[f2, f3)` | [`Quadrant::South`] | [-3π/4, -π/4)                | cos × f3    |
//!
//! The payload is always the smaller of |sin| and |cos|, so the other one is
//! recovered as `√(1 - payload²)` without cancellation, and the angle as an
//! arcsine or arccosine away from its flat region.
//!
//! Only the band 0 word reads as a meaningful number (it is the sine). The
//! positive zero word is exactly angle 0.
//!
//! ## Examples
//!
//! ```rust
//! use packed_angle::{PackedAngle, Quadrant};
//!
//! let a = PackedAngle::from_degrees(120.0);
//! assert_eq!(a.quadrant(), Quadrant::North);
//! assert!((a.degrees() - 120.0).abs() < 1e-12);
//!
//! let (s, c) = a.sin_cos();
//! assert!((s - 3.0_f64.sqrt() / 2.0).abs() < 1e-15);
//! assert!((c + 0.5).abs() < 1e-15);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};

mod compare;
mod decode;
mod encode;
mod io;
mod ops;
mod quadrant;
mod trig;

pub use quadrant::Quadrant;

/// An angle in (-π, π] packed into one `f64` word
///
/// Construct with [`PackedAngle::from_radians`], [`PackedAngle::from_degrees`]
/// or [`PackedAngle::from_cartesian`]. The value is immutable; arithmetic
/// always produces a new angle.
///
/// Equality (`==`) compares the stored bit patterns. Every angle has exactly
/// one encoding, so this is exact angle equality. Use
/// [`PackedAngle::approx_eq`] to compare computed angles.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PackedAngle {
    /// Scaled trigonometric payload, see the module documentation
    raw: f64,
}

impl PackedAngle {
    /// The zero angle, stored as the positive zero word
    pub const ZERO: PackedAngle = PackedAngle { raw: 0.0 };

    /// Returns the zero angle
    pub const fn zero() -> Self {
        Self::ZERO
    }

    /// Wraps an encoded word. Only the encoder and the raw accessors call this.
    pub(crate) const fn from_raw(raw: f64) -> Self {
        PackedAngle { raw }
    }

    /// Returns the stored word's bit pattern
    ///
    /// The bits are meaningful only to [`PackedAngle::from_bits`]; they are
    /// exposed for serialization and testing.
    pub fn to_bits(self) -> u64 {
        self.raw.to_bits()
    }

    /// Rebuilds an angle from a bit pattern produced by [`PackedAngle::to_bits`]
    ///
    /// No validation is performed: arbitrary bits decode to some angle, or to
    /// NaN for patterns no encoder produces.
    pub fn from_bits(bits: u64) -> Self {
        Self::from_raw(f64::from_bits(bits))
    }

    /// Returns true for the zero angle
    pub fn is_zero(self) -> bool {
        self.to_bits() == Self::ZERO.to_bits()
    }
}

impl Display for PackedAngle {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match f.precision() {
            Some(precision) => write!(f, "{:.*}°", precision, self.degrees()),
            None => write!(f, "{}°", self.degrees()),
        }
    }
}
