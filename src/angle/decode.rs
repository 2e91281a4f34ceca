//! Decoding packed angles back to radians and degrees

use std::f64::consts::{FRAC_PI_2, PI};

use super::{PackedAngle, Quadrant};
use crate::constants::{BANDS, RAD2DEG};

impl PackedAngle {
    /// Splits the stored word into its band and unscaled payload
    ///
    /// Words outside every band (NaN, infinities from unchecked raw bits) fall
    /// into band 3 and decode to NaN.
    pub(crate) fn unpack(self) -> (Quadrant, f64) {
        let bands = &*BANDS;
        let magnitude = self.raw.abs();

        if magnitude < bands.f0 {
            (Quadrant::East, self.raw)
        } else if magnitude < bands.f1 {
            (Quadrant::North, self.raw / bands.f1)
        } else if magnitude < bands.f2 {
            (Quadrant::West, self.raw / bands.f2)
        } else {
            (Quadrant::South, self.raw / bands.f3)
        }
    }

    /// True when an unscaled band 1-3 payload is the clamped boundary value
    pub(crate) fn on_boundary(payload: f64) -> bool {
        payload.abs() <= BANDS.fmin
    }

    /// Returns the quadrant band this angle is stored in
    pub fn quadrant(self) -> Quadrant {
        self.unpack().0
    }

    /// Returns the angle in radians, in (-π, π]
    ///
    /// # Examples
    ///
    /// ```rust
    /// use packed_angle::PackedAngle;
    /// use std::f64::consts::PI;
    ///
    /// let a = PackedAngle::from_radians(3.0 * PI / 2.0);
    /// assert!((a.radians() + PI / 2.0).abs() < 1e-15);
    /// ```
    pub fn radians(self) -> f64 {
        let (quadrant, payload) = self.unpack();
        match quadrant {
            Quadrant::East => payload.asin(),
            Quadrant::North if Self::on_boundary(payload) => FRAC_PI_2,
            Quadrant::North => payload.acos(),
            Quadrant::West if Self::on_boundary(payload) => PI,
            Quadrant::West => {
                // Tiny negative sines round onto -π, which belongs to +π
                let radians = PI.copysign(payload) - payload.asin();
                if radians <= -PI {
                    PI
                } else {
                    radians
                }
            }
            Quadrant::South if Self::on_boundary(payload) => -FRAC_PI_2,
            Quadrant::South => -payload.acos(),
        }
    }

    /// Returns the angle in degrees, in (-180, 180]
    pub fn degrees(self) -> f64 {
        self.radians() * RAD2DEG
    }
}
