//! Exact and approximate comparison of packed angles

use approx::{AbsDiffEq, RelativeEq, UlpsEq};
use std::f64::consts::PI;
use std::hash::{Hash, Hasher};

use super::PackedAngle;
use crate::constants::{APPROX_EPSILON, TAU};

impl PartialEq for PackedAngle {
    /// Bit-pattern equality. The encoder never produces two words for one
    /// angle, so this is exact angle equality.
    fn eq(&self, other: &Self) -> bool {
        self.to_bits() == other.to_bits()
    }
}

impl Eq for PackedAngle {}

impl Hash for PackedAngle {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.to_bits().hash(state);
    }
}

impl PackedAngle {
    /// Signed shortest rotation from `other` to `self`, in radians within [-π, π]
    ///
    /// # Examples
    ///
    /// ```rust
    /// use packed_angle::PackedAngle;
    ///
    /// let a = PackedAngle::from_degrees(179.0);
    /// let b = PackedAngle::from_degrees(-179.0);
    /// assert!((a.angular_difference(b).to_degrees() + 2.0).abs() < 1e-12);
    /// ```
    pub fn angular_difference(self, other: PackedAngle) -> f64 {
        let delta = (self.radians() - other.radians()) % TAU;
        if delta > PI {
            delta - TAU
        } else if delta < -PI {
            delta + TAU
        } else {
            delta
        }
    }

    /// Approximate equality across the ±π seam, within `16 ε` radians
    pub fn approx_eq(&self, other: &PackedAngle) -> bool {
        self.abs_diff_eq(other, APPROX_EPSILON)
    }
}

impl AbsDiffEq for PackedAngle {
    type Epsilon = f64;

    fn default_epsilon() -> f64 {
        APPROX_EPSILON
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
        self.angular_difference(*other).abs() <= epsilon
    }
}

impl RelativeEq for PackedAngle {
    fn default_max_relative() -> f64 {
        f64::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: f64, max_relative: f64) -> bool {
        let delta = self.angular_difference(*other).abs();
        let largest = self.radians().abs().max(other.radians().abs());
        delta <= epsilon || delta <= largest * max_relative
    }
}

impl UlpsEq for PackedAngle {
    fn default_max_ulps() -> u32 {
        f64::default_max_ulps()
    }

    fn ulps_eq(&self, other: &Self, epsilon: f64, max_ulps: u32) -> bool {
        self.abs_diff_eq(other, epsilon)
            || self.radians().ulps_eq(&other.radians(), epsilon, max_ulps)
    }
}
