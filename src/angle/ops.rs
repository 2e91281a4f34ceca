//! Arithmetic on packed angles
//!
//! Sums, differences and scalings decode to radians, compute, and re-encode
//! through [`PackedAngle::from_radians`], which performs the reduction modulo
//! 2π. Negation stays in the packed domain.

use std::iter::Sum;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use super::{PackedAngle, Quadrant};

impl Add<PackedAngle> for PackedAngle {
    type Output = Self;

    fn add(self, other: PackedAngle) -> Self {
        PackedAngle::from_radians(self.radians() + other.radians())
    }
}

impl Sub<PackedAngle> for PackedAngle {
    type Output = Self;

    fn sub(self, other: PackedAngle) -> Self {
        PackedAngle::from_radians(self.radians() - other.radians())
    }
}

impl Neg for PackedAngle {
    type Output = Self;

    /// Reflects the angle across the x axis: sine flips, cosine is kept
    ///
    /// The band pairs East/East, West/West and North/South mirror each other,
    /// so the stored payload carries over unchanged apart from the sign of a
    /// stored sine. Negation is therefore bit-exact and `-(-a) == a`.
    fn neg(self) -> Self {
        let (quadrant, payload) = self.unpack();
        match quadrant {
            Quadrant::East | Quadrant::West => PackedAngle::pack(quadrant, -payload),
            Quadrant::North => PackedAngle::pack(Quadrant::South, payload),
            Quadrant::South => PackedAngle::pack(Quadrant::North, payload),
        }
    }
}

impl Mul<f64> for PackedAngle {
    type Output = Self;

    /// Scales the angle, wrapping the product back into (-π, π]
    ///
    /// Factors -2, -1, 0, 1 and 2 are answered without leaving the packed
    /// domain (apart from the one addition for ±2).
    fn mul(self, factor: f64) -> Self {
        if factor == 0.0 {
            PackedAngle::ZERO
        } else if factor == 1.0 {
            self
        } else if factor == -1.0 {
            -self
        } else if factor == 2.0 {
            self + self
        } else if factor == -2.0 {
            -(self + self)
        } else {
            PackedAngle::from_radians(self.radians() * factor)
        }
    }
}

impl Mul<PackedAngle> for f64 {
    type Output = PackedAngle;

    fn mul(self, angle: PackedAngle) -> PackedAngle {
        angle * self
    }
}

impl Mul<i32> for PackedAngle {
    type Output = Self;

    fn mul(self, factor: i32) -> Self {
        self * f64::from(factor)
    }
}

impl Mul<PackedAngle> for i32 {
    type Output = PackedAngle;

    fn mul(self, angle: PackedAngle) -> PackedAngle {
        angle * f64::from(self)
    }
}

impl Div<f64> for PackedAngle {
    type Output = Self;

    /// `self * (1 / divisor)`. A zero divisor gives a NaN angle.
    fn div(self, divisor: f64) -> Self {
        self * (1.0 / divisor)
    }
}

impl AddAssign<PackedAngle> for PackedAngle {
    fn add_assign(&mut self, other: PackedAngle) {
        *self = *self + other;
    }
}

impl SubAssign<PackedAngle> for PackedAngle {
    fn sub_assign(&mut self, other: PackedAngle) {
        *self = *self - other;
    }
}

impl MulAssign<f64> for PackedAngle {
    fn mul_assign(&mut self, factor: f64) {
        *self = *self * factor;
    }
}

impl DivAssign<f64> for PackedAngle {
    fn div_assign(&mut self, divisor: f64) {
        *self = *self / divisor;
    }
}

impl Sum for PackedAngle {
    fn sum<I: Iterator<Item = PackedAngle>>(iter: I) -> Self {
        iter.fold(PackedAngle::ZERO, |acc, angle| acc + angle)
    }
}
