//! Encoding radians, degrees and cartesian pairs into packed angles

use log::trace;
use std::f64::consts::FRAC_PI_2;

use super::{PackedAngle, Quadrant};
use crate::constants::{BANDS, DEG2RAD, DEG360, DEG90, TAU};
use crate::{AngleError, Result};

impl PackedAngle {
    /// Creates an angle from a value in radians
    ///
    /// Any finite input is accepted and reduced modulo 2π. Exact multiples of
    /// π/2 encode the exact axis points, so `from_radians(PI)` has a cosine of
    /// exactly -1.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use packed_angle::PackedAngle;
    /// use std::f64::consts::PI;
    ///
    /// assert_eq!(PackedAngle::from_radians(-PI), PackedAngle::from_radians(PI));
    /// assert_eq!(PackedAngle::from_radians(PI).radians(), PI);
    /// ```
    pub fn from_radians(radians: f64) -> Self {
        let reduced = radians % TAU;
        if reduced % FRAC_PI_2 == 0.0 {
            return Self::from_axis(reduced / FRAC_PI_2);
        }

        let (sin, cos) = reduced.sin_cos();
        Self::from_unit(sin, cos)
    }

    /// Creates an angle from a value in degrees
    ///
    /// The value is reduced modulo 360 before conversion. Multiples of 90
    /// degrees encode the exact axis points.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use packed_angle::PackedAngle;
    ///
    /// assert_eq!(PackedAngle::from_degrees(360.0), PackedAngle::ZERO);
    /// assert_eq!(PackedAngle::from_degrees(90.0).radians(), std::f64::consts::FRAC_PI_2);
    /// ```
    pub fn from_degrees(degrees: f64) -> Self {
        let reduced = degrees % DEG360;
        if reduced % DEG90 == 0.0 {
            return Self::from_axis(reduced / DEG90);
        }

        Self::from_radians(reduced * DEG2RAD)
    }

    /// Creates the angle of the point (`cos`, `sin`)
    ///
    /// The pair does not need unit length; it is normalized by its hypotenuse.
    ///
    /// # Errors
    ///
    /// Returns [`AngleError::DegenerateVector`] when both components are zero.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use packed_angle::PackedAngle;
    ///
    /// let a = PackedAngle::from_cartesian(3.0, 3.0).unwrap();
    /// assert!((a.degrees() - 45.0).abs() < 1e-12);
    /// assert!(PackedAngle::from_cartesian(0.0, 0.0).is_err());
    /// ```
    pub fn from_cartesian(sin: f64, cos: f64) -> Result<Self> {
        if sin == 0.0 && cos == 0.0 {
            return Err(AngleError::DegenerateVector);
        }

        let length = sin.hypot(cos);
        Ok(Self::from_unit(sin / length, cos / length))
    }

    /// Creates an angle from a list of components
    ///
    /// One component is read as radians, two as a (sine, cosine) pair.
    ///
    /// # Errors
    ///
    /// Returns [`AngleError::InvalidArity`] for any other number of components,
    /// and [`AngleError::DegenerateVector`] for a zero pair.
    pub fn from_components(components: &[f64]) -> Result<Self> {
        match components {
            [radians] => Ok(Self::from_radians(*radians)),
            [sin, cos] => Self::from_cartesian(*sin, *cos),
            _ => Err(AngleError::InvalidArity {
                found: components.len(),
            }),
        }
    }

    /// Encodes the axis point `quarter_turns` quarter turns from angle 0
    fn from_axis(quarter_turns: f64) -> Self {
        let (sin, cos) = match (quarter_turns as i64).rem_euclid(4) {
            0 => (0.0, 1.0),
            1 => (1.0, 0.0),
            2 => (0.0, -1.0),
            _ => (-1.0, 0.0),
        };
        Self::from_unit(sin, cos)
    }

    /// Encodes a point already on the unit circle
    pub(crate) fn from_unit(sin: f64, cos: f64) -> Self {
        let (quadrant, payload) = Quadrant::classify(sin, cos);
        Self::pack(quadrant, payload)
    }

    /// Scales `payload` into the magnitude band of `quadrant`
    ///
    /// Payloads of bands 1 to 3 at or below `fmin` are raised to `fmin` so the
    /// scaled word stays inside its band. That word is the band's boundary
    /// encoding (exactly π/2, π or -π/2). The clamp always lands on `+fmin`,
    /// dropping the payload's sign, so each boundary angle has a single word.
    pub(crate) fn pack(quadrant: Quadrant, payload: f64) -> Self {
        let bands = &*BANDS;
        let scale = match quadrant {
            // Negative zero would be a second encoding of angle 0
            Quadrant::East if payload == 0.0 => return Self::ZERO,
            Quadrant::East => return Self::from_raw(payload),
            Quadrant::North => bands.f1,
            Quadrant::West => bands.f2,
            Quadrant::South => bands.f3,
        };

        let payload = if payload.abs() <= bands.fmin {
            trace!("clamping {} payload {:e} to the band boundary", quadrant, payload);
            bands.fmin
        } else {
            payload
        };

        Self::from_raw(payload * scale)
    }
}
