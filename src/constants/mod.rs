//! Constants module for packed-angle calculations

use lazy_static::lazy_static;
use log::debug;
use std::f64::consts::PI;

// Angles
/// Degrees to radians conversion factor
pub const DEG2RAD: f64 = PI / 180.0;
/// Radians to degrees conversion factor
pub const RAD2DEG: f64 = 180.0 / PI;
/// Tau (2*PI) for full circle
pub const TAU: f64 = 2.0 * PI;
/// Degrees in a full circle
pub const DEG360: f64 = 360.0;
/// Degrees in a right angle
pub const DEG90: f64 = 90.0;

/// Default tolerance, in radians, for approximate angle comparison
pub const APPROX_EPSILON: f64 = 16.0 * f64::EPSILON;

/// Exponent-band layout used to multiplex the quadrant into a packed `f64`
///
/// The double exponent range is split in three equal budgets of `exponent`
/// powers of two. Quadrant 0 stores its payload unscaled below `f0`, and
/// quadrants 1 to 3 scale theirs by `f1`, `f2` and `f3` so each lands in its
/// own magnitude band:
///
/// | band       | quadrant |
/// |------------|----------|
/// | `< f0`     | 0        |
/// | `[f0, f1)` | 1        |
/// | `[f1, f2)` | 2        |
/// | `[f2, f3)` | 3        |
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BandLayout {
    /// Powers of two allotted to each band
    pub exponent: i32,
    /// Upper bound of band 0
    pub f0: f64,
    /// Scale of band 1, `2^exponent`
    pub f1: f64,
    /// Scale of band 2, `f1²`
    pub f2: f64,
    /// Scale of band 3, `f1³`
    pub f3: f64,
    /// Smallest payload magnitude kept apart from the band below, `2^-exponent`
    pub fmin: f64,
}

impl BandLayout {
    /// Derive the layout for IEEE-754 binary64
    pub fn for_f64() -> Self {
        // frexp(f64::MAX) has exponent MAX_EXP (1024)
        let exponent = f64::MAX_EXP / 3;
        let f1 = 2.0_f64.powi(exponent);

        BandLayout {
            exponent,
            f0: 1.0,
            f1,
            f2: f1 * f1,
            f3: f1 * f1 * f1,
            fmin: 1.0 / f1,
        }
    }
}

lazy_static! {
    /// Band layout shared by the encoder, decoder and trig evaluator
    pub static ref BANDS: BandLayout = {
        let layout = BandLayout::for_f64();
        debug!(
            "packed angle bands: exponent={} f1={:e} f2={:e} f3={:e} fmin={:e}",
            layout.exponent, layout.f1, layout.f2, layout.f3, layout.fmin
        );
        layout
    };
}
