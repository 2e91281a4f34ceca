//! Packed-angle: a single-word angle type with full-precision trigonometry
//!
//! This crate provides [`PackedAngle`], an angle in (-π, π] stored in one `f64`
//! word. Instead of keeping the angle itself (which loses precision in sin/cos
//! near the axes) or a sin/cos pair (which costs two words), the word stores the
//! smaller of |sin| and |cos| scaled into one of four exponent bands. The band
//! identifies the quadrant, and the missing component is recovered with a single
//! square root.
//!
//! ```rust
//! use packed_angle::PackedAngle;
//!
//! let a = PackedAngle::from_degrees(90.0);
//! assert_eq!(a.radians(), std::f64::consts::FRAC_PI_2);
//! assert_eq!(a.sin_cos(), (1.0, 0.0));
//!
//! let b = PackedAngle::from_degrees(190.0) / 170.0;
//! assert!(b.approx_eq(&PackedAngle::from_degrees(-1.0)));
//! ```

use thiserror::Error;

pub mod angle;
pub mod constants;

// Re-export commonly used types
pub use angle::{PackedAngle, Quadrant};

/// Main error type for the packed-angle library
#[derive(Debug, Error)]
pub enum AngleError {
    /// An angle was requested from a component list that is neither
    /// `[radians]` nor `[sine, cosine]`
    #[error("Invalid arity: expected 1 (radians) or 2 (sine, cosine) components, got {found}")]
    InvalidArity {
        /// Number of components supplied
        found: usize,
    },

    /// A cartesian pair of (0, 0) has no direction
    #[error("Degenerate vector: cannot take the angle of (0, 0)")]
    DegenerateVector,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for packed-angle operations
pub type Result<T> = std::result::Result<T, AngleError>;
