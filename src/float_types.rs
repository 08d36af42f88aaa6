// Re-export parry for the appropriate float size
#[cfg(feature = "f64")]
pub use parry3d_f64 as parry3d;

#[cfg(feature = "f32")]
pub use parry3d;

// Our Real scalar type:
#[cfg(feature = "f32")]
pub type Real = f32;
#[cfg(feature = "f64")]
pub type Real = f64;

use core::str::FromStr;
use std::sync::OnceLock;

/// Lazily-initialized tolerance used across the crate.
/// Defaults depend on precision (`f32` vs `f64`), but can be overridden:
///  1) **Build-time**: set env var `SPIRALSTAIR_TOLERANCE`
///     (e.g. `SPIRALSTAIR_TOLERANCE=1e-7 cargo build`)
///  2) **Runtime**: call [`set_tolerance`] once before building any geometry
static TOLERANCE_CELL: OnceLock<Real> = OnceLock::new();

#[inline]
const fn default_tolerance() -> Real {
    #[cfg(feature = "f32")]
    {
        1e-4
    }
    #[cfg(feature = "f64")]
    {
        1e-6
    }
}

/// Returns the current tolerance used for plane classification, planarity
/// tests and point comparisons.
pub fn tolerance() -> Real {
    *TOLERANCE_CELL.get_or_init(|| {
        if let Some(environment_variable) = option_env!("SPIRALSTAIR_TOLERANCE") {
            if let Ok(value) = Real::from_str(environment_variable) {
                return value.max(Real::EPSILON);
            }
        }
        default_tolerance()
    })
}

/// Set the tolerance programmatically once (subsequent calls are ignored).
pub fn set_tolerance(value: Real) {
    let _ = TOLERANCE_CELL.set(value.max(Real::EPSILON));
}

/// The full circle constant (τ)
#[cfg(feature = "f32")]
pub const TAU: Real = core::f32::consts::TAU;
/// The full circle constant (τ)
#[cfg(feature = "f64")]
pub const TAU: Real = core::f64::consts::TAU;

/// Degrees in one full turn.
pub const FULL_TURN_DEG: Real = 360.0;

/// Scale used to snap coordinates onto an integer lattice when matching
/// vertices and edges between polygons. The lattice step stays coarser than
/// the precision of `Real` near unit coordinates.
#[cfg(feature = "f32")]
pub const QUANTIZATION_FACTOR: Real = 1e4;
/// Scale used to snap coordinates onto an integer lattice when matching
/// vertices and edges between polygons. The lattice step stays coarser than
/// the precision of `Real` near unit coordinates.
#[cfg(feature = "f64")]
pub const QUANTIZATION_FACTOR: Real = 1e7;
