//! Spiral staircase generation.
//!
//! A staircase is one wedge-shaped tread cut out of a cylinder
//! ([`wedge`]), copied once per step along a helix, plus a thin spine
//! running the full height ([`staircase`]). Angles are in degrees, lengths
//! in scene units, and the vertical axis is +Z.

use crate::errors::ParameterError;
use crate::float_types::{FULL_TURN_DEG, Real};
use crate::material::Material;
use crate::mesh::Mesh;

pub mod staircase;
pub mod wedge;

pub use staircase::{
    StaircaseAssembly, StepTransform, apply, apply_with, assemble_staircase, build_staircase,
    build_staircase_in, build_staircase_with,
};
pub use wedge::{build_wedge, build_wedge_with};

/// One stair tread: a closed cylindrical sector.
pub type WedgeSolid = Mesh<Material>;

/// All treads plus the spine, merged.
pub type StaircaseSolid = Mesh<Material>;

/// Tunables of the construction that are not user parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct StaircaseConfig {
    /// Angle added to both ends of the first tread's span so the cut planes
    /// stay clear of the cylinder's facet seam at 0°
    pub angle_gap_deg: Real,
    /// Radius of the central spine
    pub spine_radius: Real,
    /// Facets around the tread cylinder
    pub segments: usize,
    /// Facets around the spine
    pub spine_segments: usize,
    /// Name of the merged solid in the scene
    pub name: String,
    /// Material assigned to treads and spine
    pub material: Material,
}

impl Default for StaircaseConfig {
    fn default() -> Self {
        StaircaseConfig {
            angle_gap_deg: 0.5,
            spine_radius: 0.05,
            segments: 32,
            spine_segments: 16,
            name: "spiralstairs".to_string(),
            material: Material::placeholder(),
        }
    }
}

/// The user-facing parameters of one staircase.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StairParameters {
    pub min_height: Real,
    pub max_height: Real,
    /// Full turns the helix makes; negative winds clockwise
    pub turns: i32,
    /// Radius of each tread
    pub radius: Real,
    pub step_count: u32,
}

impl Default for StairParameters {
    fn default() -> Self {
        StairParameters {
            min_height: 0.0,
            max_height: 20.0,
            turns: 3,
            radius: 1.0,
            step_count: 50,
        }
    }
}

impl StairParameters {
    /// Parameters as entered in a form: a `(min, max)` height range, turn
    /// count, radius and (possibly negative) step count.
    pub fn from_form(
        height_range: (Real, Real),
        turns: i32,
        radius: Real,
        step_count: i32,
    ) -> Result<Self, ParameterError> {
        let step_count = u32::try_from(step_count)
            .ok()
            .filter(|&n| n >= 1)
            .ok_or(ParameterError::InvalidParameter {
                name: "step_count",
                value: step_count as Real,
                reason: "must be at least 1",
            })?;
        let params = StairParameters {
            min_height: height_range.0,
            max_height: height_range.1,
            turns,
            radius,
            step_count,
        };
        params.validate()?;
        Ok(params)
    }

    pub fn total_height(&self) -> Real {
        self.max_height - self.min_height
    }

    /// Rotation between consecutive treads, `turns·360 / step_count`.
    pub fn step_angle(&self) -> Real {
        step_angle(self.turns, self.step_count)
    }

    /// Rise between consecutive treads, `total_height / step_count`.
    pub fn step_height(&self) -> Real {
        self.total_height() / self.step_count as Real
    }

    pub fn validate(&self) -> Result<(), ParameterError> {
        finite("min_height", self.min_height)?;
        finite("max_height", self.max_height)?;
        if self.min_height > self.max_height {
            return Err(ParameterError::InvertedRange {
                min: self.min_height,
                max: self.max_height,
            });
        }
        validate_shape(self.step_count, self.total_height(), self.radius)
    }
}

pub(crate) fn step_angle(turns: i32, step_count: u32) -> Real {
    turns as Real * FULL_TURN_DEG / step_count as Real
}

pub(crate) fn finite(name: &'static str, value: Real) -> Result<(), ParameterError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ParameterError::NonFinite { name, value })
    }
}

pub(crate) fn positive(name: &'static str, value: Real) -> Result<(), ParameterError> {
    finite(name, value)?;
    if value > 0.0 {
        Ok(())
    } else {
        Err(ParameterError::InvalidParameter {
            name,
            value,
            reason: "must be positive",
        })
    }
}

/// Checks shared by the assembler and the parameter form.
pub(crate) fn validate_shape(
    step_count: u32,
    total_height: Real,
    radius: Real,
) -> Result<(), ParameterError> {
    if step_count == 0 {
        return Err(ParameterError::InvalidParameter {
            name: "step_count",
            value: 0.0,
            reason: "must be at least 1",
        });
    }
    positive("total_height", total_height)?;
    positive("radius", radius)
}
