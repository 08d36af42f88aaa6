//! Assembling treads and spine into a staircase.

use crate::errors::BuildResult;
use crate::float_types::Real;
use crate::material::Material;
use crate::mesh::Mesh;
use crate::scene::{ObjectId, Scene};
use crate::stair::wedge::build_wedge_with;
use crate::stair::{
    StairParameters, StaircaseConfig, StaircaseSolid, WedgeSolid, step_angle, validate_shape,
};
use crate::traits::CSGOps;
use std::fmt::Debug;
use tracing::{debug, info, instrument};

/// Placement of one tread relative to the first.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepTransform {
    pub index: u32,
    /// Turn about +Z, in degrees
    pub rotation_deg: Real,
    /// Rise along +Z
    pub offset: Real,
}

impl StepTransform {
    pub fn for_step(index: u32, step_angle: Real, step_height: Real) -> Self {
        StepTransform {
            index,
            rotation_deg: index as Real * step_angle,
            offset: index as Real * step_height,
        }
    }

    /// Raise, then turn about the vertical axis through the origin.
    pub fn apply<S: Clone + Send + Sync + Debug>(&self, mesh: &Mesh<S>) -> Mesh<S> {
        mesh.translate(0.0, 0.0, self.offset).spin(self.rotation_deg)
    }
}

/// Every piece of a staircase before merging.
#[derive(Debug, Clone)]
pub struct StaircaseAssembly {
    /// One tread per step, bottom first
    pub wedges: Vec<WedgeSolid>,
    pub spine: Mesh<Material>,
    /// How each tread was placed; `step_transforms[i]` produced `wedges[i]`
    pub step_transforms: Vec<StepTransform>,
}

impl StaircaseAssembly {
    /// Treads plus the spine.
    pub fn piece_count(&self) -> usize {
        self.wedges.len() + 1
    }

    pub fn merge(&self) -> StaircaseSolid {
        Mesh::merge(self.wedges.iter().chain(std::iter::once(&self.spine)))
    }
}

/// Build every tread and the spine of a staircase rising `total_height`
/// from `z = 0`.
///
/// The first tread spans `[step_angle + gap, gap]` and is half a step
/// thick; tread `i` is that tread raised by `i` steps and turned by `i`
/// step angles.
#[instrument(level = "debug", skip(config))]
pub fn assemble_staircase(
    step_count: u32,
    total_height: Real,
    turns: i32,
    radius: Real,
    config: &StaircaseConfig,
) -> BuildResult<StaircaseAssembly> {
    validate_shape(step_count, total_height, radius)?;

    let step_angle = step_angle(turns, step_count);
    let step_height = total_height / step_count as Real;
    debug!(step_angle, step_height, "derived step geometry");

    let first = build_wedge_with(
        step_angle + config.angle_gap_deg,
        config.angle_gap_deg,
        radius,
        step_height / 2.0,
        config,
    )?;

    let step_transforms: Vec<StepTransform> = (0..step_count)
        .map(|index| StepTransform::for_step(index, step_angle, step_height))
        .collect();
    let wedges: Vec<WedgeSolid> = step_transforms
        .iter()
        .map(|step| {
            if step.index == 0 {
                first.clone()
            } else {
                step.apply(&first)
            }
        })
        .collect();

    let spine = Mesh::cylinder(
        config.spine_radius,
        total_height,
        config.spine_segments,
        Some(config.material.clone()),
    )
    .float();

    Ok(StaircaseAssembly {
        wedges,
        spine,
        step_transforms,
    })
}

/// Build a merged staircase with the default construction settings.
pub fn build_staircase(
    step_count: u32,
    total_height: Real,
    turns: i32,
    radius: Real,
) -> BuildResult<StaircaseSolid> {
    build_staircase_with(
        step_count,
        total_height,
        turns,
        radius,
        &StaircaseConfig::default(),
    )
}

pub fn build_staircase_with(
    step_count: u32,
    total_height: Real,
    turns: i32,
    radius: Real,
    config: &StaircaseConfig,
) -> BuildResult<StaircaseSolid> {
    let assembly = assemble_staircase(step_count, total_height, turns, radius, config)?;
    let solid = assembly.merge();
    info!(
        pieces = assembly.piece_count(),
        polygons = solid.polygons.len(),
        "built staircase"
    );
    Ok(solid)
}

/// Build a staircase into `scene`.
///
/// Treads are inserted as `stair`, `stair1`, … and the spine as `spine`,
/// then all of them are united into one object named `config.name` (or the
/// next free variant of it). The pieces do not survive the union.
pub fn build_staircase_in(
    scene: &mut Scene<Material>,
    params: &StairParameters,
    config: &StaircaseConfig,
) -> BuildResult<ObjectId> {
    let assembly = assemble_staircase(
        params.step_count,
        params.total_height(),
        params.turns,
        params.radius,
        config,
    )?;

    let mut pieces = Vec::with_capacity(assembly.piece_count());
    for wedge in assembly.wedges {
        pieces.push(scene.insert("stair", wedge));
    }
    pieces.push(scene.insert("spine", assembly.spine));

    let id = scene.unite(&pieces, &config.name)?;
    info!(?id, name = %scene.get(id)?.name, "united staircase");
    Ok(id)
}

/// Build a staircase from form input and place it in `scene`.
///
/// `height_range` is `(min, max)`: the staircase rises
/// `max - min` and is moved up so its base sits at `min`.
pub fn apply(
    scene: &mut Scene<Material>,
    height_range: (Real, Real),
    turns: i32,
    radius: Real,
    step_count: i32,
) -> BuildResult<ObjectId> {
    let params = StairParameters::from_form(height_range, turns, radius, step_count)?;
    apply_with(scene, &params, &StaircaseConfig::default())
}

pub fn apply_with(
    scene: &mut Scene<Material>,
    params: &StairParameters,
    config: &StaircaseConfig,
) -> BuildResult<ObjectId> {
    params.validate()?;
    let id = build_staircase_in(scene, params, config)?;
    scene.translate(id, 0.0, 0.0, params.min_height)?;
    Ok(id)
}
