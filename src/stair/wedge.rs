//! Cutting one stair tread out of a cylinder.

use crate::errors::{BuildResult, GeometryError};
use crate::float_types::{FULL_TURN_DEG, Real, tolerance};
use crate::material::Material;
use crate::mesh::Mesh;
use crate::mesh::cut::{Side, cut_shells, merge_shells};
use crate::mesh::plane::Plane;
use crate::mesh::shells::Shell;
use crate::stair::{StaircaseConfig, WedgeSolid, finite, positive};
use crate::traits::CSGOps;
use std::fmt::Debug;
use tracing::{debug, instrument, warn};

/// Angular extent of a wedge, reduced to less than one turn.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Sweep {
    /// Zero or a whole number of turns: nothing is cut away
    Full,
    Partial {
        degrees: Real,
        /// The start plane bounds the wedge from below (in angle)
        start_is_lower: bool,
    },
}

impl Sweep {
    fn between(start_deg: Real, end_deg: Real) -> Self {
        let degrees = (start_deg - end_deg).abs() % FULL_TURN_DEG;
        if degrees <= tolerance() || FULL_TURN_DEG - degrees <= tolerance() {
            Sweep::Full
        } else {
            Sweep::Partial {
                degrees,
                start_is_lower: start_deg <= end_deg,
            }
        }
    }
}

/// Cut `mesh` with vertical planes through its center at both angles (start
/// first) and split the result into connected shells tagged
/// `[side of start plane, side of end plane]`.
///
/// For a cylinder and two distinct planes this yields four quadrants in the
/// order front/front, front/back, back/front, back/back; a half-turn apart
/// it yields the two halves.
pub fn quadrant_shells<S: Clone + Send + Sync + Debug>(
    mesh: &Mesh<S>,
    start_angle_deg: Real,
    end_angle_deg: Real,
) -> Vec<Shell<S>> {
    let center = mesh.center_point();
    let start_plane = Plane::vertical_through(&center, start_angle_deg);
    let end_plane = Plane::vertical_through(&center, end_angle_deg);

    let shells = cut_shells(&[Shell::whole(mesh.clone())], &start_plane);
    let shells = cut_shells(&shells, &end_plane);
    shells.iter().flat_map(Shell::separate).collect()
}

/// Pick the shells making up the sector between the two planes.
fn select_sector<S: Clone + Send + Sync + Debug>(
    shells: Vec<Shell<S>>,
    degrees: Real,
    start_is_lower: bool,
) -> Result<Vec<Shell<S>>, GeometryError> {
    let half_turn = (degrees - FULL_TURN_DEG / 2.0).abs() <= tolerance();
    let expected = if half_turn { 2 } else { 4 };
    if shells.len() != expected {
        return Err(GeometryError::UnexpectedShellCount {
            expected,
            found: shells.len(),
        });
    }

    // in front of the lower plane and behind the upper one
    let inside = if start_is_lower {
        [Side::Front, Side::Back]
    } else {
        [Side::Back, Side::Front]
    };

    let selected: Vec<Shell<S>> = if degrees <= FULL_TURN_DEG / 2.0 {
        shells.into_iter().filter(|s| s.sides == inside).collect()
    } else {
        // a reflex sector is everything except the opposite quadrant
        let outside = [inside[1], inside[0]];
        shells.into_iter().filter(|s| s.sides != outside).collect()
    };

    let wanted = if degrees <= FULL_TURN_DEG / 2.0 { 1 } else { 3 };
    if selected.len() != wanted {
        return Err(GeometryError::MissingShell);
    }
    Ok(selected)
}

/// Build a wedge with the default construction settings.
///
/// See [`build_wedge_with`].
pub fn build_wedge(
    start_angle_deg: Real,
    end_angle_deg: Real,
    radius: Real,
    height: Real,
) -> BuildResult<WedgeSolid> {
    build_wedge_with(
        start_angle_deg,
        end_angle_deg,
        radius,
        height,
        &StaircaseConfig::default(),
    )
}

/// Build a closed cylindrical sector spanning from `start_angle_deg` to
/// `end_angle_deg` about +Z, standing on `z = 0`.
///
/// A cylinder of `config.segments` facets is cut by two vertical planes
/// through its axis. The shell between the planes is kept, its open cut
/// faces are capped and every face gets `config.material`. Angles a whole
/// number of turns apart give the uncut cylinder.
///
/// ## Errors
/// [`ParameterError`](crate::errors::ParameterError) for non-finite angles
/// or a non-positive radius or height, and [`GeometryError`] if the cut does
/// not produce the expected shells or the result is not a single closed
/// solid.
#[instrument(level = "debug", skip(config))]
pub fn build_wedge_with(
    start_angle_deg: Real,
    end_angle_deg: Real,
    radius: Real,
    height: Real,
    config: &StaircaseConfig,
) -> BuildResult<WedgeSolid> {
    finite("start_angle_deg", start_angle_deg)?;
    finite("end_angle_deg", end_angle_deg)?;
    positive("radius", radius)?;
    positive("height", height)?;

    let cylinder: Mesh<Material> = Mesh::cylinder(radius, height, config.segments, None);

    let wedge = match Sweep::between(start_angle_deg, end_angle_deg) {
        Sweep::Full => {
            warn!(
                start_angle_deg,
                end_angle_deg, "wedge spans whole turns, keeping the full cylinder"
            );
            cylinder
        },
        Sweep::Partial {
            degrees,
            start_is_lower,
        } => {
            let shells = quadrant_shells(&cylinder, start_angle_deg, end_angle_deg);
            debug!(shells = shells.len(), degrees, "cut cylinder");
            let selected = select_sector(shells, degrees, start_is_lower)?;
            merge_shells(&selected).close_border()?
        },
    };

    let pieces = wedge.separate().len();
    if pieces != 1 {
        return Err(GeometryError::Disconnected { found: pieces }.into());
    }

    Ok(wedge.with_metadata(config.material.clone()))
}
