//! Error types for parameter validation, geometry operations and the scene.

use crate::float_types::Real;
use crate::scene::ObjectId;
use thiserror::Error;

/// Result type for anything that builds geometry.
pub type BuildResult<T> = Result<T, BuildError>;

/// A staircase or wedge parameter that cannot produce a solid.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParameterError {
    /// (InvalidParameter) a value is out of its accepted range
    #[error("invalid parameter `{name}` = {value}: {reason}")]
    InvalidParameter {
        name: &'static str,
        value: Real,
        reason: &'static str,
    },

    /// (NonFinite) NaN or infinite input
    #[error("parameter `{name}` is not finite ({value})")]
    NonFinite { name: &'static str, value: Real },

    /// (InvertedRange) the height range runs downwards
    #[error("height range is inverted: min {min} > max {max}")]
    InvertedRange { min: Real, max: Real },
}

/// A mesh operation produced something the pipeline cannot continue from.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeometryError {
    /// Separating the cut cylinder did not give the expected number of shells
    #[error("expected {expected} shells after cutting, found {found}")]
    UnexpectedShellCount { expected: usize, found: usize },

    /// No shell carried the requested side tags
    #[error("no shell lies on the requested sides of the cut planes")]
    MissingShell,

    /// A solid still has boundary edges after closing its border
    #[error("solid is not watertight: {boundary_edges} boundary edges remain")]
    OpenShell { boundary_edges: usize },

    /// A boundary loop could not be split into planar facets
    #[error("boundary loop with {vertices} vertices has no planar decomposition")]
    NonPlanarBorder { vertices: usize },

    /// The result is split into several disconnected pieces
    #[error("expected a single connected shell, found {found}")]
    Disconnected { found: usize },

    /// The mesh is empty
    #[error("mesh has no polygons")]
    EmptyMesh,

    /// Indicates an inconsistency while building a triangle mesh
    #[error("triangle mesh construction failed: {0}")]
    TriMesh(String),
}

/// Misuse of the scene accumulator.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SceneError {
    /// The handle does not name a live object
    #[error("no object with id {0:?} in the scene")]
    UnknownObject(ObjectId),

    /// Uniting zero objects
    #[error("cannot unite an empty selection")]
    EmptySelection,

    /// The same handle appears twice in one selection
    #[error("object {0:?} is selected more than once")]
    DuplicateSelection(ObjectId),
}

/// Any failure of a staircase build.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BuildError {
    #[error(transparent)]
    Parameter(#[from] ParameterError),
    #[error(transparent)]
    Geometry(#[from] GeometryError),
    #[error(transparent)]
    Scene(#[from] SceneError),
}
