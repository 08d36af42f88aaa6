//! Procedural **spiral staircases** built from plane-cut cylinder wedges.
//!
//! A staircase is one tread, cut out of a cylinder as a closed wedge, copied
//! once per step along a helix and merged with a thin central spine. The
//! geometry lives in a small polygon-soup kernel ([`mesh`]) with
//! non-destructive plane cuts, shell separation and border closing, and
//! finished solids are kept by name in an explicit [`Scene`].
//!
//! ```rust
//! use spiralstair::{Scene, stair};
//!
//! # fn main() -> Result<(), spiralstair::errors::BuildError> {
//! let mut scene = Scene::new();
//! let id = stair::apply(&mut scene, (0.0, 20.0), 3, 1.0, 50)?;
//! assert_eq!(scene.get(id)?.name, "spiralstairs");
//! # Ok(())
//! # }
//! ```
//!
//! # Features
//! #### Default
//! - **f64**: use f64 as Real
//! - [**stl-io**](https://en.wikipedia.org/wiki/STL_(file_format)): `.stl` import/export
//!
//! #### Optional
//! - **f32**: use f32 as Real, this conflicts with f64
//! - **parallel**: use rayon for multithreading

#![forbid(unsafe_code)]
#![warn(clippy::missing_const_for_fn, clippy::approx_constant, clippy::all)]

pub mod errors;
pub mod float_types;
pub mod io;
pub mod material;
pub mod mesh;
pub mod scene;
pub mod stair;
pub mod traits;
pub mod triangulated;

#[cfg(any(
    all(feature = "f64", feature = "f32"),
    not(any(feature = "f64", feature = "f32"))
))]
compile_error!("Either 'f64' or 'f32' feature must be specified, but not both");

pub use errors::{BuildError, BuildResult};
pub use material::Material;
pub use mesh::Mesh;
pub use scene::{ObjectId, Scene};
pub use stair::{StairParameters, StaircaseConfig};
pub use traits::CSGOps;
