//! Advancing-front triangulation of **implicit equipotential surfaces**:
//! Roche potentials of aligned, misaligned and single rotating stars,
//! plus a few closed-form test surfaces (sphere, torus, heart).
//!
//! The mesh is grown outward from a seed point. Candidate points are
//! projected onto the level set Φ = 0 by Newton iteration along ∇Φ, a
//! circular active front of boundary vertices is maintained, and each
//! step closes the front vertex with the smallest interior angle using
//! one or more near-equilateral triangles of side ≈ δ.
//!
//! # Features
//! #### Default
//! - **stl-io**: ASCII `.stl` export
//!
//! ```
//! use marchrs::discretize;
//!
//! // Unit sphere, target edge length 0.5, no triangle cap.
//! let table = discretize(0.5, 0, "Sphere", &[1.0]).unwrap();
//! assert!(table.len() > 6);
//! ```

#![forbid(unsafe_code)]
#![deny(unused)]
#![warn(clippy::missing_const_for_fn, clippy::approx_constant, clippy::all)]

pub mod errors;
pub mod float_types;
pub mod io;
pub mod mesh;
pub mod potential;


use crate::errors::PotentialError;
use crate::float_types::Real;
use crate::mesh::Mesh;
use crate::mesh::table::TriangleTable;
use crate::potential::Potential;

/// Mesh the equipotential surface `potential` = 0 and pack the result
/// into a per-triangle table.
///
/// - `delta`: target edge length of the near-equilateral triangles.
/// - `max_triangles`: hard cap on emitted triangles; 0 means march
///   until the front closes. A capped run returns the partial table
///   without error.
/// - `potential`: registry name of the surface kind; see
///   [`Potential::from_name`] for the names and parameter arities.
/// - `params`: the kind's parameter vector.
///
/// # Errors
///
/// [`PotentialError::UnavailablePotential`] for an unknown name,
/// [`PotentialError::WrongParameterCount`] for a parameter vector of
/// the wrong length.
pub fn discretize(
    delta: Real,
    max_triangles: usize,
    potential: &str,
    params: &[Real],
) -> Result<TriangleTable, PotentialError> {
    let potential = Potential::from_name(potential, params)?;
    Ok(Mesh::discretize(potential, delta, max_triangles).to_table())
}
