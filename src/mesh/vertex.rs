//! Struct and functions for working with surface `Vertex`s and the local
//! orthonormal frame the marching front measures its angles in.

use crate::float_types::Real;
use crate::potential::Potential;
use nalgebra::{Matrix3, Point3, Vector3};
use std::fmt;

/// Squared Newton-step length below which projection has converged.
const PROJECTION_TOL_SQ: Real = 1e-12;
/// Residual bound the converged point must also satisfy. Step length
/// alone is not enough: where ∇Φ degenerates (the heart surface near
/// its cusps) the steps collapse before Φ does.
const PROJECTION_RESIDUAL_TOL: Real = 1e-9;
/// Hard cap on projection iterations.
const PROJECTION_MAX_ITERS: u32 = 100;
/// Iteration counts at or above this are reported as non-convergent.
const PROJECTION_WARN_ITERS: u32 = 90;

/// A vertex on the equipotential surface, carrying its local frame.
///
/// `normal`, `t1`, `t2` form a right-handed orthonormal basis with
/// (`t1`, `t2`) spanning the tangent plane; `inv_m` maps world-space
/// offsets into that frame. Vertices are immutable once built — the
/// front and the triangle list copy them by value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vertex {
    pub pos: Point3<Real>,
    /// Unit outward normal, ∇Φ/‖∇Φ‖.
    pub normal: Vector3<Real>,
    /// First tangent unit vector.
    pub t1: Vector3<Real>,
    /// Second tangent unit vector, n × t₁.
    pub t2: Vector3<Real>,
    /// Inverse of the column matrix (n, t₁, t₂); its transpose, since the
    /// columns are orthonormal.
    pub inv_m: Matrix3<Real>,
}

impl Vertex {
    /// Build the vertex frame at `pos`, taking the outward normal from
    /// ∇Φ.
    ///
    /// The tangent tie-break is deterministic: normals well away from
    /// the z axis take t₁ = (n_y, −n_x, 0)/√(n_x²+n_y²), the rest take
    /// t₁ = (−n_z, 0, n_x)/√(n_x²+n_z²), so neither branch divides by a
    /// vanishing projection.
    ///
    /// `pos` must not be a critical point of the potential: a zero
    /// gradient yields a non-finite frame. This is a caller precondition
    /// and is not checked here.
    pub fn from_potential(pos: Point3<Real>, potential: &Potential) -> Self {
        let normal = potential.gradient(&pos).normalize();

        let t1 = if normal.x.abs() > 0.5 || normal.y.abs() > 0.5 {
            Vector3::new(normal.y, -normal.x, 0.0).normalize()
        } else {
            Vector3::new(-normal.z, 0.0, normal.x).normalize()
        };
        let t2 = normal.cross(&t1);

        let inv_m = Matrix3::from_columns(&[normal, t1, t2]).transpose();

        Vertex {
            pos,
            normal,
            t1,
            t2,
            inv_m,
        }
    }

    /// Express a world-space offset in this vertex's (n, t₁, t₂) frame.
    pub fn to_local(&self, offset: &Vector3<Real>) -> Vector3<Real> {
        self.inv_m * offset
    }

    /// Map a local (n, t₁, t₂) offset back to world space.
    pub fn to_world(&self, local: &Vector3<Real>) -> Vector3<Real> {
        self.normal * local.x + self.t1 * local.y + self.t2 * local.z
    }

    /// Euclidean distance between vertex positions.
    pub fn distance_to(&self, other: &Vertex) -> Real {
        (self.pos - other.pos).norm()
    }
}

impl fmt::Display for Vertex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            " r = ({:.3}, {:.3}, {:.3})\t n = ({:.3}, {:.3}, {:.3})\t\
             t1 = ({:.3}, {:.3}, {:.3})\tt2 = ({:.3}, {:.3}, {:.3})",
            self.pos.x,
            self.pos.y,
            self.pos.z,
            self.normal.x,
            self.normal.y,
            self.normal.z,
            self.t1.x,
            self.t1.y,
            self.t1.z,
            self.t2.x,
            self.t2.y,
            self.t2.z,
        )
    }
}

/// **Mathematical Foundation: Newton Projection Along the Gradient**
///
/// Project a candidate point q onto the level set Φ = 0 by iterating
///
/// ```text
/// rᵢ₊₁ = rᵢ − Φ(rᵢ)·∇Φ(rᵢ)/‖∇Φ(rᵢ)‖²
/// ```
///
/// the Newton step constrained to the gradient direction. Near the
/// surface Φ is locally linear along ∇Φ, so the iteration converges
/// quadratically for well-behaved fields.
///
/// Termination: squared step length ≤ 1e-12 *and* residual |Φ| ≤ 1e-9,
/// or 100 iterations. The residual condition keeps vertices on the
/// surface even where the gradient vanishes towards a cusp and the
/// steps shrink faster than Φ. Reaching 90 iterations logs a warning
/// and the last iterate is used as-is — a soft failure; the mesh keeps
/// growing.
pub fn project_onto_potential(q: Point3<Real>, potential: &Potential) -> Vertex {
    let mut r = q;
    let mut prev = Point3::origin();
    let mut iters = 0;

    while ((r - prev).norm_squared() > PROJECTION_TOL_SQ
        || potential.value(&r).abs() > PROJECTION_RESIDUAL_TOL)
        && iters < PROJECTION_MAX_ITERS
    {
        prev = r;
        let g = potential.gradient(&prev);
        let s = potential.value(&prev);
        r = prev - g * (s / g.norm_squared());
        iters += 1;
    }

    if iters >= PROJECTION_WARN_ITERS {
        log::warn!(
            "projection did not converge after {iters} iterations (residual {:e})",
            potential.value(&r).abs()
        );
    }

    Vertex::from_potential(r, potential)
}

#[cfg(test)]
mod test {
    use super::*;

    fn unit_sphere() -> Potential {
        Potential::Sphere { radius: 1.0 }
    }

    #[test]
    fn frame_is_right_handed_orthonormal() {
        let pot = unit_sphere();
        let v = Vertex::from_potential(
            Point3::from(Vector3::new(0.6, 0.48, 0.64).normalize()),
            &pot,
        );

        assert!((v.normal.norm() - 1.0).abs() < 1e-10);
        assert!((v.t1.norm() - 1.0).abs() < 1e-10);
        assert!((v.t2.norm() - 1.0).abs() < 1e-10);
        assert!(v.normal.dot(&v.t1).abs() < 1e-10);
        assert!(v.normal.dot(&v.t2).abs() < 1e-10);
        assert!(v.t1.dot(&v.t2).abs() < 1e-10);
        assert!((v.t2 - v.normal.cross(&v.t1)).norm() < 1e-12);
    }

    #[test]
    fn tangent_tie_break_branches() {
        let pot = unit_sphere();

        // Normal along +x: first branch, t₁ in the xy plane.
        let v = Vertex::from_potential(Point3::new(1.0, 0.0, 0.0), &pot);
        assert!(v.t1.z.abs() < 1e-12);

        // Normal along +z: second branch, t₁ in the zx plane.
        let v = Vertex::from_potential(Point3::new(0.0, 0.0, 1.0), &pot);
        assert!(v.t1.y.abs() < 1e-12);

        // Normal along −x must also take the first branch; the rule uses
        // magnitudes, not signed components.
        let v = Vertex::from_potential(Point3::new(-1.0, 0.0, 0.0), &pot);
        assert!(v.t1.z.abs() < 1e-12);
    }

    #[test]
    fn local_world_round_trip() {
        let pot = unit_sphere();
        let v = Vertex::from_potential(
            Point3::from(Vector3::new(0.6, 0.48, 0.64).normalize()),
            &pot,
        );

        let offset = Vector3::new(0.3, -0.2, 0.5);
        let back = v.to_world(&v.to_local(&offset));
        assert!((back - offset).norm() < 1e-12);

        // M⁻¹·M = I on the basis vectors.
        let local_n = v.to_local(&v.normal);
        assert!((local_n - Vector3::x()).norm() < 1e-10);
        let local_t1 = v.to_local(&v.t1);
        assert!((local_t1 - Vector3::y()).norm() < 1e-10);
    }

    #[test]
    fn display_shows_the_frame() {
        let v = Vertex::from_potential(Point3::new(1.0, 0.0, 0.0), &unit_sphere());
        let shown = format!("{v}");
        assert!(shown.contains("r = (1.000, 0.000, 0.000)"));
        assert!(shown.contains("t1 ="));
        assert!(shown.contains("t2 ="));
    }

    #[test]
    fn projection_lands_on_surface() {
        let pot = unit_sphere();
        let v = project_onto_potential(Point3::new(0.2, 1.7, -0.4), &pot);
        assert!(pot.value(&v.pos).abs() < 1e-6);
        assert!((v.pos.coords.norm() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn projection_meets_the_residual_bound_near_a_cusp() {
        // The heart's gradient vanishes towards (±1, 0, 0), where the
        // step-length criterion alone stalls before Φ is driven down.
        let pot = Potential::Heart;
        let v = project_onto_potential(Point3::new(-1.3, 0.02, 0.01), &pot);
        assert!(pot.value(&v.pos).abs() < 1e-6);
    }
}
