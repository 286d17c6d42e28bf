//! Triangle meshes of implicit equipotential surfaces, grown by the
//! advancing-front marcher.

pub mod front;
mod march;
pub mod table;
pub mod vertex;

use crate::float_types::Real;
use crate::mesh::march::Marcher;
use crate::mesh::vertex::Vertex;
use crate::potential::Potential;
use nalgebra::{Point3, Vector3};

/// A triangle of the marched surface, vertices stored by value.
///
/// Winding is consistently outward: (v₁−v₀)×(v₂−v₀) points along the
/// surface normal at the centroid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    pub v0: Vertex,
    pub v1: Vertex,
    pub v2: Vertex,
}

impl Triangle {
    pub const fn new(v0: Vertex, v1: Vertex, v2: Vertex) -> Self {
        Self { v0, v1, v2 }
    }

    /// Arithmetic centroid (v₀ + v₁ + v₂)/3, not yet on the surface.
    pub fn centroid(&self) -> Point3<Real> {
        Point3::from((self.v0.pos.coords + self.v1.pos.coords + self.v2.pos.coords) / 3.0)
    }

    /// Side lengths (‖v₀−v₁‖, ‖v₀−v₂‖, ‖v₂−v₁‖).
    pub fn sides(&self) -> (Real, Real, Real) {
        (
            self.v0.distance_to(&self.v1),
            self.v0.distance_to(&self.v2),
            self.v2.distance_to(&self.v1),
        )
    }

    /// Area by Heron's formula.
    pub fn area(&self) -> Real {
        let (a, b, c) = self.sides();
        let s = 0.5 * (a + b + c);
        (s * (s - a) * (s - b) * (s - c)).sqrt()
    }

    /// Winding normal (v₁−v₀)×(v₂−v₀), unnormalized.
    pub fn winding_normal(&self) -> Vector3<Real> {
        (self.v1.pos - self.v0.pos).cross(&(self.v2.pos - self.v0.pos))
    }
}

/// A marched mesh together with the potential it discretizes.
#[derive(Debug, Clone)]
pub struct Mesh {
    /// The equipotential this mesh discretizes; kept so centroids can be
    /// re-projected when packing the output table.
    pub potential: Potential,
    /// Triangles in creation order.
    pub triangles: Vec<Triangle>,
}

impl Mesh {
    /// Triangulate the level set Φ = 0 with approximately equilateral
    /// triangles of side ≈ `delta`, marching outward from the seed
    /// point.
    ///
    /// `max_triangles` > 0 is a hard cap on the output: marching stops
    /// at the cap and an overshooting final step is trimmed back to
    /// exactly the cap. 0 means march until the front closes. A capped
    /// run returns the partial mesh without error.
    pub fn discretize(potential: Potential, delta: Real, max_triangles: usize) -> Self {
        Marcher::new(&potential, delta).run(max_triangles)
    }

    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }

    /// Sum of Heron areas over all triangles.
    pub fn total_area(&self) -> Real {
        self.triangles.iter().map(Triangle::area).sum()
    }

    /// Min and max corners over all triangle vertices.
    pub fn bounding_box(&self) -> (Point3<Real>, Point3<Real>) {
        let mut mins = Point3::new(Real::MAX, Real::MAX, Real::MAX);
        let mut maxs = Point3::new(-Real::MAX, -Real::MAX, -Real::MAX);
        for tri in &self.triangles {
            for v in [&tri.v0, &tri.v1, &tri.v2] {
                mins.x = mins.x.min(v.pos.x);
                mins.y = mins.y.min(v.pos.y);
                mins.z = mins.z.min(v.pos.z);
                maxs.x = maxs.x.max(v.pos.x);
                maxs.y = maxs.y.max(v.pos.y);
                maxs.z = maxs.z.max(v.pos.z);
            }
        }
        (mins, maxs)
    }
}
