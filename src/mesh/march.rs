//! **Mathematical Foundation: Advancing-Front Marching**
//!
//! The mesh is grown outward from a seed point on the surface:
//!
//! 1. **Seed**: project the seed candidate onto Φ = 0, surround it with
//!    a hexagonal ring of six projected candidates at angles iπ/3 in its
//!    tangent frame, and fan six triangles from the centre. The ring is
//!    the initial front.
//! 2. **Pivot**: scan the front for the vertex with the smallest
//!    interior angle ω — the tightest wedge left to fill.
//! 3. **Tessellate**: split the wedge into nt = ⌊3ω/π⌋ + 1 triangles of
//!    opening Δω = ω/nt; when nt > 1 leaves slivers (Δω < 0.8 rad), one
//!    fewer triangle balances the aspect ratio back toward the
//!    equilateral π/3.
//! 4. **Emit**: each interior wedge direction is the pivot→previous
//!    direction rotated by j·Δω about the pivot normal, rescaled to the
//!    target edge length in the tangent plane, mapped back to world
//!    space and projected onto the surface.
//! 5. **Splice**: the freshly projected vertices replace the pivot on
//!    the front, and the loop repeats until the front closes on itself
//!    and empties.
//!
//! Termination is heuristic: each nt = 1 step shrinks the front by one,
//! but nothing guarantees that for arbitrary level sets, so a triangle
//! budget is exposed as a hard cap.

use crate::float_types::{FRAC_PI_3, PI, Real};
use crate::mesh::front::Front;
use crate::mesh::vertex::{Vertex, project_onto_potential};
use crate::mesh::{Mesh, Triangle};
use crate::potential::Potential;
use nalgebra::{Point3, Vector3};

/// Seed candidate. The tiny x offset keeps the seed off the coordinate
/// singularities the Roche potentials have at the origin.
const SEED_POINT: [Real; 3] = [-2.0e-5, 0.0, 0.0];

/// Wedge openings below this (in radians) trigger the aspect-ratio
/// decrement in step 3 above.
const MIN_WEDGE_OPENING: Real = 0.8;

/// One mesh run: the front, the growing triangle list, and the scratch
/// the angle scan reuses. Everything is dropped at the end of
/// [`Marcher::run`] except the triangles, which move into the [`Mesh`].
pub(crate) struct Marcher<'a> {
    potential: &'a Potential,
    delta: Real,
    front: Front,
    triangles: Vec<Triangle>,
    angles: Vec<Real>,
}

impl<'a> Marcher<'a> {
    pub(crate) fn new(potential: &'a Potential, delta: Real) -> Self {
        Self {
            potential,
            delta,
            front: Front::default(),
            triangles: Vec::new(),
            angles: Vec::new(),
        }
    }

    fn seed(&mut self) {
        let p0 = project_onto_potential(Point3::from(SEED_POINT), self.potential);

        let mut ring = Vec::with_capacity(6);
        for i in 0..6 {
            let phi = i as Real * FRAC_PI_3;
            let q = p0.pos + self.delta * (phi.cos() * p0.t1 + phi.sin() * p0.t2);
            ring.push(project_onto_potential(q, self.potential));
        }

        for i in 0..6 {
            self.triangles
                .push(Triangle::new(p0, ring[i], ring[(i + 1) % 6]));
        }

        self.front = Front::from_ring(ring);
    }

    /// Close the tightest wedge on the front with one or more triangles.
    fn step(&mut self) {
        let (k, min_angle) = self.front.argmin_angle(&mut self.angles);

        let mut nt = (min_angle * 3.0 / PI).trunc() as usize + 1;
        let mut d_omega = min_angle / nt as Real;
        if d_omega < MIN_WEDGE_OPENING && nt > 1 {
            nt -= 1;
            d_omega = min_angle / nt as Real;
        }

        let pivot = *self.front.vertex(k);
        let (prev, next) = {
            let (p, n) = self.front.neighbours(k);
            (*p, *n)
        };

        // Direction toward the previous neighbour in the pivot frame;
        // every emitted vertex is this direction swept about the normal.
        let toward_prev = pivot.to_local(&(prev.pos - pivot.pos));

        let mut fresh: Vec<Vertex> = Vec::with_capacity(nt - 1);
        for j in 1..nt {
            let (sin, cos) = (j as Real * d_omega).sin_cos();
            let mut ty = toward_prev.y * cos - toward_prev.z * sin;
            let mut tz = toward_prev.y * sin + toward_prev.z * cos;

            // Rescale the tangential components to the target edge
            // length; the normal component is dropped entirely.
            let tnorm = (ty * ty + tz * tz).sqrt();
            ty *= self.delta / tnorm;
            tz *= self.delta / tnorm;

            let q = pivot.pos + pivot.to_world(&Vector3::new(0.0, ty, tz));
            let vertex = project_onto_potential(q, self.potential);

            let anchor = if j == 1 { prev } else { fresh[j - 2] };
            self.triangles.push(Triangle::new(anchor, vertex, pivot));
            fresh.push(vertex);
        }

        // Close the wedge against the next neighbour.
        let closing = if nt == 1 { prev } else { fresh[nt - 2] };
        self.triangles.push(Triangle::new(closing, next, pivot));

        self.front.splice(k, &fresh);
    }

    /// March until the front empties or the triangle budget is spent.
    ///
    /// `max_triangles` = 0 means unbounded. A positive budget is exact:
    /// the final step may overshoot by part of its wedge, and the
    /// overshoot is trimmed.
    pub(crate) fn run(mut self, max_triangles: usize) -> Mesh {
        self.seed();

        while !self.front.is_empty() {
            if max_triangles > 0 && self.triangles.len() >= max_triangles {
                break;
            }
            self.step();
        }

        if max_triangles > 0 && self.triangles.len() > max_triangles {
            self.triangles.truncate(max_triangles);
        }

        log::debug!(
            "marched {} at delta {}: {} triangles, front left {}",
            self.potential.name(),
            self.delta,
            self.triangles.len(),
            self.front.len(),
        );

        Mesh {
            potential: *self.potential,
            triangles: self.triangles,
        }
    }
}
