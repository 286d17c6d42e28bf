//! The active front: the circular polyline of boundary vertices the
//! marcher grows the mesh from.

use crate::float_types::{Real, TAU};
use crate::mesh::vertex::Vertex;

/// Angles this close to the running minimum do not displace it, so the
/// earliest near-minimal vertex stays the pivot and pivot selection is
/// reproducible.
const ANGLE_TIE_MARGIN: Real = 1e-6;

/// Ordered circular sequence of boundary vertices; neighbour indices
/// wrap modulo the length. Mutated only through [`Front::splice`].
#[derive(Debug, Clone, Default)]
pub struct Front {
    vertices: Vec<Vertex>,
}

impl Front {
    /// Take an initial ring of vertices as the front.
    pub fn from_ring(vertices: Vec<Vertex>) -> Self {
        Self { vertices }
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Vertex at `i`. `i` must be in range.
    pub fn vertex(&self, i: usize) -> &Vertex {
        &self.vertices[i]
    }

    /// The circular neighbours of `i`: (previous, next).
    pub fn neighbours(&self, i: usize) -> (&Vertex, &Vertex) {
        let m = self.vertices.len();
        (
            &self.vertices[(i + m - 1) % m],
            &self.vertices[(i + 1) % m],
        )
    }

    /// Replace the vertex at `k` with `replacement`, in place:
    /// `[p₀, …, p_{k−1}, replacement…, p_{k+1}, …]`. An empty
    /// replacement shrinks the front by one; emptying it ends the march.
    pub fn splice(&mut self, k: usize, replacement: &[Vertex]) {
        self.vertices.splice(k..=k, replacement.iter().copied());
    }

    /// **Mathematical Foundation: Interior Angle on a Curved Surface**
    ///
    /// The interior angle of the front at pᵢ is measured in pᵢ's tangent
    /// plane: both neighbour offsets are pushed through M⁻¹ and their
    /// polar angles taken over the (t₁, t₂) components, giving
    ///
    /// ```text
    /// ωᵢ = (θ_next − θ_prev) mod 2π  ∈ [0, 2π)
    /// ```
    ///
    /// A negative `atan2` difference gains 2π before the mod, so reflex
    /// wedges keep their full angle instead of collapsing to the
    /// complement.
    pub fn interior_angle(&self, i: usize) -> Real {
        let at = &self.vertices[i];
        let (prev, next) = self.neighbours(i);

        let lp = at.to_local(&(prev.pos - at.pos));
        let ln = at.to_local(&(next.pos - at.pos));

        let mut angle = ln.z.atan2(ln.y) - lp.z.atan2(lp.y);
        if angle < 0.0 {
            angle += TAU;
        }
        angle % TAU
    }

    /// Scan the whole front and return the pivot: the index of the
    /// minimal interior angle, plus that angle.
    ///
    /// A later vertex takes the minimum only by beating it by more than
    /// [`ANGLE_TIE_MARGIN`]; on near-ties the earliest index wins.
    /// `angles` is scratch storage reused across steps.
    pub fn argmin_angle(&self, angles: &mut Vec<Real>) -> (usize, Real) {
        angles.clear();
        angles.extend((0..self.len()).map(|i| self.interior_angle(i)));

        let mut min = 0;
        for i in 1..angles.len() {
            if angles[min] - angles[i] > ANGLE_TIE_MARGIN {
                min = i;
            }
        }
        (min, angles[min])
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::float_types::PI;
    use nalgebra::{Matrix3, Point3, Vector3};

    /// Vertex in the z = 0 plane with the identity-aligned frame
    /// (n = ẑ, t₁ = x̂, t₂ = ŷ).
    fn flat_vertex(x: Real, y: Real) -> Vertex {
        let normal = Vector3::z();
        let t1 = Vector3::x();
        let t2 = Vector3::y();
        Vertex {
            pos: Point3::new(x, y, 0.0),
            normal,
            t1,
            t2,
            inv_m: Matrix3::from_columns(&[normal, t1, t2]).transpose(),
        }
    }

    #[test]
    fn splice_contract() {
        let ring: Vec<Vertex> = (0..4).map(|i| flat_vertex(i as Real, 0.0)).collect();
        let mut front = Front::from_ring(ring);

        // Replace index 1 with two vertices.
        let fresh = [flat_vertex(10.0, 0.0), flat_vertex(11.0, 0.0)];
        front.splice(1, &fresh);
        assert_eq!(front.len(), 5);
        assert_eq!(front.vertex(0).pos.x, 0.0);
        assert_eq!(front.vertex(1).pos.x, 10.0);
        assert_eq!(front.vertex(2).pos.x, 11.0);
        assert_eq!(front.vertex(3).pos.x, 2.0);
        assert_eq!(front.vertex(4).pos.x, 3.0);

        // Empty replacement drops the vertex.
        front.splice(4, &[]);
        assert_eq!(front.len(), 4);
        assert_eq!(front.vertex(3).pos.x, 2.0);

        // Dropping the last vertex empties the front.
        let mut tiny = Front::from_ring(vec![flat_vertex(0.0, 0.0)]);
        tiny.splice(0, &[]);
        assert!(tiny.is_empty());
    }

    #[test]
    fn convex_and_reflex_angles() {
        // Convex wedge at the origin: prev at +x, next at +y → ω = π/2.
        let front = Front::from_ring(vec![
            flat_vertex(1.0, 0.0),
            flat_vertex(0.0, 0.0),
            flat_vertex(0.0, 1.0),
        ]);
        assert!((front.interior_angle(1) - PI / 2.0).abs() < 1e-12);

        // Swapping the neighbours makes the wedge reflex: ω = 3π/2, not
        // −π/2.
        let front = Front::from_ring(vec![
            flat_vertex(0.0, 1.0),
            flat_vertex(0.0, 0.0),
            flat_vertex(1.0, 0.0),
        ]);
        assert!((front.interior_angle(1) - 3.0 * PI / 2.0).abs() < 1e-12);
    }

    #[test]
    fn star_front_angle_scan() {
        // Eight-pointed star walked counterclockwise around the origin.
        // The front measures the wedge still to be meshed, so the
        // valleys carry the tight angles and the spikes the reflex ones.
        let mut ring = Vec::new();
        for i in 0..8 {
            let a = i as Real * PI / 4.0;
            let radius = if i % 2 == 0 { 1.0 } else { 0.4 };
            ring.push(flat_vertex(radius * a.cos(), radius * a.sin()));
        }
        let front = Front::from_ring(ring);

        let mut angles = Vec::new();
        let (pivot, min_angle) = front.argmin_angle(&mut angles);
        assert_eq!(angles.len(), 8);

        // Every angle wrapped into [0, 2π).
        for &a in &angles {
            assert!((0.0..TAU).contains(&a));
        }
        assert_eq!(pivot % 2, 1);
        assert!(min_angle < PI);
        for i in (0..8).step_by(2) {
            assert!(angles[i] > PI);
        }
    }

    #[test]
    fn argmin_prefers_earliest_on_near_ties() {
        // Four symmetry-equivalent valleys; the scan must keep the
        // first one.
        let mut ring = Vec::new();
        for i in 0..8 {
            let a = i as Real * PI / 4.0;
            let radius = if i % 2 == 0 { 1.0 } else { 0.4 };
            ring.push(flat_vertex(radius * a.cos(), radius * a.sin()));
        }
        let front = Front::from_ring(ring);

        let mut angles = Vec::new();
        let (pivot, _) = front.argmin_angle(&mut angles);
        let later_tie = (pivot + 2..8)
            .step_by(2)
            .find(|&i| (angles[i] - angles[pivot]).abs() <= 1e-6);
        // A later valley ties to within the margin, yet the earliest
        // index wins.
        assert!(later_tie.is_some());
        assert_eq!(pivot, 1);
    }
}
