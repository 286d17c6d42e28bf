//! Packing a marched mesh into the flat per-triangle output table.

use crate::float_types::Real;
use crate::mesh::Mesh;
use crate::mesh::vertex::project_onto_potential;
use std::ops::Index;

/// Number of columns in a packed triangle row.
pub const TABLE_WIDTH: usize = 16;

/// One 16-wide row per triangle, in creation order:
///
/// | cols   | meaning                                  |
/// |--------|------------------------------------------|
/// | 0..3   | centroid projected onto the surface      |
/// | 3      | triangle area (Heron)                    |
/// | 4..7   | v₀ position                              |
/// | 7..10  | v₁ position                              |
/// | 10..13 | v₂ position                              |
/// | 13..16 | unit normal at the projected centroid    |
#[derive(Debug, Clone, PartialEq)]
pub struct TriangleTable {
    rows: Vec<[Real; TABLE_WIDTH]>,
}

impl TriangleTable {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// All rows, in triangle creation order.
    pub fn rows(&self) -> &[[Real; TABLE_WIDTH]] {
        &self.rows
    }
}

impl Index<usize> for TriangleTable {
    type Output = [Real; TABLE_WIDTH];

    fn index(&self, row: usize) -> &Self::Output {
        &self.rows[row]
    }
}

impl Mesh {
    /// Pack one row per triangle. The stored centroid is the arithmetic
    /// centroid re-projected onto the surface, and its frame supplies
    /// the row's normal.
    pub fn to_table(&self) -> TriangleTable {
        let mut rows = Vec::with_capacity(self.triangles.len());

        for tri in &self.triangles {
            let c = project_onto_potential(tri.centroid(), &self.potential);
            let (s1, s2, s3) = tri.sides();
            let s = 0.5 * (s1 + s2 + s3);

            let mut row = [0.0; TABLE_WIDTH];
            row[0] = c.pos.x;
            row[1] = c.pos.y;
            row[2] = c.pos.z;
            row[3] = (s * (s - s1) * (s - s2) * (s - s3)).sqrt();
            row[4] = tri.v0.pos.x;
            row[5] = tri.v0.pos.y;
            row[6] = tri.v0.pos.z;
            row[7] = tri.v1.pos.x;
            row[8] = tri.v1.pos.y;
            row[9] = tri.v1.pos.z;
            row[10] = tri.v2.pos.x;
            row[11] = tri.v2.pos.y;
            row[12] = tri.v2.pos.z;
            row[13] = c.normal.x;
            row[14] = c.normal.y;
            row[15] = c.normal.z;
            rows.push(row);
        }

        TriangleTable { rows }
    }
}
