//! ASCII [STL](https://en.wikipedia.org/wiki/STL_(file_format)) export.

use crate::mesh::Mesh;

impl Mesh {
    /// Convert this mesh to an **ASCII STL** string with the given
    /// `name`.
    ///
    /// STL is triangle-based and the marcher emits triangles directly,
    /// so each facet is written as-is with its winding normal (already
    /// oriented outward).
    ///
    /// ```
    /// # use marchrs::{mesh::Mesh, potential::Potential};
    /// # use std::error::Error;
    /// # fn main() -> Result<(), Box<dyn Error>> {
    /// let mesh = Mesh::discretize(Potential::Sphere { radius: 1.0 }, 0.5, 0);
    /// let stl = mesh.to_stl_ascii("ball");
    /// std::fs::write("ball.stl", stl)?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn to_stl_ascii(&self, name: &str) -> String {
        let mut out = String::new();
        out.push_str(&format!("solid {name}\n"));

        for tri in &self.triangles {
            let normal = tri.winding_normal().normalize();
            out.push_str(&format!(
                "  facet normal {:.6} {:.6} {:.6}\n",
                normal.x, normal.y, normal.z
            ));
            out.push_str("    outer loop\n");
            for vertex in [&tri.v0, &tri.v1, &tri.v2] {
                out.push_str(&format!(
                    "      vertex {:.6} {:.6} {:.6}\n",
                    vertex.pos.x, vertex.pos.y, vertex.pos.z
                ));
            }
            out.push_str("    endloop\n");
            out.push_str("  endfacet\n");
        }

        out.push_str(&format!("endsolid {name}\n"));
        out
    }
}
