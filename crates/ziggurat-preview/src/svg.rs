//! Minimal SVG writer for preview output.

use std::fmt::Write;

use ziggurat_engine::coords::Vec2;
use ziggurat_engine::mesh::Mesh;

/// Accumulates SVG elements; dimensions are supplied at [`finish`] time so
/// callers can lay content out first.
///
/// [`finish`]: Document::finish
pub struct Document {
    body: String,
}

impl Document {
    pub fn new() -> Self {
        Self { body: String::new() }
    }

    /// Appends every triangle of `mesh` as a filled polygon.
    ///
    /// SVG has no per-vertex color interpolation; each triangle takes its
    /// first vertex's color.
    pub fn mesh(&mut self, mesh: &Mesh) {
        for triangle in mesh.indices.chunks_exact(3) {
            let [a, b, c] = [
                &mesh.vertices[triangle[0] as usize],
                &mesh.vertices[triangle[1] as usize],
                &mesh.vertices[triangle[2] as usize],
            ];
            let _ = writeln!(
                self.body,
                r#"  <polygon points="{:.2},{:.2} {:.2},{:.2} {:.2},{:.2}" fill="{}"/>"#,
                a.position[0],
                a.position[1],
                b.position[0],
                b.position[1],
                c.position[0],
                c.position[1],
                css_color(a.color),
            );
        }
    }

    /// Appends a stroked outline, closing the loop back to the first point.
    pub fn outline(&mut self, points: &[Vec2], stroke: &str) {
        if points.is_empty() {
            return;
        }
        let mut attr = String::new();
        for point in points.iter().chain(points.first()) {
            let _ = write!(attr, "{:.2},{:.2} ", point.x, point.y);
        }
        let _ = writeln!(
            self.body,
            r#"  <polyline points="{}" fill="none" stroke="{stroke}"/>"#,
            attr.trim_end(),
        );
    }

    /// Renders the final document at the given pixel dimensions.
    pub fn finish(self, width: f32, height: f32) -> String {
        format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{width}\" height=\"{height}\" \
             viewBox=\"0 0 {width} {height}\">\n{}</svg>\n",
            self.body
        )
    }
}

fn css_color([r, g, b, a]: [f32; 4]) -> String {
    format!(
        "rgba({},{},{},{:.3})",
        channel(r),
        channel(g),
        channel(b),
        a.clamp(0.0, 1.0),
    )
}

fn channel(value: f32) -> u8 {
    (value.clamp(0.0, 1.0) * 255.0).round() as u8
}
