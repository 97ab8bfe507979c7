//! Progress-bar tessellation.
//!
//! Turns one bar configuration plus a layout rectangle into a triangulated
//! quad strip: a full-width background quad first, then foreground geometry
//! covering the filled span. The foreground paint decides the shape of that
//! geometry: a single flat quad, a smooth multi-key strip, or flat bands.

use crate::coords::{Rect, Vec2};
use crate::mesh::{Mesh, Vertex};
use crate::paint::{BlendMode, Color, Gradient, Paint};

/// Inputs for one bar rebuild.
///
/// `rect` is the layout rectangle allotted by the host. When
/// `use_max_value_for_width` is set, the drawn width is
/// `width_per_point * max_value` instead of the rect width, so the bar
/// scales with its value range rather than with the layout box.
#[derive(Debug)]
pub struct BarParams<'a> {
    pub rect: Rect,
    pub value: f32,
    pub max_value: f32,
    pub background: Color,
    pub foreground: &'a Paint,
    pub use_max_value_for_width: bool,
    pub width_per_point: f32,
}

impl BarParams<'_> {
    /// Width the bar is drawn at, in logical pixels.
    #[inline]
    pub fn reference_width(&self) -> f32 {
        if self.use_max_value_for_width {
            self.width_per_point * self.max_value
        } else {
            self.rect.normalized().width()
        }
    }

    /// Fill fraction in [0, 1]. A zero `max_value` yields 0.
    #[inline]
    pub fn normalized_value(&self) -> f32 {
        if self.max_value > 0.0 {
            (self.value / self.max_value).clamp(0.0, 1.0)
        } else {
            0.0
        }
    }
}

/// Rebuilds `mesh` from `params`.
///
/// The output always starts with the background quad at vertices `[0, 3]`;
/// foreground geometry follows. The mesh is valid for any input; degenerate
/// spans produce zero-area quads rather than errors.
pub fn tessellate_bar(params: &BarParams<'_>, mesh: &mut Mesh) {
    mesh.clear();

    let rect = params.rect.normalized();
    let normalized = params.normalized_value();
    let mut bar = BarBuilder {
        mesh,
        origin: rect.origin,
        width: params.reference_width(),
        height: rect.height(),
    };

    bar.quad(0.0, 1.0, params.background);

    match params.foreground {
        Paint::Solid(color) => bar.quad(0.0, normalized, *color),
        Paint::Gradient(gradient) => match gradient.mode() {
            BlendMode::Continuous => bar.blend_strip(gradient, normalized),
            BlendMode::Stepped => bar.stepped_bands(gradient, normalized),
        },
    }
}

/// Accumulates vertices for one rebuild.
///
/// Coordinates are normalized bar space: x and y are clamped to [0, 1],
/// scaled by the reference width and rect height, and offset by the rect
/// origin.
struct BarBuilder<'a> {
    mesh: &'a mut Mesh,
    origin: Vec2,
    width: f32,
    height: f32,
}

impl BarBuilder<'_> {
    fn push_vertex(&mut self, x: f32, y: f32, color: Color) {
        let position = self.origin
            + Vec2::new(
                x.clamp(0.0, 1.0) * self.width,
                y.clamp(0.0, 1.0) * self.height,
            );
        self.mesh.vertices.push(Vertex::new(position, color));
    }

    /// One flat quad spanning `[from, to]` horizontally, full height.
    fn quad(&mut self, from: f32, to: f32, color: Color) {
        let base = self.mesh.vertices.len() as u32;
        self.push_vertex(from, 0.0, color);
        self.push_vertex(from, 1.0, color);
        self.push_vertex(to, 1.0, color);
        self.push_vertex(to, 0.0, color);
        self.mesh
            .indices
            .extend_from_slice(&[base, base + 1, base + 2, base + 2, base + 3, base]);
    }

    /// One vertical pair of strip vertices at `x`.
    ///
    /// Strip colors are forced opaque: a translucent strip blends against
    /// the background and shows a seam at every key boundary. Known
    /// limitation; the strip does not support translucent gradients.
    fn strip_pair(&mut self, x: f32, color: Color) {
        let color = color.opaque();
        self.push_vertex(x, 0.0, color);
        self.push_vertex(x, 1.0, color);
    }

    /// Smoothly interpolated fill: a vertex pair at 0, one per key strictly
    /// inside the filled span, and one at the fill edge, triangulated pair
    /// to pair.
    fn blend_strip(&mut self, gradient: &Gradient, normalized: f32) {
        let start = self.mesh.vertices.len() as u32;

        self.strip_pair(0.0, gradient.evaluate(0.0));
        for key in gradient.keys().iter().filter(|key| key.t < normalized) {
            self.strip_pair(key.t, key.color);
        }
        self.strip_pair(normalized, gradient.evaluate(normalized));

        let end = self.mesh.vertices.len() as u32;
        let mut i = start;
        while i + 3 < end {
            self.mesh
                .indices
                .extend_from_slice(&[i, i + 1, i + 2, i + 1, i + 3, i + 2]);
            i += 2;
        }
    }

    /// Flat bands, one per key, walked in ascending key order.
    ///
    /// A key's band ends at its `t`, except that any key sharing the final
    /// key's time ends at 1.0 instead, so the bands cover [0, 1] no matter
    /// where the final key sits. The band containing the fill edge is
    /// clipped to it and ends the walk.
    fn stepped_bands(&mut self, gradient: &Gradient, normalized: f32) {
        let Some(last) = gradient.keys().last() else {
            return;
        };
        let last_t = last.t;

        let mut from = 0.0;
        for key in gradient.keys() {
            let to = if key.t == last_t { 1.0 } else { key.t };
            if normalized <= to {
                self.quad(from, normalized, key.color);
                break;
            }
            self.quad(from, to, key.color);
            from = to;
        }
    }
}
