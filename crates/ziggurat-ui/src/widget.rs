use ziggurat_engine::coords::{Rect, Vec2};
use ziggurat_engine::mesh::Mesh;

use crate::constraints::Constraints;

// ── Widget trait ──────────────────────────────────────────────────────────

/// The core trait every widget implements.
///
/// Widgets tessellate their own geometry: the host assigns a rect during
/// layout, then asks dirty widgets to repopulate their mesh and uploads the
/// result.
///
/// # Implementing a widget
///
/// ```rust,ignore
/// use ziggurat_ui::prelude::*;
///
/// pub struct Swatch { color: Color, size: f32 }
///
/// impl Widget for Swatch {
///     fn measure(&self, constraints: Constraints) -> Vec2 {
///         constraints.constrain(Vec2::new(self.size, self.size))
///     }
///     fn populate_mesh(&mut self, rect: Rect, mesh: &mut Mesh) {
///         // push a quad covering `rect` into `mesh`
///     }
/// }
/// ```
pub trait Widget: 'static {
    /// Compute the size this widget wants given the available space.
    ///
    /// Must be deterministic; the parent may call `measure` multiple times.
    fn measure(&self, constraints: Constraints) -> Vec2;

    /// Rebuild this widget's geometry into `mesh`.
    ///
    /// `rect` is the space allocated by the host layout pass. Previous mesh
    /// contents are discarded; ownership of the result passes to the host
    /// immediately.
    fn populate_mesh(&mut self, rect: Rect, mesh: &mut Mesh);

    /// True when state changed since the last [`populate_mesh`] call.
    ///
    /// Hosts may skip repopulating clean widgets whose rect is unchanged.
    /// The default keeps stateless widgets always rebuilding.
    ///
    /// [`populate_mesh`]: Widget::populate_mesh
    fn is_dirty(&self) -> bool {
        true
    }
}

// ── Element ───────────────────────────────────────────────────────────────

/// A type-erased widget, the universal child type for hosts.
///
/// Any `Widget` converts to `Element` via `From` / `Into`.
pub struct Element(Box<dyn Widget>);

impl Element {
    pub fn new<W: Widget>(widget: W) -> Self {
        Self(Box::new(widget))
    }

    #[inline]
    pub fn measure(&self, constraints: Constraints) -> Vec2 {
        self.0.measure(constraints)
    }

    #[inline]
    pub fn populate_mesh(&mut self, rect: Rect, mesh: &mut Mesh) {
        self.0.populate_mesh(rect, mesh)
    }

    #[inline]
    pub fn is_dirty(&self) -> bool {
        self.0.is_dirty()
    }
}

impl<W: Widget> From<W> for Element {
    fn from(widget: W) -> Self {
        Self::new(widget)
    }
}
