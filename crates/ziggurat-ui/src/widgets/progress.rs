use ziggurat_engine::coords::{Rect, Vec2};
use ziggurat_engine::mesh::Mesh;
use ziggurat_engine::mesh::bar::{BarParams, tessellate_bar};
use ziggurat_engine::paint::{BlendMode, Color, Gradient, GradientKey, Paint};

use crate::constraints::Constraints;
use crate::widget::Widget;

/// Preferred height when the host imposes no vertical constraint.
const PREFERRED_HEIGHT: f32 = 16.0;

/// Fallback width when the host imposes no horizontal constraint.
const FALLBACK_WIDTH: f32 = 200.0;

/// A non-interactive horizontal progress bar that tessellates its own mesh.
///
/// The bar draws a full-width background quad and a foreground covering the
/// filled fraction `value / max_value`. The foreground paint is a flat
/// color, a smooth gradient, or a run of stepped gradient bands.
///
/// Setters clamp rather than reject: `max_value` and `width_per_point` stay
/// non-negative and `value` inside `[0, max_value]`, so every state change
/// lands on a drawable configuration. Each change marks the mesh dirty; the
/// host repopulates dirty widgets on its next pass.
///
/// # Example
/// ```rust,ignore
/// let mut hp = ProgressBar::new();
/// hp.setup_with(
///     30.0,
///     100.0,
///     Paint::solid(Color::green()),
///     Color::black(),
///     false,
///     1.0,
/// );
/// ```
pub struct ProgressBar {
    value: f32,
    max_value: f32,
    background: Color,
    foreground: Paint,
    use_max_value_for_width: bool,
    width_per_point: f32,
    dirty: bool,
}

impl ProgressBar {
    pub fn new() -> Self {
        Self {
            value: 70.0,
            max_value: 100.0,
            background: Color::black(),
            foreground: Self::default_foreground(),
            use_max_value_for_width: false,
            width_per_point: 1.0,
            dirty: true,
        }
    }

    /// The default fill: a continuous red→green gradient across the bar.
    pub fn default_foreground() -> Paint {
        Paint::Gradient(Gradient::new(
            vec![
                GradientKey::new(0.0, Color::red()),
                GradientKey::new(1.0, Color::green()),
            ],
            BlendMode::Continuous,
        ))
    }

    // ── getters ───────────────────────────────────────────────────────────

    pub fn value(&self) -> f32 { self.value }
    pub fn max_value(&self) -> f32 { self.max_value }
    pub fn background(&self) -> Color { self.background }
    pub fn foreground(&self) -> &Paint { &self.foreground }
    pub fn use_max_value_for_width(&self) -> bool { self.use_max_value_for_width }
    pub fn width_per_point(&self) -> f32 { self.width_per_point }

    // ── setters ───────────────────────────────────────────────────────────
    //
    // Each setter is a no-op when the new value equals the current one;
    // otherwise it assigns and revalidates.

    pub fn set_value(&mut self, value: f32) {
        if self.value == value {
            return;
        }
        self.value = value;
        self.revalidate();
    }

    pub fn set_max_value(&mut self, max_value: f32) {
        if self.max_value == max_value {
            return;
        }
        self.max_value = max_value;
        self.revalidate();
    }

    pub fn set_background(&mut self, background: Color) {
        if self.background == background {
            return;
        }
        self.background = background;
        self.revalidate();
    }

    pub fn set_foreground(&mut self, foreground: Paint) {
        if self.foreground == foreground {
            return;
        }
        self.foreground = foreground;
        self.revalidate();
    }

    pub fn set_use_max_value_for_width(&mut self, use_max_value_for_width: bool) {
        if self.use_max_value_for_width == use_max_value_for_width {
            return;
        }
        self.use_max_value_for_width = use_max_value_for_width;
        self.revalidate();
    }

    pub fn set_width_per_point(&mut self, width_per_point: f32) {
        if self.width_per_point == width_per_point {
            return;
        }
        self.width_per_point = width_per_point;
        self.revalidate();
    }

    /// Set all settings at once with the default foreground and background,
    /// then revalidate once.
    pub fn setup(&mut self, value: f32, max_value: f32) {
        self.setup_with(
            value,
            max_value,
            Self::default_foreground(),
            Color::black(),
            false,
            1.0,
        );
    }

    /// Set all settings at once, then revalidate once.
    pub fn setup_with(
        &mut self,
        value: f32,
        max_value: f32,
        foreground: Paint,
        background: Color,
        use_max_value_for_width: bool,
        width_per_point: f32,
    ) {
        self.value = value;
        self.max_value = max_value;
        self.foreground = foreground;
        self.background = background;
        self.use_max_value_for_width = use_max_value_for_width;
        self.width_per_point = width_per_point;
        self.revalidate();
    }

    /// Clamp every field into its valid range and schedule a rebuild.
    fn revalidate(&mut self) {
        self.width_per_point = self.width_per_point.max(0.0);
        self.max_value = self.max_value.max(0.0);
        self.value = self.value.clamp(0.0, self.max_value);
        self.dirty = true;
    }

    fn bar_params(&self, rect: Rect) -> BarParams<'_> {
        BarParams {
            rect,
            value: self.value,
            max_value: self.max_value,
            background: self.background,
            foreground: &self.foreground,
            use_max_value_for_width: self.use_max_value_for_width,
            width_per_point: self.width_per_point,
        }
    }
}

impl Default for ProgressBar {
    fn default() -> Self {
        Self::new()
    }
}

impl Widget for ProgressBar {
    fn measure(&self, constraints: Constraints) -> Vec2 {
        let width = if self.use_max_value_for_width {
            self.width_per_point * self.max_value
        } else if constraints.max.x.is_finite() {
            constraints.max.x
        } else {
            FALLBACK_WIDTH
        };
        constraints.constrain(Vec2::new(width, PREFERRED_HEIGHT))
    }

    fn populate_mesh(&mut self, rect: Rect, mesh: &mut Mesh) {
        tessellate_bar(&self.bar_params(rect), mesh);
        self.dirty = false;
        log::trace!(
            "progress bar rebuilt: {} vertices, {} triangles",
            mesh.vertices.len(),
            mesh.triangle_count()
        );
    }

    fn is_dirty(&self) -> bool {
        self.dirty
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widget::Element;

    const RECT: Rect = Rect::new(0.0, 0.0, 100.0, 10.0);

    // ── defaults ──────────────────────────────────────────────────────────

    #[test]
    fn defaults_match_documented_values() {
        let bar = ProgressBar::new();
        assert_eq!(bar.value(), 70.0);
        assert_eq!(bar.max_value(), 100.0);
        assert_eq!(bar.background(), Color::black());
        assert_eq!(*bar.foreground(), ProgressBar::default_foreground());
        assert!(!bar.use_max_value_for_width());
        assert_eq!(bar.width_per_point(), 1.0);
        assert!(bar.is_dirty());
    }

    // ── validation ────────────────────────────────────────────────────────

    #[test]
    fn setup_clamps_value_above_max() {
        let mut bar = ProgressBar::new();
        bar.setup(150.0, 100.0);
        assert_eq!(bar.value(), 100.0);
        assert_eq!(bar.max_value(), 100.0);
    }

    #[test]
    fn negative_width_per_point_clamps_to_zero() {
        let mut bar = ProgressBar::new();
        bar.set_width_per_point(-5.0);
        assert_eq!(bar.width_per_point(), 0.0);
    }

    #[test]
    fn lowering_max_value_reclamps_value() {
        let mut bar = ProgressBar::new();
        bar.set_max_value(50.0);
        assert_eq!(bar.value(), 50.0);
    }

    #[test]
    fn negative_max_value_clamps_value_to_zero() {
        let mut bar = ProgressBar::new();
        bar.set_max_value(-10.0);
        assert_eq!(bar.max_value(), 0.0);
        assert_eq!(bar.value(), 0.0);
    }

    // ── dirty tracking ────────────────────────────────────────────────────

    fn clean_bar() -> ProgressBar {
        let mut bar = ProgressBar::new();
        let mut mesh = Mesh::new();
        bar.populate_mesh(RECT, &mut mesh);
        assert!(!bar.is_dirty());
        bar
    }

    #[test]
    fn setting_equal_value_does_not_mark_dirty() {
        let mut bar = clean_bar();
        bar.set_value(70.0);
        bar.set_max_value(100.0);
        bar.set_background(Color::black());
        bar.set_use_max_value_for_width(false);
        bar.set_width_per_point(1.0);
        assert!(!bar.is_dirty());
    }

    #[test]
    fn setters_mark_dirty_and_populate_clears() {
        let mut bar = clean_bar();
        bar.set_value(10.0);
        assert!(bar.is_dirty());

        let mut mesh = Mesh::new();
        bar.populate_mesh(RECT, &mut mesh);
        assert!(!bar.is_dirty());
    }

    #[test]
    fn set_foreground_compares_by_value() {
        let mut bar = clean_bar();
        bar.set_foreground(ProgressBar::default_foreground());
        assert!(!bar.is_dirty());

        bar.set_foreground(Paint::solid(Color::white()));
        assert!(bar.is_dirty());
    }

    // ── measure ───────────────────────────────────────────────────────────

    #[test]
    fn measure_takes_available_width() {
        let bar = ProgressBar::new();
        let size = bar.measure(Constraints::loose(Vec2::new(320.0, 100.0)));
        assert_eq!(size, Vec2::new(320.0, PREFERRED_HEIGHT));
    }

    #[test]
    fn measure_falls_back_when_unbounded() {
        let bar = ProgressBar::new();
        let size = bar.measure(Constraints::unbounded());
        assert_eq!(size, Vec2::new(FALLBACK_WIDTH, PREFERRED_HEIGHT));
    }

    #[test]
    fn measure_uses_max_value_width_when_enabled() {
        let mut bar = ProgressBar::new();
        bar.set_use_max_value_for_width(true);
        bar.set_width_per_point(2.0);
        let size = bar.measure(Constraints::loose(Vec2::new(1000.0, 100.0)));
        assert_eq!(size, Vec2::new(200.0, PREFERRED_HEIGHT));
    }

    // ── mesh output ───────────────────────────────────────────────────────

    #[test]
    fn solid_setup_emits_background_and_fill_quads() {
        let mut bar = ProgressBar::new();
        bar.setup_with(
            30.0,
            100.0,
            Paint::solid(Color::green()),
            Color::black(),
            false,
            1.0,
        );

        let mut mesh = Mesh::new();
        bar.populate_mesh(RECT, &mut mesh);
        assert_eq!(mesh.vertices.len(), 8);
        assert_eq!(mesh.triangle_count(), 4);
    }

    #[test]
    fn works_through_element() {
        let mut element: Element = ProgressBar::new().into();
        assert!(element.is_dirty());

        let size = element.measure(Constraints::loose(Vec2::new(100.0, 20.0)));
        assert_eq!(size, Vec2::new(100.0, PREFERRED_HEIGHT));

        let mut mesh = Mesh::new();
        element.populate_mesh(RECT, &mut mesh);
        assert!(!element.is_dirty());
        assert!(!mesh.is_empty());
    }
}
