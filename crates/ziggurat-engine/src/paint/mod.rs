//! Paint model shared between widgets and tessellation.
//!
//! Scope:
//! - color representation (straight-alpha linear RGBA)
//! - keyed gradients with two blend policies
//! - the color-or-gradient paint union
//!
//! Geometry types remain in `coords`.

pub mod color;
pub mod gradient;

pub use color::Color;
pub use gradient::{BlendMode, Gradient, GradientKey};

/// Color source for filling geometry: a flat color or a keyed gradient.
///
/// An explicit tagged union: a gradient paint always carries its gradient,
/// so "gradient mode without a gradient" cannot be expressed.
#[derive(Debug, Clone, PartialEq)]
pub enum Paint {
    Solid(Color),
    Gradient(Gradient),
}

impl Paint {
    #[inline]
    pub fn solid(color: Color) -> Self {
        Paint::Solid(color)
    }

    /// Color at normalized `time`.
    ///
    /// Solid paints ignore `time`; gradients clamp it to [0, 1].
    pub fn evaluate(&self, time: f32) -> Color {
        match self {
            Paint::Solid(color) => *color,
            Paint::Gradient(gradient) => gradient.evaluate(time),
        }
    }
}
