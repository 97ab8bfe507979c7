//! Geometry primitives in logical pixels.

mod rect;
mod vec2;

pub use rect::Rect;
pub use vec2::Vec2;
