//! Ziggurat UI — self-tessellating widgets on top of `ziggurat-engine`.
//!
//! Widgets own their configuration state and rebuild their vertex/index
//! buffers whenever that state changes; the host drives layout and consumes
//! the resulting meshes.
//!
//! # Quick start
//!
//! ```rust,ignore
//! use ziggurat_ui::prelude::*;
//!
//! let mut bar = ProgressBar::new();
//! bar.setup(30.0, 100.0);
//!
//! // In your frame callback, once layout has assigned a rect:
//! let mut mesh = Mesh::new();
//! if bar.is_dirty() {
//!     bar.populate_mesh(rect, &mut mesh);
//! }
//! // Upload mesh.vertex_bytes() / mesh.index_bytes().
//! ```

pub mod constraints;
pub mod widget;
pub mod widgets;

/// Everything needed to build and host widgets.
pub mod prelude {
    pub use crate::constraints::Constraints;
    pub use crate::widget::{Element, Widget};
    pub use crate::widgets::progress::ProgressBar;

    // Re-export the engine primitives everyone needs.
    pub use ziggurat_engine::coords::{Rect, Vec2};
    pub use ziggurat_engine::mesh::Mesh;
    pub use ziggurat_engine::paint::{BlendMode, Color, Gradient, GradientKey, Paint};
}
