//! Headless preview: tessellates a set of progress bars plus a gizmo
//! overlay and writes the result as an SVG document.
//!
//! Usage: `ziggurat-preview [output.svg]`

mod svg;

use anyhow::Context;
use ziggurat_engine::gizmo;
use ziggurat_engine::logging::init_logging;
use ziggurat_ui::prelude::*;

const VIEW_WIDTH: f32 = 360.0;
const BAR_HEIGHT: f32 = 24.0;
const MARGIN: f32 = 20.0;
const SPACING: f32 = 16.0;
const GIZMO_RADIUS: f32 = 30.0;

fn main() -> anyhow::Result<()> {
    init_logging(None);

    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "preview.svg".to_string());

    let mut bars: Vec<(&str, Element)> = vec![
        ("solid", solid_bar().into()),
        ("blend", blend_bar().into()),
        ("stepped", stepped_bar().into()),
        ("scaled", scaled_bar().into()),
    ];

    let mut doc = svg::Document::new();
    let mut mesh = Mesh::new();
    let mut y = MARGIN;

    for (name, bar) in bars.iter_mut() {
        let constraints = Constraints::loose(Vec2::new(VIEW_WIDTH, BAR_HEIGHT));
        let size = bar.measure(constraints);
        bar.populate_mesh(Rect::from_origin_size(Vec2::new(MARGIN, y), size), &mut mesh);
        log::info!(
            "{name}: {} vertices, {} triangles",
            mesh.vertices.len(),
            mesh.triangle_count()
        );
        doc.mesh(&mesh);
        y += size.y + SPACING;
    }

    let center = Vec2::new(MARGIN + GIZMO_RADIUS, y + GIZMO_RADIUS);
    doc.outline(&gizmo::circle_outline(center, GIZMO_RADIUS), "gray");
    y += 2.0 * GIZMO_RADIUS + MARGIN;

    let document = doc.finish(VIEW_WIDTH + 2.0 * MARGIN, y);
    std::fs::write(&path, document).with_context(|| format!("writing {path}"))?;
    log::info!("wrote {path}");
    Ok(())
}

fn solid_bar() -> ProgressBar {
    let mut bar = ProgressBar::new();
    bar.setup_with(
        30.0,
        100.0,
        Paint::solid(Color::green()),
        Color::black(),
        false,
        1.0,
    );
    bar
}

fn blend_bar() -> ProgressBar {
    let mut bar = ProgressBar::new();
    bar.setup(70.0, 100.0);
    bar
}

fn stepped_bar() -> ProgressBar {
    let mut bar = ProgressBar::new();
    bar.setup_with(
        70.0,
        100.0,
        Paint::Gradient(Gradient::new(
            vec![
                GradientKey::new(0.0, Color::red()),
                GradientKey::new(0.5, Color::rgb(1.0, 1.0, 0.0)),
                GradientKey::new(1.0, Color::green()),
            ],
            BlendMode::Stepped,
        )),
        Color::black(),
        false,
        1.0,
    );
    bar
}

fn scaled_bar() -> ProgressBar {
    let mut bar = ProgressBar::new();
    bar.setup_with(
        45.0,
        120.0,
        Paint::solid(Color::rgb(0.2, 0.6, 1.0)),
        Color::rgb(0.1, 0.1, 0.1),
        true,
        2.5,
    );
    bar
}
