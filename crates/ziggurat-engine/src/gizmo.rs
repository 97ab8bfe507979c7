//! Debug-drawing helpers.
//!
//! The host owns the immediate-mode line renderer; helpers here only
//! generate the geometry for it.

use core::f32::consts::TAU;

use crate::coords::Vec2;

/// Angular step between consecutive outline points, in radians.
const THETA_STEP: f32 = 0.1;

/// Circle outline as an open polyline.
///
/// Points start at angle 0 (`center + (radius, 0)`) and advance by a fixed
/// 0.1 rad step; join the last point back to the first to close the loop.
/// Resolution is fixed; this is a debug aid, not a shape API.
pub fn circle_outline(center: Vec2, radius: f32) -> Vec<Vec2> {
    let mut points = Vec::with_capacity((TAU / THETA_STEP) as usize + 1);
    let mut theta = 0.0_f32;
    while theta < TAU {
        points.push(center + Vec2::new(theta.cos(), theta.sin()) * radius);
        theta += THETA_STEP;
    }
    points
}
