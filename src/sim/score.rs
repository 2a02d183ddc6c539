//! Triangle scoring via Heron's formula

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// The scored triangle: three settled ball centers and their enclosed area
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Triangle {
    pub points: [Vec2; 3],
    pub area: f32,
}

impl Triangle {
    pub fn new(p1: Vec2, p2: Vec2, p3: Vec2) -> Self {
        Self {
            points: [p1, p2, p3],
            area: triangle_area(p1, p2, p3),
        }
    }
}

/// Area of the triangle spanned by three points.
///
/// Heron's formula, guarded by the strict triangle inequality: collinear or
/// coincident points yield 0 rather than a NaN from a negative radicand.
pub fn triangle_area(p1: Vec2, p2: Vec2, p3: Vec2) -> f32 {
    let a = p1.distance(p2);
    let b = p2.distance(p3);
    let c = p3.distance(p1);
    let s = (a + b + c) / 2.0;

    if s > 0.0 && s > a && s > b && s > c {
        (s * (s - a) * (s - b) * (s - c)).sqrt()
    } else {
        0.0
    }
}
