//! Crystallographic axis arrows
//!
//! Builds the arrow geometry (cylinder shaft + cone head) for the three
//! normalized cell axes, VMD-style. The host decides where to anchor the
//! arrows on screen; this module only produces model-space primitives at
//! the origin.

use lin_alg::f32::Vec3;

use crate::cell::CrystalBasis;
use crate::primitives::Primitive;

/// Shaft radius
const SHAFT_WIDTH: f32 = 0.06;
/// Shaft length
const SHAFT_LENGTH: f32 = 0.75;
/// Cone head length
const HEAD_LENGTH: f32 = 0.25;
/// Cone base diameter over shaft width (golden ratio, matches the original palette's look)
const HEAD_BASE_RATIO: f32 = 1.618;

/// Components closer to zero than this are snapped to exactly zero
const SNAP_EPS: f32 = 1e-5;

/// Per-axis arrow colors (RGB in [0, 1])
#[derive(Debug, Clone, Copy)]
pub struct AxisColors {
    pub a: [f32; 3],
    pub b: [f32; 3],
    pub c: [f32; 3],
}

impl Default for AxisColors {
    /// Colorblind-safe qualitative palette: a = #d95f02, b = #1b9e77, c = #7570b3
    fn default() -> Self {
        AxisColors {
            a: [0.851, 0.373, 0.008],
            b: [0.106, 0.620, 0.467],
            c: [0.459, 0.439, 0.702],
        }
    }
}

/// Arrow primitives for the three cell axes.
///
/// Each axis direction is the normalized basis column, with near-zero
/// components snapped to 0 so orthogonal cells produce exactly axis-aligned
/// arrows. Six primitives: shaft and head per axis, in a, b, c order.
pub fn cell_axes_primitives(basis: &CrystalBasis, colors: &AxisColors) -> Vec<Primitive> {
    let palette = [colors.a, colors.b, colors.c];
    let mut prims = Vec::with_capacity(6);

    for (i, color) in palette.into_iter().enumerate() {
        let dir = snap(normalize(basis.axis(i)));
        prims.extend(axis_arrow(dir, color));
    }
    prims
}

fn axis_arrow(dir: Vec3, color: [f32; 3]) -> [Primitive; 2] {
    let tip = dir * SHAFT_LENGTH;
    let head = dir * (SHAFT_LENGTH + HEAD_LENGTH);
    [
        Primitive::Cylinder {
            start: Vec3::new(0.0, 0.0, 0.0),
            end: tip,
            radius: SHAFT_WIDTH,
            color1: color,
            color2: color,
        },
        Primitive::Cone {
            start: tip,
            end: head,
            radius1: SHAFT_WIDTH * HEAD_BASE_RATIO,
            radius2: 0.0,
            color1: color,
            color2: color,
        },
    ]
}

fn normalize(v: Vec3) -> Vec3 {
    let norm = (v.x * v.x + v.y * v.y + v.z * v.z).sqrt();
    // Basis columns have edge-length norms, which build() guarantees positive
    v * (1.0 / norm)
}

fn snap(v: Vec3) -> Vec3 {
    let s = |x: f32| if x.abs() < SNAP_EPS { 0.0 } else { x };
    Vec3::new(s(v.x), s(v.y), s(v.z))
}
